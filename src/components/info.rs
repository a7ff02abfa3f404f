//! Conference info card

use crate::model::conference::ConferenceInfo;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the conference info card (name, location, blurb, live indicator)
pub fn draw_info_card(frame: &mut Frame, area: Rect, info: &ConferenceInfo) {
    let mut lines = vec![
        Line::from(Span::styled(
            format!("{} | {}", info.location, info.distance),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::raw(info.blurb.clone())),
    ];

    if info.live_updates {
        lines.push(Line::from(Span::styled(
            "● Live Updates Active",
            Style::default().fg(Color::Green),
        )));
    } else {
        lines.push(Line::from(""));
    }

    let card = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", info.name))
            .title_style(
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
    );
    frame.render_widget(card, area);
}
