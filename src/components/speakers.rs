//! Featured speakers row

use crate::model::conference::Speaker;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the featured speakers as a single row of name/role pairs
pub fn draw_speakers_row(frame: &mut Frame, area: Rect, speakers: &[Speaker]) {
    let mut spans = Vec::new();
    for (i, speaker) in speakers.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            speaker.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" ({})", speaker.role),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let row = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Featured Speakers "),
    );
    frame.render_widget(row, area);
}
