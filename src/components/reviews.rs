//! Review cards

use crate::model::conference::Review;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate review text so the line fits the pane width
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width.saturating_sub(1) {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Draw the reviews pane, one review per line
pub fn draw_reviews(frame: &mut Frame, area: Rect, reviews: &[Review]) {
    if area.height == 0 {
        return;
    }

    let name_width = reviews.iter().map(|r| r.name.width()).max().unwrap_or(0);
    let inner_width = area.width.saturating_sub(2) as usize;

    let lines: Vec<Line> = reviews
        .iter()
        .map(|review| {
            let stars = review.stars_display();
            // name + stars + separators eat into the text budget
            let text_budget = inner_width.saturating_sub(name_width + stars.width() + 6);
            Line::from(vec![
                Span::styled(
                    format!(" {:<width$}", review.name, width = name_width),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  {}  ", stars), Style::default().fg(Color::Yellow)),
                Span::styled(
                    truncate_to_width(&review.text, text_budget),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();

    let pane = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Reviews "));
    frame.render_widget(pane, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate_to_width("Loved the keynote!", 40), "Loved the keynote!");
    }

    #[test]
    fn test_truncate_long_text_ends_with_ellipsis() {
        let truncated = truncate_to_width("Great event! Well-organized.", 10);
        assert!(truncated.ends_with('…'));
        assert!(truncated.width() <= 10);
    }
}
