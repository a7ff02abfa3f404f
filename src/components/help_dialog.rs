//! Help dialog listing all keyboard shortcuts

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Key binding table shown in the dialog
const BINDINGS: &[(&str, &str)] = &[
    ("j/k, ↓/↑", "Move session selection"),
    ("g / G", "First / last session"),
    ("Enter, Space", "Expand or collapse session detail"),
    ("Tab / Shift-Tab", "Cycle tag filter"),
    ("1-4", "Filter: ALL / KEYNOTE / WORKSHOP / NETWORKING"),
    ("b", "Buy tickets (not available yet)"),
    ("c", "Add to calendar (not available yet)"),
    ("?", "This help"),
    ("q, Esc", "Quit"),
    ("Ctrl-C", "Quit immediately"),
];

/// Help dialog component
#[derive(Default)]
pub struct HelpDialog {
    /// Scroll offset into the binding table
    pub scroll_offset: usize,
}

impl HelpDialog {
    /// Clamp a scroll offset to the binding table
    pub fn clamped(offset: usize) -> usize {
        offset.min(BINDINGS.len().saturating_sub(1))
    }
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Enter => {
                Some(Action::CloseModal)
            }
            KeyCode::Up | KeyCode::Char('k') => Some(Action::ModalUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::ModalDown),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_height = (BINDINGS.len() as u16 + 4).min(area.height.saturating_sub(2));
        let popup_area = centered_popup(area, 60, popup_height);
        frame.render_widget(Clear, popup_area);

        let key_width = BINDINGS.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
        let mut lines: Vec<Line> = BINDINGS
            .iter()
            .skip(self.scroll_offset)
            .map(|(keys, desc)| {
                Line::from(vec![
                    Span::styled(
                        format!(" {:<width$}  ", keys, width = key_width),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::raw(*desc),
                ])
            })
            .collect();
        lines.push(Line::from(""));
        lines.push(
            Line::from(Span::styled(
                "Esc close   j/k scroll",
                Style::default().fg(Color::DarkGray),
            ))
            .alignment(Alignment::Center),
        );

        let dialog = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Key Bindings ")
                .title_style(
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
        );
        frame.render_widget(dialog, popup_area);

        Ok(())
    }
}
