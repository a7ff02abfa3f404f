//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main screen layout areas, top to bottom in feed order
pub struct MainLayout {
    pub info: Rect,
    pub speakers: Rect,
    pub filter: Rect,
    pub sessions: Rect,
    pub reviews: Rect,
    pub bottom: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = (area.width.saturating_sub(width)) / 2;
    let popup_y = (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Calculate main screen layout
///
/// The session list takes whatever height remains after the fixed
/// sections; on very short terminals the reviews pane collapses first.
pub fn calculate_main_layout(area: Rect) -> MainLayout {
    let reviews_height = if area.height < 24 { 0 } else { 5 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),              // Conference info card
            Constraint::Length(3),              // Featured speakers row
            Constraint::Length(3),              // Filter control
            Constraint::Min(5),                 // Session list
            Constraint::Length(reviews_height), // Reviews
            Constraint::Length(3),              // Action hooks + key hints
        ])
        .split(area);

    MainLayout {
        info: chunks[0],
        speakers: chunks[1],
        filter: chunks[2],
        sessions: chunks[3],
        reviews: chunks[4],
        bottom: chunks[5],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_popup_fits_in_area() {
        let area = Rect::new(0, 0, 80, 24);
        let popup = centered_popup(area, 50, 12);
        assert_eq!(popup.width, 50);
        assert_eq!(popup.height, 12);
        assert_eq!(popup.x, 15);
        assert_eq!(popup.y, 6);
    }

    #[test]
    fn test_centered_popup_clamps_to_small_area() {
        let area = Rect::new(0, 0, 40, 10);
        let popup = centered_popup(area, 50, 12);
        assert_eq!(popup.width, 40);
        assert_eq!(popup.height, 10);
    }

    #[test]
    fn test_reviews_collapse_on_short_terminals() {
        let layout = calculate_main_layout(Rect::new(0, 0, 80, 20));
        assert_eq!(layout.reviews.height, 0);

        let layout = calculate_main_layout(Rect::new(0, 0, 80, 30));
        assert_eq!(layout.reviews.height, 5);
    }
}
