//! Layout management and calculations

use crate::constants::PANEL_MAX_WIDTH;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Centered column for the main panel, capped at the panel max width.
    #[must_use]
    pub fn panel_rect(area: Rect) -> Rect {
        let width = area.width.min(PANEL_MAX_WIDTH);
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        Rect::new(x, area.y, width, area.height)
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(height_lines),
                Constraint::Min(0),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_rect_is_centered_and_capped() {
        let area = Rect::new(0, 0, 120, 40);
        let rect = LayoutManager::panel_rect(area);
        assert_eq!(rect.width, PANEL_MAX_WIDTH);
        assert_eq!(rect.x, (120 - PANEL_MAX_WIDTH) / 2);
    }

    #[test]
    fn panel_rect_shrinks_with_narrow_terminals() {
        let area = Rect::new(0, 0, 50, 40);
        let rect = LayoutManager::panel_rect(area);
        assert_eq!(rect.width, 50);
        assert_eq!(rect.x, 0);
    }
}
