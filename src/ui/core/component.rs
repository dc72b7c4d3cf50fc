use super::actions::Action;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// Base trait for the panel's views.
///
/// Components translate key events into [`Action`]s and render themselves
/// into a frame region. They never mutate the panel state directly; the app
/// component applies the returned actions and pushes fresh state back down.
pub trait Component {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action;

    fn render(&mut self, f: &mut Frame, rect: Rect);
}
