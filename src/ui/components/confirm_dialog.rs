//! Confirmation modal: the secondary gate before the deletion commits.
//!
//! The user must type the literal `DELETE` token. While the deletion
//! request is in flight every trigger is disabled and a spinner line is
//! shown in place of the shortcut instructions.

use crate::constants::{CONFIRMATION_TOKEN, MODAL_DELETING, MODAL_SUBTITLE, MODAL_TITLE};
use crate::icons::IconService;
use crate::panel::{DeletionPanel, PanelPhase};
use crate::ui::components::input::InputState;
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub struct ConfirmDialogComponent {
    token_input: InputState,

    // Snapshot of panel state, refreshed by the app component
    account_email: String,
    reason_text: String,
    token_valid: bool,
    deleting: bool,
    error: Option<String>,
    icons: IconService,
}

impl ConfirmDialogComponent {
    pub fn new(icons: IconService) -> Self {
        Self {
            token_input: InputState::default(),
            account_email: String::new(),
            reason_text: String::new(),
            token_valid: false,
            deleting: false,
            error: None,
            icons,
        }
    }

    /// Refreshes the rendering snapshot from the authoritative panel state.
    pub fn update_state(&mut self, panel: &DeletionPanel) {
        self.token_input.sync(panel.confirmation_input());
        self.account_email = panel.account_email().to_string();
        self.reason_text = panel.reason_text().unwrap_or_default();
        self.token_valid = panel.is_confirmation_valid();
        self.deleting = panel.phase() == PanelPhase::Deleting;
        self.error = panel.modal_error().map(str::to_string);
    }

    fn render_instructions(&self, f: &mut Frame, area: Rect) {
        let line = if self.deleting {
            Line::from(Span::styled(
                format!("{} {}...", self.icons.spinner(), MODAL_DELETING),
                Style::default().fg(Color::Yellow),
            ))
        } else {
            let confirm_style = if self.token_valid {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(vec![
                Span::styled("Enter", confirm_style),
                Span::styled(" Delete forever", Style::default().fg(Color::Gray)),
                Span::styled(" • ", Style::default().fg(Color::Gray)),
                Span::styled("Esc", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
                Span::styled(" Cancel", Style::default().fg(Color::Gray)),
            ])
        };
        f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
    }
}

impl Component for ConfirmDialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // No re-entrancy: the in-flight request can be neither cancelled nor
        // re-confirmed.
        if self.deleting {
            return Action::None;
        }

        match key.code {
            KeyCode::Esc => Action::CancelConfirmation,
            KeyCode::Enter => Action::ConfirmDelete,
            _ => {
                if self.token_input.handle_key(key) {
                    Action::SetConfirmationInput(self.token_input.value().to_string())
                } else {
                    Action::None
                }
            }
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let height = if self.error.is_some() { 15 } else { 13 };
        let dialog_area = LayoutManager::centered_rect_lines(60, height, rect);
        f.render_widget(Clear, dialog_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} {} ", self.icons.warning(), MODAL_TITLE))
            .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
            .style(Style::default().fg(Color::Red));
        f.render_widget(block, dialog_area);

        let content_area = Rect::new(
            dialog_area.x + 2,
            dialog_area.y + 1,
            dialog_area.width.saturating_sub(4),
            dialog_area.height.saturating_sub(2),
        );

        let mut constraints = vec![
            Constraint::Length(2), // subtitle
            Constraint::Length(3), // summary
            Constraint::Length(3), // token input
        ];
        if self.error.is_some() {
            constraints.push(Constraint::Length(2));
        }
        constraints.extend([Constraint::Length(1), Constraint::Min(0)]);
        let chunks = Layout::vertical(constraints).split(content_area);

        let subtitle = Paragraph::new(MODAL_SUBTITLE)
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true });
        f.render_widget(subtitle, chunks[0]);

        let summary = Paragraph::new(vec![
            Line::from(Span::styled(
                "You are about to permanently delete:",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("  {} Account: {}", self.icons.bullet(), self.account_email),
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                format!("  {} Reason: {}", self.icons.bullet(), self.reason_text),
                Style::default().fg(Color::Gray),
            )),
        ]);
        f.render_widget(summary, chunks[1]);

        let display = if self.deleting {
            self.token_input.value().to_string()
        } else {
            self.token_input.display_with_cursor()
        };
        let input_block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" Type {} to confirm ", CONFIRMATION_TOKEN))
            .title_style(Style::default().fg(Color::White))
            .style(Style::default().fg(Color::Gray));
        let input = Paragraph::new(display)
            .block(input_block)
            .style(Style::default().fg(Color::White));
        f.render_widget(input, chunks[2]);

        let mut index = 3;
        if let Some(error) = &self.error {
            let error_line = Paragraph::new(format!("{} {}", self.icons.error(), error))
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: true });
            f.render_widget(error_line, chunks[index]);
            index += 1;
        }

        self.render_instructions(f, chunks[index]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::DeletionReason;
    use crossterm::event::KeyCode;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    fn pending_panel() -> DeletionPanel {
        let mut panel = DeletionPanel::new("user@example.com");
        panel.set_reason(DeletionReason::TooExpensive);
        panel.set_email_confirmation("user@example.com".to_string());
        panel.request_delete();
        panel
    }

    #[test]
    fn typing_emits_confirmation_input() {
        let mut dialog = ConfirmDialogComponent::new(IconService::default());
        dialog.update_state(&pending_panel());

        let action = dialog.handle_key_events(key(KeyCode::Char('D')));
        match action {
            Action::SetConfirmationInput(value) => assert_eq!(value, "D"),
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn esc_cancels_while_pending() {
        let mut dialog = ConfirmDialogComponent::new(IconService::default());
        dialog.update_state(&pending_panel());
        assert!(matches!(dialog.handle_key_events(key(KeyCode::Esc)), Action::CancelConfirmation));
    }

    #[test]
    fn all_keys_ignored_while_deleting() {
        let mut panel = pending_panel();
        panel.set_confirmation_input("DELETE".to_string());
        panel.confirm_delete();

        let mut dialog = ConfirmDialogComponent::new(IconService::default());
        dialog.update_state(&panel);

        assert!(matches!(dialog.handle_key_events(key(KeyCode::Esc)), Action::None));
        assert!(matches!(dialog.handle_key_events(key(KeyCode::Enter)), Action::None));
        assert!(matches!(dialog.handle_key_events(key(KeyCode::Char('x'))), Action::None));
    }
}
