//! Primary view: the deletion request form.
//!
//! Renders the informational header, the deleted/retained item lists, the
//! reason selector, the email confirmation input, and the submit control.
//! Field values live in the [`DeletionPanel`](crate::panel::DeletionPanel);
//! this component keeps only presentation state (focus, cursors) and emits
//! an action for every edit.

use crate::constants::{
    EMAIL_CONFIRMED_HINT, FORM_SUBTITLE, FORM_TITLE, TWO_COLUMN_MIN_WIDTH, WILL_BE_DELETED, WILL_BE_RETAINED,
};
use crate::icons::IconService;
use crate::panel::{DeletionPanel, DeletionReason};
use crate::ui::components::input::InputState;
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Field currently receiving keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum FormField {
    #[default]
    Reason,
    OtherReason,
    Email,
}

pub struct FormComponent {
    focus: FormField,
    reason_index: Option<usize>,
    other_input: InputState,
    email_input: InputState,

    // Snapshot of panel state, refreshed by the app component
    reason: Option<DeletionReason>,
    email_error: Option<String>,
    email_valid: bool,
    form_valid: bool,
    account_email: String,
    logo_url: String,
    icons: IconService,
}

impl FormComponent {
    pub fn new(account_email: String, logo_url: String, icons: IconService) -> Self {
        Self {
            focus: FormField::default(),
            reason_index: None,
            other_input: InputState::default(),
            email_input: InputState::default(),
            reason: None,
            email_error: None,
            email_valid: false,
            form_valid: false,
            account_email,
            logo_url,
            icons,
        }
    }

    /// Refreshes the rendering snapshot from the authoritative panel state.
    pub fn update_state(&mut self, panel: &DeletionPanel) {
        self.reason = panel.reason();
        self.reason_index = self
            .reason
            .and_then(|r| DeletionReason::ALL.iter().position(|candidate| *candidate == r));
        self.email_error = panel.email_error().map(str::to_string);
        self.email_valid = panel.is_email_valid();
        self.form_valid = panel.is_form_valid();
        self.other_input.sync(panel.other_reason());
        self.email_input.sync(panel.email_confirmation());

        // The free-text field disappears when the reason moves off "Other".
        if self.focus == FormField::OtherReason && self.reason != Some(DeletionReason::Other) {
            self.focus = FormField::Reason;
        }
    }

    fn other_field_visible(&self) -> bool {
        self.reason == Some(DeletionReason::Other)
    }

    fn focus_next(&mut self) {
        self.focus = match self.focus {
            FormField::Reason if self.other_field_visible() => FormField::OtherReason,
            FormField::Reason => FormField::Email,
            FormField::OtherReason => FormField::Email,
            FormField::Email => FormField::Reason,
        };
    }

    fn focus_previous(&mut self) {
        self.focus = match self.focus {
            FormField::Reason => FormField::Email,
            FormField::OtherReason => FormField::Reason,
            FormField::Email if self.other_field_visible() => FormField::OtherReason,
            FormField::Email => FormField::Reason,
        };
    }

    fn select_reason(&mut self, delta: i64) -> Action {
        let len = DeletionReason::ALL.len() as i64;
        let next = match self.reason_index {
            None => 0,
            Some(index) => (index as i64 + delta).clamp(0, len - 1),
        };
        self.reason_index = Some(next as usize);
        Action::SetReason(DeletionReason::ALL[next as usize])
    }

    fn field_style(&self, field: FormField) -> Style {
        if self.focus == field {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Gray)
        }
    }

    fn input_paragraph<'a>(&self, input: &'a InputState, title: &str, field: FormField) -> Paragraph<'a> {
        let focused = self.focus == field;
        let display = if focused {
            input.display_with_cursor()
        } else {
            input.value().to_string()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} ", title))
            .title_style(Style::default().fg(Color::White))
            .style(self.field_style(field));

        Paragraph::new(display).block(block).style(Style::default().fg(Color::White))
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::vertical([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)]).split(area);

        let logo = Paragraph::new(self.logo_url.as_str()).style(Style::default().fg(Color::DarkGray));
        f.render_widget(logo, chunks[0]);

        let title = Paragraph::new(Line::from(Span::styled(
            format!("{} {}", self.icons.warning(), FORM_TITLE),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
        f.render_widget(title, chunks[1]);

        let subtitle = Paragraph::new(FORM_SUBTITLE)
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true });
        f.render_widget(subtitle, chunks[2]);
    }

    fn render_item_lists(&self, f: &mut Frame, area: Rect) {
        let deleted_items: Vec<ListItem> = std::iter::once(ListItem::new(Span::styled(
            format!("{} Will be deleted", self.icons.error()),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )))
        .chain(WILL_BE_DELETED.iter().map(|item| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("  {} ", self.icons.bullet()), Style::default().fg(Color::Red)),
                Span::styled(*item, Style::default().fg(Color::Gray)),
            ]))
        }))
        .collect();

        let retained_items: Vec<ListItem> = std::iter::once(ListItem::new(Span::styled(
            format!("{} Will be retained", self.icons.success()),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )))
        .chain(WILL_BE_RETAINED.iter().map(|item| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("  {} ", self.icons.bullet()), Style::default().fg(Color::Green)),
                Span::styled(*item, Style::default().fg(Color::Gray)),
            ]))
        }))
        .collect();

        if area.width >= TWO_COLUMN_MIN_WIDTH {
            let columns = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(area);
            f.render_widget(List::new(deleted_items), columns[0]);
            f.render_widget(List::new(retained_items), columns[1]);
        } else {
            let rows = Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).split(area);
            f.render_widget(List::new(deleted_items), rows[0]);
            f.render_widget(List::new(retained_items), rows[1]);
        }
    }

    fn render_reason_selector(&self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = DeletionReason::ALL
            .iter()
            .enumerate()
            .map(|(index, reason)| {
                let selected = self.reason_index == Some(index);
                let marker = if selected { ">" } else { " " };
                let style = if selected {
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                ListItem::new(Span::styled(format!("{} {}", marker, reason.label()), style))
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Reason for deletion (required) ")
            .title_style(Style::default().fg(Color::White))
            .style(self.field_style(FormField::Reason));

        f.render_widget(List::new(items).block(block), area);
    }

    fn render_email_status(&self, f: &mut Frame, area: Rect) {
        let line = if let Some(error) = &self.email_error {
            Line::from(Span::styled(error.clone(), Style::default().fg(Color::Red)))
        } else if self.email_valid && !self.email_input.is_empty() {
            Line::from(Span::styled(
                format!("{} {}", self.icons.success(), EMAIL_CONFIRMED_HINT),
                Style::default().fg(Color::Green),
            ))
        } else {
            Line::from("")
        };
        f.render_widget(Paragraph::new(line), area);
    }

    fn render_submit(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(area);

        let submit = if self.form_valid {
            Span::styled(
                format!("{} Delete My Account", self.icons.warning()),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled("Delete My Account", Style::default().fg(Color::DarkGray))
        };
        f.render_widget(Paragraph::new(Line::from(submit)).alignment(Alignment::Center), chunks[0]);

        let instructions = Line::from(vec![
            Span::styled("Tab", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::styled(" Field", Style::default().fg(Color::Gray)),
            Span::styled(" • ", Style::default().fg(Color::Gray)),
            Span::styled("↑/↓", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::styled(" Reason", Style::default().fg(Color::Gray)),
            Span::styled(" • ", Style::default().fg(Color::Gray)),
            Span::styled("Enter", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Span::styled(" Delete account", Style::default().fg(Color::Gray)),
            Span::styled(" • ", Style::default().fg(Color::Gray)),
            Span::styled("Esc", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::styled(" Quit", Style::default().fg(Color::Gray)),
        ]);
        f.render_widget(Paragraph::new(instructions).alignment(Alignment::Center), chunks[1]);
    }
}

impl Component for FormComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Tab => {
                self.focus_next();
                Action::None
            }
            KeyCode::BackTab => {
                self.focus_previous();
                Action::None
            }
            KeyCode::Enter => Action::RequestDelete,
            KeyCode::Up if self.focus == FormField::Reason => self.select_reason(-1),
            KeyCode::Down if self.focus == FormField::Reason => self.select_reason(1),
            _ => match self.focus {
                FormField::Reason => Action::None,
                FormField::OtherReason => {
                    if self.other_input.handle_key(key) {
                        Action::SetOtherReason(self.other_input.value().to_string())
                    } else {
                        Action::None
                    }
                }
                FormField::Email => {
                    if self.email_input.handle_key(key) {
                        Action::SetEmailConfirmation(self.email_input.value().to_string())
                    } else {
                        Action::None
                    }
                }
            },
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let panel = LayoutManager::panel_rect(rect);

        let mut constraints = vec![
            Constraint::Length(4), // header
            Constraint::Length(1),
            Constraint::Length(5), // deleted/retained lists
            Constraint::Length(1),
            Constraint::Length(8), // reason selector
        ];
        if self.other_field_visible() {
            constraints.push(Constraint::Length(3));
        }
        constraints.extend([
            Constraint::Length(3), // email input
            Constraint::Length(1), // email status
            Constraint::Length(2), // submit + instructions
            Constraint::Min(0),
        ]);

        let chunks = Layout::vertical(constraints).split(panel);
        let mut index = 0;
        let mut next = || {
            let rect = chunks[index];
            index += 1;
            rect
        };

        self.render_header(f, next());
        next(); // spacer
        self.render_item_lists(f, next());
        next(); // spacer
        self.render_reason_selector(f, next());

        if self.other_field_visible() {
            let other = self.input_paragraph(&self.other_input, "Please specify", FormField::OtherReason);
            f.render_widget(other, next());
        }

        let email_title = format!("Type your email to confirm ({})", self.account_email);
        let email = self.input_paragraph(&self.email_input, &email_title, FormField::Email);
        f.render_widget(email, next());

        self.render_email_status(f, next());
        self.render_submit(f, next());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    fn component() -> FormComponent {
        FormComponent::new(
            "user@example.com".to_string(),
            "https://example.com/logo.svg".to_string(),
            IconService::default(),
        )
    }

    #[test]
    fn arrow_keys_emit_reason_selection() {
        let mut form = component();
        let action = form.handle_key_events(key(KeyCode::Down));
        assert!(matches!(action, Action::SetReason(DeletionReason::NoLongerNeeded)));

        let mut panel = DeletionPanel::new("user@example.com");
        panel.set_reason(DeletionReason::NoLongerNeeded);
        form.update_state(&panel);

        let action = form.handle_key_events(key(KeyCode::Down));
        assert!(matches!(action, Action::SetReason(DeletionReason::BetterAlternative)));
    }

    #[test]
    fn typing_in_email_field_emits_confirmation_updates() {
        let mut form = component();
        form.handle_key_events(key(KeyCode::Tab)); // Reason -> Email (no Other field yet)

        let action = form.handle_key_events(key(KeyCode::Char('u')));
        match action {
            Action::SetEmailConfirmation(value) => assert_eq!(value, "u"),
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn enter_requests_deletion() {
        let mut form = component();
        assert!(matches!(form.handle_key_events(key(KeyCode::Enter)), Action::RequestDelete));
    }

    #[test]
    fn other_field_joins_focus_cycle_only_when_visible() {
        let mut form = component();
        let mut panel = DeletionPanel::new("user@example.com");
        panel.set_reason(DeletionReason::Other);
        form.update_state(&panel);

        form.handle_key_events(key(KeyCode::Tab));
        let action = form.handle_key_events(key(KeyCode::Char('x')));
        assert!(matches!(action, Action::SetOtherReason(_)));
    }
}
