//! Terminal "deletion scheduled" screen.
//!
//! Pure presentation: success banner, the confirmation-email preview, and
//! the cancellation notice. Driven entirely by the account email and the
//! preformatted deletion date.

use crate::constants::{EMAIL_PREVIEW_SUBJECT, RESULT_TITLE};
use crate::icons::IconService;
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

pub struct ResultViewComponent {
    user_email: String,
    deletion_date: String,
    icons: IconService,
}

impl ResultViewComponent {
    pub fn new(user_email: String, deletion_date: String, icons: IconService) -> Self {
        Self {
            user_email,
            deletion_date,
            icons,
        }
    }

    fn email_preview(&self) -> Vec<Line<'_>> {
        let header_style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
        let body_style = Style::default().fg(Color::Gray);

        vec![
            Line::from(Span::styled(
                format!("{} Confirmation Email Preview", self.icons.mail()),
                header_style,
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("To: ", header_style),
                Span::styled(self.user_email.as_str(), body_style),
            ]),
            Line::from(vec![
                Span::styled("Subject: ", header_style),
                Span::styled(EMAIL_PREVIEW_SUBJECT, body_style),
            ]),
            Line::from(""),
            Line::from(Span::styled("Hello,", body_style)),
            Line::from(Span::styled(
                "This email confirms that your account deletion request has been received and scheduled.",
                body_style,
            )),
            Line::from(vec![
                Span::styled("Deletion Date: ", header_style),
                Span::styled(self.deletion_date.as_str(), body_style),
            ]),
            Line::from(Span::styled(
                "You can cancel this request by logging into your account before the scheduled deletion date.",
                body_style,
            )),
            Line::from(Span::styled(
                "If you have any questions, please contact our support team.",
                body_style,
            )),
            Line::from(""),
            Line::from(Span::styled("Best regards,", body_style)),
            Line::from(Span::styled("The Support Team", body_style)),
        ]
    }
}

impl Component for ResultViewComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter => Action::Quit,
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let panel = LayoutManager::panel_rect(rect);

        let outer = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Green));
        let inner = Rect::new(
            panel.x + 2,
            panel.y + 1,
            panel.width.saturating_sub(4),
            panel.height.saturating_sub(2),
        );
        f.render_widget(outer, panel);

        let chunks = Layout::vertical([
            Constraint::Length(3),  // banner
            Constraint::Length(16), // email preview
            Constraint::Length(3),  // cancellation notice
            Constraint::Length(1),  // exit hint
            Constraint::Min(0),
        ])
        .split(inner);

        let banner = Paragraph::new(vec![
            Line::from(Span::styled(
                format!("{} {}", self.icons.success(), RESULT_TITLE),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("Your account will be permanently deleted on {}", self.deletion_date),
                Style::default().fg(Color::Gray),
            )),
        ])
        .alignment(Alignment::Center);
        f.render_widget(banner, chunks[0]);

        let preview = Paragraph::new(self.email_preview())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .style(Style::default().fg(Color::Gray)),
            )
            .wrap(Wrap { trim: true });
        f.render_widget(preview, chunks[1]);

        let notice = Paragraph::new(Line::from(vec![
            Span::styled("Important: ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::styled(
                format!(
                    "You can cancel this deletion request by logging in before {}.",
                    self.deletion_date
                ),
                Style::default().fg(Color::Gray),
            ),
        ]))
        .wrap(Wrap { trim: true });
        f.render_widget(notice, chunks[2]);

        let hint = Paragraph::new(Span::styled(
            "Press q or Esc to exit",
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center);
        f.render_widget(hint, chunks[3]);
    }
}
