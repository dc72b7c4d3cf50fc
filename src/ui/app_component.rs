//! Top-level component wiring the panel state machine to the views.

use crate::config::Config;
use crate::icons::IconService;
use crate::panel::{DeletionPanel, PanelPhase};
use crate::service::DeletionService;
use crate::ui::components::{ConfirmDialogComponent, FormComponent, ResultViewComponent};
use crate::ui::core::{Action, Component, EventType, TaskManager};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Owns the [`DeletionPanel`] and routes events to whichever view the
/// current phase puts in front of the user.
pub struct AppComponent {
    // Component composition
    form: FormComponent,
    confirm_dialog: ConfirmDialogComponent,
    result_view: ResultViewComponent,

    // Application state
    panel: DeletionPanel,

    // Services
    service: Arc<dyn DeletionService>,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(config: &Config, service: Arc<dyn DeletionService>) -> Self {
        let icons = IconService::new(config.ui.icon_theme);
        let panel = DeletionPanel::new(config.account.user_email.clone());
        let (task_manager, background_action_rx) = TaskManager::new();

        let form = FormComponent::new(
            config.account.user_email.clone(),
            config.account.logo_url.clone(),
            icons.clone(),
        );
        let confirm_dialog = ConfirmDialogComponent::new(icons.clone());
        let result_view = ResultViewComponent::new(
            config.account.user_email.clone(),
            config.account.deletion_date.clone(),
            icons,
        );

        let mut app = Self {
            form,
            confirm_dialog,
            result_view,
            panel,
            service,
            task_manager,
            background_action_rx,
            should_quit: false,
        };
        app.sync_component_data();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn phase(&self) -> PanelPhase {
        self.panel.phase()
    }

    #[cfg(test)]
    pub fn panel(&self) -> &DeletionPanel {
        &self.panel
    }

    /// Push the authoritative panel state down into the views.
    fn sync_component_data(&mut self) {
        self.form.update_state(&self.panel);
        self.confirm_dialog.update_state(&self.panel);
    }

    fn route_key(&mut self, key: KeyEvent) -> Action {
        // Ctrl+C quits from anywhere, including mid-deletion.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        match self.panel.phase() {
            PanelPhase::Editing => {
                let action = self.form.handle_key_events(key);
                if matches!(action, Action::None) && key.code == KeyCode::Esc {
                    Action::Quit
                } else {
                    action
                }
            }
            PanelPhase::ConfirmPending | PanelPhase::Deleting => self.confirm_dialog.handle_key_events(key),
            PanelPhase::Deleted => self.result_view.handle_key_events(key),
        }
    }

    /// Process a single event through the component hierarchy.
    pub fn handle_event(&mut self, event: EventType) {
        if let EventType::Key(key) = event {
            let action = self.route_key(key);
            self.apply_action(action);
        }
    }

    /// Apply an action to the panel state machine.
    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::SetReason(reason) => self.panel.set_reason(reason),
            Action::SetOtherReason(text) => self.panel.set_other_reason(text),
            Action::SetEmailConfirmation(value) => self.panel.set_email_confirmation(value),
            Action::RequestDelete => {
                if self.panel.request_delete() {
                    log::info!("deletion requested, opening confirmation modal");
                }
            }
            Action::SetConfirmationInput(value) => self.panel.set_confirmation_input(value),
            Action::ConfirmDelete => {
                if self.panel.confirm_delete() {
                    log::info!("confirmation token accepted, starting deletion request");
                    self.spawn_deletion();
                }
            }
            Action::CancelConfirmation => self.panel.cancel_confirmation(),
            Action::DeletionScheduled(receipt) => {
                log::info!(
                    "deletion scheduled for {} (request id {})",
                    receipt.scheduled_for,
                    receipt.request_id
                );
                self.panel.deletion_scheduled();
            }
            Action::DeletionFailed(message) => {
                log::warn!("deletion request failed: {}", message);
                self.panel.deletion_failed(message);
            }
            Action::Quit => self.should_quit = true,
            Action::None => {}
        }

        self.sync_component_data();
    }

    fn spawn_deletion(&mut self) {
        let reason = self
            .panel
            .reason_text()
            .unwrap_or_else(|| "Unspecified".to_string());
        self.task_manager.spawn_deletion(
            Arc::clone(&self.service),
            self.panel.account_email().to_string(),
            reason,
        );
    }

    /// Drain completions reported by background tasks.
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        while let Ok(action) = self.background_action_rx.try_recv() {
            actions.push(action);
        }

        self.task_manager.cleanup_finished_tasks();
        actions
    }

    pub fn render(&mut self, f: &mut Frame, rect: Rect) {
        match self.panel.phase() {
            PanelPhase::Deleted => self.result_view.render(f, rect),
            PanelPhase::Editing => self.form.render(f, rect),
            PanelPhase::ConfirmPending | PanelPhase::Deleting => {
                // Modal overlays the form it was opened from.
                self.form.render(f, rect);
                self.confirm_dialog.render(f, rect);
            }
        }
    }
}
