//! Form state and phase transitions for the account deletion panel.
//!
//! [`DeletionPanel`] is the single source of truth for everything the user
//! has typed and for the current [`PanelPhase`]. Validity flags are derived
//! on every read rather than cached, so they can never go stale relative to
//! the fields they are computed from.

use crate::constants::{CONFIRMATION_TOKEN, EMAIL_MISMATCH_ERROR};

/// Reasons offered in the deletion form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionReason {
    NoLongerNeeded,
    BetterAlternative,
    TooExpensive,
    PrivacyConcerns,
    TechnicalIssues,
    Other,
}

impl DeletionReason {
    pub const ALL: [DeletionReason; 6] = [
        DeletionReason::NoLongerNeeded,
        DeletionReason::BetterAlternative,
        DeletionReason::TooExpensive,
        DeletionReason::PrivacyConcerns,
        DeletionReason::TechnicalIssues,
        DeletionReason::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DeletionReason::NoLongerNeeded => "No longer need the service",
            DeletionReason::BetterAlternative => "Found a better alternative",
            DeletionReason::TooExpensive => "Too expensive",
            DeletionReason::PrivacyConcerns => "Privacy concerns",
            DeletionReason::TechnicalIssues => "Technical issues",
            DeletionReason::Other => "Other",
        }
    }
}

/// Lifecycle of the panel. Exactly one variant is active at a time, which
/// rules out the contradictory flag combinations an implicit boolean
/// encoding would allow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelPhase {
    #[default]
    Editing,
    ConfirmPending,
    Deleting,
    Deleted,
}

/// All user-entered state for the deletion flow plus the current phase.
///
/// Transitions:
///
/// ```text
/// Editing --(request_delete, valid)--> ConfirmPending
/// ConfirmPending --(cancel_confirmation)--> Editing
/// ConfirmPending --(confirm_delete, exact token)--> Deleting
/// Deleting --(deletion_scheduled)--> Deleted
/// Deleting --(deletion_failed)--> ConfirmPending
/// ```
///
/// `Deleting` disables both the cancel and the confirm triggers, so at most
/// one deletion request can ever be in flight.
#[derive(Debug, Clone)]
pub struct DeletionPanel {
    account_email: String,
    reason: Option<DeletionReason>,
    other_reason: String,
    email_confirmation: String,
    confirmation_input: String,
    email_error: Option<String>,
    modal_error: Option<String>,
    phase: PanelPhase,
}

impl DeletionPanel {
    pub fn new(account_email: impl Into<String>) -> Self {
        Self {
            account_email: account_email.into(),
            reason: None,
            other_reason: String::new(),
            email_confirmation: String::new(),
            confirmation_input: String::new(),
            email_error: None,
            modal_error: None,
            phase: PanelPhase::default(),
        }
    }

    pub fn phase(&self) -> PanelPhase {
        self.phase
    }

    pub fn account_email(&self) -> &str {
        &self.account_email
    }

    pub fn reason(&self) -> Option<DeletionReason> {
        self.reason
    }

    pub fn other_reason(&self) -> &str {
        &self.other_reason
    }

    pub fn email_confirmation(&self) -> &str {
        &self.email_confirmation
    }

    pub fn confirmation_input(&self) -> &str {
        &self.confirmation_input
    }

    pub fn email_error(&self) -> Option<&str> {
        self.email_error.as_deref()
    }

    pub fn modal_error(&self) -> Option<&str> {
        self.modal_error.as_deref()
    }

    /// Human-readable reason used when submitting the deletion request.
    /// Falls back to the selected label when "Other" has no free text.
    pub fn reason_text(&self) -> Option<String> {
        let reason = self.reason?;
        if reason == DeletionReason::Other && !self.other_reason.trim().is_empty() {
            Some(format!("Other: {}", self.other_reason.trim()))
        } else {
            Some(reason.label().to_string())
        }
    }

    pub fn set_reason(&mut self, reason: DeletionReason) {
        // Free text typed for a previous "Other" selection stays stored but
        // unused when another reason is picked.
        self.reason = Some(reason);
    }

    pub fn set_other_reason(&mut self, text: String) {
        self.other_reason = text;
    }

    /// Updates the email confirmation field. Any active mismatch error is
    /// cleared even if the new value is still invalid.
    pub fn set_email_confirmation(&mut self, value: String) {
        self.email_confirmation = value;
        self.email_error = None;
    }

    pub fn set_confirmation_input(&mut self, value: String) {
        self.confirmation_input = value;
    }

    /// Trimmed, case-insensitive equality with the account email. Unicode
    /// lowercasing, so non-ASCII mailboxes compare correctly.
    pub fn is_email_valid(&self) -> bool {
        self.email_confirmation.trim().to_lowercase() == self.account_email.trim().to_lowercase()
    }

    pub fn is_form_valid(&self) -> bool {
        self.reason.is_some() && self.is_email_valid()
    }

    /// Exact, case-sensitive match against the literal token. `"delete"` or
    /// `"DELETE "` must not pass.
    pub fn is_confirmation_valid(&self) -> bool {
        self.confirmation_input == CONFIRMATION_TOKEN
    }

    /// Attempts to move from `Editing` to `ConfirmPending`.
    ///
    /// When the form is invalid the phase is untouched; the mismatch error
    /// is shown only when the email is the failing condition. A missing
    /// reason keeps the submit control inert without any message.
    ///
    /// Returns `true` when the transition happened.
    pub fn request_delete(&mut self) -> bool {
        if self.phase != PanelPhase::Editing {
            return false;
        }
        if !self.is_form_valid() {
            if !self.is_email_valid() {
                self.email_error = Some(EMAIL_MISMATCH_ERROR.to_string());
            }
            return false;
        }
        self.email_error = None;
        self.phase = PanelPhase::ConfirmPending;
        true
    }

    /// Attempts to move from `ConfirmPending` to `Deleting`. A no-op unless
    /// the typed token matches exactly. Returns `true` when the caller
    /// should start the deletion request.
    pub fn confirm_delete(&mut self) -> bool {
        if self.phase != PanelPhase::ConfirmPending || !self.is_confirmation_valid() {
            return false;
        }
        self.modal_error = None;
        self.phase = PanelPhase::Deleting;
        true
    }

    /// Closes the confirmation modal and clears the gate field. Permitted
    /// only while no request is in flight.
    pub fn cancel_confirmation(&mut self) {
        if self.phase != PanelPhase::ConfirmPending {
            return;
        }
        self.confirmation_input.clear();
        self.modal_error = None;
        self.phase = PanelPhase::Editing;
    }

    /// Marks the in-flight request as settled; terminal for this panel.
    pub fn deletion_scheduled(&mut self) {
        if self.phase == PanelPhase::Deleting {
            self.phase = PanelPhase::Deleted;
        }
    }

    /// Returns to the confirmation modal with the failure surfaced. The
    /// gate field is preserved so the user can retry immediately.
    pub fn deletion_failed(&mut self, message: String) {
        if self.phase == PanelPhase::Deleting {
            self.modal_error = Some(message);
            self.phase = PanelPhase::ConfirmPending;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMAIL: &str = "user@example.com";

    fn panel() -> DeletionPanel {
        DeletionPanel::new(EMAIL)
    }

    fn valid_panel() -> DeletionPanel {
        let mut p = panel();
        p.set_reason(DeletionReason::TooExpensive);
        p.set_email_confirmation(EMAIL.to_string());
        p
    }

    #[test]
    fn email_equality_ignores_case() {
        let mut p = panel();
        p.set_email_confirmation("User@Example.COM".to_string());
        assert!(p.is_email_valid());
    }

    #[test]
    fn email_equality_handles_non_ascii_case() {
        let mut p = DeletionPanel::new("üser@example.com");
        p.set_email_confirmation("Üser@Example.com".to_string());
        assert!(p.is_email_valid());
    }

    #[test]
    fn email_equality_ignores_surrounding_whitespace() {
        let mut p = panel();
        p.set_email_confirmation(format!("  {} ", EMAIL));
        assert!(p.is_email_valid());
    }

    #[test]
    fn email_mismatch_is_invalid() {
        let mut p = panel();
        p.set_email_confirmation("someone@else.com".to_string());
        assert!(!p.is_email_valid());
        assert!(!p.is_form_valid());
    }

    #[test]
    fn request_delete_requires_reason_and_email() {
        let mut p = panel();
        assert!(!p.request_delete());
        assert_eq!(p.phase(), PanelPhase::Editing);

        p.set_email_confirmation(EMAIL.to_string());
        assert!(!p.request_delete());
        assert_eq!(p.phase(), PanelPhase::Editing);

        p.set_reason(DeletionReason::TooExpensive);
        assert!(p.request_delete());
        assert_eq!(p.phase(), PanelPhase::ConfirmPending);
    }

    #[test]
    fn missing_reason_with_valid_email_shows_no_error() {
        let mut p = panel();
        p.set_email_confirmation(EMAIL.to_string());
        assert!(!p.request_delete());
        assert!(p.email_error().is_none());
    }

    #[test]
    fn bad_email_submission_sets_mismatch_error() {
        let mut p = panel();
        p.set_reason(DeletionReason::PrivacyConcerns);
        p.set_email_confirmation("wrong@example.com".to_string());
        assert!(!p.request_delete());
        assert_eq!(p.email_error(), Some(EMAIL_MISMATCH_ERROR));
        assert_eq!(p.phase(), PanelPhase::Editing);
    }

    #[test]
    fn editing_email_clears_error_even_when_still_invalid() {
        let mut p = panel();
        p.set_reason(DeletionReason::Other);
        p.set_email_confirmation("wrong@example.com".to_string());
        p.request_delete();
        assert!(p.email_error().is_some());

        p.set_email_confirmation("still-wrong@example.com".to_string());
        assert!(p.email_error().is_none());
    }

    #[test]
    fn other_reason_free_text_does_not_gate_submission() {
        let mut p = panel();
        p.set_reason(DeletionReason::Other);
        p.set_email_confirmation(EMAIL.to_string());
        assert!(p.other_reason().is_empty());
        assert!(p.request_delete());
        assert_eq!(p.phase(), PanelPhase::ConfirmPending);
    }

    #[test]
    fn confirmation_token_must_match_exactly() {
        let mut p = valid_panel();
        p.request_delete();

        for wrong in ["delete", "DELETE ", " DELETE", "Delete", ""] {
            p.set_confirmation_input(wrong.to_string());
            assert!(!p.confirm_delete(), "token {:?} must not confirm", wrong);
            assert_eq!(p.phase(), PanelPhase::ConfirmPending);
        }

        p.set_confirmation_input("DELETE".to_string());
        assert!(p.confirm_delete());
        assert_eq!(p.phase(), PanelPhase::Deleting);
    }

    #[test]
    fn cancel_returns_to_editing_and_clears_gate() {
        let mut p = valid_panel();
        p.request_delete();
        p.set_confirmation_input("DEL".to_string());
        p.cancel_confirmation();
        assert_eq!(p.phase(), PanelPhase::Editing);
        assert!(p.confirmation_input().is_empty());
    }

    #[test]
    fn deleting_phase_ignores_cancel_and_confirm() {
        let mut p = valid_panel();
        p.request_delete();
        p.set_confirmation_input("DELETE".to_string());
        assert!(p.confirm_delete());

        p.cancel_confirmation();
        assert_eq!(p.phase(), PanelPhase::Deleting);

        assert!(!p.confirm_delete());
        assert_eq!(p.phase(), PanelPhase::Deleting);

        p.deletion_scheduled();
        assert_eq!(p.phase(), PanelPhase::Deleted);
    }

    #[test]
    fn failure_returns_to_confirm_pending_with_message() {
        let mut p = valid_panel();
        p.request_delete();
        p.set_confirmation_input("DELETE".to_string());
        p.confirm_delete();

        p.deletion_failed("service unavailable".to_string());
        assert_eq!(p.phase(), PanelPhase::ConfirmPending);
        assert_eq!(p.modal_error(), Some("service unavailable"));
        // Gate input survives the failure so the user can retry.
        assert_eq!(p.confirmation_input(), "DELETE");
    }

    #[test]
    fn reason_text_prefers_other_free_text() {
        let mut p = panel();
        assert!(p.reason_text().is_none());

        p.set_reason(DeletionReason::TooExpensive);
        assert_eq!(p.reason_text().as_deref(), Some("Too expensive"));

        p.set_reason(DeletionReason::Other);
        assert_eq!(p.reason_text().as_deref(), Some("Other"));

        p.set_other_reason("moving to self-hosting".to_string());
        assert_eq!(p.reason_text().as_deref(), Some("Other: moving to self-hosting"));
    }

    #[test]
    fn full_happy_path() {
        let mut p = panel();
        p.set_reason(DeletionReason::TooExpensive);
        p.set_email_confirmation("USER@example.com".to_string());
        assert!(p.request_delete());
        p.set_confirmation_input("DELETE".to_string());
        assert!(p.confirm_delete());
        p.deletion_scheduled();
        assert_eq!(p.phase(), PanelPhase::Deleted);
    }
}
