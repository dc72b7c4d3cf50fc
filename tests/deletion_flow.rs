use offboard::panel::{DeletionPanel, DeletionReason, PanelPhase};
use offboard::service::{DeletionService, SimulatedDeletionService};
use std::time::Duration;

#[tokio::test]
async fn panel_and_service_complete_the_flow() {
    let mut panel = DeletionPanel::new("user@example.com");
    let service = SimulatedDeletionService::new(Duration::from_millis(10), "September 30, 2026");

    panel.set_reason(DeletionReason::PrivacyConcerns);
    panel.set_email_confirmation(" User@Example.com ".to_string());
    assert!(panel.request_delete());

    panel.set_confirmation_input("DELETE".to_string());
    assert!(panel.confirm_delete());
    assert_eq!(panel.phase(), PanelPhase::Deleting);

    let reason = panel.reason_text().unwrap();
    let receipt = service
        .request_account_deletion(panel.account_email(), &reason)
        .await
        .unwrap();
    assert_eq!(receipt.account_email, "user@example.com");
    assert_eq!(receipt.scheduled_for, "September 30, 2026");

    panel.deletion_scheduled();
    assert_eq!(panel.phase(), PanelPhase::Deleted);
}

#[tokio::test]
async fn failed_request_reopens_the_confirmation_gate() {
    let mut panel = DeletionPanel::new("user@example.com");
    panel.set_reason(DeletionReason::TechnicalIssues);
    panel.set_email_confirmation("user@example.com".to_string());
    panel.request_delete();
    panel.set_confirmation_input("DELETE".to_string());
    panel.confirm_delete();

    panel.deletion_failed("Network error: timed out".to_string());
    assert_eq!(panel.phase(), PanelPhase::ConfirmPending);
    assert_eq!(panel.modal_error(), Some("Network error: timed out"));

    // The token survived, so a second confirm goes straight back out.
    assert!(panel.confirm_delete());
    assert_eq!(panel.phase(), PanelPhase::Deleting);
}

#[test]
fn wrong_email_never_opens_the_modal() {
    let mut panel = DeletionPanel::new("user@example.com");
    panel.set_reason(DeletionReason::NoLongerNeeded);
    panel.set_email_confirmation("user@examp1e.com".to_string());

    assert!(!panel.request_delete());
    assert_eq!(panel.phase(), PanelPhase::Editing);
    assert_eq!(
        panel.email_error(),
        Some("Email does not match your account email")
    );
}
