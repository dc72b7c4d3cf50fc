use crate::panel::DeletionReason;
use crate::service::DeletionReceipt;

/// State transitions and user interactions flowing through the UI.
///
/// Components translate key events into actions; the app component applies
/// them to the [`DeletionPanel`](crate::panel::DeletionPanel). Background
/// tasks report their outcome over the same enum via the task manager
/// channel.
#[derive(Debug, Clone)]
pub enum Action {
    // Form edits
    SetReason(DeletionReason),
    SetOtherReason(String),
    SetEmailConfirmation(String),
    RequestDelete,

    // Confirmation gate
    SetConfirmationInput(String),
    ConfirmDelete,
    CancelConfirmation,

    // Deletion service outcomes
    DeletionScheduled(DeletionReceipt),
    DeletionFailed(String),

    // App control
    Quit,
    None,
}
