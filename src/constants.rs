//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

/// Literal token the user must type in the confirmation modal.
pub const CONFIRMATION_TOKEN: &str = "DELETE";

/// Inline error shown when the email confirmation does not match.
pub const EMAIL_MISMATCH_ERROR: &str = "Email does not match your account email";

// Form copy
pub const FORM_TITLE: &str = "Delete Account";
pub const FORM_SUBTITLE: &str =
    "This action is permanent and cannot be undone. Please review the information below carefully.";
pub const EMAIL_CONFIRMED_HINT: &str = "Email confirmed";

/// Data removed when the deletion takes effect.
pub const WILL_BE_DELETED: [&str; 4] = [
    "Your profile and account settings",
    "All your projects and files",
    "Payment methods and billing history",
    "Team memberships and invitations",
];

/// Data kept after the deletion takes effect.
pub const WILL_BE_RETAINED: [&str; 3] = [
    "Anonymized usage statistics",
    "Transaction records (legal requirement)",
    "Public contributions to shared projects",
];

// Confirmation modal copy
pub const MODAL_TITLE: &str = "Final Confirmation Required";
pub const MODAL_SUBTITLE: &str = "This is your last chance to cancel. This action cannot be undone.";
pub const MODAL_DELETING: &str = "Deleting";

// Result view copy
pub const RESULT_TITLE: &str = "Account Deletion Scheduled";
pub const EMAIL_PREVIEW_SUBJECT: &str = "Account Deletion Confirmation";

// Simulated deletion service
/// Default settle delay of the simulated deletion request, in milliseconds.
pub const DEFAULT_REQUEST_DELAY_MS: u64 = 2000;
/// Upper bound accepted from configuration for the settle delay.
pub const MAX_REQUEST_DELAY_MS: u64 = 60_000;

// UI Layout Constants
/// Maximum width of the centered panel column
pub const PANEL_MAX_WIDTH: u16 = 76;
/// Minimum terminal width to render the deleted/retained lists side by side
pub const TWO_COLUMN_MIN_WIDTH: u16 = 60;
