//! Reusable UI components

pub mod confirm_dialog;
pub mod form_component;
pub mod input;
pub mod result_view;

// Component exports
pub use confirm_dialog::ConfirmDialogComponent;
pub use form_component::FormComponent;
pub use result_view::ResultViewComponent;
