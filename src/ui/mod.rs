//! Terminal user interface built on a component architecture.

pub mod app_component;
pub mod components;
pub mod core;
pub mod layout;
pub mod renderer;

pub use renderer::run_app;
