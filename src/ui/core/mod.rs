//! Core UI functionality for the offboard application.
//!
//! This module contains the fundamental building blocks for the user
//! interface: action definitions, the component abstraction, event polling,
//! and background task management.
//!
//! # Architecture
//!
//! 1. **Components** implement the [`Component`] trait for consistent rendering
//! 2. **Actions** define state transitions and user interactions
//! 3. **Events** are polled through the [`EventHandler`]
//! 4. **Tasks** run asynchronously via the [`TaskManager`]

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod task_manager;

// Re-export core types for easier access from other modules
pub use actions::Action;
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{TaskId, TaskManager};
