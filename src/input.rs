//! Input subsystem.
//!
//! Keyboard and resize handling for the full-screen clock. Events are polled on a blocking
//! thread and forwarded to the application as [`InputAction`]s.

pub mod service;

pub use service::{spawn_input_thread, InputAction, InputService, InputStateMachine};
