//! Error types and handling infrastructure for rclock.
//!
//! This module provides a centralized error handling system using `thiserror` for
//! custom error types. The binary layers `anyhow` on top for command-line context.
//!
//! Deriving display fields from a clock reading cannot fail; every variant here
//! describes a failure of the surrounding machinery (terminal, configuration, lifecycle).

use thiserror::Error;

/// The main error type for rclock operations.
#[derive(Error, Debug)]
pub enum ClockError {
    /// Terminal or stdout I/O failed while drawing or restoring the screen
    #[error("Terminal I/O failed: {message}")]
    TerminalIo {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// UI and terminal related errors that are not raw I/O
    #[error("UI operation failed: {message}")]
    UIError { message: String },

    /// Configuration file could not be read or contained invalid values
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Invalid command line arguments
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// `start()` was called on a refresher that is already running
    #[error("Refresher is already running")]
    AlreadyStarted,
}

/// Standard Result type for rclock operations.
pub type Result<T> = std::result::Result<T, ClockError>;

impl ClockError {
    /// Create a TerminalIo error from an io::Error with additional context
    pub fn terminal_io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::TerminalIo {
            message: message.into(),
            source,
        }
    }

    /// Create a UIError with a descriptive message
    pub fn ui(message: impl Into<String>) -> Self {
        Self::UIError {
            message: message.into(),
        }
    }

    /// Create a ConfigError with a descriptive message
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create an InvalidArgument error with a descriptive message
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for ClockError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::BrokenPipe => Self::TerminalIo {
                message: "Output closed".to_string(),
                source: err,
            },
            std::io::ErrorKind::PermissionDenied => Self::TerminalIo {
                message: "Permission denied".to_string(),
                source: err,
            },
            _ => Self::TerminalIo {
                message: "IO operation failed".to_string(),
                source: err,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let config = ClockError::config("refresh_interval_ms must be greater than zero");
        assert_eq!(
            config.to_string(),
            "Configuration error: refresh_interval_ms must be greater than zero"
        );

        let started = ClockError::AlreadyStarted;
        assert_eq!(started.to_string(), "Refresher is already running");

        let arg = ClockError::invalid_argument("unknown theme 'neon'");
        assert_eq!(arg.to_string(), "Invalid argument: unknown theme 'neon'");
    }

    #[test]
    fn test_error_constructors() {
        assert!(matches!(
            ClockError::ui("Terminal resize failed"),
            ClockError::UIError { .. }
        ));
        assert!(matches!(
            ClockError::config("bad value"),
            ClockError::ConfigError { .. }
        ));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let clock_err: ClockError = io_err.into();

        match clock_err {
            ClockError::TerminalIo { message, .. } => {
                assert_eq!(message, "Output closed");
            }
            _ => panic!("Expected TerminalIo variant"),
        }
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error as _;

        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let clock_err = ClockError::terminal_io("draw failed", io_err);
        assert_eq!(clock_err.to_string(), "Terminal I/O failed: draw failed");
        assert_eq!(clock_err.source().map(|s| s.to_string()), Some("boom".to_string()));
    }
}
