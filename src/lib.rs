//! # rclock - Terminal Digital Clock
//!
//! A small terminal clock built around a periodic display refresher: once per period it
//! samples the wall clock, derives 12-hour display fields, and writes them to a surface.
//!
//! ## Features
//!
//! - **Immediate first frame**: the display is filled when the refresher starts, not one
//!   period later
//! - **12-hour readout**: `HH:MM:SS AM` plus a long date line
//! - **Two surfaces**: full-screen ratatui face or plain lines for pipes
//! - **Themes and config file**: TOML config with command-line overrides
//!
//! ## Architecture
//!
//! - [`error`] - Centralized error types and handling
//! - [`clock`] - Wall-clock sources
//! - [`display`] - Field derivation, surface trait and concrete surfaces
//! - [`refresher`] - The periodic refresh loop
//! - [`input`] - Keyboard handling for the full-screen face
//! - [`config`] - Defaults, config file and overrides
//! - [`app`] - Application core and component coordination

// Core modules
pub mod clock;
pub mod config;
pub mod error;

pub mod display;
pub mod input;
pub mod refresher;

pub mod app;

// Re-export commonly used types for convenience
pub use error::{ClockError, Result};

pub use app::Application;
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ClockConfig, ConfigOverrides};
pub use display::{DisplayField, DisplaySurface, DisplayTime, Meridiem};
pub use refresher::{Refresher, RefresherState};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
