//! Display subsystem.
//!
//! Derivation of the clock fields, the surface trait the refresher writes through, and
//! the two concrete surfaces (full-screen terminal and plain lines).

pub mod face;
pub mod plain;
pub mod surface;
pub mod terminal;
pub mod theme;
pub mod time;

pub use face::ClockFace;
pub use plain::PlainSurface;
pub use surface::DisplaySurface;
pub use terminal::TerminalUI;
pub use theme::{ColorTheme, ThemeName};
pub use time::{DisplayField, DisplayTime, Meridiem};

#[cfg(test)]
pub use surface::tests::MockDisplaySurface;
