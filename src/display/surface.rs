//! Display surface trait
//!
//! This module defines the `DisplaySurface` trait: the sink the refresher writes formatted
//! fields into, plus the lifecycle hooks a terminal needs around it.

use crate::display::time::DisplayField;
use crate::error::Result;

/// Core trait for anything that can show a clock readout
pub trait DisplaySurface {
    /// Set the currently displayed text for one field.
    ///
    /// The refresher never reads back from the surface.
    fn write_field(&mut self, field: DisplayField, text: &str) -> Result<()>;

    /// Commit the fields written since the last call as one visible frame.
    fn present(&mut self) -> Result<()> {
        Ok(())
    }

    /// Prepare the output device
    ///
    /// This method should:
    /// - Enter raw mode / alternate screen when drawing full-screen
    /// - Hide the cursor
    fn initialize(&mut self) -> Result<()> {
        Ok(())
    }

    /// Restore the output device to the state it was found in
    fn cleanup(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<S: DisplaySurface + ?Sized> DisplaySurface for Box<S> {
    fn write_field(&mut self, field: DisplayField, text: &str) -> Result<()> {
        (**self).write_field(field, text)
    }

    fn present(&mut self) -> Result<()> {
        (**self).present()
    }

    fn initialize(&mut self) -> Result<()> {
        (**self).initialize()
    }

    fn cleanup(&mut self) -> Result<()> {
        (**self).cleanup()
    }
}
