//! Clock face state
//!
//! `ClockFace` is the text currently shown for each display field. Surfaces that redraw a
//! whole frame at once (the terminal UI, the plain line writer) keep one of these and
//! update it field by field as writes arrive.

use crate::display::time::DisplayField;

/// Latest text written to each field. Empty until the first write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClockFace {
    pub hour: String,
    pub minute: String,
    pub second: String,
    pub meridiem: String,
    pub date: String,
}

impl ClockFace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: DisplayField, text: &str) {
        let slot = match field {
            DisplayField::Hour => &mut self.hour,
            DisplayField::Minute => &mut self.minute,
            DisplayField::Second => &mut self.second,
            DisplayField::Meridiem => &mut self.meridiem,
            DisplayField::Date => &mut self.date,
        };
        slot.clear();
        slot.push_str(text);
    }

    pub fn get(&self, field: DisplayField) -> &str {
        match field {
            DisplayField::Hour => &self.hour,
            DisplayField::Minute => &self.minute,
            DisplayField::Second => &self.second,
            DisplayField::Meridiem => &self.meridiem,
            DisplayField::Date => &self.date,
        }
    }

    /// True before anything has been written.
    pub fn is_blank(&self) -> bool {
        DisplayField::ALL.iter().all(|field| self.get(*field).is_empty())
    }

    /// `HH:MM:SS AM`, or an empty string while blank.
    pub fn time_line(&self) -> String {
        if self.is_blank() {
            return String::new();
        }
        format!(
            "{}:{}:{} {}",
            self.hour, self.minute, self.second, self.meridiem
        )
    }
}
