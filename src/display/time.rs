//! Derivation of the 12-hour display fields from a raw 24-hour reading.

use chrono::{NaiveDateTime, Timelike};
use std::fmt;

/// Long en-US date template: `Sunday, October 18, 2026`.
pub const DATE_FORMAT: &str = "%A, %B %-d, %Y";

/// AM/PM marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    pub fn as_str(self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The five independently writable fields of a clock readout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayField {
    Hour,
    Minute,
    Second,
    Meridiem,
    Date,
}

impl DisplayField {
    /// Every field, in the order the refresher writes them.
    pub const ALL: [DisplayField; 5] = [
        DisplayField::Hour,
        DisplayField::Minute,
        DisplayField::Second,
        DisplayField::Meridiem,
        DisplayField::Date,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DisplayField::Hour => "hour",
            DisplayField::Minute => "minute",
            DisplayField::Second => "second",
            DisplayField::Meridiem => "meridiem",
            DisplayField::Date => "date",
        }
    }
}

/// Convert a raw hour in `[0, 23]` to its 12-hour form.
///
/// Midnight and noon both display as 12.
pub fn twelve_hour(hour: u32) -> (u32, Meridiem) {
    let meridiem = if hour >= 12 { Meridiem::Pm } else { Meridiem::Am };
    let displayed = match hour % 12 {
        0 => 12,
        h => h,
    };
    (displayed, meridiem)
}

/// Display fields derived from a single clock reading.
///
/// Built fresh on every refresh tick and dropped once written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayTime {
    hour: u32,
    minute: u32,
    second: u32,
    meridiem: Meridiem,
    date: String,
}

impl DisplayTime {
    pub fn from_datetime(instant: &NaiveDateTime) -> Self {
        let (hour, meridiem) = twelve_hour(instant.hour());
        Self {
            hour,
            minute: instant.minute(),
            second: instant.second(),
            meridiem,
            date: instant.format(DATE_FORMAT).to_string(),
        }
    }

    /// Displayed hour, always in `[1, 12]`.
    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> u32 {
        self.second
    }

    pub fn meridiem(&self) -> Meridiem {
        self.meridiem
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    /// Rendered text for one field. Numeric fields are zero-padded to two digits.
    pub fn field_text(&self, field: DisplayField) -> String {
        match field {
            DisplayField::Hour => format!("{:02}", self.hour),
            DisplayField::Minute => format!("{:02}", self.minute),
            DisplayField::Second => format!("{:02}", self.second),
            DisplayField::Meridiem => self.meridiem.as_str().to_string(),
            DisplayField::Date => self.date.clone(),
        }
    }

    /// All fields paired with their rendered text, in write order.
    pub fn fields(&self) -> [(DisplayField, String); 5] {
        DisplayField::ALL.map(|field| (field, self.field_text(field)))
    }
}

impl fmt::Display for DisplayTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02} {}",
            self.hour, self.minute, self.second, self.meridiem
        )
    }
}
