//! Humanized session date
//!
//! The approval date of a document is printed as "21st day of January 2024".
//! When the date is absent or unparseable the `Unknown` sentinel is used
//! instead; it renders as `"N/A"` with empty suffix, month and year.

use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::NOT_AVAILABLE;

/// English ordinal suffix of a day number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrdinalSuffix {
    St,
    Nd,
    Rd,
    Th,
}

impl OrdinalSuffix {
    /// Suffix for a day of the month
    ///
    /// Days ending in 1, 2 and 3 take "st", "nd" and "rd", except 11, 12 and 13
    /// which take "th" like every other day.
    pub fn for_day(day: u32) -> Self {
        if (11..=13).contains(&(day % 100)) {
            return Self::Th;
        }
        match day % 10 {
            1 => Self::St,
            2 => Self::Nd,
            3 => Self::Rd,
            _ => Self::Th,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::St => "st",
            Self::Nd => "nd",
            Self::Rd => "rd",
            Self::Th => "th",
        }
    }
}

impl fmt::Display for OrdinalSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Day, ordinal suffix, month name and year of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionDate {
    /// A valid calendar date
    Known {
        day: u32,
        suffix: OrdinalSuffix,
        month: String,
        year: i32,
    },
    /// Missing or malformed input
    Unknown,
}

impl SessionDate {
    /// Build a known session date, deriving the suffix from the day
    pub fn known(day: u32, month: impl Into<String>, year: i32) -> Self {
        Self::Known {
            day,
            suffix: OrdinalSuffix::for_day(day),
            month: month.into(),
            year,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known { .. })
    }

    /// Day text, `"N/A"` for the sentinel
    pub fn day_text(&self) -> String {
        match self {
            Self::Known { day, .. } => day.to_string(),
            Self::Unknown => NOT_AVAILABLE.to_string(),
        }
    }

    /// Suffix text, empty for the sentinel
    pub fn suffix_text(&self) -> &'static str {
        match self {
            Self::Known { suffix, .. } => suffix.as_str(),
            Self::Unknown => "",
        }
    }

    /// Month name, empty for the sentinel
    pub fn month_text(&self) -> &str {
        match self {
            Self::Known { month, .. } => month,
            Self::Unknown => "",
        }
    }

    /// Year text, empty for the sentinel
    pub fn year_text(&self) -> String {
        match self {
            Self::Known { year, .. } => year.to_string(),
            Self::Unknown => String::new(),
        }
    }

    /// The `{day}{suffix}` marker as it appears in running text
    pub fn ordinal_text(&self) -> String {
        format!("{}{}", self.day_text(), self.suffix_text())
    }
}

impl Serialize for SessionDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SessionDate", 4)?;
        match self {
            Self::Known {
                day,
                suffix,
                month,
                year,
            } => {
                state.serialize_field("day", day)?;
                state.serialize_field("suffix", suffix.as_str())?;
                state.serialize_field("month", month)?;
                state.serialize_field("year", year)?;
            }
            Self::Unknown => {
                state.serialize_field("day", NOT_AVAILABLE)?;
                state.serialize_field("suffix", "")?;
                state.serialize_field("month", "")?;
                state.serialize_field("year", "")?;
            }
        }
        state.end()
    }
}
