//! Core data types for tzsegment.
//!
//! - [`DayType`] - Weekday / Saturday / Sunday classification
//! - [`DayTypeFilter`] - A day type or "all day types"
//! - [`Classification`] - Everything derived from one timestamp

use chrono::Weekday;
use serde::{Deserialize, Serialize, Serializer};
use std::str::FromStr;

use crate::error::{Result, TzSegmentError};

/// Calendar day classification used to pick precomputed statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayType {
    /// Monday to Friday ("laboral").
    #[default]
    #[serde(rename = "L")]
    Weekday,
    #[serde(rename = "S")]
    Saturday,
    #[serde(rename = "D")]
    Sunday,
}

impl DayType {
    pub const ALL: [DayType; 3] = [DayType::Weekday, DayType::Saturday, DayType::Sunday];

    /// Single-letter wire code.
    pub fn code(self) -> &'static str {
        match self {
            DayType::Weekday => "L",
            DayType::Saturday => "S",
            DayType::Sunday => "D",
        }
    }

    /// Position in [`DayType::ALL`].
    pub fn index(self) -> usize {
        match self {
            DayType::Weekday => 0,
            DayType::Saturday => 1,
            DayType::Sunday => 2,
        }
    }

    pub fn from_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sun => DayType::Sunday,
            Weekday::Sat => DayType::Saturday,
            _ => DayType::Weekday,
        }
    }

    /// Classify an ISO weekday number (1 = Monday ... 7 = Sunday) that the
    /// caller has already localized. Unknown numbers count as weekdays.
    pub fn from_weekday_number(day: u32) -> Self {
        match day {
            7 => DayType::Sunday,
            6 => DayType::Saturday,
            _ => DayType::Weekday,
        }
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for DayType {
    type Err = TzSegmentError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "L" => Ok(DayType::Weekday),
            "S" => Ok(DayType::Saturday),
            "D" => Ok(DayType::Sunday),
            _ => Err(TzSegmentError::InvalidDayType(s.to_string())),
        }
    }
}

/// A day-type filter: one specific day type, or no filtering at all.
///
/// Serializes as the day-type code, or `false` for [`DayTypeFilter::Any`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DayTypeFilter {
    #[default]
    Any,
    Specific(DayType),
}

impl DayTypeFilter {
    /// Value for a `dayType=` query parameter; `None` means omit it.
    pub fn query_value(self) -> Option<&'static str> {
        match self {
            DayTypeFilter::Any => None,
            DayTypeFilter::Specific(day_type) => Some(day_type.code()),
        }
    }

    pub fn matches(self, day_type: DayType) -> bool {
        match self {
            DayTypeFilter::Any => true,
            DayTypeFilter::Specific(wanted) => wanted == day_type,
        }
    }
}

impl From<DayType> for DayTypeFilter {
    fn from(day_type: DayType) -> Self {
        DayTypeFilter::Specific(day_type)
    }
}

impl Serialize for DayTypeFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            DayTypeFilter::Any => serializer.serialize_bool(false),
            DayTypeFilter::Specific(day_type) => day_type.serialize(serializer),
        }
    }
}

/// Everything the classifier derives from a single timestamp.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    /// Original input as given.
    pub input: String,
    /// Epoch milliseconds (UTC).
    pub epoch_ms: i64,
    /// Timezone used for classification.
    pub tz: String,
    /// Local wall-clock time, `YYYY-MM-DD HH:MM:SS`.
    pub local: String,
    pub day_type: DayType,
    pub segment: u32,
    /// Segment rendered as `HH:MM - HH:MM`.
    pub label: String,
}
