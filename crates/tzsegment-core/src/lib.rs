//! # tzsegment-core
//!
//! DST-aware day-type and intraday segment classification for Rust.
//!
//! Given a timestamp and an IANA timezone, this library derives:
//!
//! - the **day type** of the local calendar date (weekday `L`, Saturday `S`,
//!   Sunday `D`);
//! - the **temporal segment**: which fixed-width bucket (15 minutes by
//!   default) of the local day the timestamp falls into;
//! - the local equivalent of a segment index that was computed against UTC
//!   midnight, using the UTC offset in force on a reference date.
//!
//! ## Features
//!
//! - **Loose inputs**: epoch seconds, epoch milliseconds, ISO-8601 strings and
//!   JSON values are all accepted; unreadable values yield fixed fallbacks.
//! - **DST Safety**: weekdays and segments are read from local wall-clock time,
//!   and index remapping uses the offset of the reference date.
//! - **Pluggable offsets**: all tz rule lookups go through
//!   [`tz::OffsetResolver`], backed by chrono-tz by default.
//!
//! ## Example
//!
//! ```rust
//! use tzsegment_core::prelude::*;
//!
//! let value = TimestampValue::Number(1696345200.0);
//! let index = segment_index(&value, DEFAULT_TZ, SegmentWidth::DEFAULT);
//!
//! assert_eq!(index, 48);
//! assert_eq!(format_segment_label(Some(index.into()), SegmentWidth::DEFAULT), "12:00 - 12:15");
//! assert_eq!(classify_day_type(&value, DEFAULT_TZ), DayType::Weekday);
//! ```

pub mod classify;
pub mod config;
pub mod error;
pub mod models;
pub mod options;
pub mod parse;
pub mod segment;
pub mod tz;

// Re-export commonly used types at the crate root
pub use classify::{
    TemporalClassifier, classify_day_type, day_type_from_weekday_number, format_utc_to_zone,
    remap_utc_index_to_zone, remap_zone_index_to_utc, segment_index,
};
pub use config::ClassifierConfig;
pub use error::{Result, TzSegmentError};
pub use models::{Classification, DayType, DayTypeFilter};
pub use options::{DAY_TYPE_OPTIONS, DayTypeOption, MONTH_OPTIONS, MonthOption};
pub use parse::{TimestampFormat, TimestampValue, parse_timestamp};
pub use segment::{SegmentWidth, format_segment_label, format_segment_label_with_index};

/// Prelude module for convenient imports.
///
/// ```
/// use tzsegment_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::classify::*;
    pub use crate::config::ClassifierConfig;
    pub use crate::error::{Result, TzSegmentError};
    pub use crate::models::*;
    pub use crate::options::*;
    pub use crate::parse::{TimestampFormat, TimestampValue, parse_timestamp};
    pub use crate::segment::{SegmentWidth, format_segment_label, format_segment_label_with_index};
    pub use crate::tz::{DEFAULT_TZ, OffsetResolver, TzdbResolver, parse_tz};
}
