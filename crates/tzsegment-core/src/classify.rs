//! Day-type and segment classification.
//!
//! [`TemporalClassifier`] binds a timezone, a segment width and an
//! [`OffsetResolver`]. All of its methods are pure. The lenient methods take a
//! [`TimestampValue`] and fall back to fixed values (`DayType::Weekday`,
//! segment `0`, empty string) when the value cannot be normalized, so they can
//! be called on raw API payload fields without local error handling.
//!
//! The free functions at the bottom of the module are shorthands over a
//! tzdb-backed classifier.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike, Utc};
use chrono_tz::Tz;
use tracing::debug;

use crate::models::{Classification, DayType};
use crate::parse::TimestampValue;
use crate::segment::{MINUTES_PER_DAY, SegmentWidth, format_segment_label};
use crate::tz::{DEFAULT_TZ, OffsetResolver, TzdbResolver, format_wall_clock, local_wall_clock};

/// Timezone-aware classifier for day types and temporal segments.
///
/// # Examples
///
/// ```
/// use tzsegment_core::prelude::*;
///
/// let classifier = TemporalClassifier::default();
/// let value = TimestampValue::from("2023-10-03T15:00:00Z");
///
/// assert_eq!(classifier.segment_index(&value), 48);
/// assert_eq!(classifier.day_type(&value), DayType::Weekday);
/// assert_eq!(classifier.format_local(&value), "2023-10-03 12:00:00");
/// ```
#[derive(Debug, Clone)]
pub struct TemporalClassifier<R = TzdbResolver> {
    tz: Tz,
    width: SegmentWidth,
    resolver: R,
}

impl TemporalClassifier {
    pub fn new(tz: Tz, width: SegmentWidth) -> Self {
        Self::with_resolver(tz, width, TzdbResolver)
    }
}

impl Default for TemporalClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_TZ, SegmentWidth::DEFAULT)
    }
}

impl<R: OffsetResolver> TemporalClassifier<R> {
    pub fn with_resolver(tz: Tz, width: SegmentWidth, resolver: R) -> Self {
        Self {
            tz,
            width,
            resolver,
        }
    }

    pub fn tz(&self) -> Tz {
        self.tz
    }

    pub fn width(&self) -> SegmentWidth {
        self.width
    }

    /// Wall-clock date and time of `instant` in the classifier's zone.
    pub fn local_datetime(&self, instant: DateTime<Utc>) -> NaiveDateTime {
        local_wall_clock(&self.resolver, instant, self.tz)
    }

    /// Day type of the local calendar date of `instant`.
    pub fn day_type_at(&self, instant: DateTime<Utc>) -> DayType {
        DayType::from_weekday(self.local_datetime(instant).weekday())
    }

    /// Segment of the local day containing `instant`.
    pub fn segment_at(&self, instant: DateTime<Utc>) -> u32 {
        let local = self.local_datetime(instant);
        let minutes = i64::from(local.hour() * 60 + local.minute());
        self.width.index_for_minutes(minutes)
    }

    /// Day type of a loosely typed timestamp; `Weekday` if it cannot be read.
    pub fn day_type(&self, value: &TimestampValue) -> DayType {
        match self.resolve(value) {
            Some(instant) => self.day_type_at(instant),
            None => DayType::Weekday,
        }
    }

    /// Segment index of a loosely typed timestamp; `0` if it cannot be read.
    pub fn segment_index(&self, value: &TimestampValue) -> u32 {
        self.resolve(value)
            .map(|instant| self.segment_at(instant))
            .unwrap_or(0)
    }

    /// Local time as `YYYY-MM-DD HH:MM:SS`; empty if it cannot be read.
    pub fn format_local(&self, value: &TimestampValue) -> String {
        self.resolve(value)
            .map(|instant| format_wall_clock(&self.local_datetime(instant)))
            .unwrap_or_default()
    }

    /// All derived values for one timestamp, or `None` if it cannot be read.
    pub fn classify(&self, input: &str, value: &TimestampValue) -> Option<Classification> {
        let instant = self.resolve(value)?;
        let segment = self.segment_at(instant);

        Some(Classification {
            input: input.to_string(),
            epoch_ms: instant.timestamp_millis(),
            tz: self.tz.to_string(),
            local: format_wall_clock(&self.local_datetime(instant)),
            day_type: self.day_type_at(instant),
            segment,
            label: format_segment_label(Some(i64::from(segment)), self.width),
        })
    }

    /// Minutes between UTC midnight of `reference_date` and the local wall
    /// clock at that instant, signed across a local date change.
    pub fn utc_offset_minutes(&self, reference_date: NaiveDate) -> i64 {
        let utc_midnight = reference_date.and_time(chrono::NaiveTime::MIN).and_utc();
        let local = self.local_datetime(utc_midnight);

        let mut offset = i64::from(local.hour() * 60 + local.minute());
        let day = i64::from(MINUTES_PER_DAY);
        match local.date().cmp(&reference_date) {
            std::cmp::Ordering::Less => offset -= day,
            std::cmp::Ordering::Greater => offset += day,
            std::cmp::Ordering::Equal => {}
        }
        offset
    }

    /// The UTC offset on `reference_date`, in whole segments.
    pub fn offset_segments(&self, reference_date: NaiveDate) -> i64 {
        self.width.round_minutes(self.utc_offset_minutes(reference_date))
    }

    /// Map a segment index counted from UTC midnight to the local index,
    /// using the offset in force on `reference_date`.
    pub fn remap_utc_index(&self, utc_index: i64, reference_date: NaiveDate) -> u32 {
        let shift = self.offset_segments(reference_date);
        self.width.normalize(i64::from(self.width.normalize(utc_index)) + shift)
    }

    /// Inverse of [`TemporalClassifier::remap_utc_index`].
    pub fn remap_local_index(&self, local_index: i64, reference_date: NaiveDate) -> u32 {
        let shift = self.offset_segments(reference_date);
        self.width.normalize(i64::from(self.width.normalize(local_index)) - shift)
    }

    fn resolve(&self, value: &TimestampValue) -> Option<DateTime<Utc>> {
        let instant = value.normalize();
        if instant.is_none() {
            debug!(?value, tz = %self.tz, "timestamp did not normalize, using fallback");
        }
        instant
    }
}

/// Day type of `value` as observed in `tz`.
pub fn classify_day_type(value: &TimestampValue, tz: Tz) -> DayType {
    TemporalClassifier::new(tz, SegmentWidth::DEFAULT).day_type(value)
}

/// Day type of an ISO weekday number (1 = Monday ... 7 = Sunday).
pub fn day_type_from_weekday_number(day: u32) -> DayType {
    DayType::from_weekday_number(day)
}

/// Segment index of `value` in the local day of `tz`.
pub fn segment_index(value: &TimestampValue, tz: Tz, width: SegmentWidth) -> u32 {
    TemporalClassifier::new(tz, width).segment_index(value)
}

/// Local wall-clock rendering of `value` in `tz`.
pub fn format_utc_to_zone(value: &TimestampValue, tz: Tz) -> String {
    TemporalClassifier::new(tz, SegmentWidth::DEFAULT).format_local(value)
}

/// Map a UTC-midnight-based segment index into `tz` for `reference_date`.
///
/// ```
/// use chrono::NaiveDate;
/// use tzsegment_core::prelude::*;
///
/// // Santiago is UTC-3 in January: UTC segment 60 (15:00) is local 48 (12:00)
/// let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// assert_eq!(remap_utc_index_to_zone(60, date, DEFAULT_TZ, SegmentWidth::DEFAULT), 48);
/// ```
pub fn remap_utc_index_to_zone(
    utc_index: i64,
    reference_date: NaiveDate,
    tz: Tz,
    width: SegmentWidth,
) -> u32 {
    TemporalClassifier::new(tz, width).remap_utc_index(utc_index, reference_date)
}

/// Map a local segment index in `tz` back to the UTC-midnight-based index.
pub fn remap_zone_index_to_utc(
    local_index: i64,
    reference_date: NaiveDate,
    tz: Tz,
    width: SegmentWidth,
) -> u32 {
    TemporalClassifier::new(tz, width).remap_local_index(local_index, reference_date)
}
