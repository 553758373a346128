//! Fixed-width intraday segments.
//!
//! A day of 1440 minutes is tiled by `1440 / width` segments, indexed from 0
//! at local midnight. Every index this module hands out lies in
//! `[0, total)`; indices coming in from outside are wrapped, never rejected.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TzSegmentError};

/// Minutes in a calendar day.
pub const MINUTES_PER_DAY: u32 = 1440;

/// Width of one temporal segment in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct SegmentWidth(u32);

impl SegmentWidth {
    /// The dashboard default of 15 minutes (96 segments per day).
    pub const DEFAULT: SegmentWidth = SegmentWidth(15);

    /// Create a width, rejecting zero and widths that do not divide a day.
    ///
    /// ```
    /// use tzsegment_core::segment::SegmentWidth;
    ///
    /// assert_eq!(SegmentWidth::new(30).unwrap().total(), 48);
    /// assert!(SegmentWidth::new(7).is_err());
    /// ```
    pub fn new(minutes: u32) -> Result<Self> {
        if minutes == 0 || MINUTES_PER_DAY % minutes != 0 {
            return Err(TzSegmentError::InvalidSegmentWidth(minutes));
        }
        Ok(SegmentWidth(minutes))
    }

    pub fn minutes(self) -> u32 {
        self.0
    }

    /// Number of segments in one day.
    pub fn total(self) -> u32 {
        MINUTES_PER_DAY / self.0
    }

    /// Wrap any signed index into `[0, total)`.
    pub fn normalize(self, index: i64) -> u32 {
        // rem_euclid is never negative and always below total
        index.rem_euclid(i64::from(self.total())) as u32
    }

    /// Segment containing the given minute of the local day.
    pub fn index_for_minutes(self, minutes_since_midnight: i64) -> u32 {
        self.normalize(minutes_since_midnight.div_euclid(i64::from(self.0)))
    }

    /// Convert a minute offset into whole segments, rounding half toward +inf.
    pub fn round_minutes(self, minutes: i64) -> i64 {
        let width = i64::from(self.0);
        (2 * minutes + width).div_euclid(2 * width)
    }
}

impl Default for SegmentWidth {
    fn default() -> Self {
        SegmentWidth::DEFAULT
    }
}

impl TryFrom<u32> for SegmentWidth {
    type Error = TzSegmentError;

    fn try_from(minutes: u32) -> Result<Self> {
        SegmentWidth::new(minutes)
    }
}

impl From<SegmentWidth> for u32 {
    fn from(width: SegmentWidth) -> Self {
        width.0
    }
}

impl std::fmt::Display for SegmentWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}m", self.0)
    }
}

/// Render a segment as `"HH:MM - HH:MM"`.
///
/// `None` means nothing is selected and renders as an empty string; segment
/// `0` is a real segment. The end of the last segment renders as `23:59`.
///
/// ```
/// use tzsegment_core::segment::{format_segment_label, SegmentWidth};
///
/// assert_eq!(format_segment_label(Some(48), SegmentWidth::DEFAULT), "12:00 - 12:15");
/// assert_eq!(format_segment_label(Some(95), SegmentWidth::DEFAULT), "23:45 - 23:59");
/// assert_eq!(format_segment_label(None, SegmentWidth::DEFAULT), "");
/// ```
pub fn format_segment_label(index: Option<i64>, width: SegmentWidth) -> String {
    let Some(index) = index else {
        return String::new();
    };

    let start = width.normalize(index) * width.minutes();
    let end = start + width.minutes();
    format!("{} - {}", format_clock(start), format_clock(end))
}

/// Like [`format_segment_label`], followed by the index in parentheses.
pub fn format_segment_label_with_index(index: Option<i64>, width: SegmentWidth) -> String {
    match index {
        Some(i) => format!(
            "{} ({})",
            format_segment_label(Some(i), width),
            width.normalize(i)
        ),
        None => String::new(),
    }
}

fn format_clock(minutes: u32) -> String {
    let hours = minutes / 60;
    if hours == 24 {
        return "23:59".to_string();
    }
    format!("{:02}:{:02}", hours, minutes % 60)
}
