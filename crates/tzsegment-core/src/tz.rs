//! Timezone handling utilities.
//!
//! All timezone rule lookups go through [`OffsetResolver`]. The arithmetic in
//! [`crate::classify`] only ever sees a signed minute offset, so tzdb updates
//! (or fixture offsets in tests) never touch the bucketing code.

use chrono::{DateTime, Duration, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{Result, TzSegmentError};

/// Timezone used when the caller does not pick one.
pub const DEFAULT_TZ: Tz = chrono_tz::America::Santiago;

/// Parse an IANA timezone name into a [`chrono_tz::Tz`].
///
/// # Examples
///
/// ```
/// use tzsegment_core::tz::parse_tz;
///
/// let tz = parse_tz("America/Santiago").unwrap();
/// assert_eq!(tz.to_string(), "America/Santiago");
/// ```
pub fn parse_tz(name: &str) -> Result<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| TzSegmentError::InvalidTimezone(name.to_string()))
}

/// Source of UTC offsets for a zone at a given instant.
///
/// Implementations must be pure lookups: the same `(instant, tz)` pair
/// always yields the same offset.
pub trait OffsetResolver: Send + Sync {
    /// Signed minutes to add to UTC to obtain local wall-clock time.
    fn offset_minutes(&self, instant: DateTime<Utc>, tz: Tz) -> i32;

    /// Local wall-clock time of `instant`.
    ///
    /// The default shifts by [`OffsetResolver::offset_minutes`], which loses
    /// any sub-minute part of the offset (historical local mean time).
    /// Resolvers with second-precision data should override it.
    fn wall_clock(&self, instant: DateTime<Utc>, tz: Tz) -> NaiveDateTime {
        let offset = self.offset_minutes(instant, tz);
        instant.naive_utc() + Duration::minutes(i64::from(offset))
    }
}

/// Resolver backed by the IANA database compiled into `chrono-tz`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TzdbResolver;

impl OffsetResolver for TzdbResolver {
    fn offset_minutes(&self, instant: DateTime<Utc>, tz: Tz) -> i32 {
        let local = tz.from_utc_datetime(&instant.naive_utc());
        local.offset().fix().local_minus_utc().div_euclid(60)
    }

    fn wall_clock(&self, instant: DateTime<Utc>, tz: Tz) -> NaiveDateTime {
        tz.from_utc_datetime(&instant.naive_utc()).naive_local()
    }
}

/// Resolver that ignores the zone and always returns the same offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedOffsetResolver(pub i32);

impl OffsetResolver for FixedOffsetResolver {
    fn offset_minutes(&self, _instant: DateTime<Utc>, _tz: Tz) -> i32 {
        self.0
    }
}

impl<R: OffsetResolver + ?Sized> OffsetResolver for &R {
    fn offset_minutes(&self, instant: DateTime<Utc>, tz: Tz) -> i32 {
        (**self).offset_minutes(instant, tz)
    }

    fn wall_clock(&self, instant: DateTime<Utc>, tz: Tz) -> NaiveDateTime {
        (**self).wall_clock(instant, tz)
    }
}

/// Wall-clock date and time of `instant` in `tz`, as seen through `resolver`.
pub fn local_wall_clock<R: OffsetResolver + ?Sized>(
    resolver: &R,
    instant: DateTime<Utc>,
    tz: Tz,
) -> NaiveDateTime {
    resolver.wall_clock(instant, tz)
}

/// Format a wall-clock time as `YYYY-MM-DD HH:MM:SS`.
pub fn format_wall_clock(local: &NaiveDateTime) -> String {
    local.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).single().unwrap()
    }

    #[test]
    fn parse_valid_timezone() {
        let tz = parse_tz("America/Santiago").unwrap();
        assert_eq!(tz, DEFAULT_TZ);
    }

    #[test]
    fn parse_invalid_timezone() {
        let result = parse_tz("Invalid/Timezone");
        if let Err(TzSegmentError::InvalidTimezone(name)) = result {
            assert_eq!(name, "Invalid/Timezone");
        } else {
            panic!("Expected InvalidTimezone error");
        }
    }

    #[test]
    fn tzdb_offset_follows_santiago_dst() {
        // Chile observes UTC-4 in winter and UTC-3 from September to April
        assert_eq!(TzdbResolver.offset_minutes(utc(2023, 7, 15, 12, 0), DEFAULT_TZ), -240);
        assert_eq!(TzdbResolver.offset_minutes(utc(2024, 1, 15, 12, 0), DEFAULT_TZ), -180);
    }

    #[test]
    fn tzdb_offset_half_hour_zones() {
        let kolkata = parse_tz("Asia/Kolkata").unwrap();
        assert_eq!(TzdbResolver.offset_minutes(utc(2024, 1, 15, 0, 0), kolkata), 330);

        let st_johns = parse_tz("America/St_Johns").unwrap();
        assert_eq!(TzdbResolver.offset_minutes(utc(2024, 1, 15, 0, 0), st_johns), -210);
    }

    #[test]
    fn wall_clock_crosses_date_boundary() {
        let local = local_wall_clock(&TzdbResolver, utc(2023, 10, 8, 1, 30), DEFAULT_TZ);
        assert_eq!(format_wall_clock(&local), "2023-10-07 22:30:00");
    }

    #[test]
    fn fixed_resolver_ignores_zone() {
        let resolver = FixedOffsetResolver(60);
        let local = local_wall_clock(&resolver, utc(2024, 1, 1, 23, 30), chrono_tz::UTC);
        assert_eq!(format_wall_clock(&local), "2024-01-02 00:30:00");
    }

    #[test]
    fn tzdb_wall_clock_keeps_sub_minute_offsets() {
        // Santiago local mean time was UTC-4:42:45
        let instant = Utc.with_ymd_and_hms(1880, 1, 1, 12, 0, 50).single().unwrap();
        let local = local_wall_clock(&TzdbResolver, instant, DEFAULT_TZ);
        assert_eq!(format_wall_clock(&local), "1880-01-01 07:18:05");

        // The minute-only seam still floors toward the earlier minute
        assert_eq!(TzdbResolver.offset_minutes(instant, DEFAULT_TZ), -283);
    }
}
