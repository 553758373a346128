//! Classifier configuration.

use serde::Deserialize;
use tracing::debug;

use crate::classify::TemporalClassifier;
use crate::error::{Result, TzSegmentError};
use crate::segment::SegmentWidth;
use crate::tz::{DEFAULT_TZ, parse_tz};

/// Serializable settings for a [`TemporalClassifier`].
///
/// Missing fields take the defaults (`America/Santiago`, 15 minutes).
///
/// ```
/// use tzsegment_core::config::ClassifierConfig;
///
/// let config: ClassifierConfig = serde_json::from_str(r#"{"segment_minutes": 30}"#).unwrap();
/// let classifier = config.build().unwrap();
/// assert_eq!(classifier.width().total(), 48);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassifierConfig {
    /// IANA timezone name.
    pub timezone: String,
    /// Segment width in minutes.
    pub segment_minutes: u32,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TZ.name().to_string(),
            segment_minutes: SegmentWidth::DEFAULT.minutes(),
        }
    }
}

impl ClassifierConfig {
    /// Parse a JSON document into a config.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| TzSegmentError::ConfigError(e.to_string()))
    }

    /// Validate the settings and build a tzdb-backed classifier.
    pub fn build(&self) -> Result<TemporalClassifier> {
        let tz = parse_tz(&self.timezone)?;
        let width = SegmentWidth::new(self.segment_minutes)?;
        debug!(tz = %tz, width = %width, "built classifier");
        Ok(TemporalClassifier::new(tz, width))
    }
}
