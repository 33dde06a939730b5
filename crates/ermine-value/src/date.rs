//! Date values
//!
//! A date is an epoch timestamp in milliseconds. Calendar math goes
//! through `chrono`.

use chrono::{DateTime, Utc};

/// A timestamp value (milliseconds since the Unix epoch)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsDate {
    epoch_ms: i64,
}

impl JsDate {
    /// Create a date for the current instant.
    pub fn now() -> Self {
        Self {
            epoch_ms: Utc::now().timestamp_millis(),
        }
    }

    /// Create a date from epoch milliseconds.
    pub fn from_timestamp_millis(epoch_ms: i64) -> Self {
        Self { epoch_ms }
    }

    /// Epoch milliseconds.
    pub fn timestamp_millis(&self) -> i64 {
        self.epoch_ms
    }

    /// Convert to a `chrono` datetime. `None` when the timestamp is outside
    /// the representable range.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.epoch_ms)
    }

    /// ISO-8601 rendering with millisecond precision.
    pub fn to_iso_string(&self) -> Option<String> {
        self.to_datetime()
            .map(|dt| dt.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let d = JsDate::from_timestamp_millis(1_700_000_000_123);
        assert_eq!(d.timestamp_millis(), 1_700_000_000_123);
        assert_eq!(
            d.to_iso_string().as_deref(),
            Some("2023-11-14T22:13:20.123Z")
        );
    }

    #[test]
    fn test_out_of_range() {
        let d = JsDate::from_timestamp_millis(i64::MAX);
        assert!(d.to_datetime().is_none());
        assert!(d.to_iso_string().is_none());
    }
}
