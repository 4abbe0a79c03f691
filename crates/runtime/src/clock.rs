//! Wall-clock helpers bridging `chrono` and [`Timestamp`].
use chrono::{DateTime, Utc};
use game_core::Timestamp;

/// Current wall-clock time.
pub fn now() -> Timestamp {
    Timestamp::from_millis(Utc::now().timestamp_millis())
}

/// Converts a timestamp for display; `None` if it is out of chrono's range.
pub fn to_datetime(timestamp: Timestamp) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(timestamp.as_millis())
}
