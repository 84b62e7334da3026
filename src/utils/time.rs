//! Time utilities: parsing trip timestamps, splitting durations.

use chrono::NaiveDateTime;

const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
];

pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

/// Split seconds into whole (hours, minutes, seconds), truncating.
pub fn split_secs(secs: i64) -> (i64, i64, i64) {
    (secs / 3600, (secs % 3600) / 60, secs % 60)
}
