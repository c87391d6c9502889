//! DATETIME text encoding shared by every table the migration writes.

use chrono::{DateTime, Utc};

use crate::constants::TIMESTAMP_FORMAT;

pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Parses the migration's own format, falling back to RFC 3339.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_str(s, TIMESTAMP_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(s))
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamp_round_trips() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 17, 8, 30, 0).unwrap();
        let text = format_timestamp(&ts);
        assert_eq!(text, "2024-05-17 08:30:00+00:00");
        assert_eq!(parse_timestamp(&text), Some(ts));
    }

    #[test]
    fn garbage_is_none() {
        assert_eq!(parse_timestamp("yesterday"), None);
    }
}
