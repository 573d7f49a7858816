use jiff::civil::DateTime;
use jiff::tz::TimeZone;
use jiff::{SignedDuration, Timestamp};

/// Absolute expiry for a link issued at `issued_at` with a ttl in seconds.
///
/// Both the presigned URL validity window and the advisory expiry text on
/// the page must derive from the same issuance instant, so this is computed
/// exactly once per request.
pub fn expires_at(issued_at: Timestamp, ttl_secs: u64) -> Timestamp {
    let ttl = i64::try_from(ttl_secs).unwrap_or(i64::MAX);
    issued_at
        .saturating_add(SignedDuration::from_secs(ttl))
        .expect("adding a SignedDuration to a Timestamp is infallible")
}

/// Formats a timestamp as `YYYY-MM-DD HH:MM UTC` (download pages).
pub fn format_utc_minutes(ts: Timestamp) -> String {
    ts.strftime("%Y-%m-%d %H:%M UTC").to_string()
}

/// Formats a timestamp as `YYYY-MM-DD HH:MM:SS UTC` (upload pages).
pub fn format_utc_seconds(ts: Timestamp) -> String {
    ts.strftime("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Parses a string produced by [`format_utc_seconds`] back to a timestamp.
pub fn parse_utc_seconds(s: &str) -> Result<Timestamp, jiff::Error> {
    let civil = DateTime::strptime(
        "%Y-%m-%d %H:%M:%S",
        s.trim_end_matches(" UTC"),
    )?;
    Ok(civil.to_zoned(TimeZone::UTC)?.timestamp())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiry_is_issuance_plus_ttl() {
        let issued: Timestamp = "2026-08-23T12:00:00Z".parse().unwrap();
        let expiry = expires_at(issued, 3600);
        assert_eq!(expiry, "2026-08-23T13:00:00Z".parse::<Timestamp>().unwrap());
    }

    #[test]
    fn oversized_ttl_saturates_instead_of_expiring_in_the_past() {
        let issued: Timestamp = "2026-08-23T12:00:00Z".parse().unwrap();
        assert!(expires_at(issued, u64::MAX) > issued);
        assert!(expires_at(issued, i64::MAX as u64 + 1) > issued);
    }

    #[test]
    fn minute_format() {
        let ts: Timestamp = "2026-08-23T18:05:42Z".parse().unwrap();
        assert_eq!(format_utc_minutes(ts), "2026-08-23 18:05 UTC");
    }

    #[test]
    fn second_format_round_trips() {
        let ts: Timestamp = "2026-08-23T18:05:42Z".parse().unwrap();
        let rendered = format_utc_seconds(ts);
        assert_eq!(rendered, "2026-08-23 18:05:42 UTC");
        assert_eq!(parse_utc_seconds(&rendered).unwrap(), ts);
    }

    #[test]
    fn second_format_truncates_subseconds() {
        let ts: Timestamp = "2026-08-23T18:05:42.734Z".parse().unwrap();
        let parsed = parse_utc_seconds(&format_utc_seconds(ts)).unwrap();
        assert_eq!(parsed.as_second(), ts.as_second());
    }
}
