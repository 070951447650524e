//! Recency windows for retrieval queries.

use chrono::{DateTime, Duration, NaiveDateTime, Utc};

/// Optional "last N days" bound on a query. Absent means unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecencyWindow {
    days: Option<i64>,
}

impl RecencyWindow {
    /// Unbounded window.
    pub fn unbounded() -> Self {
        Self { days: None }
    }

    /// Window covering the last `days` days.
    pub fn last_days(days: i64) -> Self {
        Self { days: Some(days) }
    }

    /// From an optional day count, as parsed off the CLI.
    pub fn from_days(days: Option<i64>) -> Self {
        Self { days }
    }

    /// The cutoff instant, if bounded.
    pub fn cutoff(&self) -> Option<DateTime<Utc>> {
        self.days.map(|d| Utc::now() - Duration::days(d))
    }

    pub fn days(&self) -> Option<i64> {
        self.days
    }
}

/// Parse an archive timestamp defensively.
///
/// Accepts RFC 3339 (`Z` or numeric offsets) and bare
/// `YYYY-MM-DDTHH:MM:SS[.fff]` strings treated as UTC. Anything else is
/// `None`, which callers use to keep the entry rather than drop it.
pub fn parse_archived_at(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbounded_has_no_cutoff() {
        assert_eq!(RecencyWindow::unbounded().cutoff(), None);
        assert_eq!(RecencyWindow::from_days(None).cutoff(), None);
    }

    #[test]
    fn test_bounded_cutoff_is_in_the_past() {
        let cutoff = RecencyWindow::last_days(7).cutoff().unwrap();
        let age = Utc::now() - cutoff;
        assert!(age >= Duration::days(7));
        assert!(age < Duration::days(7) + Duration::minutes(1));
    }

    #[test]
    fn test_parse_rfc3339_zulu() {
        let parsed = parse_archived_at("2026-08-01T10:30:00Z").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2026-08-01T10:30:00+00:00");
    }

    #[test]
    fn test_parse_rfc3339_offset() {
        let parsed = parse_archived_at("2026-08-01T10:30:00+02:00").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2026-08-01T08:30:00+00:00");
    }

    #[test]
    fn test_parse_naive_treated_as_utc() {
        let parsed = parse_archived_at("2026-08-01T10:30:00").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2026-08-01T10:30:00+00:00");

        let parsed = parse_archived_at("2026-08-01T10:30:00.250").unwrap();
        assert_eq!(parsed.timestamp_subsec_millis(), 250);
    }

    #[test]
    fn test_parse_garbage_is_none() {
        assert_eq!(parse_archived_at("unknown"), None);
        assert_eq!(parse_archived_at(""), None);
        assert_eq!(parse_archived_at("last tuesday"), None);
    }
}
