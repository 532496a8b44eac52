//! Time source for emitted events

use chrono::{DateTime, SecondsFormat, Utc};

/// Supplies the instant stamped on an outgoing workflow run update
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// `YYYY-MM-DDTHH:MM:SSZ`, whole seconds, UTC
pub fn format_event_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_whole_seconds_with_zulu_suffix() {
        let at = Utc.with_ymd_and_hms(2025, 8, 5, 3, 4, 5).unwrap()
            + chrono::Duration::milliseconds(789);
        assert_eq!(format_event_timestamp(at), "2025-08-05T03:04:05Z");
    }

    #[test]
    fn fixed_clock_is_stable() {
        let at = Utc.with_ymd_and_hms(2024, 1, 31, 23, 59, 59).unwrap();
        let clock = FixedClock(at);
        assert_eq!(clock.now(), clock.now());
        assert_eq!(format_event_timestamp(clock.now()), "2024-01-31T23:59:59Z");
    }

    #[test]
    fn system_clock_output_matches_format() {
        let stamp = format_event_timestamp(SystemClock.now());
        assert_eq!(stamp.len(), "2025-08-05T03:04:05Z".len());
        assert!(stamp.ends_with('Z'));
        assert_eq!(&stamp[10..11], "T");
    }
}
