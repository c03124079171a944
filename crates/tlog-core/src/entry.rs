//! The recorded activity interval.

use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Serialize};

/// One recorded activity interval.
///
/// An entry with `end == None` is *open* (currently running). The ledger
/// guarantees at most one open entry exists at a time.
///
/// Uses `#[serde(default)]` on optional fields so older stored entries keep
/// parsing when fields are added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    /// When the activity started. Set at creation, never changes.
    pub start: DateTime<Local>,
    /// When the activity ended, absent while the entry is running.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Local>>,
    /// What the activity was. Defaults to the empty string.
    #[serde(default)]
    pub label: String,
}

impl TimeEntry {
    /// Opens a new entry starting at `now`.
    pub fn open(label: impl Into<String>, now: DateTime<Local>) -> Self {
        Self {
            start: now,
            end: None,
            label: label.into(),
        }
    }

    /// Whether the entry is still running.
    pub const fn is_open(&self) -> bool {
        self.end.is_none()
    }

    /// Elapsed time, measured against `now` while the entry is open.
    pub fn elapsed(&self, now: DateTime<Local>) -> Duration {
        self.end.unwrap_or(now) - self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 3, 10, h, m, s).unwrap()
    }

    #[test]
    fn open_entry_has_no_end() {
        let entry = TimeEntry::open("work", at(9, 0, 0));
        assert!(entry.is_open());
        assert_eq!(entry.label, "work");
    }

    #[test]
    fn elapsed_uses_now_while_open() {
        let entry = TimeEntry::open("work", at(9, 0, 0));
        assert_eq!(entry.elapsed(at(9, 30, 0)), Duration::minutes(30));
    }

    #[test]
    fn elapsed_uses_end_once_closed() {
        let mut entry = TimeEntry::open("work", at(9, 0, 0));
        entry.end = Some(at(10, 0, 0));
        // `now` past the end must not stretch the interval
        assert_eq!(entry.elapsed(at(12, 0, 0)), Duration::hours(1));
    }

    #[test]
    fn serde_roundtrip() {
        let mut entry = TimeEntry::open("deep work", at(9, 0, 0));
        entry.end = Some(at(9, 45, 0));

        let json = serde_json::to_string(&entry).unwrap();
        let parsed: TimeEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, entry);
    }

    #[test]
    fn open_entry_serializes_without_end_field() {
        let entry = TimeEntry::open("work", at(9, 0, 0));
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("\"end\""));

        let parsed: TimeEntry = serde_json::from_str(&json).unwrap();
        assert!(parsed.is_open());
    }

    #[test]
    fn missing_label_defaults_to_empty() {
        let json = r#"{"start":"2025-03-10T09:00:00+00:00"}"#;
        let parsed: TimeEntry = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.label, "");
        assert!(parsed.is_open());
    }
}
