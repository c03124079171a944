//! Duration and summary-line rendering.

use chrono::{DateTime, Duration, Local};

use crate::entry::TimeEntry;

/// Formats an elapsed duration as `{H}h {M}m `.
///
/// Any remainder seconds within the current minute round the minute count
/// *up*. Components that are zero are omitted entirely; each rendered
/// component keeps its trailing space. Negative durations render as empty.
pub fn format_duration(elapsed: Duration) -> String {
    let seconds = elapsed.num_seconds().max(0);
    let mut minutes = seconds / 60;
    if seconds % 60 != 0 {
        minutes += 1;
    }
    let hours = minutes / 60;
    let minutes = minutes % 60;

    let hours_str = if hours > 0 {
        format!("{hours}h ")
    } else {
        String::new()
    };
    let minutes_str = if minutes > 0 {
        format!("{minutes}m ")
    } else {
        String::new()
    };
    format!("{hours_str}{minutes_str}")
}

/// Renders the display line for one entry.
///
/// Open entries are marked with `" --"`, closed ones with three spaces, and
/// the label follows after `" : "`.
pub fn entry_line(entry: &TimeEntry, now: DateTime<Local>) -> String {
    let duration = format_duration(entry.elapsed(now));
    let marker = if entry.is_open() { " --" } else { "   " };
    format!("{duration}{marker} : {}", entry.label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn exact_minutes_do_not_round() {
        assert_eq!(format_duration(Duration::seconds(60)), "1m ");
        assert_eq!(format_duration(Duration::seconds(120)), "2m ");
    }

    #[test]
    fn remainder_seconds_round_up() {
        assert_eq!(format_duration(Duration::seconds(1)), "1m ");
        assert_eq!(format_duration(Duration::seconds(61)), "2m ");
        assert_eq!(format_duration(Duration::seconds(119)), "2m ");
    }

    #[test]
    fn zero_renders_empty() {
        assert_eq!(format_duration(Duration::seconds(0)), "");
    }

    #[test]
    fn negative_renders_empty() {
        assert_eq!(format_duration(Duration::seconds(-30)), "");
    }

    #[test]
    fn whole_hours_omit_minutes() {
        assert_eq!(format_duration(Duration::hours(2)), "2h ");
    }

    #[test]
    fn hours_and_minutes_combine() {
        assert_eq!(format_duration(Duration::seconds(3661)), "1h 2m ");
        assert_eq!(format_duration(Duration::minutes(90)), "1h 30m ");
    }

    #[test]
    fn open_entry_line_uses_running_marker() {
        let now = Local.with_ymd_and_hms(2025, 3, 10, 9, 0, 30).unwrap();
        let entry = TimeEntry::open(
            "deep work",
            Local.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap(),
        );
        assert_eq!(entry_line(&entry, now), "1m  -- : deep work");
    }

    #[test]
    fn closed_entry_line_uses_blank_marker() {
        let start = Local.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap();
        let mut entry = TimeEntry::open("deep work", start);
        entry.end = Some(Local.with_ymd_and_hms(2025, 3, 10, 10, 2, 0).unwrap());

        let now = Local.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap();
        assert_eq!(entry_line(&entry, now), "1h 2m     : deep work");
    }

    #[test]
    fn just_started_entry_has_empty_duration() {
        let now = Local.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap();
        let entry = TimeEntry::open("deep work", now);
        assert_eq!(entry_line(&entry, now), " -- : deep work");
    }
}
