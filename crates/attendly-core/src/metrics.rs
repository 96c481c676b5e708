//! Client-side attendance derivations.
//!
//! The backend ships durations pre-formatted as `"<H>h <M>m"` strings;
//! the average is computed here by parsing them back into minutes,
//! summing over Present days only, and reformatting. An unparseable
//! duration poisons the whole average; the placeholder `"-h -m"` is
//! rendered rather than a partial number.

use attendly_api::{AttendanceDay, AttendanceStatus, DailySummary};

/// Rendered when the average cannot be computed.
pub const AVERAGE_PLACEHOLDER: &str = "-h -m";

/// Parse a `"<H>h <M>m"` duration into total minutes.
///
/// The minutes part is optional (`"7h"` parses as 420). Returns `None`
/// for anything else, including the `"-"` the backend uses on absent
/// days and hour counts too large to hold in minutes.
pub fn parse_duration_minutes(s: &str) -> Option<u32> {
    let (hours, rest) = s.split_once('h')?;
    let hours: u32 = hours.trim().parse().ok()?;
    let minutes_str = rest.replace('m', "");
    let minutes_str = minutes_str.trim();
    let minutes: u32 = if minutes_str.is_empty() {
        0
    } else {
        minutes_str.parse().ok()?
    };
    hours.checked_mul(60)?.checked_add(minutes)
}

/// Format total minutes back into `"<H>h <M>m"`.
pub fn format_minutes(total: u32) -> String {
    format!("{}h {}m", total / 60, total % 60)
}

/// Average in-time over Present days.
///
/// Sums `totalInTime` across status=Present records, divides by the
/// number of present days (substituting 1 when there are none, so an
/// all-absent range averages to `"0h 0m"` rather than dividing by
/// zero), and reformats. Any unparseable Present duration yields the
/// placeholder, as does a sum that no longer fits in minutes.
pub fn average_in_time(days: &[AttendanceDay]) -> String {
    if days.is_empty() {
        return format_minutes(0);
    }

    let mut sum = 0u32;
    let mut present = 0u32;
    for day in days {
        if day.status != AttendanceStatus::Present {
            continue;
        }
        let Some(next) = parse_duration_minutes(&day.total_in_time)
            .and_then(|minutes| sum.checked_add(minutes))
        else {
            return AVERAGE_PLACEHOLDER.into();
        };
        sum = next;
        present += 1;
    }

    format_minutes(sum / present.max(1))
}

/// Day counts over a fetched attendance range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttendanceTotals {
    pub total: usize,
    pub present: usize,
    pub absent: usize,
    pub corrupted: usize,
}

pub fn totals(days: &[AttendanceDay]) -> AttendanceTotals {
    let mut t = AttendanceTotals {
        total: days.len(),
        ..AttendanceTotals::default()
    };
    for day in days {
        match day.status {
            AttendanceStatus::Present => t.present += 1,
            AttendanceStatus::Absent => t.absent += 1,
            AttendanceStatus::Corrupted => t.corrupted += 1,
        }
    }
    t
}

/// Percent of employees present in a daily summary (0.0 when the
/// company is empty).
pub fn attendance_rate(summary: &DailySummary) -> f64 {
    if summary.total_employees == 0 {
        return 0.0;
    }
    f64::from(summary.total_present) / f64::from(summary.total_employees) * 100.0
}
