//! Command output rendering.
//!
//! A [`Renderer`] is built once per invocation from the global flags
//! and carries the chosen format, the resolved color decision, and
//! quiet mode. Machine formats (`json`, `json-compact`, `yaml`, and
//! the one-id-per-line `plain`) serialize the wire data untouched;
//! only the table format colorizes and appends human-only footers, so
//! scripted consumers never see ANSI codes or derived text.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use tabled::{Table, Tabled, settings::Style};

use attendly_core::{AttendanceDay, AttendanceStatus, DailySummary, metrics};

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};

pub struct Renderer {
    format: OutputFormat,
    color: bool,
    quiet: bool,
}

impl Renderer {
    pub fn new(global: &GlobalOpts) -> Self {
        let color = match global.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err(),
        };
        Self {
            format: global.output.clone(),
            color,
            quiet: global.quiet,
        }
    }

    /// Whether ANSI color is in effect, for call sites that colorize
    /// their own cells or messages.
    pub fn color(&self) -> bool {
        self.color
    }

    /// Emit a collection. `to_row` shapes the table view and `id_of`
    /// the plain view; the structured formats serialize `data` as-is.
    pub fn list<T, R>(&self, data: &[T], to_row: impl Fn(&T) -> R, id_of: impl Fn(&T) -> String)
    where
        T: serde::Serialize,
        R: Tabled,
    {
        let text = match self.format {
            OutputFormat::Table => {
                let rows: Vec<R> = data.iter().map(to_row).collect();
                rounded_table(&rows)
            }
            OutputFormat::Plain => data.iter().map(&id_of).collect::<Vec<_>>().join("\n"),
            _ => self.serialize(data),
        };
        self.emit(&text);
    }

    /// Emit a single record. Detail views are pre-formatted strings
    /// rather than derived tables, so the table arm takes a closure.
    pub fn single<T>(&self, data: &T, detail: impl Fn(&T) -> String, id_of: impl Fn(&T) -> String)
    where
        T: serde::Serialize,
    {
        let text = match self.format {
            OutputFormat::Table => detail(data),
            OutputFormat::Plain => id_of(data),
            _ => self.serialize(data),
        };
        self.emit(&text);
    }

    /// Print pre-rendered text (messages, URLs) to stdout, respecting
    /// quiet mode.
    pub fn emit(&self, text: &str) {
        if self.quiet || text.is_empty() {
            return;
        }
        let mut stdout = io::stdout().lock();
        let _ = writeln!(stdout, "{text}");
    }

    /// Derived, human-only context under a table, on stderr so it
    /// never pollutes piped output. Suppressed for machine formats.
    pub fn footnote(&self, text: &str) {
        if !self.quiet && matches!(self.format, OutputFormat::Table) {
            eprintln!("{text}");
        }
    }

    fn serialize<T: serde::Serialize + ?Sized>(&self, data: &T) -> String {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(data)
                .unwrap_or_else(|e| format!("<serialization failed: {e}>")),
            OutputFormat::JsonCompact => serde_json::to_string(data)
                .unwrap_or_else(|e| format!("<serialization failed: {e}>")),
            _ => serde_yaml::to_string(data)
                .map(|s| s.trim_end().to_string())
                .unwrap_or_else(|e| format!("<serialization failed: {e}>")),
        }
    }
}

fn rounded_table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

// ── Attendance views ────────────────────────────────────────────────
//
// The log and summary views share the status palette, and both carry
// a derived line the wire payload does not: the metrics footer under
// the log, the headcount line under the summary.

/// Status word for a table cell, colorized when the terminal takes it.
pub fn status_label(status: AttendanceStatus, color: bool) -> String {
    let word = status_word(status);
    if !color {
        return word.into();
    }
    match status {
        AttendanceStatus::Present => word.green().to_string(),
        AttendanceStatus::Absent => word.red().to_string(),
        AttendanceStatus::Corrupted => word.yellow().to_string(),
    }
}

pub fn status_word(status: AttendanceStatus) -> &'static str {
    match status {
        AttendanceStatus::Present => "Present",
        AttendanceStatus::Absent => "Absent",
        AttendanceStatus::Corrupted => "Corrupted",
    }
}

/// The derived-metrics line under an attendance log table.
pub fn attendance_footer(days: &[AttendanceDay]) -> String {
    let t = metrics::totals(days);
    format!(
        "{} days: {} present, {} absent, {} corrupted; average in-time {}",
        t.total,
        t.present,
        t.absent,
        t.corrupted,
        metrics::average_in_time(days)
    )
}

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Empid")]
    empid: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// Detail view for the daily summary: present employees first, then
/// absent, with a headcount line under the table.
pub fn summary_table(summary: &DailySummary, color: bool) -> String {
    let row = |empid: &str, name: &str, status: AttendanceStatus| SummaryRow {
        empid: empid.into(),
        name: name.into(),
        status: status_label(status, color),
    };
    let rows: Vec<SummaryRow> = summary
        .present_employees
        .iter()
        .map(|e| row(&e.empid, &e.name, AttendanceStatus::Present))
        .chain(
            summary
                .absent_employees
                .iter()
                .map(|e| row(&e.empid, &e.name, AttendanceStatus::Absent)),
        )
        .collect();

    format!(
        "{}\n{} of {} present ({:.0}%), {} absent",
        rounded_table(&rows),
        summary.total_present,
        summary.total_employees,
        metrics::attendance_rate(summary),
        summary.total_absent
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use attendly_core::SummaryEmployee;

    fn day(date: &str, status: AttendanceStatus) -> AttendanceDay {
        AttendanceDay {
            date: date.into(),
            first_entry: "09:00:00".into(),
            last_exit: "17:30:00".into(),
            total_in_time: "8h 0m".into(),
            total_out_time: "0h 30m".into(),
            status,
        }
    }

    #[test]
    fn footer_counts_and_averages() {
        let days = vec![
            day("2026-08-26", AttendanceStatus::Present),
            day("2026-08-27", AttendanceStatus::Absent),
        ];
        let footer = attendance_footer(&days);
        assert!(footer.starts_with("2 days: 1 present, 1 absent, 0 corrupted"));
        assert!(footer.ends_with("average in-time 8h 0m"));
    }

    #[test]
    fn summary_orders_present_before_absent() {
        let summary = DailySummary {
            date: Some("2026-08-27".into()),
            total_employees: 2,
            total_present: 1,
            total_absent: 1,
            present_employees: vec![SummaryEmployee {
                empid: "E1".into(),
                name: "Asha".into(),
                department: None,
            }],
            absent_employees: vec![SummaryEmployee {
                empid: "E2".into(),
                name: "Bram".into(),
                department: None,
            }],
        };
        let rendered = summary_table(&summary, false);
        let asha = rendered.find("Asha").expect("present row");
        let bram = rendered.find("Bram").expect("absent row");
        assert!(asha < bram);
        assert!(rendered.ends_with("1 of 2 present (50%), 1 absent"));
    }

    #[test]
    fn plain_status_labels_carry_no_ansi() {
        assert_eq!(status_label(AttendanceStatus::Absent, false), "Absent");
        assert!(status_label(AttendanceStatus::Absent, true).contains("\u{1b}["));
    }
}
