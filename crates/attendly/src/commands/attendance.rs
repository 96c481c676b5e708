//! Attendance command handlers: per-employee log and daily summary.

use chrono::{Days, Local};
use tabled::Tabled;

use attendly_core::{AttendanceDay, Console, Role, RouteId};

use crate::cli::{AttendanceArgs, GlobalOpts, SummaryArgs};
use crate::error::CliError;
use crate::output::{self, Renderer};

use super::util;

#[derive(Tabled)]
struct DayRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "First Entry")]
    first_entry: String,
    #[tabled(rename = "Last Exit")]
    last_exit: String,
    #[tabled(rename = "In Time")]
    in_time: String,
    #[tabled(rename = "Out Time")]
    out_time: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl DayRow {
    fn new(day: &AttendanceDay, color: bool) -> Self {
        Self {
            date: day.date.clone(),
            first_entry: day.first_entry.clone(),
            last_exit: day.last_exit.clone(),
            in_time: day.total_in_time.clone(),
            out_time: day.total_out_time.clone(),
            status: output::status_label(day.status, color),
        }
    }
}

// ── Per-employee log ────────────────────────────────────────────────

pub async fn log(
    console: &Console,
    args: AttendanceArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let session = util::establish_session(console).await?;

    // Employees see their own log; the admin-side listing is gated like
    // the rest of the Employees section.
    match util::session_role(&session)? {
        Role::Employee => {
            let own = session.user.as_ref().and_then(|u| u.empid.as_deref());
            if own != Some(args.empid.as_str()) {
                return Err(CliError::RoleDenied {
                    role: Role::Employee.to_string(),
                    section: "other employees' attendance".into(),
                });
            }
        }
        _ => util::require_route(&session, RouteId::Employees)?,
    }

    let today = Local::now().date_naive();
    let start = args
        .from
        .unwrap_or_else(|| today.checked_sub_days(Days::new(30)).unwrap_or(today));
    let end = args.to.unwrap_or(today);
    if start > end {
        return Err(CliError::Validation {
            field: "from".into(),
            reason: format!("range start {start} is after range end {end}"),
        });
    }

    let days = console.fetch_attendance(&args.empid, start, end).await?;

    let out = Renderer::new(global);
    let color = out.color();
    out.list(
        &days,
        |d| DayRow::new(d, color),
        |d| format!("{} {}", d.date, output::status_word(d.status)),
    );
    out.footnote(&output::attendance_footer(&days));
    Ok(())
}

// ── Daily summary ───────────────────────────────────────────────────

pub async fn summary(
    console: &Console,
    args: SummaryArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let session = util::establish_session(console).await?;
    util::require_route(&session, RouteId::Home)?;

    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    let summary = console.fetch_summary(date).await?;

    let out = Renderer::new(global);
    let color = out.color();
    out.single(
        &summary,
        |s| output::summary_table(s, color),
        |s| format!("{}/{}", s.total_present, s.total_employees),
    );
    Ok(())
}
