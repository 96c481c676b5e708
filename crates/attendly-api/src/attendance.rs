// Attendance endpoints
//
// Per-employee day records over a date range, and the all-employee
// daily summary. Dates are ISO `YYYY-MM-DD` strings end to end.

use chrono::NaiveDate;
use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::{AttendanceDay, DailySummary};

impl ApiClient {
    /// Fetch one employee's attendance over a date range:
    /// `GET /employee/attendance/{id}?start_date&end_date`.
    pub async fn attendance(
        &self,
        empid: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<AttendanceDay>, Error> {
        let mut url = self.api_url(&format!("employee/attendance/{empid}"))?;
        url.query_pairs_mut()
            .append_pair("start_date", &start_date.to_string())
            .append_pair("end_date", &end_date.to_string());
        debug!(empid, %start_date, %end_date, "fetching attendance");
        self.get(url).await
    }

    /// Fetch the aggregate summary for one date:
    /// `GET /employee/summary/{date}`.
    pub async fn daily_summary(&self, date: NaiveDate) -> Result<DailySummary, Error> {
        let url = self.api_url(&format!("employee/summary/{date}"))?;
        debug!(%date, "fetching daily summary");
        self.get(url).await
    }
}
