//! Wire types for the attendance backend.
//!
//! Field names follow the backend's JSON exactly (a mix of snake_case
//! and camelCase, renamed per field). These double as the domain types:
//! there is a single API surface, so no separate canonical model layer
//! sits between the wire and the stores.

use serde::{Deserialize, Serialize};

// ── Session / identity ──────────────────────────────────────────────

/// The object returned by `GET /getme` and the login endpoints.
///
/// Opaque and backend-shaped: an employee session carries `empid`, an
/// admin session carries `username`. `password` appears exactly once,
/// on the employee-create response, as a one-time display value: it is
/// never persisted and cannot be refetched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Anything else the backend chooses to include.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ── Employees ───────────────────────────────────────────────────────

/// An employee record. `empid` is the externally visible identifier,
/// used both for display and as the routing key: and it is mutable,
/// so after a re-keying update the old identifier no longer resolves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub empid: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "photoUrl", default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

/// Create response: the new record plus its one-time password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedEmployee {
    pub empid: String,
    pub name: String,
    pub email: String,
    /// Generated by the backend on create; shown once, never refetchable.
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EmployeeListEnvelope {
    pub employees: Vec<Employee>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EmployeeEnvelope {
    pub employee: Employee,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpdatedEmployeeEnvelope {
    pub emp: Employee,
}

// ── Admins ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Admin {
    pub id: i64,
    pub username: String,
}

// ── Photos ──────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub(crate) struct PhotoListEnvelope {
    pub urls: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddedPhotoEnvelope {
    pub photo_url: String,
}

// ── Attendance ──────────────────────────────────────────────────────

/// Per-day attendance status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
    /// Entry/exit events that don't pair up (e.g. an exit without an
    /// entry); the backend flags these rather than guessing.
    Corrupted,
}

/// One day of attendance for one employee.
///
/// Durations are pre-formatted by the backend as `"<H>h <M>m"` strings
/// (or `"-"` when absent); client-side metrics parse them back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceDay {
    pub date: String,
    #[serde(rename = "firstEntry", default)]
    pub first_entry: String,
    #[serde(rename = "lastExit", default)]
    pub last_exit: String,
    #[serde(rename = "totalInTime", default)]
    pub total_in_time: String,
    #[serde(rename = "totalOutTime", default)]
    pub total_out_time: String,
    pub status: AttendanceStatus,
}

/// Aggregate attendance for a single date, across all employees.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DailySummary {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(rename = "totalEmployees", default)]
    pub total_employees: u32,
    #[serde(rename = "totalPresent", default)]
    pub total_present: u32,
    #[serde(rename = "totalAbsent", default)]
    pub total_absent: u32,
    #[serde(rename = "presentEmployees", default)]
    pub present_employees: Vec<SummaryEmployee>,
    #[serde(rename = "absentEmployees", default)]
    pub absent_employees: Vec<SummaryEmployee>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryEmployee {
    pub empid: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

// ── Camera configuration ────────────────────────────────────────────

/// RTSP source URLs for the entrance and exit cameras.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CameraConfig {
    #[serde(default)]
    pub camera_enter: String,
    #[serde(default)]
    pub camera_exit: String,
}

// ── Recognition model ───────────────────────────────────────────────

/// Reported state of the recognition pipeline. Not polled: the value is
/// only as fresh as the last explicit status request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelState {
    Running,
    Stopped,
    /// Anything the backend reports that we don't recognize.
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for ModelState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Running => f.write_str("running"),
            Self::Stopped => f.write_str("stopped"),
            Self::Unknown => f.write_str("unknown"),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ModelStatusEnvelope {
    #[serde(default)]
    pub status: Option<ModelState>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ModelMessageEnvelope {
    #[serde(default)]
    pub message: Option<String>,
}

/// Result of an embedding generation run: one log line per employee
/// processed (or a single summary line).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmbeddingRun {
    #[serde(default)]
    pub logs: Vec<String>,
}
