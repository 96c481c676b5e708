//! Async HTTP client for the Attendly attendance backend.
//!
//! The backend is a session-cookie REST API: `POST /login` (or
//! `POST /employee/login`) sets a session cookie in the client's jar,
//! and every subsequent request is credentialed with it. Endpoint
//! families (employees, admins, photos, attendance, camera
//! configuration, recognition model) are implemented as inherent
//! methods on [`ApiClient`] in separate files to keep the client
//! module focused on transport mechanics.

pub mod attendance;
pub mod auth;
pub mod client;
pub mod employees;
pub mod error;
pub mod models;
pub mod transport;

mod admins;
mod configure;
mod model;
mod photos;

pub use client::ApiClient;
pub use employees::PhotoUpload;
pub use error::Error;
pub use transport::{TlsMode, TransportConfig};

pub use models::{
    Admin, AttendanceDay, AttendanceStatus, CameraConfig, CreatedEmployee, DailySummary,
    EmbeddingRun, Employee, ModelState, SummaryEmployee, UserRecord,
};
