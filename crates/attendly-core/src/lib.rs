//! State layer between `attendly-api` and UI consumers.
//!
//! This crate owns the client-side business logic of the attendance
//! console:
//!
//! - **[`Console`]**: the application-state container, constructed
//!   once at startup. [`Console::boot()`](Console::boot) runs the
//!   one-shot session probe that decides between the unauthenticated
//!   and authenticated shells; every other operation is a single
//!   request-response cycle that updates exactly one store.
//!
//! - **[`Session`]**: authentication state with the derived [`Role`].
//!   Role is inferred client-side from the shape of the user payload
//!   (see [`Role::derive`]); it is replaced wholesale on
//!   probe/login/logout, never partially mutated.
//!
//! - **[`RouteId`]**: the declarative route-to-capability table.
//!   Which navigation entries a role sees is a pure function of the
//!   role; gating is advisory only, the backend authorizes every call.
//!
//! - **Stores** ([`store`]): one slice per backend resource, each a
//!   uniform `{data, loading, error}` shape behind a `watch` channel.
//!   No cross-store coordination: deleting an employee does not touch
//!   the photos store.
//!
//! - **Metrics** ([`metrics`]): the client-side attendance
//!   derivations (average in-time, day counts, attendance rate).

pub mod console;
pub mod error;
pub mod metrics;
pub mod nav;
pub mod session;
pub mod store;

pub use console::{Console, ShellState};
pub use error::CoreError;
pub use nav::RouteId;
pub use session::{PasswordReset, Role, Session};
pub use store::Stores;

// Re-export the wire types consumers handle.
pub use attendly_api::Error as ApiError;
pub use attendly_api::{
    Admin, ApiClient, AttendanceDay, AttendanceStatus, CameraConfig, CreatedEmployee,
    DailySummary, EmbeddingRun, Employee, ModelState, PhotoUpload, SummaryEmployee, TlsMode,
    TransportConfig, UserRecord,
};
