//! Per-resource stores.
//!
//! Each store wraps one backend resource with the uniform
//! `{data, loading, error}` shape. Slices hold no references to each
//! other and nothing cascades: deleting an employee does not clear
//! the photos store, and no write triggers a re-sync beyond what its
//! own response carries.

pub mod slice;

mod admins;
mod configure;
mod employees;
mod model;
mod photos;

pub use admins::AdminsStore;
pub use configure::{ConfigureState, ConfigureStore};
pub use employees::{EmployeesStore, ManageEmployeeState, ManageEmployeeStore};
pub use model::{ModelPanelState, ModelStore};
pub use photos::PhotosStore;
pub use slice::{Slice, SliceState};

use attendly_api::{AttendanceDay, DailySummary};

/// All feature stores, owned by the [`Console`](crate::Console).
///
/// Attendance and the daily summary are plain slices; the resources
/// with local write semantics get dedicated store types.
#[derive(Default)]
pub struct Stores {
    pub employees: EmployeesStore,
    pub manage_employee: ManageEmployeeStore,
    pub admins: AdminsStore,
    pub photos: PhotosStore,
    pub attendance: Slice<Vec<AttendanceDay>>,
    pub summary: Slice<DailySummary>,
    pub configure: ConfigureStore,
    pub model: ModelStore,
}
