// Employee stores.
//
// Two slices: the list view, and the single-employee manager with
// per-operation loading flags. The create response's one-time password
// lives in the manager until it is taken for display: taking it is
// destructive, so it can only ever be shown once.

use attendly_api::{CreatedEmployee, Employee, Error as ApiError};
use tokio::sync::watch;

use super::slice::{Slice, SliceState};

// ── List ────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct EmployeesStore {
    slice: Slice<Vec<Employee>>,
}

impl EmployeesStore {
    /// List fetch clears before loading.
    pub fn begin_list(&self) {
        self.slice.mutate(|s| {
            s.data.clear();
            s.loading = true;
            s.error = None;
        });
    }

    pub fn listed(&self, employees: Vec<Employee>) {
        self.slice.fulfill(employees);
    }

    pub fn failed(&self, err: &ApiError) {
        self.slice.reject(err.detail());
    }

    pub fn current(&self) -> SliceState<Vec<Employee>> {
        self.slice.current()
    }
}

// ── Manager ─────────────────────────────────────────────────────────

/// State for create/fetch/update/delete on a single employee.
/// Loading is tracked per operation, mirroring how the console's forms
/// disable only their own trigger.
#[derive(Debug, Clone, Default)]
pub struct ManageEmployeeState {
    pub creating: bool,
    pub fetching: bool,
    pub updating: bool,
    pub deleting: bool,
    pub employee: Option<Employee>,
    /// Present only between a successful create and `take_created`.
    pub created: Option<CreatedEmployee>,
    pub message: Option<String>,
    pub error: Option<String>,
}

pub struct ManageEmployeeStore {
    tx: watch::Sender<ManageEmployeeState>,
}

impl Default for ManageEmployeeStore {
    fn default() -> Self {
        let (tx, _) = watch::channel(ManageEmployeeState::default());
        Self { tx }
    }
}

impl ManageEmployeeStore {
    pub fn begin_create(&self) {
        self.tx.send_modify(|s| {
            s.creating = true;
            s.error = None;
            s.message = None;
        });
    }

    pub fn created(&self, record: CreatedEmployee) {
        self.tx.send_modify(|s| {
            s.creating = false;
            s.created = Some(record);
            s.message = Some("Employee created".into());
        });
    }

    /// Take the one-time credential for display. Destructive: a second
    /// call returns `None`, and nothing refetches it.
    pub fn take_created(&self) -> Option<CreatedEmployee> {
        let mut taken = None;
        self.tx.send_modify(|s| taken = s.created.take());
        taken
    }

    pub fn begin_fetch(&self) {
        self.tx.send_modify(|s| {
            s.fetching = true;
            s.error = None;
            s.message = None;
        });
    }

    pub fn fetched(&self, employee: Employee) {
        self.tx.send_modify(|s| {
            s.fetching = false;
            s.employee = Some(employee);
        });
    }

    pub fn begin_update(&self) {
        self.tx.send_modify(|s| {
            s.updating = true;
            s.error = None;
            s.message = None;
        });
    }

    pub fn updated(&self, employee: Employee) {
        self.tx.send_modify(|s| {
            s.updating = false;
            s.employee = Some(employee);
            s.message = Some("Employee details updated".into());
        });
    }

    pub fn begin_delete(&self) {
        self.tx.send_modify(|s| {
            s.deleting = true;
            s.error = None;
            s.message = None;
        });
    }

    pub fn deleted(&self) {
        self.tx.send_modify(|s| {
            s.deleting = false;
            s.employee = None;
            s.message = Some("Employee deleted".into());
        });
    }

    pub fn failed(&self, err: &ApiError) {
        let detail = err.detail();
        self.tx.send_modify(|s| {
            s.creating = false;
            s.fetching = false;
            s.updating = false;
            s.deleting = false;
            s.message = None;
            s.error = Some(detail);
        });
    }

    pub fn reset(&self) {
        self.tx.send_modify(|s| *s = ManageEmployeeState::default());
    }

    pub fn current(&self) -> ManageEmployeeState {
        self.tx.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn created_record() -> CreatedEmployee {
        CreatedEmployee {
            empid: "E1".into(),
            name: "A".into(),
            email: "a@b.com".into(),
            password: Some("s3cret".into()),
        }
    }

    #[test]
    fn one_time_password_can_be_taken_exactly_once() {
        let store = ManageEmployeeStore::default();
        store.begin_create();
        store.created(created_record());

        let first = store.take_created().expect("first take");
        assert_eq!(first.password.as_deref(), Some("s3cret"));
        assert!(store.take_created().is_none());
        assert!(store.current().created.is_none());
    }

    #[test]
    fn failure_clears_all_operation_flags() {
        let store = ManageEmployeeStore::default();
        store.begin_update();
        store.failed(&ApiError::Api {
            status: 404,
            message: "Employee not found".into(),
        });
        let state = store.current();
        assert!(!state.updating && !state.creating && !state.deleting && !state.fetching);
        assert_eq!(state.error.as_deref(), Some("Employee not found"));
        assert!(state.message.is_none());
    }

    #[test]
    fn delete_clears_the_held_employee() {
        let store = ManageEmployeeStore::default();
        store.fetched(Employee {
            empid: "E1".into(),
            name: "A".into(),
            email: "a@b.com".into(),
            photo_url: None,
        });
        store.begin_delete();
        store.deleted();
        assert!(store.current().employee.is_none());
    }
}
