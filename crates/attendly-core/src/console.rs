// ── Console facade ──
//
// The application-state container, constructed once at startup. Owns
// the API client, the session, and every feature store; each operation
// is one request-response cycle wired to exactly one store. No
// retries, no request de-duplication, no cancellation.

use chrono::NaiveDate;
use secrecy::{ExposeSecret, SecretString};
use tokio::sync::watch;
use tracing::{debug, info};

use attendly_api::{
    ApiClient, AttendanceDay, CameraConfig, DailySummary, Employee, Error as ApiError,
    ModelState, PhotoUpload, UserRecord,
};

use crate::error::CoreError;
use crate::session::{PasswordReset, Session, validate_new_password};
use crate::store::Stores;

// ── ShellState ──────────────────────────────────────────────────────

/// Which shell the UI should present.
///
/// `Booting` lasts exactly as long as the startup session probe; the
/// transition out of it happens once and is never re-entered. Logout
/// always lands in `Unauthenticated`, whether or not the backend call
/// succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShellState {
    #[default]
    Booting,
    Unauthenticated,
    Authenticated,
}

// ── Console ─────────────────────────────────────────────────────────

/// Central entry point for consumers.
pub struct Console {
    api: ApiClient,
    shell: watch::Sender<ShellState>,
    session: watch::Sender<Session>,
    reset: watch::Sender<PasswordReset>,
    pub stores: Stores,
}

impl Console {
    /// Create a console over an API client. Does not probe: call
    /// [`boot()`](Self::boot) to establish the shell state.
    pub fn new(api: ApiClient) -> Self {
        let (shell, _) = watch::channel(ShellState::default());
        let (session, _) = watch::channel(Session::default());
        let (reset, _) = watch::channel(PasswordReset::default());
        Self {
            api,
            shell,
            session,
            reset,
            stores: Stores::default(),
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn shell_state(&self) -> ShellState {
        *self.shell.borrow()
    }

    pub fn session(&self) -> Session {
        self.session.borrow().clone()
    }

    pub fn watch_session(&self) -> watch::Receiver<Session> {
        self.session.subscribe()
    }

    pub fn password_reset(&self) -> PasswordReset {
        self.reset.borrow().clone()
    }

    // ── Session lifecycle ───────────────────────────────────────────

    /// Run the startup session probe and settle the shell state.
    ///
    /// A one-shot: once the shell has left `Booting`, calling this
    /// again just returns the current state. The probe's
    /// expected-unauthenticated outcome is silent; any other failure
    /// is recorded on the session for the shell to surface.
    pub async fn boot(&self) -> ShellState {
        if self.shell_state() != ShellState::Booting {
            return self.shell_state();
        }

        self.session.send_modify(Session::begin);
        let next = match self.api.get_me().await {
            Ok(user) => {
                debug!("session probe succeeded");
                self.session.send_modify(|s| s.establish(user));
                ShellState::Authenticated
            }
            Err(err) => {
                debug!(error = %err, "session probe failed");
                self.session.send_modify(|s| s.reject_probe(&err));
                ShellState::Unauthenticated
            }
        };
        self.shell.send_replace(next);
        next
    }

    /// Admin login. On success the session (and derived role) replace
    /// the current one wholesale and the shell becomes authenticated.
    pub async fn login_admin(
        &self,
        username: &str,
        password: &SecretString,
    ) -> Result<Session, CoreError> {
        self.session.send_modify(Session::begin);
        match self.api.login_admin(username, password).await {
            Ok(user) => Ok(self.finish_login(user)),
            Err(err) => {
                self.session.send_modify(|s| s.reject_login(&err));
                self.shell.send_replace(ShellState::Unauthenticated);
                Err(err.into())
            }
        }
    }

    /// Employee login.
    pub async fn login_employee(
        &self,
        empid: &str,
        password: &SecretString,
    ) -> Result<Session, CoreError> {
        self.session.send_modify(Session::begin);
        match self.api.login_employee(empid, password).await {
            Ok(mut user) => {
                // Role derivation keys off empid, and not every login
                // payload carries one; the employee path must never
                // come out as an admin session.
                if user.empid.is_none() {
                    user.empid = Some(empid.to_owned());
                }
                Ok(self.finish_login(user))
            }
            Err(err) => {
                self.session.send_modify(|s| s.reject_login(&err));
                self.shell.send_replace(ShellState::Unauthenticated);
                Err(err.into())
            }
        }
    }

    fn finish_login(&self, user: UserRecord) -> Session {
        info!(role = ?crate::Role::derive(&user), "login successful");
        self.session.send_modify(|s| s.establish(user));
        self.shell.send_replace(ShellState::Authenticated);
        self.session()
    }

    /// Log out. The client-side session is cleared on both paths; a
    /// backend failure is reported but does not keep the session.
    pub async fn logout(&self) -> Result<(), CoreError> {
        let result = self.api.logout().await;
        self.session
            .send_modify(|s| s.finish_logout(result.as_ref().copied()));
        self.shell.send_replace(ShellState::Unauthenticated);
        result.map_err(CoreError::from)
    }

    /// Change an admin's password. Tracks its own status flags and
    /// leaves the session untouched.
    pub async fn reset_admin_password(
        &self,
        username: &str,
        old_password: &SecretString,
        new_password: &SecretString,
    ) -> Result<(), CoreError> {
        check_password_policy(new_password)?;
        self.reset.send_modify(PasswordReset::begin);
        match self
            .api
            .change_admin_password(username, old_password, new_password)
            .await
        {
            Ok(()) => {
                self.reset.send_modify(PasswordReset::succeed);
                Ok(())
            }
            Err(err) => {
                self.reset.send_modify(|r| r.fail(&err));
                Err(err.into())
            }
        }
    }

    /// Change an employee's password.
    pub async fn reset_employee_password(
        &self,
        empid: &str,
        old_password: &SecretString,
        new_password: &SecretString,
    ) -> Result<(), CoreError> {
        check_password_policy(new_password)?;
        self.reset.send_modify(PasswordReset::begin);
        match self
            .api
            .change_employee_password(empid, old_password, new_password)
            .await
        {
            Ok(()) => {
                self.reset.send_modify(PasswordReset::succeed);
                Ok(())
            }
            Err(err) => {
                self.reset.send_modify(|r| r.fail(&err));
                Err(err.into())
            }
        }
    }

    // ── Employees ───────────────────────────────────────────────────

    pub async fn fetch_employees(&self) -> Result<Vec<Employee>, CoreError> {
        self.stores.employees.begin_list();
        match self.api.list_employees().await {
            Ok(employees) => {
                self.stores.employees.listed(employees.clone());
                Ok(employees)
            }
            Err(err) => {
                self.stores.employees.failed(&err);
                Err(err.into())
            }
        }
    }

    pub async fn fetch_employee(&self, empid: &str) -> Result<Employee, CoreError> {
        self.stores.manage_employee.begin_fetch();
        match self.api.get_employee(empid).await {
            Ok(employee) => {
                self.stores.manage_employee.fetched(employee.clone());
                Ok(employee)
            }
            Err(err) => {
                self.stores.manage_employee.failed(&err);
                Err(err.into())
            }
        }
    }

    /// Create an employee. The one-time password lands in the manager
    /// store; display it via
    /// [`take_created`](crate::store::ManageEmployeeStore::take_created).
    pub async fn create_employee(
        &self,
        empid: &str,
        name: &str,
        email: &str,
        photo: Option<PhotoUpload>,
    ) -> Result<(), CoreError> {
        self.stores.manage_employee.begin_create();
        match self.api.create_employee(empid, name, email, photo).await {
            Ok(created) => {
                self.stores.manage_employee.created(created);
                Ok(())
            }
            Err(err) => {
                self.stores.manage_employee.failed(&err);
                Err(err.into())
            }
        }
    }

    /// Update an employee. When `empid` differs from `id` the record is
    /// re-keyed and callers must address it by the new identifier.
    pub async fn update_employee(
        &self,
        id: &str,
        empid: &str,
        name: &str,
        email: &str,
        password: Option<&SecretString>,
    ) -> Result<Employee, CoreError> {
        self.stores.manage_employee.begin_update();
        match self
            .api
            .update_employee(id, empid, name, email, password)
            .await
        {
            Ok(employee) => {
                self.stores.manage_employee.updated(employee.clone());
                Ok(employee)
            }
            Err(err) => {
                self.stores.manage_employee.failed(&err);
                Err(err.into())
            }
        }
    }

    pub async fn delete_employee(&self, empid: &str) -> Result<(), CoreError> {
        self.stores.manage_employee.begin_delete();
        match self.api.delete_employee(empid).await {
            Ok(()) => {
                self.stores.manage_employee.deleted();
                Ok(())
            }
            Err(err) => {
                self.stores.manage_employee.failed(&err);
                Err(err.into())
            }
        }
    }

    // ── Admins ──────────────────────────────────────────────────────

    pub async fn fetch_admins(&self) -> Result<Vec<attendly_api::Admin>, CoreError> {
        self.stores.admins.begin_list();
        match self.api.list_admins().await {
            Ok(admins) => {
                self.stores.admins.listed(admins.clone());
                Ok(admins)
            }
            Err(err) => {
                self.stores.admins.failed(&err);
                Err(err.into())
            }
        }
    }

    /// Create an admin; the local list appends the created record from
    /// the response rather than refetching.
    pub async fn add_admin(
        &self,
        username: &str,
        password: &SecretString,
    ) -> Result<attendly_api::Admin, CoreError> {
        self.stores.admins.pending();
        match self.api.add_admin(username, password).await {
            Ok(admin) => {
                self.stores.admins.added(admin.clone());
                Ok(admin)
            }
            Err(err) => {
                self.stores.admins.failed(&err);
                Err(err.into())
            }
        }
    }

    /// Delete an admin; the local list filters by id, regardless of
    /// what the response body contains.
    pub async fn delete_admin(&self, id: i64) -> Result<(), CoreError> {
        self.stores.admins.pending();
        match self.api.delete_admin(id).await {
            Ok(()) => {
                self.stores.admins.deleted(id);
                Ok(())
            }
            Err(err) => {
                self.stores.admins.failed(&err);
                Err(err.into())
            }
        }
    }

    // ── Photos ──────────────────────────────────────────────────────

    pub async fn fetch_photos(&self, empid: &str) -> Result<Vec<String>, CoreError> {
        self.stores.photos.pending();
        match self.api.list_photos(empid).await {
            Ok(urls) => {
                self.stores.photos.listed(urls.clone());
                Ok(urls)
            }
            Err(err) => {
                self.stores.photos.failed(&err);
                Err(err.into())
            }
        }
    }

    pub async fn add_photo(&self, empid: &str, photo: PhotoUpload) -> Result<String, CoreError> {
        self.stores.photos.pending();
        match self.api.add_photo(empid, photo).await {
            Ok(url) => {
                self.stores.photos.added(url.clone());
                Ok(url)
            }
            Err(err) => {
                self.stores.photos.failed(&err);
                Err(err.into())
            }
        }
    }

    pub async fn delete_photo(&self, empid: &str, file_name: &str) -> Result<(), CoreError> {
        self.stores.photos.pending();
        match self.api.delete_photo(empid, file_name).await {
            Ok(()) => {
                self.stores.photos.deleted(file_name);
                Ok(())
            }
            Err(err) => {
                self.stores.photos.failed(&err);
                Err(err.into())
            }
        }
    }

    // ── Attendance ──────────────────────────────────────────────────

    pub async fn fetch_attendance(
        &self,
        empid: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<AttendanceDay>, CoreError> {
        self.stores.attendance.pending();
        match self.api.attendance(empid, start_date, end_date).await {
            Ok(days) => {
                self.stores.attendance.fulfill(days.clone());
                Ok(days)
            }
            Err(err) => {
                self.stores.attendance.reject(err.detail());
                Err(err.into())
            }
        }
    }

    pub async fn fetch_summary(&self, date: NaiveDate) -> Result<DailySummary, CoreError> {
        self.stores.summary.pending();
        match self.api.daily_summary(date).await {
            Ok(summary) => {
                self.stores.summary.fulfill(summary.clone());
                Ok(summary)
            }
            Err(err) => {
                self.stores.summary.reject(err.detail());
                Err(err.into())
            }
        }
    }

    // ── Camera configuration ────────────────────────────────────────

    pub async fn fetch_configuration(&self) -> Result<CameraConfig, CoreError> {
        self.stores.configure.begin_fetch();
        match self.api.get_configuration().await {
            Ok(config) => {
                self.stores.configure.fetched(&config);
                Ok(config)
            }
            Err(err) => {
                self.stores.configure.failed(&err);
                Err(err.into())
            }
        }
    }

    pub async fn save_configuration(&self, config: &CameraConfig) -> Result<(), CoreError> {
        self.stores.configure.begin_save();
        match self.api.save_configuration(config).await {
            Ok(()) => {
                self.stores.configure.saved();
                Ok(())
            }
            Err(err) => {
                self.stores.configure.failed(&err);
                Err(err.into())
            }
        }
    }

    // ── Recognition model ───────────────────────────────────────────

    pub async fn start_model(&self) -> Result<String, CoreError> {
        self.stores.model.begin("Starting model...");
        match self.api.start_model().await {
            Ok(message) => {
                self.stores.model.started(message.clone());
                Ok(message)
            }
            Err(err) => {
                self.stores.model.failed(&err);
                Err(err.into())
            }
        }
    }

    pub async fn stop_model(&self) -> Result<String, CoreError> {
        self.stores.model.begin("Stopping model...");
        match self.api.stop_model().await {
            Ok(message) => {
                self.stores.model.stopped(message.clone());
                Ok(message)
            }
            Err(err) => {
                self.stores.model.failed(&err);
                Err(err.into())
            }
        }
    }

    pub async fn generate_embeddings(&self) -> Result<Vec<String>, CoreError> {
        self.stores.model.begin("Generating employee embeddings...");
        match self.api.generate_embeddings().await {
            Ok(lines) => {
                self.stores.model.embeddings_generated(lines.clone());
                Ok(lines)
            }
            Err(err) => {
                self.stores.model.failed(&err);
                Err(err.into())
            }
        }
    }

    pub async fn model_status(&self) -> Result<ModelState, CoreError> {
        self.stores.model.begin("Checking model status...");
        match self.api.model_status().await {
            Ok(status) => {
                self.stores.model.status_read(status.clone());
                Ok(status)
            }
            Err(err) => {
                self.stores.model.failed(&err);
                Err(err.into())
            }
        }
    }
}

/// Reject a new password the backend would refuse anyway, before any
/// request is dispatched.
fn check_password_policy(new_password: &SecretString) -> Result<(), CoreError> {
    let new = new_password.expose_secret();
    validate_new_password(new, new).map_err(|message| CoreError::Validation { message })
}
