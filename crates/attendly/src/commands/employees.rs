//! Employee command handlers.

use owo_colors::OwoColorize;
use tabled::Tabled;

use attendly_core::{Console, Employee, RouteId};

use crate::cli::{EmployeesArgs, EmployeesCommand, GlobalOpts};
use crate::error::CliError;
use crate::output::Renderer;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct EmployeeRow {
    #[tabled(rename = "Empid")]
    empid: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Photo")]
    photo: String,
}

impl From<&Employee> for EmployeeRow {
    fn from(e: &Employee) -> Self {
        Self {
            empid: e.empid.clone(),
            name: e.name.clone(),
            email: e.email.clone(),
            photo: if e.photo_url.is_some() { "yes" } else { "-" }.into(),
        }
    }
}

fn detail(e: &Employee) -> String {
    let mut s = format!(
        "empid: {}\nname:  {}\nemail: {}",
        e.empid, e.name, e.email
    );
    if let Some(ref url) = e.photo_url {
        s.push_str(&format!("\nphoto: {url}"));
    }
    s
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    console: &Console,
    args: EmployeesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let session = util::establish_session(console).await?;
    util::require_route(&session, RouteId::Employees)?;

    match args.command {
        EmployeesCommand::List => {
            let employees = console.fetch_employees().await?;
            Renderer::new(global).list(&employees, |e| EmployeeRow::from(e), |e| e.empid.clone());
            Ok(())
        }

        EmployeesCommand::Get { empid } => {
            let employee = console.fetch_employee(&empid).await.map_err(|err| {
                not_found_or(err, &empid)
            })?;
            Renderer::new(global).single(&employee, detail, |e| e.empid.clone());
            Ok(())
        }

        EmployeesCommand::Create {
            empid,
            name,
            email,
            photo,
        } => {
            let upload = photo.as_deref().map(util::read_photo).transpose()?;
            console.create_employee(&empid, &name, &email, upload).await?;

            // The backend generates the password and returns it exactly
            // once; it cannot be recovered later, only reset.
            let created = console
                .stores
                .manage_employee
                .take_created()
                .ok_or_else(|| CliError::BadResponse {
                    message: "create response missing the employee record".into(),
                })?;

            if !global.quiet {
                eprintln!("Employee {} created", created.empid);
                if let Some(ref password) = created.password {
                    if Renderer::new(global).color() {
                        eprintln!("One-time password: {}", password.yellow().bold());
                    } else {
                        eprintln!("One-time password: {password}");
                    }
                    eprintln!("This password is shown once and cannot be retrieved again.");
                }
            }
            Ok(())
        }

        EmployeesCommand::Update {
            id,
            empid,
            name,
            email,
            password,
        } => {
            // Fill omitted fields from the current record; the backend
            // expects the full form on every update.
            let current = console.fetch_employee(&id).await.map_err(|err| {
                not_found_or(err, &id)
            })?;
            let new_empid = empid.unwrap_or_else(|| current.empid.clone());
            let new_name = name.unwrap_or_else(|| current.name.clone());
            let new_email = email.unwrap_or_else(|| current.email.clone());
            let new_password = if password {
                Some(util::prompt_password("New password: ")?)
            } else {
                None
            };

            let updated = console
                .update_employee(&id, &new_empid, &new_name, &new_email, new_password.as_ref())
                .await?;

            if !global.quiet {
                if updated.empid == id {
                    eprintln!("Employee {id} updated");
                } else {
                    eprintln!("Employee {id} updated; now addressed as {}", updated.empid);
                }
            }
            Ok(())
        }

        EmployeesCommand::Delete { empid } => {
            if !util::confirm(
                &format!("Delete employee '{empid}' and their enrolment?"),
                global.yes,
            )? {
                return Ok(());
            }
            console.delete_employee(&empid).await.map_err(|err| {
                not_found_or(err, &empid)
            })?;
            if !global.quiet {
                eprintln!("Employee {empid} deleted");
            }
            Ok(())
        }
    }
}

/// Promote a backend 404 into the CLI's not-found shape.
fn not_found_or(err: attendly_core::CoreError, empid: &str) -> CliError {
    if let attendly_core::CoreError::Api(attendly_core::ApiError::Api { status: 404, .. }) = err {
        return CliError::NotFound {
            resource_type: "employee".into(),
            identifier: empid.into(),
            list_command: "employees list".into(),
        };
    }
    err.into()
}
