//! Session command handlers: login, logout, whoami, passwd.

use dialoguer::Input;
use owo_colors::OwoColorize;

use attendly_core::{Console, Role, Session, session::validate_new_password};

use crate::cli::{GlobalOpts, LoginArgs, PasswdArgs};
use crate::error::CliError;
use crate::output::Renderer;

use super::util;

pub async fn login(console: &Console, args: LoginArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let account = match args.account {
        Some(account) => account,
        None => {
            let prompt = if args.employee { "Employee id" } else { "Username" };
            Input::new()
                .with_prompt(prompt)
                .interact_text()
                .map_err(util::prompt_err)?
        }
    };
    let password = util::prompt_password("Password: ")?;

    let session = if args.employee {
        console.login_employee(&account, &password).await?
    } else {
        console.login_admin(&account, &password).await?
    };

    crate::config::persist_session(console);

    if !global.quiet {
        let role = session.role.map(|r| r.to_string()).unwrap_or_default();
        eprintln!("Logged in as {account} ({role})");
    }
    Ok(())
}

pub async fn logout(console: &Console, global: &GlobalOpts) -> Result<(), CliError> {
    // The local session is discarded even when the backend call fails;
    // only the error reporting differs.
    let result = console.logout().await;
    attendly_config::clear_session();

    if !global.quiet {
        eprintln!("Logged out");
    }
    result.map_err(CliError::from)
}

pub async fn whoami(console: &Console, global: &GlobalOpts) -> Result<(), CliError> {
    let session = util::establish_session(console).await?;

    Renderer::new(global).single(
        &whoami_view(&session),
        |v| {
            let mut s = format!("account: {}\nrole:    {}", v.account, v.role);
            if !v.nav.is_empty() {
                s.push_str(&format!("\nviews:   {}", v.nav.join(", ")));
            }
            s
        },
        |v| v.account.clone(),
    );
    Ok(())
}

#[derive(serde::Serialize)]
struct WhoamiView {
    account: String,
    role: String,
    nav: Vec<String>,
}

fn whoami_view(session: &Session) -> WhoamiView {
    let account = session
        .user
        .as_ref()
        .and_then(|u| u.empid.clone().or_else(|| u.username.clone()))
        .unwrap_or_default();
    let role = session.role.map(|r| r.to_string()).unwrap_or_default();
    let nav = session
        .role
        .map(|r| r.routes().iter().map(ToString::to_string).collect())
        .unwrap_or_default();
    WhoamiView { account, role, nav }
}

pub async fn passwd(console: &Console, args: PasswdArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let session = util::establish_session(console).await?;
    let role = util::session_role(&session)?;

    // Default to the logged-in account; employees can only change
    // their own password (the backend enforces this too).
    let as_employee = args.employee || role == Role::Employee;
    let account = match args.account {
        Some(account) => account,
        None => session
            .user
            .as_ref()
            .and_then(|u| {
                if as_employee {
                    u.empid.clone()
                } else {
                    u.username.clone()
                }
            })
            .ok_or(CliError::AuthRequired)?,
    };

    let old = util::prompt_password("Current password: ")?;
    let new = util::prompt_password("New password: ")?;
    let confirm = util::prompt_password("Repeat new password: ")?;

    {
        use secrecy::ExposeSecret;
        validate_new_password(new.expose_secret(), confirm.expose_secret()).map_err(|reason| {
            CliError::Validation {
                field: "password".into(),
                reason,
            }
        })?;
    }

    if as_employee {
        console
            .reset_employee_password(&account, &old, &new)
            .await?;
    } else {
        console.reset_admin_password(&account, &old, &new).await?;
    }

    if !global.quiet {
        let note = format!("Password changed for {account}");
        if Renderer::new(global).color() {
            eprintln!("{}", note.green());
        } else {
            eprintln!("{note}");
        }
    }
    Ok(())
}
