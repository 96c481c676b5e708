//! Admin-account command handlers (superuser section).

use tabled::Tabled;

use attendly_core::{Admin, Console, RouteId};

use crate::cli::{AdminsArgs, AdminsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output::Renderer;

use super::util;

#[derive(Tabled)]
struct AdminRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Username")]
    username: String,
}

impl From<&Admin> for AdminRow {
    fn from(a: &Admin) -> Self {
        Self {
            id: a.id,
            username: a.username.clone(),
        }
    }
}

pub async fn handle(
    console: &Console,
    args: AdminsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let session = util::establish_session(console).await?;
    util::require_route(&session, RouteId::Admins)?;

    match args.command {
        AdminsCommand::List => {
            let admins = console.fetch_admins().await?;
            Renderer::new(global).list(&admins, |a| AdminRow::from(a), |a| a.id.to_string());
            Ok(())
        }

        AdminsCommand::Add { username } => {
            let password = util::prompt_password("Password for the new admin: ")?;
            let admin = console.add_admin(&username, &password).await?;
            if !global.quiet {
                eprintln!("Admin '{}' created (id {})", admin.username, admin.id);
            }
            Ok(())
        }

        AdminsCommand::Delete { id } => {
            if !util::confirm(&format!("Delete admin account {id}?"), global.yes)? {
                return Ok(());
            }
            console.delete_admin(id).await?;
            if !global.quiet {
                eprintln!("Admin {id} deleted");
            }
            Ok(())
        }
    }
}
