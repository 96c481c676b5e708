//! Command dispatch: bridges CLI args -> console operations -> output.

pub mod admins;
pub mod attendance;
pub mod auth;
pub mod config_cmd;
pub mod configure;
pub mod employees;
pub mod model_cmd;
pub mod photos;
pub mod util;

use attendly_core::Console;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a backend-bound command to the appropriate handler.
pub async fn dispatch(cmd: Command, console: &Console, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Login(args) => auth::login(console, args, global).await,
        Command::Logout => auth::logout(console, global).await,
        Command::Whoami => auth::whoami(console, global).await,
        Command::Passwd(args) => auth::passwd(console, args, global).await,
        Command::Employees(args) => employees::handle(console, args, global).await,
        Command::Admins(args) => admins::handle(console, args, global).await,
        Command::Photos(args) => photos::handle(console, args, global).await,
        Command::Attendance(args) => attendance::log(console, args, global).await,
        Command::Summary(args) => attendance::summary(console, args, global).await,
        Command::Configure(args) => configure::handle(console, args, global).await,
        Command::Model(args) => model_cmd::handle(console, args, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
