//! Clap derive structures for the `attendly` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// attendly -- console for the face-recognition attendance system
#[derive(Debug, Parser)]
#[command(
    name = "attendly",
    version,
    about = "Manage employees, attendance, and camera recognition from the command line",
    long_about = "Administration console for the Attendly attendance backend.\n\n\
        Authenticates with a session cookie (persisted between invocations),\n\
        derives your role from the session, and gates admin sections accordingly.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Backend base URL (overrides the config file)
    #[arg(long, short = 'c', env = "ATTENDLY_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "ATTENDLY_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "ATTENDLY_INSECURE", global = true)]
    pub insecure: bool,

    /// Path to a custom CA certificate (PEM)
    #[arg(long, env = "ATTENDLY_CA_CERT", global = true)]
    pub ca_cert: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, env = "ATTENDLY_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in and persist the session cookie
    Login(LoginArgs),

    /// Log out and discard the session cookie
    Logout,

    /// Show the current session and derived role
    Whoami,

    /// Change the current account's password
    Passwd(PasswdArgs),

    /// Manage employees
    #[command(alias = "emp", alias = "e")]
    Employees(EmployeesArgs),

    /// Manage admin accounts (superuser only)
    Admins(AdminsArgs),

    /// Manage an employee's reference photos
    Photos(PhotosArgs),

    /// Show an employee's attendance log with derived metrics
    #[command(alias = "att")]
    Attendance(AttendanceArgs),

    /// Show the organisation-wide daily summary
    Summary(SummaryArgs),

    /// Manage entrance/exit camera streams (superuser only)
    Configure(ConfigureArgs),

    /// Control the recognition model service
    Model(ModelArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Auth ─────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Log in as an employee (by empid) instead of an admin
    #[arg(long, short = 'e')]
    pub employee: bool,

    /// Username (admin) or empid (employee); prompted when omitted
    pub account: Option<String>,
}

#[derive(Debug, Args)]
pub struct PasswdArgs {
    /// Change an employee password (by empid) instead of an admin one
    #[arg(long, short = 'e')]
    pub employee: bool,

    /// Account to change; defaults to the logged-in account
    pub account: Option<String>,
}

// ── Employees ────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct EmployeesArgs {
    #[command(subcommand)]
    pub command: EmployeesCommand,
}

#[derive(Debug, Subcommand)]
pub enum EmployeesCommand {
    /// List all employees
    #[command(alias = "ls")]
    List,

    /// Show one employee
    Get {
        /// Employee id
        empid: String,
    },

    /// Create an employee (prints the generated one-time password)
    Create {
        /// Employee id
        empid: String,

        /// Full name
        #[arg(long, short = 'n')]
        name: String,

        /// Email address
        #[arg(long, short = 'm')]
        email: String,

        /// Reference photo to enrol alongside the record
        #[arg(long, short = 'f')]
        photo: Option<PathBuf>,
    },

    /// Update an employee; omitted fields keep their current value
    Update {
        /// Current employee id (the record to update)
        id: String,

        /// New employee id (re-keys the record)
        #[arg(long)]
        empid: Option<String>,

        /// New full name
        #[arg(long, short = 'n')]
        name: Option<String>,

        /// New email address
        #[arg(long, short = 'm')]
        email: Option<String>,

        /// Prompt for and set a new password
        #[arg(long)]
        password: bool,
    },

    /// Delete an employee
    #[command(alias = "rm")]
    Delete {
        /// Employee id
        empid: String,
    },
}

// ── Admin accounts ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct AdminsArgs {
    #[command(subcommand)]
    pub command: AdminsCommand,
}

#[derive(Debug, Subcommand)]
pub enum AdminsCommand {
    /// List admin accounts
    #[command(alias = "ls")]
    List,

    /// Create an admin account (prompts for the password)
    Add {
        /// Username for the new admin
        username: String,
    },

    /// Delete an admin account by id
    #[command(alias = "rm")]
    Delete {
        /// Admin record id (see `attendly admins list`)
        id: i64,
    },
}

// ── Photos ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct PhotosArgs {
    #[command(subcommand)]
    pub command: PhotosCommand,
}

#[derive(Debug, Subcommand)]
pub enum PhotosCommand {
    /// List an employee's reference photo URLs
    #[command(alias = "ls")]
    List {
        /// Employee id
        empid: String,
    },

    /// Upload a reference photo
    Add {
        /// Employee id
        empid: String,

        /// Image file to upload
        file: PathBuf,
    },

    /// Delete a reference photo by filename
    #[command(alias = "rm")]
    Delete {
        /// Employee id
        empid: String,

        /// Photo filename as shown in the listing
        file_name: String,
    },
}

// ── Attendance ───────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct AttendanceArgs {
    /// Employee id
    pub empid: String,

    /// Range start (YYYY-MM-DD); defaults to 30 days ago
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Range end (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub to: Option<NaiveDate>,
}

#[derive(Debug, Args)]
pub struct SummaryArgs {
    /// Date to summarise (YYYY-MM-DD); defaults to today
    pub date: Option<NaiveDate>,
}

// ── Camera configuration ─────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigureArgs {
    #[command(subcommand)]
    pub command: ConfigureCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigureCommand {
    /// Show the saved camera stream URLs
    Show,

    /// Save camera stream URLs
    Set {
        /// Entrance camera RTSP URL
        #[arg(long)]
        enter: Option<String>,

        /// Exit camera RTSP URL
        #[arg(long)]
        exit: Option<String>,
    },

    /// Print the backend proxy URL for previewing a camera feed
    Preview {
        /// Which camera to preview
        #[arg(value_enum)]
        camera: Camera,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Camera {
    Enter,
    Exit,
}

// ── Recognition model ────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ModelArgs {
    #[command(subcommand)]
    pub command: ModelCommand,
}

#[derive(Debug, Subcommand)]
pub enum ModelCommand {
    /// Start the recognition service
    Start,

    /// Stop the recognition service
    Stop,

    /// Show whether the recognition service is running
    Status,

    /// Regenerate face embeddings for all enrolled employees
    Embeddings,
}

// ── CLI configuration ────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Interactively create the config file
    Init,

    /// Print the active configuration
    Show,

    /// Print the config file path
    Path,
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_tree_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn login_accepts_employee_flag() {
        let cli = Cli::try_parse_from(["attendly", "login", "--employee", "E042"]).expect("parse");
        match cli.command {
            Command::Login(args) => {
                assert!(args.employee);
                assert_eq!(args.account.as_deref(), Some("E042"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn attendance_parses_date_range() {
        let cli = Cli::try_parse_from([
            "attendly",
            "attendance",
            "E042",
            "--from",
            "2025-06-01",
            "--to",
            "2025-06-30",
        ])
        .expect("parse");
        match cli.command {
            Command::Attendance(args) => {
                assert_eq!(args.empid, "E042");
                assert_eq!(args.from.expect("parse").to_string(), "2025-06-01");
                assert_eq!(args.to.expect("parse").to_string(), "2025-06-30");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
