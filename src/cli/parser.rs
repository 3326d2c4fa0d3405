use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rAttendance
/// CLI client for a remote attendance service with offline queueing
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "Employee attendance CLI: check in/out with geolocation, offline queue with automatic replay",
    long_about = None
)]
pub struct Cli {
    /// Override local cache database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override offline queue file path
    #[arg(global = true, long = "queue")]
    pub queue: Option<String>,

    /// Override backend base URL
    #[arg(global = true, long = "backend")]
    pub backend: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the local cache database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Check in at the given position
    #[command(name = "check-in")]
    CheckIn {
        /// Latitude in decimal degrees (-90..90)
        #[arg(allow_negative_numbers = true)]
        lat: f64,

        /// Longitude in decimal degrees (-180..180)
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },

    /// Check out of the current attendance session
    #[command(name = "check-out")]
    CheckOut,

    /// Show today's attendance status
    Status {
        #[arg(long = "refresh", help = "Bypass the local cache and refetch")]
        refresh: bool,
    },

    /// Show a monthly attendance report
    Report {
        #[arg(
            long = "employee",
            help = "Principal of the employee to report on (admin only; default: yourself)"
        )]
        employee: Option<String>,

        #[arg(long = "month", help = "Month to report (YYYY-MM, default: current)")]
        month: Option<String>,

        #[arg(long = "refresh", help = "Bypass the local cache and refetch")]
        refresh: bool,
    },

    /// List all registered employees (admin only)
    Employees,

    /// Show the authenticated principal and role
    Whoami,

    /// Show or update your user profile
    Profile {
        #[arg(long = "name", help = "New display name")]
        name: Option<String>,

        #[arg(long = "email", help = "New email address")]
        email: Option<String>,
    },

    /// Register yourself as an employee
    Register {
        #[arg(long = "name")]
        name: String,

        #[arg(long = "email")]
        email: String,
    },

    /// Assign a role to a user (admin only)
    Assign {
        #[arg(long = "user", help = "Principal of the target user")]
        user: String,

        #[arg(long = "role", help = "Role to assign: admin, user or guest")]
        role: String,
    },

    /// Replay queued attendance actions
    Sync {
        #[arg(
            long = "watch",
            help = "Keep running: poll connectivity and replay whenever the backend is reachable"
        )]
        watch: bool,

        #[arg(
            long = "interval",
            help = "Poll interval in seconds for --watch (default from config)"
        )]
        interval: Option<u64>,
    },

    /// Inspect or clear the offline action queue
    Queue {
        #[arg(long = "print", help = "Print the queued actions")]
        print: bool,

        #[arg(long = "clear", help = "Drop every queued action")]
        clear: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Export a monthly attendance report
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long = "month", help = "Month to export (YYYY-MM, default: current)")]
        month: Option<String>,

        #[arg(
            long = "employee",
            help = "Principal of the employee to export (admin only; default: yourself)"
        )]
        employee: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
