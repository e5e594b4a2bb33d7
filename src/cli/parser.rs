use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rAttendance
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple attendance CLI: pick a person, scan a (simulated) fingerprint, export the log to Excel",
    long_about = None
)]
pub struct Cli {
    /// Override the attendance data file (useful for tests or a custom log)
    #[arg(global = true, long = "data", value_name = "FILE")]
    pub data: Option<String>,

    /// Run in test mode (configuration file is neither read nor written)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty attendance log
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show the people who can check in
    Roster,

    /// Show the current date and time in Cairo
    Now,

    /// Scan a fingerprint and record attendance
    Scan {
        /// Person to check in (name or roster number)
        name: Option<String>,

        /// Simulated scan duration in milliseconds (overrides the config)
        #[arg(long = "delay-ms", hide = true)]
        delay_ms: Option<u64>,
    },

    /// Show the attendance log with quick statistics
    List {
        #[arg(long = "all", help = "Show every record instead of the most recent ones")]
        all: bool,

        #[arg(long = "details", help = "Show the detailed table")]
        details: bool,
    },

    /// Export the attendance log
    Export {
        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        #[arg(
            long,
            value_name = "FILE",
            help = "Output file (default: attendance_log_<date>.<ext>)"
        )]
        file: Option<String>,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Delete every attendance record
    Clear {
        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Create a backup copy of the attendance file
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal operation log
    Log {
        #[arg(long = "print", help = "Print the internal log")]
        print: bool,
    },

    /// Interactive session: select, scan, list, export, clear
    Session {
        /// Simulated scan duration in milliseconds (overrides the config)
        #[arg(long = "delay-ms", hide = true)]
        delay_ms: Option<u64>,
    },
}
