use clap::{Parser, Subcommand};

/// Command-line interface definition for grifo
/// Shift and backup-schedule resolver for the station console
#[derive(Parser)]
#[command(
    name = "grifo",
    version = env!("CARGO_PKG_VERSION"),
    about = "Resolve the current shift and the next scheduled backup of a gas station",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Override journal database path (useful for tests or custom DB)
    #[arg(global = true, long = "db", value_name = "FILE")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and the journal database
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "check",
            help = "Check the shift table for gaps/overlaps and validate the backup schedule"
        )]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            requires = "edit_config",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show the shift that contains an instant (default: now)
    Shift {
        /// Instant to resolve: "YYYY-MM-DD HH:MM" (or with T / seconds)
        #[arg(long = "at", value_name = "INSTANT")]
        at: Option<String>,

        #[arg(long = "list", conflicts_with = "at", help = "List the configured shifts")]
        list: bool,

        #[arg(long = "json", help = "Print the result as JSON")]
        json: bool,
    },

    /// Show when the next backup is due
    Schedule {
        /// Reference instant: "YYYY-MM-DD HH:MM" (default: now)
        #[arg(long = "at", value_name = "INSTANT")]
        at: Option<String>,

        /// How many upcoming runs to show
        #[arg(long = "count", short = 'n', default_value_t = 1)]
        count: usize,

        #[arg(long = "json", help = "Print the result as JSON")]
        json: bool,
    },

    /// Create a backup copy of the journal database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Write a .zip with the database and the configuration")]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing backup file")]
        force: bool,
    },

    /// Print the internal operation journal
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
