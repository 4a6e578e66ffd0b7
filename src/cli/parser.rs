use clap::{Parser, Subcommand};

/// Command-line interface definition for rServicelog
/// CLI application to log service hours and return visits with SQLite
#[derive(Parser)]
#[command(
    name = "rservicelog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple service report CLI: log hours, studies and return visits, back them up to Google Sheets",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
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

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add a service record
    Add {
        /// Date of the service (YYYY-MM-DD)
        date: String,

        #[arg(long, default_value_t = 0.0, help = "Hours of service")]
        hours: f64,

        #[arg(long, default_value_t = 0, help = "Additional minutes of service")]
        minutes: u32,

        #[arg(long, default_value_t = 0, help = "Number of studies conducted")]
        studies: u32,

        #[arg(long, default_value = "", help = "Free text note")]
        note: String,
    },

    /// Edit a service record by ID (omitted fields keep their value)
    Edit {
        id: i64,

        #[arg(long, help = "New date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long, help = "New hours (combined with --minutes)")]
        hours: Option<f64>,

        #[arg(long, help = "New minutes (combined with --hours)")]
        minutes: Option<u32>,

        #[arg(long, help = "New number of studies")]
        studies: Option<u32>,

        #[arg(long, help = "New note")]
        note: Option<String>,
    },

    /// Delete a service record by ID
    Del {
        id: i64,

        #[arg(long, short = 'f', help = "Do not ask for confirmation")]
        force: bool,
    },

    /// List service records
    List {
        #[arg(
            long,
            short,
            help = "Filter by year/month/day (YYYY, YYYY-MM, YYYY-MM-DD) or a range A:B"
        )]
        period: Option<String>,
    },

    /// Show monthly and service-year totals
    Stats {
        #[arg(long, value_name = "YYYY-MM", help = "Month to summarize (default: current)")]
        month: Option<String>,
    },

    /// Manage return visits
    Visit {
        #[command(subcommand)]
        action: VisitAction,
    },

    /// Append all service records to the backup spreadsheet
    Backup {
        #[arg(long, short = 'f', help = "Do not ask for confirmation")]
        force: bool,
    },

    /// Restore data from the backup spreadsheet
    Restore {
        #[arg(
            long,
            help = "Add the imported rows to local data instead of replacing it"
        )]
        merge: bool,

        #[arg(long, short = 'f', help = "Do not ask for confirmation")]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum VisitAction {
    /// Add a return visit
    Add {
        name: String,

        #[arg(long, default_value = "")]
        note: String,

        #[arg(long, help = "Mark the person as a study")]
        study: bool,
    },

    /// List return visits sorted by name
    List,

    /// Edit a return visit by ID (omitted fields keep their value)
    Edit {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        note: Option<String>,

        #[arg(long, conflicts_with = "no_study")]
        study: bool,

        #[arg(long = "no-study")]
        no_study: bool,
    },

    /// Delete a return visit by ID
    Del {
        id: i64,

        #[arg(long, short = 'f', help = "Do not ask for confirmation")]
        force: bool,
    },
}
