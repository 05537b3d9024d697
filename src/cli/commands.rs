//! CLI subcommand definitions

use clap::Subcommand;

/// Main CLI commands
#[derive(Debug, Clone, Subcommand, PartialEq, Eq)]
pub(crate) enum Commands {
    /// Load and show the most recent day (default)
    Latest,
    /// Print the year/month/day tree
    Tree {
        /// Expand this year
        #[arg(long)]
        year: Option<String>,
        /// Expand this month of --year (MM)
        #[arg(long, requires = "year")]
        month: Option<String>,
    },
    /// Show the events of one day
    Show {
        /// Day to show (YYYY-MM-DD or YYYYMMDD)
        date: String,
        /// Show the details of the N-th event instead of the list
        #[arg(short, long, value_name = "N")]
        event: Option<usize>,
    },
    /// Dump the organized index as JSON
    Index,
}

impl Commands {
    /// Subcommand to run when none is given
    pub(crate) fn or_default(command: Option<Commands>) -> Commands {
        command.unwrap_or(Commands::Latest)
    }
}
