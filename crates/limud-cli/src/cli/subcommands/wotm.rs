use std::path::PathBuf;

use clap::Subcommand;

/// Word-of-the-moment commands.
#[derive(Clone, Debug, Subcommand)]
pub enum WotmCommands {
    /// Load scraped parses from a JSON file and start browsing them.
    Load { path: PathBuf },
    /// Show the current parse.
    Show,
    /// Press a button: flip, previous, next.
    Press { button: String },
}
