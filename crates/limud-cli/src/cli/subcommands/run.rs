use clap::{Args, Subcommand};

/// Which words a listing or run draws from. At most one filter applies.
#[derive(Clone, Debug, Default, Args)]
#[group(multiple = false)]
pub struct SourceArgs {
    /// Only favorite words.
    #[arg(long)]
    pub favorites: bool,
    /// Only words of one category.
    #[arg(long)]
    pub category: Option<String>,
    /// Only words of one chapter.
    #[arg(long)]
    pub chapter: Option<i64>,
}

#[derive(Clone, Debug, Default, Args)]
pub struct ReviewStartArgs {
    #[command(flatten)]
    pub source: SourceArgs,
    /// Review every word, starting at this one.
    #[arg(long, conflicts_with_all = ["favorites", "category", "chapter"])]
    pub word: Option<i64>,
}

/// Review run commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ReviewCommands {
    /// Start a review run in alphabetical order.
    Start(ReviewStartArgs),
    /// Show the current card.
    Show,
    /// Press a button: flip, previous, next, favorite, unfavorite, edit.
    Press { button: String },
}

/// Practice run commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PracticeCommands {
    /// Start a shuffled practice run.
    Start(SourceArgs),
    /// Show the current card.
    Show,
    /// Press a button: flip, correct, incorrect, favorite, unfavorite.
    Press { button: String },
}
