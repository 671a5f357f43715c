use clap::Subcommand;

use crate::cli::subcommands::{
    ConjugationCommands, PracticeCommands, ReviewCommands, WordCommands, WotmCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Vocabulary words.
    Word {
        #[command(subcommand)]
        action: WordCommands,
    },
    /// Browse words as flashcards.
    Review {
        #[command(subcommand)]
        action: ReviewCommands,
    },
    /// Drill words until each one is answered correctly.
    Practice {
        #[command(subcommand)]
        action: PracticeCommands,
    },
    /// Conjugation tables and drills.
    Conjugation {
        #[command(subcommand)]
        action: ConjugationCommands,
    },
    /// Browse scraped dictionary parses (word of the moment).
    Wotm {
        #[command(subcommand)]
        action: WotmCommands,
    },
}
