use clap::Subcommand;

/// Conjugation commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ConjugationCommands {
    /// Show the conjugation table of a binyan.
    Table {
        binyan: String,
        /// Pronoun labels: en, he
        #[arg(long, default_value = "he")]
        pronouns: String,
    },
    /// Save cells of a binyan's table.
    Save {
        binyan: String,
        /// Cell as KEY=HEBREW, KEY being the packed form code. Empty HEBREW clears it.
        #[arg(long = "cell", value_name = "KEY=HEBREW")]
        cells: Vec<String>,
    },
    /// Start a practice run over one binyan, or `all` for representative forms.
    Practice { target: String },
    /// Show the current card.
    Show {
        #[arg(long, default_value = "he")]
        pronouns: String,
    },
    /// Press a button: flip, correct, incorrect.
    Press {
        button: String,
        #[arg(long, default_value = "he")]
        pronouns: String,
    },
}
