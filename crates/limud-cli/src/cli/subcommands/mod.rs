mod conjugation;
mod run;
mod word;
mod wotm;

pub use conjugation::ConjugationCommands;
pub use run::{PracticeCommands, ReviewCommands, ReviewStartArgs, SourceArgs};
pub use word::{WordCommands, WordFieldArgs};
pub use wotm::WotmCommands;
