use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Word { action } => commands::word::handle(action, ctx, flags).await,
        Commands::Review { action } => commands::review::handle(action, ctx, flags).await,
        Commands::Practice { action } => commands::practice::handle(action, ctx, flags).await,
        Commands::Conjugation { action } => {
            commands::conjugation::handle(action, ctx, flags).await
        }
        Commands::Wotm { action } => commands::wotm::handle(action, ctx, flags).await,
    }
}
