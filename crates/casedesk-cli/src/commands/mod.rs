pub mod cases;
pub mod context;
pub mod inbox;
pub mod logging;
pub mod open;
pub mod output;
pub mod overview;
pub mod playbooks;
pub mod render;
pub mod reports;
pub mod search;
pub mod settings;
pub mod shell;

use anyhow::Result;
use colored::Colorize;

use crate::Commands;
use context::AppContext;
use output::Output;

/// Runs one parsed command against the shared context.
pub async fn dispatch(ctx: &AppContext, command: Commands, output: Output) -> Result<()> {
    match command {
        Commands::Overview => overview::show(ctx, output).await,
        Commands::Cases { action } => cases::run(ctx, action, output).await,
        Commands::Playbooks { action } => playbooks::run(ctx, action, output).await,
        Commands::Reports { action } => reports::run(ctx, action, output).await,
        Commands::Alerts { action } => inbox::run_alerts(ctx, action, output).await,
        Commands::Messages { action } => inbox::run_messages(ctx, action, output).await,
        Commands::Search(args) => search::run(ctx, args, output).await,
        Commands::Recent { clear } => search::recent(ctx, clear, output).await,
        Commands::Theme { action } => settings::run(ctx, action, output).await,
        Commands::Open { path } => open::run(ctx, &path, output).await,
        Commands::Shell => {
            println!("{}", "Already in the interactive shell".yellow());
            Ok(())
        }
    }
}

/// Joins positional words back into one line of text.
pub(crate) fn join_words(words: &[String]) -> String {
    words.join(" ")
}
