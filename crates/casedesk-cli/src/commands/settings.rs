use anyhow::Result;
use casedesk_core::preference::Theme;
use clap::Subcommand;

use super::context::AppContext;
use super::output::Output;
use super::render;

#[derive(Subcommand, Debug)]
pub enum ThemeAction {
    /// Use the given theme
    Set { theme: Theme },
    /// Switch between light and dark
    Toggle,
}

pub async fn run(ctx: &AppContext, action: Option<ThemeAction>, output: Output) -> Result<()> {
    let theme = match action {
        None => return show(ctx, output).await,
        Some(ThemeAction::Set { theme }) => ctx.desk.settings.set_theme(theme).await?,
        Some(ThemeAction::Toggle) => ctx.desk.settings.toggle_theme().await?,
    };
    output.emit(&theme, |theme| render::success(&format!("Theme set to {}", theme)))
}

pub async fn show(ctx: &AppContext, output: Output) -> Result<()> {
    let theme = ctx.desk.settings.theme().await?;
    output.emit(&theme, |theme| {
        println!("Theme:       {}", theme);
        if ctx.ephemeral {
            println!("Preferences: in memory (--ephemeral)");
        } else {
            println!("Preferences: {}", ctx.paths.preference_file().display());
        }
        println!("Config:      {}", ctx.paths.config_file().display());
    })
}
