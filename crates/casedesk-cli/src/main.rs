use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::cases::CaseAction;
use commands::context::AppContext;
use commands::inbox::{AlertAction, MessageAction};
use commands::output::Output;
use commands::playbooks::PlaybookCmd;
use commands::reports::ReportAction;
use commands::search::SearchArgs;
use commands::settings::ThemeAction;

#[derive(Parser, Debug)]
#[command(name = "casedesk")]
#[command(about = "CaseDesk - security operations case desk", long_about = None)]
pub struct Cli {
    /// Keep preferences in memory and skip the log file
    #[arg(long, global = true)]
    ephemeral: bool,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    // None starts the interactive shell
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Case counts and the latest alerts
    Overview,
    /// Browse and work cases
    Cases {
        #[command(subcommand)]
        action: CaseAction,
    },
    /// Browse playbooks and move them through their lifecycle
    Playbooks {
        #[command(subcommand)]
        action: PlaybookCmd,
    },
    /// Browse, draft and send reports
    Reports {
        #[command(subcommand)]
        action: ReportAction,
    },
    /// Alert feed
    Alerts {
        #[command(subcommand)]
        action: AlertAction,
    },
    /// User messages
    Messages {
        #[command(subcommand)]
        action: MessageAction,
    },
    /// Search cases, playbooks, reports, alerts and messages
    Search(SearchArgs),
    /// Recently submitted search terms
    Recent {
        /// Forget every recent term
        #[arg(long)]
        clear: bool,
    },
    /// Show or change the colour theme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
    /// Open a dashboard path, e.g. /cases/CASE-101
    Open { path: String },
    /// Interactive shell
    Shell,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let context = AppContext::bootstrap(cli.ephemeral).await?;
    let output = Output::new(cli.json);

    match cli.command {
        None | Some(Commands::Shell) => commands::shell::run(&context, output).await,
        Some(command) => commands::dispatch(&context, command, output).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_shell() {
        let cli = Cli::try_parse_from(["casedesk"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.ephemeral);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["casedesk", "overview", "--json", "--ephemeral"]).unwrap();
        assert!(cli.json);
        assert!(cli.ephemeral);
        assert!(matches!(cli.command, Some(Commands::Overview)));
    }

    #[test]
    fn test_case_filters_parse() {
        let cli = Cli::try_parse_from([
            "casedesk",
            "cases",
            "list",
            "--status",
            "pending,active",
            "--severity",
            "critical",
            "--assignment",
            "unassigned",
        ])
        .unwrap();
        let Some(Commands::Cases {
            action: CaseAction::List(args),
        }) = cli.command
        else {
            panic!("expected cases list");
        };
        assert_eq!(args.statuses.len(), 2);
        assert_eq!(args.severities.len(), 1);
    }

    #[test]
    fn test_unknown_playbook_action_is_rejected() {
        let result = Cli::try_parse_from(["casedesk", "playbooks", "act", "PB-2024-001", "launch"]);
        assert!(result.is_err());
    }
}
