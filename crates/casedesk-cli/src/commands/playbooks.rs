use anyhow::Result;
use casedesk_application::PlaybookOutcome;
use casedesk_core::playbook::{PlaybookAction, PlaybookQuery, PlaybookStatus};
use clap::Subcommand;

use super::context::AppContext;
use super::output::Output;
use super::render;

#[derive(Subcommand, Debug)]
pub enum PlaybookCmd {
    /// List playbooks
    List {
        /// Matches playbook id, title or case id
        #[arg(short, long, default_value = "")]
        query: String,
        /// Status filter, comma separated
        #[arg(long = "status", value_delimiter = ',')]
        statuses: Vec<PlaybookStatus>,
        /// Only playbooks for this case
        #[arg(long)]
        case: Option<String>,
    },
    /// Show steps, commands and the actions on offer
    Show { id: String },
    /// Take an action, e.g. accept, mark-applied, stop-using, delete
    Act { id: String, action: PlaybookAction },
}

pub async fn run(ctx: &AppContext, action: PlaybookCmd, output: Output) -> Result<()> {
    match action {
        PlaybookCmd::List {
            query,
            statuses,
            case,
        } => {
            let mut filter = PlaybookQuery::new().text(query).statuses(statuses);
            if let Some(case_id) = case {
                filter = filter.case_id(case_id);
            }
            list(ctx, &filter, output).await
        }
        PlaybookCmd::Show { id } => show(ctx, &id, output).await,
        PlaybookCmd::Act { id, action } => {
            let outcome = ctx.desk.playbooks.perform(&id, action).await?;
            output.emit(&outcome, |outcome| match outcome {
                PlaybookOutcome::Updated(playbook) => {
                    render::success(&format!("{} is now {}", playbook.id, playbook.status));
                    print_actions(playbook.available_actions());
                }
                PlaybookOutcome::Unchanged(playbook) => {
                    println!(
                        "{} recorded for {}; status stays {}",
                        action, playbook.id, playbook.status
                    );
                }
                PlaybookOutcome::Deleted(id) => render::success(&format!("Deleted {}", id)),
            })
        }
    }
}

fn print_actions(actions: &[PlaybookAction]) {
    if actions.is_empty() {
        return;
    }
    let names: Vec<String> = actions.iter().map(ToString::to_string).collect();
    println!("Next: {}", names.join(", "));
}

pub async fn list(ctx: &AppContext, query: &PlaybookQuery, output: Output) -> Result<()> {
    let playbooks = ctx.desk.playbooks.list(query).await?;
    output.emit(&playbooks, |playbooks| {
        if playbooks.is_empty() {
            println!("No playbooks match.");
        }
        for playbook in playbooks {
            render::playbook_row(playbook);
        }
    })
}

pub async fn show(ctx: &AppContext, id: &str, output: Output) -> Result<()> {
    let playbook = ctx.desk.playbooks.show(id).await?;
    output.emit(&playbook, render::playbook_detail)
}
