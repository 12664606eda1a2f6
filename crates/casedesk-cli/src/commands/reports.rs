use std::path::PathBuf;

use anyhow::{Context, Result};
use casedesk_core::report::{ReportQuery, ReportStatus};
use clap::Subcommand;

use super::context::AppContext;
use super::output::Output;
use super::{join_words, render};

#[derive(Subcommand, Debug)]
pub enum ReportAction {
    /// List reports
    List {
        /// Matches report id, title or case id
        #[arg(short, long, default_value = "")]
        query: String,
        /// Status filter, comma separated
        #[arg(long = "status", value_delimiter = ',')]
        statuses: Vec<ReportStatus>,
    },
    /// Show a report
    Show { id: String },
    /// Send the report to the affected user
    Send { id: String },
    /// Save resolution text without sending
    Draft {
        id: String,
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Export the report as plain text
    Export {
        id: String,
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

pub async fn run(ctx: &AppContext, action: ReportAction, output: Output) -> Result<()> {
    match action {
        ReportAction::List { query, statuses } => {
            let filter = ReportQuery::new().text(query).statuses(statuses);
            list(ctx, &filter, output).await
        }
        ReportAction::Show { id } => show(ctx, &id, output).await,
        ReportAction::Send { id } => {
            let report = ctx.desk.reports.send(&id).await?;
            output.emit(&report, |report| {
                render::success(&format!("{} sent to the affected user", report.id))
            })
        }
        ReportAction::Draft { id, text } => {
            let report = ctx.desk.reports.save_draft(&id, &join_words(&text)).await?;
            output.emit(&report, |report| {
                render::success(&format!("Draft saved for {}", report.id))
            })
        }
        ReportAction::Export { id, output: target } => {
            let text = ctx.desk.reports.export(&id).await?;
            match target {
                Some(path) => {
                    std::fs::write(&path, &text)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    tracing::info!("Exported report {} to {}", id, path.display());
                    render::success(&format!("Exported {} to {}", id, path.display()));
                }
                None => print!("{}", text),
            }
            Ok(())
        }
    }
}

pub async fn list(ctx: &AppContext, query: &ReportQuery, output: Output) -> Result<()> {
    let reports = ctx.desk.reports.list(query).await?;
    output.emit(&reports, |reports| {
        if reports.is_empty() {
            println!("No reports match.");
        }
        for report in reports {
            render::report_row(report);
        }
    })
}

pub async fn show(ctx: &AppContext, id: &str, output: Output) -> Result<()> {
    let report = ctx.desk.reports.show(id).await?;
    output.emit(&report, render::report_detail)
}
