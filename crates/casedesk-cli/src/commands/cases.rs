use anyhow::Result;
use casedesk_core::case::{Assignment, CaseQuery, CaseSort, CaseStatus, Severity};
use casedesk_core::filter::PageRequest;
use casedesk_core::preference::PinToggle;
use clap::{Args, Subcommand};

use super::context::AppContext;
use super::output::Output;
use super::{join_words, render};

#[derive(Subcommand, Debug)]
pub enum CaseAction {
    /// List cases through the table filters
    List(ListArgs),
    /// Show a case with its playbooks and reports
    Show { id: String },
    /// Set the workflow status
    Status { id: String, status: CaseStatus },
    /// Assign an analyst; no name unassigns
    Assign { id: String, analyst: Vec<String> },
    /// Append a note
    Note {
        id: String,
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Pin or unpin a case
    Pin { id: String },
    /// Pinned cases, oldest pin first
    Pinned,
    /// Analysts currently assigned to any case
    Analysts,
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Matches case id, analyst or user name
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Status filter, comma separated
    #[arg(long = "status", value_delimiter = ',')]
    pub statuses: Vec<CaseStatus>,

    /// Severity filter, comma separated
    #[arg(long = "severity", value_delimiter = ',')]
    pub severities: Vec<Severity>,

    /// any, assigned or unassigned
    #[arg(long, default_value_t = Assignment::Any)]
    pub assignment: Assignment,

    /// registry, deadline or severity
    #[arg(long, default_value_t = CaseSort::Registry)]
    pub sort: CaseSort,

    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Defaults to `page_size` from the config file
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Skip pagination
    #[arg(long)]
    pub all: bool,
}

impl ListArgs {
    fn into_query(self, default_page_size: usize) -> CaseQuery {
        let query = CaseQuery::new()
            .text(self.query)
            .statuses(self.statuses)
            .severities(self.severities)
            .assignment(self.assignment)
            .sort(self.sort);
        if self.all {
            query
        } else {
            let size = self.page_size.unwrap_or(default_page_size);
            query.page(PageRequest::new(self.page, size))
        }
    }
}

pub async fn run(ctx: &AppContext, action: CaseAction, output: Output) -> Result<()> {
    match action {
        CaseAction::List(args) => list(ctx, args, output).await,
        CaseAction::Show { id } => show(ctx, &id, output).await,
        CaseAction::Status { id, status } => {
            let case = ctx.desk.cases.set_status(&id, status).await?;
            output.emit(&case, |case| {
                render::success(&format!("{} is now {}", case.id, case.status))
            })
        }
        CaseAction::Assign { id, analyst } => {
            let name = join_words(&analyst);
            let analyst = (!name.trim().is_empty()).then_some(name);
            let case = ctx.desk.cases.assign(&id, analyst).await?;
            output.emit(&case, |case| match &case.analyst {
                Some(analyst) => render::success(&format!("{} assigned to {}", case.id, analyst)),
                None => render::success(&format!("{} unassigned", case.id)),
            })
        }
        CaseAction::Note { id, text } => {
            let case = ctx.desk.cases.add_note(&id, &join_words(&text)).await?;
            output.emit(&case, |case| {
                render::success(&format!("Note added to {} ({} total)", case.id, case.notes.len()))
            })
        }
        CaseAction::Pin { id } => {
            let toggle = ctx.desk.cases.toggle_pin(&id).await?;
            output.emit(&toggle, |toggle| match toggle {
                PinToggle::Pinned => render::success(&format!("Pinned {}", id)),
                PinToggle::Unpinned => render::success(&format!("Unpinned {}", id)),
            })
        }
        CaseAction::Pinned => {
            let cases = ctx.desk.cases.pinned().await?;
            output.emit(&cases, |cases| {
                if cases.is_empty() {
                    println!("No pinned cases.");
                }
                for case in cases {
                    render::case_row(case, true);
                }
            })
        }
        CaseAction::Analysts => {
            let analysts = ctx.desk.cases.analysts().await?;
            output.emit(&analysts, |analysts| {
                for analyst in analysts {
                    println!("{}", analyst);
                }
            })
        }
    }
}

pub async fn list(ctx: &AppContext, args: ListArgs, output: Output) -> Result<()> {
    let query = args.into_query(ctx.page_size());
    let page = ctx.desk.cases.list(&query).await?;
    let pinned = ctx.desk.preferences().pinned_cases().await?;
    output.emit(&page, |page| render::case_page(page, |id| pinned.contains(id)))
}

pub async fn show(ctx: &AppContext, id: &str, output: Output) -> Result<()> {
    let detail = ctx.desk.cases.show(id).await?;
    output.emit(&detail, render::case_detail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args_paginate_with_config_size() {
        let query = ListArgs::default().into_query(10);
        assert_eq!(query.page, Some(PageRequest::new(1, 10)));
        assert_eq!(query.assignment, Assignment::Any);
    }

    #[test]
    fn test_all_disables_pagination() {
        let args = ListArgs {
            all: true,
            ..ListArgs::default()
        };
        assert_eq!(args.into_query(10).page, None);
    }

    #[test]
    fn test_explicit_page_size_wins() {
        let args = ListArgs {
            page: 2,
            page_size: Some(3),
            ..ListArgs::default()
        };
        assert_eq!(args.into_query(10).page, Some(PageRequest::new(2, 3)));
    }
}
