//! Opens a dashboard path by rendering the page it routes to.

use anyhow::Result;
use casedesk_core::inbox::AlertQuery;
use casedesk_core::playbook::PlaybookQuery;
use casedesk_core::report::ReportQuery;
use casedesk_core::route::Route;
use colored::Colorize;

use super::cases::{self, ListArgs};
use super::context::AppContext;
use super::output::Output;
use super::{inbox, overview, playbooks, reports, search, settings};

pub async fn run(ctx: &AppContext, path: &str, output: Output) -> Result<()> {
    let route = Route::parse(path);
    tracing::debug!("Opening {} as {:?}", path, route);

    match route {
        Route::Overview => overview::show(ctx, output).await,
        Route::Cases => cases::list(ctx, ListArgs::default(), output).await,
        Route::CaseDetail(id) => cases::show(ctx, &id, output).await,
        Route::Playbooks => playbooks::list(ctx, &PlaybookQuery::new(), output).await,
        Route::PlaybookDetail(id) => playbooks::show(ctx, &id, output).await,
        Route::Reports => reports::list(ctx, &ReportQuery::new(), output).await,
        Route::ReportDetail(id) => reports::show(ctx, &id, output).await,
        Route::Alerts => inbox::list_alerts(ctx, &AlertQuery::new(), output).await,
        Route::Search => search::recent(ctx, false, output).await,
        Route::Settings => settings::show(ctx, output).await,
        not_found @ Route::NotFound(_) => output.emit(&not_found, |route| {
            println!("{}", format!("404: nothing lives at '{}'", route).red());
            println!("Try /, /cases, /playbooks, /reports, /alerts, /search or /settings.");
        }),
    }
}
