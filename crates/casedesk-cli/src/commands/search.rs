use anyhow::Result;
use casedesk_core::search::{SearchFilters, SearchKind};
use clap::Args;

use super::context::AppContext;
use super::output::Output;
use super::{join_words, render};

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search text; several words are searched as one phrase
    #[arg(required = true)]
    pub query: Vec<String>,

    /// Only these collections, comma separated
    #[arg(long = "kind", value_delimiter = ',')]
    pub kinds: Vec<SearchKind>,

    /// Return at most this many hits
    #[arg(long)]
    pub limit: Option<usize>,

    /// Search without adding the term to recent searches
    #[arg(long)]
    pub preview: bool,
}

impl SearchArgs {
    fn filters(&self) -> Option<SearchFilters> {
        if self.kinds.is_empty() && self.limit.is_none() {
            return None;
        }
        Some(SearchFilters {
            kinds: (!self.kinds.is_empty()).then(|| self.kinds.clone()),
            max_results: self.limit,
        })
    }
}

pub async fn run(ctx: &AppContext, args: SearchArgs, output: Output) -> Result<()> {
    let query = join_words(&args.query);
    let filters = args.filters();
    let result = if args.preview {
        ctx.desk.search.search(&query, filters).await?
    } else {
        ctx.desk.search.submit(&query, filters).await?
    };
    output.emit(&result, render::search_result)
}

pub async fn recent(ctx: &AppContext, clear: bool, output: Output) -> Result<()> {
    if clear {
        ctx.desk.search.clear_recent().await?;
    }
    let recent = ctx.desk.search.recent().await?;
    output.emit(&recent, |recent| {
        if recent.is_empty() {
            println!("No recent searches.");
        }
        for term in recent.terms() {
            println!("{}", term);
        }
    })
}
