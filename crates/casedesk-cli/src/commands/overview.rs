use anyhow::Result;

use super::context::AppContext;
use super::output::Output;
use super::render;

pub async fn show(ctx: &AppContext, output: Output) -> Result<()> {
    let summary = ctx.desk.overview.summary().await?;
    output.emit(&summary, render::summary)
}
