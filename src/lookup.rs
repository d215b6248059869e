use crate::cli::Cli;
use crate::error::Result;
use status_codes::{render_all, OutputStyle, Query, QueryEngine};
use tracing::info;

/// Resolve the command line query and render every match
pub fn execute(cli: &Cli) -> Result<String> {
    let query = Query::parse(cli.code.as_deref(), cli.search.as_deref());
    let style = OutputStyle::from_plain_flag(cli.plain);

    let entries = QueryEngine::default().resolve(&query)?;
    info!(count = entries.len(), input = %query.input(), "lookup succeeded");

    Ok(render_all(&entries, style))
}
