use anyhow::Result;
use quarry::{SearchCommand, SearchSource};

/// Render the request document a search would send
pub fn render_request<S: SearchSource + ?Sized>(source: &S, compact: bool) -> Result<String> {
    let command = SearchCommand::wrap(source)?;
    let body = command.build_query();

    Ok(if compact {
        serde_json::to_string(&body)?
    } else {
        serde_json::to_string_pretty(&body)?
    })
}

pub fn run_build<S: SearchSource + ?Sized>(source: &S, compact: bool) -> Result<()> {
    println!("{}", render_request(source, compact)?);
    Ok(())
}
