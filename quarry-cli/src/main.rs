use anyhow::Result;
use clap::{Parser, Subcommand};
use quarry_client::{logging, Config, HttpTransport};
use std::path::PathBuf;

mod commands;

use commands::{QueryArgs, QuerySource};

#[derive(Parser, Debug)]
#[command(name = "quarry")]
#[command(about = "quarry CLI - build and run search requests")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "quarry.toml", global = true)]
    config: PathBuf,

    /// Search engine URL (overrides [connection].url)
    #[arg(long, env = "QUARRY_URL", global = true)]
    url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the request document without sending it
    Build {
        #[command(flatten)]
        query: QueryArgs,

        /// Print on a single line
        #[arg(long)]
        compact: bool,
    },

    /// Run the search and print the hits
    Search {
        #[command(flatten)]
        query: QueryArgs,

        /// Print the full mapped hits as JSON lines instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load_or_default(&cli.config)?;
    if let Some(url) = cli.url {
        config.connection.url = url;
    }

    logging::init(&config.observability)?;

    match cli.command {
        Commands::Build { query, compact } => {
            let source = QuerySource::new(&query, &config.search);
            commands::run_build(&source, compact)?;
        }
        Commands::Search { query, json } => {
            tracing::info!(url = %config.connection.url, "Searching");
            let transport = HttpTransport::new(&config.connection)?;
            let source = QuerySource::new(&query, &config.search);
            commands::run_search(&transport, &source, json).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_search() {
        let cli = Cli::try_parse_from([
            "quarry",
            "--url",
            "http://es:9200",
            "search",
            "--index",
            "books",
            "--query",
            "dune",
            "--json",
        ])
        .unwrap();

        assert_eq!(cli.url.as_deref(), Some("http://es:9200"));
        match cli.command {
            Commands::Search { query, json } => {
                assert_eq!(query.index, "books");
                assert_eq!(query.query.as_deref(), Some("dune"));
                assert!(json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_index_is_required() {
        assert!(Cli::try_parse_from(["quarry", "build"]).is_err());
    }
}
