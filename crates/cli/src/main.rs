use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mealsearch_client::{MealSearch, MealSearchClient};
use mealsearch_core::env_config::configured_top_k;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "mealsearch")]
#[command(about = "Search meals by free text against a semantic meal search service", long_about = None)]
struct Cli {
    /// Base URL of the search service [env: MEALSEARCH_BASE_URL]
    #[arg(long, global = true)]
    base_url: Option<String>,
    /// Number of results to request per search [env: MEALSEARCH_TOP_K]
    #[arg(short = 'k', long, global = true, value_parser = clap::value_parser!(u32).range(1..))]
    top_k: Option<u32>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive search prompt (default)
    Interactive,
    /// Run one search and print the response as JSON
    Search { query: String },
    /// Run one search and print the details of one result
    Show {
        query: String,
        /// 1-based position in the result list
        #[arg(short, long, default_value = "1")]
        index: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let top_k = cli.top_k.unwrap_or_else(configured_top_k);
    let client = match cli.base_url {
        Some(base_url) => MealSearchClient::new(base_url)?,
        None => MealSearchClient::from_env()?,
    };
    tracing::debug!(base_url = client.base_url(), top_k, "client configured");

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => {
            let search: Arc<dyn MealSearch> = Arc::new(client);
            commands::interactive::run_interactive(search, top_k).await?;
        },
        Commands::Search { query } => commands::search::run_search(&client, &query, top_k).await?,
        Commands::Show { query, index } => {
            commands::search::run_show(&client, &query, top_k, index).await?;
        },
    }

    Ok(())
}
