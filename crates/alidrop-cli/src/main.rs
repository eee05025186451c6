mod run;

use std::path::PathBuf;

use alidrop_core::config::MAX_SEARCH_LIMIT;
use alidrop_core::{AppConfig, TracingObserver};
use alidrop_scraper::{
    AliExpressClient, CloudinaryHost, ItemSource, PhotoHost, SourceUrlHost, CLOUDINARY_API_BASE,
};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use run::{BatchRun, RunContext};

#[derive(Debug, Parser)]
#[command(name = "alidrop")]
#[command(about = "Export AliExpress products as JSON, CSV, and Shopify import files")]
struct Cli {
    /// Root folder for exports (overrides `ALIDROP_OUTPUT_DIR`).
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Export a single product from its item link or numeric id.
    Item { link: String },
    /// Export every product in a comma-separated list of item links.
    Links {
        #[arg(required = true, value_delimiter = ',')]
        links: Vec<String>,
    },
    /// Export the top results of a search link or query.
    Search {
        link: String,
        /// Number of results to export (overrides `ALIDROP_SEARCH_LIMIT`).
        #[arg(long)]
        limit: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = alidrop_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }

    tokio::spawn(execute(cli.command, config)).await??;
    Ok(())
}

async fn execute(command: Commands, config: AppConfig) -> anyhow::Result<()> {
    let source = AliExpressClient::new(
        &config.api_base_url,
        &config.rapidapi_key,
        &config.rapidapi_host,
        &config.region,
        config.request_timeout_secs,
        &config.user_agent,
    )?;

    match config.hosting.clone() {
        Some(hosting) => {
            let host =
                CloudinaryHost::new(hosting, CLOUDINARY_API_BASE, config.request_timeout_secs)?;
            let ctx = RunContext::new(source, host, TracingObserver, &config);
            dispatch(&ctx, command, config.search_limit).await
        }
        None => {
            tracing::warn!("photo hosting not configured; exporting source photo links");
            let ctx = RunContext::new(source, SourceUrlHost, TracingObserver, &config);
            dispatch(&ctx, command, config.search_limit).await
        }
    }
}

async fn dispatch<S, H>(
    ctx: &RunContext<S, H, TracingObserver>,
    command: Commands,
    default_limit: usize,
) -> anyhow::Result<()>
where
    S: ItemSource,
    H: PhotoHost,
{
    match command {
        Commands::Item { link } => {
            let layout = run::run_single(ctx, &link).await?;
            println!("exported to {}", layout.dir().display());
        }
        Commands::Links { links } => {
            let batch = run::run_links(ctx, &links).await?;
            print_batch_summary(&batch);
        }
        Commands::Search { link, limit } => {
            let limit = effective_search_limit(limit, default_limit);
            let batch = run::run_search(ctx, &link, limit).await?;
            print_batch_summary(&batch);
        }
    }
    Ok(())
}

/// The requested limit, falling back to the configured one, capped at
/// [`MAX_SEARCH_LIMIT`].
fn effective_search_limit(requested: Option<usize>, configured: usize) -> usize {
    requested.unwrap_or(configured).clamp(1, MAX_SEARCH_LIMIT)
}

fn print_batch_summary(batch: &BatchRun) {
    let skipped = batch.report.skipped();
    if batch.written {
        println!(
            "exported {} product(s) to {}",
            batch.report.exported_count(),
            batch.layout.dir().display()
        );
    } else {
        println!("no products exported; nothing written");
    }
    for (item_id, reason) in &skipped {
        println!("  skipped {item_id}: {reason}");
    }
}
