mod error;
mod fetch;
mod output;
mod parser;
mod settings;
mod site;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, error, info, warn};

use output::{Article, OutputOptions};

#[derive(Parser)]
#[command(
    name = "grokipedia_crawler",
    about = "Extract the article text and page links from a grokipedia.com page"
)]
struct Cli {
    /// Page URL (https://grokipedia.com/page/Elon_Musk) or bare topic (Elon_Musk)
    url: String,
    /// Output file path (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Keep markdown formatting instead of converting to plaintext
    #[arg(long)]
    markdown: bool,
    /// Emit {"content": ..., "links": [...]} as JSON
    #[arg(long)]
    json: bool,
    /// Add title, summary and url to the JSON record
    #[arg(long, requires = "json")]
    meta: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let t0 = Instant::now();
    let settings = settings::Settings::load()?;

    if site::needs_site_warning(&cli.url) {
        warn!("URL does not appear to be from {}", site::SITE_DOMAIN);
    }
    let url = site::resolve_input(&cli.url);

    let html = fetch::fetch_page(&url, &settings)
        .await
        .map_err(error::CrawlError::from)?;

    info!("Extracting article content...");
    let page = parser::process_page(&html)?;
    debug!(
        "Extracted {} chars of markdown, {} links",
        page.markdown.len(),
        page.links.len()
    );

    let opts = OutputOptions {
        keep_markdown: cli.markdown,
        json: cli.json,
        meta: cli.meta,
    };
    let article = Article::build(page, &url, opts);
    let text = output::render(&article, opts)?;
    output::write_output(&text, cli.output.as_deref())
        .with_context(|| format!("Failed to write output for {}", url))?;

    debug!("Done in {:.1}s", t0.elapsed().as_secs_f64());
    Ok(())
}
