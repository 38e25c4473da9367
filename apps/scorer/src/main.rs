use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cv_scorer::config::Config;
use cv_scorer::{CvAnalyzer, ReplayEvaluator};

/// Scores a plain-text CV against a captured evaluator reply.
#[derive(Debug, Parser)]
#[command(name = "cv-scorer", version, about)]
struct Cli {
    /// Plain-text CV file
    #[arg(long)]
    cv: PathBuf,

    /// JSON reply produced by the evaluator for this CV
    #[arg(long)]
    reply: PathBuf,

    /// Pretty-print the resulting JSON
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    // Logs go to stderr so stdout stays pure JSON.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting cv-scorer v{}", env!("CARGO_PKG_VERSION"));

    let profile = config.load_scoring_profile()?;
    let analyzer = CvAnalyzer::new(Arc::new(ReplayEvaluator::new(cli.reply)), profile)
        .with_min_text_chars(config.min_cv_text_chars);

    let cv_text = tokio::fs::read_to_string(&cli.cv)
        .await
        .with_context(|| format!("Failed to read CV text from '{}'", cli.cv.display()))?;

    let analysis = analyzer
        .analyze(&cv_text)
        .await
        .with_context(|| format!("Analysis failed for '{}'", cli.cv.display()))?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&analysis)?
    } else {
        serde_json::to_string(&analysis)?
    };
    println!("{json}");

    Ok(())
}
