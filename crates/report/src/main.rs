use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use clickwise_core::domain::Campaign;
use clickwise_core::session::Session;

mod render;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "clickwise_report")]
struct Args {
    /// JSON file holding an array of campaigns. Defaults to the built-in samples.
    #[arg(long)]
    campaigns: Option<PathBuf>,

    /// Analyze only this campaign.
    #[arg(long)]
    campaign_id: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Start from an empty collection when no file is given.
    #[arg(long)]
    no_samples: bool,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = clickwise_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    // Logs go to stderr so the report on stdout stays pipeable.
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer())
        .init();

    let args = Args::parse();

    if let Err(err) = run(&args, &settings) {
        sentry_anyhow::capture_anyhow(&err);
        tracing::error!(error = %err, "report failed");
        return Err(err);
    }
    Ok(())
}

fn run(args: &Args, settings: &clickwise_core::config::Settings) -> anyhow::Result<()> {
    let session = match &args.campaigns {
        Some(path) => Session::with_campaigns(load_campaigns(path)?),
        None if args.no_samples => Session::empty(),
        None => settings.initial_session(),
    };

    let report = render::build_report(&session, args.campaign_id.as_deref())?;
    tracing::info!(
        campaigns_len = session.campaigns.len(),
        analyses_len = report.analyses.len(),
        "report built"
    );

    let out = match args.format {
        OutputFormat::Text => render::render_text(&report)?,
        OutputFormat::Json => serde_json::to_string_pretty(&report)?,
    };
    println!("{out}");
    Ok(())
}

fn load_campaigns(path: &std::path::Path) -> anyhow::Result<Vec<Campaign>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read campaigns file {}", path.display()))?;
    parse_campaigns(&raw).with_context(|| format!("invalid campaigns file {}", path.display()))
}

fn parse_campaigns(raw: &str) -> anyhow::Result<Vec<Campaign>> {
    let campaigns: Vec<Campaign> = serde_json::from_str(raw)?;
    let mut seen = std::collections::BTreeSet::new();
    for c in &campaigns {
        anyhow::ensure!(seen.insert(c.id.as_str()), "duplicate campaign id: {}", c.id);
    }
    Ok(campaigns)
}

fn init_sentry(settings: &clickwise_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
