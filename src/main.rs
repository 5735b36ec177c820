//! compad - virtual direction pad driver
//!
//! Replays recorded drag traces or drives a pad interactively.

use anyhow::Result;
use clap::Parser;
use colored::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use compad::cli::{self, DirectionFilter};
use compad::config::PadConfig;
use compad::pad::DirectionScheme;
use compad::trace::{self, Trace};

/// compad - turn drag gestures into pad directions
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to pad configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Direction scheme (four, eight); overrides the config file
    #[arg(short, long)]
    scheme: Option<DirectionScheme>,

    /// Interaction inset in density-independent units; overrides the config file
    #[arg(long)]
    interaction_size: Option<f32>,

    /// Replay a recorded trace file and exit
    #[arg(short, long)]
    replay: Option<String>,

    /// Print replay steps as JSON lines
    #[arg(long)]
    json: bool,

    /// Only print a direction when it changes
    #[arg(long)]
    dedupe: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();

    init_logging(&args.log_level)?;

    let config = load_config(&args).await?;
    info!(
        "Pad config: scheme={} interaction_size={} density={}",
        config.scheme, config.interaction_size, config.density
    );

    match &args.replay {
        Some(path) => replay_trace(path, &config, &args).await,
        None => cli::run_repl(&config, args.dedupe),
    }
}

async fn load_config(args: &Args) -> Result<PadConfig> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Configuration file: {}", path);
            PadConfig::load(path).await?
        }
        None => PadConfig::default(),
    };

    apply_overrides(&mut config, args)?;

    Ok(config)
}

fn apply_overrides(config: &mut PadConfig, args: &Args) -> Result<()> {
    if let Some(scheme) = args.scheme {
        config.scheme = scheme;
    }
    if let Some(size) = args.interaction_size {
        config.interaction_size = size;
    }
    config.validate()?;
    Ok(())
}

async fn replay_trace(path: &str, config: &PadConfig, args: &Args) -> Result<()> {
    let trace = Trace::load(path).await?;

    // Command-line overrides beat the trace's embedded config
    let mut config = trace.effective_config(config).clone();
    apply_overrides(&mut config, args)?;

    info!("Replaying {} events from {}", trace.events.len(), path);
    let steps = trace::replay(&config, &trace.events);

    let mut filter = DirectionFilter::default();
    for step in &steps {
        if args.json {
            println!("{}", serde_json::to_string(step)?);
        } else {
            let filter = args.dedupe.then_some(&mut filter);
            println!("{}", cli::format_step(step, filter));
        }
    }

    if !args.json {
        let fired: usize = steps.iter().map(|s| s.fired.len()).sum();
        println!(
            "{}",
            format!("{} events, {} callbacks fired", steps.len(), fired).bold()
        );
    }

    Ok(())
}

fn init_logging(level: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_thread_names(false),
        )
        .init();

    Ok(())
}
