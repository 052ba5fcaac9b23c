use std::{
    fs::{self, OpenOptions},
    path::PathBuf,
    sync::Arc,
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{prelude::*, EnvFilter};
use triad_data_core::{
    GameData, GameDataLoader, GameDataStore, LoaderConfig, SnapshotSource, TableSource,
};

/// Assemble game data from a JSON snapshot of the host tables.
#[derive(Debug, Parser)]
#[command(name = "triad-data", version)]
struct Args {
    /// JSON object mapping sheet names to row arrays.
    snapshot: PathBuf,

    /// Config file; defaults to the user config directory.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the assembled data as JSON instead of a summary.
    #[arg(long)]
    dump: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging()?;
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => LoaderConfig::load_from(path)?,
        None => LoaderConfig::load()?,
    };

    let json = fs::read_to_string(&args.snapshot)
        .with_context(|| format!("failed to read {}", args.snapshot.display()))?;
    let source = SnapshotSource::from_json_str(&json)
        .with_context(|| format!("failed to parse {}", args.snapshot.display()))?;
    let sheets = source.sheet_names().count();

    let store = GameDataStore::new();
    let loader = GameDataLoader::new(store.clone(), config);
    tracing::info!(
        "loading {sheets} sheets from {} (max attempts:{})",
        args.snapshot.display(),
        loader.config().attempts()
    );
    let source: Arc<dyn TableSource> = Arc::new(source);
    let report = loader
        .spawn(source)
        .await
        .context("game data task panicked")?;

    let Some(data) = store.snapshot() else {
        let reason = report
            .last_error
            .map(|err| err.to_string())
            .unwrap_or_else(|| "unknown error".to_string());
        anyhow::bail!(
            "game data not ready after {} attempts: {reason}",
            report.attempts
        );
    };

    if args.dump {
        println!("{}", serde_json::to_string_pretty(data.as_ref())?);
    } else {
        print_summary(&data, report.attempts, report.warnings.len());
    }
    Ok(())
}

fn print_summary(data: &GameData, attempts: u32, warnings: usize) {
    println!(
        "cards: {} ({} slots), opponents: {}, attempts: {attempts}, warnings: {warnings}",
        data.cards.count(),
        data.cards.len(),
        data.opponents.len()
    );
    for (index, npc) in data.opponents.iter().enumerate() {
        let Some(info) = data.opponent_info.get(&index) else {
            continue;
        };
        let location = info
            .location
            .map(|link| format!("map {} ({:.1}, {:.1})", link.map_id, link.x, link.y))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  [{index:>3}] {:<32} fee:{:>5} rules:{} rewards:{} {location}",
            npc.name,
            info.match_fee,
            npc.rules
                .iter()
                .map(|rule| data.rules[*rule].name.as_str())
                .collect::<Vec<_>>()
                .join("/"),
            info.reward_cards.len(),
        );
    }
}

fn init_logging() -> Result<()> {
    let log_dir = std::env::current_dir()?.join("logs");
    fs::create_dir_all(&log_dir)?;
    let log_path = log_dir.join("triad-data.log");

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .compact()
        .with_ansi(false)
        .with_writer(move || {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_path)
                .expect("failed to open log file")
        });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(())
}
