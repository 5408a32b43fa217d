//! Glotmap viewer - demo entry point
//!
//! Loads a pre-generated dataset, builds the map view against simulated
//! collaborators, and walks one full playback run (or reports the static
//! display if no point has audio).

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::sync::broadcast;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use glotmap_common::config::resolve_options;
use glotmap_common::dataset::Dataset;
use glotmap_common::events::ViewerEvent;
use glotmap_viewer::sim::{TimerAudio, TraceHost};
use glotmap_viewer::{input_channel, MapView, PlayerEvent, ViewerDriver};

/// Command-line arguments for glotmap-viewer
#[derive(Parser, Debug)]
#[command(name = "glotmap-viewer")]
#[command(about = "Offline language-map viewer with a simulated audio tour")]
#[command(version)]
struct Args {
    /// Path to the pre-generated dataset (JSON)
    #[arg(short, long, env = "GLOTMAP_DATASET")]
    dataset: PathBuf,

    /// Concept id to filter by (omit for the language index)
    #[arg(short, long)]
    concept: Option<String>,

    /// Viewer config file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Simulated clip duration in milliseconds
    #[arg(long, default_value = "250")]
    clip_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "glotmap_viewer=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let options = resolve_options(args.config.as_deref(), "GLOTMAP_CONFIG")
        .context("Failed to load viewer options")?;
    let dataset = Dataset::from_path(&args.dataset)
        .with_context(|| format!("Failed to load dataset {}", args.dataset.display()))?;

    info!(
        languages = dataset.languages.len(),
        concepts = dataset.concepts.len(),
        "Dataset loaded"
    );

    let (input_tx, input_rx) = input_channel();
    let (event_tx, mut event_rx) = broadcast::channel(64);

    let mut host = TraceHost::new();
    let audio = TimerAudio::new(Duration::from_millis(args.clip_ms));

    let mut map = MapView::new(dataset, options, input_tx.clone(), event_tx.clone());
    map.build(&mut host, args.concept.as_deref());
    let playable = map.player().is_some();

    let driver = ViewerDriver::new(map, host, audio, input_rx);
    let event_loop = tokio::spawn(driver.run());

    if playable {
        input_tx
            .send(PlayerEvent::ToggleClicked)
            .context("Event loop gone before playback started")?;

        // Follow the run through the notification stream until it ends.
        loop {
            match event_rx.recv().await {
                Ok(ViewerEvent::RunFinished { run, .. }) => {
                    info!(%run, "Tour complete");
                    break;
                }
                Ok(event) => info!(?event, "viewer event"),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    info!(skipped, "viewer events lagged");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    } else {
        info!("No audio-bearing points; static display, nothing to play");
    }

    event_loop.abort();
    let _ = event_loop.await;
    Ok(())
}
