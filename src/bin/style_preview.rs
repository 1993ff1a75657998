//! Style Preview
//!
//! Renders one GeoJSON layer with a hideout and prints the resulting styles,
//! markers and tooltip bindings as JSON.
//!
//! Usage: style_preview <hideout.json> <features.geojson> <segments|tracks|nodes|network>

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use track_map_style::{render_collection, FeatureCollection, Hideout, LayerKind};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "track_map_style=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Positional args win; env vars cover scripted runs
    let mut args = std::env::args().skip(1);
    let hideout_path = args
        .next()
        .or_else(|| std::env::var("HIDEOUT_PATH").ok())
        .map(PathBuf::from)
        .context("Missing hideout path (arg 1 or HIDEOUT_PATH)")?;
    let features_path = args
        .next()
        .or_else(|| std::env::var("FEATURES_PATH").ok())
        .map(PathBuf::from)
        .context("Missing features path (arg 2 or FEATURES_PATH)")?;
    let kind: LayerKind = args
        .next()
        .unwrap_or_else(|| "segments".to_string())
        .parse()?;

    let hideout = Hideout::load(&hideout_path)?;

    let contents = std::fs::read_to_string(&features_path)
        .with_context(|| format!("Failed to read features file: {:?}", features_path))?;
    let collection: FeatureCollection = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse GeoJSON from {:?}", features_path))?;

    if collection.is_empty() {
        tracing::warn!("No features in {:?}", features_path);
    }
    tracing::info!("Rendering {} {} features", collection.len(), kind);

    let layer = render_collection(kind, &collection, &hideout);
    println!("{}", serde_json::to_string_pretty(&layer)?);

    Ok(())
}
