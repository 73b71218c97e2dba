// Copyright 2025 the Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless replay of viewer input through the Atlas viewport engine.
//!
//! Prints one line per event: `index revision scale tx ty`, marking events
//! that changed the transform with `*`. Set `RUST_LOG=atlas_viewport=debug`
//! to see the engine's own commit log.

mod script;

use std::path::PathBuf;

use anyhow::Context;
use atlas_viewport::{ViewerConfig, ViewportEngine};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::script::{ReplayEvent, builtin_tour, parse_script, parse_viewport};

#[derive(Parser, Debug)]
#[command(about = "Replay scripted pan/zoom input and print every committed transform")]
struct Args {
    /// JSON file holding a viewer configuration; defaults apply to missing fields.
    #[arg(long)]
    config: Option<PathBuf>,
    /// JSON file holding an array of input events; a built-in tour runs otherwise.
    #[arg(long)]
    script: Option<PathBuf>,
    /// Initial viewport size.
    #[arg(long, default_value = "1024x768", value_parser = parse_viewport)]
    viewport: kurbo::Size,
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<ViewerConfig> {
    let Some(path) = path else {
        return Ok(ViewerConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

fn load_script(path: Option<&PathBuf>, viewport: kurbo::Size) -> anyhow::Result<Vec<ReplayEvent>> {
    let Some(path) = path else {
        return Ok(builtin_tour(viewport));
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading script {}", path.display()))?;
    parse_script(&text).with_context(|| format!("in {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = load_config(args.config.as_ref())?;
    let events = load_script(args.script.as_ref(), args.viewport)?;

    let mut engine = ViewportEngine::new(config).context("invalid viewer configuration")?;
    engine.set_viewport_size(args.viewport);
    info!(
        events = events.len(),
        width = args.viewport.width,
        height = args.viewport.height,
        "replaying"
    );

    print_line("init", false, &engine);
    for (index, event) in events.iter().enumerate() {
        let changed = event.apply(&mut engine);
        print_line(&index.to_string(), changed, &engine);
    }

    info!(revision = engine.revision(), "replay finished");
    Ok(())
}

fn print_line(label: &str, changed: bool, engine: &ViewportEngine) {
    let t = engine.current_transform();
    let mark = if changed { '*' } else { ' ' };
    println!(
        "{label:>5}{mark} rev={:<4} scale={:.4} tx={:.2} ty={:.2}",
        engine.revision(),
        t.scale,
        t.translation.x,
        t.translation.y
    );
}
