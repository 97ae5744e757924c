use anyhow::{Context, Result as AnyhowResult};
use clap::Parser;
use serde::Deserialize;
use std::path::PathBuf;
use tabstrip::config::RenderConfig;
use tabstrip::model::{IconTable, MemorySource};
use tabstrip::services::tracing_setup;
use tabstrip::view::preview;
use tabstrip::view::scroll::ViewportId;
use tabstrip::view::segment::to_markup;
use tabstrip::view::strip::SidebarOffset;
use tabstrip::{RenderInput, TabStrip};

/// Render a buffer tab strip from a scene file
#[derive(Parser, Debug)]
#[command(name = "tabstrip")]
#[command(about = "Render an editor tab strip as statusline markup", long_about = None)]
#[command(version)]
struct Args {
    /// JSON scene: items, pick mode, tab pages, icon table and sidebar offset
    #[arg(value_name = "SCENE")]
    scene: PathBuf,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Width of the line in columns
    #[arg(long, default_value_t = 80)]
    width: usize,

    /// Viewport whose scroll state is used
    #[arg(long, value_name = "ID")]
    viewport: Option<u64>,

    /// Scroll the strip by this many columns before rendering
    #[arg(long, allow_hyphen_values = true, value_name = "COLUMNS")]
    scroll_by: Option<isize>,

    /// Scroll the strip to this column before rendering
    #[arg(long, value_name = "COLUMN")]
    scroll_to: Option<usize>,

    /// Also print a plain text preview of the strip
    #[arg(long)]
    preview: bool,

    /// Path to log file (default: stderr)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,
}

/// Contents of a scene file
#[derive(Debug, Deserialize)]
struct Scene {
    #[serde(flatten)]
    source: MemorySource,
    #[serde(default)]
    icons: IconTable,
    #[serde(default)]
    offset: Option<SidebarOffset>,
}

fn load_config(args: &Args) -> AnyhowResult<RenderConfig> {
    let config = match &args.config {
        Some(path) => RenderConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => RenderConfig::default(),
    };

    if let Err(e) = config.validate() {
        tracing::warn!("{}; falling back to clamped values", e);
    }
    Ok(config.sanitized())
}

fn load_scene(args: &Args) -> AnyhowResult<Scene> {
    let contents = std::fs::read_to_string(&args.scene)
        .with_context(|| format!("Failed to read scene {}", args.scene.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse scene {}", args.scene.display()))
}

fn main() -> AnyhowResult<()> {
    let args = Args::parse();
    tracing_setup::init_global(args.log_file.as_deref())?;

    let config = load_config(&args)?;
    if args.dump_config {
        let json =
            serde_json::to_string_pretty(&config).context("Failed to serialize config")?;
        println!("{json}");
        return Ok(());
    }

    let scene = load_scene(&args)?;
    tracing::debug!(
        "Loaded scene with {} items from {}",
        scene.source.items.len(),
        args.scene.display()
    );

    let viewport = args.viewport.map(ViewportId);
    let mut strip = TabStrip::new();
    strip.set_offset(scene.offset.clone());
    if let Some(column) = args.scroll_to {
        strip.scroll_to(viewport, column);
    }
    if let Some(delta) = args.scroll_by {
        strip.scroll_by(viewport, delta);
    }

    let input = RenderInput {
        source: &scene.source,
        icons: &scene.icons,
        config: &config,
        viewport,
        columns: args.width,
    };

    let mut runs = strip.render_runs(&input);
    if config.animation {
        // Play the scroll animation to its end and show the final frame.
        while strip.advance_scroll(viewport, 1.0 / 60.0) {}
        runs = strip.render_runs(&input);
    }
    if let Some(err) = strip.take_diagnostic() {
        anyhow::bail!("Rendering failed: {err}");
    }

    println!("{}", to_markup(&runs));
    if args.preview {
        let width = u16::try_from(args.width).unwrap_or(u16::MAX);
        println!("{}", preview::render_plain(&runs, width));
    }
    Ok(())
}
