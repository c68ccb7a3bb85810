use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use pack_core::{NodeId, NodeTree, StoredIntrinsics};
use pack_layout::{LayoutEngine, PackLayoutEngine, Viewport, DEFAULT_DPI};
use pack_render::{RecordingApplicator, WidgetRegistry};

mod document;
mod report;

use document::{Document, NodeSpec};
use report::{BoxReport, StyleCalls};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Tree,
    Json,
}

#[derive(Parser)]
#[command(name = "pack-layout")]
#[command(author, version, about = "Lay out a JSON node tree and print the resulting boxes", long_about = None)]
struct Args {
    /// Path to the JSON node tree
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Viewport width; 0 computes the minimum width
    #[arg(long, default_value_t = 0.0)]
    width: f32,

    /// Viewport height; 0 computes the minimum height
    #[arg(long, default_value_t = 0.0)]
    height: f32,

    /// Device DPI
    #[arg(long, default_value_t = DEFAULT_DPI)]
    dpi: f32,

    /// DPI the style lengths are authored against
    #[arg(long, default_value_t = DEFAULT_DPI)]
    baseline_dpi: f32,

    /// Output format
    #[arg(long, value_enum, default_value = "tree")]
    format: Format,

    /// Save output to file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Show the widget calls each node's style produces
    #[arg(long)]
    show_style: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging; RUST_LOG overrides the default level
    let default_level = if args.debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    info!("Loading node tree: {}", args.file.display());
    let spec = NodeSpec::load(&args.file)?;
    let Document { mut tree, root } = Document::build(&spec)?;

    let viewport = Viewport::new(args.width, args.height)
        .with_dpi(args.dpi)
        .with_baseline_dpi(args.baseline_dpi);
    let mut engine = PackLayoutEngine::new().with_debug(args.debug);
    let calls = if args.show_style {
        Some(layout_and_collect_style_calls(&mut engine, &mut tree, root, &viewport)?)
    } else {
        engine
            .compute_layout(&mut tree, root, &viewport, &StoredIntrinsics)
            .context("Layout failed")?;
        None
    };

    let report = BoxReport::build(&tree, root, calls.as_ref())?;
    let output_text = match args.format {
        Format::Tree => report::generate_tree_output(&report),
        Format::Json => report::generate_json_output(&report)?,
    };

    if let Some(output_file) = args.output {
        fs::write(&output_file, output_text)
            .with_context(|| format!("Failed to write to file: {}", output_file.display()))?;
        info!("Output written to: {}", output_file.display());
    } else {
        print!("{}", output_text);
    }

    Ok(())
}

/// Bind a recording widget to every node, lay the tree out and replay each
/// style onto its widget.
fn layout_and_collect_style_calls(
    engine: &mut PackLayoutEngine,
    tree: &mut NodeTree,
    root: NodeId,
    viewport: &Viewport,
) -> Result<StyleCalls> {
    let mut registry = WidgetRegistry::new();
    for id in tree.descendants(root)? {
        registry.bind(id, RecordingApplicator::new());
    }
    let applied = registry
        .layout_and_reapply(engine, tree, root, viewport, &StoredIntrinsics)
        .context("Layout failed")?;
    debug!("Replayed style onto {} widgets", applied);

    let mut calls = StyleCalls::new();
    for id in tree.descendants(root)? {
        if let Some(widget) = registry.widget_mut(id) {
            calls.insert(id, widget.take());
        }
    }
    Ok(calls)
}
