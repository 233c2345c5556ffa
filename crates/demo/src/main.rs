// File: crates/demo/src/main.rs
// Summary: Demo loads stream columns from CSV, optionally smooths them, and renders a streamgraph PNG.

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use stream_core::{streamgraph, theme, Baseline, RenderOptions, Smoothing, SmoothingConfig, StreamgraphOptions};

mod cli;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp(None)
        .init();

    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let (labels, streams) = load_streams_csv(&cli.input)
        .with_context(|| format!("failed to load CSV '{}'", cli.input.display()))?;
    info!("Loaded {} streams x {} rows", streams.len(), streams.first().map_or(0, Vec::len));

    let mut cfg = match &cli.config {
        Some(path) => SmoothingConfig::from_json_file(path)
            .with_context(|| format!("failed to read config '{}'", path.display()))?,
        None => SmoothingConfig::default(),
    };
    if let Some(w) = cli.window_size { cfg.window_size = w; }
    if let Some(d) = cli.density { cfg.density = d; }
    debug!("Smoothing config: {:?}", cfg);

    let smoothing = cli
        .smoothing
        .as_deref()
        .map(|tag| Smoothing::from_tag(tag, &cfg))
        .transpose()?;
    let baseline: Baseline = cli.baseline.parse()?;

    let opts = StreamgraphOptions {
        labels: Some(labels),
        smoothing,
        baseline,
        ..StreamgraphOptions::default()
    }
    .with_title(cli.title.clone())
    .with_axis_labels(cli.xlabel.clone(), cli.ylabel.clone());

    let fig = streamgraph(&streams, &opts)?;

    let mut render = RenderOptions::default();
    render.width = cli.width;
    render.height = cli.height;
    render.theme = theme::find(&cli.theme);
    if !render.theme.name.eq_ignore_ascii_case(&cli.theme) {
        warn!("Unknown theme '{}', using {}", cli.theme, render.theme.name);
    }

    let out = cli.out.clone().unwrap_or_else(|| out_name_for(&cli.input));
    fig.render_to_png(&render, &out)?;
    println!("Wrote {}", out.display());
    Ok(())
}

/// Produce output file name like target/out/streamgraph_<stem>.png
fn out_name_for(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("data");
    PathBuf::from("target/out").join(format!("streamgraph_{stem}.png"))
}

/// Read a CSV whose columns are streams. Returns (labels, streams).
fn load_streams_csv(path: &Path) -> Result<(Vec<String>, Vec<Vec<f64>>)> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let labels: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    debug!("Headers: {:?}", labels);
    if labels.is_empty() {
        anyhow::bail!("no columns found in header row");
    }

    let mut streams = vec![Vec::new(); labels.len()];
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        for (col, cell) in rec.iter().enumerate() {
            let v: f64 = cell
                .parse()
                .with_context(|| format!("row {}, column '{}': not a number: {:?}", row + 1, labels[col], cell))?;
            streams[col].push(v);
        }
    }
    Ok((labels, streams))
}
