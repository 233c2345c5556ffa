// File: crates/stream-examples/src/bin/streams.rs
// Summary: Minimal example that renders a smoothed, wiggle-baseline streamgraph to PNG.

use anyhow::Result;
use stream_core::{streamgraph, Baseline, RenderOptions, Smoothing, StreamgraphOptions};

fn main() -> Result<()> {
    // Five synthetic streams with offset seasonal bumps
    let streams: Vec<Vec<f64>> = (0..5)
        .map(|s| {
            (0..24)
                .map(|t| {
                    let phase = t as f64 * 0.35 + s as f64 * 1.3;
                    1.0 + phase.sin().max(0.0) * (s + 1) as f64
                })
                .collect()
        })
        .collect();

    let opts = StreamgraphOptions::default()
        .with_labels(["news", "sports", "music", "film", "games"])
        .with_title("Weekly topics")
        .with_axis_labels("Week", "Mentions")
        .with_smoothing(Smoothing::interpolation())
        .with_baseline(Baseline::Wiggle);
    let fig = streamgraph(&streams, &opts)?;

    let out = std::path::PathBuf::from("target/out/example_streams.png");
    fig.render_to_png(&RenderOptions::default(), &out)?;
    println!("Wrote {}", out.display());
    Ok(())
}
