// File: crates/demo/src/cli.rs
// Summary: Command-line arguments for the streamgraph demo.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "streamgraph-demo",
    version,
    about = "Render a streamgraph PNG from a CSV of stream columns",
    long_about = "Each CSV column is one stream; the header row supplies the legend labels.\n\
                  Rows are time steps. Optional smoothing is applied to every stream."
)]
pub struct Cli {
    /// Input CSV file (header row = stream labels)
    pub input: PathBuf,

    /// Output PNG path (default: target/out/streamgraph_<stem>.png)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Smoothing method: moving_average or interpolation
    #[arg(long)]
    pub smoothing: Option<String>,

    /// Moving-average window size
    #[arg(long)]
    pub window_size: Option<usize>,

    /// Interpolated samples per input point
    #[arg(long)]
    pub density: Option<usize>,

    /// Stack baseline: zero, symmetric or wiggle
    #[arg(long, default_value = "zero")]
    pub baseline: String,

    /// JSON file with smoothing defaults ({"window_size": .., "density": ..})
    #[arg(long, env = "STREAMGRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "Streamgraph")]
    pub title: String,

    #[arg(long, default_value = "X-axis")]
    pub xlabel: String,

    #[arg(long, default_value = "Y-axis")]
    pub ylabel: String,

    /// Theme preset: light or dark
    #[arg(long, default_value = "light")]
    pub theme: String,

    #[arg(long, default_value_t = 1000)]
    pub width: i32,

    #[arg(long, default_value_t = 600)]
    pub height: i32,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
