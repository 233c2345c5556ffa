// File: crates/stream-core/src/lib.rs
// Summary: Core library entry point; exports smoothing, stream composition and rendering.

pub mod error;
pub mod config;
pub mod grid;
pub mod spline;
pub mod smoothing;
pub mod stack;
pub mod streamgraph;
pub mod chart;
pub mod axis;
pub mod types;
pub mod geometry;
pub mod theme;
pub mod colormap;

pub use error::{Result, StreamError};
pub use config::SmoothingConfig;
pub use smoothing::{interpolate, moving_average, smooth_data, Smoothing};
pub use stack::{stack_layers, Baseline, Layers};
pub use streamgraph::{streamgraph, Figure, StreamgraphOptions};
pub use chart::RenderOptions;
pub use axis::Axis;
pub use theme::Theme;
pub use colormap::{sample_viridis, viridis};
