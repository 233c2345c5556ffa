// File: crates/stream-core/src/streamgraph.rs
// Summary: Stream composition: per-stream smoothing, length check, stacking, default colors, Figure handle.

use log::debug;
use skia_safe as skia;

use crate::axis::Axis;
use crate::colormap::sample_viridis;
use crate::error::{Result, StreamError};
use crate::grid::index_axis;
use crate::smoothing::Smoothing;
use crate::stack::{stack_layers, Baseline, Layers};

/// Metadata and processing choices for one streamgraph.
#[derive(Clone, Debug)]
pub struct StreamgraphOptions {
    /// One label per stream; a missing entry leaves that stream out of the legend.
    pub labels: Option<Vec<String>>,
    /// Layer fills; cycled when shorter than the stream count. `None` samples viridis.
    pub colors: Option<Vec<skia::Color>>,
    pub title: String,
    pub xlabel: String,
    pub ylabel: String,
    /// Applied to every stream when set.
    pub smoothing: Option<Smoothing>,
    pub baseline: Baseline,
}

impl Default for StreamgraphOptions {
    fn default() -> Self {
        Self {
            labels: None,
            colors: None,
            title: "Streamgraph".to_string(),
            xlabel: "X-axis".to_string(),
            ylabel: "Y-axis".to_string(),
            smoothing: None,
            baseline: Baseline::Zero,
        }
    }
}

impl StreamgraphOptions {
    pub fn with_labels<S: Into<String>>(mut self, labels: impl IntoIterator<Item = S>) -> Self {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_colors(mut self, colors: Vec<skia::Color>) -> Self {
        self.colors = Some(colors);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_axis_labels(mut self, xlabel: impl Into<String>, ylabel: impl Into<String>) -> Self {
        self.xlabel = xlabel.into();
        self.ylabel = ylabel.into();
        self
    }

    pub fn with_smoothing(mut self, smoothing: Smoothing) -> Self {
        self.smoothing = Some(smoothing);
        self
    }

    pub fn with_baseline(mut self, baseline: Baseline) -> Self {
        self.baseline = baseline;
        self
    }
}

/// A composed streamgraph, ready to render or inspect.
///
/// Fields are public so callers can adjust titles, axes or colors before
/// rendering with [`Figure::render_to_png`] and friends.
#[derive(Clone, Debug)]
pub struct Figure {
    pub x: Vec<f64>,
    /// Processed streams, rows = streams, columns = time steps.
    pub data: Vec<Vec<f64>>,
    pub layers: Layers,
    pub labels: Vec<String>,
    pub colors: Vec<skia::Color>,
    pub title: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
    /// Draw a legend in the upper-right corner.
    pub legend: bool,
}

impl Figure {
    pub fn stream_count(&self) -> usize { self.data.len() }

    /// Number of time steps shared by every processed stream.
    pub fn len(&self) -> usize { self.x.len() }

    pub fn is_empty(&self) -> bool { self.x.is_empty() }

    /// Label of stream `k`, if one was given.
    pub fn label(&self, k: usize) -> Option<&str> {
        self.labels.get(k).map(String::as_str)
    }
}

/// Smooth (optionally), validate and stack `streams` into a [`Figure`].
pub fn streamgraph<R: AsRef<[f64]>>(streams: &[R], opts: &StreamgraphOptions) -> Result<Figure> {
    if streams.is_empty() {
        return Err(StreamError::EmptyInput);
    }

    let data: Vec<Vec<f64>> = match &opts.smoothing {
        Some(method) => streams
            .iter()
            .map(|s| method.apply(s.as_ref()))
            .collect::<Result<_>>()?,
        None => streams.iter().map(|s| s.as_ref().to_vec()).collect(),
    };

    let len = data[0].len();
    if len == 0 {
        return Err(StreamError::EmptyInput);
    }
    if let Some((stream, got)) = data.iter().enumerate().map(|(i, d)| (i, d.len())).find(|&(_, l)| l != len) {
        return Err(StreamError::ShapeMismatch { stream, expected: len, got });
    }

    let layers = stack_layers(&data, opts.baseline)?;
    let x = index_axis(len);

    let colors: Vec<skia::Color> = match &opts.colors {
        Some(given) if !given.is_empty() => given.iter().cycle().take(data.len()).copied().collect(),
        _ => sample_viridis(data.len()),
    };

    let mut x_axis = Axis::new(opts.xlabel.clone(), 0.0, (len - 1) as f64);
    if len == 1 {
        x_axis.fit(0.0, 0.0, 0.0);
    }
    let mut y_axis = Axis::new(opts.ylabel.clone(), 0.0, 1.0);
    if let Some((lo, hi)) = layers.value_range() {
        y_axis.fit(lo, hi, 0.02);
    }

    debug!(
        "streamgraph: {} streams x {} steps, smoothing={:?}, baseline={}",
        data.len(),
        len,
        opts.smoothing.map(|s| s.tag()),
        opts.baseline
    );

    let labels: Vec<String> = opts
        .labels
        .as_ref()
        .map(|l| l.iter().take(data.len()).cloned().collect())
        .unwrap_or_default();

    Ok(Figure {
        x,
        data,
        layers,
        labels,
        colors,
        title: opts.title.clone(),
        x_axis,
        y_axis,
        legend: true,
    })
}
