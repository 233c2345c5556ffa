// File: crates/stream-core/src/smoothing.rs
// Summary: Per-stream smoothing: moving average, cubic interpolation, and the closed strategy enum.
// Notes:
// - Both strategies change the sequence length (moving average shrinks by
//   `window_size - 1`, interpolation grows by `density`); the composition
//   step checks that all streams still agree afterwards.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::{SmoothingConfig, DEFAULT_DENSITY};
use crate::error::{Result, StreamError};
use crate::grid::linspace;
use crate::spline::CubicSpline;

pub const MOVING_AVERAGE: &str = "moving_average";
pub const INTERPOLATION: &str = "interpolation";

/// Simple moving average over the fully overlapping windows only (no edge padding).
/// Output length is `data.len() - window_size + 1`.
pub fn moving_average(data: &[f64], window_size: usize) -> Result<Vec<f64>> {
    if window_size == 0 || window_size > data.len() {
        return Err(StreamError::InvalidWindow { window: window_size, len: data.len() });
    }
    let w = window_size as f64;
    Ok(data.windows(window_size).map(|win| win.iter().sum::<f64>() / w).collect())
}

/// Cubic-spline resampling at the default density (10 samples per input point).
pub fn interpolate(data: &[f64]) -> Result<Vec<f64>> {
    interpolate_with_density(data, DEFAULT_DENSITY)
}

/// Fit a cubic spline through `(i, data[i])` and evaluate it at
/// `density * n` evenly spaced points over `[0, n-1]`.
pub fn interpolate_with_density(data: &[f64], density: usize) -> Result<Vec<f64>> {
    if density == 0 {
        return Err(StreamError::InvalidParameter("interpolation density must be >= 1".into()));
    }
    let spline = CubicSpline::fit(data)?;
    let n = data.len();
    let samples = n.checked_mul(density).ok_or_else(|| {
        StreamError::InvalidParameter(format!("interpolation density {density} overflows for {n} points"))
    })?;
    Ok(linspace(0.0, (n - 1) as f64, samples)
        .into_iter()
        .map(|x| spline.eval(x))
        .collect())
}

/// Dispatch by method tag (`"moving_average"` or `"interpolation"`).
pub fn smooth_data(data: &[f64], method: &str, window_size: usize) -> Result<Vec<f64>> {
    let cfg = SmoothingConfig::default().with_window_size(window_size);
    Smoothing::from_tag(method, &cfg)?.apply(data)
}

/// Closed set of smoothing strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum Smoothing {
    MovingAverage { window_size: usize },
    Interpolation { density: usize },
}

impl Smoothing {
    pub fn moving_average(window_size: usize) -> Self {
        Smoothing::MovingAverage { window_size }
    }

    pub fn interpolation() -> Self {
        Smoothing::Interpolation { density: DEFAULT_DENSITY }
    }

    /// Build a strategy from its tag, pulling parameters from `cfg`.
    pub fn from_tag(tag: &str, cfg: &SmoothingConfig) -> Result<Self> {
        match tag {
            MOVING_AVERAGE => Ok(Smoothing::MovingAverage { window_size: cfg.window_size }),
            INTERPOLATION => Ok(Smoothing::Interpolation { density: cfg.density }),
            other => Err(StreamError::UnknownMethod(other.to_string())),
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Smoothing::MovingAverage { .. } => MOVING_AVERAGE,
            Smoothing::Interpolation { .. } => INTERPOLATION,
        }
    }

    /// Length of the output for an input of length `len`, if the input is valid.
    pub fn output_len(&self, len: usize) -> Option<usize> {
        match *self {
            Smoothing::MovingAverage { window_size } => {
                (window_size >= 1 && window_size <= len).then(|| len - window_size + 1)
            }
            Smoothing::Interpolation { density } => {
                if density >= 1 && len >= crate::spline::MIN_POINTS {
                    len.checked_mul(density)
                } else {
                    None
                }
            }
        }
    }

    pub fn apply(&self, data: &[f64]) -> Result<Vec<f64>> {
        debug!("smoothing {} points with {}", data.len(), self);
        match *self {
            Smoothing::MovingAverage { window_size } => moving_average(data, window_size),
            Smoothing::Interpolation { density } => interpolate_with_density(data, density),
        }
    }
}

impl fmt::Display for Smoothing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Smoothing {
    type Err = StreamError;

    fn from_str(s: &str) -> Result<Self> {
        Smoothing::from_tag(s, &SmoothingConfig::default())
    }
}
