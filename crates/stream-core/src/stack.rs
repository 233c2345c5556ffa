// File: crates/stream-core/src/stack.rs
// Summary: Stacked layer boundaries for equal-length rows, with zero/symmetric/wiggle baselines.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, StreamError};

/// Where the bottom of the stack sits at each column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Baseline {
    /// Plain stacking from zero.
    #[default]
    Zero,
    /// Stack centred on zero (ThemeRiver).
    Symmetric,
    /// Minimises the summed squared slope of all layers.
    Wiggle,
}

impl Baseline {
    pub fn tag(&self) -> &'static str {
        match self {
            Baseline::Zero => "zero",
            Baseline::Symmetric => "symmetric",
            Baseline::Wiggle => "wiggle",
        }
    }
}

impl fmt::Display for Baseline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Baseline {
    type Err = StreamError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "zero" => Ok(Baseline::Zero),
            "symmetric" | "sym" => Ok(Baseline::Symmetric),
            "wiggle" => Ok(Baseline::Wiggle),
            other => Err(StreamError::InvalidParameter(format!("unknown baseline: {other}"))),
        }
    }
}

/// Boundaries of `m` stacked layers over `len` columns.
/// `bounds[0]` is the baseline; layer `k` spans `bounds[k]..bounds[k + 1]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Layers {
    pub bounds: Vec<Vec<f64>>,
}

impl Layers {
    pub fn layer_count(&self) -> usize { self.bounds.len().saturating_sub(1) }

    pub fn columns(&self) -> usize { self.bounds.first().map_or(0, |b| b.len()) }

    pub fn lower(&self, k: usize) -> &[f64] { &self.bounds[k] }

    pub fn upper(&self, k: usize) -> &[f64] { &self.bounds[k + 1] }

    /// Overall (min, max) over every boundary, `None` when there are no columns.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for v in self.bounds.iter().flatten() {
            lo = lo.min(*v);
            hi = hi.max(*v);
        }
        (lo.is_finite() && hi.is_finite()).then_some((lo, hi))
    }
}

/// Stack `rows` (one per stream, all the same length) on top of `baseline`.
pub fn stack_layers<R: AsRef<[f64]>>(rows: &[R], baseline: Baseline) -> Result<Layers> {
    let first = rows.first().ok_or(StreamError::EmptyInput)?.as_ref().len();
    for (i, r) in rows.iter().enumerate() {
        let got = r.as_ref().len();
        if got != first {
            return Err(StreamError::ShapeMismatch { stream: i, expected: first, got });
        }
    }

    let m = rows.len();
    let base: Vec<f64> = (0..first)
        .map(|j| match baseline {
            Baseline::Zero => 0.0,
            Baseline::Symmetric => -0.5 * rows.iter().map(|r| r.as_ref()[j]).sum::<f64>(),
            Baseline::Wiggle => {
                let weighted: f64 = rows
                    .iter()
                    .enumerate()
                    .map(|(i, r)| (m as f64 - 0.5 - i as f64) * r.as_ref()[j])
                    .sum();
                -weighted / m as f64
            }
        })
        .collect();

    let mut bounds = Vec::with_capacity(m + 1);
    bounds.push(base);
    for r in rows {
        let prev = &bounds[bounds.len() - 1];
        let next: Vec<f64> = prev.iter().zip(r.as_ref()).map(|(p, v)| p + v).collect();
        bounds.push(next);
    }
    Ok(Layers { bounds })
}
