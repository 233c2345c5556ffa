// File: crates/stream-core/src/axis.rs
// Summary: Axis model with label, visible range and tick layout.

use crate::grid::linspace;

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    /// Range width, never zero.
    pub fn span(&self) -> f64 { (self.max - self.min).abs().max(1e-9) }

    /// Widen a degenerate range and add a fractional margin on both ends.
    pub fn fit(&mut self, lo: f64, hi: f64, margin: f64) {
        let (lo, hi) = if (hi - lo).abs() < 1e-9 { (lo - 0.5, hi + 0.5) } else { (lo, hi) };
        let m = (hi - lo) * margin;
        self.min = lo - m;
        self.max = hi + m;
    }

    /// `count` evenly spaced tick values across the range.
    pub fn ticks(&self, count: usize) -> Vec<f64> { linspace(self.min, self.max, count) }
}

/// Compact tick label: integers without decimals, otherwise up to two places.
pub fn format_tick(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{}", v.round() as i64)
    } else {
        let s = format!("{v:.2}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
