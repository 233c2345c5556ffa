// File: crates/stream-core/src/config.rs
// Summary: Smoothing defaults as an explicit, serde-loadable configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, StreamError};

/// Default moving-average window.
pub const DEFAULT_WINDOW_SIZE: usize = 5;
/// Default number of interpolated samples per input point.
pub const DEFAULT_DENSITY: usize = 10;

/// Knobs shared by every smoothing strategy.
///
/// Only the field relevant to the selected strategy is read: `window_size`
/// for the moving average, `density` for interpolation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothingConfig {
    pub window_size: usize,
    pub density: usize,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self { window_size: DEFAULT_WINDOW_SIZE, density: DEFAULT_DENSITY }
    }
}

impl SmoothingConfig {
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    pub fn with_density(mut self, density: usize) -> Self {
        self.density = density;
        self
    }

    /// Parse from JSON; missing fields keep their defaults.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 {
            return Err(StreamError::InvalidParameter("window_size must be >= 1".into()));
        }
        if self.density == 0 {
            return Err(StreamError::InvalidParameter("density must be >= 1".into()));
        }
        Ok(())
    }
}
