// File: crates/stream-core/src/colormap.rs
// Summary: Viridis colormap sampling for default stream colors.

use skia_safe as skia;

use crate::grid::linspace;

// Viridis at ten evenly spaced stops over [0, 1].
const VIRIDIS_STOPS: [(u8, u8, u8); 10] = [
    (0x44, 0x01, 0x54),
    (0x48, 0x28, 0x78),
    (0x3e, 0x4a, 0x89),
    (0x31, 0x68, 0x8e),
    (0x26, 0x82, 0x8e),
    (0x1f, 0x9e, 0x89),
    (0x35, 0xb7, 0x79),
    (0x6d, 0xcd, 0x59),
    (0xb4, 0xde, 0x2c),
    (0xfd, 0xe7, 0x25),
];

/// Viridis color at `t` in `[0, 1]` (clamped), linearly blended between stops.
///
/// The stops and both endpoints are exact; colors in between are a piecewise
/// linear approximation of matplotlib's 256-entry table and can differ from it
/// by a few units per channel.
pub fn viridis(t: f64) -> skia::Color {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let pos = t * (VIRIDIS_STOPS.len() - 1) as f64;
    let i = (pos.floor() as usize).min(VIRIDIS_STOPS.len() - 2);
    let f = pos - i as f64;
    let (r0, g0, b0) = VIRIDIS_STOPS[i];
    let (r1, g1, b1) = VIRIDIS_STOPS[i + 1];
    let lerp = |a: u8, b: u8| -> u8 { (a as f64 + (b as f64 - a as f64) * f).round() as u8 };
    skia::Color::from_argb(255, lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
}

/// `n` colors sampled evenly from viridis, first at 0.0 and last at 1.0.
pub fn sample_viridis(n: usize) -> Vec<skia::Color> {
    linspace(0.0, 1.0, n).into_iter().map(viridis).collect()
}
