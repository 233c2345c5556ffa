// File: crates/stream-core/src/grid.rs
// Summary: Evenly spaced sample points for resampling, color sampling and grid lines.

/// `steps` evenly spaced values over `[start, end]`, both ends included.
/// `steps == 1` yields `[start]`; the last value is pinned to `end`.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (steps as f64 - 1.0);
            let mut out: Vec<f64> = (0..steps).map(|i| start + step * i as f64).collect();
            out[steps - 1] = end;
            out
        }
    }
}

/// Index axis `[0, 1, ..., len-1]` as floats.
pub fn index_axis(len: usize) -> Vec<f64> {
    (0..len).map(|i| i as f64).collect()
}
