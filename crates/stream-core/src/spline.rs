// File: crates/stream-core/src/spline.rs
// Summary: Cubic interpolating spline on unit-spaced knots with not-a-knot end conditions.

use crate::error::{Result, StreamError};

/// Minimum number of knots for a cubic fit.
pub const MIN_POINTS: usize = 4;

/// Cubic spline through `(i, y[i])` for `i in 0..n`.
///
/// Stored as knot values plus second derivatives `m`; each segment
/// `[i, i+1]` is evaluated in the usual moment form with `h = 1`.
#[derive(Clone, Debug)]
pub struct CubicSpline {
    y: Vec<f64>,
    m: Vec<f64>,
}

impl CubicSpline {
    /// Fit the spline. Not-a-knot means the third derivative is continuous
    /// across knots 1 and n-2, so a cubic polynomial is reproduced exactly.
    pub fn fit(y: &[f64]) -> Result<Self> {
        let n = y.len();
        if n < MIN_POINTS {
            return Err(StreamError::InsufficientPoints { got: n, min: MIN_POINTS });
        }
        let d2 = |i: usize| y[i + 1] - 2.0 * y[i] + y[i - 1];

        // Substituting the not-a-knot rows into rows 1 and n-2 decouples them:
        // m[1] = d2(1), m[n-2] = d2(n-2). What remains is tridiagonal (1, 4, 1).
        let mut m = vec![0.0; n];
        m[1] = d2(1);
        m[n - 2] = d2(n - 2);

        let k = n - 4;
        if k > 0 {
            let mut rhs: Vec<f64> = (2..n - 2).map(|i| 6.0 * d2(i)).collect();
            rhs[0] -= m[1];
            rhs[k - 1] -= m[n - 2];
            let inner = solve_tridiagonal_141(&rhs);
            m[2..n - 2].copy_from_slice(&inner);
        }

        m[0] = 2.0 * m[1] - m[2];
        m[n - 1] = 2.0 * m[n - 2] - m[n - 3];

        Ok(Self { y: y.to_vec(), m })
    }

    /// Evaluate at `x`; values outside `[0, n-1]` extrapolate the end segments.
    pub fn eval(&self, x: f64) -> f64 {
        let last_seg = self.y.len() - 2;
        let i = if x <= 0.0 { 0 } else { (x.floor() as usize).min(last_seg) };
        let t = x - i as f64;
        let u = 1.0 - t;
        let (y0, y1) = (self.y[i], self.y[i + 1]);
        let (m0, m1) = (self.m[i], self.m[i + 1]);
        m0 * u * u * u / 6.0
            + m1 * t * t * t / 6.0
            + (y0 - m0 / 6.0) * u
            + (y1 - m1 / 6.0) * t
    }
}

// Thomas algorithm for a constant (1, 4, 1) band; diagonally dominant, no pivoting needed.
fn solve_tridiagonal_141(rhs: &[f64]) -> Vec<f64> {
    let k = rhs.len();
    let mut c = vec![0.0; k];
    let mut r = vec![0.0; k];
    c[0] = 0.25;
    r[0] = rhs[0] / 4.0;
    for j in 1..k {
        let denom = 4.0 - c[j - 1];
        c[j] = 1.0 / denom;
        r[j] = (rhs[j] - r[j - 1]) / denom;
    }
    let mut x = vec![0.0; k];
    x[k - 1] = r[k - 1];
    for j in (0..k - 1).rev() {
        x[j] = r[j] - c[j] * x[j + 1];
    }
    x
}
