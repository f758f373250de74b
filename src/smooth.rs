//! Savitzky-Golay smoothing.
//!
//! Fixed-window polynomial least-squares filter: each interior sample is
//! replaced by the value at the center of a degree-`order` polynomial fitted
//! to the surrounding `window` samples. Because the fit is a linear operation
//! the interior reduces to a single convolution with precomputed weights.
//! The first and last half-window are filled by evaluating a polynomial
//! fitted to the first/last `window` samples at the edge positions, the same
//! scheme scipy's `savgol_filter` uses for its default boundary mode.

use crate::error::WeatherError;

/// Window size used for the "Smoothed" distribution mode.
pub const SAVGOL_WINDOW: usize = 51;
/// Polynomial order used for the "Smoothed" distribution mode.
pub const SAVGOL_ORDER: usize = 3;

/// Smooth `values` with a Savitzky-Golay filter.
///
/// Output length equals input length. `window` must be odd and larger than
/// `order`, and the input must contain at least `window` samples.
pub fn savgol_filter(
    values: &[f64],
    window: usize,
    order: usize,
) -> Result<Vec<f64>, WeatherError> {
    if window % 2 == 0 || order >= window {
        return Err(WeatherError::InvalidWindow { window, order });
    }
    if values.len() < window {
        return Err(WeatherError::InsufficientData {
            have: values.len(),
            need: window,
        });
    }

    let half = window / 2;
    let n = values.len();
    let weights = center_weights(window, order);

    let mut out = vec![0.0; n];
    for i in half..n - half {
        let mut acc = 0.0;
        for (j, w) in weights.iter().enumerate() {
            acc += w * values[i + j - half];
        }
        out[i] = acc;
    }

    // Edges: fit one polynomial to the leading window and one to the
    // trailing window, then evaluate at the positions the convolution
    // cannot reach.
    let head = EdgePoly::fit(&values[..window], order);
    for (i, slot) in out.iter_mut().take(half).enumerate() {
        *slot = head.eval(i as f64);
    }
    let tail = EdgePoly::fit(&values[n - window..], order);
    for i in n - half..n {
        out[i] = tail.eval((i - (n - window)) as f64);
    }

    Ok(out)
}

/// Convolution weights for the window center.
///
/// Solves the normal equations `G x = e0` where `G[a][b] = sum_j j^(a+b)`
/// over offsets `j in -m..=m`; the weight for offset `j` is then
/// `sum_a x[a] * j^a`.
fn center_weights(window: usize, order: usize) -> Vec<f64> {
    let m = (window / 2) as i64;
    let p = order + 1;

    let mut g = vec![vec![0.0; p]; p];
    for a in 0..p {
        for b in 0..p {
            g[a][b] = (-m..=m).map(|j| (j as f64).powi((a + b) as i32)).sum();
        }
    }
    let mut rhs = vec![0.0; p];
    rhs[0] = 1.0;
    let x = gauss_solve(g, rhs);

    (-m..=m)
        .map(|j| (0..p).map(|a| x[a] * (j as f64).powi(a as i32)).sum())
        .collect()
}

/// Least-squares polynomial over positions `0..values.len()`. The fit runs
/// on positions shifted to the window center so the moment matrix stays well
/// conditioned (odd moments vanish).
struct EdgePoly {
    /// Coefficients in ascending order, about the centered origin.
    coeffs: Vec<f64>,
    center: f64,
}

impl EdgePoly {
    fn fit(values: &[f64], order: usize) -> Self {
        let p = order + 1;
        let center = (values.len() - 1) as f64 / 2.0;
        let mut g = vec![vec![0.0; p]; p];
        let mut rhs = vec![0.0; p];
        for (i, &y) in values.iter().enumerate() {
            let x = i as f64 - center;
            for a in 0..p {
                rhs[a] += y * x.powi(a as i32);
                for b in 0..p {
                    g[a][b] += x.powi((a + b) as i32);
                }
            }
        }
        Self {
            coeffs: gauss_solve(g, rhs),
            center,
        }
    }

    /// Evaluate at a raw window position (`0..values.len()`).
    fn eval(&self, x: f64) -> f64 {
        let x = x - self.center;
        self.coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
    }
}

/// Gaussian elimination with partial pivoting. The systems here are tiny
/// (order+1 unknowns) and well conditioned for any valid window/order.
fn gauss_solve(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Vec<f64> {
    let n = b.len();
    for col in 0..n {
        if let Some(piv) = (col..n).max_by(|&i, &j| a[i][col].abs().total_cmp(&a[j][col].abs())) {
            a.swap(col, piv);
            b.swap(col, piv);
        }
        let pivot = a[col][col];
        if pivot.abs() < f64::EPSILON {
            continue;
        }
        for row in col + 1..n {
            let factor = a[row][col] / pivot;
            for k in col..n {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }
    let mut x = vec![0.0; n];
    for col in (0..n).rev() {
        let mut acc = b[col];
        for k in col + 1..n {
            acc -= a[col][k] * x[k];
        }
        x[col] = if a[col][col].abs() < f64::EPSILON {
            0.0
        } else {
            acc / a[col][col]
        };
    }
    x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_weights_window5_order2() {
        // Classic quadratic/cubic window-5 kernel: [-3, 12, 17, 12, -3] / 35.
        let w = center_weights(5, 2);
        let expected = [-3.0, 12.0, 17.0, 12.0, -3.0].map(|v| v / 35.0);
        for (got, want) in w.iter().zip(expected.iter()) {
            assert!((got - want).abs() < 1e-9, "got {got}, want {want}");
        }
    }

    #[test]
    fn cubic_signal_passes_through_unchanged() {
        let values: Vec<f64> = (0..80)
            .map(|i| {
                let x = i as f64 * 0.1;
                0.5 * x * x * x - 2.0 * x * x + x + 3.0
            })
            .collect();
        let smoothed = savgol_filter(&values, 51, 3).unwrap();
        assert_eq!(smoothed.len(), values.len());
        for (got, want) in smoothed.iter().zip(values.iter()) {
            assert!((got - want).abs() < 1e-6, "got {got}, want {want}");
        }
    }

    #[test]
    fn short_input_is_rejected() {
        let values = vec![1.0; 50];
        match savgol_filter(&values, 51, 3) {
            Err(WeatherError::InsufficientData { have, need }) => {
                assert_eq!(have, 50);
                assert_eq!(need, 51);
            }
            other => panic!("expected InsufficientData, got {other:?}"),
        }
    }

    #[test]
    fn even_window_is_rejected() {
        let values = vec![1.0; 100];
        assert!(matches!(
            savgol_filter(&values, 50, 3),
            Err(WeatherError::InvalidWindow { .. })
        ));
        assert!(matches!(
            savgol_filter(&values, 5, 7),
            Err(WeatherError::InvalidWindow { .. })
        ));
    }

    #[test]
    fn smoothing_reduces_noise_variance() {
        // Deterministic pseudo-noise on a flat signal.
        let values: Vec<f64> = (0..200)
            .map(|i| 70.0 + ((i * 2654435761_usize % 1000) as f64 / 1000.0 - 0.5) * 10.0)
            .collect();
        let smoothed = savgol_filter(&values, 51, 3).unwrap();
        let var = |xs: &[f64]| {
            let mean = xs.iter().sum::<f64>() / xs.len() as f64;
            xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / xs.len() as f64
        };
        // Compare interior only, where the convolution applies.
        assert!(var(&smoothed[25..175]) < var(&values[25..175]));
    }
}
