//! Shared numeric helpers for the classifiers.
//!
//! Every helper works on whole `ndarray` views. The clamping in [`sigmoid`]
//! and `log_loss` is applied unconditionally, not only when an overflow is
//! detected, so identical inputs always produce identical outputs.
use ndarray::{Array1, ArrayView1, ArrayView2, Axis};

/// Pre-activation bound applied before exponentiation.
pub const SIGMOID_CLIP: f64 = 250.0;

/// Distance kept between predicted probabilities and {0, 1} inside logarithms.
pub const PROBA_EPSILON: f64 = 1e-15;

/// Logistic function of a single score, clamped to `[-250, 250]` first.
#[inline]
pub fn sigmoid_scalar(z: f64) -> f64 {
    1.0 / (1.0 + (-z.clamp(-SIGMOID_CLIP, SIGMOID_CLIP)).exp())
}

/// Element-wise logistic function.
pub fn sigmoid(z: ArrayView1<'_, f64>) -> Array1<f64> {
    z.mapv(sigmoid_scalar)
}

/// Mean binary cross-entropy of `y_pred` against 0/1 targets `y_true`.
///
/// Predictions are clipped to `[eps, 1 - eps]` so the loss stays finite.
pub(crate) fn log_loss(y_true: ArrayView1<'_, f64>, y_pred: ArrayView1<'_, f64>) -> f64 {
    assert_eq!(
        y_true.len(),
        y_pred.len(),
        "log_loss requires equal length vectors"
    );
    if y_true.is_empty() {
        return 0.0;
    }
    let p = y_pred.mapv(|v| v.clamp(PROBA_EPSILON, 1.0 - PROBA_EPSILON));
    let positive = &y_true * &p.mapv(f64::ln);
    let negative = &y_true.mapv(|y| 1.0 - y) * &p.mapv(|v| (1.0 - v).ln());
    let per_sample = positive + negative;
    -per_sample.mean().unwrap_or(0.0)
}

/// Column index of the largest value in every row.
///
/// Ties resolve to the lowest column index: a later column only wins when it
/// is strictly greater.
pub fn argmax_rows(scores: ArrayView2<'_, f64>) -> Vec<usize> {
    scores
        .axis_iter(Axis(0))
        .map(|row| {
            let mut best = 0usize;
            let mut best_score = f64::NEG_INFINITY;
            for (idx, &value) in row.iter().enumerate() {
                if idx == 0 || value > best_score {
                    best = idx;
                    best_score = value;
                }
            }
            best
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn sigmoid_is_finite_for_extreme_scores() {
        let z = array![-1e6, -300.0, 0.0, 300.0, 1e6];
        let s = sigmoid(z.view());
        assert!(s.iter().all(|v| v.is_finite()));
        assert!((s[2] - 0.5).abs() < 1e-12);
        assert!(s[0] > 0.0, "clamped sigmoid never reaches exactly 0");
        assert_eq!(s[3], s[4], "scores past the clip bound saturate identically");
    }

    #[test]
    fn log_loss_stays_finite_on_confident_mistakes() {
        let y = array![1.0, 0.0];
        let p = array![0.0, 1.0];
        let loss = log_loss(y.view(), p.view());
        assert!(loss.is_finite());
        assert!((loss - (-(PROBA_EPSILON).ln())).abs() < 1e-2);
    }

    #[test]
    fn log_loss_of_no_samples_is_zero() {
        let empty = Array1::<f64>::zeros(0);
        assert_eq!(log_loss(empty.view(), empty.view()), 0.0);
    }

    #[test]
    fn log_loss_of_half_is_ln_two() {
        let y = array![1.0, 0.0, 1.0];
        let p = array![0.5, 0.5, 0.5];
        assert!((log_loss(y.view(), p.view()) - std::f64::consts::LN_2).abs() < 1e-12);
    }

    #[test]
    fn argmax_rows_prefers_lower_index_on_ties() {
        let scores = array![[0.2, 0.9, 0.9], [0.5, 0.5, 0.5], [-1.0, -3.0, 0.0]];
        assert_eq!(argmax_rows(scores.view()), vec![1, 0, 2]);
    }

    #[test]
    fn argmax_rows_handles_negative_infinity() {
        let scores = array![[f64::NEG_INFINITY, f64::NEG_INFINITY]];
        assert_eq!(argmax_rows(scores.view()), vec![0]);
    }
}
