use ndarray::ArrayView2;

use crate::error::{ClassifierError, Result};

/// Distinct labels of `y` in order of first appearance.
pub fn unique_in_order(y: &[i32]) -> Vec<i32> {
    let mut classes: Vec<i32> = Vec::new();
    for &label in y {
        if !classes.contains(&label) {
            classes.push(label);
        }
    }
    classes
}

/// Shape checks shared by every `fit` entry point.
pub(crate) fn check_fit_input(x: &ArrayView2<'_, f64>, y: &[i32]) -> Result<()> {
    if x.nrows() != y.len() {
        return Err(ClassifierError::rows_mismatch(x.nrows(), y.len()));
    }
    if y.is_empty() {
        return Err(ClassifierError::EmptyInput("fit"));
    }
    Ok(())
}

/// Predict-time check that `x` has the fitted feature width.
pub(crate) fn check_predict_input(x: &ArrayView2<'_, f64>, n_features: usize) -> Result<()> {
    if x.ncols() != n_features {
        return Err(ClassifierError::features_mismatch(n_features, x.ncols()));
    }
    Ok(())
}
