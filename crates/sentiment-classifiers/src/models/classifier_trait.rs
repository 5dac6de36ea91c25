use ndarray::{Array1, ArrayView2};

use crate::error::Result;

/// Common contract of the multi-class classifiers in this crate.
///
/// `x` is a caller-owned matrix (rows = samples, columns = features) that no
/// implementation mutates. Labels passed to `predict` callers come from the
/// label space observed at `fit`; unknown labels are the caller's concern.
pub trait ClassifierModel: Send {
    /// Fit (or fully re-fit) the model on `x` and the row-aligned labels `y`.
    fn fit(&mut self, x: ArrayView2<'_, f64>, y: &[i32]) -> Result<()>;

    /// Predict one label per row of `x`.
    fn predict(&self, x: ArrayView2<'_, f64>) -> Result<Array1<i32>>;

    /// Classes recorded at the last `fit`, in column order.
    fn classes(&self) -> Option<&[i32]>;

    /// Optional human readable name for the model
    fn name(&self) -> &str { "classifier" }
}
