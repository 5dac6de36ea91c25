//! Evaluation helpers for predicted label vectors.
//!
//! Mirrors scikit-learn's `accuracy_score` and `confusion_matrix`: rows of
//! the confusion matrix are true labels, columns are predicted labels, and
//! both axes use the ascending union of labels seen in either vector.

use ndarray::Array2;

use crate::error::{ClassifierError, Result};

fn check_lengths(y_true: &[i32], y_pred: &[i32]) -> Result<()> {
    if y_true.len() != y_pred.len() {
        return Err(ClassifierError::DimensionMismatch {
            context: "predicted labels must match true labels",
            expected: y_true.len(),
            found: y_pred.len(),
        });
    }
    if y_true.is_empty() {
        return Err(ClassifierError::EmptyInput("metrics"));
    }
    Ok(())
}

/// Fraction of positions where `y_pred` equals `y_true`.
pub fn accuracy_score(y_true: &[i32], y_pred: &[i32]) -> Result<f64> {
    check_lengths(y_true, y_pred)?;
    let correct = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|(t, p)| t == p)
        .count();
    Ok(correct as f64 / y_true.len() as f64)
}

/// Label-indexed count table produced by [`confusion_matrix`].
#[derive(Debug, Clone, PartialEq)]
pub struct ConfusionMatrix {
    labels: Vec<i32>,
    counts: Array2<usize>,
}

impl ConfusionMatrix {
    /// Labels in axis order (ascending).
    pub fn labels(&self) -> &[i32] {
        &self.labels
    }

    /// `counts[(i, j)]`: samples with true label `labels[i]` predicted as `labels[j]`.
    pub fn counts(&self) -> &Array2<usize> {
        &self.counts
    }

    pub fn get(&self, true_label: i32, pred_label: i32) -> usize {
        match (self.index_of(true_label), self.index_of(pred_label)) {
            (Some(i), Some(j)) => self.counts[(i, j)],
            _ => 0,
        }
    }

    /// Recall per label, in axis order. Labels that never occur as a true
    /// label get a recall of 0.
    pub fn per_class_recall(&self) -> Vec<f64> {
        self.counts
            .outer_iter()
            .enumerate()
            .map(|(i, row)| {
                let support: usize = row.sum();
                if support == 0 {
                    0.0
                } else {
                    row[i] as f64 / support as f64
                }
            })
            .collect()
    }

    fn index_of(&self, label: i32) -> Option<usize> {
        self.labels.binary_search(&label).ok()
    }
}

/// Build the confusion matrix of `y_pred` against `y_true`.
///
/// For binary 0/1 labels the layout is `[[tn, fp], [fn, tp]]`.
pub fn confusion_matrix(y_true: &[i32], y_pred: &[i32]) -> Result<ConfusionMatrix> {
    check_lengths(y_true, y_pred)?;

    let mut labels: Vec<i32> = y_true.iter().chain(y_pred.iter()).copied().collect();
    labels.sort_unstable();
    labels.dedup();

    let mut counts = Array2::<usize>::zeros((labels.len(), labels.len()));
    for (t, p) in y_true.iter().zip(y_pred.iter()) {
        // Both labels come from `labels`, so the searches always succeed.
        if let (Ok(i), Ok(j)) = (labels.binary_search(t), labels.binary_search(p)) {
            counts[(i, j)] += 1;
        }
    }

    Ok(ConfusionMatrix { labels, counts })
}
