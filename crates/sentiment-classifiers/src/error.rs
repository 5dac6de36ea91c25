use thiserror::Error;

/// Result alias used by every fallible operation in the crate.
pub type Result<T> = std::result::Result<T, ClassifierError>;

/// Structural precondition failures reported by the public entry points.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassifierError {
    #[error("{context}: expected {expected}, found {found}")]
    DimensionMismatch {
        context: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("{0}: no training rows")]
    EmptyInput(&'static str),

    #[error("class {class} has no training rows")]
    InsufficientData { class: i32 },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("{0} must be fit before predicting")]
    NotFitted(&'static str),

    #[error("word '{0}' is both positive and negative")]
    LexiconOverlap(String),
}

impl ClassifierError {
    pub(crate) fn rows_mismatch(n_rows: usize, n_labels: usize) -> Self {
        ClassifierError::DimensionMismatch {
            context: "label count must match feature rows",
            expected: n_rows,
            found: n_labels,
        }
    }

    pub(crate) fn features_mismatch(n_features: usize, n_cols: usize) -> Self {
        ClassifierError::DimensionMismatch {
            context: "feature count must match the fitted model",
            expected: n_features,
            found: n_cols,
        }
    }
}
