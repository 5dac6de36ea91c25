use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{ClassifierError, Result};

/// Central configuration for the classifiers in the crate.
///
/// `learning_rate` only drives the gradient-descent model; the count model
/// ignores it.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub learning_rate: f64,

    #[serde(flatten)]
    pub model_type: ModelType,
}

/// Supported model types and their hyper-parameters.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub enum ModelType {
    /// One-vs-rest L2-regularized logistic regression.
    Logistic { n_iters: usize, lambda: f64 },
    /// Multinomial naive Bayes with additive smoothing.
    MultinomialNb { alpha: f64 },
}

impl ModelType {
    pub const DEFAULT_N_ITERS: usize = 1000;
    pub const DEFAULT_LAMBDA: f64 = 0.1;
    pub const DEFAULT_ALPHA: f64 = 1.0;

    pub fn name(&self) -> &'static str {
        match self {
            ModelType::Logistic { .. } => "logistic",
            ModelType::MultinomialNb { .. } => "multinomial_nb",
        }
    }
}

impl Default for ModelType {
    fn default() -> Self {
        ModelType::Logistic {
            n_iters: Self::DEFAULT_N_ITERS,
            lambda: Self::DEFAULT_LAMBDA,
        }
    }
}

impl FromStr for ModelType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "logistic" | "ovr" | "logistic_regression" => Ok(ModelType::default()),
            "naive_bayes" | "nb" | "multinomial_nb" => Ok(ModelType::MultinomialNb {
                alpha: Self::DEFAULT_ALPHA,
            }),
            _ => Err(format!(
                "Unknown model type: {}. Expected one of: logistic, naive_bayes",
                s
            )),
        }
    }
}

impl ModelConfig {
    pub const DEFAULT_LEARNING_RATE: f64 = 0.01;

    pub fn new(learning_rate: f64, model_type: ModelType) -> Self {
        Self {
            learning_rate,
            model_type,
        }
    }

    /// Check every hyper-parameter the selected model consumes.
    pub fn validate(&self) -> Result<()> {
        match &self.model_type {
            ModelType::Logistic { n_iters, lambda } => {
                if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
                    return Err(ClassifierError::InvalidConfig(format!(
                        "learning_rate must be positive, got {}",
                        self.learning_rate
                    )));
                }
                if *n_iters == 0 {
                    return Err(ClassifierError::InvalidConfig(
                        "n_iters must be at least 1".to_string(),
                    ));
                }
                if !(lambda.is_finite() && *lambda >= 0.0) {
                    return Err(ClassifierError::InvalidConfig(format!(
                        "lambda must be non-negative, got {}",
                        lambda
                    )));
                }
            }
            ModelType::MultinomialNb { alpha } => {
                if !(alpha.is_finite() && *alpha > 0.0) {
                    return Err(ClassifierError::InvalidConfig(format!(
                        "alpha must be positive, got {}",
                        alpha
                    )));
                }
            }
        }
        Ok(())
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            learning_rate: Self::DEFAULT_LEARNING_RATE,
            model_type: ModelType::default(),
        }
    }
}
