use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use rayon::prelude::*;

use crate::error::{ClassifierError, Result};
use crate::math::{argmax_rows, log_loss, sigmoid};
use crate::models::classifier_trait::ClassifierModel;
use crate::models::utils::{check_fit_input, check_predict_input, unique_in_order};

/// Fitted binary model for one class against the rest.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassModel {
    pub weights: Array1<f64>,
    pub bias: f64,
    /// Penalized log-loss before each gradient step.
    pub loss_history: Vec<f64>,
}

#[derive(Debug, Clone)]
struct FittedOvr {
    classes: Vec<i32>,
    models: Vec<ClassModel>,
    /// `n_features x n_classes`, column `c` is `models[c].weights`.
    weight_matrix: Array2<f64>,
    biases: Array1<f64>,
}

/// One-vs-rest logistic regression trained by batch gradient descent with an
/// L2 penalty.
///
/// Each class gets an independent binary model. `fit` always starts from zero
/// weights and replaces every per-class record; there is no incremental path.
#[derive(Debug, Clone)]
pub struct OneVsRestLogistic {
    learning_rate: f64,
    n_iters: usize,
    lambda: f64,
    fitted: Option<FittedOvr>,
}

impl OneVsRestLogistic {
    /// Iterations between loss checkpoints in the debug log.
    const LOG_EVERY: usize = 100;

    pub fn new(learning_rate: f64, n_iters: usize, lambda: f64) -> Result<Self> {
        if !(learning_rate.is_finite() && learning_rate > 0.0) {
            return Err(ClassifierError::InvalidConfig(format!(
                "learning_rate must be positive, got {}",
                learning_rate
            )));
        }
        if n_iters == 0 {
            return Err(ClassifierError::InvalidConfig(
                "n_iters must be at least 1".to_string(),
            ));
        }
        if !(lambda.is_finite() && lambda >= 0.0) {
            return Err(ClassifierError::InvalidConfig(format!(
                "lambda must be non-negative, got {}",
                lambda
            )));
        }
        Ok(Self {
            learning_rate,
            n_iters,
            lambda,
            fitted: None,
        })
    }

    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    /// Per-class records in class order.
    pub fn class_models(&self) -> Option<&[ClassModel]> {
        self.fitted.as_ref().map(|f| f.models.as_slice())
    }

    /// Loss trajectory recorded while fitting `class`.
    pub fn loss_history(&self, class: i32) -> Option<&[f64]> {
        let fitted = self.fitted.as_ref()?;
        let idx = fitted.classes.iter().position(|&c| c == class)?;
        Some(fitted.models[idx].loss_history.as_slice())
    }

    /// Raw linear scores, one column per class.
    pub fn decision_function(&self, x: ArrayView2<'_, f64>) -> Result<Array2<f64>> {
        let fitted = self.fitted()?;
        check_predict_input(&x, fitted.weight_matrix.nrows())?;
        Ok(x.dot(&fitted.weight_matrix) + &fitted.biases)
    }

    /// Per-class probabilities, one column per class in the order the classes
    /// were first observed during `fit`.
    pub fn predict_proba(&self, x: ArrayView2<'_, f64>) -> Result<Array2<f64>> {
        let scores = self.decision_function(x)?;
        Ok(scores.mapv(crate::math::sigmoid_scalar))
    }

    fn fitted(&self) -> Result<&FittedOvr> {
        self.fitted
            .as_ref()
            .ok_or(ClassifierError::NotFitted("one-vs-rest logistic regression"))
    }

    /// Gradient descent for a single 0/1 target vector.
    fn fit_binary(
        &self,
        x: &ArrayView2<'_, f64>,
        y_binary: ArrayView1<'_, f64>,
        class: i32,
    ) -> ClassModel {
        let (n_samples, n_features) = x.dim();
        let n = n_samples as f64;
        let penalty = self.lambda / n;

        let mut weights = Array1::<f64>::zeros(n_features);
        let mut bias = 0.0;
        let mut loss_history = Vec::with_capacity(self.n_iters);

        for iteration in 0..self.n_iters {
            let linear = x.dot(&weights) + bias;
            let y_pred = sigmoid(linear.view());

            // Penalty is (lambda / 2n) * |w|^2, the integral of the (lambda / n) * w
            // gradient term below, not (lambda / 2) * |w|^2.
            let loss = log_loss(y_binary, y_pred.view())
                + 0.5 * penalty * weights.dot(&weights);
            loss_history.push(loss);

            let residual = &y_pred - &y_binary;
            let dw = x.t().dot(&residual) / n + &weights * penalty;
            let db = residual.sum() / n;

            weights.scaled_add(-self.learning_rate, &dw);
            bias -= self.learning_rate * db;

            if iteration % Self::LOG_EVERY == 0 {
                log::debug!("Class {} iteration {}, loss: {:.4}", class, iteration, loss);
            }
        }

        ClassModel {
            weights,
            bias,
            loss_history,
        }
    }
}

impl Default for OneVsRestLogistic {
    fn default() -> Self {
        Self {
            learning_rate: 0.01,
            n_iters: 1000,
            lambda: 0.1,
            fitted: None,
        }
    }
}

impl ClassifierModel for OneVsRestLogistic {
    fn fit(&mut self, x: ArrayView2<'_, f64>, y: &[i32]) -> Result<()> {
        check_fit_input(&x, y)?;
        let classes = unique_in_order(y);
        log::info!(
            "Training one-vs-rest logistic regression: {} samples, {} features, {} classes",
            x.nrows(),
            x.ncols(),
            classes.len()
        );

        // Every class is an independent problem over shared read-only inputs.
        let models: Vec<ClassModel> = classes
            .par_iter()
            .map(|&class| {
                let y_binary: Array1<f64> = y
                    .iter()
                    .map(|&label| if label == class { 1.0 } else { 0.0 })
                    .collect();
                self.fit_binary(&x, y_binary.view(), class)
            })
            .collect();

        let n_features = x.ncols();
        let weight_matrix =
            Array2::from_shape_fn((n_features, models.len()), |(f, c)| models[c].weights[f]);
        let biases: Array1<f64> = models.iter().map(|m| m.bias).collect();

        for (class, model) in classes.iter().zip(models.iter()) {
            if let Some(last) = model.loss_history.last() {
                log::info!("Class {} final loss: {:.4}", class, last);
            }
        }

        self.fitted = Some(FittedOvr {
            classes,
            models,
            weight_matrix,
            biases,
        });
        Ok(())
    }

    fn predict(&self, x: ArrayView2<'_, f64>) -> Result<Array1<i32>> {
        let proba = self.predict_proba(x)?;
        let classes = &self.fitted()?.classes;
        Ok(argmax_rows(proba.view())
            .into_iter()
            .map(|idx| classes[idx])
            .collect())
    }

    fn classes(&self) -> Option<&[i32]> {
        self.fitted.as_ref().map(|f| f.classes.as_slice())
    }

    fn name(&self) -> &str {
        "one_vs_rest_logistic"
    }
}
