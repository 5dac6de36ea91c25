use ndarray::{Array1, Array2, ArrayView2, Axis};

use crate::error::{ClassifierError, Result};
use crate::math::argmax_rows;
use crate::models::classifier_trait::ClassifierModel;
use crate::models::utils::{check_fit_input, check_predict_input, unique_in_order};

#[derive(Debug, Clone)]
struct FittedNb {
    classes: Vec<i32>,
    /// `n_classes x n_features` summed counts.
    feature_counts: Array2<f64>,
    /// Total count mass per class.
    class_counts: Array1<f64>,
    feature_log_prob: Array2<f64>,
    class_log_prior: Array1<f64>,
}

/// Multinomial naive Bayes over non-negative count features.
///
/// Smoothed log-probabilities and log-priors are computed once in `fit`, so
/// prediction is a single matrix product plus the prior.
#[derive(Debug, Clone)]
pub struct MultinomialNb {
    alpha: f64,
    fitted: Option<FittedNb>,
}

impl MultinomialNb {
    pub fn new(alpha: f64) -> Result<Self> {
        if !(alpha.is_finite() && alpha > 0.0) {
            return Err(ClassifierError::InvalidConfig(format!(
                "alpha must be positive, got {}",
                alpha
            )));
        }
        Ok(Self {
            alpha,
            fitted: None,
        })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Fit against an explicitly declared label space.
    ///
    /// Every declared class needs at least one row in `y`; an empty class would
    /// carry a log-prior of negative infinity and is rejected instead.
    pub fn fit_with_classes(
        &mut self,
        x: ArrayView2<'_, f64>,
        y: &[i32],
        classes: &[i32],
    ) -> Result<()> {
        check_fit_input(&x, y)?;
        let classes = unique_in_order(classes);
        if classes.is_empty() {
            return Err(ClassifierError::EmptyInput("declared classes"));
        }
        if let Some(label) = y.iter().find(|&&label| !classes.contains(&label)) {
            return Err(ClassifierError::InvalidInput(format!(
                "label {} is not among the declared classes",
                label
            )));
        }
        if x.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(ClassifierError::InvalidInput(
                "multinomial naive Bayes needs finite, non-negative counts".to_string(),
            ));
        }

        let (n_samples, n_features) = x.dim();
        log::info!(
            "Training multinomial naive Bayes: {} samples, {} features, {} classes",
            n_samples,
            n_features,
            classes.len()
        );

        let mut feature_counts = Array2::<f64>::zeros((classes.len(), n_features));
        let mut priors = Array1::<f64>::zeros(classes.len());
        for (idx, &class) in classes.iter().enumerate() {
            let rows: Vec<usize> = y
                .iter()
                .enumerate()
                .filter_map(|(row, &label)| (label == class).then_some(row))
                .collect();
            if rows.is_empty() {
                return Err(ClassifierError::InsufficientData { class });
            }
            feature_counts
                .row_mut(idx)
                .assign(&x.select(Axis(0), &rows).sum_axis(Axis(0)));
            priors[idx] = rows.len() as f64 / n_samples as f64;
        }
        let class_counts = feature_counts.sum_axis(Axis(1));

        // log(count + alpha) - log(class_total + alpha * n_features)
        let numerator = (&feature_counts + self.alpha).mapv(f64::ln);
        let denominator = (&class_counts + self.alpha * n_features as f64).mapv(f64::ln);
        let feature_log_prob = numerator - &denominator.view().insert_axis(Axis(1));
        let class_log_prior = priors.mapv(f64::ln);

        log::debug!("Class log-priors: {:?}", class_log_prior.to_vec());

        self.fitted = Some(FittedNb {
            classes,
            feature_counts,
            class_counts,
            feature_log_prob,
            class_log_prior,
        });
        Ok(())
    }

    /// Log-prior plus log-likelihood of every row under every class.
    pub fn joint_log_likelihood(&self, x: ArrayView2<'_, f64>) -> Result<Array2<f64>> {
        let fitted = self.fitted()?;
        check_predict_input(&x, fitted.feature_log_prob.ncols())?;
        Ok(x.dot(&fitted.feature_log_prob.t()) + &fitted.class_log_prior)
    }

    pub fn feature_log_prob(&self) -> Option<&Array2<f64>> {
        self.fitted.as_ref().map(|f| &f.feature_log_prob)
    }

    pub fn class_log_prior(&self) -> Option<&Array1<f64>> {
        self.fitted.as_ref().map(|f| &f.class_log_prior)
    }

    pub fn feature_counts(&self) -> Option<&Array2<f64>> {
        self.fitted.as_ref().map(|f| &f.feature_counts)
    }

    pub fn class_counts(&self) -> Option<&Array1<f64>> {
        self.fitted.as_ref().map(|f| &f.class_counts)
    }

    fn fitted(&self) -> Result<&FittedNb> {
        self.fitted
            .as_ref()
            .ok_or(ClassifierError::NotFitted("multinomial naive Bayes"))
    }
}

impl Default for MultinomialNb {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            fitted: None,
        }
    }
}

impl ClassifierModel for MultinomialNb {
    fn fit(&mut self, x: ArrayView2<'_, f64>, y: &[i32]) -> Result<()> {
        let classes = unique_in_order(y);
        self.fit_with_classes(x, y, &classes)
    }

    fn predict(&self, x: ArrayView2<'_, f64>) -> Result<Array1<i32>> {
        let jll = self.joint_log_likelihood(x)?;
        let classes = &self.fitted()?.classes;
        Ok(argmax_rows(jll.view())
            .into_iter()
            .map(|idx| classes[idx])
            .collect())
    }

    fn classes(&self) -> Option<&[i32]> {
        self.fitted.as_ref().map(|f| f.classes.as_slice())
    }

    fn name(&self) -> &str {
        "multinomial_nb"
    }
}
