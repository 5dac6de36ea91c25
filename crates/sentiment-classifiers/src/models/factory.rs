use crate::config::{ModelConfig, ModelType};
use crate::error::Result;
use crate::models::classifier_trait::ClassifierModel;
use crate::models::logistic::OneVsRestLogistic;
use crate::models::naive_bayes::MultinomialNb;

/// Build a boxed, untrained classifier from a `ModelConfig`.
///
/// The configuration is validated here, so a returned model is always usable.
pub fn build_model(params: ModelConfig) -> Result<Box<dyn ClassifierModel>> {
    params.validate()?;
    let model: Box<dyn ClassifierModel> = match params.model_type {
        ModelType::Logistic { n_iters, lambda } => Box::new(OneVsRestLogistic::new(
            params.learning_rate,
            n_iters,
            lambda,
        )?),
        ModelType::MultinomialNb { alpha } => Box::new(MultinomialNb::new(alpha)?),
    };
    log::debug!("Built {} classifier", model.name());
    Ok(model)
}
