pub mod logistic;
pub mod naive_bayes;
pub mod utils;

pub mod classifier_trait;
pub mod factory;
