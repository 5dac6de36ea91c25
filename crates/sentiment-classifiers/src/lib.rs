//! sentiment-classifiers: silver-label sentiment classification for short
//! social-media text.
//!
//! The crate covers the algorithmic core of the pipeline: a rule-based
//! stemmer, a negation-aware lexicon scorer that derives 3-way silver labels,
//! and two from-scratch classifiers over caller-supplied feature matrices (a
//! one-vs-rest L2 logistic regression and a multinomial naive Bayes). Text
//! cleaning, metrics and logging helpers surround it.
//!
//! Feature matrices are `ndarray` views owned by the caller and never
//! mutated; labels are `i32` class ids.
pub mod config;
pub mod error;
pub mod lexicon;
pub mod logging;
pub mod math;
pub mod metrics;
pub mod models;
pub mod pipeline;
pub mod preprocessing;
pub mod stemmer;

pub use error::{ClassifierError, Result};
