use serde_derive::Deserialize;

use crate::ontology::Sentiment;

/// Multinomial Naive Bayes parameters: per-class log-priors and per-class,
/// per-feature log-likelihoods, with the class list giving the row order.
#[derive(Debug, Deserialize)]
pub struct NaiveBayesModel {
    pub classes: Vec<Sentiment>,
    pub class_log_prior: Vec<f32>,
    pub feature_log_prob: Vec<Vec<f32>>,
}
