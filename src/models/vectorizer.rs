use std::collections::HashMap;

use serde_derive::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TfidfVectorizerModel {
    pub language_code: String,
    pub vectorizer: SklearnVectorizerModel,
    pub config: TfidfVectorizerConfiguration,
}

/// Vocabulary and idf weights in the layout the offline training pipeline
/// serializes them: one column index per n-gram, one idf weight per column.
#[derive(Debug, Deserialize)]
pub struct SklearnVectorizerModel {
    pub idf_diag: Vec<f32>,
    pub vocab: HashMap<String, usize>,
}

#[derive(Debug, Deserialize)]
pub struct TfidfVectorizerConfiguration {
    pub ngram_range: (usize, usize),
}
