use std::sync::Arc;

use crate::resources::SharedResources;

/// Splits the input on non-alphanumeric boundaries, lower-casing each token
/// and discarding pure punctuation.
pub fn tokenize_light(input: &str) -> Vec<String> {
    input
        .split(|c: char| !c.is_alphanumeric())
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| chunk.to_lowercase())
        .collect()
}

/// Deterministic text preprocessing: case folding, tokenization, stopword
/// filtering and stemming. Negation markers are protected from stopword
/// removal, otherwise "tidak bersih" and "bersih" would collapse to the same
/// token sequence.
#[derive(Debug)]
pub struct Normalizer {
    shared_resources: Arc<SharedResources>,
}

impl Normalizer {
    pub fn new(shared_resources: Arc<SharedResources>) -> Self {
        Self { shared_resources }
    }

    pub fn normalize(&self, text: &str) -> Vec<String> {
        tokenize_light(text)
            .into_iter()
            .filter(|token| self.keep_token(token))
            .map(|token| self.shared_resources.stemmer.stem(&token))
            .collect()
    }

    fn keep_token(&self, token: &str) -> bool {
        self.shared_resources.negations.contains(token)
            || !self.shared_resources.stop_words.contains(token)
    }
}
