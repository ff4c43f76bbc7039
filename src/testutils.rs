use std::collections::{HashMap, HashSet};
use std::iter::FromIterator;
use std::path::PathBuf;
use std::sync::Arc;

use maplit::hashmap;
use ndarray::prelude::*;

use crate::classifier::MultinomialNaiveBayes;
use crate::errors::SentimentError;
use crate::models::{
    NaiveBayesModel, SklearnVectorizerModel, TfidfVectorizerConfiguration, TfidfVectorizerModel,
};
use crate::ontology::SENTIMENTS;
use crate::resources::stemmer::{HashMapStemmer, Stemmer};
use crate::resources::SharedResources;
use crate::vectorizer::TfidfVectorizer;

pub fn file_path(filename: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join(filename)
}

pub fn assert_epsilon_eq_array1(a: &Array1<f32>, b: &Array1<f32>, epsilon: f32) {
    assert_eq!(a.dim(), b.dim());
    for (index, elem_a) in a.indexed_iter() {
        assert!(epsilon_eq(*elem_a, b[index], epsilon))
    }
}

pub fn epsilon_eq(a: f32, b: f32, epsilon: f32) -> bool {
    let diff = a - b;
    diff < epsilon && diff > -epsilon
}

/// Root-most crate error in a failure chain, unwrapping contexts.
pub fn find_sentiment_error(error: &failure::Error) -> Option<&SentimentError> {
    error
        .iter_chain()
        .filter_map(|fail| {
            fail.downcast_ref::<SentimentError>().or_else(|| {
                fail.downcast_ref::<failure::Context<SentimentError>>()
                    .map(|context| context.get_context())
            })
        })
        .last()
}

pub struct SharedResourcesBuilder {
    stop_words: HashSet<String>,
    negations: HashSet<String>,
    stemmer: Arc<dyn Stemmer>,
}

impl Default for SharedResourcesBuilder {
    fn default() -> Self {
        Self {
            stop_words: HashSet::default(),
            negations: HashSet::default(),
            stemmer: Arc::new(HashMapStemmer::from_iter(vec![])),
        }
    }
}

impl SharedResourcesBuilder {
    pub fn stop_words(mut self, stop_words: HashSet<String>) -> Self {
        self.stop_words = stop_words;
        self
    }

    pub fn negations(mut self, negations: HashSet<String>) -> Self {
        self.negations = negations;
        self
    }

    pub fn stems(mut self, stems: HashMap<String, String>) -> Self {
        self.stemmer = Arc::new(HashMapStemmer::from_iter(stems));
        self
    }

    pub fn build(self) -> SharedResources {
        SharedResources {
            stop_words: self.stop_words,
            negations: self.negations,
            stemmer: self.stemmer,
        }
    }
}

pub fn sample_vectorizer_model() -> TfidfVectorizerModel {
    let vocab = hashmap![
        "bagus".to_string() => 0,
        "bau".to_string() => 1,
        "bersih".to_string() => 2,
        "kamar".to_string() => 3,
        "kamar bersih".to_string() => 4,
        "kotor".to_string() => 5,
        "kurang".to_string() => 6,
        "kurang bersih".to_string() => 7,
        "nyaman".to_string() => 8,
        "ramah".to_string() => 9,
    ];
    let idf_diag = vec![2.1, 3.4, 1.3, 1.5, 2.8, 3.2, 2.4, 3.6, 1.8, 2.0];
    TfidfVectorizerModel {
        language_code: "id".to_string(),
        vectorizer: SklearnVectorizerModel { idf_diag, vocab },
        config: TfidfVectorizerConfiguration { ngram_range: (1, 2) },
    }
}

pub fn sample_vectorizer() -> TfidfVectorizer {
    TfidfVectorizer::new(sample_vectorizer_model()).unwrap()
}

pub fn sample_classifier_model() -> NaiveBayesModel {
    NaiveBayesModel {
        classes: SENTIMENTS.to_vec(),
        class_log_prior: vec![-2.33450683, -2.56650518, -0.19075689],
        feature_log_prob: vec![
            vec![-4.1, -2.6, -3.9, -2.2, -4.5, -2.4, -2.1, -2.9, -4.0, -4.2],
            vec![-3.2, -4.4, -3.0, -2.1, -3.8, -4.1, -2.5, -4.3, -3.3, -3.4],
            vec![-2.7, -4.9, -1.9, -1.8, -3.1, -4.7, -3.5, -5.0, -2.0, -2.3],
        ],
    }
}

pub fn sample_classifier() -> MultinomialNaiveBayes {
    MultinomialNaiveBayes::new(sample_classifier_model()).unwrap()
}
