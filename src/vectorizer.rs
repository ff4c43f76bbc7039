use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::path::Path;

use failure::{format_err, ResultExt};
use ndarray::prelude::*;

use crate::errors::*;
use crate::models::TfidfVectorizerModel;

/// Trained TF-IDF transformer: maps a normalized token sequence to a
/// fixed-dimensional, L2-normalized feature vector. Immutable after load.
#[derive(Debug)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf_diag: Vec<f32>,
    ngram_range: (usize, usize),
}

impl TfidfVectorizer {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let model_path = path.as_ref().join("vectorizer.json");
        let model_file = File::open(&model_path)
            .with_context(|_| format!("Cannot open TfidfVectorizer file '{:?}'", &model_path))?;
        let model: TfidfVectorizerModel = serde_json::from_reader(model_file)
            .with_context(|_| "Cannot deserialize TfidfVectorizer json data")?;
        Self::new(model)
    }

    pub fn new(model: TfidfVectorizerModel) -> Result<Self> {
        let vocabulary = model.vectorizer.vocab;
        let idf_diag = model.vectorizer.idf_diag;
        let ngram_range = model.config.ngram_range;

        if vocabulary.is_empty() {
            return Err(format_err!("TfidfVectorizer vocabulary is empty"));
        }
        let indices: HashSet<usize> = vocabulary.values().cloned().collect();
        if indices.len() != vocabulary.len()
            || indices.iter().max() != Some(&(vocabulary.len() - 1))
        {
            return Err(format_err!(
                "TfidfVectorizer vocabulary indices are not a dense 0..{} range",
                vocabulary.len()
            ));
        }
        if idf_diag.len() != vocabulary.len() {
            return Err(format_err!(
                "TfidfVectorizer has {} idf weights for {} vocabulary entries",
                idf_diag.len(),
                vocabulary.len()
            ));
        }
        let (min_n, max_n) = ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(format_err!("Invalid ngram range ({}, {})", min_n, max_n));
        }

        Ok(Self {
            vocabulary,
            idf_diag,
            ngram_range,
        })
    }

    /// Number of feature columns, baked in at training time.
    pub fn dimension(&self) -> usize {
        self.idf_diag.len()
    }

    /// N-grams absent from the trained vocabulary contribute nothing; a
    /// token sequence with no vocabulary match yields the zero vector.
    pub fn transform(&self, tokens: &[String]) -> Array1<f32> {
        let mut features: Vec<f32> = vec![0.; self.dimension()];
        let mut match_idx: HashSet<usize> = HashSet::new();
        let (min_n, max_n) = self.ngram_range;
        for n in min_n..=max_n {
            if n > tokens.len() {
                break;
            }
            for window in tokens.windows(n) {
                let ngram = window.join(" ");
                if let Some(ngram_idx) = self.vocabulary.get(&ngram) {
                    features[*ngram_idx] += 1.;
                    match_idx.insert(*ngram_idx);
                }
            }
        }

        for ix in match_idx {
            features[ix] *= self.idf_diag[ix]
        }

        let l2_norm: f32 = features.iter().fold(0., |norm, v| norm + v * v).sqrt();
        let safe_l2_norm = if l2_norm > 0. { l2_norm } else { 1. };
        Array::from_iter(features.into_iter().map(|c| c / safe_l2_norm))
    }
}
