use std::fs::File;
use std::path::Path;

use failure::{format_err, ResultExt};
use itertools::Itertools;
use ndarray::prelude::*;

use crate::errors::*;
use crate::models::NaiveBayesModel;
use crate::ontology::Sentiment;

/// Multinomial Naive Bayes over TF-IDF features. The per-class score is
/// `log(prior) + features . feature_log_prob[class]`; probabilities are the
/// softmax of these joint log-likelihoods.
#[derive(Debug)]
pub struct MultinomialNaiveBayes {
    classes: Vec<Sentiment>,
    log_prior: Array1<f32>,
    /// matrix with shape (c, f)
    /// ------------------------
    ///
    /// - c = number of classes
    /// - f = number of features
    feature_log_prob: Array2<f32>,
}

impl MultinomialNaiveBayes {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let model_path = path.as_ref().join("classifier.json");
        let model_file = File::open(&model_path).with_context(|_| {
            format!(
                "Cannot open MultinomialNaiveBayes file '{:?}'",
                &model_path
            )
        })?;
        let model: NaiveBayesModel = serde_json::from_reader(model_file)
            .with_context(|_| "Cannot deserialize MultinomialNaiveBayes json data")?;
        Self::new(model)
    }

    pub fn new(model: NaiveBayesModel) -> Result<Self> {
        let nb_classes = model.classes.len();
        if nb_classes != 3 || model.classes.iter().unique().count() != nb_classes {
            return Err(format_err!(
                "Expected the three distinct sentiment classes, found {:?}",
                model.classes
            ));
        }
        if model.class_log_prior.len() != nb_classes {
            return Err(format_err!(
                "Found {} class priors for {} classes",
                model.class_log_prior.len(),
                nb_classes
            ));
        }
        if model.feature_log_prob.len() != nb_classes {
            return Err(format_err!(
                "Found {} feature log-likelihood rows for {} classes",
                model.feature_log_prob.len(),
                nb_classes
            ));
        }
        let nb_features = model.feature_log_prob[0].len();
        if model
            .feature_log_prob
            .iter()
            .any(|row| row.len() != nb_features)
        {
            return Err(format_err!(
                "Feature log-likelihood rows have inconsistent lengths"
            ));
        }

        let feature_log_prob =
            Array::from_shape_fn((nb_classes, nb_features), |(i, j)| {
                model.feature_log_prob[i][j]
            });
        let log_prior = Array::from_vec(model.class_log_prior);

        Ok(Self {
            classes: model.classes,
            log_prior,
            feature_log_prob,
        })
    }

    pub fn nb_features(&self) -> usize {
        self.feature_log_prob.dim().1
    }

    pub fn classes(&self) -> &[Sentiment] {
        &self.classes
    }

    /// Softmax-normalized class probabilities. A zero feature vector
    /// degrades to the class priors.
    pub fn run(&self, features: &ArrayView1<f32>) -> Result<Array1<f32>> {
        if features.dim() != self.nb_features() {
            return Err(format_err!(
                "Expected {} features, got {}",
                self.nb_features(),
                features.dim()
            ));
        }
        let mut joint_log_likelihood = self.feature_log_prob.dot(features) + &self.log_prior;
        let max = joint_log_likelihood
            .iter()
            .fold(::std::f32::NEG_INFINITY, |max, v| max.max(*v));
        joint_log_likelihood.mapv_inplace(|jll| (jll - max).exp());
        let total = joint_log_likelihood.sum();
        Ok(joint_log_likelihood / total)
    }

    /// Arg-max label with ties broken by the canonical class order, so that
    /// repeated calls are reproducible.
    pub fn classify(&self, features: &ArrayView1<f32>) -> Result<(Sentiment, Array1<f32>)> {
        let probabilities = self.run(features)?;
        let mut best = 0;
        for (ix, probability) in probabilities.iter().enumerate().skip(1) {
            if *probability > probabilities[best]
                || (*probability == probabilities[best] && self.classes[ix] < self.classes[best])
            {
                best = ix;
            }
        }
        Ok((self.classes[best], probabilities))
    }
}
