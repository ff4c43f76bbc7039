use std::collections::HashMap;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use failure::{bail, ResultExt};

use crate::errors::*;
use crate::models::{EngineModel, HotelModel, ModelVersion, ReviewExamples, WordExamples};
use crate::normalizer::Normalizer;
use crate::ontology::{Sentiment, SentimentResult, SentimentScore};
use crate::registry::{DirectoryProfileLoader, HotelRegistry, ProfileLoader};
use crate::resources::loading::load_shared_resources;
use crate::resources::SharedResources;

/// Inference front door: validates the input, resolves the hotel profile
/// through the registry and runs normalization, vectorization and
/// classification in sequence. The pipeline itself is hotel-agnostic; only
/// the learned statistics differ per hotel.
#[derive(Debug)]
pub struct SentimentEngine {
    hotels: Vec<HotelModel>,
    normalizer: Normalizer,
    registry: HotelRegistry,
    review_examples: ReviewExamples,
}

impl SentimentEngine {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let model = SentimentEngine::load_model(&path)?;

        let resources_path = path.as_ref().join(&model.resources);
        let shared_resources = load_shared_resources(&resources_path)?;

        let review_examples = if let Some(examples_name) = model.influential_words.as_ref() {
            let examples_path = path.as_ref().join(examples_name);
            let examples_file = File::open(&examples_path).with_context(|_| {
                format!("Cannot open influential words file {:?}", examples_path)
            })?;
            ReviewExamples::from_reader(examples_file).with_context(|_| {
                format!("Cannot deserialize influential words file {:?}", examples_path)
            })?
        } else {
            ReviewExamples::default()
        };

        let loader =
            DirectoryProfileLoader::new(path.as_ref().to_path_buf(), &model.hotels);
        Ok(Self::from_parts(
            model.hotels,
            shared_resources,
            Box::new(loader),
        )
        .with_review_examples(review_examples))
    }

    /// Assembles an engine from preloaded parts. The loader seam is what
    /// test code uses to run against fake artifacts.
    pub fn from_parts(
        hotels: Vec<HotelModel>,
        shared_resources: Arc<SharedResources>,
        loader: Box<dyn ProfileLoader>,
    ) -> Self {
        let known_hotels = hotels.iter().map(|hotel| hotel.name.clone());
        let registry = HotelRegistry::new(known_hotels, loader);
        Self {
            hotels,
            normalizer: Normalizer::new(shared_resources),
            registry,
            review_examples: ReviewExamples::default(),
        }
    }

    pub fn with_review_examples(mut self, review_examples: ReviewExamples) -> Self {
        self.review_examples = review_examples;
        self
    }

    fn check_model_version<P: AsRef<Path>>(path: P) -> Result<()> {
        let model_file = File::open(&path)?;
        let model_version: ModelVersion = serde_json::from_reader(model_file)?;
        if model_version.model_version != crate::MODEL_VERSION {
            bail!(SentimentError::WrongModelVersion(
                model_version.model_version,
                crate::MODEL_VERSION
            ));
        }
        Ok(())
    }

    fn load_model<P: AsRef<Path>>(path: P) -> Result<EngineModel> {
        let engine_model_path = path.as_ref().join("engine.json");
        Self::check_model_version(&engine_model_path).with_context(|_| {
            SentimentError::ModelLoad(engine_model_path.to_string_lossy().to_string())
        })?;
        let model_file = File::open(&engine_model_path)
            .with_context(|_| format!("Could not open engine file {:?}", &engine_model_path))?;
        let model = serde_json::from_reader(model_file)
            .with_context(|_| format!("Invalid engine file {:?}", &engine_model_path))?;
        Ok(model)
    }
}

impl SentimentEngine {
    pub fn predict(&self, hotel: &str, text: &str) -> Result<SentimentResult> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            bail!(SentimentError::InvalidInput(
                "review text is empty".to_string()
            ));
        }

        let profile = self.registry.profile(hotel)?;
        let tokens = self.normalizer.normalize(trimmed);
        let features = profile.vectorizer.transform(&tokens);
        let (sentiment, probabilities) = profile.classifier.classify(&features.view())?;

        let scores = profile
            .classifier
            .classes()
            .iter()
            .zip(probabilities.iter())
            .map(|(class, probability)| SentimentScore {
                sentiment: *class,
                probability: *probability,
            })
            .collect();

        Ok(SentimentResult { sentiment, scores })
    }

    /// Configured hotels, in declaration order.
    pub fn hotels(&self) -> &[HotelModel] {
        &self.hotels
    }

    /// Display-only influential words with example reviews for a hotel.
    pub fn review_examples(&self, hotel: &str) -> Option<&HashMap<Sentiment, WordExamples>> {
        self.review_examples.for_hotel(hotel)
    }
}
