mod classifier;
mod engine;
pub mod errors;
mod models;
mod normalizer;
mod ontology;
mod registry;
mod resources;
#[cfg(test)]
mod testutils;
mod vectorizer;

pub const MODEL_VERSION: &str = "0.1.0";

pub use crate::classifier::MultinomialNaiveBayes;
pub use crate::engine::SentimentEngine;
pub use crate::errors::*;
pub use crate::models::*;
pub use crate::normalizer::{tokenize_light, Normalizer};
pub use crate::ontology::{Sentiment, SentimentResult, SentimentScore, SENTIMENTS};
pub use crate::registry::{
    DirectoryProfileLoader, HotelProfile, HotelRegistry, ProfileLoader,
};
pub use crate::resources::loading::load_shared_resources;
pub use crate::resources::stemmer::{HashMapStemmer, IndonesianStemmer, Stemmer};
pub use crate::resources::SharedResources;
pub use crate::vectorizer::TfidfVectorizer;
