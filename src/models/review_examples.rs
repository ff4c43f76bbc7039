use std::collections::HashMap;
use std::io::Read;

use serde_derive::Deserialize;

use crate::errors::*;
use crate::ontology::Sentiment;

/// Example review quoted for an influential word, as collected from the
/// review platforms.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReviewExample {
    pub review: String,
    #[serde(default)]
    pub reviewer: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub rating: Option<String>,
}

pub type WordExamples = HashMap<String, ReviewExample>;

/// Static hotel -> sentiment -> influential word -> example review mapping.
/// Display-only: it never influences the classification decision.
#[derive(Debug, Default, Deserialize)]
pub struct ReviewExamples(HashMap<String, HashMap<Sentiment, WordExamples>>);

impl ReviewExamples {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn for_hotel(&self, hotel: &str) -> Option<&HashMap<Sentiment, WordExamples>> {
        self.0.get(hotel)
    }
}
