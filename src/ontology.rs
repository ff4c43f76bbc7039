use std::fmt;

use serde_derive::{Deserialize, Serialize};

/// All sentiment classes, in their canonical order. Ties during
/// classification are broken by this order.
pub const SENTIMENTS: [Sentiment; 3] = [
    Sentiment::Negative,
    Sentiment::Neutral,
    Sentiment::Positive,
];

/// Trained artifacts produced from Indonesian review corpora carry the
/// Indonesian class names, hence the aliases.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Sentiment {
    #[serde(alias = "Negatif", alias = "negatif", alias = "negative")]
    Negative,
    #[serde(alias = "Netral", alias = "netral", alias = "neutral")]
    Neutral,
    #[serde(alias = "Positif", alias = "positif", alias = "positive")]
    Positive,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Sentiment::Negative => write!(f, "Negative"),
            Sentiment::Neutral => write!(f, "Neutral"),
            Sentiment::Positive => write!(f, "Positive"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentScore {
    pub sentiment: Sentiment,
    pub probability: f32,
}

/// Outcome of a single inference call. Transient, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentResult {
    pub sentiment: Sentiment,
    pub scores: Vec<SentimentScore>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentiment_deserializes_from_indonesian_labels() {
        // Given
        let labels = r#"["Negatif", "Netral", "Positif"]"#;

        // When
        let sentiments: Vec<Sentiment> = serde_json::from_str(labels).unwrap();

        // Then
        assert_eq!(sentiments, SENTIMENTS.to_vec());
    }

    #[test]
    fn sentiment_order_is_canonical() {
        assert!(Sentiment::Negative < Sentiment::Neutral);
        assert!(Sentiment::Neutral < Sentiment::Positive);
    }
}
