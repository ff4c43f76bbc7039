use serde_derive::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ModelVersion {
    pub model_version: String,
}

/// Top-level engine configuration: one entry per supported hotel, plus the
/// shared language resources. Deserialization failing on a missing field is
/// the intended startup validation.
#[derive(Debug, Deserialize)]
pub struct EngineModel {
    pub model_version: String,
    pub language_code: String,
    pub resources: String,
    #[serde(default)]
    pub influential_words: Option<String>,
    pub hotels: Vec<HotelModel>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HotelModel {
    pub name: String,
    pub directory: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub review_distribution: Option<ReviewDistribution>,
}

/// Display-only corpus statistics carried along with a hotel entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReviewDistribution {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}
