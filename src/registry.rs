use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use failure::{bail, format_err, ResultExt};
use log::info;

use crate::classifier::MultinomialNaiveBayes;
use crate::errors::*;
use crate::models::HotelModel;
use crate::vectorizer::TfidfVectorizer;

/// A hotel identity together with its trained artifacts. Each profile
/// exclusively owns its vectorizer/classifier pair; vocabularies and class
/// statistics differ per training corpus, so artifacts are never shared
/// across hotels.
#[derive(Debug)]
pub struct HotelProfile {
    pub name: String,
    pub vectorizer: TfidfVectorizer,
    pub classifier: MultinomialNaiveBayes,
}

impl HotelProfile {
    pub fn new(
        name: String,
        vectorizer: TfidfVectorizer,
        classifier: MultinomialNaiveBayes,
    ) -> Result<Self> {
        if vectorizer.dimension() != classifier.nb_features() {
            return Err(format_err!(
                "Inconsistent artifacts for hotel '{}': vectorizer has {} columns, \
                 classifier expects {} features",
                name,
                vectorizer.dimension(),
                classifier.nb_features()
            ));
        }
        Ok(Self {
            name,
            vectorizer,
            classifier,
        })
    }
}

/// Seam for artifact storage, so profiles can be faked in tests without
/// touching real files.
pub trait ProfileLoader: Send + Sync {
    fn load(&self, hotel: &str) -> Result<HotelProfile>;
}

/// Per-hotel (vectorizer, classifier) pairs, loaded lazily on first request
/// and cached for the process lifetime. The cache lock is held across a
/// load, so concurrent requests for the same hotel trigger exactly one load.
/// A failed load is not cached: the hotel stays unusable until its artifacts
/// are fixed, while other hotels are unaffected.
pub struct HotelRegistry {
    known_hotels: HashSet<String>,
    loader: Box<dyn ProfileLoader>,
    profiles: Mutex<HashMap<String, Arc<HotelProfile>>>,
}

impl fmt::Debug for HotelRegistry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("HotelRegistry")
            .field("known_hotels", &self.known_hotels)
            .field("loader", &"<dyn ProfileLoader>")
            .field("profiles", &self.profiles)
            .finish()
    }
}

impl HotelRegistry {
    pub fn new<I>(known_hotels: I, loader: Box<dyn ProfileLoader>) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            known_hotels: known_hotels.into_iter().collect(),
            loader,
            profiles: Mutex::new(HashMap::new()),
        }
    }

    pub fn profile(&self, hotel: &str) -> Result<Arc<HotelProfile>> {
        if !self.known_hotels.contains(hotel) {
            bail!(SentimentError::UnknownHotel(hotel.to_string()));
        }
        let mut profiles = self
            .profiles
            .lock()
            .map_err(|_| format_err!("Hotel profile cache lock is poisoned"))?;
        if let Some(profile) = profiles.get(hotel) {
            return Ok(profile.clone());
        }
        info!("Loading profile for hotel '{}' ...", hotel);
        let profile = Arc::new(self.loader.load(hotel)?);
        profiles.insert(hotel.to_string(), profile.clone());
        info!("Profile for hotel '{}' loaded", hotel);
        Ok(profile)
    }
}

/// Loads artifacts from the engine directory layout: one sub-directory per
/// hotel holding `vectorizer.json` and `classifier.json`.
pub struct DirectoryProfileLoader {
    engine_dir: PathBuf,
    directories: HashMap<String, String>,
}

impl DirectoryProfileLoader {
    pub fn new(engine_dir: PathBuf, hotels: &[HotelModel]) -> Self {
        let directories = hotels
            .iter()
            .map(|hotel| (hotel.name.clone(), hotel.directory.clone()))
            .collect();
        Self {
            engine_dir,
            directories,
        }
    }
}

impl ProfileLoader for DirectoryProfileLoader {
    fn load(&self, hotel: &str) -> Result<HotelProfile> {
        let directory = self
            .directories
            .get(hotel)
            .ok_or_else(|| SentimentError::UnknownHotel(hotel.to_string()))?;
        let artifacts_dir = self.engine_dir.join(directory);
        let vectorizer = TfidfVectorizer::from_path(&artifacts_dir)
            .with_context(|_| SentimentError::ModelLoad(format!("{}/vectorizer", hotel)))?;
        let classifier = MultinomialNaiveBayes::from_path(&artifacts_dir)
            .with_context(|_| SentimentError::ModelLoad(format!("{}/classifier", hotel)))?;
        HotelProfile::new(hotel.to_string(), vectorizer, classifier)
            .with_context(|_| SentimentError::ModelLoad(hotel.to_string()))
            .map_err(::failure::Error::from)
    }
}
