use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use failure::ResultExt;
use log::info;
use serde_derive::Deserialize;

use crate::errors::*;
use crate::resources::stemmer::{read_stems, IndonesianStemmer};
use crate::resources::SharedResources;

#[derive(Debug, Deserialize, Clone)]
struct ResourcesMetadata {
    language: String,
    stop_words: Option<String>,
    negations: Option<String>,
    root_words: Option<String>,
    stems: Option<String>,
}

pub fn load_shared_resources<P: AsRef<Path>>(resources_dir: P) -> Result<Arc<SharedResources>> {
    let metadata_file_path = resources_dir.as_ref().join("metadata.json");
    let metadata_file = File::open(&metadata_file_path).with_context(|_| {
        format!(
            "Cannot open resources metadata file '{:?}'",
            metadata_file_path
        )
    })?;
    let metadata: ResourcesMetadata =
        serde_json::from_reader(metadata_file).with_context(|_| {
            format!(
                "Cannot deserialize resources metadata file '{:?}'",
                metadata_file_path
            )
        })?;
    let stop_words = load_word_list(&resources_dir, metadata.stop_words.as_ref(), "stop words")?;
    let negations = load_word_list(&resources_dir, metadata.negations.as_ref(), "negations")?;
    let root_words = load_word_list(&resources_dir, metadata.root_words.as_ref(), "root words")?;
    let stem_overrides = load_stem_overrides(&resources_dir, &metadata)?;
    let stemmer = IndonesianStemmer::new(root_words, stem_overrides);

    Ok(Arc::new(SharedResources {
        stop_words,
        negations,
        stemmer: Arc::new(stemmer),
    }))
}

fn load_word_list<P: AsRef<Path>>(
    resources_dir: &P,
    list_name: Option<&String>,
    description: &str,
) -> Result<HashSet<String>> {
    if let Some(name) = list_name {
        let list_path = resources_dir.as_ref().join(name).with_extension("txt");
        info!("Loading {} ({:?}) ...", description, list_path);
        let file = File::open(&list_path)
            .with_context(|_| format!("Cannot open {} file {:?}", description, list_path))?;
        let reader = BufReader::new(file);
        let mut words = HashSet::<String>::new();
        for line in reader.lines() {
            let word = line?;
            if !word.is_empty() {
                words.insert(word);
            }
        }
        info!("{} loaded", description);
        Ok(words)
    } else {
        Ok(HashSet::new())
    }
}

fn load_stem_overrides<P: AsRef<Path>>(
    resources_dir: &P,
    metadata: &ResourcesMetadata,
) -> Result<HashMap<String, String>> {
    if let Some(stems) = metadata.stems.as_ref() {
        let stems_path = resources_dir.as_ref().join(stems).with_extension("txt");
        info!("Loading stems ({:?}) ...", stems_path);
        let stems_reader = File::open(&stems_path)
            .with_context(|_| format!("Cannot open stems file {:?}", stems_path))?;
        let overrides = read_stems(stems_reader)
            .with_context(|_| format!("Cannot read stems file {:?}", stems_path))?;
        info!("Stems loaded");
        Ok(overrides)
    } else {
        Ok(HashMap::new())
    }
}
