use std::collections::{HashMap, HashSet};
use std::io::Read;
use std::iter::FromIterator;

use crate::errors::*;

pub trait Stemmer: Send + Sync {
    fn stem(&self, value: &str) -> String;
}

/// Reads a stems lexicon in the `root,form1,form2,...` CSV format, one root
/// per record.
pub fn read_stems<R: Read>(reader: R) -> Result<HashMap<String, String>> {
    let mut values = HashMap::<String, String>::new();
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .quoting(false)
        .flexible(true)
        .has_headers(false)
        .from_reader(reader);

    for record in csv_reader.records() {
        let elements = record?;
        let stem = &elements[0];
        for value in elements.iter().skip(1) {
            values.insert(value.to_string(), stem.to_string());
        }
    }
    Ok(values)
}

pub struct HashMapStemmer {
    values: HashMap<String, String>,
}

impl HashMapStemmer {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(Self {
            values: read_stems(reader)?,
        })
    }
}

impl FromIterator<(String, String)> for HashMapStemmer {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            values: HashMap::from_iter(iter),
        }
    }
}

impl Stemmer for HashMapStemmer {
    fn stem(&self, value: &str) -> String {
        self.values
            .get(value)
            .map(|v| v.to_string())
            .unwrap_or_else(|| value.to_string())
    }
}

const PARTICLES: &[&str] = &["lah", "kah", "tah", "pun"];
const POSSESSIVES: &[&str] = &["nya", "ku", "mu"];
const DERIVATIONAL_SUFFIXES: &[&str] = &["kan", "an", "i"];

// A stripped candidate shorter than this cannot be an Indonesian root.
const MIN_STEM_LEN: usize = 2;

/// Affix-stripping stemmer for Indonesian, checked against a root-word
/// dictionary: a stripped form is only accepted once it lands on a known
/// root, otherwise the input is returned unchanged. Every possible output is
/// therefore a fixed point of `stem`, which makes stemming idempotent.
///
/// The `overrides` lexicon maps irregular or colloquial forms straight to
/// their canonical root and is consulted before any stripping.
pub struct IndonesianStemmer {
    root_words: HashSet<String>,
    overrides: HashMap<String, String>,
}

impl IndonesianStemmer {
    pub fn new(root_words: HashSet<String>, overrides: HashMap<String, String>) -> Self {
        Self {
            root_words,
            overrides,
        }
    }

    fn strip_prefixes(&self, word: &str) -> Option<String> {
        // Indonesian words carry at most three derivational prefixes.
        let mut forms = vec![word.to_string()];
        for _ in 0..3 {
            let mut next_forms = Vec::new();
            for form in &forms {
                for derived in prefix_derivations(form) {
                    if self.root_words.contains(&derived) {
                        return Some(derived);
                    }
                    next_forms.push(derived);
                }
            }
            if next_forms.is_empty() {
                return None;
            }
            forms = next_forms;
        }
        None
    }
}

impl Stemmer for IndonesianStemmer {
    fn stem(&self, value: &str) -> String {
        if let Some(root) = self.overrides.get(value) {
            return root.clone();
        }
        if self.root_words.contains(value) {
            return value.to_string();
        }

        // Suffixes come off before prefixes: particle, then possessive, then
        // derivational suffix.
        let mut candidates = vec![value.to_string()];
        let mut current = value.to_string();
        for suffix_family in &[PARTICLES, POSSESSIVES, DERIVATIONAL_SUFFIXES] {
            if let Some(stripped) = strip_one_of(&current, suffix_family) {
                if self.root_words.contains(&stripped) {
                    return stripped;
                }
                current = stripped;
                candidates.push(current.clone());
            }
        }

        // Prefix stripping, attempted on the most suffix-stripped form first
        // and falling back to the raw word (some suffixes are part of the
        // root, e.g. "bervariasi" -> "variasi").
        for candidate in candidates.iter().rev() {
            if let Some(root) = self.strip_prefixes(candidate) {
                return root;
            }
        }

        value.to_string()
    }
}

fn strip_one_of(word: &str, suffixes: &[&str]) -> Option<String> {
    for suffix in suffixes {
        if word.len() >= suffix.len() + MIN_STEM_LEN && word.ends_with(suffix) {
            return Some(word[..word.len() - suffix.len()].to_string());
        }
    }
    None
}

/// Candidate de-prefixed forms of `word`, from the first matching prefix
/// family. Nasal prefixes produce both the bare remainder and the
/// sound-recovered form (e.g. "meny-" assimilates an "s").
fn prefix_derivations(word: &str) -> Vec<String> {
    let rules: &[(&str, &[&str])] = &[
        ("meny", &["", "s"]),
        ("meng", &["", "k", "g"]),
        ("mem", &["", "p"]),
        ("men", &["", "t", "n"]),
        ("me", &[""]),
        ("peny", &["", "s"]),
        ("peng", &["", "k", "g"]),
        ("pem", &["", "p"]),
        ("pen", &["", "t", "n"]),
        ("per", &[""]),
        ("pe", &[""]),
        ("ber", &[""]),
        ("bel", &[""]),
        ("ter", &[""]),
        ("di", &[""]),
        ("ke", &[""]),
        ("se", &[""]),
    ];
    for (prefix, recodings) in rules {
        if word.len() >= prefix.len() + MIN_STEM_LEN && word.starts_with(prefix) {
            let remainder = &word[prefix.len()..];
            return recodings
                .iter()
                .map(|recoding| format!("{}{}", recoding, remainder))
                .collect();
        }
    }
    vec![]
}

#[cfg(test)]
mod tests {
    use std::iter::FromIterator;

    use maplit::{hashmap, hashset};

    use super::*;

    fn sample_stemmer() -> IndonesianStemmer {
        let root_words = hashset![
            "ajar".to_string(),
            "baik".to_string(),
            "bantu".to_string(),
            "bersih".to_string(),
            "inap".to_string(),
            "kamar".to_string(),
            "layan".to_string(),
            "makan".to_string(),
            "nyaman".to_string(),
            "sarapan".to_string(),
            "variasi".to_string(),
        ];
        let overrides = hashmap![
            "tdk".to_string() => "tidak".to_string(),
            "gak".to_string() => "tidak".to_string(),
        ];
        IndonesianStemmer::new(root_words, overrides)
    }

    #[test]
    fn hashmap_stemmer_works() {
        // Given
        let stems: &[u8] = r#"
layan,layanan,pelayanan,melayani
bersih,bersihnya,kebersihan"#
            .as_ref();

        // When
        let stemmer = HashMapStemmer::from_reader(stems);

        // Then
        assert!(stemmer.is_ok());
        let stemmer = stemmer.unwrap();
        assert_eq!(stemmer.stem("pelayanan"), "layan".to_string());
        assert_eq!(stemmer.stem("kebersihan"), "bersih".to_string());
        assert_eq!(stemmer.stem("unknown"), "unknown".to_string());
    }

    #[test]
    fn indonesian_stemmer_strips_affixes() {
        // Given
        let stemmer = sample_stemmer();

        // When / Then
        assert_eq!(stemmer.stem("kamarnya"), "kamar".to_string());
        assert_eq!(stemmer.stem("sarapannya"), "sarapan".to_string());
        assert_eq!(stemmer.stem("makanan"), "makan".to_string());
        assert_eq!(stemmer.stem("bervariasi"), "variasi".to_string());
        assert_eq!(stemmer.stem("membantu"), "bantu".to_string());
        assert_eq!(stemmer.stem("menginap"), "inap".to_string());
        assert_eq!(stemmer.stem("terbaik"), "baik".to_string());
        assert_eq!(stemmer.stem("belajar"), "ajar".to_string());
        // confix: pe- + layan + -an + -nya
        assert_eq!(stemmer.stem("pelayanannya"), "layan".to_string());
    }

    #[test]
    fn indonesian_stemmer_applies_overrides() {
        // Given
        let stemmer = sample_stemmer();

        // When / Then
        assert_eq!(stemmer.stem("tdk"), "tidak".to_string());
        assert_eq!(stemmer.stem("gak"), "tidak".to_string());
    }

    #[test]
    fn indonesian_stemmer_keeps_unknown_words() {
        // Given
        let stemmer = sample_stemmer();

        // When / Then
        assert_eq!(stemmer.stem("wifi"), "wifi".to_string());
        assert_eq!(stemmer.stem("oyo"), "oyo".to_string());
    }

    #[test]
    fn indonesian_stemming_is_idempotent() {
        // Given
        let stemmer = sample_stemmer();
        let words = vec![
            "kamarnya",
            "pelayanannya",
            "bervariasi",
            "makanan",
            // "layanan" strips to a root that itself ends with "-an"
            "layanan",
            "menginap",
            "tdk",
            "wifi",
            "sarapan",
        ];

        // When / Then
        for word in words {
            let once = stemmer.stem(word);
            let twice = stemmer.stem(&once);
            assert_eq!(once, twice, "stemming '{}' is not idempotent", word);
        }
    }

    #[test]
    fn hashmap_stemmer_from_iter_works() {
        // Given
        let stemmer = HashMapStemmer::from_iter(vec![(
            "bagusnya".to_string(),
            "bagus".to_string(),
        )]);

        // When / Then
        assert_eq!(stemmer.stem("bagusnya"), "bagus".to_string());
        assert_eq!(stemmer.stem("bagus"), "bagus".to_string());
    }
}
