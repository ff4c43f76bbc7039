pub mod loading;
pub mod stemmer;

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use self::stemmer::Stemmer;

/// Language resources shared by every hotel profile. Loaded once per engine
/// and treated as read-only afterwards.
pub struct SharedResources {
    pub stop_words: HashSet<String>,
    pub negations: HashSet<String>,
    pub stemmer: Arc<dyn Stemmer>,
}

impl fmt::Debug for SharedResources {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("SharedResources")
            .field("stop_words", &self.stop_words)
            .field("negations", &self.negations)
            .field("stemmer", &"<dyn Stemmer>")
            .finish()
    }
}
