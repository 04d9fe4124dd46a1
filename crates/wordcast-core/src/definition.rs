//! Normalized dictionary definition entries.

use serde::{Deserialize, Serialize};

/// One normalized entry from a dictionary lookup.
///
/// A headword usually maps to several entries, one per part of speech
/// (e.g. "run" as a verb and as a noun).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionEntry {
    /// Part-of-speech tag, e.g. "noun".
    pub figure_of_speech: String,

    /// Short definitions, in the provider's order.
    pub meanings: Vec<String>,

    /// Usage phrases, when the provider supplies any.
    #[serde(default)]
    pub examples: Vec<String>,
}

impl DefinitionEntry {
    /// Create an entry with no usage examples.
    #[must_use]
    pub fn new(figure_of_speech: impl Into<String>, meanings: Vec<String>) -> Self {
        Self {
            figure_of_speech: figure_of_speech.into(),
            meanings,
            examples: Vec::new(),
        }
    }
}
