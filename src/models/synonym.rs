//! Synonym sets.

use serde::{Deserialize, Serialize};

/// A synonym record, tagged by its `type` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Synonym {
    /// Multi-way synonyms: every listed term matches every other.
    #[serde(rename = "synonym")]
    MultiWay {
        /// Unique identifier of the synonym set.
        #[serde(rename = "objectID")]
        object_id: String,
        /// The interchangeable terms.
        synonyms: Vec<String>,
    },
    /// One-way synonym: `input` additionally matches `synonyms`.
    #[serde(rename = "oneWaySynonym")]
    OneWay {
        /// Unique identifier of the synonym set.
        #[serde(rename = "objectID")]
        object_id: String,
        /// The term being expanded.
        input: String,
        /// Terms the input expands to.
        synonyms: Vec<String>,
    },
    /// Alternative correction counted as one typo.
    #[serde(rename = "altCorrection1")]
    AltCorrection1 {
        /// Unique identifier of the synonym set.
        #[serde(rename = "objectID")]
        object_id: String,
        /// The word being corrected.
        word: String,
        /// Accepted corrections.
        corrections: Vec<String>,
    },
    /// Alternative correction counted as two typos.
    #[serde(rename = "altCorrection2")]
    AltCorrection2 {
        /// Unique identifier of the synonym set.
        #[serde(rename = "objectID")]
        object_id: String,
        /// The word being corrected.
        word: String,
        /// Accepted corrections.
        corrections: Vec<String>,
    },
    /// Placeholder expansion for token patterns.
    #[serde(rename = "placeholder")]
    Placeholder {
        /// Unique identifier of the synonym set.
        #[serde(rename = "objectID")]
        object_id: String,
        /// The placeholder token (e.g. `<streetnumber>`).
        placeholder: String,
        /// Values the placeholder stands for.
        replacements: Vec<String>,
    },
}

impl Synonym {
    /// Returns the synonym's object ID.
    #[must_use]
    pub fn object_id(&self) -> &str {
        match self {
            Self::MultiWay { object_id, .. }
            | Self::OneWay { object_id, .. }
            | Self::AltCorrection1 { object_id, .. }
            | Self::AltCorrection2 { object_id, .. }
            | Self::Placeholder { object_id, .. } => object_id,
        }
    }
}

/// Response of a synonym search.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSynonymsRes {
    /// Matching synonym sets.
    #[serde(default)]
    pub hits: Vec<Synonym>,
    /// Total number of matches.
    #[serde(default)]
    pub nb_hits: u64,
}
