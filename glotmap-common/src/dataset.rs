//! Static dataset model
//!
//! The viewer consumes a fixed, pre-generated dataset: one record per
//! language (position and display name), a concept index, and per-concept
//! form/audio mappings. Deserialization is plain serde; the generator is
//! trusted and nothing here validates the data.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Result;

/// Reference to a playable audio resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioRef {
    /// Resource name, resolved by the audio backend (e.g. a file stem)
    pub resource: String,
    /// Media type of the resource (e.g. "audio/mpeg")
    pub media_type: String,
}

/// One language: a display name and a map position
///
/// `audio` is the language-level clip used in unfiltered (index) mode;
/// concept-specific clips live in [`Dataset::forms`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageRecord {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub audio: Option<AudioRef>,
}

/// One elicited form of a concept in a language
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormRecord {
    pub form: String,
    #[serde(default)]
    pub audio: Option<AudioRef>,
}

/// The full pre-generated dataset
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    /// Concept id -> gloss, for the filter selector
    #[serde(default)]
    pub concepts: BTreeMap<String, String>,

    /// All languages, keyed order preserved by the generator
    #[serde(default)]
    pub languages: Vec<LanguageRecord>,

    /// Concept id -> language id -> form record
    #[serde(default)]
    pub forms: BTreeMap<String, BTreeMap<String, FormRecord>>,
}

impl Dataset {
    /// Load a dataset from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// The forms recorded for one concept, if any
    pub fn forms_for(&self, concept: &str) -> Option<&BTreeMap<String, FormRecord>> {
        self.forms.get(concept)
    }
}
