//! Map points built from dataset entries
//!
//! Points are created fresh on every `MapView::build` and never mutated
//! afterwards. Construction has two modes matching the dataset: unfiltered
//! (one point per language, language-level audio) and filtered by concept
//! (one point per recorded form, form-level audio).

use glotmap_common::dataset::{AudioRef, FormRecord, LanguageRecord};
use glotmap_common::LatLng;

/// Stable identifier of a point within the current point set
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PointId(String);

impl PointId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PointId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One displayable location, with an optional playable clip
#[derive(Debug, Clone)]
pub struct Point {
    pub id: PointId,
    pub position: LatLng,
    /// Tooltip label: the language name, or the form text in filtered mode
    pub label: String,
    /// Detail view (popup) content
    pub detail_text: String,
    pub audio: Option<AudioRef>,
}

impl Point {
    /// Unfiltered (index) mode: the point stands for the language itself
    pub fn from_language(lang: &LanguageRecord) -> Self {
        Self {
            id: PointId::new(&lang.id),
            position: LatLng::new(lang.latitude, lang.longitude),
            label: lang.name.clone(),
            detail_text: format!("<b>{}</b>", lang.name),
            audio: lang.audio.clone(),
        }
    }

    /// Filtered mode: the point stands for one form of the selected concept
    pub fn from_form(lang: &LanguageRecord, form: &FormRecord) -> Self {
        Self {
            id: PointId::new(&lang.id),
            position: LatLng::new(lang.latitude, lang.longitude),
            label: form.form.clone(),
            detail_text: format!("<b>{}:</b> {}", lang.name, form.form),
            audio: form.audio.clone(),
        }
    }

    pub fn has_audio(&self) -> bool {
        self.audio.is_some()
    }
}
