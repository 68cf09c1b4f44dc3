use serde::Serialize;
use std::collections::BTreeMap;

/// Display name → language or locale code, ordered by display name
pub type LanguageCatalog = BTreeMap<String, String>;

/// Response for GET /api/languages
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LanguageCatalogs<'a> {
    pub source_languages: &'a LanguageCatalog,
    pub target_languages: &'a LanguageCatalog,
}

/// Read-only access to the language tables
pub trait LanguageCatalogRepository: Send + Sync {
    /// Speech recognition locales, sorted by display name
    fn source_languages(&self) -> &LanguageCatalog;

    /// Translation target languages, sorted by display name
    fn target_languages(&self) -> &LanguageCatalog;

    /// Synthesis voice for a target language code
    fn voice_for(&self, language_code: &str) -> Option<String>;
}

/// Locale embedded in a voice name: its first two hyphen-separated segments.
///
/// `fr-FR-DeniseNeural` → `fr-FR`
pub fn voice_locale(voice_name: &str) -> String {
    voice_name.splitn(3, '-').take(2).collect::<Vec<_>>().join("-")
}
