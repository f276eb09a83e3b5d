use serde::{Deserialize, Serialize};

/// Endpoints and editions for the two Quran content APIs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Verse-oriented API tried first (quran.com v4)
    pub primary_base_url: String,

    /// Edition-oriented API tried second (alquran.cloud v1); also serves
    /// the transliteration feed and the chapter list
    pub secondary_base_url: String,

    /// Translation resource id on the primary API (134 = Indonesian)
    pub translation_id: u32,

    /// Language code sent with primary verse requests
    pub translation_language: String,

    /// Secondary API edition for Arabic text
    pub arabic_edition: String,

    /// Secondary API edition for the translation
    pub translation_edition: String,

    /// Secondary API edition for the transliteration
    pub transliteration_edition: String,

    /// Page size for the primary verse request; must exceed the longest
    /// chapter (286 verses) so one page holds every verse
    pub verses_per_page: u16,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            primary_base_url: "https://api.quran.com/api/v4".to_string(),
            secondary_base_url: "https://api.alquran.cloud/v1".to_string(),
            translation_id: 134,
            translation_language: "id".to_string(),
            arabic_edition: "quran-uthmani".to_string(),
            translation_edition: "id.indonesian".to_string(),
            transliteration_edition: "en.transliteration".to_string(),
            verses_per_page: 300,
        }
    }
}
