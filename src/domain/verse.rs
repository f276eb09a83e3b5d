use serde::{Deserialize, Serialize};

/// Structural position of a verse within the mushaf.
///
/// The primary source only reports juz and page; the secondary source also
/// carries the remaining divisions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseStructure {
    pub juz: Option<u16>,
    pub page: Option<u16>,
    pub manzil: Option<u16>,
    pub ruku: Option<u16>,
    pub hizb_quarter: Option<u16>,
    pub sajda: Option<bool>,
}

impl VerseStructure {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verse {
    /// Global verse id across the whole corpus
    pub id: u32,
    /// 1-based position within the chapter
    pub number_in_chapter: u16,
    pub text: String,
    pub translation: String,
    /// Romanized reading, empty when the feed was unavailable
    pub transliteration: String,
    pub structure: Option<VerseStructure>,
    pub audio_url: String,
}

impl Verse {
    pub fn has_transliteration(&self) -> bool {
        !self.transliteration.is_empty()
    }
}
