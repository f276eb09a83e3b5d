use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::app::{Result, TilawahError};
use crate::domain::Verse;

/// A validated chapter number in `1..=114`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct ChapterNumber(u16);

impl ChapterNumber {
    pub const FIRST: u16 = 1;
    pub const LAST: u16 = 114;

    pub fn new(number: u16) -> Result<Self> {
        if (Self::FIRST..=Self::LAST).contains(&number) {
            Ok(Self(number))
        } else {
            Err(TilawahError::InvalidChapter(number))
        }
    }

    pub fn get(self) -> u16 {
        self.0
    }

    /// Every chapter number in canonical order.
    pub fn all() -> impl Iterator<Item = ChapterNumber> {
        (Self::FIRST..=Self::LAST).map(ChapterNumber)
    }
}

impl TryFrom<u16> for ChapterNumber {
    type Error = TilawahError;

    fn try_from(value: u16) -> Result<Self> {
        Self::new(value)
    }
}

impl From<ChapterNumber> for u16 {
    fn from(number: ChapterNumber) -> Self {
        number.0
    }
}

impl fmt::Display for ChapterNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Traditional place of revelation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RevelationPlace {
    Meccan,
    Medinan,
}

impl RevelationPlace {
    pub fn as_str(&self) -> &'static str {
        match self {
            RevelationPlace::Meccan => "Meccan",
            RevelationPlace::Medinan => "Medinan",
        }
    }
}

impl FromStr for RevelationPlace {
    type Err = TilawahError;

    /// Accepts both the English adjectives and the place names used by
    /// the upstream APIs ("makkah", "madinah").
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "meccan" | "makkah" | "mecca" => Ok(RevelationPlace::Meccan),
            "medinan" | "madinah" | "medina" => Ok(RevelationPlace::Medinan),
            other => Err(TilawahError::Malformed(format!(
                "unknown revelation place: {other}"
            ))),
        }
    }
}

impl fmt::Display for RevelationPlace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChapterSummary {
    pub number: ChapterNumber,
    /// Name in Arabic script
    pub name: String,
    /// Romanized name, e.g. "Al-Fatihah"
    pub english_name: String,
    /// Short translated gloss of the name
    pub name_translation: String,
    pub revelation: RevelationPlace,
    pub number_of_verses: u16,
}

/// A chapter with its verses in reading order.
///
/// Built fresh for every resolution and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    #[serde(flatten)]
    pub summary: ChapterSummary,
    pub verses: Vec<Verse>,
}

impl Chapter {
    /// Assemble a chapter, deriving the verse count from the verse list.
    pub fn new(mut summary: ChapterSummary, verses: Vec<Verse>) -> Self {
        summary.number_of_verses = verses.len() as u16;
        Self { summary, verses }
    }

    pub fn number(&self) -> ChapterNumber {
        self.summary.number
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }

    pub fn first_verse(&self) -> Option<&Verse> {
        self.verses.first()
    }

    pub fn display_title(&self) -> String {
        format!(
            "{}. {} ({}) - {}",
            self.summary.number,
            self.summary.english_name,
            self.summary.name,
            self.summary.name_translation
        )
    }
}
