//! Chapter sources, in the order the resolver consults them.
//!
//! - [`PrimarySource`]: quran.com v4 verses plus the alquran.cloud
//!   transliteration feed
//! - [`SecondarySource`]: three alquran.cloud edition feeds
//! - [`StaticFallback`]: embedded data used when both APIs fail
//!
//! Both live sources parse responses into their own wire records and merge
//! them into [`Verse`]s through [`merge_verses`], so cleaning and audio URLs
//! are identical whichever source answered.

mod fallback;
#[cfg(test)]
pub(crate) mod fixtures;
mod primary;
mod probe;
mod secondary;

pub use fallback::StaticFallback;
pub use primary::{PrimaryChapterRecord, PrimarySource, PrimaryVerseRecord};
pub use probe::{probe, SourceHealth};
pub use secondary::{SecondaryChapterRecord, SecondarySource, SecondaryVerseRecord};

use std::fmt;

use async_trait::async_trait;
use serde::Serialize;

use crate::app::Result;
use crate::config::AudioConfig;
use crate::domain::{Chapter, ChapterNumber, Verse, VerseStructure};
use crate::normalizer::{clean_translation, opening_verse_text};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Primary,
    Secondary,
    Static,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SourceKind::Primary => "primary",
            SourceKind::Secondary => "secondary",
            SourceKind::Static => "static",
        };
        f.write_str(name)
    }
}

/// A live origin for chapter data.
///
/// Any error means the source could not produce a usable chapter; the
/// resolver moves on to the next one.
#[async_trait]
pub trait ChapterSource {
    fn kind(&self) -> SourceKind;

    async fn fetch_chapter(&self, number: ChapterNumber) -> Result<Chapter>;
}

/// Source-independent view of one verse before cleaning.
#[derive(Debug, Clone)]
pub(crate) struct RawVerse {
    pub id: u32,
    pub text: String,
    pub translation: Option<String>,
    pub structure: Option<VerseStructure>,
}

/// Merge raw verses with the transliteration feed by position.
///
/// Feed index `i` becomes verse `i + 1`. Only the first verse goes through
/// the opening-formula strip; every translation is cleaned. Missing
/// transliterations become empty strings.
pub(crate) fn merge_verses(
    chapter: ChapterNumber,
    raw: Vec<RawVerse>,
    transliteration: &[String],
    audio: &AudioConfig,
) -> Vec<Verse> {
    raw.into_iter()
        .enumerate()
        .map(|(index, verse)| {
            let number_in_chapter = (index + 1) as u16;
            let text = if index == 0 {
                opening_verse_text(chapter.get(), &verse.text).to_string()
            } else {
                verse.text
            };

            Verse {
                id: verse.id,
                number_in_chapter,
                text,
                translation: clean_translation(verse.translation.as_deref()),
                transliteration: transliteration.get(index).cloned().unwrap_or_default(),
                structure: verse.structure.filter(|s| !s.is_empty()),
                audio_url: audio.verse_url(chapter.get(), number_in_chapter),
            }
        })
        .collect()
}
