//! The chapter list and its search filter.

use std::sync::Arc;

use serde::Deserialize;

use crate::app::{Result, TilawahError};
use crate::config::SourceConfig;
use crate::domain::{ChapterNumber, ChapterSummary, RevelationPlace};
use crate::fetcher::{endpoint, fetch_json, Fetcher};
use crate::sources::StaticFallback;

#[derive(Debug, Deserialize)]
struct ListEnvelope {
    data: Vec<ListRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListRecord {
    number: u16,
    name: String,
    english_name: String,
    english_name_translation: String,
    revelation_type: String,
    number_of_ayahs: u16,
}

impl TryFrom<ListRecord> for ChapterSummary {
    type Error = TilawahError;

    fn try_from(record: ListRecord) -> Result<Self> {
        Ok(ChapterSummary {
            number: ChapterNumber::new(record.number)?,
            name: record.name,
            english_name: record.english_name,
            name_translation: record.english_name_translation,
            revelation: record.revelation_type.parse()?,
            number_of_verses: record.number_of_ayahs,
        })
    }
}

/// Narrows the chapter list by search term and revelation place.
#[derive(Debug, Clone, Default)]
pub struct ChapterFilter {
    pub search: Option<String>,
    pub revelation: Option<RevelationPlace>,
}

impl ChapterFilter {
    /// Romanized name and gloss match case-insensitively; the Arabic name
    /// matches with diacritics ignored on both sides.
    pub fn matches(&self, summary: &ChapterSummary) -> bool {
        let matches_search = match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(term) => {
                let needle = term.to_lowercase();
                summary.english_name.to_lowercase().contains(&needle)
                    || fold_arabic(&summary.name).contains(&fold_arabic(term))
                    || summary.name_translation.to_lowercase().contains(&needle)
            }
        };

        let matches_revelation = self
            .revelation
            .is_none_or(|place| summary.revelation == place);

        matches_search && matches_revelation
    }

    pub fn apply(&self, summaries: Vec<ChapterSummary>) -> Vec<ChapterSummary> {
        summaries.into_iter().filter(|s| self.matches(s)).collect()
    }
}

/// Drops harakat and Quranic annotation marks and writes alef wasla as a
/// plain alef, so "البقرة" finds "سُورَةُ البَقَرَةِ".
fn fold_arabic(text: &str) -> String {
    text.chars()
        .filter_map(|c| match c {
            '\u{064B}'..='\u{065F}' | '\u{0670}' | '\u{06D6}'..='\u{06ED}' => None,
            '\u{0671}' => Some('\u{0627}'),
            c => Some(c),
        })
        .collect()
}

pub struct ChapterCatalog {
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    sources: SourceConfig,
}

impl ChapterCatalog {
    pub fn new(fetcher: Arc<dyn Fetcher + Send + Sync>, sources: SourceConfig) -> Self {
        Self { fetcher, sources }
    }

    /// All chapter summaries, or the embedded few when the list can't be
    /// fetched.
    pub async fn list(&self) -> Vec<ChapterSummary> {
        match self.fetch_list().await {
            Ok(summaries) if !summaries.is_empty() => summaries,
            Ok(_) => {
                tracing::warn!("Chapter list was empty, using static summaries");
                StaticFallback::summaries()
            }
            Err(e) => {
                tracing::warn!("Failed to fetch chapter list: {}", e);
                StaticFallback::summaries()
            }
        }
    }

    async fn fetch_list(&self) -> Result<Vec<ChapterSummary>> {
        let url = endpoint(&self.sources.secondary_base_url, "surah")?;
        let envelope: ListEnvelope = fetch_json(self.fetcher.as_ref(), &url).await?;

        envelope
            .data
            .into_iter()
            .map(ChapterSummary::try_from)
            .collect()
    }
}
