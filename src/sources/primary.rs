use std::sync::Arc;

use async_trait::async_trait;
use html_escape::decode_html_entities;
use serde::Deserialize;
use url::Url;

use crate::app::{Result, TilawahError};
use crate::config::{AudioConfig, SourceConfig};
use crate::domain::{Chapter, ChapterNumber, ChapterSummary, RevelationPlace, VerseStructure};
use crate::fetcher::{endpoint, fetch_json, Fetcher};
use crate::sources::secondary::fetch_transliteration;
use crate::sources::{merge_verses, ChapterSource, RawVerse, SourceKind};

#[derive(Debug, Deserialize)]
struct ChapterEnvelope {
    chapter: PrimaryChapterRecord,
}

/// `GET /chapters/{n}` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct PrimaryChapterRecord {
    pub id: u16,
    pub name_arabic: String,
    pub name_simple: String,
    pub translated_name: TranslatedName,
    pub revelation_place: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranslatedName {
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct VersesEnvelope {
    verses: Vec<PrimaryVerseRecord>,
}

/// One entry of `GET /verses/by_chapter/{n}`.
#[derive(Debug, Clone, Deserialize)]
pub struct PrimaryVerseRecord {
    pub id: u32,
    pub text_uthmani: String,
    pub juz_number: Option<u16>,
    pub page_number: Option<u16>,
    #[serde(default)]
    pub translations: Vec<PrimaryTranslationRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PrimaryTranslationRecord {
    pub text: String,
}

impl From<PrimaryVerseRecord> for RawVerse {
    fn from(record: PrimaryVerseRecord) -> Self {
        RawVerse {
            id: record.id,
            text: record.text_uthmani,
            translation: record.translations.into_iter().next().map(|t| t.text),
            structure: Some(VerseStructure {
                juz: record.juz_number,
                page: record.page_number,
                ..VerseStructure::default()
            }),
        }
    }
}

impl PrimaryChapterRecord {
    fn into_summary(self, requested: ChapterNumber) -> Result<ChapterSummary> {
        let number = ChapterNumber::new(self.id)?;
        if number != requested {
            return Err(TilawahError::Malformed(format!(
                "asked for chapter {requested}, primary source returned {number}"
            )));
        }

        Ok(ChapterSummary {
            number,
            name: self.name_arabic,
            english_name: decode_html_entities(&self.name_simple).to_string(),
            name_translation: decode_html_entities(&self.translated_name.name).to_string(),
            revelation: self.revelation_place.parse::<RevelationPlace>()?,
            number_of_verses: 0,
        })
    }
}

/// quran.com v4 verses with the alquran.cloud transliteration feed.
pub struct PrimarySource {
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    sources: SourceConfig,
    audio: AudioConfig,
}

impl PrimarySource {
    pub fn new(
        fetcher: Arc<dyn Fetcher + Send + Sync>,
        sources: SourceConfig,
        audio: AudioConfig,
    ) -> Self {
        Self {
            fetcher,
            sources,
            audio,
        }
    }

    fn chapter_url(&self, number: ChapterNumber) -> Result<Url> {
        endpoint(&self.sources.primary_base_url, &format!("chapters/{number}"))
    }

    fn verses_url(&self, number: ChapterNumber) -> Result<Url> {
        let mut url = endpoint(
            &self.sources.primary_base_url,
            &format!("verses/by_chapter/{number}"),
        )?;
        url.query_pairs_mut()
            .append_pair("language", &self.sources.translation_language)
            .append_pair("fields", "text_uthmani")
            .append_pair("translations", &self.sources.translation_id.to_string())
            .append_pair("per_page", &self.sources.verses_per_page.to_string());
        Ok(url)
    }
}

#[async_trait]
impl ChapterSource for PrimarySource {
    fn kind(&self) -> SourceKind {
        SourceKind::Primary
    }

    async fn fetch_chapter(&self, number: ChapterNumber) -> Result<Chapter> {
        let fetcher = self.fetcher.as_ref();

        let envelope: ChapterEnvelope = fetch_json(fetcher, &self.chapter_url(number)?).await?;
        let summary = envelope.chapter.into_summary(number)?;

        let verses_url = self.verses_url(number)?;
        let (verses, transliteration) = tokio::join!(
            fetch_json::<VersesEnvelope>(fetcher, &verses_url),
            fetch_transliteration(fetcher, &self.sources, number),
        );
        let verses = verses?.verses;
        tracing::debug!(
            "Primary source: {} verses, {} transliterations for chapter {}",
            verses.len(),
            transliteration.len(),
            number
        );

        let raw = verses.into_iter().map(RawVerse::from).collect();
        let verses = merge_verses(number, raw, &transliteration, &self.audio);

        Ok(Chapter::new(summary, verses))
    }
}
