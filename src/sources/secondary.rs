use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use crate::app::{Result, TilawahError};
use crate::config::{AudioConfig, SourceConfig};
use crate::domain::{Chapter, ChapterNumber, ChapterSummary, RevelationPlace, VerseStructure};
use crate::fetcher::{endpoint, fetch_json, Fetcher};
use crate::sources::{merge_verses, ChapterSource, RawVerse, SourceKind};

/// alquran.cloud wraps every payload in `{ "code", "status", "data" }`.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub data: T,
}

/// `GET /surah/{n}/{edition}` payload for the Arabic edition.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecondaryChapterRecord {
    pub number: u16,
    pub name: String,
    pub english_name: String,
    pub english_name_translation: String,
    pub revelation_type: String,
    pub ayahs: Vec<SecondaryVerseRecord>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecondaryVerseRecord {
    pub number: u32,
    pub text: String,
    pub juz: Option<u16>,
    pub page: Option<u16>,
    pub manzil: Option<u16>,
    pub ruku: Option<u16>,
    pub hizb_quarter: Option<u16>,
    pub sajda: Option<SajdaMarker>,
}

/// `false` for ordinary verses, an object for prostration verses.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SajdaMarker {
    Flag(bool),
    Detail { recommended: bool, obligatory: bool },
}

impl SajdaMarker {
    pub fn is_sajda(&self) -> bool {
        match self {
            SajdaMarker::Flag(flag) => *flag,
            SajdaMarker::Detail {
                recommended,
                obligatory,
            } => *recommended || *obligatory,
        }
    }
}

/// Text-only view of an edition, used for translation and transliteration.
#[derive(Debug, Deserialize)]
pub(crate) struct EditionFeed {
    pub ayahs: Vec<EditionVerse>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EditionVerse {
    pub text: String,
}

impl SecondaryChapterRecord {
    fn summary(&self, requested: ChapterNumber) -> Result<ChapterSummary> {
        let number = ChapterNumber::new(self.number)?;
        if number != requested {
            return Err(TilawahError::Malformed(format!(
                "asked for chapter {requested}, secondary source returned {number}"
            )));
        }

        Ok(ChapterSummary {
            number,
            name: self.name.clone(),
            english_name: self.english_name.clone(),
            name_translation: self.english_name_translation.clone(),
            revelation: self.revelation_type.parse::<RevelationPlace>()?,
            number_of_verses: 0,
        })
    }
}

impl SecondaryVerseRecord {
    fn into_raw(self, translation: Option<String>) -> RawVerse {
        RawVerse {
            id: self.number,
            text: self.text,
            translation,
            structure: Some(VerseStructure {
                juz: self.juz,
                page: self.page,
                manzil: self.manzil,
                ruku: self.ruku,
                hizb_quarter: self.hizb_quarter,
                sajda: self.sajda.as_ref().map(SajdaMarker::is_sajda),
            }),
        }
    }
}

pub(crate) fn edition_url(
    sources: &SourceConfig,
    number: ChapterNumber,
    edition: &str,
) -> Result<Url> {
    endpoint(
        &sources.secondary_base_url,
        &format!("surah/{number}/{edition}"),
    )
}

/// Fetch the transliteration feed for a chapter.
///
/// The feed is optional for both live sources: any failure yields an empty
/// list so verses get empty transliterations.
pub(crate) async fn fetch_transliteration(
    fetcher: &(dyn Fetcher + Send + Sync),
    sources: &SourceConfig,
    number: ChapterNumber,
) -> Vec<String> {
    match try_fetch_transliteration(fetcher, sources, number).await {
        Ok(lines) => lines,
        Err(e) => {
            tracing::warn!("Transliteration unavailable for chapter {}: {}", number, e);
            Vec::new()
        }
    }
}

async fn try_fetch_transliteration(
    fetcher: &(dyn Fetcher + Send + Sync),
    sources: &SourceConfig,
    number: ChapterNumber,
) -> Result<Vec<String>> {
    let url = edition_url(sources, number, &sources.transliteration_edition)?;
    let feed = fetch_json::<Envelope<EditionFeed>>(fetcher, &url).await?;
    Ok(feed.data.ayahs.into_iter().map(|a| a.text).collect())
}

/// Arabic, translation and transliteration editions from alquran.cloud.
pub struct SecondarySource {
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    sources: SourceConfig,
    audio: AudioConfig,
}

impl SecondarySource {
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
}

#[async_trait]
impl ChapterSource for SecondarySource {
    fn kind(&self) -> SourceKind {
        SourceKind::Secondary
    }

    async fn fetch_chapter(&self, number: ChapterNumber) -> Result<Chapter> {
        let fetcher = self.fetcher.as_ref();
        let arabic_url = edition_url(&self.sources, number, &self.sources.arabic_edition)?;
        let translation_url =
            edition_url(&self.sources, number, &self.sources.translation_edition)?;

        let (arabic, translation, transliteration) = tokio::join!(
            fetch_json::<Envelope<SecondaryChapterRecord>>(fetcher, &arabic_url),
            fetch_json::<Envelope<EditionFeed>>(fetcher, &translation_url),
            fetch_transliteration(fetcher, &self.sources, number),
        );
        let arabic = arabic?.data;
        let translation = translation?.data;
        tracing::debug!(
            "Secondary source: {} verses, {} translations, {} transliterations for chapter {}",
            arabic.ayahs.len(),
            translation.ayahs.len(),
            transliteration.len(),
            number
        );

        let summary = arabic.summary(number)?;

        let mut translations = translation.ayahs.into_iter().map(|a| a.text);
        let raw = arabic
            .ayahs
            .into_iter()
            .map(|verse| verse.into_raw(translations.next()))
            .collect();
        let verses = merge_verses(number, raw, &transliteration, &self.audio);

        Ok(Chapter::new(summary, verses))
    }
}
