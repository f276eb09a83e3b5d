//! Chapter resolution across the source chain.
//!
//! Sources are tried in a fixed order and the first usable chapter wins:
//!
//! ```text
//! PrimarySource → SecondarySource → StaticFallback
//! ```
//!
//! A chapter is usable when it has at least one verse. Results are never
//! merged across sources, and a failing source is not retried.

use std::sync::Arc;

use serde::Serialize;

use crate::app::Result;
use crate::config::Config;
use crate::domain::{Chapter, ChapterNumber};
use crate::fetcher::Fetcher;
use crate::sources::{ChapterSource, PrimarySource, SecondarySource, SourceKind, StaticFallback};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "snake_case")]
pub enum AttemptOutcome {
    Served,
    /// The source answered but with no verses
    Empty,
    Failed(String),
    /// Static data has nothing for this number
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceAttempt {
    pub source: SourceKind,
    pub outcome: AttemptOutcome,
}

/// A resolved chapter together with the sources consulted on the way.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub chapter: Option<Chapter>,
    pub attempts: Vec<SourceAttempt>,
}

impl Resolution {
    /// The source that produced the chapter, if any.
    pub fn served_by(&self) -> Option<SourceKind> {
        self.attempts
            .iter()
            .find(|a| a.outcome == AttemptOutcome::Served)
            .map(|a| a.source)
    }
}

pub struct ChapterResolver {
    sources: Vec<Arc<dyn ChapterSource + Send + Sync>>,
    fallback: StaticFallback,
}

impl ChapterResolver {
    /// Live sources are consulted in the order given, then `fallback`.
    pub fn new(sources: Vec<Arc<dyn ChapterSource + Send + Sync>>, fallback: StaticFallback) -> Self {
        Self { sources, fallback }
    }

    /// The standard chain: primary, secondary, static.
    pub fn from_config(fetcher: Arc<dyn Fetcher + Send + Sync>, config: &Config) -> Self {
        let primary = PrimarySource::new(fetcher.clone(), config.sources.clone(), config.audio.clone());
        let secondary = SecondarySource::new(fetcher, config.sources.clone(), config.audio.clone());

        let sources: Vec<Arc<dyn ChapterSource + Send + Sync>> = vec![
            Arc::new(primary) as Arc<dyn ChapterSource + Send + Sync>,
            Arc::new(secondary),
        ];

        Self::new(sources, StaticFallback::new(config.audio.clone()))
    }

    /// Resolve a chapter, returning `Ok(None)` when nothing can serve it.
    ///
    /// Numbers outside `1..=114` are rejected before any request is made.
    pub async fn resolve(&self, number: u16) -> Result<Option<Chapter>> {
        Ok(self.resolve_traced(number).await?.chapter)
    }

    /// Like [`resolve`](Self::resolve), also reporting every source attempt.
    pub async fn resolve_traced(&self, number: u16) -> Result<Resolution> {
        let number = ChapterNumber::new(number)?;
        let mut attempts = Vec::new();

        for source in &self.sources {
            let kind = source.kind();
            let outcome = match source.fetch_chapter(number).await {
                Ok(chapter) if !chapter.is_empty() => {
                    tracing::info!("Chapter {} served by {} source", number, kind);
                    attempts.push(SourceAttempt {
                        source: kind,
                        outcome: AttemptOutcome::Served,
                    });
                    return Ok(Resolution {
                        chapter: Some(chapter),
                        attempts,
                    });
                }
                Ok(_) => {
                    tracing::warn!("{} source returned no verses for chapter {}", kind, number);
                    AttemptOutcome::Empty
                }
                Err(e) => {
                    tracing::warn!("{} source failed for chapter {}: {}", kind, number, e);
                    AttemptOutcome::Failed(e.to_string())
                }
            };
            attempts.push(SourceAttempt {
                source: kind,
                outcome,
            });
        }

        let chapter = self.fallback.chapter(number.get());
        let outcome = if chapter.is_some() {
            tracing::info!("Chapter {} served from static data", number);
            AttemptOutcome::Served
        } else {
            AttemptOutcome::NotFound
        };
        attempts.push(SourceAttempt {
            source: SourceKind::Static,
            outcome,
        });

        Ok(Resolution { chapter, attempts })
    }
}
