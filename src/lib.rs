//! # Tilawah
//!
//! A terminal Quran reader with prayer times.
//!
//! ## Architecture
//!
//! Chapters are resolved through a fixed chain of sources:
//!
//! ```text
//! PrimarySource → SecondarySource → StaticFallback
//!        └──────────┬──────┘
//!               Normalizer
//! ```
//!
//! - [`sources`]: API adapters and the embedded fallback data
//! - [`normalizer`]: Opening-formula and translation cleaning
//! - [`resolver`]: Walks the chain and records each attempt
//!
//! ## Quick Start
//!
//! ```bash
//! # Read Al-Fatihah
//! tilawah read 1
//!
//! # Find a chapter
//! tilawah list --search baqarah
//!
//! # Prayer times
//! tilawah prayer --city Bandung
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together the fetcher,
/// resolver, catalog and prayer client.
pub mod app;

/// The chapter list with search and revelation filters.
pub mod catalog;

/// Command-line interface using clap.
///
/// - `read <number>` - Print a chapter
/// - `list` - List chapters
/// - `prayer` - Show prayer times
/// - `probe` - Check API reachability
pub mod cli;

/// Configuration loaded from `~/.config/tilawah/config.toml`.
pub mod config;

/// Core domain models.
///
/// - [`Chapter`](domain::Chapter) and [`ChapterSummary`](domain::ChapterSummary)
/// - [`Verse`](domain::Verse) with its [`VerseStructure`](domain::VerseStructure)
/// - [`PrayerSchedule`](domain::PrayerSchedule)
pub mod domain;

/// HTTP fetching.
///
/// - [`Fetcher`](fetcher::Fetcher): Async trait for GET requests
/// - [`HttpFetcher`](fetcher::HttpFetcher): reqwest-based implementation
pub mod fetcher;

/// Text cleaning applied to every live source.
///
/// - [`opening_verse_text`](normalizer::opening_verse_text): Strips the opening formula from a first verse
/// - [`clean_translation`](normalizer::clean_translation): Removes markup and footnote markers
pub mod normalizer;

/// Prayer timings by city.
pub mod prayer;

/// Chapter resolution across the source chain.
///
/// [`ChapterResolver`](resolver::ChapterResolver) returns the first usable
/// chapter together with every [`SourceAttempt`](resolver::SourceAttempt).
pub mod resolver;

/// Chapter sources.
///
/// - [`PrimarySource`](sources::PrimarySource): quran.com v4
/// - [`SecondarySource`](sources::SecondarySource): alquran.cloud editions
/// - [`StaticFallback`](sources::StaticFallback): Embedded data
pub mod sources;
