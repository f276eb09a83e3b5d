//! Text cleaning applied to verses coming from the live APIs.
//!
//! Two independent passes:
//! - [`bismillah`]: strips the opening formula some sources prepend to the
//!   first verse of a chapter.
//! - [`translation`]: removes markup and footnote noise from translations.

pub mod bismillah;
pub mod translation;

pub use bismillah::{opening_verse_text, strip_bismillah, BISMILLAH_VARIANTS};
pub use translation::{clean_translation, TRANSLATION_PLACEHOLDER};
