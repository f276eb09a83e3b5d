pub mod chapter;
pub mod prayer;
pub mod verse;

pub use chapter::{Chapter, ChapterNumber, ChapterSummary, RevelationPlace};
pub use prayer::{Prayer, PrayerSchedule, UpcomingPrayer};
pub use verse::{Verse, VerseStructure};
