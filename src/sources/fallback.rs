use crate::config::AudioConfig;
use crate::domain::{Chapter, ChapterNumber, ChapterSummary, RevelationPlace, Verse, VerseStructure};

/// Chapters revealed in Medina; every other chapter is Meccan.
const MEDINAN_CHAPTERS: [u16; 28] = [
    2, 3, 4, 5, 8, 9, 13, 22, 24, 33, 47, 48, 49, 55, 57, 58, 59, 60, 61, 62, 63, 64, 65, 66, 76,
    98, 99, 110,
];

const PLACEHOLDER_TEXT: &str = "النص العربي غير متوفر حاليا";
const PLACEHOLDER_TRANSLATION: &str = "Terjemahan tidak tersedia saat ini. Silakan coba lagi nanti.";
const PLACEHOLDER_TRANSLITERATION: &str = "Arabic text not available currently";
const PLACEHOLDER_VERSES: u16 = 3;

/// (arabic, transliteration, translation)
const AL_FATIHAH: [(&str, &str, &str); 7] = [
    (
        "بِسْمِ اللَّهِ الرَّحْمَٰنِ الرَّحِيمِ",
        "Bismillahir rahmanir raheem",
        "Dengan nama Allah Yang Maha Pengasih, Maha Penyayang.",
    ),
    (
        "الْحَمْدُ لِلَّهِ رَبِّ الْعَالَمِينَ",
        "Alhamdulillahi rabbil alameen",
        "Segala puji bagi Allah, Tuhan seluruh alam.",
    ),
    (
        "الرَّحْمَٰنِ الرَّحِيمِ",
        "Ar rahmanir raheem",
        "Yang Maha Pengasih, Maha Penyayang.",
    ),
    (
        "مَالِكِ يَوْمِ الدِّينِ",
        "Maliki yawmid deen",
        "Pemilik hari pembalasan.",
    ),
    (
        "إِيَّاكَ نَعْبُدُ وَإِيَّاكَ نَسْتَعِينُ",
        "Iyyaka na'budu wa iyyaka nasta'een",
        "Hanya kepada Engkaulah kami menyembah dan hanya kepada Engkaulah kami mohon pertolongan.",
    ),
    (
        "اهْدِنَا الصِّرَاطَ الْمُسْتَقِيمَ",
        "Ihdinash shiratal mustaqeem",
        "Tunjukilah kami jalan yang lurus.",
    ),
    (
        "صِرَاطَ الَّذِينَ أَنْعَمْتَ عَلَيْهِمْ غَيْرِ الْمَغْضُوبِ عَلَيْهِمْ وَلَا الضَّالِّينَ",
        "Shiratal lazeena an'amta alaihim ghairil maghdoobi alaihim wa lad daalleen",
        "(yaitu) jalan orang-orang yang telah Engkau beri nikmat kepadanya; bukan (jalan) mereka yang dimurkai, dan bukan (pula jalan) mereka yang sesat.",
    ),
];

const AL_BAQARAH_OPENING: [(&str, &str, &str); 3] = [
    ("الم", "Alif Lam Mim", "Alif Lam Mim."),
    (
        "ذَٰلِكَ الْكِتَابُ لَا رَيْبَ ۛ فِيهِ ۛ هُدًى لِّلْمُتَّقِينَ",
        "Zalikal kitabu la raiba fih; hudan lil muttaqin",
        "Kitab (Al-Quran) ini tidak ada keraguan di dalamnya; petunjuk bagi orang-orang yang bertakwa.",
    ),
    (
        "الَّذِينَ يُؤْمِنُونَ بِالْغَيْبِ وَيُقِيمُونَ الصَّلَاةَ وَمِمَّا رَزَقْنَاهُمْ يُنفِقُونَ",
        "Allazeena yu'minoona bil ghaibi wa yuqeemoonas salaata wa mimma razaqnaahum yunfiqoon",
        "(yaitu) mereka yang beriman kepada yang gaib, yang mendirikan shalat, dan menafkahkan sebahagian rezeki yang Kami anugerahkan kepada mereka.",
    ),
];

/// Embedded chapter data for when every live source is down.
///
/// Al-Fatihah and the opening of Al-Baqarah are hand-authored; any other
/// valid chapter gets placeholder verses so the reader still has audio.
#[derive(Debug, Clone, Default)]
pub struct StaticFallback {
    audio: AudioConfig,
}

impl StaticFallback {
    pub fn new(audio: AudioConfig) -> Self {
        Self { audio }
    }

    /// Summaries with real metadata, used when the chapter list is
    /// unavailable.
    pub fn summaries() -> Vec<ChapterSummary> {
        [
            (1, "الفاتحة", "Al-Fatihah", "Pembuka", 7),
            (2, "البقرة", "Al-Baqarah", "Sapi Betina", 286),
            (36, "يس", "Ya-Sin", "Ya Sin", 83),
        ]
        .into_iter()
        .filter_map(|(number, name, english, translation, verses)| {
            Some(ChapterSummary {
                number: ChapterNumber::new(number).ok()?,
                name: name.to_string(),
                english_name: english.to_string(),
                name_translation: translation.to_string(),
                revelation: revelation_of(number),
                number_of_verses: verses,
            })
        })
        .collect()
    }

    /// `None` only for numbers outside `1..=114`.
    pub fn chapter(&self, number: u16) -> Option<Chapter> {
        let number = ChapterNumber::new(number).ok()?;
        let summary = Self::summaries()
            .into_iter()
            .find(|s| s.number == number)
            .unwrap_or_else(|| generic_summary(number));

        let verses = match number.get() {
            1 => self.authored(number, 1, 1, &AL_FATIHAH),
            2 => self.authored(number, 8, 2, &AL_BAQARAH_OPENING),
            _ => self.placeholders(number, summary.number_of_verses),
        };

        Some(Chapter::new(summary, verses))
    }

    fn authored(
        &self,
        chapter: ChapterNumber,
        first_id: u32,
        page: u16,
        verses: &[(&str, &str, &str)],
    ) -> Vec<Verse> {
        verses
            .iter()
            .zip(1u16..)
            .map(|(&(text, transliteration, translation), position)| Verse {
                id: first_id + u32::from(position) - 1,
                number_in_chapter: position,
                text: text.to_string(),
                translation: translation.to_string(),
                transliteration: transliteration.to_string(),
                structure: Some(VerseStructure {
                    juz: Some(1),
                    page: Some(page),
                    ..VerseStructure::default()
                }),
                audio_url: self.audio.verse_url(chapter.get(), position),
            })
            .collect()
    }

    fn placeholders(&self, chapter: ChapterNumber, declared: u16) -> Vec<Verse> {
        (1..=declared.min(PLACEHOLDER_VERSES))
            .map(|position| Verse {
                id: u32::from(position),
                number_in_chapter: position,
                text: PLACEHOLDER_TEXT.to_string(),
                translation: PLACEHOLDER_TRANSLATION.to_string(),
                transliteration: PLACEHOLDER_TRANSLITERATION.to_string(),
                structure: None,
                audio_url: self.audio.verse_url(chapter.get(), position),
            })
            .collect()
    }
}

fn revelation_of(number: u16) -> RevelationPlace {
    if MEDINAN_CHAPTERS.contains(&number) {
        RevelationPlace::Medinan
    } else {
        RevelationPlace::Meccan
    }
}

fn generic_summary(number: ChapterNumber) -> ChapterSummary {
    ChapterSummary {
        number,
        name: "سورة".to_string(),
        english_name: format!("Surah {number}"),
        name_translation: "Tidak tersedia".to_string(),
        revelation: revelation_of(number.get()),
        number_of_verses: PLACEHOLDER_VERSES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatihah_is_fully_authored() {
        let chapter = StaticFallback::default().chapter(1).unwrap();

        assert_eq!(chapter.summary.english_name, "Al-Fatihah");
        assert_eq!(chapter.summary.number_of_verses, 7);
        assert_eq!(chapter.verses.len(), 7);
        assert_eq!(
            chapter.verses[0].translation,
            "Dengan nama Allah Yang Maha Pengasih, Maha Penyayang."
        );
        assert_eq!(chapter.verses[0].text, "بِسْمِ اللَّهِ الرَّحْمَٰنِ الرَّحِيمِ");
        assert_eq!(
            chapter.verses[6].audio_url,
            "https://everyayah.com/data/Alafasy_128kbps/001007.mp3"
        );
    }

    #[test]
    fn test_baqarah_opening_uses_global_ids() {
        let chapter = StaticFallback::default().chapter(2).unwrap();

        assert_eq!(chapter.summary.revelation, RevelationPlace::Medinan);
        assert_eq!(chapter.verses.len(), 3);
        assert_eq!(chapter.summary.number_of_verses, 3);
        assert_eq!(chapter.verses[0].text, "الم");
        assert_eq!(chapter.verses[0].id, 8);
        assert_eq!(chapter.verses[2].id, 10);
        assert_eq!(chapter.verses[2].number_in_chapter, 3);
    }

    #[test]
    fn test_known_summary_gets_placeholders() {
        let chapter = StaticFallback::default().chapter(36).unwrap();

        assert_eq!(chapter.summary.english_name, "Ya-Sin");
        assert_eq!(chapter.verses.len(), 3);
        assert_eq!(chapter.verses[0].translation, PLACEHOLDER_TRANSLATION);
        assert_eq!(
            chapter.verses[2].audio_url,
            "https://everyayah.com/data/Alafasy_128kbps/036003.mp3"
        );
    }

    #[test]
    fn test_other_chapters_are_synthesized() {
        let chapter = StaticFallback::default().chapter(110).unwrap();

        assert_eq!(chapter.summary.english_name, "Surah 110");
        assert_eq!(chapter.summary.revelation, RevelationPlace::Medinan);
        assert_eq!(chapter.verses.len(), 3);
        let positions: Vec<u16> = chapter.verses.iter().map(|v| v.number_in_chapter).collect();
        assert_eq!(positions, vec![1, 2, 3]);
    }

    #[test]
    fn test_out_of_range_is_none() {
        let fallback = StaticFallback::default();
        assert!(fallback.chapter(0).is_none());
        assert!(fallback.chapter(115).is_none());
        assert!(fallback.chapter(200).is_none());
    }

    #[test]
    fn test_every_valid_chapter_resolves() {
        let fallback = StaticFallback::default();
        for number in ChapterNumber::all() {
            let chapter = fallback.chapter(number.get()).unwrap();
            assert!(!chapter.verses.is_empty());
            assert_eq!(chapter.summary.number_of_verses as usize, chapter.verses.len());
        }
    }

    #[test]
    fn test_static_summaries() {
        let summaries = StaticFallback::summaries();
        assert_eq!(summaries.len(), 3);
        assert_eq!(summaries[1].number_of_verses, 286);
        assert_eq!(summaries[2].revelation, RevelationPlace::Meccan);
    }
}
