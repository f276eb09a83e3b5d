//! Canned API payloads for source and resolver tests.

use serde_json::{json, Value};

use crate::config::SourceConfig;
use crate::fetcher::mock::MockFetcher;

pub const PRIMARY_BASE: &str = "http://primary.test/api/v4";
pub const SECONDARY_BASE: &str = "http://secondary.test/v1";

pub fn source_config() -> SourceConfig {
    SourceConfig {
        primary_base_url: PRIMARY_BASE.to_string(),
        secondary_base_url: SECONDARY_BASE.to_string(),
        ..SourceConfig::default()
    }
}

fn primary_names(number: u16) -> (&'static str, &'static str, &'static str, &'static str) {
    match number {
        1 => ("الفاتحة", "Al-Fatihah", "The Opener", "makkah"),
        2 => ("البقرة", "Al-Baqarah", "The Cow", "madinah"),
        112 => ("الإخلاص", "Al-Ikhlas", "Sincerity", "makkah"),
        _ => ("سورة", "Surah", "Chapter", "makkah"),
    }
}

pub fn primary_chapter_json(number: u16) -> Value {
    let (arabic, simple, translated, place) = primary_names(number);
    json!({
        "chapter": {
            "id": number,
            "revelation_place": place,
            "revelation_order": 1,
            "bismillah_pre": number != 1 && number != 9,
            "name_simple": simple,
            "name_complex": simple,
            "name_arabic": arabic,
            "verses_count": 0,
            "pages": [1, 1],
            "translated_name": { "language_name": "english", "name": translated }
        }
    })
}

/// Register chapter metadata and verses `(id, arabic, translation)`.
pub fn with_primary(fetcher: MockFetcher, number: u16, verses: &[(u32, &str, &str)]) -> MockFetcher {
    let verses: Vec<Value> = verses
        .iter()
        .enumerate()
        .map(|(index, (id, text, translation))| {
            json!({
                "id": id,
                "verse_number": index + 1,
                "verse_key": format!("{}:{}", number, index + 1),
                "text_uthmani": text,
                "juz_number": 30,
                "page_number": 604,
                "translations": [{ "id": 1, "resource_id": 134, "text": translation }]
            })
        })
        .collect();

    fetcher
        .with_json(
            &format!("primary.test/api/v4/chapters/{number}"),
            primary_chapter_json(number),
        )
        .with_json(
            &format!("primary.test/api/v4/verses/by_chapter/{number}"),
            json!({ "verses": verses, "pagination": { "per_page": 300, "current_page": 1 } }),
        )
}

pub fn secondary_edition_json(texts: &[&str]) -> Value {
    let ayahs: Vec<Value> = texts
        .iter()
        .enumerate()
        .map(|(index, text)| json!({ "number": index + 1, "text": text, "numberInSurah": index + 1 }))
        .collect();
    json!({ "code": 200, "status": "OK", "data": { "ayahs": ayahs } })
}

pub fn secondary_arabic_json(number: u16, texts: &[&str]) -> Value {
    let (name, english, translation, revelation) = match number {
        1 => ("سُورَةُ ٱلْفَاتِحَةِ", "Al-Faatiha", "The Opening", "Meccan"),
        2 => ("سُورَةُ البَقَرَةِ", "Al-Baqara", "The Cow", "Medinan"),
        _ => ("سورة", "Surah", "Chapter", "Meccan"),
    };

    let ayahs: Vec<Value> = texts
        .iter()
        .enumerate()
        .map(|(index, text)| {
            let sajda = if index == 1 {
                json!({ "id": 1, "recommended": true, "obligatory": false })
            } else {
                json!(false)
            };
            json!({
                "number": index + 1,
                "text": text,
                "numberInSurah": index + 1,
                "juz": 1,
                "manzil": 1,
                "page": 1,
                "ruku": 1,
                "hizbQuarter": 1,
                "sajda": sajda
            })
        })
        .collect();

    json!({
        "code": 200,
        "status": "OK",
        "data": {
            "number": number,
            "name": name,
            "englishName": english,
            "englishNameTranslation": translation,
            "revelationType": revelation,
            "numberOfAyahs": texts.len(),
            "ayahs": ayahs
        }
    })
}

/// Register the Arabic and translation editions (not transliteration).
pub fn with_secondary(
    fetcher: MockFetcher,
    number: u16,
    arabic: &[&str],
    translations: &[&str],
) -> MockFetcher {
    fetcher
        .with_json(
            &format!("secondary.test/v1/surah/{number}/quran-uthmani"),
            secondary_arabic_json(number, arabic),
        )
        .with_json(
            &format!("secondary.test/v1/surah/{number}/id.indonesian"),
            secondary_edition_json(translations),
        )
}

pub fn with_transliteration(fetcher: MockFetcher, number: u16, lines: &[&str]) -> MockFetcher {
    fetcher.with_json(
        &format!("secondary.test/v1/surah/{number}/en.transliteration"),
        secondary_edition_json(lines),
    )
}
