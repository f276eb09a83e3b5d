use std::sync::LazyLock;

use regex::Regex;

/// Shown in place of a missing or fully-stripped translation.
pub const TRANSLATION_PLACEHOLDER: &str = "Terjemahan tidak tersedia";

static MARKUP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("markup regex"));

static BRACKETED_FOOTNOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[0-9]+\]").expect("bracket regex"));

// Footnote digits glued onto a word ("Allah1" -> "Allah")
static GLUED_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Za-z]+)[0-9]+").expect("glued digit regex"));

// Also covers closing brackets and quotes ("sesat)1." -> "sesat).")
static DIGITS_AFTER_PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([.,;:)\]"'”’])[0-9]+"#).expect("punctuation digit regex")
});

// A whole run of stacked markers ("lurus 5 6." -> "lurus.")
static STANDALONE_DIGITS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\s+[0-9]+)+\s*([.,;:]|$)").expect("standalone digit regex")
});

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("whitespace regex"));

/// Strip markup and footnote noise from a translation.
///
/// The passes run in a fixed order; each one assumes the noise removed by
/// the previous passes is already gone. The result is never empty.
pub fn clean_translation(raw: Option<&str>) -> String {
    let raw = match raw {
        Some(text) if !text.is_empty() => text,
        _ => return TRANSLATION_PLACEHOLDER.to_string(),
    };

    let cleaned = MARKUP.replace_all(raw, "");
    let cleaned = BRACKETED_FOOTNOTE.replace_all(&cleaned, "");
    let cleaned = GLUED_DIGITS.replace_all(&cleaned, "$1");
    let cleaned = DIGITS_AFTER_PUNCTUATION.replace_all(&cleaned, "$1");
    let cleaned = STANDALONE_DIGITS.replace_all(&cleaned, "$1");
    let cleaned = WHITESPACE.replace_all(&cleaned, " ");

    let trimmed = cleaned.trim();
    let trimmed = trimmed
        .strip_suffix(|c: char| c == ',' || c == '.')
        .unwrap_or(trimmed);

    if trimmed.is_empty() {
        TRANSLATION_PLACEHOLDER.to_string()
    } else {
        trimmed.to_string()
    }
}
