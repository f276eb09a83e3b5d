/// Known renderings of the opening formula, tried in order.
pub const BISMILLAH_VARIANTS: [&str; 5] = [
    // alif wasla
    "بِسْمِ ٱللَّهِ ٱلرَّحْمَٰنِ ٱلرَّحِيمِ",
    "بِسْمِ اللَّهِ الرَّحْمَٰنِ الرَّحِيمِ",
    "بِسْمِ اللهِ الرَّحْمَنِ الرَّحِيمِ",
    "بِسْمِ اللَّهِ الرَّحْمَنِ الرَّحِيمِ",
    // single-glyph ligature
    "﷽",
];

/// Chapters whose first verse *is* the formula (Al-Fatihah) or which have
/// no formula to strip (At-Tawbah).
pub const CANONICAL_BISMILLAH_CHAPTERS: [u16; 2] = [1, 9];

/// Remove a leading opening formula from `text`.
///
/// Leading whitespace is ignored when matching. The first matching variant
/// is removed and the remainder trimmed; text with no exact variant prefix
/// is returned unchanged.
pub fn strip_bismillah(text: &str) -> &str {
    let candidate = text.trim_start();

    BISMILLAH_VARIANTS
        .iter()
        .find_map(|variant| candidate.strip_prefix(variant))
        .map(str::trim)
        .unwrap_or(text)
}

/// Text to show for verse 1 of `chapter`.
pub fn opening_verse_text(chapter: u16, text: &str) -> &str {
    if CANONICAL_BISMILLAH_CHAPTERS.contains(&chapter) {
        return text;
    }

    let stripped = strip_bismillah(text);
    if stripped.len() != text.len() {
        tracing::debug!("Removed opening formula from chapter {}", chapter);
    }
    stripped
}
