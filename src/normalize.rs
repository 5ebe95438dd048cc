//! Arabic search-input normalization

/// Strip the seven tashkeel marks from search input so vowelled and
/// unvowelled spellings match the same entries: fathatan (U+064B),
/// dammatan (U+064C), kasratan (U+064D), fatha (U+064E), damma (U+064F),
/// kasra (U+0650), sukun (U+0652). Shadda (U+0651) is kept — the word
/// list spells doubled consonants with it.
///
/// Operates on code points, never bytes. Identity on text containing
/// none of the marks; idempotent.
pub fn strip_tashkeel(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, '\u{064B}'..='\u{0650}' | '\u{0652}'))
        .collect()
}
