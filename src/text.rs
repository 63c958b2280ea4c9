//! General text cleanup built on the homoglyph pass, plus an independent
//! diacritic-stripping variant for strict-ASCII contexts.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::homoglyph::HomoglyphNormalizer;

/// Text normalizer for free-form fields (titles, descriptions, categories,
/// storefront names).
#[derive(Clone, Default)]
pub struct TextNormalizer {
    homoglyphs: HomoglyphNormalizer,
}

impl TextNormalizer {
    /// Normalizer with the default homoglyph pipeline (fallback installed).
    pub fn new() -> Self {
        Self {
            homoglyphs: HomoglyphNormalizer::new(),
        }
    }

    /// Normalizer whose homoglyph pass has no transliteration fallback.
    pub fn without_transliteration() -> Self {
        Self {
            homoglyphs: HomoglyphNormalizer::without_transliteration(),
        }
    }

    /// Normalizer over a caller-configured homoglyph pipeline.
    pub fn with_homoglyphs(homoglyphs: HomoglyphNormalizer) -> Self {
        Self { homoglyphs }
    }

    /// Clean free-form text.
    ///
    /// Homoglyph ASCII pass (case preserved), NFKC re-application, newline
    /// folding, allow-list filtering (word characters, whitespace, and
    /// `. , ! ? ; : ( ) " ' -`; anything else becomes a space), whitespace
    /// collapse, and the trailing-inches rewrite (`15"` → `15 inch`).
    pub fn normalize_text(&self, text: &str) -> String {
        self.normalize_text_cased(text, false)
    }

    /// `normalize_text` with the homoglyph uppercase switch exposed.
    pub fn normalize_text_cased(&self, text: &str, uppercase: bool) -> String {
        let ascii = self.homoglyphs.normalize(text, uppercase);
        let folded: String = ascii.nfkc().collect();
        let unbroken = folded.replace('\n', " ");
        let allowed = replace_disallowed(&unbroken);
        let collapsed = collapse_whitespace(&allowed);
        rewrite_inch_marks(&collapsed)
    }
}

/// Fold text to plain ASCII by stripping diacritical marks.
///
/// NFKC, canonical decomposition, combining-mark removal, then an ASCII
/// strip and whitespace collapse. Accent stripping (`é` → `e`) is a
/// different transformation from confusable substitution (Cyrillic `а` →
/// `a`): this path knows nothing about look-alike scripts and the homoglyph
/// path knows nothing about accents, and the two stay separate because they
/// serve different field classes.
pub fn normalize_to_ascii(text: &str) -> String {
    let composed: String = text.nfkc().collect();
    let stripped: String = composed
        .nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .collect();
    let ascii: String = stripped.chars().filter(char::is_ascii).collect();
    collapse_whitespace(&ascii)
}

/// Collapse runs of whitespace into single spaces and trim.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    let mut seen_space = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !seen_space {
                normalized.push(' ');
                seen_space = true;
            }
        } else {
            normalized.push(ch);
            seen_space = false;
        }
    }
    normalized.trim().to_string()
}

fn is_allowed(ch: char) -> bool {
    ch.is_alphanumeric()
        || ch == '_'
        || ch.is_whitespace()
        || matches!(
            ch,
            '.' | ',' | '!' | '?' | ';' | ':' | '(' | ')' | '"' | '\'' | '-'
        )
}

fn replace_disallowed(text: &str) -> String {
    text.chars()
        .map(|ch| if is_allowed(ch) { ch } else { ' ' })
        .collect()
}

/// Rewrite a quote directly following digits into ` inch`.
fn rewrite_inch_marks(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_digit = false;
    for ch in text.chars() {
        if ch == '"' && prev_is_digit {
            out.push_str(" inch");
            prev_is_digit = false;
        } else {
            out.push(ch);
            prev_is_digit = ch.is_ascii_digit();
        }
    }
    out
}
