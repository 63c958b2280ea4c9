//! Homoglyph-aware ASCII normalization.
//!
//! Ownership model:
//! - the confusables table is the explicit, versioned substitution layer;
//! - `Transliterate` is an optional injected capability for everything the
//!   table does not cover;
//! - the final ASCII strip is the guaranteed backstop, so output purity never
//!   depends on either layer being complete.

use std::sync::{Arc, OnceLock};

use unicode_normalization::UnicodeNormalization;

use crate::confusables::apply_confusables;

/// Best-effort generic transliteration of non-ASCII text.
///
/// Implementations approximate input as ASCII. The normalizer treats this as
/// optional: absence only reduces coverage for code points the explicit
/// confusables table misses, it never fails the pipeline.
pub trait Transliterate: Send + Sync {
    /// Render `text` as approximate ASCII.
    fn transliterate(&self, text: &str) -> String;
}

/// `unidecode`-backed transliteration.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unidecoder;

impl Transliterate for Unidecoder {
    fn transliterate(&self, text: &str) -> String {
        unidecode::unidecode(text)
    }
}

/// Multi-stage normalizer producing ASCII-only output.
///
/// Stages, in order: NFKC compatibility folding, confusables substitution,
/// optional generic transliteration, ASCII strip, whitespace and punctuation
/// spacing cleanup, the `VoI.` artifact fix, optional uppercasing.
///
/// Explicit table entries take precedence over the generic fallback so
/// look-alike scripts (titles spoofed with Greek/Cyrillic/Armenian letters)
/// are resolved before approximate conversion gets a say. Total: never
/// fails, always returns a string.
#[derive(Clone)]
pub struct HomoglyphNormalizer {
    transliterator: Option<Arc<dyn Transliterate>>,
}

impl HomoglyphNormalizer {
    /// Normalizer with the default `unidecode` fallback installed.
    pub fn new() -> Self {
        Self {
            transliterator: Some(Arc::new(Unidecoder)),
        }
    }

    /// Normalizer with no generic fallback.
    ///
    /// Only the explicit table and the final ASCII strip handle non-ASCII
    /// input; uncovered glyphs are dropped instead of approximated.
    pub fn without_transliteration() -> Self {
        Self {
            transliterator: None,
        }
    }

    /// Normalizer with a caller-provided fallback capability.
    pub fn with_transliterator(transliterator: Arc<dyn Transliterate>) -> Self {
        Self {
            transliterator: Some(transliterator),
        }
    }

    /// True when a generic transliteration fallback is installed.
    pub fn has_transliterator(&self) -> bool {
        self.transliterator.is_some()
    }

    /// Replace confusable glyphs with ASCII equivalents and tidy the result.
    pub fn normalize(&self, text: &str, uppercase: bool) -> String {
        let folded: String = text.nfkc().collect();
        let substituted = apply_confusables(&folded);
        let transliterated = match &self.transliterator {
            Some(capability) => capability.transliterate(&substituted),
            None => substituted,
        };
        let ascii: String = transliterated.chars().filter(char::is_ascii).collect();
        let tidied = collapse_whitespace_tight(&ascii);
        let fixed = fix_vol_artifact(&tidied);
        if uppercase { fixed.to_uppercase() } else { fixed }
    }
}

impl Default for HomoglyphNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize with a process-wide default normalizer (`unidecode` fallback).
pub fn normalize_homoglyphs(text: &str, uppercase: bool) -> String {
    static DEFAULT: OnceLock<HomoglyphNormalizer> = OnceLock::new();
    DEFAULT
        .get_or_init(HomoglyphNormalizer::new)
        .normalize(text, uppercase)
}

/// Punctuation that must not be preceded by a space.
fn is_tight_punctuation(ch: char) -> bool {
    matches!(ch, '.' | ',' | ';' | ':' | '!' | '?' | '%')
}

/// Collapse whitespace runs to single spaces, trim both ends, and drop any
/// space immediately preceding tight punctuation.
fn collapse_whitespace_tight(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            pending_space = !out.is_empty();
            continue;
        }
        if pending_space && !is_tight_punctuation(ch) {
            out.push(' ');
        }
        out.push(ch);
        pending_space = false;
    }
    out
}

/// Rewrite the `VoI.` token to `Vol.`, preserving the leading letter's case.
///
/// Known OCR/homoglyph artifact in volume-numbered titles. Narrow on
/// purpose: anchored at a word boundary before `V`/`v`, matching exactly
/// `oI.`, rewriting only the `I`. `VoI.5` becomes `Vol.5`; `XVoI.` is left
/// alone. Not a general I/l fixup.
fn fix_vol_artifact(text: &str) -> String {
    const TOKEN_LEN: usize = 4; // "VoI."
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut idx = 0;
    while idx < bytes.len() {
        let at_boundary = idx == 0 || !is_word_byte(bytes[idx - 1]);
        if at_boundary
            && idx + TOKEN_LEN <= bytes.len()
            && matches!(bytes[idx], b'V' | b'v')
            && &bytes[idx + 1..idx + TOKEN_LEN] == b"oI."
        {
            out.push(bytes[idx] as char);
            out.push_str("ol.");
            idx += TOKEN_LEN;
        } else {
            // Input is ASCII by this stage, so byte-wise stepping is safe.
            out.push(bytes[idx] as char);
            idx += 1;
        }
    }
    out
}

fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spoofed_title_resolves_to_ascii() {
        assert_eq!(
            normalize_homoglyphs("Αlpha Ο-Ring", true),
            "ALPHA O-RING"
        );
        assert_eq!(normalize_homoglyphs("Αlpha Ο-Ring", false), "Alpha O-Ring");
    }

    #[test]
    fn output_is_pure_ascii() {
        let inputs = [
            "Тhе Веst Сhаir", // Cyrillic lookalikes
            "Θερμός 500ml",
            "naïve café ☕ déjà vu",
            "ｆｕｌｌｗｉｄｔｈ １２３",
        ];
        for input in inputs {
            let out = normalize_homoglyphs(input, false);
            assert!(out.is_ascii(), "non-ASCII output for {input:?}: {out:?}");
        }
    }

    #[test]
    fn normalization_is_idempotent() {
        let inputs = ["Αlpha Ο-Ring", "  spaced   ,  out  ", "VoI. 3", "Ｓale ５0%"];
        for input in inputs {
            let once = normalize_homoglyphs(input, false);
            let twice = normalize_homoglyphs(&once, false);
            assert_eq!(once, twice, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn whitespace_collapses_and_hugs_punctuation() {
        assert_eq!(
            normalize_homoglyphs("  Hello ,  world  !  ", false),
            "Hello, world!"
        );
        assert_eq!(normalize_homoglyphs("50 %", false), "50%");
        assert_eq!(normalize_homoglyphs("a\t\nb", false), "a b");
    }

    #[test]
    fn vol_artifact_is_fixed_narrowly() {
        assert_eq!(normalize_homoglyphs("VoI. 3", false), "Vol. 3");
        assert_eq!(normalize_homoglyphs("voI.5", false), "vol.5");
        // No word boundary before the V: left alone.
        assert_eq!(normalize_homoglyphs("XVoI.", false), "XVoI.");
        // Missing trailing dot: left alone.
        assert_eq!(normalize_homoglyphs("VoI 3", false), "VoI 3");
    }

    #[test]
    fn fullwidth_digits_fold_to_ascii() {
        assert_eq!(normalize_homoglyphs("ｓｉｚｅ ４２", false), "size 42");
    }

    #[test]
    fn fallback_absence_drops_uncovered_glyphs() {
        let bare = HomoglyphNormalizer::without_transliteration();
        assert!(!bare.has_transliterator());
        // `é` is not in the table; with no fallback it is stripped.
        assert_eq!(bare.normalize("café", false), "caf");
        // Table-covered scripts still resolve without the fallback.
        assert_eq!(bare.normalize("Αlpha", false), "Alpha");
    }

    #[test]
    fn fallback_presence_extends_coverage() {
        let full = HomoglyphNormalizer::new();
        assert_eq!(full.normalize("café", false), "cafe");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(normalize_homoglyphs("", false), "");
        assert_eq!(normalize_homoglyphs("   ", true), "");
    }
}
