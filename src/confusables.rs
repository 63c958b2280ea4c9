//! Static confusable-character substitution table.
//!
//! Maps individual non-ASCII code points that are visually similar to ASCII
//! (Greek/Cyrillic/Armenian letters, runic glyphs, typographic punctuation,
//! odd digit forms) onto ASCII replacement strings. The table is a versioned
//! code asset: new problematic glyphs land as code changes, never as runtime
//! configuration.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Source entries for the confusables map, grouped by script.
///
/// One code point maps to exactly one ASCII replacement. Entries that NFKC
/// already folds (fullwidth digits, some dashes) are kept anyway so the
/// table stands on its own.
const CONFUSABLE_ENTRIES: &[(char, &str)] = &[
    // Greek capitals
    ('Α', "A"),
    ('Β', "B"),
    ('Γ', "G"),
    ('Δ', "D"),
    ('Ε', "E"),
    ('Ζ', "Z"),
    ('Η', "H"),
    ('Θ', "TH"),
    ('Ι', "I"),
    ('Κ', "K"),
    ('Λ', "L"),
    ('Μ', "M"),
    ('Ν', "N"),
    ('Ξ', "X"),
    ('Ο', "O"),
    ('Π', "P"),
    ('Ρ', "P"),
    ('Σ', "S"),
    ('Τ', "T"),
    ('Υ', "Y"),
    ('Φ', "F"),
    ('Χ', "X"),
    ('Ψ', "PS"),
    ('Ω', "O"),
    // Greek lowercase
    ('α', "a"),
    ('β', "b"),
    ('γ', "g"),
    ('δ', "d"),
    ('ε', "e"),
    ('ζ', "z"),
    ('η', "h"),
    ('θ', "th"),
    ('ι', "i"),
    ('κ', "k"),
    ('λ', "l"),
    ('μ', "m"),
    ('ν', "n"),
    ('ξ', "x"),
    ('ο', "o"),
    ('π', "p"),
    ('ρ', "p"),
    ('σ', "s"),
    ('ς', "s"),
    ('τ', "t"),
    ('υ', "y"),
    ('φ', "f"),
    ('χ', "x"),
    ('ψ', "ps"),
    ('ω', "o"),
    // Lunate sigma / san variants
    ('Ϲ', "C"),
    ('ϲ', "c"),
    ('Ϻ', "M"),
    ('ϻ', "m"),
    // Cyrillic capitals visually close to Latin
    ('А', "A"),
    ('В', "B"),
    ('Е', "E"),
    ('К', "K"),
    ('М', "M"),
    ('Н', "H"),
    ('О', "O"),
    ('Р', "P"),
    ('С', "C"),
    ('Т', "T"),
    ('У', "Y"),
    ('Х', "X"),
    // Cyrillic lowercase
    ('а', "a"),
    ('в', "b"),
    ('е', "e"),
    ('к', "k"),
    ('м', "m"),
    ('н', "h"),
    ('о', "o"),
    ('р', "p"),
    ('с', "c"),
    ('т', "t"),
    ('у', "y"),
    ('х', "x"),
    ('і', "i"),
    ('ѕ', "s"),
    ('ԁ', "d"),
    ('Ԍ', "G"),
    ('з', "3"),
    // Armenian capitals
    ('Ա', "A"),
    ('Բ', "B"),
    ('Գ', "G"),
    ('Դ', "D"),
    ('Ե', "E"),
    ('Զ', "Z"),
    ('Է', "E"),
    ('Թ', "T"),
    ('Ժ', "ZH"),
    ('Ի', "I"),
    ('Լ', "L"),
    ('Խ', "X"),
    ('Ծ', "C"),
    ('Կ', "K"),
    ('Հ', "H"),
    ('Ձ', "DZ"),
    ('Ղ', "GH"),
    ('Ճ', "CH"),
    ('Մ', "M"),
    ('Յ', "Y"),
    ('Ն', "N"),
    ('Շ', "SH"),
    ('Ո', "O"),
    ('Չ', "CH"),
    ('Պ', "P"),
    ('Ջ', "J"),
    ('Ռ', "R"),
    ('Ս', "S"),
    ('Վ', "V"),
    ('Տ', "T"),
    ('Ր', "R"),
    ('Ց', "C"),
    ('Փ', "P"),
    ('Ք', "K"),
    ('Օ', "O"),
    ('Ֆ', "F"),
    // Armenian lowercase
    ('ա', "a"),
    ('բ', "b"),
    ('գ', "g"),
    ('դ', "d"),
    ('ե', "e"),
    ('զ', "z"),
    ('է', "e"),
    ('թ', "t"),
    ('ժ', "zh"),
    ('ի', "i"),
    ('լ', "l"),
    ('խ', "x"),
    ('ծ', "c"),
    ('կ', "k"),
    ('հ', "h"),
    ('ձ', "dz"),
    ('ղ', "gh"),
    ('ճ', "ch"),
    ('մ', "m"),
    ('յ', "y"),
    ('ն', "n"),
    ('շ', "sh"),
    ('ո', "o"),
    ('չ', "ch"),
    ('պ', "p"),
    ('ջ', "j"),
    ('ռ', "r"),
    ('ս', "s"),
    ('վ', "v"),
    ('տ', "t"),
    ('ր', "r"),
    ('ց', "c"),
    ('փ', "p"),
    ('ք', "k"),
    ('օ', "o"),
    ('ֆ', "f"),
    // Runic confusables
    ('ᛐ', "T"),
    ('ᚠ', "F"),
    ('ᛒ', "B"),
    // Typographic punctuation
    ('“', "\""),
    ('”', "\""),
    ('‘', "'"),
    ('’', "'"),
    ('—', "-"),
    ('–', "-"),
    ('﹣', "-"),
    ('·', "."),
    ('…', "..."),
    ('ª', "a"),
    ('º', "o"),
    // Odd digit forms
    ('᧐', "0"),
    ('０', "0"),
    ('１', "1"),
    ('２', "2"),
    ('３', "3"),
    ('４', "4"),
    ('５', "5"),
    ('６', "6"),
    ('７', "7"),
    ('８', "8"),
    ('９', "9"),
];

static CONFUSABLES: OnceLock<HashMap<char, &'static str>> = OnceLock::new();

/// Shared read-only confusables map, built once on first use.
pub fn confusables() -> &'static HashMap<char, &'static str> {
    CONFUSABLES.get_or_init(|| CONFUSABLE_ENTRIES.iter().copied().collect())
}

/// ASCII replacement for a confusable code point, if the table covers it.
pub fn replacement(ch: char) -> Option<&'static str> {
    confusables().get(&ch).copied()
}

/// Apply the table to `text`.
///
/// Mapped code points are substituted; everything else passes through
/// unchanged at this stage (later pipeline stages handle the leftovers).
pub fn apply_confusables(text: &str) -> String {
    let map = confusables();
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match map.get(&ch) {
            Some(rep) => out.push_str(rep),
            None => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn entries_are_unique_per_code_point() {
        let mut seen = HashSet::new();
        for (ch, _) in CONFUSABLE_ENTRIES {
            assert!(seen.insert(*ch), "duplicate table entry for {ch:?}");
        }
    }

    #[test]
    fn replacements_are_ascii() {
        for (ch, rep) in CONFUSABLE_ENTRIES {
            assert!(rep.is_ascii(), "non-ASCII replacement for {ch:?}");
            assert!(!rep.is_empty(), "empty replacement for {ch:?}");
        }
    }

    #[test]
    fn scripts_map_to_expected_latin() {
        assert_eq!(replacement('Α'), Some("A")); // Greek
        assert_eq!(replacement('Е'), Some("E")); // Cyrillic
        assert_eq!(replacement('Ա'), Some("A")); // Armenian
        assert_eq!(replacement('Ψ'), Some("PS"));
        assert_eq!(replacement('з'), Some("3"));
        assert_eq!(replacement('A'), None);
    }

    #[test]
    fn apply_substitutes_and_passes_through() {
        assert_eq!(apply_confusables("Τitle"), "Title");
        assert_eq!(apply_confusables("plain ascii"), "plain ascii");
        // Unmapped non-ASCII survives this stage untouched.
        assert_eq!(apply_confusables("naïve"), "naïve");
    }
}
