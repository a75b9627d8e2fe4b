//! Selector vocabulary: the one-character codes that pick a numbering scheme inside a template.
//!
//! The registry is a single `const` table. Lookups return copies of the table's schemes, so callers may configure a
//! width on the result without affecting anyone else.
//!
//! ## Notes
//! - Lookup via [`lookup`] / [`scheme`] is **case-sensitive**: the selector's case picks the output case.
//! - `d`, `x`, `X`, `b` and `B` are the width-capable selectors (`%05d`, `%03X`, `%08B`).
//! - `b` always renders the shortest binary form; `B` honors the requested width.
//!
//! ## Examples
//! ```rust
//! use nextname_core::registry;
//!
//! assert_eq!(registry::scheme('P').unwrap().encode(5), "Echo");
//! assert!(registry::lookup('d').unwrap().scheme.is_width_capable());
//! assert!(registry::lookup('q').is_none());
//! ```

use crate::scheme::bijective::{GREEK, LATIN};
use crate::scheme::words::{GREEK_LETTER_NAMES, LEGACY_ICAO_PHONETIC, NATO_PHONETIC};
use crate::scheme::{Alphabetic, LetterCase, NumberingScheme, Numeral, Roman, Words};

/// Metadata for one selector.
#[derive(Debug, Clone, Copy)]
pub struct SelectorInfo {
    pub selector: char,
    pub scheme: NumberingScheme,
    /// One-line description for docs and `nextname schemes`.
    pub summary: &'static str,
    /// The first few names this selector produces.
    pub sample: &'static str,
}

const fn info(selector: char, scheme: NumberingScheme, summary: &'static str, sample: &'static str) -> SelectorInfo {
    SelectorInfo {
        selector,
        scheme,
        summary,
        sample,
    }
}

/// Registry of all selectors.
pub const SELECTORS: &[SelectorInfo] = &[
    info(
        'd',
        NumberingScheme::Numeral(Numeral::decimal()),
        "decimal numerals",
        "1, 2, 3, ..., 10",
    ),
    info(
        'x',
        NumberingScheme::Numeral(Numeral::hexadecimal(LetterCase::Lower)),
        "lowercase hexadecimal numerals",
        "1, 2, ..., a, b, ..., 10",
    ),
    info(
        'X',
        NumberingScheme::Numeral(Numeral::hexadecimal(LetterCase::Upper)),
        "uppercase hexadecimal numerals",
        "1, 2, ..., A, B, ..., 10",
    ),
    info(
        'b',
        NumberingScheme::Numeral(Numeral::binary(false)),
        "binary numerals, shortest form",
        "1, 10, 11, 100",
    ),
    info(
        'B',
        NumberingScheme::Numeral(Numeral::binary(true)),
        "binary numerals, zero-padded to the requested width",
        "%04B: 0001, 0010, 0011",
    ),
    info(
        'r',
        NumberingScheme::Roman(Roman::new(LetterCase::Lower)),
        "lowercase Roman numerals (1-3999)",
        "i, ii, iii, iv",
    ),
    info(
        'R',
        NumberingScheme::Roman(Roman::new(LetterCase::Upper)),
        "uppercase Roman numerals (1-3999)",
        "I, II, III, IV",
    ),
    info(
        'a',
        NumberingScheme::Alphabetic(Alphabetic::new(&LATIN, LetterCase::Lower)),
        "lowercase Latin letters, spreadsheet style",
        "a, b, ..., z, aa, ab",
    ),
    info(
        'A',
        NumberingScheme::Alphabetic(Alphabetic::new(&LATIN, LetterCase::Upper)),
        "uppercase Latin letters, spreadsheet style",
        "A, B, ..., Z, AA, AB",
    ),
    info(
        'g',
        NumberingScheme::Alphabetic(Alphabetic::new(&GREEK, LetterCase::Lower)),
        "lowercase Greek letters, spreadsheet style",
        "α, β, ..., ω, αα",
    ),
    info(
        'G',
        NumberingScheme::Alphabetic(Alphabetic::new(&GREEK, LetterCase::Upper)),
        "uppercase Greek letters, spreadsheet style",
        "Α, Β, ..., Ω, ΑΑ",
    ),
    info(
        'w',
        NumberingScheme::Words(Words::new(&GREEK_LETTER_NAMES, LetterCase::Lower)),
        "Greek letter names",
        "alpha, beta, gamma",
    ),
    info(
        'W',
        NumberingScheme::Words(Words::new(&GREEK_LETTER_NAMES, LetterCase::Upper)),
        "capitalized Greek letter names",
        "Alpha, Beta, Gamma",
    ),
    info(
        'p',
        NumberingScheme::Words(Words::new(&NATO_PHONETIC, LetterCase::Lower)),
        "NATO phonetic alphabet",
        "alpha, bravo, charlie",
    ),
    info(
        'P',
        NumberingScheme::Words(Words::new(&NATO_PHONETIC, LetterCase::Upper)),
        "capitalized NATO phonetic alphabet",
        "Alpha, Bravo, Charlie",
    ),
    info(
        'l',
        NumberingScheme::Words(Words::new(&LEGACY_ICAO_PHONETIC, LetterCase::Lower)),
        "legacy Able-Baker phonetic alphabet",
        "able, baker, charlie",
    ),
    info(
        'L',
        NumberingScheme::Words(Words::new(&LEGACY_ICAO_PHONETIC, LetterCase::Upper)),
        "capitalized legacy Able-Baker phonetic alphabet",
        "Able, Baker, Charlie",
    ),
];

/// Resolve a selector to its registry entry.
pub fn lookup(selector: char) -> Option<&'static SelectorInfo> {
    SELECTORS.iter().find(|info| info.selector == selector)
}

/// Resolve a selector to a fresh copy of its scheme.
pub fn scheme(selector: char) -> Option<NumberingScheme> {
    lookup(selector).map(|info| info.scheme)
}

/// Resolve a selector to a fresh copy of its scheme configured with `width`.
///
/// ## Returns
/// - `None` if the selector is unknown or its scheme is not width-capable.
pub fn scheme_with_width(selector: char, width: u16) -> Option<NumberingScheme> {
    scheme(selector)?.with_width(width)
}

/// Iterate over every selector character in registry order.
pub fn selectors() -> impl Iterator<Item = char> {
    SELECTORS.iter().map(|info| info.selector)
}
