//! Define the closed family of numbering schemes.
//!
//! Each family lives in its own submodule and exposes the same pair of total operations:
//!
//! - `decode(text) -> Option<Ordinal>`: read an ordinal back out of a name fragment.
//! - `encode(ordinal) -> String`: render an ordinal, or return `""` when it is out of the scheme's domain.
//!
//! [`NumberingScheme`] dispatches to the families by `match`; there is no trait object and no runtime extension point.
//!
//! ## Module Structure
//!
//! - `numeral` - decimal / hexadecimal / binary numerals with optional zero padding
//! - `bijective` - zero-less positional letters (Latin `A..Z, AA..`, Greek `Α..Ω, ΑΑ..`)
//! - `roman` - Roman numerals in `1..=3999`
//! - `words` - fixed word lists (Greek letter names, NATO and legacy ICAO phonetic alphabets)

pub mod bijective;
pub mod numeral;
pub mod roman;
pub mod words;

use std::fmt;

pub use bijective::{Alphabet, Alphabetic};
pub use numeral::{Numeral, Radix};
pub use roman::Roman;
pub use words::{WordList, Words};

/// Represent a 1-based sequence position inside a naming scheme.
///
/// ## Notes
/// - Values `<= 0` are "unset"; every `encode` maps them to an empty string.
pub type Ordinal = i16;

/// Select the letter case used when a scheme renders text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterCase {
    Lower,
    Upper,
}

impl LetterCase {
    /// Return the lowercase spelling used in diagnostics and reference docs.
    pub fn as_str(self) -> &'static str {
        match self {
            LetterCase::Lower => "lower",
            LetterCase::Upper => "upper",
        }
    }
}

/// Broad grouping of numbering schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemeFamily {
    /// Positional numerals with a zero digit (decimal, hexadecimal, binary).
    Numeral,
    /// Bijective (zero-less) letter numerals.
    Alphabetic,
    /// Roman numerals.
    Roman,
    /// Fixed, ordered word lists.
    Words,
}

impl SchemeFamily {
    pub fn as_str(self) -> &'static str {
        match self {
            SchemeFamily::Numeral => "numeral",
            SchemeFamily::Alphabetic => "alphabetic",
            SchemeFamily::Roman => "roman",
            SchemeFamily::Words => "words",
        }
    }
}

/// A codec between an [`Ordinal`] and its textual representation.
///
/// ## Notes
/// - Values are `Copy` and carry all of their configuration (case, width). Two uses of the same registry entry never
///   share state; [`NumberingScheme::with_width`] builds a new value.
///
/// ## Examples
/// ```rust
/// use nextname_core::scheme::{LetterCase, NumberingScheme, Numeral};
///
/// let hex = NumberingScheme::Numeral(Numeral::hexadecimal(LetterCase::Upper));
/// let padded = hex.with_width(3).unwrap();
/// assert_eq!(padded.encode(241), "0F1");
/// assert_eq!(hex.encode(241), "F1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberingScheme {
    Numeral(Numeral),
    Alphabetic(Alphabetic),
    Roman(Roman),
    Words(Words),
}

impl NumberingScheme {
    /// Decode a name fragment into an ordinal.
    ///
    /// ## Returns
    /// - `Some(ordinal)` with `ordinal >= 1` when `text` is a valid representation in this scheme.
    /// - `None` otherwise (including empty text).
    pub fn decode(&self, text: &str) -> Option<Ordinal> {
        match self {
            NumberingScheme::Numeral(s) => s.decode(text),
            NumberingScheme::Alphabetic(s) => s.decode(text),
            NumberingScheme::Roman(s) => s.decode(text),
            NumberingScheme::Words(s) => s.decode(text),
        }
    }

    /// Encode an ordinal, returning an empty string when it is outside the scheme's domain.
    pub fn encode(&self, ordinal: Ordinal) -> String {
        match self {
            NumberingScheme::Numeral(s) => s.encode(ordinal),
            NumberingScheme::Alphabetic(s) => s.encode(ordinal),
            NumberingScheme::Roman(s) => s.encode(ordinal),
            NumberingScheme::Words(s) => s.encode(ordinal),
        }
    }

    pub fn family(&self) -> SchemeFamily {
        match self {
            NumberingScheme::Numeral(_) => SchemeFamily::Numeral,
            NumberingScheme::Alphabetic(_) => SchemeFamily::Alphabetic,
            NumberingScheme::Roman(_) => SchemeFamily::Roman,
            NumberingScheme::Words(_) => SchemeFamily::Words,
        }
    }

    /// Check whether the scheme accepts the `%0<width><selector>` form.
    pub fn is_width_capable(&self) -> bool {
        matches!(self, NumberingScheme::Numeral(_))
    }

    /// Check whether a configured width pads the output (`%b` accepts a width but ignores it).
    pub fn honors_width(&self) -> bool {
        matches!(self, NumberingScheme::Numeral(s) if s.is_padded())
    }

    /// Return the configured zero-padding width, if the scheme has one.
    pub fn width(&self) -> Option<u16> {
        match self {
            NumberingScheme::Numeral(s) => Some(s.width()),
            _ => None,
        }
    }

    /// Build an independent copy of this scheme configured with `width`.
    ///
    /// ## Returns
    /// - `None` if the scheme is not width-capable.
    pub fn with_width(&self, width: u16) -> Option<NumberingScheme> {
        match self {
            NumberingScheme::Numeral(s) => Some(NumberingScheme::Numeral(s.with_width(width))),
            _ => None,
        }
    }
}

impl fmt::Display for NumberingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberingScheme::Numeral(s) => s.fmt(f),
            NumberingScheme::Alphabetic(s) => s.fmt(f),
            NumberingScheme::Roman(s) => s.fmt(f),
            NumberingScheme::Words(s) => s.fmt(f),
        }
    }
}

/// Apply `case` to the first character of `word`, leaving the rest untouched.
pub(crate) fn capitalize_first(word: &str, case: LetterCase) -> String {
    let mut chars = word.chars();
    match (case, chars.next()) {
        (LetterCase::Upper, Some(first)) => first.to_uppercase().chain(chars).collect(),
        _ => word.to_string(),
    }
}
