//! Bijective (zero-less) letter numerals, as used for spreadsheet columns.
//!
//! With an alphabet of `L` letters, every digit position runs over `1..=L` instead of `0..L`. For Latin letters this
//! gives `A..Z` for 1..26, `AA` for 27, `ZZ` for 702 and `AAA` for 703. No representation ever starts with a letter
//! acting as zero, so each ordinal has exactly one spelling.

use std::fmt;

use super::{LetterCase, Ordinal};

/// An ordered alphabet of `(upper, lower)` letter pairs.
#[derive(Debug, PartialEq, Eq)]
pub struct Alphabet {
    pub name: &'static str,
    pub letters: &'static [(char, char)],
}

impl Alphabet {
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Return the 0-based position of `c`, matching either case.
    pub fn position(&self, c: char) -> Option<usize> {
        self.letters.iter().position(|&(upper, lower)| c == upper || c == lower)
    }

    fn letter(&self, index: usize, case: LetterCase) -> Option<char> {
        self.letters.get(index).map(|&(upper, lower)| match case {
            LetterCase::Upper => upper,
            LetterCase::Lower => lower,
        })
    }
}

/// The 26 ASCII Latin letters.
pub const LATIN: Alphabet = Alphabet {
    name: "latin",
    letters: &[
        ('A', 'a'),
        ('B', 'b'),
        ('C', 'c'),
        ('D', 'd'),
        ('E', 'e'),
        ('F', 'f'),
        ('G', 'g'),
        ('H', 'h'),
        ('I', 'i'),
        ('J', 'j'),
        ('K', 'k'),
        ('L', 'l'),
        ('M', 'm'),
        ('N', 'n'),
        ('O', 'o'),
        ('P', 'p'),
        ('Q', 'q'),
        ('R', 'r'),
        ('S', 's'),
        ('T', 't'),
        ('U', 'u'),
        ('V', 'v'),
        ('W', 'w'),
        ('X', 'x'),
        ('Y', 'y'),
        ('Z', 'z'),
    ],
};

/// The 24 letters of the modern Greek alphabet.
pub const GREEK: Alphabet = Alphabet {
    name: "greek",
    letters: &[
        ('Α', 'α'),
        ('Β', 'β'),
        ('Γ', 'γ'),
        ('Δ', 'δ'),
        ('Ε', 'ε'),
        ('Ζ', 'ζ'),
        ('Η', 'η'),
        ('Θ', 'θ'),
        ('Ι', 'ι'),
        ('Κ', 'κ'),
        ('Λ', 'λ'),
        ('Μ', 'μ'),
        ('Ν', 'ν'),
        ('Ξ', 'ξ'),
        ('Ο', 'ο'),
        ('Π', 'π'),
        ('Ρ', 'ρ'),
        ('Σ', 'σ'),
        ('Τ', 'τ'),
        ('Υ', 'υ'),
        ('Φ', 'φ'),
        ('Χ', 'χ'),
        ('Ψ', 'ψ'),
        ('Ω', 'ω'),
    ],
};

/// A bijective numeral over a fixed [`Alphabet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabetic {
    alphabet: &'static Alphabet,
    case: LetterCase,
}

impl Alphabetic {
    pub const fn new(alphabet: &'static Alphabet, case: LetterCase) -> Self {
        Self { alphabet, case }
    }

    pub fn alphabet(&self) -> &'static Alphabet {
        self.alphabet
    }

    pub fn case(&self) -> LetterCase {
        self.case
    }

    /// Decode letters of either case, most significant first.
    pub fn decode(&self, text: &str) -> Option<Ordinal> {
        if text.is_empty() || self.alphabet.is_empty() {
            return None;
        }
        let base = i32::try_from(self.alphabet.len()).ok()?;
        let mut total: i32 = 0;
        for c in text.chars() {
            let digit = i32::try_from(self.alphabet.position(c)?).ok()?;
            total = total * base + digit + 1;
            if total > i32::from(Ordinal::MAX) {
                return None;
            }
        }
        Ordinal::try_from(total).ok()
    }

    pub fn encode(&self, ordinal: Ordinal) -> String {
        self.spell(ordinal).unwrap_or_default()
    }

    fn spell(&self, ordinal: Ordinal) -> Option<String> {
        if ordinal <= 0 || self.alphabet.is_empty() {
            return None;
        }
        let base = self.alphabet.len();
        let mut remaining = usize::try_from(ordinal).ok()?;
        let mut letters = Vec::new();
        while remaining > 0 {
            letters.push(self.alphabet.letter((remaining - 1) % base, self.case)?);
            remaining = (remaining - 1) / base;
        }
        Some(letters.iter().rev().collect())
    }
}

impl fmt::Display for Alphabetic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.alphabet.name, self.case.as_str())
    }
}
