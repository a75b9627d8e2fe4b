//! Roman numerals.
//!
//! Encoding covers `1..=3999` using the standard subtractive pairs. Decoding is deliberately lenient: any string of
//! Roman symbols is read with a single "subtract if smaller than the next symbol" pass, so non-canonical spellings
//! such as `IIII` or `IC` still map to a value. Names already in use may have been typed by hand.

use std::fmt;

use super::{LetterCase, Ordinal};

/// Largest ordinal with a Roman representation.
pub const ROMAN_MAX: Ordinal = 3999;

/// Greedy encoding table, largest value first.
const TO_ROMAN: &[(Ordinal, &str)] = &[
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

fn symbol_value(c: char) -> Option<i32> {
    match c {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Roman {
    case: LetterCase,
}

impl Roman {
    pub const fn new(case: LetterCase) -> Self {
        Self { case }
    }

    pub fn case(&self) -> LetterCase {
        self.case
    }

    /// Decode Roman symbols of either case.
    ///
    /// Every non-empty tail of a symbol string has a positive value, so the running total never has to come back
    /// down past [`Ordinal::MAX`]: decoding stops with `None` as soon as it is exceeded.
    pub fn decode(&self, text: &str) -> Option<Ordinal> {
        let mut symbols = text.chars().map(|c| symbol_value(c.to_ascii_uppercase())).peekable();
        let mut total: i32 = 0;

        while let Some(value) = symbols.next() {
            let value = value?;
            total = match symbols.peek() {
                Some(&Some(next)) if value < next => total.checked_sub(value)?,
                _ => total.checked_add(value)?,
            };
            if total > i32::from(Ordinal::MAX) {
                return None;
            }
        }

        Ordinal::try_from(total).ok().filter(|&n| n > 0)
    }

    pub fn encode(&self, ordinal: Ordinal) -> String {
        if !(1..=ROMAN_MAX).contains(&ordinal) {
            return String::new();
        }
        let mut remaining = ordinal;
        let mut out = String::new();
        for &(value, symbol) in TO_ROMAN {
            while remaining >= value {
                out.push_str(symbol);
                remaining -= value;
            }
        }
        match self.case {
            LetterCase::Upper => out,
            LetterCase::Lower => out.to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for Roman {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "roman {}", self.case.as_str())
    }
}
