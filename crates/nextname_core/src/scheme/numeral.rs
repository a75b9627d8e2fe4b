//! Positional numerals: decimal, hexadecimal and binary.
//!
//! These are the only width-capable schemes. Decoding ignores leading zeros, so `0002` and `2` name the same
//! ordinal; encoding pads back out to the configured width.

use std::fmt;

use super::{LetterCase, Ordinal};

/// Numeric base of a [`Numeral`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Radix {
    Decimal,
    Hexadecimal,
    Binary,
}

impl Radix {
    pub fn value(self) -> u32 {
        match self {
            Radix::Decimal => 10,
            Radix::Hexadecimal => 16,
            Radix::Binary => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Radix::Decimal => "decimal",
            Radix::Hexadecimal => "hex",
            Radix::Binary => "binary",
        }
    }
}

/// A positional numeral with optional zero padding.
///
/// ## Notes
/// - `width == 0` means unpadded. A representation longer than `width` is never truncated.
/// - `padded == false` (binary `%b`) always renders the shortest form, whatever the width.
/// - `case` only affects hexadecimal digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Numeral {
    radix: Radix,
    case: LetterCase,
    padded: bool,
    width: u16,
}

impl Numeral {
    pub const fn decimal() -> Self {
        Self {
            radix: Radix::Decimal,
            case: LetterCase::Lower,
            padded: true,
            width: 0,
        }
    }

    pub const fn hexadecimal(case: LetterCase) -> Self {
        Self {
            radix: Radix::Hexadecimal,
            case,
            padded: true,
            width: 0,
        }
    }

    pub const fn binary(padded: bool) -> Self {
        Self {
            radix: Radix::Binary,
            case: LetterCase::Lower,
            padded,
            width: 0,
        }
    }

    pub fn radix(&self) -> Radix {
        self.radix
    }

    pub fn case(&self) -> LetterCase {
        self.case
    }

    pub fn is_padded(&self) -> bool {
        self.padded
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// Return a copy of this numeral with a different zero-padding width.
    pub fn with_width(self, width: u16) -> Self {
        Self { width, ..self }
    }

    /// Parse an unsigned literal in this numeral's base.
    ///
    /// Hex digits are accepted in either case. Signs, whitespace, zero and anything above
    /// [`Ordinal::MAX`] are rejected.
    pub fn decode(&self, text: &str) -> Option<Ordinal> {
        let radix = self.radix.value();
        if text.is_empty() || !text.chars().all(|c| c.is_digit(radix)) {
            return None;
        }
        Ordinal::from_str_radix(text, radix).ok().filter(|&n| n > 0)
    }

    pub fn encode(&self, ordinal: Ordinal) -> String {
        if ordinal <= 0 {
            return String::new();
        }
        let width = if self.padded { usize::from(self.width) } else { 0 };
        match (self.radix, self.case) {
            (Radix::Decimal, _) => format!("{ordinal:0width$}"),
            (Radix::Hexadecimal, LetterCase::Lower) => format!("{ordinal:0width$x}"),
            (Radix::Hexadecimal, LetterCase::Upper) => format!("{ordinal:0width$X}"),
            (Radix::Binary, _) => format!("{ordinal:0width$b}"),
        }
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.radix.as_str())?;
        match self.radix {
            Radix::Hexadecimal => write!(f, " {}", self.case.as_str())?,
            Radix::Binary if self.padded => f.write_str(" padded")?,
            _ => {}
        }
        if self.width > 0 {
            write!(f, " width={}", self.width)?;
        }
        Ok(())
    }
}
