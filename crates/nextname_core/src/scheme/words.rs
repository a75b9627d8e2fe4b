//! Fixed word lists: the ordinal is a 1-based index into the list.
//!
//! ## Notes
//! - Lookup is case-insensitive and exact; `"Delta"` matches but `"Delta "` or `"del"` does not.

use std::fmt;

use super::{LetterCase, Ordinal, capitalize_first};

/// An ordered list of lowercase words.
#[derive(Debug, PartialEq, Eq)]
pub struct WordList {
    pub name: &'static str,
    pub words: &'static [&'static str],
}

impl WordList {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Return the 0-based position of `lowered`.
    pub fn position(&self, lowered: &str) -> Option<usize> {
        self.words.iter().position(|&word| word == lowered)
    }
}

/// Names of the 24 Greek letters.
pub const GREEK_LETTER_NAMES: WordList = WordList {
    name: "greek-names",
    words: &[
        "alpha",
        "beta",
        "gamma",
        "delta",
        "epsilon",
        "zeta",
        "eta",
        "theta",
        "iota",
        "kappa",
        "lambda",
        "mu",
        "nu",
        "xi",
        "omicron",
        "pi",
        "rho",
        "sigma",
        "tau",
        "upsilon",
        "phi",
        "chi",
        "psi",
        "omega",
    ],
};

/// The NATO phonetic alphabet.
pub const NATO_PHONETIC: WordList = WordList {
    name: "nato",
    words: &[
        "alpha",
        "bravo",
        "charlie",
        "delta",
        "echo",
        "foxtrot",
        "golf",
        "hotel",
        "india",
        "juliet",
        "kilo",
        "lima",
        "mike",
        "november",
        "oscar",
        "papa",
        "quebec",
        "romeo",
        "sierra",
        "tango",
        "uniform",
        "victor",
        "whiskey",
        "x-ray",
        "yankee",
        "zulu",
    ],
};

/// The pre-1956 "Able Baker" radiotelephony alphabet.
pub const LEGACY_ICAO_PHONETIC: WordList = WordList {
    name: "legacy-icao",
    words: &[
        "able",
        "baker",
        "charlie",
        "dog",
        "easy",
        "fox",
        "george",
        "how",
        "item",
        "jig",
        "king",
        "love",
        "mike",
        "nan",
        "oboe",
        "peter",
        "queen",
        "roger",
        "sugar",
        "tare",
        "uncle",
        "victor",
        "william",
        "x-ray",
        "yoke",
        "zebra",
    ],
};

/// A numbering scheme backed by a [`WordList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Words {
    list: &'static WordList,
    case: LetterCase,
}

impl Words {
    pub const fn new(list: &'static WordList, case: LetterCase) -> Self {
        Self { list, case }
    }

    pub fn list(&self) -> &'static WordList {
        self.list
    }

    pub fn case(&self) -> LetterCase {
        self.case
    }

    pub fn decode(&self, text: &str) -> Option<Ordinal> {
        let lowered = text.to_lowercase();
        let index = self.list.position(&lowered)?;
        Ordinal::try_from(index + 1).ok()
    }

    /// Return the word at `ordinal - 1`, capitalizing only its first letter for [`LetterCase::Upper`].
    pub fn encode(&self, ordinal: Ordinal) -> String {
        let Some(index) = usize::try_from(ordinal).ok().and_then(|n| n.checked_sub(1)) else {
            return String::new();
        };
        match self.list.words.get(index) {
            Some(word) => capitalize_first(word, self.case),
            None => String::new(),
        }
    }
}

impl fmt::Display for Words {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.list.name, self.case.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_sizes() {
        assert_eq!(GREEK_LETTER_NAMES.len(), 24);
        assert_eq!(NATO_PHONETIC.len(), 26);
        assert_eq!(LEGACY_ICAO_PHONETIC.len(), 26);
    }

    #[test]
    fn test_decode_case_insensitive() {
        let w = Words::new(&GREEK_LETTER_NAMES, LetterCase::Upper);
        assert_eq!(w.decode("Alpha"), Some(1));
        assert_eq!(w.decode("zeta"), Some(6));
        assert_eq!(w.decode("OMEGA"), Some(24));
    }

    #[test]
    fn test_decode_requires_exact_word() {
        let w = Words::new(&NATO_PHONETIC, LetterCase::Upper);
        assert_eq!(w.decode(""), None);
        assert_eq!(w.decode("Delta "), None);
        assert_eq!(w.decode("Delta Force"), None);
        assert_eq!(w.decode("del"), None);
    }

    #[test]
    fn test_decode_only_listed_spellings() {
        let w = Words::new(&NATO_PHONETIC, LetterCase::Lower);
        assert_eq!(w.decode("Alpha"), Some(1));
        assert_eq!(w.decode("Alfa"), None);
        assert_eq!(w.decode("juliet"), Some(10));
        assert_eq!(w.decode("juliett"), None);
        assert_eq!(w.decode("X-RAY"), Some(24));
        assert_eq!(w.decode("xray"), None);
    }

    #[test]
    fn test_decode_very_long_input() {
        let w = Words::new(&GREEK_LETTER_NAMES, LetterCase::Lower);
        assert_eq!(w.decode(&"alpha".repeat(200_000)), None);
        assert_eq!(w.decode(&"Ω".repeat(1_000_000)), None);
    }

    #[test]
    fn test_encode_capitalizes_first_letter_only() {
        let nato = Words::new(&NATO_PHONETIC, LetterCase::Upper);
        assert_eq!(nato.encode(5), "Echo");
        assert_eq!(nato.encode(24), "X-ray");
        assert_eq!(Words::new(&GREEK_LETTER_NAMES, LetterCase::Upper).encode(2), "Beta");
        assert_eq!(Words::new(&GREEK_LETTER_NAMES, LetterCase::Lower).encode(7), "eta");
        assert_eq!(Words::new(&LEGACY_ICAO_PHONETIC, LetterCase::Upper).encode(2), "Baker");
    }

    #[test]
    fn test_encode_out_of_domain_is_empty() {
        let w = Words::new(&GREEK_LETTER_NAMES, LetterCase::Lower);
        assert_eq!(w.encode(0), "");
        assert_eq!(w.encode(-3), "");
        assert_eq!(w.encode(25), "");
        assert_eq!(w.encode(24), "omega");
    }
}
