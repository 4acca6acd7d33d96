//! Card codes.
//!
//! Every card is keyed by its state letter followed by a two-digit city
//! index: `A01` is the first city of state A, `H04` the fourth of state H.
//! Codes are assigned at registration and never change.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::TrumpError;

/// Three-character card identifier (`A01`).
///
/// Ordering is group-major, which matches registration order. Serialized
/// as its display form and parsed back through `FromStr`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CardCode {
    group: char,
    index: u8,
}

impl CardCode {
    /// Highest city index representable with two digits.
    pub const MAX_INDEX: u8 = 99;

    /// Create a code from a state letter and a 1-based city index.
    ///
    /// Panics if `group` is not an ASCII letter or `index` is outside 1..=99.
    #[must_use]
    pub fn new(group: char, index: u8) -> Self {
        assert!(group.is_ascii_alphabetic(), "Group must be an ASCII letter");
        assert!(
            (1..=Self::MAX_INDEX).contains(&index),
            "City index must be in 1..=99"
        );
        Self {
            group: group.to_ascii_uppercase(),
            index,
        }
    }

    /// The state letter (always uppercase).
    #[must_use]
    pub const fn group(self) -> char {
        self.group
    }

    /// The 1-based city index within the state.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.index
    }
}

impl std::fmt::Display for CardCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{:02}", self.group, self.index)
    }
}

impl FromStr for CardCode {
    type Err = TrumpError;

    /// Parse `"A01"`-style input. Surrounding whitespace is ignored and the
    /// letter may be lowercase.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TrumpError::InvalidCode {
            input: s.trim().to_string(),
        };

        let bytes = s.trim().as_bytes();
        let [letter, tens, ones] = bytes else {
            return Err(invalid());
        };
        if !letter.is_ascii_alphabetic() || !tens.is_ascii_digit() || !ones.is_ascii_digit() {
            return Err(invalid());
        }

        let index = (tens - b'0') * 10 + (ones - b'0');
        if index == 0 {
            return Err(invalid());
        }

        Ok(Self::new(char::from(*letter), index))
    }
}

impl TryFrom<String> for CardCode {
    type Error = TrumpError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CardCode> for String {
    fn from(code: CardCode) -> Self {
        code.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_pads_index() {
        assert_eq!(CardCode::new('A', 1).to_string(), "A01");
        assert_eq!(CardCode::new('h', 4).to_string(), "H04");
        assert_eq!(CardCode::new('Z', 99).to_string(), "Z99");
    }

    #[test]
    fn test_parse() {
        let code: CardCode = "B03".parse().unwrap();
        assert_eq!(code.group(), 'B');
        assert_eq!(code.index(), 3);

        let code: CardCode = "  c12\n".parse().unwrap();
        assert_eq!(code, CardCode::new('C', 12));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for input in ["", "A1", "A001", "1A1", "AA1", "A0", "A00", "Ä01", "A-1"] {
            let err = input.parse::<CardCode>().unwrap_err();
            assert!(
                matches!(err, TrumpError::InvalidCode { .. }),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_ordering_is_group_major() {
        let mut codes = vec![
            CardCode::new('B', 1),
            CardCode::new('A', 4),
            CardCode::new('A', 2),
        ];
        codes.sort();
        assert_eq!(
            codes,
            vec![CardCode::new('A', 2), CardCode::new('A', 4), CardCode::new('B', 1)]
        );
    }

    #[test]
    fn test_serializes_as_display_form() {
        let json = serde_json::to_string(&CardCode::new('b', 7)).unwrap();
        assert_eq!(json, r#""B07""#);

        let code: CardCode = serde_json::from_str(r#""c12""#).unwrap();
        assert_eq!(code, CardCode::new('C', 12));
    }

    #[test]
    fn test_deserialize_rejects_invalid_codes() {
        let inputs = [
            r#"{"group":"a","index":0}"#,
            r#""A00""#,
            r#""1A1""#,
            r#""""#,
            "42",
        ];
        for json in inputs {
            assert!(
                serde_json::from_str::<CardCode>(json).is_err(),
                "{json} should be rejected"
            );
        }
    }

    #[test]
    #[should_panic(expected = "City index must be in 1..=99")]
    fn test_zero_index_panics() {
        let _ = CardCode::new('A', 0);
    }
}
