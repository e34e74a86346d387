use crate::error::{EnigmaError, Result};
use std::fmt;

/// Number of letters on every rotor.
pub const ALPHABET_LEN: u8 = 26;

/// A letter index in `0..26`, where 0 is 'A'.
///
/// Every value of this type is in range, so the conversion arithmetic in
/// the rotors never has to revalidate its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Build a letter from its index, failing when `index >= 26`.
    pub fn from_index(index: usize) -> Result<Self> {
        if index < ALPHABET_LEN as usize {
            Ok(Self(index as u8))
        } else {
            Err(EnigmaError::OutOfRange(index))
        }
    }

    /// Build a letter from an ASCII letter of either case.
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Self(c.to_ascii_uppercase() as u8 - b'A'))
        } else {
            None
        }
    }

    /// Index of a value already reduced modulo 26.
    pub(crate) fn wrapping(index: u8) -> Self {
        Self(index % ALPHABET_LEN)
    }

    pub fn index(self) -> u8 {
        self.0
    }

    pub fn to_char(self) -> char {
        (b'A' + self.0) as char
    }

    /// Iterate over 'A'..='Z'.
    pub fn all() -> impl Iterator<Item = Letter> {
        (0..ALPHABET_LEN).map(Letter)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Convert a string of ASCII letters to letters, `None` on any other character.
pub fn letters(text: &str) -> Option<Vec<Letter>> {
    text.chars().map(Letter::from_char).collect()
}

/// Render letters as an uppercase string.
pub fn to_string(letters: &[Letter]) -> String {
    letters.iter().map(|l| l.to_char()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_conversions() {
        assert_eq!(Letter::from_char('A').unwrap().index(), 0);
        assert_eq!(Letter::from_char('B').unwrap().index(), 1);
        assert_eq!(Letter::from_char('Z').unwrap().index(), 25);
        assert_eq!(Letter::from_char('z').unwrap().index(), 25);
        assert_eq!(Letter::from_index(0).unwrap().to_char(), 'A');
        assert_eq!(Letter::from_index(25).unwrap().to_char(), 'Z');
    }

    #[test]
    fn test_rejects_non_letters() {
        assert!(Letter::from_char('1').is_none());
        assert!(Letter::from_char(' ').is_none());
        assert!(Letter::from_char('é').is_none());
    }

    #[test]
    fn test_from_index_out_of_range() {
        assert!(matches!(
            Letter::from_index(26),
            Err(EnigmaError::OutOfRange(26))
        ));
    }

    #[test]
    fn test_wrapping() {
        assert_eq!(Letter::wrapping(27).index(), 1);
        assert_eq!(Letter::wrapping(25).index(), 25);
    }

    #[test]
    fn test_letters_roundtrip_text() {
        let parsed = letters("Hello").unwrap();
        assert_eq!(to_string(&parsed), "HELLO");
        assert!(letters("no spaces").is_none());
        assert_eq!(Letter::all().count(), 26);
    }
}
