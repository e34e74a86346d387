use crate::error::{EnigmaError, Result};
use crate::letter::Letter;

/// Letters per output group.
pub const GROUP_SIZE: usize = 5;

/// Normalize a message line: drop whitespace, uppercase, and reject
/// anything that is not an ASCII letter.
pub fn standardize(line: &str) -> Result<Vec<Letter>> {
    line.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| Letter::from_char(c).ok_or(EnigmaError::InvalidMessage(c)))
        .collect()
}

/// Render letters in space-separated groups of five; the last group may be shorter.
pub fn group_in_fives(letters: &[Letter]) -> String {
    let mut output = String::with_capacity(letters.len() + letters.len() / GROUP_SIZE);
    for (i, letter) in letters.iter().enumerate() {
        if i > 0 && i % GROUP_SIZE == 0 {
            output.push(' ');
        }
        output.push(letter.to_char());
    }
    output
}
