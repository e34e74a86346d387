use crate::catalog::RotorType;
use crate::error::{EnigmaError, Result};
use crate::letter::{Letter, ALPHABET_LEN};

/// A rotating rotor: a catalog wiring turned by `position` steps.
#[derive(Debug, Clone)]
pub struct Rotor {
    kind: &'static RotorType,
    inverse: &'static [u8; 26],
    position: u8,
}

impl Rotor {
    /// Bind a rotating design at `position`.
    ///
    /// Fails with `InvalidConfiguration` for a reflector design and with
    /// `OutOfRange` when `position >= 26`.
    pub fn new(kind: &'static RotorType, position: usize) -> Result<Self> {
        let inverse = kind.inverse.ok_or_else(|| {
            EnigmaError::InvalidConfiguration(format!(
                "{} is a reflector and cannot be used as a rotor",
                kind.name
            ))
        })?;
        let mut rotor = Self {
            kind,
            inverse,
            position: 0,
        };
        rotor.set_position(position)?;
        Ok(rotor)
    }

    pub fn kind(&self) -> &'static RotorType {
        self.kind
    }

    pub fn position(&self) -> u8 {
        self.position
    }

    pub fn set_position(&mut self, position: usize) -> Result<()> {
        self.position = Letter::from_index(position)?.index();
        Ok(())
    }

    pub fn advance(&mut self) {
        self.position = (self.position + 1) % ALPHABET_LEN;
    }

    /// True when stepping from here carries the rotor to the left.
    pub fn at_notch(&self) -> bool {
        self.kind.notch_positions().any(|n| n == self.position)
    }

    /// Right-to-left substitution at the current position.
    pub fn convert_forward(&self, input: Letter) -> Letter {
        self.through(self.kind.forward, input)
    }

    /// Left-to-right substitution; inverts `convert_forward` at the same position.
    pub fn convert_backward(&self, input: Letter) -> Letter {
        self.through(self.inverse, input)
    }

    // Shift into the rotor frame, look up the wiring, shift back out.
    fn through(&self, table: &[u8; 26], input: Letter) -> Letter {
        let contact = (input.index() + self.position) % ALPHABET_LEN;
        let wired = table[contact as usize] - b'A';
        Letter::wrapping(wired + ALPHABET_LEN - self.position)
    }
}
