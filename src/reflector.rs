use crate::catalog::RotorType;
use crate::error::{EnigmaError, Result};
use crate::letter::Letter;

/// The fixed reflector at the left end of the stack.
///
/// It never turns, so it has no position to change and no backward path;
/// its only operation is the forward lookup.
#[derive(Debug, Clone)]
pub struct Reflector {
    kind: &'static RotorType,
}

impl Reflector {
    /// Bind a reflector design. The only accepted position is 0 ('A').
    pub fn new(kind: &'static RotorType, position: usize) -> Result<Self> {
        if !kind.is_reflector() {
            return Err(EnigmaError::InvalidConfiguration(format!(
                "{} is a rotor and cannot be used as a reflector",
                kind.name
            )));
        }
        Self::check_position(position)?;
        Ok(Self { kind })
    }

    pub(crate) fn check_position(position: usize) -> Result<()> {
        if position != 0 {
            return Err(EnigmaError::InvalidConfiguration(format!(
                "reflector position must be A, got {}",
                position
            )));
        }
        Ok(())
    }

    pub fn kind(&self) -> &'static RotorType {
        self.kind
    }

    pub fn position(&self) -> u8 {
        0
    }

    pub fn convert_forward(&self, input: Letter) -> Letter {
        Letter::wrapping(self.kind.forward_at(input.index()))
    }
}
