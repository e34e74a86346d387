use crate::catalog::rotor_type;
use crate::error::Result;
use crate::letter::Letter;
use crate::reflector::Reflector;
use crate::rotor::Rotor;

/// A reflector and three rotors, ordered left to right.
///
/// Signals enter at the right rotor, bounce off the reflector and come back
/// out through the same three rotors. Positions carry over from one call to
/// `encode` to the next.
#[derive(Debug, Clone)]
pub struct Machine {
    reflector: Reflector,
    left: Rotor,
    mid: Rotor,
    right: Rotor,
}

impl Machine {
    /// Build a machine from catalog names with every position at 'A'.
    ///
    /// Only the category of each slot is checked here; rejecting the same
    /// rotor in two slots is left to the caller.
    pub fn configure(reflector: &str, left: &str, mid: &str, right: &str) -> Result<Self> {
        Ok(Self {
            reflector: Reflector::new(rotor_type(reflector)?, 0)?,
            left: Rotor::new(rotor_type(left)?, 0)?,
            mid: Rotor::new(rotor_type(mid)?, 0)?,
            right: Rotor::new(rotor_type(right)?, 0)?,
        })
    }

    /// Assemble a machine from already constructed elements.
    pub fn from_parts(reflector: Reflector, left: Rotor, mid: Rotor, right: Rotor) -> Self {
        Self {
            reflector,
            left,
            mid,
            right,
        }
    }

    /// Set the four positions, reflector first. Nothing changes on error.
    pub fn set_positions(
        &mut self,
        reflector: usize,
        left: usize,
        mid: usize,
        right: usize,
    ) -> Result<()> {
        Reflector::check_position(reflector)?;
        let mut next = [self.left.clone(), self.mid.clone(), self.right.clone()];
        for (rotor, position) in next.iter_mut().zip([left, mid, right]) {
            rotor.set_position(position)?;
        }
        let [l, m, r] = next;
        self.left = l;
        self.mid = m;
        self.right = r;
        Ok(())
    }

    /// Current positions as `[reflector, left, mid, right]`.
    pub fn positions(&self) -> [u8; 4] {
        [
            self.reflector.position(),
            self.left.position(),
            self.mid.position(),
            self.right.position(),
        ]
    }

    /// Names of the installed designs as `[reflector, left, mid, right]`.
    pub fn rotor_names(&self) -> [&'static str; 4] {
        [
            self.reflector.kind().name,
            self.left.kind().name,
            self.mid.kind().name,
            self.right.kind().name,
        ]
    }

    /// Advance the rotors once, including the double-step of the middle rotor.
    pub fn step(&mut self) {
        if self.mid.at_notch() {
            self.left.advance();
            self.mid.advance();
        } else if self.right.at_notch() {
            self.mid.advance();
        }
        self.right.advance();
    }

    /// Step, then send one letter through the seven substitutions.
    pub fn encode_char(&mut self, input: Letter) -> Letter {
        self.step();
        let c = self.right.convert_forward(input);
        let c = self.mid.convert_forward(c);
        let c = self.left.convert_forward(c);
        let c = self.reflector.convert_forward(c);
        let c = self.left.convert_backward(c);
        let c = self.mid.convert_backward(c);
        self.right.convert_backward(c)
    }

    pub fn encode(&mut self, input: &[Letter]) -> Vec<Letter> {
        input.iter().map(|&c| self.encode_char(c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EnigmaError;
    use crate::letter::{letters, to_string};

    fn machine(names: [&str; 4], positions: [usize; 4]) -> Machine {
        let mut m = Machine::configure(names[0], names[1], names[2], names[3]).unwrap();
        m.set_positions(positions[0], positions[1], positions[2], positions[3])
            .unwrap();
        m
    }

    #[test]
    fn test_positions_after_configure() {
        // "AXEL"
        let m = machine(["B", "II", "III", "IV"], [0, 23, 4, 11]);
        assert_eq!(m.positions(), [0, 23, 4, 11]);
        assert_eq!(m.rotor_names(), ["B", "II", "III", "IV"]);
    }

    #[test]
    fn test_encode_known_message() {
        // "AXLE"
        let mut m = machine(["B", "III", "IV", "I"], [0, 23, 11, 4]);
        let out = m.encode(&letters("FROMH").unwrap());
        assert_eq!(to_string(&out), "HYIHL");
    }

    #[test]
    fn test_state_carries_across_calls() {
        let mut whole = machine(["B", "III", "IV", "I"], [0, 23, 11, 4]);
        let expected = whole.encode(&letters("FROMHISSHOULDER").unwrap());

        let mut split = machine(["B", "III", "IV", "I"], [0, 23, 11, 4]);
        let mut out = split.encode(&letters("FROMH").unwrap());
        out.extend(split.encode(&letters("ISSHOULDER").unwrap()));
        assert_eq!(out, expected);
    }

    #[test]
    fn test_reciprocal() {
        let mut enc = machine(["C", "VI", "I", "VIII"], [0, 3, 12, 25]);
        let plain = letters("ATTACKATDAWN").unwrap();
        let cipher = enc.encode(&plain);
        assert_ne!(cipher, plain);

        let mut dec = machine(["C", "VI", "I", "VIII"], [0, 3, 12, 25]);
        assert_eq!(dec.encode(&cipher), plain);
    }

    #[test]
    fn test_only_right_rotor_moves_away_from_notches() {
        // III at A, II at D (notch E), I at C (notch Q)
        let mut m = machine(["B", "III", "II", "I"], [0, 0, 3, 2]);
        m.step();
        assert_eq!(m.positions(), [0, 0, 3, 3]);
    }

    #[test]
    fn test_double_step() {
        // I II III at ADU: ADV, AEW, BFX
        let mut m = machine(["B", "I", "II", "III"], [0, 0, 3, 20]);
        m.step();
        assert_eq!(m.positions(), [0, 0, 3, 21]);
        m.step();
        assert_eq!(m.positions(), [0, 0, 4, 22]);
        m.step();
        assert_eq!(m.positions(), [0, 1, 5, 23]);
        m.step();
        assert_eq!(m.positions(), [0, 1, 5, 24]);
    }

    #[test]
    fn test_right_rotor_wraps_and_carries() {
        // V notch at Z
        let mut m = machine(["B", "I", "II", "V"], [0, 0, 0, 25]);
        m.step();
        assert_eq!(m.positions(), [0, 0, 1, 0]);
    }

    #[test]
    fn test_never_encodes_letter_to_itself() {
        let mut m = machine(["B", "I", "II", "III"], [0, 0, 0, 0]);
        let plain = vec![Letter::from_index(0).unwrap(); 500];
        assert!(m.encode(&plain).iter().all(|&c| c != plain[0]));
    }

    #[test]
    fn test_configure_rejects_wrong_categories() {
        assert!(matches!(
            Machine::configure("I", "II", "III", "IV"),
            Err(EnigmaError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            Machine::configure("B", "II", "C", "IV"),
            Err(EnigmaError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            Machine::configure("B", "II", "III", "XI"),
            Err(EnigmaError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_duplicate_rotors_are_allowed_by_core() {
        assert!(Machine::configure("B", "II", "II", "II").is_ok());
    }

    #[test]
    fn test_set_positions_errors_leave_state_untouched() {
        let mut m = machine(["B", "II", "III", "IV"], [0, 1, 2, 3]);
        assert!(matches!(
            m.set_positions(1, 0, 0, 0),
            Err(EnigmaError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            m.set_positions(0, 5, 6, 26),
            Err(EnigmaError::OutOfRange(26))
        ));
        assert_eq!(m.positions(), [0, 1, 2, 3]);
    }

    #[test]
    fn test_from_parts() {
        let m = Machine::from_parts(
            Reflector::new(rotor_type("C").unwrap(), 0).unwrap(),
            Rotor::new(rotor_type("I").unwrap(), 1).unwrap(),
            Rotor::new(rotor_type("II").unwrap(), 2).unwrap(),
            Rotor::new(rotor_type("III").unwrap(), 3).unwrap(),
        );
        assert_eq!(m.positions(), [0, 1, 2, 3]);
    }
}
