use crate::catalog::{reflector_names, rotor_names};
use crate::error::{EnigmaError, Result};
use crate::machine::Machine;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Marker that opens a configuration line.
pub const CONFIG_MARKER: &str = "*";

/// A machine key: reflector, rotors left to right, and starting positions.
///
/// Textual form: `* B III IV I AXLE`. JSON form:
/// `{"reflector":"B","rotors":["III","IV","I"],"positions":"AXLE"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub reflector: String,
    pub rotors: [String; 3],
    pub positions: String,
}

impl Settings {
    pub fn new(reflector: &str, rotors: [&str; 3], positions: &str) -> Self {
        Self {
            reflector: reflector.to_string(),
            rotors: rotors.map(str::to_string),
            positions: positions.to_string(),
        }
    }

    /// Positions as letter indices, reflector first.
    pub fn position_indices(&self) -> Result<[usize; 4]> {
        let bytes = self.positions.as_bytes();
        if bytes.len() != 4 || !bytes.iter().all(u8::is_ascii_uppercase) {
            return Err(EnigmaError::MalformedConfiguration(format!(
                "positions must be four letters A-Z, got {:?}",
                self.positions
            )));
        }
        Ok([0, 1, 2, 3].map(|i| (bytes[i] - b'A') as usize))
    }

    /// Check the key without building a machine.
    ///
    /// Besides what the machine itself checks, a key may not use the same
    /// rotor in two slots.
    pub fn validate(&self) -> Result<()> {
        self.position_indices()?;
        for (i, name) in self.rotors.iter().enumerate() {
            if self.rotors[..i].contains(name) {
                return Err(EnigmaError::DuplicateRotor(name.clone()));
            }
        }
        Ok(())
    }

    /// Build a machine set to these positions.
    pub fn machine(&self) -> Result<Machine> {
        self.validate()?;
        let [reflector_pos, left_pos, mid_pos, right_pos] = self.position_indices()?;
        let [left, mid, right] = &self.rotors;
        let mut machine = Machine::configure(&self.reflector, left, mid, right)?;
        machine.set_positions(reflector_pos, left_pos, mid_pos, right_pos)?;
        Ok(machine)
    }

    /// A random key with three distinct rotors and the reflector at 'A'.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let reflectors: Vec<&str> = reflector_names().collect();
        let reflector = reflectors.choose(rng).copied().unwrap_or("B");

        let mut rotors: Vec<&str> = rotor_names().collect();
        rotors.shuffle(rng);

        let mut positions = String::from("A");
        for _ in 0..3 {
            positions.push((b'A' + rng.gen_range(0..26u8)) as char);
        }

        Self::new(reflector, [rotors[0], rotors[1], rotors[2]], &positions)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

/// True when `line` should be read as a configuration line.
pub fn is_configuration_line(line: &str) -> bool {
    line.trim_start().starts_with(CONFIG_MARKER)
}

impl std::str::FromStr for Settings {
    type Err = EnigmaError;

    fn from_str(line: &str) -> Result<Self> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [marker, reflector, left, mid, right, positions] if *marker == CONFIG_MARKER => {
                let settings = Self::new(reflector, [*left, *mid, *right], positions);
                settings.validate()?;
                Ok(settings)
            }
            _ => Err(EnigmaError::MalformedConfiguration(line.trim().to_string())),
        }
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {}",
            CONFIG_MARKER,
            self.reflector,
            self.rotors[0],
            self.rotors[1],
            self.rotors[2],
            self.positions
        )
    }
}
