use crate::error::{EnigmaError, Result};

/// Wiring of one rotor or reflector design.
///
/// `forward` is the right-to-left mapping at position 'A': its first letter
/// is where 'A' goes, its second where 'B' goes, and so on. `inverse` is the
/// left-to-right mapping and is present only for rotating rotors. `notches`
/// lists the positions showing just *before* a step at which the rotor to
/// the left is carried along.
#[derive(Debug, PartialEq, Eq)]
pub struct RotorType {
    pub name: &'static str,
    pub forward: &'static [u8; 26],
    pub inverse: Option<&'static [u8; 26]>,
    pub notches: &'static [u8],
}

/// Whether a design rotates in a rotor slot or sits fixed as a reflector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Rotor,
    Reflector,
}

impl RotorType {
    pub fn category(&self) -> Category {
        match self.inverse {
            Some(_) => Category::Rotor,
            None => Category::Reflector,
        }
    }

    pub fn is_reflector(&self) -> bool {
        self.category() == Category::Reflector
    }

    /// Notch positions as letter indices.
    pub fn notch_positions(&self) -> impl Iterator<Item = u8> + '_ {
        self.notches.iter().map(|&b| b - b'A')
    }

    /// Right-to-left wiring at position 'A', as a letter index.
    pub fn forward_at(&self, index: u8) -> u8 {
        self.forward[index as usize] - b'A'
    }

    pub fn inverse_at(&self, index: u8) -> Option<u8> {
        self.inverse.map(|table| table[index as usize] - b'A')
    }
}

/// The eight rotors and two reflectors of the modeled machine.
pub static CATALOG: [RotorType; 10] = [
    RotorType {
        name: "I",
        forward: b"EKMFLGDQVZNTOWYHXUSPAIBRCJ",
        inverse: Some(b"UWYGADFPVZBECKMTHXSLRINQOJ"),
        notches: b"Q",
    },
    RotorType {
        name: "II",
        forward: b"AJDKSIRUXBLHWTMCQGZNPYFVOE",
        inverse: Some(b"AJPCZWRLFBDKOTYUQGENHXMIVS"),
        notches: b"E",
    },
    RotorType {
        name: "III",
        forward: b"BDFHJLCPRTXVZNYEIWGAKMUSQO",
        inverse: Some(b"TAGBPCSDQEUFVNZHYIXJWLRKOM"),
        notches: b"V",
    },
    RotorType {
        name: "IV",
        forward: b"ESOVPZJAYQUIRHXLNFTGKDCMWB",
        inverse: Some(b"HZWVARTNLGUPXQCEJMBSKDYOIF"),
        notches: b"J",
    },
    RotorType {
        name: "V",
        forward: b"VZBRGITYUPSDNHLXAWMJQOFECK",
        inverse: Some(b"QCYLXWENFTZOSMVJUDKGIARPHB"),
        notches: b"Z",
    },
    RotorType {
        name: "VI",
        forward: b"JPGVOUMFYQBENHZRDKASXLICTW",
        inverse: Some(b"SKXQLHCNWARVGMEBJPTYFDZUIO"),
        notches: b"ZM",
    },
    RotorType {
        name: "VII",
        forward: b"NZJHGRCXMYSWBOUFAIVLPEKQDT",
        inverse: Some(b"QMGYVPEDRCWTIANUXFKZOSLHJB"),
        notches: b"ZM",
    },
    RotorType {
        name: "VIII",
        forward: b"FKQHTLXOCBJSPDZRAMEWNIUYGV",
        inverse: Some(b"QJINSAYDVKBFRUHMCPLEWZTGXO"),
        notches: b"ZM",
    },
    RotorType {
        name: "B",
        forward: b"YRUHQSLDPXNGOKMIEBFZCWVJAT",
        inverse: None,
        notches: b"",
    },
    RotorType {
        name: "C",
        forward: b"FVPJIAOYEDRZXWGCTKUQSBNMHL",
        inverse: None,
        notches: b"",
    },
];

/// Look up a rotor or reflector design by its name ("I".."VIII", "B", "C").
pub fn rotor_type(name: &str) -> Result<&'static RotorType> {
    CATALOG
        .iter()
        .find(|t| t.name == name)
        .ok_or_else(|| EnigmaError::InvalidConfiguration(format!("unknown rotor type {}", name)))
}

/// Names of all rotating rotor designs, in catalog order.
pub fn rotor_names() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().filter(|t| !t.is_reflector()).map(|t| t.name)
}

/// Names of all reflector designs, in catalog order.
pub fn reflector_names() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().filter(|t| t.is_reflector()).map(|t| t.name)
}
