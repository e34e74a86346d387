//! Enigma - three-rotor cipher machine simulator
//!
//! Models the signal path of the Enigma I: one fixed reflector and three
//! rotors that together form a reciprocal substitution whose alphabet
//! changes after every letter.
//!
//! ## Signal Path
//!
//! ```text
//! Input → Right → Middle → Left → Reflector → Left⁻¹ → Middle⁻¹ → Right⁻¹ → Output
//! ```
//!
//! Before each letter the rotors step: the right rotor always, the middle
//! rotor when the right one sits at its notch, and the middle and left
//! rotors together when the middle one sits at its own notch (the
//! double-step).
//!
//! ## Example
//!
//! ```
//! use enigma::letter::{letters, to_string};
//! use enigma::Machine;
//!
//! let mut machine = Machine::configure("B", "III", "IV", "I").unwrap();
//! machine.set_positions(0, 23, 11, 4).unwrap(); // AXLE
//!
//! let cipher = machine.encode(&letters("FROMH").unwrap());
//! assert_eq!(to_string(&cipher), "HYIHL");
//! ```
//!
//! The [`settings`] and [`cli`] modules provide the textual layer on top:
//! configuration lines such as `* B III IV I AXLE`, message normalization
//! and output in groups of five.

pub mod catalog;
pub mod cli;
pub mod error;
pub mod letter;
pub mod machine;
pub mod reflector;
pub mod rotor;
pub mod settings;

pub use catalog::{rotor_type, RotorType};
pub use error::{EnigmaError, Result};
pub use letter::Letter;
pub use machine::Machine;
pub use reflector::Reflector;
pub use rotor::Rotor;
pub use settings::Settings;
