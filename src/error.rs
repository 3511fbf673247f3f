//! Error types for the Enigma library.

use thiserror::Error;

use crate::rotor::RotorType;

/// Errors produced by the Enigma library.
///
/// Every failure is deterministic for a given input, so recovery is always
/// a matter of the caller supplying a corrected configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnigmaError {
    /// A rotor of this type is already fitted to the machine.
    #[error("Rotor {0} is already fitted to the machine")]
    DuplicateRotorType(RotorType),

    /// The machine already holds the maximum number of rotors.
    #[error("A machine holds at most {0} rotors")]
    TooManyRotors(usize),

    /// Plugboard specification was rejected.
    ///
    /// Covers malformed pair syntax, non-alphabetic characters, a pair
    /// with a repeated letter and a letter wired into more than one pair.
    #[error("Invalid plugboard settings: {0}")]
    InvalidPlugboardSpec(String),

    /// Encoding was attempted on an incomplete machine.
    #[error("Invalid rotor or reflector configuration ({rotors} rotors, reflector {})", reflector_state(.reflector))]
    InvalidMachineConfiguration {
        /// Number of rotors fitted at the time of the call.
        rotors: usize,
        /// Whether a reflector was selected.
        reflector: bool,
    },

    /// Rotor start position is not an uppercase letter.
    #[error("Rotor position '{0}' is not a letter A-Z")]
    InvalidPosition(char),

    /// Ring setting is neither a letter nor a number.
    #[error("Ring setting '{0}' is not a letter or number")]
    InvalidRingSetting(String),

    /// Character outside the machine alphabet was fed to the encoder.
    #[error("Character '{0}' cannot be encoded, only A-Z are accepted")]
    InvalidCharacter(char),

    /// Rotor name not recognized.
    #[error("Unknown rotor type: {0}")]
    UnknownRotorType(String),

    /// Reflector name not recognized.
    #[error("Unknown reflector type: {0}")]
    UnknownReflectorType(String),

    /// Settings string is structurally invalid.
    #[error("Invalid configuration settings: {0}")]
    InvalidSettings(String),
}

fn reflector_state(selected: &bool) -> &'static str {
    if *selected {
        "selected"
    } else {
        "missing"
    }
}
