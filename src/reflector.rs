//! Reflector (Umkehrwalze): the fixed turnaround wheel.
//!
//! Sends the signal back through the rotors along a different path. Its
//! wiring is an involution without fixed points, which is what makes the
//! whole machine self-inverse.

use std::fmt;
use std::str::FromStr;

use crate::alphabet::{self, LETTERS};
use crate::error::EnigmaError;

/// The reflector variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectorType {
    A,
    B,
    C,
    /// Thin B reflector of the M4, paired with a thin rotor.
    BThin,
    /// Thin C reflector of the M4, paired with a thin rotor.
    CThin,
}

impl ReflectorType {
    /// Every reflector variant.
    pub const ALL: [ReflectorType; 5] = [
        ReflectorType::A,
        ReflectorType::B,
        ReflectorType::C,
        ReflectorType::BThin,
        ReflectorType::CThin,
    ];

    /// Wiring permutation of this variant.
    pub const fn wiring(self) -> &'static str {
        match self {
            ReflectorType::A => "EJMZALYXVBWFCRQUONTSPIKHGD",
            ReflectorType::B => "YRUHQSLDPXNGOKMIEBFZCWVJAT",
            ReflectorType::C => "FVPJIAOYEDRZXWGCTKUQSBNMHL",
            ReflectorType::BThin => "ENKQAUYWJICOPBLMDXZVFTHRGS",
            ReflectorType::CThin => "RDOBJNTKVEHMLFCWZAXGYIPSUQ",
        }
    }

    /// Canonical name, as used in settings strings.
    pub const fn name(self) -> &'static str {
        match self {
            ReflectorType::A => "A",
            ReflectorType::B => "B",
            ReflectorType::C => "C",
            ReflectorType::BThin => "BThin",
            ReflectorType::CThin => "CThin",
        }
    }
}

impl fmt::Display for ReflectorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReflectorType {
    type Err = EnigmaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        ReflectorType::ALL
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| EnigmaError::UnknownReflectorType(name.to_string()))
    }
}

/// A selected reflector with its precomputed offset table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
    reflector_type: ReflectorType,
    table: [u8; LETTERS],
}

impl Reflector {
    /// Builds the reflector of the given type.
    pub fn new(reflector_type: ReflectorType) -> Self {
        Reflector {
            reflector_type,
            table: alphabet::offset_table(reflector_type.wiring()),
        }
    }

    /// Returns the variant of this reflector.
    pub fn reflector_type(&self) -> ReflectorType {
        self.reflector_type
    }

    /// Reflects contact `pos` (`0..26`) onto its partner contact.
    pub fn reflect(&self, pos: usize) -> usize {
        (pos + self.table[pos] as usize) % LETTERS
    }
}

impl From<ReflectorType> for Reflector {
    fn from(reflector_type: ReflectorType) -> Self {
        Reflector::new(reflector_type)
    }
}
