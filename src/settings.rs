//! Textual machine settings.
//!
//! A settings string lists, comma separated, the plugboard pairs, the
//! reflector and then a `type,position,ring` triple per rotor from left
//! to right:
//!
//! ```text
//! AV;BS;CG;DL;FU;HZ;IN;KM;OW;RX,B,II,L,B,IV,S,U,V,D,L
//! ```
//!
//! Rings may be letters or numbers (`13` is `M`). Empty position and ring
//! fields mean `A`.

use std::fmt;
use std::str::FromStr;

use crate::error::EnigmaError;
use crate::machine::{Machine, MIN_ROTORS};
use crate::plugboard::Plugboard;
use crate::reflector::ReflectorType;
use crate::rotor::{RingSetting, RotorType};

/// Fields before the first rotor triple (plugboard, reflector).
const HEADER_FIELDS: usize = 2;

/// Fields per rotor (type, position, ring).
const ROTOR_FIELDS: usize = 3;

/// Settings of a single rotor slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotorSetting {
    pub rotor_type: RotorType,
    pub position: char,
    pub ring: RingSetting,
}

/// Parsed form of a settings string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineSettings {
    /// Plugboard pairs in canonical `AB;CD` form, empty for none.
    pub plugboard: String,
    pub reflector: ReflectorType,
    /// Rotor slots, left to right.
    pub rotors: Vec<RotorSetting>,
}

impl MachineSettings {
    /// Builds a machine configured with these settings.
    ///
    /// # Errors
    /// Any error from [`Machine::add_rotor`] or [`Machine::set_plugboard`],
    /// e.g. [`EnigmaError::DuplicateRotorType`] when a type is listed twice.
    pub fn build(&self) -> Result<Machine, EnigmaError> {
        let mut machine = Machine::new();
        machine.set_plugboard(&self.plugboard)?;
        machine.set_reflector(self.reflector);
        for rotor in &self.rotors {
            machine.add_rotor(rotor.rotor_type, rotor.position, rotor.ring)?;
        }
        Ok(machine)
    }
}

impl FromStr for MachineSettings {
    type Err = EnigmaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(',').map(str::trim).collect();
        let min_fields = HEADER_FIELDS + MIN_ROTORS * ROTOR_FIELDS;
        if fields.len() < min_fields || (fields.len() - HEADER_FIELDS) % ROTOR_FIELDS != 0 {
            return Err(EnigmaError::InvalidSettings(format!(
                "expected plugboard, reflector and {} or more type,position,ring triples, got {} fields",
                MIN_ROTORS,
                fields.len()
            )));
        }

        let mut plugboard = Plugboard::new();
        plugboard.set_connections(fields[0])?;
        let reflector = fields[1].parse::<ReflectorType>()?;

        let rotors = fields[HEADER_FIELDS..]
            .chunks(ROTOR_FIELDS)
            .map(parse_rotor)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(MachineSettings {
            plugboard: plugboard.to_string(),
            reflector,
            rotors,
        })
    }
}

/// Renders the canonical settings string, rings as letters.
impl fmt::Display for MachineSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.plugboard, self.reflector)?;
        for rotor in &self.rotors {
            write!(f, ",{},{},{}", rotor.rotor_type, rotor.position, rotor.ring)?;
        }
        Ok(())
    }
}

fn parse_rotor(triple: &[&str]) -> Result<RotorSetting, EnigmaError> {
    let rotor_type = triple[0].parse::<RotorType>()?;
    let position = match triple[1].chars().next() {
        None => 'A',
        Some(c) if c.is_ascii_alphabetic() => c.to_ascii_uppercase(),
        Some(c) => return Err(EnigmaError::InvalidPosition(c)),
    };
    let ring = triple[2].parse::<RingSetting>()?;
    Ok(RotorSetting {
        rotor_type,
        position,
        ring,
    })
}

impl Machine {
    /// Builds a machine from a settings string.
    ///
    /// # Errors
    /// [`EnigmaError::InvalidSettings`] for a malformed field list, or the
    /// error of the offending field (unknown names, bad plugboard, bad
    /// position, duplicate rotor).
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Machine;
    ///
    /// let mut machine = Machine::from_settings(",B,I,A,A,II,A,A,III,A,A").unwrap();
    /// assert_eq!(machine.encode_str("AAAAA").unwrap(), "BDZGO");
    /// ```
    pub fn from_settings(settings: &str) -> Result<Machine, EnigmaError> {
        settings.parse::<MachineSettings>()?.build()
    }
}
