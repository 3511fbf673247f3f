//! Rotor: the stepping substitution wheel of the machine.
//!
//! A rotor scrambles the contact position passing through it according to
//! a fixed wiring, shifted by its current rotation and its ring setting.
//! The wiring is baked into [`RotorType`]; a [`Rotor`] is one fitted
//! instance of a type with its own start position and ring.

use std::fmt;
use std::str::FromStr;

use crate::alphabet::{self, LETTERS};
use crate::error::EnigmaError;

/// Static data of a rotor variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotorSpec {
    /// Wiring permutation, entry `i` is the letter contact `i` is wired to.
    pub wiring: &'static str,
    /// Letters at which this rotor carries into its left neighbour.
    pub turnovers: &'static str,
}

/// The rotor variants of the Wehrmacht and Kriegsmarine machines.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotorType {
    I,
    II,
    III,
    IV,
    V,
    VI,
    VII,
    VIII,
    /// Thin rotor for the fixed leftmost slot of the M4.
    Beta,
    /// Thin rotor for the fixed leftmost slot of the M4.
    Gamma,
}

impl RotorType {
    /// Every rotor variant, in catalogue order.
    pub const ALL: [RotorType; 10] = [
        RotorType::I,
        RotorType::II,
        RotorType::III,
        RotorType::IV,
        RotorType::V,
        RotorType::VI,
        RotorType::VII,
        RotorType::VIII,
        RotorType::Beta,
        RotorType::Gamma,
    ];

    /// Returns the static wiring and turnover data of this variant.
    pub fn spec(self) -> &'static RotorSpec {
        match self {
            RotorType::I => &RotorSpec {
                wiring: "EKMFLGDQVZNTOWYHXUSPAIBRCJ",
                turnovers: "Q",
            },
            RotorType::II => &RotorSpec {
                wiring: "AJDKSIRUXBLHWTMCQGZNPYFVOE",
                turnovers: "E",
            },
            RotorType::III => &RotorSpec {
                wiring: "BDFHJLCPRTXVZNYEIWGAKMUSQO",
                turnovers: "V",
            },
            RotorType::IV => &RotorSpec {
                wiring: "ESOVPZJAYQUIRHXLNFTGKDCMWB",
                turnovers: "J",
            },
            RotorType::V => &RotorSpec {
                wiring: "VZBRGITYUPSDNHLXAWMJQOFECK",
                turnovers: "Z",
            },
            RotorType::VI => &RotorSpec {
                wiring: "JPGVOUMFYQBENHZRDKASXLICTW",
                turnovers: "ZM",
            },
            RotorType::VII => &RotorSpec {
                wiring: "NZJHGRCXMYSWBOUFAIVLPEKQDT",
                turnovers: "ZM",
            },
            RotorType::VIII => &RotorSpec {
                wiring: "FKQHTLXOCBJSPDZRAMEWNIUYGV",
                turnovers: "ZM",
            },
            RotorType::Beta => &RotorSpec {
                wiring: "LEYJVCNIXWPBQMDRTAKZGFUHOS",
                turnovers: "",
            },
            RotorType::Gamma => &RotorSpec {
                wiring: "FSOKANUERHMBTIYCWLQPZXVGJD",
                turnovers: "",
            },
        }
    }

    /// Canonical name, as used in settings strings.
    pub const fn name(self) -> &'static str {
        match self {
            RotorType::I => "I",
            RotorType::II => "II",
            RotorType::III => "III",
            RotorType::IV => "IV",
            RotorType::V => "V",
            RotorType::VI => "VI",
            RotorType::VII => "VII",
            RotorType::VIII => "VIII",
            RotorType::Beta => "Beta",
            RotorType::Gamma => "Gamma",
        }
    }
}

impl fmt::Display for RotorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RotorType {
    type Err = EnigmaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        RotorType::ALL
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| EnigmaError::UnknownRotorType(name.to_string()))
    }
}

/// Ring setting (Ringstellung) of a rotor.
///
/// Stored as a zero-based offset: ring `A` (number 1) is offset 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RingSetting(u8);

impl RingSetting {
    /// Ring `A` / 1, the neutral setting.
    pub const A: RingSetting = RingSetting(0);

    /// Creates a ring setting from a letter (`A` = 1), case-insensitive.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidRingSetting`] if `c` is not a letter A-Z.
    pub fn from_letter(c: char) -> Result<Self, EnigmaError> {
        alphabet::position_of(c.to_ascii_uppercase())
            .map(|p| RingSetting(p as u8))
            .ok_or_else(|| EnigmaError::InvalidRingSetting(c.to_string()))
    }

    /// Creates a ring setting from its number `1..=26`.
    ///
    /// Numbers outside `1..=26` fall back to ring `A`.
    pub fn from_number(n: u32) -> Self {
        if (1..=LETTERS as u32).contains(&n) {
            RingSetting((n - 1) as u8)
        } else {
            RingSetting::A
        }
    }

    /// Zero-based offset applied to the wiring.
    pub fn offset(self) -> usize {
        self.0 as usize
    }

    /// Ring letter (`A` for offset 0).
    pub fn letter(self) -> char {
        alphabet::letter_at(self.offset())
    }

    /// Ring number (`1` for offset 0).
    pub fn number(self) -> u32 {
        self.0 as u32 + 1
    }
}

impl fmt::Display for RingSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Parses a ring given as a letter or as a number.
///
/// An empty string is ring `A`. A string starting with a digit is read as
/// a number and anything that is not a number in `1..=26` falls back to
/// ring `A`. Otherwise the first character must be a letter.
impl FromStr for RingSetting {
    type Err = EnigmaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.chars().next() {
            None => Ok(RingSetting::A),
            Some(c) if c.is_ascii_digit() => Ok(s
                .parse::<u32>()
                .map(RingSetting::from_number)
                .unwrap_or(RingSetting::A)),
            Some(c) => RingSetting::from_letter(c),
        }
    }
}

/// One rotor fitted to a machine.
///
/// Holds the forward and reverse offset tables derived from the wiring,
/// so a mapping is a single table lookup plus modular arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    rotor_type: RotorType,
    initial_position: usize,
    position: usize,
    ring: RingSetting,
    forward: [u8; LETTERS],
    reverse: [u8; LETTERS],
}

impl Rotor {
    /// Creates a rotor of the given type.
    ///
    /// # Parameters
    /// - `rotor_type`: Variant supplying the wiring and turnover letters.
    /// - `position`: Start position shown in the window (`'A'..='Z'`).
    /// - `ring`: Ring setting.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidPosition`] if `position` is not an
    /// uppercase letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::rotor::{RingSetting, Rotor, RotorType};
    ///
    /// let mut rotor = Rotor::new(RotorType::I, 'Z', RingSetting::A).unwrap();
    /// rotor.step();
    /// assert_eq!(rotor.position_letter(), 'A');
    /// ```
    pub fn new(
        rotor_type: RotorType,
        position: char,
        ring: RingSetting,
    ) -> Result<Self, EnigmaError> {
        let start =
            alphabet::position_of(position).ok_or(EnigmaError::InvalidPosition(position))?;

        let forward = alphabet::offset_table(rotor_type.spec().wiring);
        let mut reverse = [0u8; LETTERS];
        for (i, &offset) in forward.iter().enumerate() {
            let wired = (i + offset as usize) % LETTERS;
            reverse[wired] = ((LETTERS - offset as usize) % LETTERS) as u8;
        }

        Ok(Rotor {
            rotor_type,
            initial_position: start,
            position: start,
            ring,
            forward,
            reverse,
        })
    }

    /// Returns the variant of this rotor.
    pub fn rotor_type(&self) -> RotorType {
        self.rotor_type
    }

    /// Returns the ring setting.
    pub fn ring(&self) -> RingSetting {
        self.ring
    }

    /// Current rotation as a contact position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Current rotation as the letter shown in the window.
    pub fn position_letter(&self) -> char {
        alphabet::letter_at(self.position)
    }

    /// Start position captured at construction.
    pub fn initial_position(&self) -> usize {
        self.initial_position
    }

    /// Contact index of the wire currently facing input contact `pos`.
    fn effective(&self, pos: usize) -> usize {
        (pos + self.position + LETTERS - self.ring.offset()) % LETTERS
    }

    /// Maps a contact on the right-to-left pass (towards the reflector).
    ///
    /// # Parameters
    /// - `pos`: Incoming contact position (`0..26`).
    ///
    /// # Returns
    /// Outgoing contact position (`0..26`).
    pub fn map_forward(&self, pos: usize) -> usize {
        (pos + self.forward[self.effective(pos)] as usize) % LETTERS
    }

    /// Maps a contact on the left-to-right return pass.
    ///
    /// Exact inverse of [`map_forward`](Self::map_forward) for the same
    /// rotation and ring.
    pub fn map_reverse(&self, pos: usize) -> usize {
        (pos + self.reverse[self.effective(pos)] as usize) % LETTERS
    }

    /// Advances the rotor by one position, wrapping `Z` to `A`.
    pub fn step(&mut self) {
        self.position = (self.position + 1) % LETTERS;
    }

    /// Restores the start position.
    pub fn reset(&mut self) {
        self.position = self.initial_position;
    }

    /// Whether the window shows one of this rotor's turnover letters.
    pub fn is_at_turnover(&self) -> bool {
        self.rotor_type
            .spec()
            .turnovers
            .contains(self.position_letter())
    }
}
