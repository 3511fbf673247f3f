//! Machine: the Enigma orchestrator.
//!
//! Owns the rotors (left to right), the plugboard and the reflector, and
//! drives the per-keystroke pipeline:
//!
//! ```text
//! step rotors → plugboard → rotors R→L → reflector → rotors L→R → plugboard
//! ```
//!
//! The pipeline is its own inverse for a given rotor state, so the same
//! call both enciphers and deciphers.

use crate::alphabet;
use crate::error::EnigmaError;
use crate::plugboard::Plugboard;
use crate::reflector::{Reflector, ReflectorType};
use crate::rotor::{RingSetting, Rotor, RotorType};

/// Fewest rotors an operable machine carries.
pub const MIN_ROTORS: usize = 3;

/// Most rotors a machine carries (the naval M4).
pub const MAX_ROTORS: usize = 4;

/// A configurable Enigma machine.
///
/// # Examples
///
/// ```
/// use enigma::{Machine, ReflectorType, RingSetting, RotorType};
///
/// let mut machine = Machine::new();
/// machine.add_rotor(RotorType::I, 'A', RingSetting::A).unwrap();
/// machine.add_rotor(RotorType::II, 'A', RingSetting::A).unwrap();
/// machine.add_rotor(RotorType::III, 'A', RingSetting::A).unwrap();
/// machine.set_reflector(ReflectorType::B);
///
/// let secret = machine.encode_str("HELLOWORLD").unwrap();
/// assert_eq!(secret, "ILBDAAMTAZ");
///
/// machine.reset();
/// assert_eq!(machine.encode_str(&secret).unwrap(), "HELLOWORLD");
/// ```
#[derive(Debug, Clone)]
pub struct Machine {
    rotors: Vec<Rotor>,
    plugboard: Plugboard,
    reflector: Option<Reflector>,
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}

impl Machine {
    /// Creates a machine with no rotors, no reflector and no plugboard cables.
    pub fn new() -> Self {
        Machine {
            rotors: Vec::with_capacity(MAX_ROTORS),
            plugboard: Plugboard::new(),
            reflector: None,
        }
    }

    /// Fits a rotor to the right of those already present.
    ///
    /// Rotors must be added in left-to-right order; the machine never
    /// reorders them.
    ///
    /// # Parameters
    /// - `rotor_type`: Rotor variant. Each variant may be fitted once.
    /// - `position`: Start position letter (`'A'..='Z'`).
    /// - `ring`: Ring setting.
    ///
    /// # Errors
    /// - [`EnigmaError::DuplicateRotorType`] if a rotor of this type is
    ///   already fitted.
    /// - [`EnigmaError::TooManyRotors`] if the machine is full.
    /// - [`EnigmaError::InvalidPosition`] if `position` is not a letter.
    ///
    /// The machine is unchanged on error.
    ///
    /// ```
    /// use enigma::{EnigmaError, Machine, RingSetting, RotorType};
    ///
    /// let mut machine = Machine::new();
    /// assert!(machine.add_rotor(RotorType::I, 'A', RingSetting::A).is_ok());
    /// assert_eq!(
    ///     machine.add_rotor(RotorType::I, 'A', RingSetting::A),
    ///     Err(EnigmaError::DuplicateRotorType(RotorType::I))
    /// );
    /// assert_eq!(machine.rotors().len(), 1);
    /// ```
    pub fn add_rotor(
        &mut self,
        rotor_type: RotorType,
        position: char,
        ring: RingSetting,
    ) -> Result<(), EnigmaError> {
        if self.rotors.iter().any(|r| r.rotor_type() == rotor_type) {
            return Err(EnigmaError::DuplicateRotorType(rotor_type));
        }
        if self.rotors.len() >= MAX_ROTORS {
            return Err(EnigmaError::TooManyRotors(MAX_ROTORS));
        }
        self.rotors.push(Rotor::new(rotor_type, position, ring)?);
        Ok(())
    }

    /// Selects the reflector, replacing any previous one.
    pub fn set_reflector(&mut self, reflector_type: ReflectorType) {
        self.reflector = Some(Reflector::new(reflector_type));
    }

    /// Replaces the plugboard connections.
    ///
    /// # Errors
    /// Propagates [`EnigmaError::InvalidPlugboardSpec`] from
    /// [`Plugboard::set_connections`]; the plugboard is then empty.
    pub fn set_plugboard(&mut self, spec: &str) -> Result<(), EnigmaError> {
        self.plugboard.set_connections(spec)
    }

    /// Returns every rotor to its start position.
    ///
    /// Plugboard and reflector are untouched.
    pub fn reset(&mut self) {
        for rotor in &mut self.rotors {
            rotor.reset();
        }
    }

    /// Fitted rotors, left to right.
    pub fn rotors(&self) -> &[Rotor] {
        &self.rotors
    }

    /// The plugboard.
    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }

    /// Selected reflector type, if any.
    pub fn reflector_type(&self) -> Option<ReflectorType> {
        self.reflector.as_ref().map(Reflector::reflector_type)
    }

    /// Letters currently shown in the rotor windows, left to right.
    pub fn rotor_positions(&self) -> String {
        self.rotors.iter().map(Rotor::position_letter).collect()
    }

    /// Enciphers (or deciphers) one letter, stepping the rotors first.
    ///
    /// # Errors
    /// - [`EnigmaError::InvalidMachineConfiguration`] with fewer than 3
    ///   rotors or no reflector.
    /// - [`EnigmaError::InvalidCharacter`] if `c` is not in `'A'..='Z'`.
    ///
    /// No rotor moves when an error is returned.
    pub fn encode(&mut self, c: char) -> Result<char, EnigmaError> {
        let reflector = ready(&self.rotors, &self.reflector)?;
        let pos = alphabet::position_of(c).ok_or(EnigmaError::InvalidCharacter(c))?;
        let out = keystroke(&mut self.rotors, &self.plugboard, reflector, pos);
        Ok(alphabet::letter_at(out))
    }

    /// Enciphers (or deciphers) a text of uppercase letters.
    ///
    /// The whole text is validated before the first keystroke, so on
    /// error the rotors are exactly where they were.
    ///
    /// # Errors
    /// Same as [`encode`](Self::encode).
    pub fn encode_str(&mut self, text: &str) -> Result<String, EnigmaError> {
        let reflector = ready(&self.rotors, &self.reflector)?;
        let positions = text
            .chars()
            .map(|c| alphabet::position_of(c).ok_or(EnigmaError::InvalidCharacter(c)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(positions
            .into_iter()
            .map(|pos| {
                alphabet::letter_at(keystroke(&mut self.rotors, &self.plugboard, reflector, pos))
            })
            .collect())
    }
}

/// Returns the reflector of an operable machine.
///
/// A machine is operable with at least [`MIN_ROTORS`] rotors and a
/// selected reflector.
fn ready<'a>(
    rotors: &[Rotor],
    reflector: &'a Option<Reflector>,
) -> Result<&'a Reflector, EnigmaError> {
    match reflector {
        Some(reflector) if rotors.len() >= MIN_ROTORS => Ok(reflector),
        _ => Err(EnigmaError::InvalidMachineConfiguration {
            rotors: rotors.len(),
            reflector: reflector.is_some(),
        }),
    }
}

/// Runs one keystroke for contact `pos` and returns the lamp contact.
fn keystroke(
    rotors: &mut [Rotor],
    plugboard: &Plugboard,
    reflector: &Reflector,
    pos: usize,
) -> usize {
    step(rotors);

    let mut pos = plugboard.map(pos);
    for rotor in rotors.iter().rev() {
        pos = rotor.map_forward(pos);
    }
    pos = reflector.reflect(pos);
    for rotor in rotors.iter() {
        pos = rotor.map_reverse(pos);
    }
    plugboard.map(pos)
}

/// Advances the rotors for one keystroke, double step included.
///
/// Only the three rightmost rotors take part; a fourth (leftmost) rotor
/// never moves.
fn step(rotors: &mut [Rotor]) {
    let n = rotors.len();
    if n < MIN_ROTORS {
        return;
    }
    let right = n - 1;
    let middle = n - 2;

    if rotors[middle].is_at_turnover() {
        // The middle rotor carries into the left rotor and steps itself.
        rotors[middle - 1].step();
        rotors[middle].step();
    } else if rotors[right].is_at_turnover() {
        rotors[middle].step();
    }

    rotors[right].step();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine(rotors: &[(RotorType, char)]) -> Machine {
        let mut m = Machine::new();
        for &(t, p) in rotors {
            m.add_rotor(t, p, RingSetting::A).unwrap();
        }
        m.set_reflector(ReflectorType::B);
        m
    }

    #[test]
    fn test_not_ready_without_reflector() {
        let mut m = Machine::new();
        m.add_rotor(RotorType::I, 'A', RingSetting::A).unwrap();
        m.add_rotor(RotorType::II, 'A', RingSetting::A).unwrap();
        m.add_rotor(RotorType::III, 'A', RingSetting::A).unwrap();
        assert_eq!(
            m.encode('A'),
            Err(EnigmaError::InvalidMachineConfiguration {
                rotors: 3,
                reflector: false
            })
        );
        assert_eq!(m.rotor_positions(), "AAA");
    }

    #[test]
    fn test_not_ready_with_two_rotors() {
        let mut m = machine(&[(RotorType::I, 'A'), (RotorType::II, 'A')]);
        assert!(matches!(
            m.encode_str("ABC"),
            Err(EnigmaError::InvalidMachineConfiguration { rotors: 2, .. })
        ));
        assert_eq!(m.rotor_positions(), "AA");
    }

    #[test]
    fn test_duplicate_rotor_rejected() {
        let mut m = Machine::new();
        assert!(m.add_rotor(RotorType::I, 'A', RingSetting::A).is_ok());
        assert_eq!(
            m.add_rotor(RotorType::I, 'A', RingSetting::A),
            Err(EnigmaError::DuplicateRotorType(RotorType::I))
        );
        assert_eq!(m.rotors().len(), 1);
        assert_eq!(m.rotors()[0].rotor_type(), RotorType::I);
    }

    #[test]
    fn test_fifth_rotor_rejected() {
        let mut m = machine(&[
            (RotorType::Beta, 'A'),
            (RotorType::I, 'A'),
            (RotorType::II, 'A'),
            (RotorType::III, 'A'),
        ]);
        assert_eq!(
            m.add_rotor(RotorType::IV, 'A', RingSetting::A),
            Err(EnigmaError::TooManyRotors(MAX_ROTORS))
        );
        assert_eq!(m.rotors().len(), 4);
    }

    #[test]
    fn test_invalid_position_leaves_machine_unchanged() {
        let mut m = Machine::new();
        assert_eq!(
            m.add_rotor(RotorType::I, '#', RingSetting::A),
            Err(EnigmaError::InvalidPosition('#'))
        );
        assert!(m.rotors().is_empty());
    }

    #[test]
    fn test_right_rotor_always_steps() {
        let mut m = machine(&[(RotorType::I, 'A'), (RotorType::II, 'A'), (RotorType::III, 'A')]);
        m.encode('A').unwrap();
        assert_eq!(m.rotor_positions(), "AAB");
        m.encode_str("AAAA").unwrap();
        assert_eq!(m.rotor_positions(), "AAF");
    }

    #[test]
    fn test_right_turnover_steps_middle() {
        // III turns over at V.
        let mut m = machine(&[(RotorType::I, 'A'), (RotorType::II, 'A'), (RotorType::III, 'U')]);
        m.encode('A').unwrap();
        assert_eq!(m.rotor_positions(), "AAV");
        m.encode('A').unwrap();
        assert_eq!(m.rotor_positions(), "ABW");
    }

    #[test]
    fn test_double_step() {
        // II turns over at E, III at V: ADU -> ADV -> AEW -> BFX.
        let mut m = machine(&[(RotorType::I, 'A'), (RotorType::II, 'D'), (RotorType::III, 'U')]);
        m.encode('A').unwrap();
        assert_eq!(m.rotor_positions(), "ADV");
        m.encode('A').unwrap();
        assert_eq!(m.rotor_positions(), "AEW");
        m.encode('A').unwrap();
        assert_eq!(m.rotor_positions(), "BFX");
        m.encode('A').unwrap();
        assert_eq!(m.rotor_positions(), "BFY");
    }

    #[test]
    fn test_middle_and_right_turnover_same_keystroke() {
        // Middle at E and right at V together: left and middle step, right steps.
        let mut m = machine(&[(RotorType::I, 'A'), (RotorType::II, 'E'), (RotorType::III, 'V')]);
        m.encode('A').unwrap();
        assert_eq!(m.rotor_positions(), "BFW");
    }

    #[test]
    fn test_four_rotor_leftmost_never_steps() {
        let mut m = machine(&[
            (RotorType::Beta, 'A'),
            (RotorType::I, 'Q'),
            (RotorType::II, 'E'),
            (RotorType::III, 'V'),
        ]);
        m.encode('A').unwrap();
        // II at E steps I (from Q, its own turnover) and itself; Beta stays.
        assert_eq!(m.rotor_positions(), "ARFW");
        for _ in 0..1000 {
            m.encode('A').unwrap();
        }
        assert_eq!(m.rotors()[0].position_letter(), 'A');
    }

    #[test]
    fn test_known_ciphertext_aaaaa() {
        // Rotors I-II-III at AAA, reflector B, no plugs.
        let mut m = machine(&[(RotorType::I, 'A'), (RotorType::II, 'A'), (RotorType::III, 'A')]);
        assert_eq!(m.encode_str("AAAAA").unwrap(), "BDZGO");
    }

    #[test]
    fn test_never_encodes_to_itself() {
        let mut m = machine(&[(RotorType::IV, 'K'), (RotorType::V, 'X'), (RotorType::I, 'Q')]);
        for c in alphabet::ALPHABET.chars().cycle().take(500) {
            assert_ne!(m.encode(c).unwrap(), c);
        }
    }

    #[test]
    fn test_reciprocity() {
        let mut m = machine(&[(RotorType::VI, 'Y'), (RotorType::VII, 'L'), (RotorType::VIII, 'Z')]);
        m.set_plugboard("QW;ER;TY").unwrap();
        let plain = "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG";
        let cipher = m.encode_str(plain).unwrap();
        assert_ne!(cipher, plain);
        m.reset();
        assert_eq!(m.encode_str(&cipher).unwrap(), plain);
    }

    #[test]
    fn test_invalid_character_is_atomic() {
        let mut m = machine(&[(RotorType::I, 'A'), (RotorType::II, 'A'), (RotorType::III, 'A')]);
        assert_eq!(m.encode_str("ABcD"), Err(EnigmaError::InvalidCharacter('c')));
        assert_eq!(m.rotor_positions(), "AAA");
        assert_eq!(m.encode(' '), Err(EnigmaError::InvalidCharacter(' ')));
        assert_eq!(m.rotor_positions(), "AAA");
    }

    #[test]
    fn test_reset_keeps_plugboard_and_reflector() {
        let mut m = machine(&[(RotorType::I, 'A'), (RotorType::II, 'A'), (RotorType::III, 'A')]);
        m.set_plugboard("AB").unwrap();
        m.encode_str("XYZ").unwrap();
        m.reset();
        assert_eq!(m.rotor_positions(), "AAA");
        assert_eq!(m.plugboard().pairs(), &[('A', 'B')]);
        assert_eq!(m.reflector_type(), Some(ReflectorType::B));
    }

    #[test]
    fn test_set_reflector_replaces() {
        let mut m = machine(&[(RotorType::I, 'A'), (RotorType::II, 'A'), (RotorType::III, 'A')]);
        m.set_reflector(ReflectorType::C);
        assert_eq!(m.reflector_type(), Some(ReflectorType::C));
        let with_c = m.encode_str("AAAAA").unwrap();
        assert_ne!(with_c, "BDZGO");
    }

    #[test]
    fn test_bad_plugboard_clears_connections() {
        let mut m = machine(&[(RotorType::I, 'A'), (RotorType::II, 'A'), (RotorType::III, 'A')]);
        m.set_plugboard("AB;CD").unwrap();
        assert!(m.set_plugboard("AB;AC").is_err());
        assert!(m.plugboard().is_empty());
        // An empty plugboard reproduces the unplugged reference output.
        assert_eq!(m.encode_str("AAAAA").unwrap(), "BDZGO");
    }
}
