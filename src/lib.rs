//! Enigma cipher machine emulator.
//!
//! Emulates the rotor cipher machines of the Wehrmacht (three rotors) and
//! the Kriegsmarine M4 (four rotors): a chain of rotors, a plugboard and a
//! reflector forming a reciprocal polyalphabetic substitution over `A..=Z`.
//! The historical rotor stepping, including the double step of the middle
//! rotor, is reproduced exactly.
//!
//! # Architecture
//!
//! ```text
//! Rotor      (wiring + ring + rotation, forward/reverse mapping, step)
//!     ↕ 3 or 4 in a row, stepped right to left
//! Plugboard  (letter-pair swaps at entry and exit)
//! Reflector  (fixed involution between the two rotor passes)
//! Machine    (orchestrator: step → plug → rotors → reflect → rotors → plug)
//! ```
//!
//! # Examples
//!
//! Decrypt a message from Operation Barbarossa, 1941:
//!
//! ```
//! use enigma::{Machine, ReflectorType, RingSetting, RotorType};
//!
//! let mut machine = Machine::new();
//! machine.set_plugboard("AV;BS;CG;DL;FU;HZ;IN;KM;OW;RX").unwrap();
//! machine.set_reflector(ReflectorType::B);
//! machine.add_rotor(RotorType::II, 'L', RingSetting::from_letter('B').unwrap()).unwrap();
//! machine.add_rotor(RotorType::IV, 'S', RingSetting::from_letter('U').unwrap()).unwrap();
//! machine.add_rotor(RotorType::V, 'D', RingSetting::from_letter('L').unwrap()).unwrap();
//!
//! let plain = machine.encode_str("SFBWDNJUSEGQOBHKRTAREEZMWKPPRBXOHDROEQGBBGTQVPGVKBVVGBIMHUSZYDAJQIROAXSSSNREHYGGRPISEZBOVMQIEMMZCYSGQDGRERVBILEKXYQIRGIRQNRDNVRXCYYTNJR").unwrap();
//! assert!(plain.starts_with("DREIGEHTLANGSAMABERSIQERVORWAERTS"));
//! ```
//!
//! The same machine can be described by a settings string:
//!
//! ```
//! use enigma::Machine;
//!
//! let mut machine =
//!     Machine::from_settings("AV;BS;CG;DL;FU;HZ;IN;KM;OW;RX,B,II,L,B,IV,S,U,V,D,L").unwrap();
//! assert_eq!(machine.rotor_positions(), "LSD");
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod error;
pub mod machine;
pub mod plugboard;
pub mod reflector;
pub mod rotor;
pub mod samples;
pub mod settings;

pub use error::EnigmaError;
pub use machine::Machine;
pub use plugboard::Plugboard;
pub use reflector::{Reflector, ReflectorType};
pub use rotor::{RingSetting, Rotor, RotorType};
pub use settings::MachineSettings;
