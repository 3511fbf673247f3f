//! Property-based tests for the cipher's algebraic laws.
//!
//! Uses proptest to check that the machine stays self-inverse and every
//! component stays a permutation across arbitrary configurations.

use enigma::alphabet::{letter_at, ALPHABET, LETTERS};
use enigma::{Machine, Plugboard, Reflector, ReflectorType, RingSetting, Rotor, RotorType};
use proptest::prelude::*;

fn rotor_type() -> impl Strategy<Value = RotorType> {
    prop::sample::select(RotorType::ALL.to_vec())
}

fn reflector_type() -> impl Strategy<Value = ReflectorType> {
    prop::sample::select(ReflectorType::ALL.to_vec())
}

fn letter() -> impl Strategy<Value = char> {
    (0..LETTERS).prop_map(letter_at)
}

fn ring() -> impl Strategy<Value = RingSetting> {
    (1u32..=26).prop_map(RingSetting::from_number)
}

/// Three or four distinct rotor types with positions and rings.
fn rotor_slots() -> impl Strategy<Value = Vec<(RotorType, char, RingSetting)>> {
    (3usize..=4)
        .prop_flat_map(|n| prop::sample::subsequence(RotorType::ALL.to_vec(), n))
        .prop_shuffle()
        .prop_flat_map(|types| {
            let n = types.len();
            (
                Just(types),
                prop::collection::vec(letter(), n),
                prop::collection::vec(ring(), n),
            )
        })
        .prop_map(|(types, positions, rings)| {
            types
                .into_iter()
                .zip(positions)
                .zip(rings)
                .map(|((t, p), r)| (t, p, r))
                .collect()
        })
}

/// Up to 13 disjoint pairs drawn from a shuffled alphabet.
fn plugboard_spec() -> impl Strategy<Value = String> {
    (Just(ALPHABET.chars().collect::<Vec<_>>()).prop_shuffle(), 0usize..=13).prop_map(
        |(letters, n)| {
            letters
                .chunks(2)
                .take(n)
                .map(|p| p.iter().collect::<String>())
                .collect::<Vec<_>>()
                .join(";")
        },
    )
}

fn text() -> impl Strategy<Value = String> {
    prop::collection::vec(letter(), 0..200).prop_map(|v| v.into_iter().collect())
}

fn build(
    slots: &[(RotorType, char, RingSetting)],
    reflector: ReflectorType,
    plugs: &str,
) -> Machine {
    let mut machine = Machine::new();
    for &(t, p, r) in slots {
        machine.add_rotor(t, p, r).unwrap();
    }
    machine.set_reflector(reflector);
    machine.set_plugboard(plugs).unwrap();
    machine
}

proptest! {
    /// map_reverse undoes map_forward for every rotor setting.
    #[test]
    fn prop_rotor_inverse(t in rotor_type(), pos in letter(), r in ring(), p in 0..LETTERS) {
        let rotor = Rotor::new(t, pos, r).unwrap();
        prop_assert_eq!(rotor.map_reverse(rotor.map_forward(p)), p);
    }

    /// Reflectors are involutions.
    #[test]
    fn prop_reflector_involution(t in reflector_type(), x in 0..LETTERS) {
        let reflector = Reflector::new(t);
        prop_assert_eq!(reflector.reflect(reflector.reflect(x)), x);
    }

    /// Plugboard lookups are involutions.
    #[test]
    fn prop_plugboard_involution(spec in plugboard_spec(), x in letter()) {
        let mut pb = Plugboard::new();
        pb.set_connections(&spec).unwrap();
        prop_assert_eq!(pb.lookup(pb.lookup(x)), x);
    }

    /// Encoding, resetting and encoding again restores the text.
    #[test]
    fn prop_reciprocity(
        slots in rotor_slots(),
        reflector in reflector_type(),
        plugs in plugboard_spec(),
        plain in text(),
    ) {
        let mut machine = build(&slots, reflector, &plugs);
        let cipher = machine.encode_str(&plain).unwrap();
        machine.reset();
        prop_assert_eq!(machine.encode_str(&cipher).unwrap(), plain);
    }

    /// No letter ever encodes to itself.
    #[test]
    fn prop_no_self_encipherment(
        slots in rotor_slots(),
        reflector in reflector_type(),
        plugs in plugboard_spec(),
        plain in text(),
    ) {
        let mut machine = build(&slots, reflector, &plugs);
        let cipher = machine.encode_str(&plain).unwrap();
        for (p, c) in plain.chars().zip(cipher.chars()) {
            prop_assert_ne!(p, c);
        }
    }

    /// Output length matches input length.
    #[test]
    fn prop_length_preserved(slots in rotor_slots(), plain in text()) {
        let mut machine = build(&slots, ReflectorType::B, "");
        prop_assert_eq!(machine.encode_str(&plain).unwrap().len(), plain.len());
    }
}
