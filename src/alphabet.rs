//! Letter/position conversion for the 26-letter machine alphabet.
//!
//! Every component works on contact positions `0..26`; letters only
//! appear at the machine's input and output and in the static wiring
//! tables.

/// Number of contacts on every rotor, reflector and the plugboard.
pub const LETTERS: usize = 26;

/// The machine alphabet in contact order.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Returns the contact position of an uppercase letter.
///
/// # Parameters
/// - `c`: Character to convert.
///
/// # Returns
/// `Some(0..26)` for `'A'..='Z'`, `None` for anything else.
pub fn position_of(c: char) -> Option<usize> {
    if c.is_ascii_uppercase() {
        Some((c as u8 - b'A') as usize)
    } else {
        None
    }
}

/// Returns the letter at contact position `pos` (taken mod 26).
pub fn letter_at(pos: usize) -> char {
    (b'A' + (pos % LETTERS) as u8) as char
}

/// Builds the offset table of a wiring permutation.
///
/// Entry `i` holds `(wiring[i] - i) mod 26`, so the wired contact for `i`
/// is `(i + table[i]) mod 26`.
///
/// # Parameters
/// - `wiring`: 26 uppercase letters, a permutation of the alphabet.
pub(crate) fn offset_table(wiring: &str) -> [u8; LETTERS] {
    let mut table = [0u8; LETTERS];
    for (i, w) in wiring.bytes().enumerate().take(LETTERS) {
        let wired = (w - b'A') as usize;
        table[i] = ((LETTERS + wired - i) % LETTERS) as u8;
    }
    table
}
