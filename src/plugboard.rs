//! Plugboard (Steckerbrett): letter-pair swaps at the machine's entry and exit.
//!
//! Connections are given as a textual specification such as `"AT;FM;PX"`:
//! two-letter pairs separated by `;` (whitespace is accepted as well),
//! case-insensitive. A letter without a cable maps to itself.

use std::fmt;

use crate::alphabet::{self, LETTERS};
use crate::error::EnigmaError;

/// Separator between letter pairs in a plugboard specification.
pub const SEPARATOR: char = ';';

/// Set of disjoint letter-pair swaps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    pairs: Vec<(char, char)>,
    wiring: [u8; LETTERS],
}

impl Default for Plugboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugboard {
    /// Creates a plugboard with no connections.
    pub fn new() -> Self {
        Plugboard {
            pairs: Vec::new(),
            wiring: identity(),
        }
    }

    /// Replaces all connections with the pairs in `spec`.
    ///
    /// Validation runs in three stages over the whole specification:
    /// token syntax (only letters and separators, every token exactly two
    /// letters), then distinct letters within each pair, then no letter in
    /// more than one pair. An empty or blank `spec` removes every cable.
    ///
    /// # Parameters
    /// - `spec`: Pair specification, e.g. `"AV;BS;CG"`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidPlugboardSpec`] on any violation. The
    /// plugboard is then left with no connections at all, whatever it held
    /// before the call.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::plugboard::Plugboard;
    ///
    /// let mut pb = Plugboard::new();
    /// pb.set_connections("AM;EH;KP").unwrap();
    /// assert_eq!(pb.lookup('A'), 'M');
    /// assert_eq!(pb.lookup('M'), 'A');
    /// assert_eq!(pb.lookup('Z'), 'Z');
    ///
    /// assert!(pb.set_connections("AM;EH;AP").is_err());
    /// assert_eq!(pb.lookup('A'), 'A');
    /// ```
    pub fn set_connections(&mut self, spec: &str) -> Result<(), EnigmaError> {
        self.clear();

        let pairs = parse_pairs(spec)?;

        let mut wiring = identity();
        let mut wired = [false; LETTERS];
        for &(a, b) in &pairs {
            for c in [a, b] {
                let p = letter_index(c);
                if wired[p] {
                    return Err(invalid(format!("letter '{}' is wired more than once", c)));
                }
                wired[p] = true;
            }
            wiring[letter_index(a)] = letter_index(b) as u8;
            wiring[letter_index(b)] = letter_index(a) as u8;
        }

        self.pairs = pairs;
        self.wiring = wiring;
        Ok(())
    }

    /// Removes every connection.
    pub fn clear(&mut self) {
        self.pairs.clear();
        self.wiring = identity();
    }

    /// Returns the letter `letter` is cabled to, or `letter` itself.
    ///
    /// Characters outside `A..=Z` pass through unchanged.
    pub fn lookup(&self, letter: char) -> char {
        match alphabet::position_of(letter) {
            Some(p) => alphabet::letter_at(self.map(p)),
            None => letter,
        }
    }

    /// Position form of [`lookup`](Self::lookup) for contact `pos` (`0..26`).
    pub fn map(&self, pos: usize) -> usize {
        self.wiring[pos] as usize
    }

    /// Configured pairs, uppercase, in specification order.
    pub fn pairs(&self) -> &[(char, char)] {
        &self.pairs
    }

    /// Whether no cable is plugged in.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Renders the connections in canonical `AB;CD` form.
impl fmt::Display for Plugboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (a, b)) in self.pairs.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", SEPARATOR)?;
            }
            write!(f, "{}{}", a, b)?;
        }
        Ok(())
    }
}

fn identity() -> [u8; LETTERS] {
    let mut wiring = [0u8; LETTERS];
    for (i, w) in wiring.iter_mut().enumerate() {
        *w = i as u8;
    }
    wiring
}

fn invalid(reason: String) -> EnigmaError {
    EnigmaError::InvalidPlugboardSpec(reason)
}

/// Index of an uppercase letter already checked by `parse_pairs`.
fn letter_index(c: char) -> usize {
    (c as u8 - b'A') as usize
}

/// Splits `spec` into uppercase letter pairs, checking syntax and
/// self-pairing. Letter reuse across pairs is left to the caller.
fn parse_pairs(spec: &str) -> Result<Vec<(char, char)>, EnigmaError> {
    let spec = spec.trim();
    if spec.is_empty() {
        return Ok(Vec::new());
    }

    if let Some(bad) = spec
        .chars()
        .find(|&c| !(c.is_ascii_alphabetic() || c == SEPARATOR || c.is_ascii_whitespace()))
    {
        return Err(invalid(format!("'{}' is not a letter or separator", bad)));
    }

    let upper = spec.to_ascii_uppercase();
    let mut tokens = Vec::new();
    for group in upper.split(SEPARATOR) {
        let group = group.trim();
        if group.is_empty() {
            return Err(invalid("empty pair between separators".to_string()));
        }
        tokens.extend(group.split_ascii_whitespace());
    }

    let mut pairs = Vec::with_capacity(tokens.len());
    for token in &tokens {
        let bytes = token.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid(format!("'{}' is not a pair of two letters", token)));
        }
        pairs.push((bytes[0] as char, bytes[1] as char));
    }

    if let Some(&(a, _)) = pairs.iter().find(|(a, b)| a == b) {
        return Err(invalid(format!("letter '{}' cannot be paired with itself", a)));
    }

    Ok(pairs)
}
