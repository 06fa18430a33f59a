//! Table-driven rolling byte hash over variable-length sequences.
//!
//! The hasher folds a byte sequence into a single byte through substitution
//! combined with a running XOR. It is deterministic and non-cryptographic;
//! its purpose is a well-distributed 256-to-1 reduction, not resistance to
//! deliberate collisions.

use crate::table::SUBSTITUTION_TABLE;

/// Stateless sequence hasher over a fixed substitution table.
///
/// The hasher holds nothing but a reference to its table; constructing one is
/// free and a single instance can be shared across any number of call sites
/// and threads.
#[derive(Debug, Clone, Copy)]
pub struct PearsonHasher {
    table: &'static [u8; 256],
}

impl PearsonHasher {
    /// Creates a hasher backed by the built-in [`SUBSTITUTION_TABLE`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            table: &SUBSTITUTION_TABLE,
        }
    }

    /// Creates a hasher backed by a caller-supplied table.
    ///
    /// The table must be a permutation of `0..=255` for the hash to stay
    /// well distributed; see [`crate::table::is_permutation`]. This is not
    /// checked here.
    #[must_use]
    pub const fn with_table(table: &'static [u8; 256]) -> Self {
        Self { table }
    }

    /// Hashes a byte sequence down to a single byte.
    ///
    /// The accumulator starts at 0 and each input byte `b` advances it to
    /// `table[acc ^ b]`. The empty sequence hashes to 0. Single-element and
    /// multi-element sequences use the identical fold.
    #[must_use]
    pub fn hash(&self, input: &[u8]) -> u8 {
        let mut acc = 0u8;
        for &byte in input {
            acc = self.table[usize::from(acc ^ byte)];
        }
        acc
    }

    /// Hashes a byte sequence and keeps the result only when it matches.
    ///
    /// Returns `Some(expected)` iff the computed hash equals `expected`.
    /// The full sequence is always processed; the accumulator carries no
    /// meaning before the final byte, so there is nothing to short-circuit on.
    #[must_use]
    pub fn hash_if_matches(&self, input: &[u8], expected: u8) -> Option<u8> {
        let computed = self.hash(input);
        (computed == expected).then_some(computed)
    }
}

impl Default for PearsonHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_deterministic() {
        let hasher = PearsonHasher::new();
        let input = [1, 2, 3, 4, 5];
        assert_eq!(hasher.hash(&input), hasher.hash(&input));
    }

    #[test]
    fn empty_sequence_hashes_to_zero() {
        assert_eq!(PearsonHasher::new().hash(&[]), 0);
    }

    #[test]
    fn single_byte_hash_is_table_lookup() {
        // acc starts at 0, so hash([x]) == table[0 ^ x] == table[x].
        let hasher = PearsonHasher::new();
        for x in 0..=255u8 {
            assert_eq!(hasher.hash(&[x]), SUBSTITUTION_TABLE[usize::from(x)]);
        }
    }

    #[test]
    fn reference_vector_zero_byte() {
        assert_eq!(PearsonHasher::new().hash(&[0]), 29);
    }

    #[test]
    fn hash_if_matches_accepts_correct_expectation() {
        let hasher = PearsonHasher::new();
        let input = [10, 20, 30];
        let expected = hasher.hash(&input);
        assert_eq!(hasher.hash_if_matches(&input, expected), Some(expected));
    }

    #[test]
    fn hash_if_matches_rejects_wrong_expectation() {
        let hasher = PearsonHasher::new();
        let input = [10, 20, 30];
        let wrong = hasher.hash(&input).wrapping_add(1);
        assert_eq!(hasher.hash_if_matches(&input, wrong), None);
    }

    #[test]
    fn custom_table_changes_output() {
        static IDENTITY: [u8; 256] = {
            let mut table = [0u8; 256];
            let mut i = 0;
            while i < 256 {
                table[i] = i as u8;
                i += 1;
            }
            table
        };
        // Under the identity table the fold degenerates to a running XOR.
        let hasher = PearsonHasher::with_table(&IDENTITY);
        assert_eq!(hasher.hash(&[0xAA, 0x55]), 0xAA ^ 0x55);
    }
}
