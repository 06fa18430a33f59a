//! The fixed substitution table driving the sequence hasher.
//!
//! The table is a permutation of the byte space: every value in `0..=255`
//! appears exactly once. The exact byte order is part of the external
//! contract - data encoded against this table can only be decoded by an
//! implementation carrying the identical table.

/// The built-in 256-entry substitution table.
///
/// Any change to this table breaks interoperability with existing encoded
/// data and requires an explicit compatibility decision.
pub const SUBSTITUTION_TABLE: [u8; 256] = [
    29,  186, 180, 162, 184, 218, 3,   141, 55,  0,   72,  98,
    226, 108, 220, 158, 231, 248, 247, 251, 130, 46,  174, 135,
    170, 127, 163, 109, 229, 36,  45,  145, 79,  137, 122, 12,
    182, 117, 17,  198, 204, 212, 39,  189, 52,  200, 102, 149,
    15,  124, 233, 64,  88,  225, 105, 183, 131, 114, 187, 197,
    165, 48,  56,  214, 227, 41,  95,  4,   93,  243, 239, 38,
    61,  116, 51,  90,  236, 89,  18,  196, 213, 42,  96,  104,
    27,  11,  21,  203, 250, 194, 57,  85,  54,  211, 32,  25,
    140, 121, 147, 171, 6,   115, 234, 206, 101, 8,   7,   33,
    112, 159, 28,  240, 238, 92,  249, 22,  129, 208, 118, 125,
    179, 24,  178, 143, 156, 63,  207, 164, 103, 172, 71,  157,
    185, 199, 128, 181, 175, 193, 154, 152, 176, 26,  9,   132,
    62,  151, 2,   97,  205, 120, 77,  190, 150, 146, 50,  23,
    155, 47,  126, 119, 254, 40,  241, 192, 144, 83,  138, 49,
    113, 160, 74,  70,  253, 217, 110, 58,  5,   228, 136, 87,
    215, 169, 14,  168, 73,  219, 167, 10,  148, 173, 100, 35,
    222, 76,  221, 139, 235, 16,  69,  166, 133, 210, 67,  30,
    84,  43,  202, 161, 195, 223, 53,  34,  232, 245, 237, 230,
    59,  80,  191, 91,  66,  209, 75,  78,  44,  65,  1,   188,
    252, 107, 86,  177, 242, 134, 13,  246, 99,  20,  81,  111,
    68,  153, 37,  123, 216, 224, 19,  31,  82,  106, 201, 244,
    60,  142, 94,  255,
];

/// Returns `true` when `table` is a permutation of `0..=255`.
///
/// The built-in [`SUBSTITUTION_TABLE`] satisfies this by construction.
/// Callers supplying their own table should validate it here: a table with
/// repeated entries degrades the hash distribution and with it the at-most-256
/// collision bound the ranking layer relies on.
#[must_use]
pub fn is_permutation(table: &[u8; 256]) -> bool {
    let mut seen = [false; 256];
    for &value in table {
        if seen[usize::from(value)] {
            return false;
        }
        seen[usize::from(value)] = true;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_is_a_permutation() {
        assert!(is_permutation(&SUBSTITUTION_TABLE));
    }

    #[test]
    fn builtin_table_reference_entries() {
        // Fixed vectors pinning the external contract.
        assert_eq!(SUBSTITUTION_TABLE[0], 29);
        assert_eq!(SUBSTITUTION_TABLE[1], 186);
        assert_eq!(SUBSTITUTION_TABLE[255], 255);
    }

    #[test]
    fn rejects_table_with_duplicates() {
        let mut table = SUBSTITUTION_TABLE;
        table[1] = table[0];
        assert!(!is_permutation(&table));
    }

    #[test]
    fn accepts_identity_table() {
        let mut identity = [0u8; 256];
        for (i, slot) in identity.iter_mut().enumerate() {
            *slot = i as u8;
        }
        assert!(is_permutation(&identity));
    }
}
