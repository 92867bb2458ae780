//! Constant-time operations for security.

use subtle::{Choice, ConstantTimeEq};

/// Compare two byte slices in constant time.
///
/// The work done depends only on the longer of the two lengths, never on
/// the position of the first differing byte. A length mismatch is folded
/// into the same accumulator as a byte mismatch, so a truncated input costs
/// as much to reject as a full-length wrong one.
///
/// # Arguments
/// * `a` - First byte slice
/// * `b` - Second byte slice
///
/// # Returns
/// true if slices are equal, false otherwise
pub fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    let len = a.len().max(b.len());
    let mut equal: Choice = (a.len() as u64).ct_eq(&(b.len() as u64));

    for i in 0..len {
        let x = a.get(i).copied().unwrap_or(0);
        let y = b.get(i).copied().unwrap_or(0);
        equal &= x.ct_eq(&y);
    }

    equal.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_slices() {
        assert!(constant_time_compare(b"hello", b"hello"));
    }

    #[test]
    fn test_different_slices() {
        assert!(!constant_time_compare(b"hello", b"world"));
    }

    #[test]
    fn test_different_lengths() {
        assert!(!constant_time_compare(b"hello", b"hi"));
    }

    #[test]
    fn test_prefix_is_not_equal() {
        assert!(!constant_time_compare(b"hell", b"hello"));
        assert!(!constant_time_compare(b"hello", b"hell"));
    }

    #[test]
    fn test_zero_padding_is_not_equal() {
        // Missing bytes are read as zero; the length check must still reject.
        assert!(!constant_time_compare(b"ab", b"ab\0"));
    }

    #[test]
    fn test_empty_slices() {
        assert!(constant_time_compare(b"", b""));
        assert!(!constant_time_compare(b"", b"a"));
    }
}
