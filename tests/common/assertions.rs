//! Assertion utilities for lookup tables.
//!
//! Quantization truncates, so blended entries can land one step away from
//! the exact value; these helpers compare entries with a tolerance.

use tframp::{BUFFER_LEN, CHANNELS, TABLE_SIZE};

/// Default per-channel tolerance for blended entries
pub const DEFAULT_TOLERANCE: u8 = 1;

/// Read entry `index` from a lookup table
pub fn entry(buffer: &[u8], index: usize) -> [u8; 4] {
    let o = index * CHANNELS;
    [buffer[o], buffer[o + 1], buffer[o + 2], buffer[o + 3]]
}

/// Assert that entry `index` is within `tolerance` of `expected` on every channel.
///
/// # Panics
///
/// Panics if any channel differs by more than `tolerance` (default: 1).
pub fn assert_entry_approx_eq(buffer: &[u8], index: usize, expected: [u8; 4], tolerance: Option<u8>) {
    let tolerance = tolerance.unwrap_or(DEFAULT_TOLERANCE);
    let actual = entry(buffer, index);

    for (channel, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        let diff = a.abs_diff(*e);
        assert!(
            diff <= tolerance,
            "Entry {} differs on channel {}: actual = {:?}, expected = {:?}, tolerance = {}",
            index,
            channel,
            actual,
            expected,
            tolerance
        );
    }
}

/// Assert that the table has the fixed size and every entry is transparent black
pub fn assert_all_transparent(buffer: &[u8]) {
    assert_eq!(buffer.len(), BUFFER_LEN, "lookup table has wrong length");
    for index in 0..TABLE_SIZE {
        assert_eq!(
            entry(buffer, index),
            [0, 0, 0, 0],
            "Entry {} is not transparent",
            index
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_entry_approx_eq() {
        let mut buffer = vec![0u8; BUFFER_LEN];
        buffer[4..8].copy_from_slice(&[10, 20, 30, 40]);

        assert_entry_approx_eq(&buffer, 1, [10, 20, 30, 40], None);
        assert_entry_approx_eq(&buffer, 1, [11, 19, 30, 40], None);
        assert_entry_approx_eq(&buffer, 1, [13, 20, 30, 40], Some(3));
    }

    #[test]
    fn test_assert_all_transparent() {
        assert_all_transparent(&vec![0u8; BUFFER_LEN]);
    }
}
