//! Piecewise-linear expansion of control points into a lookup table.
//!
//! The walk starts at an implicit transparent point at key 0 and ends at
//! key 255, which is transparent unless a control point sits there. Each
//! pair of consecutive points fills the half-open key range between them.

pub mod common;

use std::collections::BTreeMap;

use crate::color::Rgba;
use crate::{BUFFER_LEN, CHANNELS, MAX_KEY};

pub use common::{lerp, lerp_rgba, quantize, quantize_rgba};

/// Write one quantized entry into the lookup table
pub fn write_entry(buffer: &mut [u8], index: usize, color: Rgba) {
    let offset = index * CHANNELS;
    buffer[offset..offset + CHANNELS].copy_from_slice(&quantize_rgba(color));
}

/// Fill entries `[start.0, end.0)` blending from `start.1` toward `end.1`.
///
/// Segments with an empty key range write nothing.
pub fn fill_segment(buffer: &mut [u8], start: (u8, Rgba), end: (u8, Rgba)) {
    let (start_key, start_color) = start;
    let (end_key, end_color) = end;
    if end_key <= start_key {
        return;
    }

    let span = f32::from(end_key - start_key);
    for key in start_key..end_key {
        let weight = f32::from(key - start_key) / span;
        write_entry(
            buffer,
            usize::from(key),
            lerp_rgba(start_color, end_color, weight),
        );
    }
}

/// Rebuild `buffer` in place from the ordered control points
pub fn rebuild_into(buffer: &mut [u8], points: &BTreeMap<u8, Rgba>) {
    debug_assert_eq!(buffer.len(), BUFFER_LEN, "lookup table has a fixed size");

    let mut prev = (0u8, Rgba::TRANSPARENT);
    for (&key, &color) in points {
        fill_segment(buffer, prev, (key, color));
        prev = (key, color);
    }

    let end_color = points.get(&MAX_KEY).copied().unwrap_or(Rgba::TRANSPARENT);
    fill_segment(buffer, prev, (MAX_KEY, end_color));
    write_entry(buffer, usize::from(MAX_KEY), end_color);
}

/// Build a fresh lookup table from the ordered control points
pub fn build_buffer(points: &BTreeMap<u8, Rgba>) -> Vec<u8> {
    let mut buffer = vec![0; BUFFER_LEN];
    rebuild_into(&mut buffer, points);
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(buffer: &[u8], index: usize) -> [u8; 4] {
        let o = index * CHANNELS;
        [buffer[o], buffer[o + 1], buffer[o + 2], buffer[o + 3]]
    }

    #[test]
    fn test_empty_points_give_transparent_table() {
        let buffer = build_buffer(&BTreeMap::new());
        assert_eq!(buffer.len(), BUFFER_LEN);
        assert!(buffer.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_fill_segment_skips_empty_range() {
        let mut buffer = vec![7; BUFFER_LEN];
        let white = Rgba::opaque(1.0, 1.0, 1.0);
        fill_segment(&mut buffer, (10, white), (10, white));
        fill_segment(&mut buffer, (20, white), (10, white));
        assert!(buffer.iter().all(|&b| b == 7));
    }

    #[test]
    fn test_fill_segment_is_half_open() {
        let mut buffer = vec![0; BUFFER_LEN];
        let white = Rgba::opaque(1.0, 1.0, 1.0);
        fill_segment(&mut buffer, (4, white), (8, white));
        assert_eq!(entry(&buffer, 3), [0, 0, 0, 0]);
        assert_eq!(entry(&buffer, 4), [255, 255, 255, 255]);
        assert_eq!(entry(&buffer, 7), [255, 255, 255, 255]);
        assert_eq!(entry(&buffer, 8), [0, 0, 0, 0]);
    }

    #[test]
    fn test_single_point_ramps_up_and_down() {
        let mut points = BTreeMap::new();
        points.insert(100u8, Rgba::opaque(1.0, 1.0, 1.0));
        let buffer = build_buffer(&points);

        assert_eq!(entry(&buffer, 0), [0, 0, 0, 0]);
        assert_eq!(entry(&buffer, 100), [255, 255, 255, 255]);
        assert_eq!(entry(&buffer, 255), [0, 0, 0, 0]);
        // halfway up the first segment
        assert_eq!(entry(&buffer, 50), [127, 127, 127, 127]);

        let alphas: Vec<u8> = (0..=100).map(|i| entry(&buffer, i)[3]).collect();
        assert!(alphas.windows(2).all(|w| w[0] <= w[1]));
        let alphas: Vec<u8> = (100..256).map(|i| entry(&buffer, i)[3]).collect();
        assert!(alphas.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_point_at_last_key_owns_final_entry() {
        let mut points = BTreeMap::new();
        points.insert(255u8, Rgba::opaque(0.0, 0.0, 1.0));
        let buffer = build_buffer(&points);
        assert_eq!(entry(&buffer, 255), [0, 0, 255, 255]);
        assert_eq!(entry(&buffer, 0), [0, 0, 0, 0]);
    }

    #[test]
    fn test_rebuild_overwrites_stale_entries() {
        let mut buffer = vec![200; BUFFER_LEN];
        rebuild_into(&mut buffer, &BTreeMap::new());
        assert!(buffer.iter().all(|&b| b == 0));
    }
}
