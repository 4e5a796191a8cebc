//! Common utilities for the ramp interpolation.
//!
//! Channel math shared by the segment fill: blending two colors and
//! quantizing the result into lookup table bytes.

use crate::color::Rgba;

/// Linear interpolation between two channel values: `(1 - t) * a + t * b`
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    (1.0 - t) * a + t * b
}

/// Linear interpolation between two colors, per channel
pub fn lerp_rgba(from: Rgba, to: Rgba, t: f32) -> Rgba {
    Rgba {
        r: lerp(from.r, to.r, t),
        g: lerp(from.g, to.g, t),
        b: lerp(from.b, to.b, t),
        a: lerp(from.a, to.a, t),
    }
}

/// Scale a unit channel to a byte, truncating
pub fn quantize(channel: f32) -> u8 {
    (channel * 255.0) as u8
}

/// Quantize all four channels of a color
pub fn quantize_rgba(color: Rgba) -> [u8; 4] {
    [
        quantize(color.r),
        quantize(color.g),
        quantize(color.b),
        quantize(color.a),
    ]
}
