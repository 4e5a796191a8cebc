//! Colors and data values.
//!
//! Both types sanitize on the way in: colors clamp each channel into
//! `[0, 1]` and data values clamp into the key range `[0, 255]`.

use crate::MAX_KEY;

/// An RGBA color with each channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Transparent black, the color of the implicit ramp endpoints
    pub const TRANSPARENT: Rgba = Rgba {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    /// Create a color, clamping every channel into `[0, 1]`
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: clamp_unit(r),
            g: clamp_unit(g),
            b: clamp_unit(b),
            a: clamp_unit(a),
        }
    }

    /// Opaque color from three channels
    pub fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Copy of this color with every channel clamped into `[0, 1]`
    pub fn clamped(self) -> Self {
        Self::new(self.r, self.g, self.b, self.a)
    }

    /// Same color with a different alpha
    pub fn with_alpha(self, a: f32) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[f32; 4]> for Rgba {
    fn from(c: [f32; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}

/// Clamp a channel into `[0, 1]`; NaN becomes 0.
pub fn clamp_unit(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

/// A value that can address a control point.
///
/// Integers are keys and clamp directly into `[0, 255]`. Floats are
/// normalized data values: they are scaled by 255 and truncated before
/// clamping.
pub trait DataValue: Copy {
    fn to_key(self) -> u8;
}

impl DataValue for u8 {
    fn to_key(self) -> u8 {
        self
    }
}

macro_rules! unsigned_data_value {
    ($($t:ty),*) => {
        $(
            impl DataValue for $t {
                fn to_key(self) -> u8 {
                    self.min(MAX_KEY as $t) as u8
                }
            }
        )*
    };
}

macro_rules! signed_data_value {
    ($($t:ty),*) => {
        $(
            impl DataValue for $t {
                fn to_key(self) -> u8 {
                    self.clamp(0, MAX_KEY as $t) as u8
                }
            }
        )*
    };
}

unsigned_data_value!(u16, u32, u64, usize);
signed_data_value!(i16, i32, i64, isize);

impl DataValue for f32 {
    fn to_key(self) -> u8 {
        (self as f64).to_key()
    }
}

impl DataValue for f64 {
    fn to_key(self) -> u8 {
        let scaled = self * MAX_KEY as f64;
        if scaled.is_nan() {
            0
        } else {
            // truncation toward zero, then clamp
            scaled.trunc().clamp(0.0, MAX_KEY as f64) as u8
        }
    }
}
