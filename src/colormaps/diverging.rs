//! Diverging gradients (two hues meeting at a neutral midpoint).

use colorgrad::Gradient;

/// Names of the diverging presets
pub const NAMES: &[&str] = &["rdbu", "spectral"];

/// Look up a diverging gradient by lowercase name
pub fn gradient(name: &str) -> Option<Gradient> {
    match name {
        "rdbu" => Some(colorgrad::rd_bu()),
        "spectral" => Some(colorgrad::spectral()),
        _ => None,
    }
}
