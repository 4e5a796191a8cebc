//! Named preset ramps.
//!
//! Presets sample matplotlib-style gradients from `colorgrad` at evenly
//! spaced keys and load them as control points.

pub mod colormap;
pub mod diverging;
pub mod sequential;

pub use colormap::{
    get_preset, preset_keys, preset_names, preset_ramp, ramp_from_gradient, Opacity,
};
