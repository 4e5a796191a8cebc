//! Preset lookup and gradient sampling.
//!
//! A preset is turned into a handful of control points; the ramp's own
//! linear interpolation fills in the rest of the table.

use std::fmt;
use std::str::FromStr;

use colorgrad::Gradient;
use serde::{Deserialize, Serialize};

use super::{diverging, sequential};
use crate::color::Rgba;
use crate::error::{RampError, Result};
use crate::ramp::ColorRamp;
use crate::MAX_KEY;

/// Key spacing between sampled control points
const PRESET_STEP: usize = 32;

/// How alpha is assigned to preset control points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Opacity {
    /// Keep the gradient's own alpha
    #[default]
    Constant,
    /// Alpha rises linearly from 0 at key 0 to 1 at key 255
    Linear,
}

impl Opacity {
    fn alpha(self, key: u8, gradient_alpha: f32) -> f32 {
        match self {
            Opacity::Constant => gradient_alpha,
            Opacity::Linear => f32::from(key) / f32::from(MAX_KEY),
        }
    }
}

impl FromStr for Opacity {
    type Err = RampError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "constant" => Ok(Opacity::Constant),
            "linear" => Ok(Opacity::Linear),
            _ => Err(RampError::InvalidParameter {
                param: "opacity".to_string(),
                message: format!("Unknown opacity mode: {}. Must be one of: constant, linear", s),
            }),
        }
    }
}

impl fmt::Display for Opacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Opacity::Constant => write!(f, "constant"),
            Opacity::Linear => write!(f, "linear"),
        }
    }
}

/// All preset names, sequential first
pub fn preset_names() -> impl Iterator<Item = &'static str> {
    sequential::NAMES
        .iter()
        .chain(diverging::NAMES.iter())
        .copied()
}

/// Get a preset gradient by name (case-insensitive)
pub fn get_preset(name: &str) -> Result<Gradient> {
    let lower = name.to_lowercase();
    sequential::gradient(&lower)
        .or_else(|| diverging::gradient(&lower))
        .ok_or_else(|| RampError::InvalidParameter {
            param: "preset".to_string(),
            message: format!("Unknown preset: {}", name),
        })
}

/// Keys at which presets are sampled: every 32 keys, plus the last key
pub fn preset_keys() -> impl Iterator<Item = u8> {
    (0..=usize::from(MAX_KEY))
        .step_by(PRESET_STEP)
        .map(|key| key as u8)
        .chain(std::iter::once(MAX_KEY))
}

/// Sample `gradient` across its domain into a new ramp
pub fn ramp_from_gradient(gradient: &Gradient, opacity: Opacity) -> ColorRamp {
    let (start, end) = gradient.domain();
    ColorRamp::from_points(preset_keys().map(|key| {
        let t = start + (end - start) * f64::from(key) / f64::from(MAX_KEY);
        let c = gradient.at(t);
        let color = Rgba::new(c.r as f32, c.g as f32, c.b as f32, c.a as f32);
        (key, color.with_alpha(opacity.alpha(key, color.a)))
    }))
}

/// Build the ramp for a named preset
pub fn preset_ramp(name: &str, opacity: Opacity) -> Result<ColorRamp> {
    let gradient = get_preset(name)?;
    Ok(ramp_from_gradient(&gradient, opacity))
}
