//! Rendering seam for the lookup table.
//!
//! A renderer receives the 1024-byte table and a target rectangle and
//! draws the table stretched across it, one texel per column band.

pub mod raster;

use std::fmt;
use std::str::FromStr;

use crate::error::{RampError, Result};

pub use raster::ImageRenderer;

/// Target rectangle in pixels, origin at the top-left of the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Something that can draw a lookup table into a viewport
pub trait RampRenderer {
    /// Draw `buffer` (256 RGBA entries) stretched over `target`
    fn draw(&mut self, buffer: &[u8], target: Viewport) -> Result<()>;
}

/// Encoded image formats for rendered ramps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Jpeg,
}

impl OutputFormat {
    pub fn mime_type(self) -> &'static str {
        match self {
            OutputFormat::Png => "image/png",
            OutputFormat::Jpeg => "image/jpeg",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = RampError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "jpeg" | "jpg" => Ok(OutputFormat::Jpeg),
            _ => Err(RampError::InvalidParameter {
                param: "format".to_string(),
                message: "Format must be 'png' or 'jpeg'".to_string(),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Png => write!(f, "png"),
            OutputFormat::Jpeg => write!(f, "jpeg"),
        }
    }
}
