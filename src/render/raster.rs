//! CPU renderer backed by an `image` canvas.
//!
//! Mirrors a textured full-screen quad: each pixel in the viewport samples
//! the nearest texel at `u = (x + 0.5) / width`, so every row is identical.

use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageBuffer, ImageFormat, RgbaImage};
use tracing::debug;

use super::{OutputFormat, RampRenderer, Viewport};
use crate::error::{RampError, Result};
use crate::{BUFFER_LEN, CHANNELS, TABLE_SIZE};

/// Renders lookup tables into an in-memory RGBA image
#[derive(Debug, Clone)]
pub struct ImageRenderer {
    canvas: RgbaImage,
}

impl ImageRenderer {
    /// Create a transparent canvas
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::with_background(width, height, [0, 0, 0, 0])
    }

    /// Create a canvas filled with `background`
    pub fn with_background(width: u32, height: u32, background: [u8; 4]) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(RampError::Render {
                message: format!("Canvas must be non-empty, got {}x{}", width, height),
            });
        }

        Ok(Self {
            canvas: ImageBuffer::from_pixel(width, height, image::Rgba(background)),
        })
    }

    /// A viewport covering the whole canvas
    pub fn full_viewport(&self) -> Viewport {
        Viewport::new(0, 0, self.canvas.width(), self.canvas.height())
    }

    pub fn canvas(&self) -> &RgbaImage {
        &self.canvas
    }

    pub fn into_image(self) -> RgbaImage {
        self.canvas
    }

    /// Encode the canvas. JPEG drops the alpha channel.
    pub fn encode(&self, format: OutputFormat) -> Result<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());

        match format {
            OutputFormat::Png => {
                self.canvas
                    .write_to(&mut buffer, ImageFormat::Png)
                    .map_err(|e| RampError::ImageGeneration {
                        message: format!("Failed to encode PNG: {}", e),
                    })?;
            }
            OutputFormat::Jpeg => {
                DynamicImage::ImageRgba8(self.canvas.clone())
                    .to_rgb8()
                    .write_to(&mut buffer, ImageFormat::Jpeg)
                    .map_err(|e| RampError::ImageGeneration {
                        message: format!("Failed to encode JPEG: {}", e),
                    })?;
            }
        }

        Ok(buffer.into_inner())
    }

    /// Encode the canvas and write it to `path`
    pub fn save(&self, path: &Path, format: OutputFormat) -> Result<()> {
        let bytes = self.encode(format)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

impl RampRenderer for ImageRenderer {
    fn draw(&mut self, buffer: &[u8], target: Viewport) -> Result<()> {
        if buffer.len() != BUFFER_LEN {
            return Err(RampError::Render {
                message: format!(
                    "Lookup table must be {} bytes, got {}",
                    BUFFER_LEN,
                    buffer.len()
                ),
            });
        }
        if target.is_empty() {
            return Err(RampError::Render {
                message: format!("Viewport has zero area: {:?}", target),
            });
        }

        let (canvas_width, canvas_height) = self.canvas.dimensions();
        let x_end = target.x.saturating_add(target.width).min(canvas_width);
        let y_end = target.y.saturating_add(target.height).min(canvas_height);

        for x in target.x..x_end {
            let offset = texel_index(x - target.x, target.width) * CHANNELS;
            let pixel = image::Rgba([
                buffer[offset],
                buffer[offset + 1],
                buffer[offset + 2],
                buffer[offset + 3],
            ]);
            for y in target.y..y_end {
                self.canvas.put_pixel(x, y, pixel);
            }
        }

        debug!(
            viewport = ?target,
            drawn_columns = x_end.saturating_sub(target.x),
            drawn_rows = y_end.saturating_sub(target.y),
            "Drew color ramp"
        );

        Ok(())
    }
}

/// Table entry sampled by viewport column `column`
fn texel_index(column: u32, width: u32) -> usize {
    let u = (f64::from(column) + 0.5) / f64::from(width);
    ((u * TABLE_SIZE as f64) as usize).min(TABLE_SIZE - 1)
}
