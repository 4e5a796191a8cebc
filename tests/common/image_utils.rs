//! Image utilities for testing rendered ramps.

use image::{DynamicImage, GenericImageView, ImageError, ImageFormat};

/// Load an image from a byte array
pub fn load_image_from_bytes(bytes: &[u8]) -> Result<DynamicImage, ImageError> {
    image::load_from_memory(bytes)
}

/// Detect image format from bytes
pub fn detect_image_format(bytes: &[u8]) -> Option<ImageFormat> {
    image::guess_format(bytes).ok()
}

/// Check if an image has the expected dimensions
pub fn assert_image_dimensions(
    image: &DynamicImage,
    expected_width: u32,
    expected_height: u32,
) -> Result<(), String> {
    let (actual_width, actual_height) = image.dimensions();

    if actual_width != expected_width || actual_height != expected_height {
        return Err(format!(
            "Image dimensions differ: actual = {}x{}, expected = {}x{}",
            actual_width, actual_height, expected_width, expected_height
        ));
    }

    Ok(())
}

/// Check if encoded bytes have the expected format
pub fn assert_image_format(bytes: &[u8], expected_format: ImageFormat) -> Result<(), String> {
    let actual_format =
        detect_image_format(bytes).ok_or_else(|| "Could not detect image format".to_string())?;

    if actual_format != expected_format {
        return Err(format!(
            "Image format differs: actual = {:?}, expected = {:?}",
            actual_format, expected_format
        ));
    }

    Ok(())
}

/// Check that every row of an image is identical, as a 1-D ramp should be
pub fn assert_rows_identical(image: &DynamicImage) -> Result<(), String> {
    let (width, height) = image.dimensions();
    for y in 1..height {
        for x in 0..width {
            if image.get_pixel(x, y) != image.get_pixel(x, 0) {
                return Err(format!("Row {} differs from row 0 at column {}", y, x));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgba};

    #[test]
    fn test_detect_image_format() {
        let img = ImageBuffer::<Rgba<u8>, Vec<u8>>::new(2, 2);
        let mut png_bytes = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut png_bytes), ImageFormat::Png)
            .unwrap();

        assert_eq!(detect_image_format(&png_bytes), Some(ImageFormat::Png));
    }

    #[test]
    fn test_assert_rows_identical() {
        let mut img = ImageBuffer::<Rgba<u8>, Vec<u8>>::new(3, 2);
        for (x, _y, pixel) in img.enumerate_pixels_mut() {
            *pixel = Rgba([x as u8, 0, 0, 255]);
        }
        let img = DynamicImage::ImageRgba8(img);
        assert!(assert_rows_identical(&img).is_ok());
        assert!(assert_image_dimensions(&img, 3, 2).is_ok());
        assert!(assert_image_dimensions(&img, 2, 3).is_err());
    }
}
