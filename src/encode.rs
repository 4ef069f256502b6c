//! PNG encoding and the output formats built on it.

use std::io::Write;

use base64::{Engine as _, engine};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbImage};

use crate::error::Result;

/// Media type of the encoded images, suitable for a `Content-Type` header.
pub const CONTENT_TYPE: &str = "image/png";

/// Encodes `image` as PNG into any byte sink, such as a response body.
pub fn write_png<W: Write>(image: &RgbImage, writer: W) -> Result<()> {
    PngEncoder::new(writer).write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ExtendedColorType::Rgb8,
    )?;
    Ok(())
}

/// Encodes `image` as PNG bytes.
pub fn png_bytes(image: &RgbImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    write_png(image, &mut bytes)?;
    Ok(bytes)
}

/// Wraps PNG bytes into a `data:image/png;base64,...` URI.
pub fn data_uri(png: &[u8]) -> String {
    format!(
        "data:{};base64,{}",
        CONTENT_TYPE,
        engine::general_purpose::STANDARD.encode(png)
    )
}

// ============================================================================
// Tests
// ============================================================================
