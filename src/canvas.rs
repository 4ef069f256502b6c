//! Pixel buffer primitives used by the rasterizer.

use image::RgbImage;

use crate::color::Rgb;

/// Creates a `width x height` canvas filled with a single color.
pub fn solid(width: u32, height: u32, color: Rgb) -> RgbImage {
    RgbImage::from_pixel(width, height, color.into())
}

/// Paints the rectangle `[x, x + width) x [y, y + height)` with `color`.
///
/// The rectangle is clipped to the canvas.
pub fn fill_rect(canvas: &mut RgbImage, x: u32, y: u32, width: u32, height: u32, color: Rgb) {
    let right = x.saturating_add(width).min(canvas.width());
    let bottom = y.saturating_add(height).min(canvas.height());
    let pixel = color.into();

    for py in y..bottom {
        for px in x..right {
            canvas.put_pixel(px, py, pixel);
        }
    }
}

/// Merges `src` onto `dest` with its top-left corner at `(x, y)`.
///
/// `opacity` is a percentage: 100 copies the source pixels, 0 leaves the
/// destination untouched, values in between mix the two linearly. Pixels
/// falling outside `dest` are skipped.
pub fn merge(dest: &mut RgbImage, src: &RgbImage, x: i64, y: i64, opacity: u8) {
    let opacity = u32::from(opacity.min(100));
    let dest_width = i64::from(dest.width());
    let dest_height = i64::from(dest.height());

    for (sx, sy, src_pixel) in src.enumerate_pixels() {
        let dx = x + i64::from(sx);
        let dy = y + i64::from(sy);

        if dx < 0 || dy < 0 || dx >= dest_width || dy >= dest_height {
            continue;
        }

        let dst_pixel = dest.get_pixel_mut(dx as u32, dy as u32);
        for (d, s) in dst_pixel.0.iter_mut().zip(src_pixel.0) {
            *d = mix(s, *d, opacity);
        }
    }
}

/// Mixes two channel values, `opacity` percent of `src`.
fn mix(src: u8, dst: u8, opacity: u32) -> u8 {
    let value = u32::from(src) * opacity + u32::from(dst) * (100 - opacity);
    ((value + 50) / 100) as u8
}

// ============================================================================
// Tests
// ============================================================================
