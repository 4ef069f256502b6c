//! Rasterization of a [`Grid`] into a bordered square bitmap.
//!
//! The image is built in two passes. An inner canvas covering the drawable
//! area is painted with the cell pattern, then merged at full opacity into
//! the center of an outer canvas filled with the background color. The
//! uncovered ring around it forms the border.

use image::RgbImage;

use crate::canvas;
use crate::color::Rgb;
use crate::error::{IdenticonError, Result};
use crate::grid::{GRID_SIZE, Grid};

/// Fraction of the output size reserved for the border by default.
pub const DEFAULT_BORDER_RATIO: f64 = 0.2;

/// Largest accepted output side in pixels.
pub const MAX_SIZE: u32 = 4096;

/// Opacity used when merging the drawable area into the output, in percent.
const OPACITY: u8 = 100;

// ============================================================================
// Inks
// ============================================================================

/// The two colors painted on the drawable area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inks {
    /// Fills the drawable area before any cell is painted.
    pub surround: Rgb,
    /// Painted over every filled cell.
    pub pattern: Rgb,
}

impl Inks {
    /// The identicon paint scheme: filled cells are punched through to the
    /// background, so the pattern shows in the background color while the
    /// ink color surrounds it.
    pub fn punched(ink: Rgb, background: Rgb) -> Self {
        Self {
            surround: ink,
            pattern: background,
        }
    }
}

// ============================================================================
// Layout
// ============================================================================

/// Pixel geometry of an identicon of a given size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Side of the whole image.
    pub size: u32,
    /// Side of the drawable area inside the border.
    pub drawable: u32,
    /// Side of one grid cell.
    pub pixel_ratio: u32,
    /// Offset of the drawable area from the top-left corner, on both axes.
    pub margin: u32,
}

impl Layout {
    /// Computes the layout for a `size x size` image with `border_ratio` of
    /// it reserved as border.
    ///
    /// Fails with [`IdenticonError::InvalidDimensions`] if `size` is zero or
    /// above [`MAX_SIZE`], or if `border_ratio` is not in `[0, 1)`.
    pub fn compute(size: u32, border_ratio: f64) -> Result<Self> {
        if size == 0 {
            return Err(IdenticonError::InvalidDimensions(
                "output size must be positive".to_string(),
            ));
        }
        if size > MAX_SIZE {
            return Err(IdenticonError::InvalidDimensions(format!(
                "output size must be at most {MAX_SIZE}, got {size}"
            )));
        }
        if !(0.0..1.0).contains(&border_ratio) {
            return Err(IdenticonError::InvalidDimensions(format!(
                "border ratio must be in [0, 1), got {border_ratio}"
            )));
        }

        let drawable = (f64::from(size) * (1.0 - border_ratio)).round() as u32;
        let pixel_ratio = (f64::from(drawable) / GRID_SIZE as f64).round() as u32;
        let margin = (size - drawable) / 2;

        Ok(Self {
            size,
            drawable,
            pixel_ratio,
            margin,
        })
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Everything needed to rasterize a grid besides the grid itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterParams {
    /// Side of the output image in pixels.
    pub size: u32,
    /// Fraction of `size` reserved as a uniform border, in `[0, 1)`.
    pub border_ratio: f64,
    /// Foreground color.
    pub ink: Rgb,
    /// Background color, also used for the border.
    pub background: Rgb,
}

impl RasterParams {
    /// Parameters with the default border and a white background.
    pub fn new(size: u32, ink: Rgb) -> Self {
        Self {
            size,
            border_ratio: DEFAULT_BORDER_RATIO,
            ink,
            background: Rgb::WHITE,
        }
    }
}

/// Renders `grid` into a `size x size` RGB image.
///
/// Cells `(r, c)` map to the block `[c * pr, (c + 1) * pr) x [r * pr,
/// (r + 1) * pr)` of the drawable area, `pr` being the layout's pixel ratio.
/// Blocks are clipped to the drawable area.
///
/// # Example
///
/// ```
/// use identicon_renderer::{Fingerprint, RasterParams, render};
///
/// let fingerprint = Fingerprint::derive("user@example.org");
/// let image = render(fingerprint.grid(), &RasterParams::new(64, fingerprint.color())).unwrap();
/// assert_eq!(image.dimensions(), (64, 64));
/// ```
pub fn render(grid: &Grid, params: &RasterParams) -> Result<RgbImage> {
    let layout = Layout::compute(params.size, params.border_ratio)?;
    let inks = Inks::punched(params.ink, params.background);

    log::debug!(
        "rendering {}px identicon: drawable {}px, cell {}px, margin {}px",
        layout.size,
        layout.drawable,
        layout.pixel_ratio,
        layout.margin
    );

    let mut drawable = canvas::solid(layout.drawable, layout.drawable, inks.surround);
    let pr = layout.pixel_ratio;
    for (row, column) in grid.filled_cells() {
        canvas::fill_rect(
            &mut drawable,
            column as u32 * pr,
            row as u32 * pr,
            pr,
            pr,
            inks.pattern,
        );
    }

    let mut output = canvas::solid(layout.size, layout.size, params.background);
    let margin = i64::from(layout.margin);
    canvas::merge(&mut output, &drawable, margin, margin, OPACITY);

    Ok(output)
}

// ============================================================================
// Tests
// ============================================================================
