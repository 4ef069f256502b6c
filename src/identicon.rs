//! The identicon facade: derive once, render as often as needed.

use std::io::Write;

use image::RgbImage;

use crate::encode;
use crate::error::Result;
use crate::fingerprint::Fingerprint;
use crate::options::RenderOptions;
use crate::raster;
use crate::selector::{PaletteSelector, RandomSelector};

/// An identicon for one input string.
///
/// Holds the derived [`Fingerprint`]; every render builds a fresh image
/// from it and the given [`RenderOptions`].
///
/// # Example
///
/// ```
/// use identicon_renderer::{Identicon, RenderOptions};
///
/// let identicon = Identicon::new("benjamin@yzalis.com");
///
/// let image = identicon.render(&RenderOptions::new(128)).unwrap();
/// assert_eq!(image.dimensions(), (128, 128));
///
/// let uri = identicon.data_uri(&RenderOptions::default()).unwrap();
/// assert!(uri.starts_with("data:image/png;base64,"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identicon {
    fingerprint: Fingerprint,
}

impl Identicon {
    /// Derives the identicon of `input`.
    pub fn new(input: impl AsRef<[u8]>) -> Self {
        Self {
            fingerprint: Fingerprint::derive(input),
        }
    }

    /// Derives the identicon of an optional input, failing with
    /// [`InvalidInput`](crate::IdenticonError::InvalidInput) when absent.
    pub fn from_input(input: Option<&str>) -> Result<Self> {
        Ok(Self {
            fingerprint: Fingerprint::from_input(input)?,
        })
    }

    pub fn fingerprint(&self) -> &Fingerprint {
        &self.fingerprint
    }

    /// Renders the identicon, picking palette entries at random.
    pub fn render(&self, options: &RenderOptions) -> Result<RgbImage> {
        self.render_with(options, &mut RandomSelector::new())
    }

    /// Renders the identicon, picking palette entries with `selector`.
    pub fn render_with<S>(&self, options: &RenderOptions, selector: &mut S) -> Result<RgbImage>
    where
        S: PaletteSelector + ?Sized,
    {
        let params = options.resolve(self.fingerprint.color(), selector)?;
        raster::render(self.fingerprint.grid(), &params)
    }

    /// Renders and encodes the identicon as PNG bytes.
    pub fn png_data(&self, options: &RenderOptions) -> Result<Vec<u8>> {
        encode::png_bytes(&self.render(options)?)
    }

    /// Renders and streams the identicon as PNG into `writer`.
    ///
    /// Callers serving it over HTTP should send
    /// [`CONTENT_TYPE`](crate::encode::CONTENT_TYPE) along with it.
    pub fn write_png<W: Write>(&self, options: &RenderOptions, writer: W) -> Result<()> {
        encode::write_png(&self.render(options)?, writer)
    }

    /// Renders the identicon as a `data:image/png;base64,...` URI.
    pub fn data_uri(&self, options: &RenderOptions) -> Result<String> {
        Ok(encode::data_uri(&self.png_data(options)?))
    }
}

// ============================================================================
// Tests
// ============================================================================
