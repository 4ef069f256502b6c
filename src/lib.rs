//! identicon-renderer: deterministic identicons from arbitrary strings
//!
//! An input string (an email address, a username) is hashed with MD5 and
//! the digest is decoded into a mirrored 5x5 [`Grid`] and an ink color.
//! The grid is then rasterized into a bordered square bitmap. The same
//! string always gives the same image, so nothing needs to be stored.
//!
//! # Example
//!
//! ```
//! use identicon_renderer::{Identicon, RenderOptions};
//!
//! let identicon = Identicon::new("user@example.org");
//!
//! // Hash-derived look, 64x64 with a 20% white border
//! let png = identicon.png_data(&RenderOptions::default()).unwrap();
//! assert!(!png.is_empty());
//!
//! // Same pattern in a house color on a dark background
//! let options = RenderOptions::new(128)
//!     .with_palette(["#3988a4"])
//!     .with_background("#0a0a0a");
//! let image = identicon.render(&options).unwrap();
//! assert_eq!(image.dimensions(), (128, 128));
//! ```
//!
//! # Lower-level pieces
//!
//! [`Fingerprint`] exposes the digest, grid and color on their own, and
//! [`render`] rasterizes any grid with explicit [`RasterParams`]:
//!
//! ```
//! use identicon_renderer::{Fingerprint, RasterParams, Rgb, render};
//!
//! let fingerprint = Fingerprint::derive("");
//! println!("{}", fingerprint.grid());
//!
//! let params = RasterParams {
//!     background: Rgb::new(0, 0, 0),
//!     ..RasterParams::new(50, fingerprint.color())
//! };
//! let image = render(fingerprint.grid(), &params).unwrap();
//! assert_eq!(image.get_pixel(0, 0).0, [0, 0, 0]);
//! ```

mod canvas;
mod color;
pub mod encode;
mod error;
mod fingerprint;
mod grid;
mod identicon;
mod options;
mod raster;
mod selector;

pub use color::{ColorInput, Rgb};
pub use encode::{CONTENT_TYPE, data_uri, png_bytes, write_png};
pub use error::{IdenticonError, Result};
pub use fingerprint::{DIGEST_LEN, Digest, Fingerprint};
pub use grid::{GRID_SIZE, Grid, nibble_is_filled};
pub use identicon::Identicon;
pub use options::{DEFAULT_SIZE, RenderOptions};
pub use raster::{DEFAULT_BORDER_RATIO, Inks, Layout, MAX_SIZE, RasterParams, render};
pub use selector::{FixedSelector, PaletteSelector, RandomSelector};
