//! Serializable render options.
//!
//! [`RenderOptions`] carries everything a caller can configure about one
//! render. It serializes to camelCase JSON so it can be stored in a config
//! file or passed between processes.
//!
//! # Example
//!
//! ```
//! use identicon_renderer::RenderOptions;
//!
//! let options = RenderOptions::new(128)
//!     .with_palette(["#3988a4", "#d0944d"])
//!     .with_background("#0a0a0a");
//!
//! let json = options.to_json().unwrap();
//! let restored = RenderOptions::from_json(&json).unwrap();
//! assert_eq!(restored, options);
//! ```

use serde::{Deserialize, Serialize};

use crate::color::{ColorInput, Rgb};
use crate::error::Result;
use crate::raster::{DEFAULT_BORDER_RATIO, Layout, RasterParams};
use crate::selector::PaletteSelector;

/// Output size used when none is configured.
pub const DEFAULT_SIZE: u32 = 64;

/// Options for rendering one identicon.
///
/// # JSON Format
///
/// ```json
/// {
///   "size": 128,
///   "palette": ["#3988a4", [208, 148, 77]],
///   "background": "#0a0a0a",
///   "borderRatio": 0.2
/// }
/// ```
///
/// Every field is optional when deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct RenderOptions {
    /// Side of the output image in pixels.
    #[serde(default = "default_size")]
    pub size: u32,

    /// Colors overriding the hash-derived ink. One is picked per render.
    /// An absent or empty palette keeps the hash color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palette: Option<Vec<ColorInput>>,

    /// Background and border color. White when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<ColorInput>,

    /// Fraction of the size reserved as border, in `[0, 1)`.
    #[serde(default = "default_border_ratio")]
    pub border_ratio: f64,
}

fn default_size() -> u32 {
    DEFAULT_SIZE
}

fn default_border_ratio() -> f64 {
    DEFAULT_BORDER_RATIO
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

impl RenderOptions {
    /// Options for a `size x size` image with every other setting at its
    /// default.
    pub fn new(size: u32) -> Self {
        Self {
            size,
            palette: None,
            background: None,
            border_ratio: DEFAULT_BORDER_RATIO,
        }
    }

    /// Sets the palette overriding the hash color.
    pub fn with_palette<I, C>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<ColorInput>,
    {
        self.palette = Some(colors.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the background color.
    pub fn with_background(mut self, color: impl Into<ColorInput>) -> Self {
        self.background = Some(color.into());
        self
    }

    /// Sets the border ratio.
    pub fn with_border_ratio(mut self, border_ratio: f64) -> Self {
        self.border_ratio = border_ratio;
        self
    }

    /// Checks the size and border ratio.
    pub fn layout(&self) -> Result<Layout> {
        Layout::compute(self.size, self.border_ratio)
    }

    /// Parses the palette. Returns an empty list when no palette is set.
    pub fn palette_colors(&self) -> Result<Vec<Rgb>> {
        self.palette
            .iter()
            .flatten()
            .map(ColorInput::to_rgb)
            .collect()
    }

    /// Parses the background, defaulting to white.
    pub fn background_color(&self) -> Result<Rgb> {
        Ok(self
            .background
            .as_ref()
            .map(ColorInput::to_rgb)
            .transpose()?
            .unwrap_or(Rgb::WHITE))
    }

    /// Resolves the options into raster parameters.
    ///
    /// The ink is `hash_color` unless a palette is set, in which case
    /// `selector` picks one of its entries. Every color is validated even
    /// when it ends up unused.
    pub fn resolve<S>(&self, hash_color: Rgb, selector: &mut S) -> Result<RasterParams>
    where
        S: PaletteSelector + ?Sized,
    {
        self.layout()?;
        let background = self.background_color()?;
        let palette = self.palette_colors()?;

        let ink = if palette.is_empty() {
            if self.palette.is_some() {
                log::warn!("palette is empty, keeping the hash color");
            }
            hash_color
        } else {
            let index = selector.select(palette.len()) % palette.len();
            log::debug!("palette entry {} of {} overrides ink", index, palette.len());
            palette[index]
        };

        Ok(RasterParams {
            size: self.size,
            border_ratio: self.border_ratio,
            ink,
            background,
        })
    }

    /// Serializes the options to a JSON string.
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the options to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes options from a JSON string.
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IdenticonError;
    use crate::selector::FixedSelector;

    const HASH_COLOR: Rgb = Rgb::new(16, 32, 48);

    #[test]
    fn empty_json_gives_defaults() {
        let options = RenderOptions::from_json("{}").unwrap();
        assert_eq!(options, RenderOptions::default());
        assert_eq!(options.size, 64);
        assert_eq!(options.border_ratio, 0.2);
        assert!(options.palette.is_none());
        assert!(options.background.is_none());
    }

    #[test]
    fn json_uses_camel_case() {
        let json = RenderOptions::new(32)
            .with_border_ratio(0.1)
            .to_json_pretty()
            .unwrap();
        assert!(json.contains("\"borderRatio\""));
        assert!(!json.contains("\"palette\""));
        assert!(!json.contains("\"background\""));
    }

    #[test]
    fn json_accepts_mixed_color_forms() {
        let options = RenderOptions::from_json(
            r##"{"size": 100, "palette": ["#ff0000", [0, 255, 0]], "background": "000000"}"##,
        )
        .unwrap();

        assert_eq!(options.size, 100);
        assert_eq!(
            options.palette_colors().unwrap(),
            vec![Rgb::new(255, 0, 0), Rgb::new(0, 255, 0)]
        );
        assert_eq!(options.background_color().unwrap(), Rgb::new(0, 0, 0));
    }

    #[test]
    fn resolve_without_palette_keeps_hash_color() {
        let params = RenderOptions::new(50)
            .resolve(HASH_COLOR, &mut FixedSelector(3))
            .unwrap();
        assert_eq!(params.ink, HASH_COLOR);
        assert_eq!(params.background, Rgb::WHITE);
        assert_eq!(params.size, 50);
        assert_eq!(params.border_ratio, DEFAULT_BORDER_RATIO);
    }

    #[test]
    fn resolve_empty_palette_keeps_hash_color() {
        let options = RenderOptions::new(50).with_palette(Vec::<ColorInput>::new());
        assert_eq!(options.palette, Some(Vec::new()));

        let params = options.resolve(HASH_COLOR, &mut FixedSelector(2)).unwrap();
        assert_eq!(params.ink, HASH_COLOR);

        let from_json = RenderOptions::from_json(r#"{"size": 50, "palette": []}"#).unwrap();
        assert_eq!(from_json, options);
    }

    #[test]
    fn resolve_single_entry_palette_forces_ink() {
        let params = RenderOptions::new(50)
            .with_palette(["#abcdef"])
            .resolve(HASH_COLOR, &mut FixedSelector(7))
            .unwrap();
        assert_eq!(params.ink, Rgb::new(0xab, 0xcd, 0xef));
    }

    #[test]
    fn resolve_uses_selected_entry() {
        let options = RenderOptions::new(50).with_palette([[1u8, 1, 1], [2, 2, 2], [3, 3, 3]]);
        let params = options.resolve(HASH_COLOR, &mut FixedSelector(1)).unwrap();
        assert_eq!(params.ink, Rgb::new(2, 2, 2));
    }

    #[test]
    fn resolve_rejects_bad_colors() {
        let bad_palette = RenderOptions::new(50).with_palette(["#12345"]);
        assert!(matches!(
            bad_palette.resolve(HASH_COLOR, &mut FixedSelector(0)),
            Err(IdenticonError::InvalidColorFormat(_))
        ));

        let bad_background = RenderOptions::new(50).with_background("white");
        assert!(matches!(
            bad_background.resolve(HASH_COLOR, &mut FixedSelector(0)),
            Err(IdenticonError::InvalidColorFormat(_))
        ));
    }

    #[test]
    fn resolve_rejects_bad_dimensions() {
        let options = RenderOptions::new(0);
        assert!(matches!(
            options.resolve(HASH_COLOR, &mut FixedSelector(0)),
            Err(IdenticonError::InvalidDimensions(_))
        ));

        let options = RenderOptions::new(10).with_border_ratio(1.0);
        assert!(matches!(
            options.resolve(HASH_COLOR, &mut FixedSelector(0)),
            Err(IdenticonError::InvalidDimensions(_))
        ));
    }
}
