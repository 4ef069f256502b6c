//! Error type shared by every stage of identicon generation.

use thiserror::Error;

/// Errors raised while deriving, rendering or encoding an identicon.
///
/// All of them are deterministic input-validation failures except
/// [`Encoding`](Self::Encoding), which is reported by the PNG encoder.
#[derive(Debug, Error)]
pub enum IdenticonError {
    /// The source string was absent.
    #[error("the identicon source string cannot be absent")]
    InvalidInput,

    /// A color could not be parsed at the boundary.
    #[error("invalid color {0:?}: expected 6 hex digits, optionally prefixed with '#'")]
    InvalidColorFormat(String),

    /// The output size or border ratio is out of range.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// The image encoder failed.
    #[error("failed to encode image: {0}")]
    Encoding(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, IdenticonError>;
