//! Derivation of the grid and ink color from an input string.
//!
//! The input is hashed with MD5. The high nibble of each of the 16 digest
//! bytes (the first hex character of each two-character group) drives the
//! identicon: the first 15 decode into the [`Grid`], the last three give the
//! color channels. Changing the hash changes every identicon, so the
//! algorithm is fixed.

use std::fmt;

use md5::{Digest as _, Md5};

use crate::color::Rgb;
use crate::error::{IdenticonError, Result};
use crate::grid::Grid;

/// Number of bytes in an MD5 digest.
pub const DIGEST_LEN: usize = 16;

/// Multiplier turning a nibble into an 8-bit channel (0, 16, ..., 240).
const CHANNEL_SCALE: u8 = 16;

// ============================================================================
// Digest
// ============================================================================

/// The MD5 digest of an identicon input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// Hashes the given bytes.
    pub fn of(input: &[u8]) -> Self {
        let mut bytes = [0u8; DIGEST_LEN];
        bytes.copy_from_slice(&Md5::digest(input));
        Self(bytes)
    }

    /// The raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Returns the digest as 32 lowercase hex characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Returns the leading hex digit of every two-character group.
    pub fn nibbles(&self) -> [u8; DIGEST_LEN] {
        self.0.map(|b| b >> 4)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// ============================================================================
// Fingerprint
// ============================================================================

/// The deterministic visual fingerprint of a string.
///
/// # Example
///
/// ```
/// use identicon_renderer::{Fingerprint, Rgb};
///
/// let fingerprint = Fingerprint::derive("");
/// assert_eq!(fingerprint.digest().to_hex(), "d41d8cd98f00b204e9800998ecf8427e");
/// assert_eq!(fingerprint.color(), Rgb::new(112, 64, 240));
/// assert!(fingerprint.grid().is_symmetric());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    digest: Digest,
    grid: Grid,
    color: Rgb,
}

impl Fingerprint {
    /// Derives the fingerprint of `input`. The empty string is valid.
    pub fn derive(input: impl AsRef<[u8]>) -> Self {
        let digest = Digest::of(input.as_ref());
        let nibbles = digest.nibbles();

        let grid = Grid::from_nibbles(&nibbles);
        let color = Rgb::new(
            nibbles[DIGEST_LEN - 1] * CHANNEL_SCALE,
            nibbles[DIGEST_LEN - 2] * CHANNEL_SCALE,
            nibbles[DIGEST_LEN - 3] * CHANNEL_SCALE,
        );

        log::debug!("derived fingerprint {} with color {}", digest, color);

        Self {
            digest,
            grid,
            color,
        }
    }

    /// Derives the fingerprint of an optional input.
    ///
    /// Fails with [`IdenticonError::InvalidInput`] when the input is absent.
    pub fn from_input(input: Option<&str>) -> Result<Self> {
        input.map(Self::derive).ok_or(IdenticonError::InvalidInput)
    }

    pub fn digest(&self) -> &Digest {
        &self.digest
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The hash-derived ink color. Every channel is a multiple of 16.
    pub fn color(&self) -> Rgb {
        self.color
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const CORPUS: &[&str] = &[
        "",
        "a",
        "hello world",
        "benjamin@yzalis.com",
        "user@example.org",
        "Zaphod Beeblebrox",
        "🦆",
        "0123456789abcdef0123456789abcdef",
        " ",
        "\0",
    ];

    fn rows(fingerprint: &Fingerprint) -> String {
        fingerprint.grid().to_string()
    }

    #[test]
    fn digest_matches_md5() {
        assert_eq!(
            Digest::of(b"").to_hex(),
            "d41d8cd98f00b204e9800998ecf8427e"
        );
        assert_eq!(
            Digest::of(b"hello world").to_string(),
            "5eb63bbbe01eeed093cb22bb8f5acdc3"
        );
    }

    #[test]
    fn nibbles_are_leading_hex_digits() {
        let digest = Digest::of(b"");
        assert_eq!(digest.as_bytes()[..2], [0xd4, 0x1d]);
        for (nibble, byte) in digest.nibbles().iter().zip(digest.as_bytes()) {
            assert_eq!(*nibble, byte >> 4);
        }
        // d4 1d 8c d9 8f 00 b2 04 e9 80 09 98 ec f8 42 7e
        assert_eq!(
            digest.nibbles(),
            [13, 1, 8, 13, 8, 0, 11, 0, 14, 8, 0, 9, 14, 15, 4, 7]
        );
    }

    #[test]
    fn empty_string_golden() {
        let fingerprint = Fingerprint::derive("");
        assert_eq!(
            rows(&fingerprint),
            "X.X.X\nXX.XX\nX.X.X\nX.X.X\nXX.XX"
        );
        assert_eq!(fingerprint.color(), Rgb::new(112, 64, 240));
    }

    #[test]
    fn hello_world_golden() {
        let fingerprint = Fingerprint::derive("hello world");
        assert_eq!(
            rows(&fingerprint),
            "XX.XX\nXX.XX\nXXXXX\nX.X.X\nXXXXX"
        );
        assert_eq!(fingerprint.color(), Rgb::new(192, 192, 80));
    }

    #[test]
    fn derivation_is_deterministic() {
        for input in CORPUS {
            assert_eq!(Fingerprint::derive(input), Fingerprint::derive(input));
        }
    }

    #[test]
    fn grids_are_symmetric() {
        for input in CORPUS {
            let grid = Fingerprint::derive(input).grid().to_owned();
            for row in grid.rows() {
                assert_eq!(row[0], row[4], "{input:?}");
                assert_eq!(row[1], row[3], "{input:?}");
            }
        }
    }

    #[test]
    fn channels_are_quantized() {
        for input in CORPUS {
            let color = Fingerprint::derive(input).color();
            for channel in color.as_array() {
                assert_eq!(channel % 16, 0, "{input:?} gave {color}");
                assert!(channel <= 240, "{input:?} gave {color}");
            }
        }
    }

    #[test]
    fn distinct_inputs_differ() {
        assert_ne!(Fingerprint::derive("alice"), Fingerprint::derive("bob"));
    }

    #[test]
    fn absent_input_is_rejected() {
        assert!(matches!(
            Fingerprint::from_input(None),
            Err(IdenticonError::InvalidInput)
        ));
        assert_eq!(
            Fingerprint::from_input(Some("")).unwrap(),
            Fingerprint::derive("")
        );
    }
}
