//! Choice of the ink color when a palette overrides the hash color.

use rand::rngs::ThreadRng;
use rand::Rng;

/// Picks one entry out of a palette.
///
/// This is the only non-deterministic input of rendering. Pass a
/// [`FixedSelector`] to make output reproducible.
pub trait PaletteSelector {
    /// Returns an index in `0..len`. `len` is never zero.
    fn select(&mut self, len: usize) -> usize;
}

/// Picks palette entries uniformly at random.
#[derive(Debug, Clone)]
pub struct RandomSelector<R = ThreadRng> {
    rng: R,
}

impl RandomSelector {
    /// Creates a selector backed by the thread-local generator.
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for RandomSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomSelector<R> {
    /// Creates a selector backed by the given generator.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> PaletteSelector for RandomSelector<R> {
    fn select(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Always picks the same entry, wrapping around short palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedSelector(pub usize);

impl PaletteSelector for FixedSelector {
    fn select(&mut self, len: usize) -> usize {
        self.0 % len
    }
}

// ============================================================================
// Tests
// ============================================================================
