//! Coherent gradient noise in N dimensions.
//!
//! This module provides the noise generation primitives used for image synthesis:
//!
//! - [`GradientTable`] - Shuffled permutation plus unit gradients, built once per run
//! - [`GradientNoise`] - One octave of quintic-eased gradient noise with optional tiling
//! - [`FractalNoise`] - Octave summation at doubling frequency and halving amplitude
//! - [`Tile`] - Per-axis wrap periods

mod fractal_noise;
mod gradient_noise;
mod gradient_table;
mod tile;

use thiserror::Error;

pub use fractal_noise::{FractalNoise, FractalSettings};
pub use gradient_noise::GradientNoise;
pub use gradient_table::GradientTable;
pub use tile::Tile;

/// Highest supported noise dimensionality.
///
/// Evaluating one point touches `2^D` lattice corners.
pub const MAX_DIMENSIONS: usize = 6;

/// Number of entries in the permutation and gradient tables.
pub const TABLE_SIZE: usize = 256;

/// An error raised while configuring a noise function.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NoiseError {
    /// The dimension count is outside `1..=MAX_DIMENSIONS`.
    #[error("noise dimensions must be in 1..={MAX_DIMENSIONS}, got {0}")]
    InvalidDimension(usize),
    /// The octave count is zero.
    #[error("octave count must be at least 1, got {0}")]
    InvalidOctaveCount(u32),
    /// A tile period is below 1.
    #[error("tile period on axis {axis} must be at least 1, got {period}")]
    InvalidTilePeriod {
        /// Axis the period belongs to.
        axis: usize,
        /// The rejected period.
        period: i64,
    },
    /// A tile period does not fit the lattice coordinate range.
    #[error("tile period on axis {axis} must be at most {max}, got {period}", max = u32::MAX)]
    TilePeriodTooLarge {
        /// Axis the period belongs to.
        axis: usize,
        /// The rejected period.
        period: i64,
    },
    /// The tile has a different number of periods than the noise has axes.
    #[error("tile has {got} periods but the noise has {expected} dimensions")]
    TileDimensionMismatch {
        /// Dimensions of the noise function.
        expected: usize,
        /// Periods supplied.
        got: usize,
    },
    /// The base lattice frequency is zero.
    #[error("base frequency must be at least 1, got {0}")]
    InvalidFrequency(u32),
}

/// Checks that `dimensions` is within `1..=MAX_DIMENSIONS`.
pub const fn check_dimensions(dimensions: usize) -> Result<(), NoiseError> {
    if dimensions == 0 || dimensions > MAX_DIMENSIONS {
        Err(NoiseError::InvalidDimension(dimensions))
    } else {
        Ok(())
    }
}
