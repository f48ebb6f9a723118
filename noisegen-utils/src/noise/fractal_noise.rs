//! Octave summation of gradient noise.
//!
//! Octave `k` samples at `frequency * 2^k` lattice cells per unit with weight
//! `2^-k`. Tile periods are expressed in domain units, so the lattice period
//! of an axis scales with the octave and every octave wraps at the same place.

use super::{GradientNoise, GradientTable, MAX_DIMENSIONS, NoiseError, Tile};
use crate::math::smoothstep;

/// Parameters of a [`FractalNoise`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FractalSettings {
    /// Number of octaves, at least 1.
    pub octaves: u32,
    /// Wrap periods, one per axis.
    pub tile: Tile,
    /// Lattice cells per unit of domain coordinate at the first octave.
    pub frequency: u32,
    /// Push values away from zero with repeated smoothstep passes.
    pub unbias: bool,
}

impl FractalSettings {
    /// Highest octave count whose lattice scale still fits the integer lattice.
    pub const MAX_OCTAVES: u32 = 30;

    /// One octave, no tiling, unit frequency.
    #[must_use]
    pub fn new(dimensions: usize) -> Self {
        Self {
            octaves: 1,
            tile: Tile::untiled(dimensions),
            frequency: 1,
            unbias: false,
        }
    }

    /// Sets the octave count.
    #[must_use]
    pub const fn with_octaves(mut self, octaves: u32) -> Self {
        self.octaves = octaves;
        self
    }

    /// Sets the tile periods.
    #[must_use]
    pub fn with_tile(mut self, tile: Tile) -> Self {
        self.tile = tile;
        self
    }

    /// Sets the base frequency.
    #[must_use]
    pub const fn with_frequency(mut self, frequency: u32) -> Self {
        self.frequency = frequency;
        self
    }

    /// Enables or disables unbiasing.
    #[must_use]
    pub const fn with_unbias(mut self, unbias: bool) -> Self {
        self.unbias = unbias;
        self
    }

    /// Checks the settings against a noise of `dimensions` axes.
    pub fn validate(&self, dimensions: usize) -> Result<(), NoiseError> {
        if self.octaves == 0 || self.octaves > Self::MAX_OCTAVES {
            return Err(NoiseError::InvalidOctaveCount(self.octaves));
        }
        if self.frequency == 0 {
            return Err(NoiseError::InvalidFrequency(self.frequency));
        }
        if self.tile.len() != dimensions {
            return Err(NoiseError::TileDimensionMismatch {
                expected: dimensions,
                got: self.tile.len(),
            });
        }
        Ok(())
    }
}

/// Fractal sum of [`GradientNoise`] octaves.
#[derive(Debug, Clone)]
pub struct FractalNoise {
    noise: GradientNoise,
    settings: FractalSettings,
    /// Sum of all octave weights, `2 - 2^(1 - octaves)`.
    total_amplitude: f64,
}

impl FractalNoise {
    /// Creates a fractal noise function, validating the settings against the table.
    pub fn new(table: GradientTable, settings: FractalSettings) -> Result<Self, NoiseError> {
        settings.validate(table.dimensions())?;

        let total_amplitude = 2.0 - 2.0f64.powi(1 - settings.octaves as i32);
        Ok(Self {
            noise: GradientNoise::new(table),
            settings,
            total_amplitude,
        })
    }

    /// Number of axes a sample point must have.
    #[must_use]
    pub const fn dimensions(&self) -> usize {
        self.noise.dimensions()
    }

    /// The settings this function was built with.
    #[must_use]
    pub const fn settings(&self) -> &FractalSettings {
        &self.settings
    }

    /// Samples the fractal sum at `point`, given in domain units.
    #[must_use]
    pub fn sample(&self, point: &[f64]) -> f64 {
        let dimensions = self.dimensions();
        let mut scaled = [0.0f64; MAX_DIMENSIONS];
        let mut total = 0.0;

        for octave in 0..self.settings.octaves {
            let multiplier = 1i64 << octave;
            let lattice_scale = i64::from(self.settings.frequency) * multiplier;
            for (dst, &coord) in scaled.iter_mut().zip(point).take(dimensions) {
                *dst = coord * lattice_scale as f64;
            }
            let value =
                self.noise
                    .evaluate(&scaled[..dimensions], &self.settings.tile, lattice_scale);
            total += value / multiplier as f64;
        }

        total /= self.total_amplitude;

        if self.settings.unbias {
            total = self.unbias(total);
        }
        total
    }

    /// Repeated smoothstep on `[0, 1]`, once per two octaves (rounded up).
    fn unbias(&self, value: f64) -> f64 {
        let passes = self.settings.octaves.div_ceil(2);
        let mut r = (value + 1.0) / 2.0;
        for _ in 0..passes {
            r = smoothstep(r);
        }
        r * 2.0 - 1.0
    }
}
