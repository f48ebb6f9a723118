//! Generator configuration.
//!
//! All types deserialize with defaults for missing fields, so a config file
//! only needs to name what it changes.

use noisegen_utils::noise::{FractalSettings, Tile, check_dimensions};
use serde::{Deserialize, Serialize};

use crate::GenerationError;
use crate::normalize::MAX_TARGET;

/// Parameters of one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Side length of the square output field.
    pub size: usize,
    /// Seed for the random stream; `None` draws fresh entropy.
    pub seed: Option<u64>,
    /// Which generator to run.
    pub kind: GeneratorKind,
    /// How many times to normalize the raw field.
    pub normalization_passes: u32,
    /// Value the largest sample maps to.
    pub target_max: u32,
    /// Fail with [`GenerationError::DegenerateField`] instead of returning an all-zero field.
    pub reject_degenerate: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            size: 512,
            seed: None,
            kind: GeneratorKind::default(),
            normalization_passes: 1,
            target_max: 255,
            reject_degenerate: false,
        }
    }
}

/// The generator to run and its parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GeneratorKind {
    /// Summed random images, optionally block-averaged.
    Random(RandomFieldSettings),
    /// Fractal gradient noise.
    Perlin(PerlinSettings),
}

impl Default for GeneratorKind {
    fn default() -> Self {
        Self::Random(RandomFieldSettings::default())
    }
}

/// Parameters of the random-field generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomFieldSettings {
    /// Number of random images summed together.
    pub images: u32,
    /// Width of the averaging blocks; 0 disables averaging.
    pub cluster: usize,
}

impl Default for RandomFieldSettings {
    fn default() -> Self {
        Self {
            images: 1,
            cluster: 0,
        }
    }
}

/// Parameters of the gradient-noise generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerlinSettings {
    /// Number of noise axes.
    pub dimensions: usize,
    /// Number of fractal octaves.
    pub octaves: u32,
    /// Wrap period per axis; 1 leaves an axis unbounded and an empty list
    /// leaves every axis unbounded.
    pub tile: Vec<i64>,
    /// Lattice cells per unit of domain coordinate at the first octave.
    pub frequency: u32,
    /// Push values away from the middle grey.
    pub unbias: bool,
}

impl Default for PerlinSettings {
    fn default() -> Self {
        Self {
            dimensions: 2,
            octaves: 1,
            tile: Vec::new(),
            frequency: 1,
            unbias: false,
        }
    }
}

impl PerlinSettings {
    /// The tile periods, all 1 for `dimensions` axes when none are set.
    pub fn tile(&self) -> Result<Tile, GenerationError> {
        if self.tile.is_empty() {
            Ok(Tile::untiled(self.dimensions))
        } else {
            Ok(Tile::new(&self.tile)?)
        }
    }

    /// Validates the settings and converts them into [`FractalSettings`].
    pub fn fractal_settings(&self) -> Result<FractalSettings, GenerationError> {
        check_dimensions(self.dimensions)?;
        let settings = FractalSettings::new(self.dimensions)
            .with_octaves(self.octaves)
            .with_tile(self.tile()?)
            .with_frequency(self.frequency)
            .with_unbias(self.unbias);
        settings.validate(self.dimensions)?;
        Ok(settings)
    }
}

impl GeneratorConfig {
    /// Checks every parameter before any work is done.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.size == 0 {
            return Err(GenerationError::InvalidSize);
        }
        if !(1..=MAX_TARGET).contains(&self.target_max) {
            return Err(GenerationError::InvalidTargetMax(self.target_max));
        }

        match &self.kind {
            GeneratorKind::Random(settings) => {
                if settings.images == 0 {
                    return Err(GenerationError::InvalidImageCount);
                }
                if settings.cluster != 0 && self.size % settings.cluster != 0 {
                    return Err(GenerationError::ClusterMismatch {
                        size: self.size,
                        cluster: settings.cluster,
                    });
                }
            }
            GeneratorKind::Perlin(settings) => {
                settings.fractal_settings()?;
            }
        }
        Ok(())
    }
}
