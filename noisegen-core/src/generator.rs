//! One generation run from config to normalized field.

use std::time::Instant;

use noisegen_utils::noise::{FractalNoise, GradientTable};
use noisegen_utils::random::Xoroshiro;

use crate::config::{GeneratorConfig, GeneratorKind, PerlinSettings, RandomFieldSettings};
use crate::normalize::{Normalization, normalize_passes};
use crate::{Field, GenerationError, random_field, sampler};

/// The output of [`generate`].
#[derive(Debug, Clone, PartialEq)]
pub struct Generated {
    /// The normalized field.
    pub field: Field,
    /// The seed the random stream was built from.
    ///
    /// Equals the configured seed, or the entropy drawn when none was set.
    pub seed: u64,
    /// Outcome of the last normalization pass, `None` if no pass ran.
    pub normalization: Option<Normalization>,
}

/// Generates a field from `config`.
///
/// Validates everything up front; on error no sampling has happened. One
/// random stream is created per call and consumed in a fixed order, so the
/// same config and seed always produce the same field.
pub fn generate(config: &GeneratorConfig) -> Result<Generated, GenerationError> {
    config.validate()?;

    let start = Instant::now();
    let (mut random, seed) = Xoroshiro::from_optional_seed(config.seed);
    log::info!("generating {0}x{0} field with seed {seed}", config.size);

    let mut field = match &config.kind {
        GeneratorKind::Random(settings) => random_path(config.size, settings, &mut random)?,
        GeneratorKind::Perlin(settings) => perlin_path(config.size, settings, &mut random)?,
    };

    let normalization = normalize_passes(
        &mut field,
        config.target_max,
        config.normalization_passes,
    )?;

    if let Some(Normalization::Degenerate { value }) = normalization {
        if config.reject_degenerate {
            return Err(GenerationError::DegenerateField { value });
        }
        log::warn!("field was uniform at {value}; output is all zeros");
    }

    log::info!("field generated in {:?}", start.elapsed());

    Ok(Generated {
        field,
        seed,
        normalization,
    })
}

fn random_path(
    size: usize,
    settings: &RandomFieldSettings,
    random: &mut Xoroshiro,
) -> Result<Field, GenerationError> {
    let mut field = random_field::accumulate(size, settings.images, random)?;
    if settings.cluster != 0 {
        log::debug!("averaging {0}x{0} clusters", settings.cluster);
    }
    random_field::cluster(&mut field, settings.cluster)?;
    Ok(field)
}

fn perlin_path(
    size: usize,
    settings: &PerlinSettings,
    random: &mut Xoroshiro,
) -> Result<Field, GenerationError> {
    let fractal_settings = settings.fractal_settings()?;
    let table = GradientTable::build(settings.dimensions, random)?;
    let noise = FractalNoise::new(table, fractal_settings)?;
    log::debug!(
        "sampling {}D noise with {} octave(s)",
        settings.dimensions,
        settings.octaves
    );
    Ok(sampler::sample_fractal(size, &noise))
}
