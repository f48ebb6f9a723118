//! Pixel-to-domain sampling.
//!
//! Pixel `(r, c)` of a `size × size` field maps to image coordinate
//! `(r / size, c / size)`, so the whole image covers `[0, 1)` on both axes.
//! Fractal noise then stretches each tiled axis over its period.

use noisegen_utils::noise::{FractalNoise, MAX_DIMENSIONS};
use rayon::prelude::*;

use crate::Field;

/// Samples `evaluator` over a `size × size` grid.
///
/// Rows are filled in parallel. Each sample depends only on its coordinate,
/// so the result does not depend on how rows are scheduled.
#[must_use]
pub fn sample_field<F>(size: usize, evaluator: F) -> Field
where
    F: Fn(f64, f64) -> f64 + Sync,
{
    let mut field = Field::square(size);
    if size == 0 {
        return field;
    }

    let scale = size as f64;
    field
        .as_mut_slice()
        .par_chunks_mut(size)
        .enumerate()
        .for_each(|(row, samples)| {
            let y = row as f64 / scale;
            for (col, sample) in samples.iter_mut().enumerate() {
                *sample = evaluator(y, col as f64 / scale);
            }
        });
    field
}

/// Samples fractal noise over a `size × size` grid.
///
/// Each pixel is evaluated with [`sample_at`].
#[must_use]
pub fn sample_fractal(size: usize, noise: &FractalNoise) -> Field {
    sample_field(size, |y, x| sample_at(noise, y, x))
}

/// Samples fractal noise at image coordinate `(y, x)`, both in `[0, 1)` across the image.
///
/// The first two axes receive the row and column coordinates, each stretched
/// over the tile span of its axis: an axis with period `p` covers `p` domain
/// units, which is one full repetition, so column `size` would land back on
/// column 0. Axes beyond the second are held at 0, giving a planar slice
/// through higher-dimensional noise; one-dimensional noise only sees the row
/// coordinate.
#[must_use]
pub fn sample_at(noise: &FractalNoise, y: f64, x: f64) -> f64 {
    let dimensions = noise.dimensions();
    let tile = &noise.settings().tile;
    let mut point = [0.0f64; MAX_DIMENSIONS];
    point[0] = y * tile.span(0);
    if dimensions > 1 {
        point[1] = x * tile.span(1);
    }
    noise.sample(&point[..dimensions])
}
