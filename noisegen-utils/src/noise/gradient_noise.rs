//! Single-octave N-dimensional gradient noise.

use super::{GradientTable, MAX_DIMENSIONS, Tile};
use crate::math::{floor, lerp, smootherstep};

const MAX_CORNERS: usize = 1 << MAX_DIMENSIONS;

/// Gradient noise over a [`GradientTable`].
///
/// Each lattice point carries a unit gradient. A sample is the quintic-eased
/// multilinear blend of the `2^D` corner dot products of its cell, scaled by
/// `2/sqrt(D)` so values fall roughly in `[-1, 1]`. The range is not a hard
/// bound and grows slightly with `D`.
#[derive(Debug, Clone)]
pub struct GradientNoise {
    table: GradientTable,
    scale: f64,
}

impl GradientNoise {
    /// Wraps a built gradient table.
    #[must_use]
    pub fn new(table: GradientTable) -> Self {
        let scale = 2.0 / (table.dimensions() as f64).sqrt();
        Self { table, scale }
    }

    /// The underlying gradient table.
    #[must_use]
    pub const fn table(&self) -> &GradientTable {
        &self.table
    }

    /// Number of axes a sample point must have.
    #[must_use]
    pub const fn dimensions(&self) -> usize {
        self.table.dimensions()
    }

    /// Evaluates one octave at `point`, given in lattice units.
    ///
    /// On every axis whose tile period is above 1, lattice coordinates wrap
    /// modulo `period * lattice_scale`, where `lattice_scale` is the number of
    /// lattice cells per unit of domain coordinate at this octave.
    #[must_use]
    pub fn evaluate(&self, point: &[f64], tile: &Tile, lattice_scale: i64) -> f64 {
        let dimensions = self.dimensions();
        debug_assert_eq!(point.len(), dimensions, "point has wrong dimensionality");

        let mut cell = [0i64; MAX_DIMENSIONS];
        let mut offset = [0.0f64; MAX_DIMENSIONS];
        let mut wrap = [None; MAX_DIMENSIONS];
        for (axis, &coord) in point.iter().enumerate().take(dimensions) {
            let base = floor(coord);
            cell[axis] = base;
            offset[axis] = coord - base as f64;
            wrap[axis] = tile.lattice_period(axis, lattice_scale);
        }

        let corners = 1usize << dimensions;
        let mut dots = [0.0f64; MAX_CORNERS];
        let mut lattice = [0i64; MAX_DIMENSIONS];
        for (corner, dot) in dots.iter_mut().enumerate().take(corners) {
            for axis in 0..dimensions {
                let coord = cell[axis] + ((corner >> axis) & 1) as i64;
                lattice[axis] = match wrap[axis] {
                    Some(period) => coord.rem_euclid(period),
                    None => coord,
                };
            }

            let gradient = self.table.gradient_at(&lattice[..dimensions]);
            *dot = gradient
                .iter()
                .enumerate()
                .map(|(axis, g)| g * (offset[axis] - ((corner >> axis) & 1) as f64))
                .sum();
        }

        // Collapse one axis per pass: corners 2j and 2j+1 differ only in the lowest remaining axis.
        let mut remaining = corners;
        for &t in &offset[..dimensions] {
            let t = smootherstep(t);
            remaining /= 2;
            for j in 0..remaining {
                dots[j] = lerp(t, dots[2 * j], dots[2 * j + 1]);
            }
        }

        dots[0] * self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::Xoroshiro;

    fn noise(dimensions: usize, seed: u64) -> GradientNoise {
        let table = GradientTable::build(dimensions, &mut Xoroshiro::from_seed(seed))
            .expect("dimensions are valid");
        GradientNoise::new(table)
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn zero_at_lattice_points() {
        for dimensions in 1..=4 {
            let noise = noise(dimensions, 8);
            let tile = Tile::untiled(dimensions);
            for k in -3..3 {
                let point = vec![f64::from(k); dimensions];
                assert_eq!(noise.evaluate(&point, &tile, 1), 0.0);
            }
        }
    }

    #[test]
    fn continuous_across_cell_boundaries() {
        let noise = noise(2, 21);
        let tile = Tile::untiled(2);
        let below = noise.evaluate(&[2.0 - 1e-9, 0.37], &tile, 1);
        let above = noise.evaluate(&[2.0 + 1e-9, 0.37], &tile, 1);
        assert!((below - above).abs() < 1e-6);
    }

    #[test]
    fn stays_roughly_within_unit_range() {
        for dimensions in 1..=3 {
            let noise = noise(dimensions, 5);
            let tile = Tile::untiled(dimensions);
            for i in 0..500 {
                let point: Vec<f64> = (0..dimensions)
                    .map(|axis| f64::from(i) * 0.173 + axis as f64 * 0.61)
                    .collect();
                let value = noise.evaluate(&point, &tile, 1);
                assert!(value.is_finite());
                assert!(value.abs() <= 1.5, "{value} out of range in {dimensions}D");
            }
        }
    }

    #[test]
    fn tiled_axis_repeats_every_period() {
        let noise = noise(2, 33);
        let tile = Tile::new(&[3, 1]).expect("periods are valid");
        for &(x, y) in &[(0.25, 0.5), (1.75, 2.125), (2.5, -0.375)] {
            let base = noise.evaluate(&[x, y], &tile, 1);
            let shifted = noise.evaluate(&[x + 3.0, y], &tile, 1);
            assert!((base - shifted).abs() < 1e-12);
        }
    }

    #[test]
    fn untiled_axis_does_not_repeat() {
        let noise = noise(2, 33);
        let tile = Tile::untiled(2);
        let differs = [(0.25, 0.5), (1.75, 2.125), (2.5, 0.375)]
            .iter()
            .any(|&(x, y)| {
                let base = noise.evaluate(&[x, y], &tile, 1);
                (base - noise.evaluate(&[x + 3.0, y], &tile, 1)).abs() > 1e-9
            });
        assert!(differs);
    }
}
