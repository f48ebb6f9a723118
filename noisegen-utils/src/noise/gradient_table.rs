//! Permutation and gradient tables for lattice gradient lookup.

use super::{MAX_DIMENSIONS, NoiseError, TABLE_SIZE, check_dimensions};
use crate::random::Random;

/// Shuffled permutation plus unit gradient vectors in `D` dimensions.
///
/// Built once per generation run and read-only afterwards, so one table can be
/// shared across threads without locking.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientTable {
    /// Permutation of `0..TABLE_SIZE`, stored twice back to back so that
    /// `perm[index + coord]` with both terms below `TABLE_SIZE` needs no second modulo.
    perm: [u8; TABLE_SIZE * 2],
    /// `TABLE_SIZE` unit vectors, `dimensions` components each.
    gradients: Vec<f64>,
    dimensions: usize,
}

impl GradientTable {
    /// Builds a table for `dimensions` axes from a random stream.
    ///
    /// Consumes the stream in a fixed order: the Fisher-Yates shuffle first
    /// (one bounded draw per index from the top down), then `dimensions`
    /// symmetric draws per gradient, with zero-length vectors resampled.
    pub fn build<R: Random>(dimensions: usize, random: &mut R) -> Result<Self, NoiseError> {
        check_dimensions(dimensions)?;

        let mut perm = [0u8; TABLE_SIZE * 2];
        for (i, val) in perm.iter_mut().enumerate().take(TABLE_SIZE) {
            *val = i as u8;
        }

        for i in (1..TABLE_SIZE).rev() {
            let j = Self::draw_index(random, i + 1);
            perm.swap(i, j);
        }

        let (head, tail) = perm.split_at_mut(TABLE_SIZE);
        tail.copy_from_slice(head);

        let mut gradients = Vec::with_capacity(TABLE_SIZE * dimensions);
        let mut vector = [0.0f64; MAX_DIMENSIONS];
        for _ in 0..TABLE_SIZE {
            let components = &mut vector[..dimensions];
            let length = loop {
                for c in components.iter_mut() {
                    *c = random.next_symmetric();
                }
                let length = components.iter().map(|c| c * c).sum::<f64>().sqrt();
                if length > f64::EPSILON {
                    break length;
                }
            };
            gradients.extend(components.iter().map(|c| c / length));
        }

        tracing::debug!(dimensions, "built gradient table");

        Ok(Self {
            perm,
            gradients,
            dimensions,
        })
    }

    /// Uniform index in `[0, bound)` for the shuffle.
    fn draw_index<R: Random>(random: &mut R, bound: usize) -> usize {
        // bound is in 2..=TABLE_SIZE, so the draw cannot fail
        random.next_bounded(bound as i32).map_or(0, |j| j as usize)
    }

    /// Number of axes the gradients span.
    #[inline]
    #[must_use]
    pub const fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Number of gradients in the table.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        TABLE_SIZE
    }

    /// Always false; the table has a fixed non-zero size.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// The first half of the doubled permutation.
    #[must_use]
    pub fn permutation(&self) -> &[u8] {
        &self.perm[..TABLE_SIZE]
    }

    /// Hashes lattice coordinates down to a table index.
    ///
    /// Starting from index 0, each axis folds in as
    /// `index = perm[index + coord mod TABLE_SIZE]`.
    #[inline]
    #[must_use]
    pub fn hash(&self, lattice: &[i64]) -> usize {
        lattice.iter().fold(0usize, |index, &coord| {
            let coord = coord.rem_euclid(TABLE_SIZE as i64) as usize;
            usize::from(self.perm[index + coord])
        })
    }

    /// The gradient assigned to a lattice point.
    ///
    /// Identical coordinates always resolve to the identical vector.
    #[inline]
    #[must_use]
    pub fn gradient_at(&self, lattice: &[i64]) -> &[f64] {
        let start = self.hash(lattice) * self.dimensions;
        &self.gradients[start..start + self.dimensions]
    }
}
