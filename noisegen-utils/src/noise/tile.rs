//! Per-axis tiling periods.

use super::NoiseError;

/// Wrap periods for each noise axis, in units of domain coordinate.
///
/// A period of 1 leaves the axis unbounded. A period `p > 1` makes the noise
/// repeat every `p` units along that axis. An image sampler stretches a tiled
/// axis over `p` domain units (see [`span`](Self::span)) so the image holds
/// exactly one period and wraps edge to edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    periods: Vec<u32>,
}

impl Tile {
    /// Creates a tile from raw periods, rejecting any period below 1 or above `u32::MAX`.
    pub fn new(periods: &[i64]) -> Result<Self, NoiseError> {
        let periods = periods
            .iter()
            .enumerate()
            .map(|(axis, &period)| {
                if period < 1 {
                    return Err(NoiseError::InvalidTilePeriod { axis, period });
                }
                u32::try_from(period).map_err(|_| NoiseError::TilePeriodTooLarge { axis, period })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { periods })
    }

    /// A tile that wraps no axis.
    #[must_use]
    pub fn untiled(dimensions: usize) -> Self {
        Self {
            periods: vec![1; dimensions],
        }
    }

    /// Number of axes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Whether the tile has no axes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// The raw periods.
    #[must_use]
    pub fn periods(&self) -> &[u32] {
        &self.periods
    }

    /// Domain units an image covers along `axis`.
    ///
    /// Equals the period, so a tiled axis spans exactly one repetition and an
    /// untiled axis spans the unit interval.
    #[inline]
    #[must_use]
    pub fn span(&self, axis: usize) -> f64 {
        self.periods.get(axis).map_or(1.0, |&period| f64::from(period))
    }

    /// Lattice period of `axis` at the given lattice scale, or `None` if the axis does not wrap.
    #[inline]
    #[must_use]
    pub fn lattice_period(&self, axis: usize, lattice_scale: i64) -> Option<i64> {
        match self.periods.get(axis) {
            Some(&period) if period > 1 => Some(i64::from(period).saturating_mul(lattice_scale)),
            _ => None,
        }
    }
}
