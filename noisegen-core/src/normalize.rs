//! Min/max rescaling of a field onto `0..=target_max`.
//!
//! A pass maps the smallest sample to 0, the largest to `target_max`, and
//! everything in between linearly, rounding half to even. A field with a
//! single distinct value has no range to map; it becomes all zeros and the
//! pass reports [`Normalization::Degenerate`] instead of dividing by zero.
//!
//! Passes are idempotent for an unchanged target: after the first pass the
//! samples are integers with min 0 and max `target_max`, and `v / M * M`
//! rounds back to `v` for every integer `v <= M`.

use crate::{Field, GenerationError};

/// Largest accepted normalization target (16-bit greyscale).
pub const MAX_TARGET: u32 = u16::MAX as u32;

/// What a normalization pass did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Normalization {
    /// The field was rescaled from `[min, max]`.
    Scaled {
        /// Smallest sample before the pass.
        min: f64,
        /// Largest sample before the pass.
        max: f64,
    },
    /// Every sample equalled `value`; the field is now all zeros.
    Degenerate {
        /// The uniform value the field held.
        value: f64,
    },
}

impl Normalization {
    /// Whether the pass hit a uniform field.
    #[must_use]
    pub const fn is_degenerate(&self) -> bool {
        matches!(self, Self::Degenerate { .. })
    }
}

/// Rescales `field` in place so its range becomes exactly `0..=target_max`.
///
/// An empty field is reported as degenerate at 0.
#[allow(clippy::float_cmp)]
pub fn normalize(field: &mut Field, target_max: u32) -> Result<Normalization, GenerationError> {
    if !(1..=MAX_TARGET).contains(&target_max) {
        return Err(GenerationError::InvalidTargetMax(target_max));
    }

    let Some((min, max)) = field.min_max() else {
        return Ok(Normalization::Degenerate { value: 0.0 });
    };

    if min == max {
        field.as_mut_slice().fill(0.0);
        return Ok(Normalization::Degenerate { value: min });
    }

    let range = max - min;
    let target = f64::from(target_max);
    for v in field.as_mut_slice() {
        *v = ((*v - min) / range * target).round_ties_even();
    }

    Ok(Normalization::Scaled { min, max })
}

/// Applies [`normalize`] `passes` times.
///
/// Returns the outcome of the last pass, or `None` when `passes` is 0 and the
/// field is left untouched. A degenerate pass ends the run early: the field is
/// all zeros afterwards, and the outcome keeps the uniform value it had.
pub fn normalize_passes(
    field: &mut Field,
    target_max: u32,
    passes: u32,
) -> Result<Option<Normalization>, GenerationError> {
    let mut last = None;
    for pass in 0..passes {
        let outcome = normalize(field, target_max)?;
        log::debug!("normalization pass {} of {passes}: {outcome:?}", pass + 1);
        last = Some(outcome);
        if outcome.is_degenerate() {
            break;
        }
    }
    Ok(last)
}
