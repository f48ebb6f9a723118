//! Seedable pseudo-random streams.
//!
//! Every generation run owns its stream and passes it by `&mut` to whatever
//! consumes randomness (gradient table construction, random field accumulation).
//! Two streams never share state, so runs are isolated and reproducible.

pub mod xoroshiro;

use thiserror::Error;

pub use xoroshiro::Xoroshiro;

/// `2^-53`, the step between consecutive values of `next_f64`.
const DOUBLE_UNIT: f64 = 1.0 / (1u64 << 53) as f64;

/// An error raised by a random stream.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandomError {
    /// A bounded draw was requested with a bound that is not positive.
    #[error("random bound must be positive, got {0}")]
    InvalidSeedBound(i32),
}

/// A stateful source of uniformly distributed values.
pub trait Random {
    /// Next raw 64-bit value.
    fn next_u64(&mut self) -> u64;

    /// Next raw 32-bit value, taken from the low half of [`next_u64`](Self::next_u64).
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    /// Uniform value in `[0, 1)` with 53 bits of precision.
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * DOUBLE_UNIT
    }

    /// Uniform value in `[-1, 1)`.
    fn next_symmetric(&mut self) -> f64 {
        self.next_f64().mul_add(2.0, -1.0)
    }

    /// Uniform integer in `[0, bound)`.
    ///
    /// Uses the multiply-shift reduction and rejects draws from the biased
    /// low range, so every value in the range is equally likely.
    fn next_bounded(&mut self, bound: i32) -> Result<i32, RandomError> {
        if bound <= 0 {
            return Err(RandomError::InvalidSeedBound(bound));
        }
        let bound = u64::from(bound as u32);
        let mut product = u64::from(self.next_u32()) * bound;
        let mut low = product & 0xFFFF_FFFF;
        if low < bound {
            let threshold = (bound.wrapping_neg() & 0xFFFF_FFFF) % bound;
            while low < threshold {
                product = u64::from(self.next_u32()) * bound;
                low = product & 0xFFFF_FFFF;
            }
        }
        Ok((product >> 32) as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counter stream for checking the provided methods in isolation.
    struct Counter(u64);

    impl Random for Counter {
        fn next_u64(&mut self) -> u64 {
            self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
            self.0
        }
    }

    #[test]
    fn next_bounded_rejects_non_positive_bounds() {
        let mut rng = Counter(0);
        assert_eq!(rng.next_bounded(0), Err(RandomError::InvalidSeedBound(0)));
        assert_eq!(rng.next_bounded(-3), Err(RandomError::InvalidSeedBound(-3)));
    }

    #[test]
    fn next_bounded_stays_in_range() {
        let mut rng = Counter(7);
        for bound in [1, 2, 3, 7, 100, 256, i32::MAX] {
            for _ in 0..200 {
                let value = rng.next_bounded(bound).expect("bound is positive");
                assert!((0..bound).contains(&value), "{value} not in 0..{bound}");
            }
        }
    }

    #[test]
    fn bound_of_one_always_yields_zero() {
        let mut rng = Counter(11);
        for _ in 0..50 {
            assert_eq!(rng.next_bounded(1), Ok(0));
        }
    }

    #[test]
    fn float_draws_stay_in_range() {
        let mut rng = Counter(3);
        for _ in 0..1000 {
            let unit = rng.next_f64();
            assert!((0.0..1.0).contains(&unit));
            let symmetric = rng.next_symmetric();
            assert!((-1.0..1.0).contains(&symmetric));
        }
    }
}
