//! Numeric primitives for noise field generation.
//!
//! - [`random`] - Seedable random streams threaded explicitly through generation
//! - [`noise`] - Gradient tables, N-dimensional gradient noise and fractal summation
//! - [`math`] - Small interpolation helpers shared by the noise functions

pub mod math;
pub mod noise;
pub mod random;
