//! Noise field generation.
//!
//! Turns generator parameters into a normalized 2-D greyscale field:
//!
//! - [`generator`] - Validates a [`GeneratorConfig`] and runs one generation
//! - [`sampler`] - Maps pixel indices to noise domain coordinates
//! - [`random_field`] - Accumulated and block-averaged random fields
//! - [`normalize`] - Min/max rescaling onto `0..=target_max`
//! - [`field`] - The row-major sample grid everything operates on

pub mod config;
mod error;
pub mod field;
pub mod generator;
pub mod normalize;
pub mod random_field;
pub mod sampler;

pub use config::{GeneratorConfig, GeneratorKind, PerlinSettings, RandomFieldSettings};
pub use error::GenerationError;
pub use field::Field;
pub use generator::{Generated, generate};
pub use normalize::{Normalization, normalize, normalize_passes};
