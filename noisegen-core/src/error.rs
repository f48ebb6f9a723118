use noisegen_utils::noise::NoiseError;
use noisegen_utils::random::RandomError;
use thiserror::Error;

/// An error that can occur while generating a field.
///
/// Every variant is raised during validation, before any sampling starts, with
/// the exception of [`DegenerateField`](Self::DegenerateField), which only
/// occurs when the generator is asked to reject uniform fields.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    /// The noise function could not be configured.
    #[error(transparent)]
    Noise(#[from] NoiseError),
    /// A random stream was misused.
    #[error(transparent)]
    Random(#[from] RandomError),
    /// The output size is zero.
    #[error("field size must be at least 1")]
    InvalidSize,
    /// The normalization target is outside `1..=65535`.
    #[error("normalization target must be in 1..=65535, got {0}")]
    InvalidTargetMax(u32),
    /// The random generator was asked to combine zero images.
    #[error("image count must be at least 1")]
    InvalidImageCount,
    /// The field size is not a multiple of the cluster width.
    #[error("size {size} must be evenly divisible by cluster size {cluster}")]
    ClusterMismatch {
        /// Field side length.
        size: usize,
        /// Requested cluster width.
        cluster: usize,
    },
    /// Every sample had the same value, so there was no range to rescale.
    #[error("field is uniform at {value}; normalization produced an all-zero field")]
    DegenerateField {
        /// The value every sample had.
        value: f64,
    },
}
