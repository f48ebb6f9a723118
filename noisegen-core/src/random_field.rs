//! Accumulated random fields.
//!
//! Several independent fields of uniform bytes are summed so values cluster
//! around the middle, then optionally averaged over square blocks to form
//! larger patches.

use noisegen_utils::random::Random;

use crate::{Field, GenerationError};

/// Exclusive upper bound of a single random sample.
const LEVELS: i32 = 256;

/// How often accumulation progress is logged, in images.
const PROGRESS_INTERVAL: u32 = 5;

/// Sums `images` random `size × size` fields of integers in `0..=255`.
///
/// Samples are drawn row-major, one whole image after another.
pub fn accumulate<R: Random>(
    size: usize,
    images: u32,
    random: &mut R,
) -> Result<Field, GenerationError> {
    if size == 0 {
        return Err(GenerationError::InvalidSize);
    }
    if images == 0 {
        return Err(GenerationError::InvalidImageCount);
    }

    let mut field = Field::square(size);
    for image in 1..=images {
        for sample in field.as_mut_slice() {
            *sample += f64::from(random.next_bounded(LEVELS)?);
        }
        if image > 1 && (image - 1) % PROGRESS_INTERVAL == 0 {
            log::info!("generating image: {}", image - 1);
        }
    }
    Ok(field)
}

/// Replaces every `cluster × cluster` block with its mean, rounded half to even.
///
/// A cluster width of 0 leaves the field unchanged.
pub fn cluster(field: &mut Field, cluster: usize) -> Result<(), GenerationError> {
    if cluster == 0 {
        return Ok(());
    }
    for size in [field.rows(), field.cols()] {
        if size % cluster != 0 {
            return Err(GenerationError::ClusterMismatch { size, cluster });
        }
    }

    let area = (cluster * cluster) as f64;
    for block_row in (0..field.rows()).step_by(cluster) {
        for block_col in (0..field.cols()).step_by(cluster) {
            let mut sum = 0.0;
            for row in block_row..block_row + cluster {
                sum += field.row(row)[block_col..block_col + cluster]
                    .iter()
                    .sum::<f64>();
            }
            let mean = (sum / area).round_ties_even();

            for row in block_row..block_row + cluster {
                for col in block_col..block_col + cluster {
                    field.set(row, col, mean);
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use noisegen_utils::random::Xoroshiro;

    #[test]
    fn single_image_stays_in_byte_range() {
        let field = accumulate(16, 1, &mut Xoroshiro::from_seed(1)).expect("inputs are valid");
        assert!(
            field
                .as_slice()
                .iter()
                .all(|&v| (0.0..=255.0).contains(&v) && v.fract() == 0.0)
        );
    }

    #[test]
    fn images_are_summed_in_draw_order() {
        let mut rng = Xoroshiro::from_seed(5);
        let first: Vec<i32> = (0..9)
            .map(|_| rng.next_bounded(LEVELS).expect("bound is positive"))
            .collect();
        let second: Vec<i32> = (0..9)
            .map(|_| rng.next_bounded(LEVELS).expect("bound is positive"))
            .collect();

        let field = accumulate(3, 2, &mut Xoroshiro::from_seed(5)).expect("inputs are valid");
        let expected: Vec<f64> = first
            .iter()
            .zip(&second)
            .map(|(a, b)| f64::from(a + b))
            .collect();
        assert_eq!(field.as_slice(), expected.as_slice());
    }

    #[test]
    fn rejects_zero_size_and_zero_images() {
        let mut rng = Xoroshiro::from_seed(0);
        assert_eq!(
            accumulate(0, 1, &mut rng),
            Err(GenerationError::InvalidSize)
        );
        assert_eq!(
            accumulate(4, 0, &mut rng),
            Err(GenerationError::InvalidImageCount)
        );
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn cluster_averages_blocks() {
        let mut field = Field::from_fn(4, 4, |r, c| (r * 4 + c) as f64);
        cluster(&mut field, 2).expect("size divides");
        // Top-left block holds 0, 1, 4, 5: mean 2.5 rounds to 2.
        assert_eq!(field.row(0), &[2.0, 2.0, 4.0, 4.0]);
        assert_eq!(field.row(1), &[2.0, 2.0, 4.0, 4.0]);
        // Bottom-left block holds 8, 9, 12, 13: mean 10.5 rounds to 10.
        assert_eq!(field.row(2), &[10.0, 10.0, 12.0, 12.0]);
        assert_eq!(field.row(3), &[10.0, 10.0, 12.0, 12.0]);
    }

    #[test]
    fn cluster_zero_is_a_no_op() {
        let mut field = Field::from_fn(3, 3, |r, c| (r + c) as f64);
        let before = field.clone();
        cluster(&mut field, 0).expect("zero disables clustering");
        assert_eq!(field, before);
    }

    #[test]
    fn cluster_must_divide_size() {
        let mut field = Field::square(6);
        assert_eq!(
            cluster(&mut field, 4),
            Err(GenerationError::ClusterMismatch {
                size: 6,
                cluster: 4
            })
        );
    }
}
