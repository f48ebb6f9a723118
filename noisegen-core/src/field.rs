//! Row-major 2-D sample grid.

/// A `rows × cols` grid of samples stored row-major.
///
/// Samples are `f64` throughout generation; normalization leaves integral
/// values behind, which [`to_levels`](Self::to_levels) hands to an encoder.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Field {
    /// Creates a zero-filled field.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Creates a square zero-filled field.
    #[must_use]
    pub fn square(size: usize) -> Self {
        Self::new(size, size)
    }

    /// Creates a field from row-major data.
    ///
    /// Returns `None` if `data` does not hold exactly `rows * cols` samples.
    #[must_use]
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Option<Self> {
        (data.len() == rows * cols).then_some(Self { rows, cols, data })
    }

    /// Creates a field by evaluating `f(row, col)` for every cell.
    #[must_use]
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                data.push(f(row, col));
            }
        }
        Self { rows, cols, data }
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the field holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Sample at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.rows && col < self.cols, "({row}, {col}) out of bounds");
        self.data[row * self.cols + col]
    }

    /// Overwrites the sample at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of bounds.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        assert!(row < self.rows && col < self.cols, "({row}, {col}) out of bounds");
        self.data[row * self.cols + col] = value;
    }

    /// One row of samples.
    #[must_use]
    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// All samples, row-major.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// All samples, row-major, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Smallest and largest sample, or `None` for an empty field.
    #[must_use]
    pub fn min_max(&self) -> Option<(f64, f64)> {
        let (&first, rest) = self.data.split_first()?;
        Some(
            rest.iter()
                .fold((first, first), |(min, max), &v| (min.min(v), max.max(v))),
        )
    }

    /// Converts samples to integer intensity levels in `0..=target_max`.
    ///
    /// Values are rounded half to even and clamped, so an unnormalized field
    /// still produces valid levels.
    #[must_use]
    pub fn to_levels(&self, target_max: u16) -> Vec<u16> {
        let ceiling = f64::from(target_max);
        self.data
            .iter()
            .map(|v| v.round_ties_even().clamp(0.0, ceiling) as u16)
            .collect()
    }
}
