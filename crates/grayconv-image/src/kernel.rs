use crate::error::ImageError;

/// Number of rows and columns of a [`Kernel`].
pub const KERNEL_SIZE: usize = 3;

/// A 3x3 matrix of convolution weights.
///
/// The weights are stored row-major and can not be modified after construction.
/// Two kernels are equal only if all their weights are exactly equal.
///
/// # Examples
///
/// ```
/// use grayconv_image::Kernel;
///
/// let kernel = Kernel::new(0.0, -1.0, 0.0, -1.0, 5.0, -1.0, 0.0, -1.0, 0.0);
///
/// assert_eq!(kernel.get(1, 1).unwrap(), 5.0);
/// assert_eq!(kernel.row(0).unwrap(), &[0.0, -1.0, 0.0]);
/// assert!(kernel.get(3, 0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Kernel([[f64; KERNEL_SIZE]; KERNEL_SIZE]);

impl Kernel {
    /// Create a new kernel from nine weights in row-major order.
    #[allow(clippy::too_many_arguments)]
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64, g: f64, h: f64, i: f64) -> Self {
        Self([[a, b, c], [d, e, f], [g, h, i]])
    }

    /// Create a new kernel from a 3x3 grid of weights.
    pub fn from_rows(rows: [[f64; KERNEL_SIZE]; KERNEL_SIZE]) -> Self {
        Self(rows)
    }

    /// Create a new kernel from a row-major slice of weights.
    ///
    /// # Errors
    ///
    /// If the slice does not hold exactly nine weights, an error is returned.
    pub fn from_slice(weights: &[f64]) -> Result<Self, ImageError> {
        if weights.len() != KERNEL_SIZE * KERNEL_SIZE {
            return Err(ImageError::InvalidKernelLength(weights.len()));
        }

        let mut rows = [[0.0; KERNEL_SIZE]; KERNEL_SIZE];
        for (row, chunk) in rows.iter_mut().zip(weights.chunks_exact(KERNEL_SIZE)) {
            row.copy_from_slice(chunk);
        }

        Ok(Self(rows))
    }

    /// Get a row of the kernel.
    ///
    /// # Arguments
    ///
    /// * `row` - The row index in `[0, 3)`.
    ///
    /// # Errors
    ///
    /// If the row index is out of range, an error is returned.
    pub fn row(&self, row: usize) -> Result<&[f64; KERNEL_SIZE], ImageError> {
        self.0
            .get(row)
            .ok_or(ImageError::KernelIndexOutOfBounds(row, 0))
    }

    /// Get a single weight of the kernel.
    ///
    /// # Arguments
    ///
    /// * `row` - The row index in `[0, 3)`.
    /// * `col` - The column index in `[0, 3)`.
    ///
    /// # Errors
    ///
    /// If either index is out of range, an error is returned.
    pub fn get(&self, row: usize, col: usize) -> Result<f64, ImageError> {
        if row >= KERNEL_SIZE || col >= KERNEL_SIZE {
            return Err(ImageError::KernelIndexOutOfBounds(row, col));
        }
        Ok(self.0[row][col])
    }

    /// The full grid of weights.
    pub fn rows(&self) -> &[[f64; KERNEL_SIZE]; KERNEL_SIZE] {
        &self.0
    }

    /// Sum of all the weights.
    pub fn sum(&self) -> f64 {
        self.0.iter().flatten().sum()
    }

    /// Return the transposed kernel.
    pub fn transpose(&self) -> Self {
        let mut rows = [[0.0; KERNEL_SIZE]; KERNEL_SIZE];
        for (r, row) in self.0.iter().enumerate() {
            for (c, &w) in row.iter().enumerate() {
                rows[c][r] = w;
            }
        }
        Self(rows)
    }
}

/// The all-ones kernel, which sums the 3x3 neighborhood.
impl Default for Kernel {
    fn default() -> Self {
        Self([[1.0; KERNEL_SIZE]; KERNEL_SIZE])
    }
}

impl From<[[f64; KERNEL_SIZE]; KERNEL_SIZE]> for Kernel {
    fn from(rows: [[f64; KERNEL_SIZE]; KERNEL_SIZE]) -> Self {
        Self::from_rows(rows)
    }
}

impl std::fmt::Display for Kernel {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (r, row) in self.0.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            write!(f, "{} {} {}", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}
