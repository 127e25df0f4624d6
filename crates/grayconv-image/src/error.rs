/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when one of the image dimensions is zero.
    #[error("Invalid image size: width ({0}) and height ({1}) must be positive")]
    InvalidImageSize(usize, usize),

    /// Error when the data length does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidDataLength(usize, usize),

    /// Error when a pixel coordinate lies outside the image.
    #[error("Pixel ({0}, {1}) is out of bounds for an image of size {2}x{3}")]
    PixelOutOfBounds(usize, usize, usize, usize),

    /// Error when a kernel row or column index is out of range.
    #[error("Kernel index ({0}, {1}) is out of range, expected values in [0, 3)")]
    KernelIndexOutOfBounds(usize, usize),

    /// Error when a kernel is built from a slice of the wrong length.
    #[error("Kernel requires 9 weights, got {0}")]
    InvalidKernelLength(usize),
}
