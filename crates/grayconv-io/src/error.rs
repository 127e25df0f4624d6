/// An error type for the io module.
#[derive(thiserror::Error, Debug)]
pub enum IoError {
    /// Error when the file does not exist.
    #[error("File does not exist: {0}")]
    FileDoesNotExist(std::path::PathBuf),

    /// Error to open, read or write the file.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// Error when the stream is not valid UTF-8 text.
    #[error("Image data is not valid text. {0}")]
    InvalidText(#[from] std::str::Utf8Error),

    /// Error when the stream ends before the image is complete.
    #[error("Unexpected end of data at line {0}")]
    UnexpectedEof(usize),

    /// Error when the first line is not the format marker.
    #[error("Invalid format marker: {0:?}")]
    InvalidMagic(String),

    /// Error when the dimension line is malformed.
    #[error("Invalid dimension line: {0:?}")]
    InvalidDimensions(String),

    /// Error when the maximum value line is malformed.
    #[error("Invalid maximum value line: {0:?}")]
    InvalidMaxValue(String),

    /// Error when a row does not hold one sample per column.
    #[error("Row {row} has {found} samples, expected {expected}")]
    InvalidRowLength {
        /// Row index in the image.
        row: usize,
        /// Expected number of samples.
        expected: usize,
        /// Number of samples found.
        found: usize,
    },

    /// Error when a sample is not an unsigned byte.
    #[error("Invalid sample {token:?} at row {row}, column {col}")]
    InvalidSample {
        /// Row index in the image.
        row: usize,
        /// Column index in the image.
        col: usize,
        /// The offending token.
        token: String,
    },

    /// Error to create the image.
    #[error("Failed to create image. {0}")]
    ImageCreationError(#[from] grayconv_image::ImageError),
}
