#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// grayscale raster image representation.
pub mod image;

/// fixed size 3x3 convolution kernel.
pub mod kernel;

/// Error types for the image module.
pub mod error;

pub use crate::error::ImageError;
pub use crate::image::{GrayImage, ImageSize};
pub use crate::kernel::Kernel;
