use std::ops;

use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use grayconv_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// A single channel image with 8-bit samples.
///
/// Samples are stored contiguously in row-major order, so the pixel at `(x, y)`
/// lives at the linear index `y * width + x`. The length of the sample buffer
/// always equals `width * height`.
///
/// Cloning an image copies its samples. Moving an image transfers the buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayImage {
    size: ImageSize,
    data: Vec<u8>,
}

impl GrayImage {
    /// Create a new image from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The row-major pixel data of the image.
    ///
    /// # Errors
    ///
    /// If one of the dimensions is zero, or if the length of the pixel data does
    /// not match the image size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use grayconv_image::{GrayImage, ImageSize};
    ///
    /// let image = GrayImage::new(
    ///     ImageSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     vec![0u8; 10 * 20],
    /// ).unwrap();
    ///
    /// assert_eq!(image.width(), 10);
    /// assert_eq!(image.height(), 20);
    /// ```
    pub fn new(size: ImageSize, data: Vec<u8>) -> Result<Self, ImageError> {
        let num_pixels = checked_num_pixels(size)?;
        if data.len() != num_pixels {
            return Err(ImageError::InvalidDataLength(data.len(), num_pixels));
        }

        Ok(Self { size, data })
    }

    /// Create a new image with the given size filled with a single value.
    ///
    /// # Errors
    ///
    /// If one of the dimensions is zero, or if the pixel count overflows, an
    /// error is returned.
    pub fn from_size_val(size: ImageSize, val: u8) -> Result<Self, ImageError> {
        let num_pixels = checked_num_pixels(size)?;
        Self::new(size, vec![val; num_pixels])
    }

    /// The size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// The width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// The height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// The number of pixels in the image.
    pub fn num_pixels(&self) -> usize {
        self.data.len()
    }

    /// The row-major pixel data.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// The mutable row-major pixel data.
    pub fn as_slice_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the image and return its pixel data.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Get the pixel at `(x, y)` without bounds checking the coordinate pair.
    ///
    /// The caller must keep `y * width + x` inside the image. An index past the
    /// end of the buffer panics, while an `x` past the row end silently reads
    /// from the next row.
    #[inline]
    pub fn get_unchecked(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.size.width + x]
    }

    /// Get the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// If the coordinate lies outside the image, an error is returned.
    pub fn get(&self, x: usize, y: usize) -> Result<u8, ImageError> {
        self.check_bounds(x, y)?;
        Ok(self.get_unchecked(x, y))
    }

    /// Set the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// If the coordinate lies outside the image, an error is returned.
    pub fn set(&mut self, x: usize, y: usize, val: u8) -> Result<(), ImageError> {
        self.check_bounds(x, y)?;
        let width = self.size.width;
        self.data[y * width + x] = val;
        Ok(())
    }

    /// Whether `(x, y)` is part of the outermost ring of pixels.
    pub fn is_border(&self, x: usize, y: usize) -> bool {
        x == 0 || y == 0 || x + 1 == self.size.width || y + 1 == self.size.height
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<(), ImageError> {
        if x >= self.size.width || y >= self.size.height {
            return Err(ImageError::PixelOutOfBounds(
                x,
                y,
                self.size.width,
                self.size.height,
            ));
        }
        Ok(())
    }
}

/// The number of pixels of a non-empty image, `width * height`.
fn checked_num_pixels(size: ImageSize) -> Result<usize, ImageError> {
    if size.width == 0 || size.height == 0 {
        return Err(ImageError::InvalidImageSize(size.width, size.height));
    }
    size.width
        .checked_mul(size.height)
        .ok_or(ImageError::InvalidImageSize(size.width, size.height))
}

impl ops::Index<usize> for GrayImage {
    type Output = u8;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl ops::IndexMut<usize> for GrayImage {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}
