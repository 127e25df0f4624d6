use grayconv_image::{GrayImage, ImageError, Kernel};
use thiserror::Error;

use super::{BorderType, FilterOptions};
use crate::parallel::{par_strided_columns, strided_columns, ParallelError};

/// Errors that can occur while filtering an image.
#[derive(Error, Debug, PartialEq)]
pub enum FilterError {
    /// Error coming from the image types.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// Error while spreading the work across workers.
    #[error(transparent)]
    Parallel(#[from] ParallelError),
}

/// The rectangle of pixels written by a filter pass.
#[derive(Debug, Clone, Copy)]
struct FilterRegion {
    cols: (usize, usize),
    rows: (usize, usize),
}

impl FilterRegion {
    fn new(width: usize, height: usize, border: BorderType) -> Self {
        match border {
            BorderType::Transparent => Self {
                cols: (1, width.saturating_sub(1)),
                rows: (1, height.saturating_sub(1)),
            },
            _ => Self {
                cols: (0, width),
                rows: (0, height),
            },
        }
    }

    fn is_empty(&self) -> bool {
        self.cols.0 >= self.cols.1 || self.rows.0 >= self.rows.1
    }
}

/// Apply a 3x3 kernel to an image, replacing its content with the result.
///
/// The outermost ring of pixels is left unchanged. Every other pixel becomes
/// the weighted sum of its 3x3 neighborhood in the original image, truncated
/// toward zero and reduced modulo 255.
///
/// # Arguments
///
/// * `image` - The image to filter.
/// * `kernel` - The kernel to apply.
///
/// # Examples
///
/// ```
/// use grayconv_image::{GrayImage, Kernel};
/// use grayconv_imgproc::filter::filter3x3;
///
/// let mut image = GrayImage::from_size_val([5, 5].into(), 10).unwrap();
/// filter3x3(&mut image, &Kernel::default()).unwrap();
///
/// assert_eq!(image.get(2, 2).unwrap(), 90);
/// assert_eq!(image.get(0, 2).unwrap(), 10);
/// ```
pub fn filter3x3(image: &mut GrayImage, kernel: &Kernel) -> Result<(), FilterError> {
    filter3x3_with(image, kernel, &FilterOptions::default())
}

/// Apply a 3x3 kernel to `src` and store the result in `dst`.
///
/// `dst` is overwritten with a copy of `src` and then filtered in place, so
/// `src` is left untouched.
///
/// # Arguments
///
/// * `kernel` - The kernel to apply.
/// * `src` - The source image.
/// * `dst` - The destination image. Its previous size and content are discarded.
pub fn filter3x3_copy(
    kernel: &Kernel,
    src: &GrayImage,
    dst: &mut GrayImage,
) -> Result<(), FilterError> {
    dst.clone_from(src);
    filter3x3(dst, kernel)
}

/// Apply a 3x3 kernel to an image with explicit options.
///
/// The filtered columns are split into strided residue classes, one per
/// worker. Every worker reads from the untouched image and writes into a
/// private strip. The strips are merged into a copy of the image once all
/// workers have joined, and the copy then replaces the image.
///
/// # Arguments
///
/// * `image` - The image to filter.
/// * `kernel` - The kernel to apply.
/// * `options` - The execution strategy, border mode and overflow policy.
///
/// # Errors
///
/// If the workers can not be started, an error is returned and the image is
/// left unchanged.
pub fn filter3x3_with(
    image: &mut GrayImage,
    kernel: &Kernel,
    options: &FilterOptions,
) -> Result<(), FilterError> {
    let region = FilterRegion::new(image.width(), image.height(), options.border);
    if region.is_empty() {
        log::debug!(
            "nothing to filter for {} with border {:?}",
            image.size(),
            options.border
        );
        return Ok(());
    }

    // the destination starts as a copy so that unfiltered pixels pass through
    let mut dst = image.clone();
    let src: &GrayImage = image;

    let strips = par_strided_columns(options.strategy, |worker, num_workers| {
        filter_strip(src, kernel, options, &region, worker, num_workers)
    })?;

    log::debug!(
        "filtered {} with {} workers, border {:?}, overflow {:?}",
        src.size(),
        strips.len(),
        options.border,
        options.overflow
    );

    let width = dst.width();
    let num_workers = strips.len();
    let (row_start, row_end) = region.rows;
    for (worker, strip) in strips.iter().enumerate() {
        let cols = strided_columns(worker, num_workers, region.cols.0, region.cols.1);
        debug_assert_eq!(strip.len(), cols.len() * (row_end - row_start));

        // same column-major order as `filter_strip`
        let pixels = cols.flat_map(|x| (row_start..row_end).map(move |y| y * width + x));
        for (idx, &v) in pixels.zip(strip.iter()) {
            dst[idx] = v;
        }
    }

    *image = dst;

    Ok(())
}

/// Compute the filtered values of the columns owned by one worker.
///
/// The strip is column-major: all rows of the first owned column, then all
/// rows of the next one.
fn filter_strip(
    src: &GrayImage,
    kernel: &Kernel,
    options: &FilterOptions,
    region: &FilterRegion,
    worker: usize,
    num_workers: usize,
) -> Vec<u8> {
    let (row_start, row_end) = region.rows;
    let cols = strided_columns(worker, num_workers, region.cols.0, region.cols.1);

    let mut strip = Vec::with_capacity(cols.len() * (row_end - row_start));
    for x in cols {
        for y in row_start..row_end {
            let sum = neighborhood_sum(src, kernel, options, x, y);
            strip.push(options.overflow.apply(sum));
        }
    }
    strip
}

/// Weighted sum of the 3x3 neighborhood centered on `(x, y)`.
#[inline]
fn neighborhood_sum(
    src: &GrayImage,
    kernel: &Kernel,
    options: &FilterOptions,
    x: usize,
    y: usize,
) -> f64 {
    let (width, height) = (src.width(), src.height());
    let interior = x >= 1 && y >= 1 && x + 1 < width && y + 1 < height;

    let mut sum = 0.0;
    for (r, row) in kernel.rows().iter().enumerate() {
        for (c, &weight) in row.iter().enumerate() {
            let value = if interior {
                src.get_unchecked(x + c - 1, y + r - 1)
            } else {
                sample_with_border(
                    src,
                    options,
                    x as isize + c as isize - 1,
                    y as isize + r as isize - 1,
                )
            };
            sum += f64::from(value) * weight;
        }
    }
    sum
}

fn sample_with_border(src: &GrayImage, options: &FilterOptions, x: isize, y: isize) -> u8 {
    let border = options.border;
    match (
        border.map_index(x, src.width()),
        border.map_index(y, src.height()),
    ) {
        (Some(x), Some(y)) => src.get_unchecked(x, y),
        _ => options.border_value,
    }
}
