use crate::parallel::ExecutionStrategy;

/// Border handling modes for the 3x3 convolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderType {
    /// Leave the outermost ring of pixels unfiltered and copy it through.
    #[default]
    Transparent,

    /// Fill all out-of-bounds pixels with [`FilterOptions::border_value`].
    ///
    /// Example: ...d c b a | v v v v...
    Constant,

    /// Replicate the value of the nearest border pixel.
    ///
    /// Example: ...d c b a | a a a a...
    Replicate,

    /// Reflect the image across the border, including the border pixel.
    ///
    /// Example: ...d c b a | a b c d...
    Reflect,

    /// Reflect the image across the border, excluding the border pixel.
    ///
    /// Example: ...d c b a | b c d e...
    Reflect101,

    /// Wrap the image around periodically.
    ///
    /// Example: ...d c b a | w x y z...
    Wrap,
}

impl BorderType {
    /// Map a possibly out-of-range coordinate onto `[0, len)`.
    ///
    /// Returns `None` when the mode does not read from the image, i.e. for
    /// [`BorderType::Constant`] and [`BorderType::Transparent`].
    #[inline]
    pub fn map_index(&self, i: isize, len: usize) -> Option<usize> {
        let n = len as isize;
        if (0..n).contains(&i) {
            return Some(i as usize);
        }
        match self {
            BorderType::Transparent | BorderType::Constant => None,
            BorderType::Replicate => Some(i.clamp(0, n - 1) as usize),
            BorderType::Reflect => Some(reflect_index(i, n) as usize),
            BorderType::Reflect101 if len == 1 => Some(0),
            BorderType::Reflect101 => Some(reflect101_index(i, n) as usize),
            BorderType::Wrap => Some(i.rem_euclid(n) as usize),
        }
    }
}

fn reflect_index(idx: isize, len: isize) -> isize {
    if idx < 0 {
        (-idx) - 1
    } else if idx >= len {
        2 * len - idx - 1
    } else {
        idx
    }
}

fn reflect101_index(idx: isize, len: isize) -> isize {
    if idx < 0 {
        -idx
    } else if idx >= len {
        2 * len - idx - 2
    } else {
        idx
    }
}

/// How a weighted sum is turned into an 8-bit sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Truncate toward zero, take the signed remainder modulo 255 and store it
    /// as a byte, e.g. `260 -> 5`, `-1 -> 255` and `-4 -> 252`.
    #[default]
    Wrap255,

    /// Truncate toward zero and clamp to `[0, 255]`.
    Clamp,
}

impl OverflowPolicy {
    /// Convert a weighted sum into a sample.
    ///
    /// The float to integer cast saturates and maps NaN to 0.
    #[inline]
    pub fn apply(&self, sum: f64) -> u8 {
        let value = sum as i64;
        match self {
            // the remainder keeps the sign of the sum, the byte store wraps it mod 256
            OverflowPolicy::Wrap255 => (value % 255).rem_euclid(256) as u8,
            OverflowPolicy::Clamp => value.clamp(0, 255) as u8,
        }
    }
}

/// Options for [`crate::filter::filter3x3_with`].
///
/// # Examples
///
/// ```
/// use grayconv_imgproc::filter::{BorderType, FilterOptions, OverflowPolicy};
/// use grayconv_imgproc::parallel::ExecutionStrategy;
///
/// let options = FilterOptions::default()
///     .with_strategy(ExecutionStrategy::Fixed(2))
///     .with_border(BorderType::Constant, 0)
///     .with_overflow(OverflowPolicy::Clamp);
///
/// assert_eq!(options.border, BorderType::Constant);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterOptions {
    /// How the work is spread across workers.
    pub strategy: ExecutionStrategy,
    /// How pixels near the image edge are handled.
    pub border: BorderType,
    /// The value of out-of-bounds pixels for [`BorderType::Constant`].
    pub border_value: u8,
    /// How weighted sums are stored.
    pub overflow: OverflowPolicy,
}

impl FilterOptions {
    /// Set the execution strategy.
    pub fn with_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the border mode and the constant border value.
    pub fn with_border(mut self, border: BorderType, border_value: u8) -> Self {
        self.border = border;
        self.border_value = border_value;
        self
    }

    /// Set the overflow policy.
    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_index() {
        assert_eq!(BorderType::Replicate.map_index(-1, 4), Some(0));
        assert_eq!(BorderType::Replicate.map_index(4, 4), Some(3));
        assert_eq!(BorderType::Reflect.map_index(-1, 4), Some(0));
        assert_eq!(BorderType::Reflect.map_index(4, 4), Some(3));
        assert_eq!(BorderType::Reflect101.map_index(-1, 4), Some(1));
        assert_eq!(BorderType::Reflect101.map_index(4, 4), Some(2));
        assert_eq!(BorderType::Reflect101.map_index(-1, 1), Some(0));
        assert_eq!(BorderType::Wrap.map_index(-1, 4), Some(3));
        assert_eq!(BorderType::Wrap.map_index(4, 4), Some(0));
        assert_eq!(BorderType::Constant.map_index(-1, 4), None);
        assert_eq!(BorderType::Constant.map_index(2, 4), Some(2));
    }

    #[test]
    fn test_overflow_wrap255() {
        let policy = OverflowPolicy::Wrap255;
        assert_eq!(policy.apply(90.0), 90);
        assert_eq!(policy.apply(254.9), 254);
        assert_eq!(policy.apply(255.0), 0);
        assert_eq!(policy.apply(260.0), 5);
        assert_eq!(policy.apply(-1.0), 255);
        assert_eq!(policy.apply(-4.0), 252);
        assert_eq!(policy.apply(-254.0), 2);
        assert_eq!(policy.apply(-255.0), 0);
        assert_eq!(policy.apply(-260.9), 251);
        assert_eq!(policy.apply(-0.5), 0);
        assert_eq!(policy.apply(f64::NAN), 0);
    }

    #[test]
    fn test_overflow_clamp() {
        let policy = OverflowPolicy::Clamp;
        assert_eq!(policy.apply(260.0), 255);
        assert_eq!(policy.apply(-3.0), 0);
        assert_eq!(policy.apply(12.7), 12);
    }

    #[test]
    fn test_default_options() {
        let options = FilterOptions::default();
        assert_eq!(options.strategy, ExecutionStrategy::Auto);
        assert_eq!(options.border, BorderType::Transparent);
        assert_eq!(options.border_value, 0);
        assert_eq!(options.overflow, OverflowPolicy::Wrap255);
    }
}
