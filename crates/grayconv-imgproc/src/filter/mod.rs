//! Filter operations
//!
//! This module provides the parallel 3x3 convolution of grayscale images.

/// Filter kernels
pub mod kernels;

/// Border and overflow options
mod options;
pub use options::*;

/// 3x3 convolution
mod convolution;
pub use convolution::*;
