#![doc = include_str!("../../../README.md")]

#[doc(inline)]
pub use grayconv_image as image;

#[doc(inline)]
pub use grayconv_imgproc as imgproc;

#[doc(inline)]
pub use grayconv_io as io;
