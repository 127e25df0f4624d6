use grayconv_image::Kernel;

/// Create a kernel that leaves the image unchanged.
pub fn identity() -> Kernel {
    Kernel::new(0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0)
}

/// Create an all-ones kernel that sums the 3x3 neighborhood.
///
/// Same as [`Kernel::default`].
pub fn box_sum() -> Kernel {
    Kernel::default()
}

/// Create a normalized box blur kernel.
pub fn box_mean() -> Kernel {
    let w = 1.0 / 9.0;
    Kernel::from_rows([[w; 3]; 3])
}

/// Create a gaussian blur kernel with the 1-2-1 binomial weights.
pub fn gaussian() -> Kernel {
    Kernel::from_rows([
        [1.0 / 16.0, 2.0 / 16.0, 1.0 / 16.0],
        [2.0 / 16.0, 4.0 / 16.0, 2.0 / 16.0],
        [1.0 / 16.0, 2.0 / 16.0, 1.0 / 16.0],
    ])
}

/// Create a sharpening kernel.
pub fn sharpen() -> Kernel {
    Kernel::new(0.0, -1.0, 0.0, -1.0, 5.0, -1.0, 0.0, -1.0, 0.0)
}

/// Create a 4-neighbour laplacian kernel.
pub fn laplacian() -> Kernel {
    Kernel::new(0.0, 1.0, 0.0, 1.0, -4.0, 1.0, 0.0, 1.0, 0.0)
}

/// Create a sobel kernel for the horizontal derivative.
pub fn sobel_x() -> Kernel {
    Kernel::new(-1.0, 0.0, 1.0, -2.0, 0.0, 2.0, -1.0, 0.0, 1.0)
}

/// Create a sobel kernel for the vertical derivative.
pub fn sobel_y() -> Kernel {
    sobel_x().transpose()
}
