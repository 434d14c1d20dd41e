use image::{DynamicImage, GrayImage, Luma};

/// Generates a simple high-contrast checkerboard image.
pub fn checkerboard(width: u32, height: u32, cell: u32) -> DynamicImage {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    DynamicImage::ImageLuma8(GrayImage::from_fn(width, height, |x, y| {
        let val = if (x / cell + y / cell) & 1 == 0 {
            32u8
        } else {
            220u8
        };
        Luma([val])
    }))
}
