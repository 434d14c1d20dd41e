use image::{DynamicImage, GenericImageView};

use crate::{
    error::Result,
    transform::traits::{ImageTransform, Shape},
    utils::image::{blank_like, paste},
};

/// Tile `image` with its reflections into a 2x2 grid twice its size.
///
/// ```text
/// ┌──────────┬──────────┐
/// │ original │  flip ←→ │
/// ├──────────┼──────────┤
/// │  flip ↕  │ flip ↕←→ │
/// └──────────┴──────────┘
/// ```
pub fn create_mirrored_image(image: &DynamicImage) -> Result<DynamicImage> {
    let (width, height) = image.dimensions();
    let mut new_image = blank_like(image, width * 2, height * 2);

    paste(&mut new_image, image, 0, 0)?;
    paste(&mut new_image, &image.flipv(), 0, height)?;

    let top_right = image.fliph();
    paste(&mut new_image, &top_right, width, 0)?;
    paste(&mut new_image, &top_right.flipv(), width, height)?;

    Ok(new_image)
}

/// [create_mirrored_image] as a pipeline stage.
pub struct MirrorTransform;

impl ImageTransform for MirrorTransform {
    fn name(&self) -> &str {
        "mirroring"
    }

    fn apply(&mut self, input: DynamicImage) -> Result<DynamicImage> {
        log::info!("Creating mirrored image...");
        create_mirrored_image(&input)
    }

    fn prepare(&mut self, (width, height): Shape) -> Result<Shape> {
        Ok((width * 2, height * 2))
    }
}
