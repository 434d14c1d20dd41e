use std::path::Path;

use image::{DynamicImage, GenericImageView, ImageFormat};

use crate::{config::PipelineConfig, error::Result, transform::prelude::*, utils::viewer::Viewer};

pub mod cli;
pub mod config;
pub mod error;
pub mod transform;
pub mod utils;


/// Mirror, slice the columns, turn, slice the former rows, turn back.
pub fn gabial_pipeline(config: &PipelineConfig) -> impl ImageTransform + use<> {
    MirrorTransform
        .pipe(SliceTransform::new(config.slice_amt).labelled("First slicing"))
        .pipe(RotateTransform::new(config.turn, "Rotating image"))
        .pipe(SliceTransform::new(config.slice_amt).labelled("Second slicing"))
        .pipe(RotateTransform::new(
            config.turn.inverse(),
            "Rotating image back",
        ))
}

/// Run the gabial transform on an in-memory image.
///
/// The slice count is checked against both passes before any pixel work.
pub fn run(config: &PipelineConfig, original_img: DynamicImage) -> Result<DynamicImage> {
    let mut pipeline = gabial_pipeline(config);
    let out_shape = pipeline.prepare(original_img.dimensions())?;
    log::debug!(
        "{} -> {:?} to {:?}",
        pipeline.name(),
        original_img.dimensions(),
        out_shape
    );
    pipeline.apply(original_img)
}

/// Create a gabial image from the file at `image_path`, write it to
/// `output_path` as PNG and optionally hand it to `viewer`.
///
/// Nothing is written unless every transform succeeds. A viewer failure is
/// logged and does not fail the call.
pub fn make_gabial(
    image_path: &Path,
    output_path: &Path,
    config: &PipelineConfig,
    viewer: &mut impl Viewer,
) -> Result<DynamicImage> {
    log::info!("Opening image...");
    let original_image = utils::image::read_image(image_path)?;

    let final_image = run(config, original_image)?;

    log::info!("Saving image to {}...", output_path.display());
    utils::image::write_image(&final_image, output_path, ImageFormat::Png)?;

    if config.show {
        log::info!("Displaying image...");
        if let Err(e) = viewer.show(output_path) {
            log::warn!("Could not display {}: {}", output_path.display(), e);
        }
    }

    Ok(final_image)
}
