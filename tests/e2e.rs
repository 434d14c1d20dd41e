mod common;

use common::synthetic_image::checkerboard;
use gabial::{config::PipelineConfig, error::GabialError, run};
use image::GenericImageView;

#[test]
fn checkerboard_keeps_square_shape_and_palette() {
    let _ = env_logger::builder().is_test(true).try_init();

    let image = checkerboard(32, 32, 4);
    let config = PipelineConfig::new(8);
    let result = run(&config, image).expect("pipeline should succeed");

    // 2N = 64, 8 slices of 8
    assert_eq!(result.dimensions(), (64, 64));
    assert!(
        result
            .to_luma8()
            .pixels()
            .all(|p| p.0[0] == 32 || p.0[0] == 220),
        "permutation must only move pixels, never blend them"
    );
}

#[test]
fn pixel_histogram_is_preserved_when_slices_divide_evenly() {
    let image = checkerboard(12, 12, 3);
    let mirrored_dark = 4 * image.to_luma8().pixels().filter(|p| p.0[0] == 32).count();

    let result = run(&PipelineConfig::new(6), image).unwrap();
    let dark = result.to_luma8().pixels().filter(|p| p.0[0] == 32).count();

    assert_eq!(result.dimensions(), (24, 24));
    assert_eq!(dark, mirrored_dark);
}

#[test]
fn oversized_slice_amount_is_reported() {
    let image = checkerboard(4, 4, 1);
    let result = run(&PipelineConfig::new(9), image);

    assert!(matches!(
        result,
        Err(GabialError::InvalidSliceCount { slice_amt: 9, .. })
    ));
}
