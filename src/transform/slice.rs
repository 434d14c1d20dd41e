use image::{DynamicImage, GenericImageView};
use itertools::Itertools;

use crate::{
    error::{GabialError, Result},
    transform::traits::{ImageTransform, Shape},
    utils::{
        image::{blank_like, paste},
        iterator::FoldIterator,
    },
};

/// Order in which the `n` left-to-right strips are placed into the output.
///
/// `placement_order(4) == [0, 3, 1, 2]`
pub fn placement_order(n: usize) -> Vec<usize> {
    FoldIterator::new(n).collect_vec()
}

/// Width of one strip, rejecting counts that would leave strips empty.
pub fn slice_size(width: u32, slice_amt: u32) -> Result<u32> {
    if slice_amt == 0 || slice_amt > width {
        return Err(GabialError::InvalidSliceCount { slice_amt, width });
    }
    Ok(width / slice_amt)
}

/// Cut `image` into `slice_amt` vertical strips and paste them back in
/// fold-then-reverse order.
///
/// The output is `slice_size * slice_amt` wide; columns past that are dropped.
pub fn image_slice_rev(image: &DynamicImage, slice_amt: u32) -> Result<DynamicImage> {
    let (width, height) = image.dimensions();
    let slice_size = slice_size(width, slice_amt)?;

    let slices = (0..slice_amt)
        .map(|i| image.crop_imm(i * slice_size, 0, slice_size, height))
        .collect_vec();

    log::info!("Slicing done. Pasting...");

    let mut new_image = blank_like(image, slice_size * slice_amt, height);
    for (i, idx) in placement_order(slices.len()).into_iter().enumerate() {
        paste(&mut new_image, &slices[idx], i as u32 * slice_size, 0)?;
    }

    Ok(new_image)
}

/// [image_slice_rev] as a pipeline stage.
pub struct SliceTransform {
    slice_amt: u32,
    label: &'static str,
}

impl SliceTransform {
    pub fn new(slice_amt: u32) -> Self {
        Self {
            slice_amt,
            label: "slicing",
        }
    }

    /// Same transform with a different progress label.
    pub fn labelled(mut self, label: &'static str) -> Self {
        self.label = label;
        self
    }
}

impl ImageTransform for SliceTransform {
    fn name(&self) -> &str {
        self.label
    }

    fn apply(&mut self, input: DynamicImage) -> Result<DynamicImage> {
        log::info!("{}...", self.label);
        image_slice_rev(&input, self.slice_amt)
    }

    fn prepare(&mut self, (width, height): Shape) -> Result<Shape> {
        let slice_size = slice_size(width, self.slice_amt)?;
        Ok((slice_size * self.slice_amt, height))
    }
}
