use image::DynamicImage;

use crate::error::Result;

/// `(width, height)` of an image flowing through a transform.
pub type Shape = (u32, u32);

/// Core trait for applying a transform to an image.
///
/// Every stage takes ownership of its input so intermediates are dropped as
/// soon as the next stage has consumed them.
pub trait ImageTransform {
    /// Short label used for progress logging
    fn name(&self) -> &str;

    /// Apply the transform, producing the next image in the pipeline
    fn apply(&mut self, input: DynamicImage) -> Result<DynamicImage>;

    /// Validation step that inspects the input shape before any pixels are
    /// touched. Returns the shape `apply` will produce.
    fn prepare(&mut self, in_shape: Shape) -> Result<Shape>;

    /// Apply once. Alias for [ImageTransform::prepare] followed by [ImageTransform::apply].
    fn once(mut self, input: DynamicImage) -> Result<DynamicImage>
    where
        Self: Sized,
    {
        self.prepare((input.width(), input.height()))?;
        self.apply(input)
    }
}
