use image::DynamicImage;

use crate::error::Result;
use crate::transform::traits::{ImageTransform, Shape};

/// Extension trait that enables pipeline chaining
pub trait PipeableTransform: ImageTransform + Sized {
    /// Chain this transform with another, creating a pipeline
    ///
    /// # Example
    /// ```ignore
    ///
    /// // Create a pipeline: mirror -> slice columns
    /// let mut pipeline = MirrorTransform.pipe(SliceTransform::new(8));
    ///
    /// // Use it as a single transform
    /// let output = pipeline.once(input)?;
    /// ```
    fn pipe<T>(self, next: T) -> Pipeline<Self, T>
    where
        T: ImageTransform,
    {
        Pipeline::new(self, next)
    }
}

// Blanket implementation: all ImageTransforms are automatically pipeable
impl<T: ImageTransform> PipeableTransform for T {}

/// A pipeline that chains two transforms: A -> B -> C
///
/// The intermediate image is moved from the first stage into the second, so
/// it is dropped as soon as the second stage is done with it.
pub struct Pipeline<T1, T2>
where
    T1: ImageTransform,
    T2: ImageTransform,
{
    t1: T1,
    t2: T2,
}

impl<T1, T2> Pipeline<T1, T2>
where
    T1: ImageTransform,
    T2: ImageTransform,
{
    pub fn new(t1: T1, t2: T2) -> Self {
        Self { t1, t2 }
    }
}

impl<T1, T2> ImageTransform for Pipeline<T1, T2>
where
    T1: ImageTransform,
    T2: ImageTransform,
{
    fn name(&self) -> &str {
        "pipeline"
    }

    #[inline(always)]
    fn apply(&mut self, input: DynamicImage) -> Result<DynamicImage> {
        let intermediate = self.t1.apply(input)?;
        self.t2.apply(intermediate)
    }

    #[inline(always)]
    fn prepare(&mut self, in_shape: Shape) -> Result<Shape> {
        let b_shape = self.t1.prepare(in_shape)?;
        self.t2.prepare(b_shape)
    }
}

#[cfg(test)]
mod tests {
    use image::{DynamicImage, GenericImageView, GrayImage, Luma};

    use crate::{
        error::{GabialError, Result},
        transform::prelude::*,
    };

    #[test]
    fn test_pipeline_cascades_apply() {
        let input = DynamicImage::ImageLuma8(GrayImage::from_pixel(4, 4, Luma([0])));

        let a = IncTransform::default();
        let b = IncTransform::default();

        let output = a.pipe(b).once(input).unwrap();

        assert!(output.pixels().all(|(_, _, p)| p.0[0] == 2));
    }

    #[test]
    fn test_pipeline_cascades_prepare() {
        let mut pipeline = IncTransform::default().pipe(GrowTransform);

        let out_shape = pipeline.prepare((2, 3)).unwrap();

        assert_eq!(pipeline.t1.in_shape, Some((2, 3)));
        assert_eq!(out_shape, (4, 6));
    }

    #[test]
    fn test_pipeline_stops_at_first_failing_prepare() {
        let mut pipeline = FailTransform.pipe(IncTransform::default());

        assert!(pipeline.prepare((2, 2)).is_err());
        assert_eq!(pipeline.t2.in_shape, None);
    }

    #[derive(Default)]
    struct IncTransform {
        in_shape: Option<Shape>,
    }

    impl ImageTransform for IncTransform {
        fn name(&self) -> &str {
            "inc"
        }

        fn apply(&mut self, input: DynamicImage) -> Result<DynamicImage> {
            let mut gray = input.into_luma8();
            gray.pixels_mut().for_each(|p| p.0[0] += 1);
            Ok(DynamicImage::ImageLuma8(gray))
        }

        fn prepare(&mut self, in_shape: Shape) -> Result<Shape> {
            self.in_shape = Some(in_shape);
            Ok(in_shape)
        }
    }

    struct GrowTransform;

    impl ImageTransform for GrowTransform {
        fn name(&self) -> &str {
            "grow"
        }

        fn apply(&mut self, input: DynamicImage) -> Result<DynamicImage> {
            Ok(input)
        }

        fn prepare(&mut self, (width, height): Shape) -> Result<Shape> {
            Ok((width * 2, height * 2))
        }
    }

    struct FailTransform;

    impl ImageTransform for FailTransform {
        fn name(&self) -> &str {
            "fail"
        }

        fn apply(&mut self, input: DynamicImage) -> Result<DynamicImage> {
            Ok(input)
        }

        fn prepare(&mut self, (width, _): Shape) -> Result<Shape> {
            Err(GabialError::InvalidSliceCount {
                slice_amt: 0,
                width,
            })
        }
    }
}
