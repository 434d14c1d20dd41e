use image::DynamicImage;

use crate::{
    error::Result,
    transform::traits::{ImageTransform, Shape},
};

/// Direction of a lossless 90 degree rotation.
///
/// The canvas always expands to fit: width and height swap and no pixel is
/// cropped or padded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuarterTurn {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl QuarterTurn {
    pub fn rotate(self, image: &DynamicImage) -> DynamicImage {
        match self {
            QuarterTurn::Clockwise => image.rotate90(),
            QuarterTurn::CounterClockwise => image.rotate270(),
        }
    }

    /// The turn that undoes this one.
    pub fn inverse(self) -> Self {
        match self {
            QuarterTurn::Clockwise => QuarterTurn::CounterClockwise,
            QuarterTurn::CounterClockwise => QuarterTurn::Clockwise,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            QuarterTurn::Clockwise => "cw",
            QuarterTurn::CounterClockwise => "ccw",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "cw" => Some(QuarterTurn::Clockwise),
            "ccw" => Some(QuarterTurn::CounterClockwise),
            _ => None,
        }
    }
}

/// [QuarterTurn::rotate] as a pipeline stage.
pub struct RotateTransform {
    turn: QuarterTurn,
    label: &'static str,
}

impl RotateTransform {
    pub fn new(turn: QuarterTurn, label: &'static str) -> Self {
        Self { turn, label }
    }
}

impl ImageTransform for RotateTransform {
    fn name(&self) -> &str {
        self.label
    }

    fn apply(&mut self, input: DynamicImage) -> Result<DynamicImage> {
        log::info!("{}...", self.label);
        Ok(self.turn.rotate(&input))
    }

    fn prepare(&mut self, (width, height): Shape) -> Result<Shape> {
        Ok((height, width))
    }
}
