pub mod mirror;
pub mod pipe;
pub mod rotate;
pub mod slice;
pub mod traits;

pub mod prelude {
    pub use super::mirror::MirrorTransform;
    pub use super::pipe::{PipeableTransform, Pipeline};
    pub use super::rotate::{QuarterTurn, RotateTransform};
    pub use super::slice::SliceTransform;
    pub use super::traits::{ImageTransform, Shape};
}
