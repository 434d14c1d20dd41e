use image::{
    DynamicImage, GenericImage, ImageError, ImageFormat, ImageReader,
    error::{ImageFormatHint, UnsupportedError, UnsupportedErrorKind},
};
use std::{fs::File, io::BufWriter, path::Path};

use crate::error::{GabialError, Result};

/// Open and decode an image, guessing the format from its content.
///
/// A missing path and an undecodable file are both reported as
/// [GabialError::InputNotFound].
pub fn read_image(path: &Path) -> Result<DynamicImage> {
    ImageReader::open(path)
        .map_err(ImageError::IoError)
        .and_then(|reader| reader.with_guessed_format().map_err(ImageError::IoError))
        .and_then(|reader| reader.decode())
        .map_err(|source| GabialError::InputNotFound {
            path: path.to_path_buf(),
            source,
        })
}

/// Encode `image` into `path` with the given format, whatever the extension of `path`.
pub fn write_image(image: &DynamicImage, path: &Path, image_format: ImageFormat) -> Result {
    let file = &mut BufWriter::new(File::create(path)?);
    image
        .write_to(file, image_format)
        .map_err(GabialError::ImageEncode)
}

/// Blank image with the same colour type as `like`.
pub fn blank_like(like: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    DynamicImage::new(width, height, like.color())
}

macro_rules! paste_variants {
    ($target:expr, $src:expr, $x:expr, $y:expr; $($variant:ident),+) => {
        match ($target, $src) {
            $(
                (DynamicImage::$variant(dst), DynamicImage::$variant(src)) => {
                    dst.copy_from(src, $x, $y)
                }
            )+
            (_, src) => Err(unsupported_color(src)),
        }
    };
}

/// Copy `src` into `target` with its top-left corner at `(x, y)`.
///
/// Pixels are copied verbatim: both images must share a colour type and `src`
/// must fit inside `target` at the given offset.
pub fn paste(target: &mut DynamicImage, src: &DynamicImage, x: u32, y: u32) -> Result {
    let res = paste_variants!(target, src, x, y;
        ImageLuma8, ImageLumaA8, ImageRgb8, ImageRgba8,
        ImageLuma16, ImageLumaA16, ImageRgb16, ImageRgba16,
        ImageRgb32F, ImageRgba32F
    );
    res.map_err(GabialError::ImageOperation)
}

fn unsupported_color(image: &DynamicImage) -> ImageError {
    ImageError::Unsupported(UnsupportedError::from_format_and_kind(
        ImageFormatHint::Unknown,
        UnsupportedErrorKind::Color(image.color().into()),
    ))
}
