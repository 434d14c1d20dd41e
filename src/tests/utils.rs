use std::path::{Path, PathBuf};

use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};
use rand::Rng;

/// Directory under the system temp dir, removed with its contents on drop.
pub struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    pub fn new(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!("gabial_{}_{}", name, std::process::id()));
        std::fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn join(&self, file: &str) -> PathBuf {
        self.path.join(file)
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

pub fn rand_rgb(rng: &mut rand::rngs::ThreadRng) -> Rgb<u8> {
    Rgb([rng.random(), rng.random(), rng.random()])
}

pub fn gen_random_image(width: u32, height: u32) -> DynamicImage {
    let mut rng = rand::rng();
    DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |_, _| rand_rgb(&mut rng)))
}

/// Gray image whose pixel at `(x, y)` holds `y * width + x`.
pub fn numbered_gray(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageLuma8(GrayImage::from_fn(width, height, |x, y| {
        Luma([(y * width + x) as u8])
    }))
}

/// Gray image where every pixel of column `x` holds `labels[x]`.
pub fn column_image(labels: &[u8], height: u32) -> DynamicImage {
    DynamicImage::ImageLuma8(GrayImage::from_fn(labels.len() as u32, height, |x, _| {
        Luma([labels[x as usize]])
    }))
}

/// Gray image where every pixel of row `y` holds `labels[y]`.
pub fn row_image(labels: &[u8], width: u32) -> DynamicImage {
    DynamicImage::ImageLuma8(GrayImage::from_fn(width, labels.len() as u32, |_, y| {
        Luma([labels[y as usize]])
    }))
}

/// Label of each column, asserting the column is uniform.
pub fn column_labels(image: &DynamicImage) -> Vec<u8> {
    let gray = image.to_luma8();
    (0..image.width())
        .map(|x| {
            let label = gray.get_pixel(x, 0).0[0];
            assert!(
                (0..image.height()).all(|y| gray.get_pixel(x, y).0[0] == label),
                "column {} is not uniform",
                x
            );
            label
        })
        .collect()
}

/// Label of each row, asserting the row is uniform.
pub fn row_labels(image: &DynamicImage) -> Vec<u8> {
    column_labels(&image.rotate270())
}
