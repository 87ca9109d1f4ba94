use crate::error::ScanError;
use crate::scan::Coordinate;
use image::{DynamicImage, Rgb, RgbImage};
use log::info;
use std::path::Path;

pub const BLACK: (u8, u8, u8) = (0, 0, 0);

/// Decoded RGB image, row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<(u8, u8, u8)>,
}

impl Image {
    pub fn new(width: u32, height: u32, pixels: Vec<(u8, u8, u8)>) -> Result<Self, ScanError> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(ScanError::Failed(format!(
                "{}x{} image needs {} pixels, got {}",
                width,
                height,
                expected,
                pixels.len()
            )));
        }
        Ok(Image {
            width,
            height,
            pixels,
        })
    }

    /// Normalizes to three channels, dropping alpha and palette information.
    pub fn from_dynamic_image(img: &DynamicImage) -> Self {
        let rgb = img.to_rgb8();
        let (width, height) = rgb.dimensions();
        let pixels = rgb.pixels().map(|p| (p[0], p[1], p[2])).collect();

        Image {
            width,
            height,
            pixels,
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    pub fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8) {
        self.pixels[self.index(x, y)]
    }

    /// Paints every listed coordinate with `color`. Coordinates outside the
    /// image are ignored.
    pub fn mark(&mut self, coordinates: &[Coordinate], color: (u8, u8, u8)) {
        for c in coordinates {
            if c.x < self.width && c.y < self.height {
                let idx = self.index(c.x, c.y);
                self.pixels[idx] = color;
            }
        }
    }

    pub fn save_png(&self, path: &Path) -> Result<(), ScanError> {
        let mut out = RgbImage::new(self.width, self.height);
        for (x, y, px) in out.enumerate_pixels_mut() {
            let (r, g, b) = self.pixel(x, y);
            *px = Rgb([r, g, b]);
        }
        out.save_with_format(path, image::ImageFormat::Png)
            .map_err(|e| ScanError::Failed(format!("Failed to save {}: {e}", path.display())))?;
        info!("wrote marked image to {}", path.display());
        Ok(())
    }
}
