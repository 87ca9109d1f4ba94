use image::{Rgb, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};

/// Scratch directory for one test's fixtures, removed when dropped.
pub struct FixtureDir {
    path: PathBuf,
}

impl FixtureDir {
    pub fn new(test_name: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "green-pixel-finder-{}-{}",
            std::process::id(),
            test_name
        ));
        fs::create_dir_all(&path).unwrap();
        FixtureDir { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn join(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }

    /// Writes an RGB PNG named `file_name` whose pixel at (x, y) is `paint(x, y)`.
    pub fn write_png(
        &self,
        file_name: &str,
        width: u32,
        height: u32,
        paint: impl Fn(u32, u32) -> [u8; 3],
    ) -> PathBuf {
        let path = self.join(file_name);
        RgbImage::from_fn(width, height, |x, y| Rgb(paint(x, y)))
            .save_with_format(&path, image::ImageFormat::Png)
            .unwrap();
        path
    }
}

impl Drop for FixtureDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// The 2x2 image from the classic example: two green pixels on a diagonal.
pub fn two_by_two(x: u32, y: u32) -> [u8; 3] {
    match (x, y) {
        (0, 0) => [10, 200, 10],
        (1, 0) => [200, 10, 10],
        (0, 1) => [10, 10, 10],
        _ => [50, 180, 60],
    }
}
