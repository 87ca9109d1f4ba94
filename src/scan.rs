//! Green pixel classification.
//!
//! A pixel is "predominantly green" when its green channel is strictly
//! brighter than the threshold and strictly brighter than both red and
//! blue. Pixels are visited column by column: x ascending in the outer
//! loop, y ascending in the inner one, and matches keep that order.
use crate::image::Image;
use log::debug;
use serde::Serialize;
use std::fmt;

pub const DEFAULT_THRESHOLD: u8 = 150;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "(u32, u32)")]
pub struct Coordinate {
    pub x: u32,
    pub y: u32,
}

impl From<Coordinate> for (u32, u32) {
    fn from(c: Coordinate) -> Self {
        (c.x, c.y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

pub fn is_green((r, g, b): (u8, u8, u8), threshold: u8) -> bool {
    g > threshold && g > r && g > b
}

/// Scans every pixel once and returns the green ones in scan order.
pub fn find_green_pixels(image: &Image, threshold: u8) -> Vec<Coordinate> {
    let mut green = Vec::new();
    for x in 0..image.width {
        for y in 0..image.height {
            if is_green(image.pixel(x, y), threshold) {
                green.push(Coordinate { x, y });
            }
        }
    }
    debug!(
        "{} of {}x{} pixels above threshold {}",
        green.len(),
        image.width,
        image.height,
        threshold
    );
    green
}
