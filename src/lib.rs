pub mod app;
pub mod config;
pub mod error;
pub mod image;
pub mod report;
pub mod scan;
pub mod source;
pub mod ui;

pub use crate::app::run;
pub use crate::error::ScanError;
pub use crate::scan::{find_green_pixels, is_green, Coordinate, DEFAULT_THRESHOLD};
pub use crate::source::ImageSource;
