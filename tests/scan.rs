mod common;

use common::synthetic_image::{two_by_two, FixtureDir};
use green_pixel_finder::image::{Image, BLACK};
use green_pixel_finder::{find_green_pixels, Coordinate, ImageSource, ScanError, DEFAULT_THRESHOLD};
use image::{Rgba, RgbaImage};
use std::fs;
use std::path::Path;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn c(x: u32, y: u32) -> Coordinate {
    Coordinate { x, y }
}

async fn scan(path: &Path) -> Result<Vec<Coordinate>, ScanError> {
    let image = ImageSource::Local(path.to_path_buf()).load().await?;
    Ok(find_green_pixels(&image, DEFAULT_THRESHOLD))
}

#[tokio::test]
async fn two_by_two_png_yields_diagonal() {
    init_logging();
    let dir = FixtureDir::new("two_by_two");
    let path = dir.write_png("two_by_two.png", 2, 2, two_by_two);

    assert_eq!(scan(&path).await.unwrap(), vec![c(0, 0), c(1, 1)]);
}

#[tokio::test]
async fn format_is_detected_from_contents_not_extension() {
    init_logging();
    let dir = FixtureDir::new("sniffed_format");
    let png = dir.write_png("leaf.png", 2, 2, two_by_two);
    let bare = dir.join("leaf");
    let misnamed = dir.join("leaf.jpg");
    fs::copy(&png, &bare).unwrap();
    fs::copy(&png, &misnamed).unwrap();

    assert_eq!(scan(&bare).await.unwrap(), vec![c(0, 0), c(1, 1)]);
    assert_eq!(scan(&misnamed).await.unwrap(), vec![c(0, 0), c(1, 1)]);
}

#[tokio::test]
async fn solid_green_png_yields_every_pixel_in_scan_order() {
    init_logging();
    let dir = FixtureDir::new("solid_green");
    let path = dir.write_png("solid_green.png", 3, 4, |_, _| [0, 255, 0]);
    let found = scan(&path).await.unwrap();

    let expected: Vec<_> = (0..3).flat_map(|x| (0..4).map(move |y| c(x, y))).collect();
    assert_eq!(found, expected);
}

#[tokio::test]
async fn solid_black_png_yields_nothing() {
    init_logging();
    let dir = FixtureDir::new("solid_black");
    let path = dir.write_png("solid_black.png", 5, 5, |_, _| [0, 0, 0]);
    assert!(scan(&path).await.unwrap().is_empty());
}

#[tokio::test]
async fn threshold_pixel_is_excluded() {
    init_logging();
    let dir = FixtureDir::new("at_threshold");
    let path = dir.write_png("at_threshold.png", 2, 1, |x, _| {
        if x == 0 {
            [0, 150, 0]
        } else {
            [0, 151, 0]
        }
    });
    assert_eq!(scan(&path).await.unwrap(), vec![c(1, 0)]);
}

#[tokio::test]
async fn repeated_scans_are_identical() {
    init_logging();
    let dir = FixtureDir::new("gradient");
    let path = dir.write_png("gradient.png", 16, 16, |x, y| [(x * 16) as u8, (y * 16) as u8, 40]);
    let first = scan(&path).await.unwrap();
    let second = scan(&path).await.unwrap();
    assert!(!first.is_empty());
    assert_eq!(first, second);
    assert!(first.len() <= 16 * 16);
}

#[tokio::test]
async fn alpha_channel_does_not_affect_classification() {
    init_logging();
    let dir = FixtureDir::new("transparent");
    let path = dir.join("transparent.png");
    RgbaImage::from_fn(2, 1, |x, _| {
        if x == 0 {
            Rgba([0, 255, 0, 0])
        } else {
            Rgba([0, 100, 0, 255])
        }
    })
    .save(&path)
    .unwrap();

    assert_eq!(scan(&path).await.unwrap(), vec![c(0, 0)]);
}

#[tokio::test]
async fn missing_file_reports_not_found() {
    init_logging();
    let dir = FixtureDir::new("missing");
    let path = dir.join("does_not_exist.png");
    let err = scan(&path).await.unwrap_err();

    assert!(matches!(err, ScanError::NotFound { .. }));
    assert_eq!(
        err.to_string(),
        format!("Error: The file at {} was not found.", path.display())
    );
}

#[tokio::test]
async fn corrupt_file_reports_generic_failure() {
    init_logging();
    let dir = FixtureDir::new("corrupt");
    let path = dir.join("corrupt.png");
    fs::write(&path, b"\x89PNG\r\n\x1a\nnot really a png").unwrap();

    let err = scan(&path).await.unwrap_err();
    assert!(matches!(err, ScanError::Failed(_)));
    assert!(err.to_string().starts_with("An error occurred: "));
}

#[tokio::test]
async fn marked_copy_has_green_pixels_blacked_out() {
    init_logging();
    let dir = FixtureDir::new("marking");
    let path = dir.write_png("to_mark.png", 3, 1, |x, _| match x {
        0 => [0, 255, 0],
        1 => [255, 255, 255],
        _ => [20, 160, 20],
    });
    let image = ImageSource::Local(path).load().await.unwrap();
    let found = find_green_pixels(&image, DEFAULT_THRESHOLD);

    let mut marked = image.clone();
    marked.mark(&found, BLACK);
    let out = dir.join("marked.png");
    marked.save_png(&out).unwrap();

    let reloaded = Image::from_dynamic_image(&image::open(&out).unwrap());
    assert_eq!(reloaded.pixels, vec![BLACK, (255, 255, 255), BLACK]);
    assert!(find_green_pixels(&reloaded, DEFAULT_THRESHOLD).is_empty());
}

#[test]
fn fixture_dir_is_removed_on_drop() {
    let dir = FixtureDir::new("cleanup");
    dir.write_png("a.png", 1, 1, |_, _| [0, 0, 0]);
    let root = dir.path().to_path_buf();
    assert!(root.exists());
    drop(dir);
    assert!(!root.exists());
}
