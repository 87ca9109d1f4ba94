use crate::error::ScanError;
use crate::image::Image;
use image::{DynamicImage, ImageError, ImageReader};
use log::debug;
use reqwest::{Client, StatusCode};
use std::{
    fmt, io,
    path::{Path, PathBuf},
};

#[derive(Clone, Debug, PartialEq)]
pub enum ImageSource {
    Local(PathBuf),
    Remote(String),
}

impl ImageSource {
    pub fn parse(source: &str) -> Self {
        if source.starts_with("http://") || source.starts_with("https://") {
            ImageSource::Remote(source.to_string())
        } else {
            ImageSource::Local(PathBuf::from(source))
        }
    }

    pub async fn load(&self) -> Result<Image, ScanError> {
        let dynamic_img = match self {
            ImageSource::Local(path) => open_local(path)?,
            ImageSource::Remote(url) => fetch_dynamic_image(&Client::new(), url).await?,
        };

        let img = Image::from_dynamic_image(&dynamic_img);
        debug!("loaded {} ({}x{})", self, img.width, img.height);
        Ok(img)
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSource::Local(path) => write!(f, "{}", path.display()),
            ImageSource::Remote(url) => write!(f, "{}", url),
        }
    }
}

/// Picks the decoder from the file contents, so the extension may be
/// missing or wrong.
fn open_local(path: &Path) -> Result<DynamicImage, ScanError> {
    let io_error = |err: io::Error| {
        if err.kind() == io::ErrorKind::NotFound {
            ScanError::not_found(path.display().to_string())
        } else {
            ScanError::Failed(err.to_string())
        }
    };

    ImageReader::open(path)
        .map_err(io_error)?
        .with_guessed_format()
        .map_err(io_error)?
        .decode()
        .map_err(|err| match err {
            ImageError::IoError(e) => io_error(e),
            other => ScanError::Failed(other.to_string()),
        })
}

async fn fetch_dynamic_image(client: &Client, url: &str) -> Result<DynamicImage, ScanError> {
    let res = client
        .get(url)
        .send()
        .await
        .map_err(|err| ScanError::Failed(format!("HTTP request failed: {}", err)))?;
    if res.status() == StatusCode::NOT_FOUND {
        return Err(ScanError::not_found(url));
    }
    let res = res
        .error_for_status()
        .map_err(|err| ScanError::Failed(format!("HTTP request failed: {}", err)))?;
    let bytes = res
        .bytes()
        .await
        .map_err(|err| ScanError::Failed(format!("Failed to read response body: {}", err)))?;

    image::load_from_memory(&bytes)
        .map_err(|err| ScanError::Failed(format!("Unsupported image format: {}", err)))
}
