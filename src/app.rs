//! The scan pipeline behind the command line: settings, load, scan,
//! optional mark/preview, report.
use crate::{
    config::{self, ScanConfig, Settings},
    error::ScanError,
    image::BLACK,
    report::{self, OutputFormat, Report},
    scan::find_green_pixels,
    source::ImageSource,
    ui::{PreviewState, UI},
};
use log::debug;
use std::{
    io::{self, Write},
    path::Path,
};

/// Runs one scan and writes either the report or a single diagnostic line
/// to `out`. Only a failure to write to `out` itself is returned.
pub async fn run<W: Write>(
    config_path: Option<&Path>,
    overrides: ScanConfig,
    out: &mut W,
) -> io::Result<()> {
    let result = match config::resolve(config_path, overrides) {
        Ok(settings) => scan_to(&settings, out).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        debug!("scan failed: {:?}", e);
        writeln!(out, "{}", e)?;
        out.flush()?;
    }
    Ok(())
}

pub async fn scan_to<W: Write>(settings: &Settings, out: &mut W) -> Result<(), ScanError> {
    let source = ImageSource::parse(&settings.source);
    let image = source.load().await?;
    let green_pixels = find_green_pixels(&image, settings.threshold);

    if let Some(path) = &settings.mark {
        let mut marked = image.clone();
        marked.mark(&green_pixels, BLACK);
        marked.save_png(path)?;
    }

    let (width, height) = (image.width, image.height);
    if settings.preview {
        let state = PreviewState::new(
            source.to_string(),
            settings.threshold,
            image,
            &green_pixels,
        );
        UI::new(state).run().await?;
    }

    match settings.format {
        OutputFormat::Text => report::write_text(out, &green_pixels)?,
        OutputFormat::Json => report::write_json(
            out,
            &Report {
                source: &settings.source,
                width,
                height,
                threshold: settings.threshold,
                count: green_pixels.len(),
                pixels: &green_pixels,
            },
        )?,
    }
    Ok(())
}
