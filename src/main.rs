use clap::Parser;
use env_logger::Env;
use green_pixel_finder::{config::ScanConfig, report::OutputFormat};
use std::{io, path::PathBuf};

/// Print the coordinates of predominantly green pixels in an image.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Image path or http(s) URL [default: google.png]
    source: Option<String>,

    /// Green must be strictly brighter than this [default: 150]
    #[arg(short, long)]
    threshold: Option<u8>,

    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Save a copy with the green pixels painted black
    #[arg(long, value_name = "OUT.png")]
    mark: Option<PathBuf>,

    /// Show the image and its matches on the terminal (stderr) before printing
    #[arg(long)]
    preview: bool,

    /// JSON file with defaults for the options above
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let overrides = ScanConfig {
        source: args.source,
        threshold: args.threshold,
        format: args.format,
        mark: args.mark,
        preview: args.preview.then_some(true),
    };
    if let Err(e) = green_pixel_finder::run(args.config.as_deref(), overrides, &mut io::stdout()).await {
        eprintln!("Error writing output: {}", e);
    }
}
