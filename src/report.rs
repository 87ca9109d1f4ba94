use crate::scan::Coordinate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `(x, y)` pair per line
    #[default]
    Text,
    /// A single JSON document
    Json,
}

#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub source: &'a str,
    pub width: u32,
    pub height: u32,
    pub threshold: u8,
    pub count: usize,
    pub pixels: &'a [Coordinate],
}

pub fn write_text<W: Write>(out: &mut W, pixels: &[Coordinate]) -> io::Result<()> {
    for pixel in pixels {
        writeln!(out, "{}", pixel)?;
    }
    out.flush()
}

pub fn write_json<W: Write>(out: &mut W, report: &Report<'_>) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    out.flush()
}
