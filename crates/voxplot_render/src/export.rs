//! PNG export of rendered figures.

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ColorType, ImageEncoder};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

use crate::canvas::Canvas;
use crate::error::RenderResult;
use crate::figure::Figure;

fn encode_into<W: Write>(writer: W, canvas: &Canvas) -> RenderResult<()> {
    let encoder = PngEncoder::new_with_quality(writer, CompressionType::Default, FilterType::Adaptive);
    encoder.write_image(
        canvas.as_bytes(),
        canvas.width(),
        canvas.height(),
        ColorType::Rgba8.into(),
    )?;
    Ok(())
}

/// Encodes a canvas as an in-memory PNG.
///
/// # Errors
///
/// Returns [`crate::RenderError::Encode`] if the encoder rejects the buffer.
pub fn encode_png(canvas: &Canvas) -> RenderResult<Vec<u8>> {
    let mut bytes = Vec::new();
    encode_into(&mut bytes, canvas)?;
    Ok(bytes)
}

/// Writes a figure to `path` as PNG, replacing any existing file.
///
/// # Errors
///
/// Returns [`crate::RenderError::Io`] if the file cannot be created and
/// [`crate::RenderError::Encode`] if encoding fails.
pub fn write_png(path: &Path, figure: &Figure) -> RenderResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    encode_into(&mut writer, &figure.canvas)?;
    writer.flush()?;

    let (width, height) = figure.pixel_size();
    info!(
        path = %path.display(),
        figure = %figure.kind,
        width,
        height,
        "saved figure"
    );
    Ok(())
}
