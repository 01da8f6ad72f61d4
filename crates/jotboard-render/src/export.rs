//! PNG export of a captured pixel buffer.
//!
//! Export is a direct capture of the drawing surface's pixels, not a
//! re-render from shape data; the engine only does the encoding.

use thiserror::Error;

/// Export errors.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("pixel buffer is {actual} bytes, expected {expected} for {width}x{height} RGBA")]
    BufferSize {
        expected: usize,
        actual: usize,
        width: u32,
        height: u32,
    },
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] png::EncodingError),
}

/// Encode an RGBA8 pixel buffer as a PNG file.
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, ExportError> {
    let expected = width as usize * height as usize * 4;
    if pixels.len() != expected {
        return Err(ExportError::BufferSize {
            expected,
            actual: pixels.len(),
            width,
            height,
        });
    }

    let mut bytes = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut bytes, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(pixels)?;
    }
    Ok(bytes)
}
