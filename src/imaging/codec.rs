//! PNG decode/encode between files and [`PixelBuffer`].

use crate::error::AppError;
use raster_engine::PixelBuffer;
use std::io::Cursor;
use std::path::Path;

/// Decode PNG bytes into an RGBA8 buffer.
///
/// Palette and low-bit-depth images are expanded and 16-bit samples are
/// stripped to 8 bits. Gray and RGB inputs get opaque alpha.
pub fn decode_png(bytes: &[u8]) -> Result<PixelBuffer, AppError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info()?;
    let mut raw = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut raw)?;
    raw.truncate(info.buffer_size());

    let samples = match info.color_type {
        png::ColorType::Rgba => raw,
        png::ColorType::Rgb => raw
            .chunks_exact(3)
            .flat_map(|c| [c[0], c[1], c[2], 255])
            .collect(),
        png::ColorType::GrayscaleAlpha => raw
            .chunks_exact(2)
            .flat_map(|c| [c[0], c[0], c[0], c[1]])
            .collect(),
        png::ColorType::Grayscale => raw.iter().flat_map(|&v| [v, v, v, 255]).collect(),
        png::ColorType::Indexed => {
            return Err(AppError::Codec(
                "indexed PNG was not expanded to RGB".to_string(),
            ))
        }
    };

    tracing::debug!(
        width = info.width,
        height = info.height,
        color = ?info.color_type,
        "Decoded PNG"
    );
    Ok(PixelBuffer::new(info.width, info.height, samples)?)
}

/// Encode an RGBA8 buffer as an 8-bit RGBA PNG.
pub fn encode_png(buffer: &PixelBuffer) -> Result<Vec<u8>, AppError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, buffer.width(), buffer.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(buffer.samples())?;
    }
    Ok(buf.into_inner())
}

/// Read and decode a PNG file.
pub fn read_png(path: &Path) -> Result<PixelBuffer, AppError> {
    let bytes = std::fs::read(path)?;
    decode_png(&bytes)
}

/// Encode and write a PNG file.
pub fn write_png(path: &Path, buffer: &PixelBuffer) -> Result<(), AppError> {
    let bytes = encode_png(buffer)?;
    std::fs::write(path, &bytes)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Wrote PNG");
    Ok(())
}
