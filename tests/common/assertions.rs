//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use raster_engine::PixelBuffer;
use std::path::Path;

/// Assert every red sample is 0 or 255 and R = G = B
pub fn assert_binary(buf: &PixelBuffer) {
    for (i, px) in buf.pixels().enumerate() {
        assert!(
            px[0] == 0 || px[0] == 255,
            "pixel {i} has non-binary value {}",
            px[0]
        );
        assert!(
            px[0] == px[1] && px[1] == px[2],
            "pixel {i} is not gray: {px:?}"
        );
    }
}

/// Assert buffer dimensions
pub fn assert_dimensions(buf: &PixelBuffer, width: u32, height: u32) {
    assert_eq!(
        (buf.width(), buf.height()),
        (width, height),
        "unexpected dimensions"
    );
}

/// Assert the file exists and starts with the PNG signature
pub fn assert_png_file(path: &Path) {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()));
    assert!(
        bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]),
        "Expected PNG signature, got {:?}",
        &bytes[..8.min(bytes.len())]
    );
}
