//! Test fixtures: synthetic images and PNG files on disk.

use raster_engine::{PixelBuffer, WHITE};
use rasterlab::imaging::write_png;
use std::path::{Path, PathBuf};

/// Dark gray used for painted shapes; well below the default threshold.
pub const INK: [u8; 4] = [20, 20, 20, 255];

/// Paint a filled `w x h` rectangle of [`INK`].
pub fn paint(buf: &mut PixelBuffer, x0: u32, y0: u32, w: u32, h: u32) {
    for y in y0..y0 + h {
        for x in x0..x0 + w {
            buf.set_pixel(x, y, INK);
        }
    }
}

/// 40x30 tile: 2 pips on top, 3 below, a divider bar on row 15 and a 2x2
/// speck too small to count.
///
/// With default options this counts as top 2, bottom 2 (3 minus the
/// residue correction).
pub fn domino_tile() -> PixelBuffer {
    let mut buf = PixelBuffer::filled(40, 30, WHITE);
    paint(&mut buf, 5, 3, 6, 6);
    paint(&mut buf, 25, 3, 6, 6);
    paint(&mut buf, 3, 21, 6, 6);
    paint(&mut buf, 16, 21, 6, 6);
    paint(&mut buf, 29, 21, 6, 6);
    paint(&mut buf, 1, 15, 38, 1);
    paint(&mut buf, 18, 5, 2, 2);
    buf
}

/// Colour gradient with partial alpha, for codec and geometry checks.
pub fn gradient(width: u32, height: u32) -> PixelBuffer {
    let mut buf = PixelBuffer::filled(width, height, WHITE);
    for y in 0..height {
        for x in 0..width {
            let r = (x * 255 / width.max(1)) as u8;
            let g = (y * 255 / height.max(1)) as u8;
            buf.set_pixel(x, y, [r, g, 128, 200]);
        }
    }
    buf
}

/// Write `buf` as `name` inside `dir` and return the path.
pub fn png_file(dir: &Path, name: &str, buf: &PixelBuffer) -> PathBuf {
    let path = dir.join(name);
    write_png(&path, buf).unwrap();
    path
}
