//! 8-connected component labeling by explicit-stack flood fill.

use crate::buffer::{Grid, PixelBuffer};

/// Per-pixel component labels. `0` is background; components are `1..=count`.
pub type LabelMap = Grid<u32>;

/// Output of [`label_components`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labeling {
    pub labels: LabelMap,
    /// Number of components found; labels run `1..=count`.
    pub count: u32,
}

const NEIGHBORS_8: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Label the black (`red == 0`) pixels of a binarized buffer.
///
/// Pixels are scanned row-major; each unlabeled foreground pixel seeds a new
/// label, so labels follow discovery order. The fill uses a work stack
/// rather than recursion. Neighbors are pushed unconditionally, and bounds,
/// foreground and already-labeled checks happen when a coordinate is popped.
pub fn label_components(buffer: &PixelBuffer) -> Labeling {
    let (w, h) = (buffer.width(), buffer.height());
    let mut labels = LabelMap::new(w, h);
    let mut count = 0u32;
    let mut stack: Vec<(i64, i64)> = Vec::new();

    for y in 0..h {
        for x in 0..w {
            if labels.get(x, y) != 0 || buffer.red(x, y) != 0 {
                continue;
            }
            count += 1;
            stack.push((x as i64, y as i64));

            while let Some((cx, cy)) = stack.pop() {
                if cx < 0 || cy < 0 || cx >= w as i64 || cy >= h as i64 {
                    continue;
                }
                let (ux, uy) = (cx as u32, cy as u32);
                if labels.get(ux, uy) != 0 || buffer.red(ux, uy) != 0 {
                    continue;
                }
                labels.set(ux, uy, count);
                for (dx, dy) in NEIGHBORS_8 {
                    stack.push((cx + dx, cy + dy));
                }
            }
        }
    }

    Labeling { labels, count }
}
