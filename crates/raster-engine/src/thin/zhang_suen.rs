//! Zhang-Suen thinning.
//!
//! Each pass runs two sub-iterations over the interior pixels. A
//! sub-iteration first collects every foreground pixel that satisfies its
//! deletion predicate, then clears them all at once, so every decision in a
//! sub-iteration sees the same grid. The second sub-iteration runs on the
//! grid left by the first. Thinning stops after a pass that deletes nothing.
//!
//! Neighbor naming, clockwise from north:
//!
//! ```text
//!    p9  p2  p3
//!    p8  p1  p4
//!    p7  p6  p5
//! ```

use super::options::ThinningOptions;
use crate::api::EngineError;
use crate::buffer::{Grid, PixelBuffer};
use crate::color::{binarize, to_grayscale};

/// Binary mask for thinning: `1` = foreground (dark), `0` = background.
pub type ThinningGrid = Grid<u8>;

/// Counters from a run of [`zhang_suen`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThinningStats {
    /// Full passes executed, including the final pass that removed nothing.
    pub passes: usize,
    /// Total pixels cleared across all passes.
    pub removed: usize,
    /// False when the pass cap stopped the loop before a fixed point.
    pub converged: bool,
}

/// Result of a successful [`skeletonize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThinningOutcome {
    /// Skeleton in black on white; alpha copied from the input.
    pub buffer: PixelBuffer,
    pub passes: usize,
    pub removed: usize,
}

#[derive(Clone, Copy)]
enum SubIteration {
    First,
    Second,
}

/// Build the thinning mask: grayscale, binarize at `threshold`, dark = 1.
///
/// The input buffer is left untouched.
pub fn thinning_grid(buffer: &PixelBuffer, threshold: u8) -> ThinningGrid {
    let mut work = buffer.clone();
    to_grayscale(&mut work);
    binarize(&mut work, threshold);

    let mut grid = ThinningGrid::new(buffer.width(), buffer.height());
    for y in 0..buffer.height() {
        for x in 0..buffer.width() {
            if work.red(x, y) == 0 {
                grid.set(x, y, 1);
            }
        }
    }
    grid
}

/// Thin `grid` in place until a pass removes nothing or `max_passes` is hit.
pub fn zhang_suen(grid: &mut ThinningGrid, max_passes: Option<usize>) -> ThinningStats {
    let mut stats = ThinningStats {
        passes: 0,
        removed: 0,
        converged: false,
    };

    loop {
        if max_passes.is_some_and(|cap| stats.passes >= cap) {
            tracing::debug!(passes = stats.passes, "Thinning stopped at pass cap");
            return stats;
        }
        stats.passes += 1;

        let first = sub_iteration(grid, SubIteration::First);
        let second = sub_iteration(grid, SubIteration::Second);
        tracing::trace!(pass = stats.passes, first, second, "Thinning pass");

        stats.removed += first + second;
        if first + second == 0 {
            stats.converged = true;
            return stats;
        }
    }
}

/// Skeletonize a buffer: build the mask, thin it, write it back as black on white.
///
/// # Errors
///
/// - [`EngineError::InvalidDimensions`] for images smaller than 2x2
/// - [`EngineError::InvalidParameter`] for a pass cap of zero
/// - [`EngineError::ConvergenceExceeded`] when `options.max_passes` stops the
///   loop early; the error carries the partial skeleton
pub fn skeletonize(
    buffer: &PixelBuffer,
    options: &ThinningOptions,
) -> Result<ThinningOutcome, EngineError> {
    buffer.require_neighborhood()?;
    if options.max_passes == Some(0) {
        return Err(EngineError::parameter(
            "max_passes",
            "must allow at least one pass",
        ));
    }

    let mut grid = thinning_grid(buffer, options.threshold);
    let stats = zhang_suen(&mut grid, options.max_passes);

    let mut output = buffer.clone();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            output.set_gray(x, y, if grid.get(x, y) == 1 { 0 } else { 255 });
        }
    }

    tracing::debug!(
        passes = stats.passes,
        removed = stats.removed,
        converged = stats.converged,
        "Skeletonized"
    );

    if !stats.converged {
        return Err(EngineError::ConvergenceExceeded {
            passes: stats.passes,
            partial: output,
        });
    }
    Ok(ThinningOutcome {
        buffer: output,
        passes: stats.passes,
        removed: stats.removed,
    })
}

/// Run one sub-iteration and return how many pixels it cleared.
fn sub_iteration(grid: &mut ThinningGrid, step: SubIteration) -> usize {
    let (w, h) = (grid.width(), grid.height());
    if w < 3 || h < 3 {
        return 0;
    }

    let mut marked = Vec::new();
    for y in 1..h - 1 {
        for x in 1..w - 1 {
            if grid.get(x, y) == 1 && deletable(&neighbors(grid, x, y), step) {
                marked.push((x, y));
            }
        }
    }

    for &(x, y) in &marked {
        grid.set(x, y, 0);
    }
    marked.len()
}

/// `[p2, p3, p4, p5, p6, p7, p8, p9]` for the pixel at `(x, y)`.
fn neighbors(grid: &ThinningGrid, x: u32, y: u32) -> [u8; 8] {
    [
        grid.get(x, y - 1),
        grid.get(x + 1, y - 1),
        grid.get(x + 1, y),
        grid.get(x + 1, y + 1),
        grid.get(x, y + 1),
        grid.get(x - 1, y + 1),
        grid.get(x - 1, y),
        grid.get(x - 1, y - 1),
    ]
}

fn deletable(p: &[u8; 8], step: SubIteration) -> bool {
    let b: u8 = p.iter().sum();
    if !(2..=6).contains(&b) || transitions(p) != 1 {
        return false;
    }
    let [p2, _, p4, _, p6, _, p8, _] = *p;
    match step {
        SubIteration::First => p2 * p4 * p6 == 0 && p4 * p6 * p8 == 0,
        SubIteration::Second => p2 * p4 * p8 == 0 && p2 * p6 * p8 == 0,
    }
}

/// Number of `0 -> 1` steps in the cyclic sequence `p2, p3, ..., p9, p2`.
fn transitions(p: &[u8; 8]) -> usize {
    (0..8).filter(|&i| p[i] == 0 && p[(i + 1) % 8] == 1).count()
}
