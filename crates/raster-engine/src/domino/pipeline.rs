//! Domino pip counting: clean, split at the divider, label each half.

use super::options::{DominoOptions, DIVIDER_RESIDUE_CORRECTION};
use crate::api::EngineError;
use crate::buffer::PixelBuffer;
use crate::color::{binarize, to_grayscale};
use crate::morph::opening;
use crate::segment::{filter_by_area, label_components, AreaFilterResult};
use serde::Serialize;

/// Pip counts for the two halves of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DominoResult {
    pub top_pips: u32,
    pub bottom_pips: u32,
}

impl DominoResult {
    pub fn total(&self) -> u32 {
        self.top_pips + self.bottom_pips
    }
}

/// Every intermediate stage of one pipeline run.
#[derive(Debug, Clone)]
pub struct DominoAnalysis {
    pub result: DominoResult,
    /// Binarized and opened image the halves were cut from.
    pub cleaned: PixelBuffer,
    /// Divider row, `height / 2`.
    pub divider: u32,
    pub top: AreaFilterResult,
    pub bottom: AreaFilterResult,
}

/// Count pips on a tile image. See [`analyze`] for the stages.
pub fn count_pips(buffer: &PixelBuffer, options: &DominoOptions) -> Result<DominoResult, EngineError> {
    analyze(buffer, options).map(|analysis| analysis.result)
}

/// Run the full pipeline and keep every intermediate result.
///
/// 1. grayscale, binarize at `options.threshold`, opening with
///    `options.structuring_element`
/// 2. divider row = `height / 2`
/// 3. [`split_halves`] with `options.divider_margin`
/// 4. label each half and drop components under `options.min_area`
/// 5. top = surviving top count; bottom = surviving bottom count minus
///    [`DIVIDER_RESIDUE_CORRECTION`], floored at zero
///
/// The input is not modified.
pub fn analyze(buffer: &PixelBuffer, options: &DominoOptions) -> Result<DominoAnalysis, EngineError> {
    let mut work = buffer.clone();
    to_grayscale(&mut work);
    binarize(&mut work, options.threshold);
    let cleaned = opening(&work, &options.structuring_element)?;

    let divider = cleaned.height() / 2;
    let (top_half, bottom_half) = split_halves(&cleaned, divider, options.divider_margin);

    let top = count_half(&top_half, options.min_area);
    let bottom = count_half(&bottom_half, options.min_area);

    let result = DominoResult {
        top_pips: top.valid_count,
        bottom_pips: bottom.valid_count.saturating_sub(DIVIDER_RESIDUE_CORRECTION),
    };
    tracing::debug!(
        divider,
        top = top.valid_count,
        bottom = bottom.valid_count,
        top_pips = result.top_pips,
        bottom_pips = result.bottom_pips,
        "Counted domino halves"
    );

    Ok(DominoAnalysis {
        result,
        cleaned,
        divider,
        top,
        bottom,
    })
}

/// Cut a cleaned tile into two full-size halves.
///
/// Rows strictly above `divider - margin` stay in the top half, rows strictly
/// below `divider + margin` stay in the bottom half, and every other row is
/// painted white. Rows inside `[divider - margin, divider + margin]` are
/// therefore white in both halves.
pub fn split_halves(cleaned: &PixelBuffer, divider: u32, margin: u32) -> (PixelBuffer, PixelBuffer) {
    let mut top = cleaned.clone();
    let mut bottom = cleaned.clone();
    let upper_limit = divider as i64 - margin as i64;
    let lower_limit = divider as i64 + margin as i64;

    for y in 0..cleaned.height() {
        let row = y as i64;
        let (keep_top, keep_bottom) = (row < upper_limit, row > lower_limit);
        for x in 0..cleaned.width() {
            if !keep_top {
                top.set_gray(x, y, 255);
            }
            if !keep_bottom {
                bottom.set_gray(x, y, 255);
            }
        }
    }

    (top, bottom)
}

fn count_half(half: &PixelBuffer, min_area: u32) -> AreaFilterResult {
    let labeling = label_components(half);
    filter_by_area(&labeling.labels, labeling.count, min_area)
}
