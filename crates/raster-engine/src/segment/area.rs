//! Component area measurement and minimum-area filtering.

use super::labeler::LabelMap;
use crate::api::EngineError;

/// Default minimum component size, in pixels.
pub const DEFAULT_MIN_AREA: u32 = 20;

/// Pixel count per label. Index `0` counts background pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentAreaTable {
    areas: Vec<u32>,
}

impl ComponentAreaTable {
    /// Area of `label`, or 0 for labels outside the table.
    pub fn area(&self, label: u32) -> u32 {
        self.areas.get(label as usize).copied().unwrap_or(0)
    }

    /// Number of component labels covered (excluding background).
    pub fn component_count(&self) -> u32 {
        self.areas.len().saturating_sub(1) as u32
    }
}

/// Output of [`filter_by_area`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaFilterResult {
    /// Relabeled map; dropped components are reset to 0.
    pub labels: LabelMap,
    /// Number of surviving components; labels run `1..=valid_count`.
    pub valid_count: u32,
}

/// Count the pixels of every label in `labels`.
///
/// `component_count` sizes the table. Labels above it (which a map from
/// [`label_components`](crate::label_components) never contains) are ignored.
pub fn component_areas(labels: &LabelMap, component_count: u32) -> ComponentAreaTable {
    let mut areas = vec![0u32; component_count as usize + 1];
    for &label in labels.cells() {
        if let Some(slot) = areas.get_mut(label as usize) {
            *slot += 1;
        }
    }
    ComponentAreaTable { areas }
}

/// Drop components smaller than `min_area` and renumber the survivors.
///
/// Survivors keep their relative discovery order and are renumbered
/// contiguously from 1. The input map is not modified.
pub fn filter_by_area(labels: &LabelMap, component_count: u32, min_area: u32) -> AreaFilterResult {
    let table = component_areas(labels, component_count);

    let mut remap = vec![0u32; component_count as usize + 1];
    let mut valid_count = 0u32;
    for label in 1..=component_count {
        if table.area(label) >= min_area {
            valid_count += 1;
            remap[label as usize] = valid_count;
        }
    }

    let cleaned = labels.map(|l| remap.get(l as usize).copied().unwrap_or(0));
    AreaFilterResult {
        labels: cleaned,
        valid_count,
    }
}

/// Validate an untyped minimum area (from configuration or the command line).
pub fn min_area_from(value: i64) -> Result<u32, EngineError> {
    u32::try_from(value).map_err(|_| {
        EngineError::parameter(
            "min_component_area",
            format!("must be a non-negative pixel count, got {value}"),
        )
    })
}
