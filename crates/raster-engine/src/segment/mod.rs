//! Connected-component labeling and area filtering.

mod area;
mod labeler;

pub use area::{
    component_areas, filter_by_area, min_area_from, AreaFilterResult, ComponentAreaTable,
    DEFAULT_MIN_AREA,
};
pub use labeler::{label_components, LabelMap, Labeling};
