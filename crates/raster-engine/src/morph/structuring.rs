//! Structuring elements for morphological operators.

use crate::api::EngineError;
use serde::{Deserialize, Serialize};

/// Named structuring-element presets, selectable from configuration.
///
/// The default is [`Square`](StructuringElementKind::Square); the domino
/// pipeline always uses it for its noise-cleanup opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StructuringElementKind {
    /// 3x3 square including the center (8-neighborhood).
    #[default]
    Square,
    /// Plus-shaped cross including the center (4-neighborhood).
    Cross,
}

impl StructuringElementKind {
    pub fn element(self) -> StructuringElement {
        match self {
            StructuringElementKind::Square => StructuringElement::square(),
            StructuringElementKind::Cross => StructuringElement::cross(),
        }
    }
}

/// A set of `(dy, dx)` offsets sampled around each pixel.
///
/// Operators only rewrite pixels whose whole element lies inside the image,
/// i.e. pixels at least [`radius()`](Self::radius) away from every edge. For
/// both presets the radius is 1, which leaves exactly the one-pixel border
/// ring untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuringElement {
    offsets: Vec<(i32, i32)>,
    radius: u32,
}

impl StructuringElement {
    /// The 3x3 square with center: every offset in `{-1,0,1} x {-1,0,1}`.
    pub fn square() -> Self {
        let mut offsets = Vec::with_capacity(9);
        for dy in -1..=1 {
            for dx in -1..=1 {
                offsets.push((dy, dx));
            }
        }
        Self { offsets, radius: 1 }
    }

    /// The cross with center: `(0,0)` plus the four edge-adjacent offsets.
    pub fn cross() -> Self {
        Self {
            offsets: vec![(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)],
            radius: 1,
        }
    }

    /// Build an element from arbitrary `(dy, dx)` offsets.
    ///
    /// Duplicate offsets are dropped. The element must not be empty.
    pub fn from_offsets(offsets: &[(i32, i32)]) -> Result<Self, EngineError> {
        if offsets.is_empty() {
            return Err(EngineError::parameter(
                "structuring_element",
                "at least one offset is required",
            ));
        }
        let mut unique: Vec<(i32, i32)> = Vec::with_capacity(offsets.len());
        for &o in offsets {
            if !unique.contains(&o) {
                unique.push(o);
            }
        }
        let radius = unique
            .iter()
            .map(|&(dy, dx)| dy.unsigned_abs().max(dx.unsigned_abs()))
            .max()
            .unwrap_or(0);
        Ok(Self {
            offsets: unique,
            radius,
        })
    }

    /// Offsets as `(dy, dx)` pairs.
    #[inline]
    pub fn offsets(&self) -> &[(i32, i32)] {
        &self.offsets
    }

    /// Largest absolute offset along either axis.
    #[inline]
    pub fn radius(&self) -> u32 {
        self.radius
    }
}

impl Default for StructuringElement {
    fn default() -> Self {
        StructuringElementKind::default().element()
    }
}
