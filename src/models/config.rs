use crate::assets::AssetLoader;
use crate::imaging::geometry;
use raster_engine::{
    min_area_from, threshold_from, DominoOptions, EngineError, StructuringElement,
    StructuringElementKind, ThinningOptions, DEFAULT_DIVIDER_MARGIN, DEFAULT_MIN_AREA,
    DEFAULT_THRESHOLD,
};
use serde::{Deserialize, Serialize};

/// Application configuration loaded from config.yaml
///
/// Numeric fields that the engine needs as unsigned types are kept wide here
/// so that out-of-range values parse and are then rejected by
/// [`validate()`](Self::validate) with a named parameter.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Binarization threshold, 0..=255
    pub threshold: i64,

    /// Offset added to every colour channel by the brightness operation
    pub brightness_delta: i16,

    /// Contrast amount; 259 is rejected when the operation runs
    pub contrast_amount: i16,

    /// Neighborhood for erode/dilate/open/close. Domino counting always
    /// cleans up with the 3x3 square.
    pub structuring_element: StructuringElementKind,

    /// Minimum pixel count for a component to count as a pip
    pub min_component_area: i64,

    /// Rows on each side of the domino divider that are ignored
    pub divider_margin: u32,

    /// Zhang-Suen pass cap (None = run to the fixed point)
    pub max_thinning_passes: Option<usize>,

    pub translate: TranslateConfig,

    pub scale_up: f64,

    pub scale_down: f64,
}

/// Offset for the translate operation
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct TranslateConfig {
    pub dx: i32,
    pub dy: i32,
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self { dx: 50, dy: 30 }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD as i64,
            brightness_delta: 40,
            contrast_amount: 30,
            structuring_element: StructuringElementKind::Square,
            min_component_area: DEFAULT_MIN_AREA as i64,
            divider_margin: DEFAULT_DIVIDER_MARGIN,
            max_thinning_passes: None,
            translate: TranslateConfig::default(),
            scale_up: 1.5,
            scale_down: 0.5,
        }
    }
}

/// Configuration after validation, in the engine's own types
#[derive(Debug, Clone, PartialEq)]
pub struct EngineSettings {
    pub threshold: u8,
    pub brightness_delta: i16,
    pub contrast_amount: i16,
    pub structuring_element: StructuringElement,
    pub domino: DominoOptions,
    pub thinning: ThinningOptions,
    pub translate: TranslateConfig,
    pub scale_up: f64,
    pub scale_down: f64,
}

impl AppConfig {
    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    let config: Self = config;
                    tracing::info!(
                        threshold = config.threshold,
                        structuring_element = ?config.structuring_element,
                        min_component_area = config.min_component_area,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Check every field and convert to engine option types.
    pub fn validate(&self) -> Result<EngineSettings, EngineError> {
        let threshold = threshold_from(self.threshold)?;
        let min_area = min_area_from(self.min_component_area)?;
        geometry::check_scale_factor(self.scale_up)?;
        geometry::check_scale_factor(self.scale_down)?;
        if self.max_thinning_passes == Some(0) {
            return Err(EngineError::InvalidParameter {
                name: "max_thinning_passes",
                reason: "must allow at least one pass".to_string(),
            });
        }

        let structuring_element = self.structuring_element.element();
        let domino = DominoOptions::new()
            .threshold(threshold)
            .structuring_element(StructuringElement::square())
            .min_area(min_area)
            .divider_margin(self.divider_margin);
        let mut thinning = ThinningOptions::new().threshold(threshold);
        if let Some(cap) = self.max_thinning_passes {
            thinning = thinning.max_passes(cap);
        }

        Ok(EngineSettings {
            threshold,
            brightness_delta: self.brightness_delta,
            contrast_amount: self.contrast_amount,
            structuring_element,
            domino,
            thinning,
            translate: self.translate,
            scale_up: self.scale_up,
            scale_down: self.scale_down,
        })
    }
}
