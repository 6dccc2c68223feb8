use crate::error::AppError;
use crate::imaging::geometry;
use crate::models::EngineSettings;
use raster_engine::{
    adjust_brightness, adjust_contrast, binarize, closing, convolve3x3, count_pips, dilate, erode,
    opening, roberts_edges, skeletonize, to_grayscale, DominoResult, PixelBuffer, BOX,
};
use std::fmt;
use std::str::FromStr;

/// Every buffer-to-buffer operation the toolkit offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Grayscale,
    Binarize,
    Brightness,
    Contrast,
    Smooth,
    Edges,
    Erode,
    Dilate,
    Open,
    Close,
    Skeleton,
    Translate,
    Rotate,
    ScaleUp,
    ScaleDown,
    MirrorH,
    MirrorV,
}

impl Operation {
    pub const ALL: [Operation; 17] = [
        Operation::Grayscale,
        Operation::Binarize,
        Operation::Brightness,
        Operation::Contrast,
        Operation::Smooth,
        Operation::Edges,
        Operation::Erode,
        Operation::Dilate,
        Operation::Open,
        Operation::Close,
        Operation::Skeleton,
        Operation::Translate,
        Operation::Rotate,
        Operation::ScaleUp,
        Operation::ScaleDown,
        Operation::MirrorH,
        Operation::MirrorV,
    ];

    /// Command-line name
    pub fn name(self) -> &'static str {
        match self {
            Operation::Grayscale => "grayscale",
            Operation::Binarize => "binarize",
            Operation::Brightness => "brightness",
            Operation::Contrast => "contrast",
            Operation::Smooth => "smooth",
            Operation::Edges => "edges",
            Operation::Erode => "erode",
            Operation::Dilate => "dilate",
            Operation::Open => "open",
            Operation::Close => "close",
            Operation::Skeleton => "skeleton",
            Operation::Translate => "translate",
            Operation::Rotate => "rotate",
            Operation::ScaleUp => "scale-up",
            Operation::ScaleDown => "scale-down",
            Operation::MirrorH => "mirror-h",
            Operation::MirrorV => "mirror-v",
        }
    }

    /// One-line description for `rasterlab ops`
    pub fn summary(self) -> &'static str {
        match self {
            Operation::Grayscale => "BT.601 luma into R, G and B",
            Operation::Binarize => "grayscale, then black below the threshold and white above",
            Operation::Brightness => "add brightness_delta to every colour channel",
            Operation::Contrast => "stretch channels around mid-gray by contrast_amount",
            Operation::Smooth => "3x3 box blur",
            Operation::Edges => "grayscale, then Roberts cross gradient magnitude",
            Operation::Erode => "binarize, then neighborhood minimum",
            Operation::Dilate => "binarize, then neighborhood maximum",
            Operation::Open => "binarize, then erosion followed by dilation",
            Operation::Close => "binarize, then dilation followed by erosion",
            Operation::Skeleton => "Zhang-Suen thinning to a one-pixel skeleton",
            Operation::Translate => "shift by translate.dx, translate.dy",
            Operation::Rotate => "rotate 90 degrees clockwise",
            Operation::ScaleUp => "nearest-neighbour resize by scale_up",
            Operation::ScaleDown => "nearest-neighbour resize by scale_down",
            Operation::MirrorH => "flip left to right",
            Operation::MirrorV => "flip top to bottom",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == wanted)
            .ok_or_else(|| AppError::UnknownOperation(s.to_string()))
    }
}

/// Runs operations against validated engine settings
#[derive(Debug, Clone)]
pub struct OperationRunner {
    settings: EngineSettings,
}

impl OperationRunner {
    pub fn new(settings: EngineSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Apply one operation, returning a new buffer. The input is not modified.
    ///
    /// A capped skeleton run that does not converge comes back as
    /// `AppError::Engine(EngineError::ConvergenceExceeded { .. })` with the
    /// partial skeleton attached.
    pub fn apply(&self, op: Operation, input: &PixelBuffer) -> Result<PixelBuffer, AppError> {
        let s = &self.settings;
        tracing::debug!(op = %op, width = input.width(), height = input.height(), "Applying operation");

        let output = match op {
            Operation::Grayscale => {
                let mut buf = input.clone();
                to_grayscale(&mut buf);
                buf
            }
            Operation::Binarize => self.binarized(input),
            Operation::Brightness => {
                let mut buf = input.clone();
                adjust_brightness(&mut buf, s.brightness_delta);
                buf
            }
            Operation::Contrast => {
                let mut buf = input.clone();
                adjust_contrast(&mut buf, s.contrast_amount)?;
                buf
            }
            Operation::Smooth => convolve3x3(input, &BOX)?,
            Operation::Edges => {
                let mut buf = input.clone();
                to_grayscale(&mut buf);
                roberts_edges(&buf)?
            }
            Operation::Erode => erode(&self.binarized(input), &s.structuring_element)?,
            Operation::Dilate => dilate(&self.binarized(input), &s.structuring_element)?,
            Operation::Open => opening(&self.binarized(input), &s.structuring_element)?,
            Operation::Close => closing(&self.binarized(input), &s.structuring_element)?,
            Operation::Skeleton => skeletonize(input, &s.thinning)?.buffer,
            Operation::Translate => geometry::translate(input, s.translate.dx, s.translate.dy),
            Operation::Rotate => geometry::rotate90(input),
            Operation::ScaleUp => geometry::scale(input, s.scale_up)?,
            Operation::ScaleDown => geometry::scale(input, s.scale_down)?,
            Operation::MirrorH => geometry::mirror_horizontal(input),
            Operation::MirrorV => geometry::mirror_vertical(input),
        };

        Ok(output)
    }

    /// Count domino pips with the configured options.
    pub fn count_pips(&self, input: &PixelBuffer) -> Result<DominoResult, AppError> {
        let result = count_pips(input, &self.settings.domino)?;
        tracing::info!(
            top = result.top_pips,
            bottom = result.bottom_pips,
            "Counted domino pips"
        );
        Ok(result)
    }

    fn binarized(&self, input: &PixelBuffer) -> PixelBuffer {
        let mut buf = input.clone();
        to_grayscale(&mut buf);
        binarize(&mut buf, self.settings.threshold);
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AppConfig;
    use raster_engine::{EngineError, WHITE};

    fn runner(config: AppConfig) -> OperationRunner {
        OperationRunner::new(config.validate().unwrap())
    }

    #[test]
    fn test_names_round_trip() {
        for op in Operation::ALL {
            assert_eq!(op.name().parse::<Operation>().unwrap(), op);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Scale-Up".parse::<Operation>().unwrap(), Operation::ScaleUp);
        assert_eq!(" mirror-v ".parse::<Operation>().unwrap(), Operation::MirrorV);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "sharpen".parse::<Operation>().unwrap_err();
        assert!(matches!(err, AppError::UnknownOperation(ref name) if name == "sharpen"));
    }

    #[test]
    fn test_binarize_uses_threshold() {
        let buf = PixelBuffer::from_gray(3, 1, &[40, 100, 200]).unwrap();
        let low = runner(AppConfig {
            threshold: 50,
            ..Default::default()
        });
        let out = low.apply(Operation::Binarize, &buf).unwrap();
        let reds: Vec<u8> = out.pixels().map(|px| px[0]).collect();
        assert_eq!(reds, vec![0, 255, 255]);

        let high = runner(AppConfig {
            threshold: 150,
            ..Default::default()
        });
        let out = high.apply(Operation::Binarize, &buf).unwrap();
        let reds: Vec<u8> = out.pixels().map(|px| px[0]).collect();
        assert_eq!(reds, vec![0, 0, 255]);
    }

    #[test]
    fn test_contrast_pole_surfaces_engine_error() {
        let r = runner(AppConfig {
            contrast_amount: 259,
            ..Default::default()
        });
        let buf = PixelBuffer::filled(2, 2, WHITE);
        let err = r.apply(Operation::Contrast, &buf).unwrap_err();
        assert!(matches!(
            err,
            AppError::Engine(EngineError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_rotate_swaps_dimensions() {
        let r = runner(AppConfig::default());
        let buf = PixelBuffer::filled(5, 3, WHITE);
        let out = r.apply(Operation::Rotate, &buf).unwrap();
        assert_eq!((out.width(), out.height()), (3, 5));
    }

    #[test]
    fn test_every_operation_runs_on_small_image() {
        let r = runner(AppConfig::default());
        let mut buf = PixelBuffer::filled(8, 8, WHITE);
        buf.set_pixel(3, 3, [0, 0, 0, 255]);
        for op in Operation::ALL {
            let out = r.apply(op, &buf);
            assert!(out.is_ok(), "{op} failed: {:?}", out.err());
        }
    }

    #[test]
    fn test_neighborhood_ops_reject_tiny_image() {
        let r = runner(AppConfig::default());
        let buf = PixelBuffer::filled(1, 1, WHITE);
        let err = r.apply(Operation::Smooth, &buf).unwrap_err();
        assert!(matches!(
            err,
            AppError::Engine(EngineError::InvalidDimensions { .. })
        ));
        // pure pixel moves do not need a neighborhood
        assert!(r.apply(Operation::MirrorH, &buf).is_ok());
    }

    #[test]
    fn test_count_pips_blank() {
        let r = runner(AppConfig::default());
        let result = r.count_pips(&PixelBuffer::filled(20, 20, WHITE)).unwrap();
        assert_eq!(result, DominoResult { top_pips: 0, bottom_pips: 0 });
    }
}
