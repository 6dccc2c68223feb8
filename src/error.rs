use raster_engine::EngineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("PNG codec error: {0}")]
    Codec(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Unknown operation: {0} (run `rasterlab ops` for the list)")]
    UnknownOperation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<png::DecodingError> for AppError {
    fn from(e: png::DecodingError) -> Self {
        AppError::Codec(e.to_string())
    }
}

impl From<png::EncodingError> for AppError {
    fn from(e: png::EncodingError) -> Self {
        AppError::Codec(e.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(e: serde_yaml::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_codec() {
        let error = AppError::Codec("bad signature".to_string());
        assert_eq!(error.to_string(), "PNG codec error: bad signature");
    }

    #[test]
    fn test_app_error_config() {
        let error = AppError::Config("threshold: invalid type".to_string());
        assert_eq!(error.to_string(), "Config error: threshold: invalid type");
    }

    #[test]
    fn test_app_error_unknown_operation() {
        let error = AppError::UnknownOperation("sharpen".to_string());
        assert_eq!(
            error.to_string(),
            "Unknown operation: sharpen (run `rasterlab ops` for the list)"
        );
    }

    #[test]
    fn test_app_error_from_engine_error() {
        let engine = EngineError::InvalidParameter {
            name: "threshold",
            reason: "must be within 0..=255, got 300".to_string(),
        };
        let app: AppError = engine.into();
        match app {
            AppError::Engine(_) => {}
            _ => panic!("Expected Engine variant"),
        }
    }

    #[test]
    fn test_app_error_engine_message_is_wrapped() {
        let app: AppError = EngineError::InvalidParameter {
            name: "contrast_amount",
            reason: "259 makes the contrast factor divide by zero".to_string(),
        }
        .into();
        assert_eq!(
            app.to_string(),
            "Engine error: invalid parameter `contrast_amount`: 259 makes the contrast factor divide by zero"
        );
    }

    #[test]
    fn test_app_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.png");
        let app: AppError = io.into();
        assert_eq!(app.to_string(), "IO error: missing.png");
    }
}
