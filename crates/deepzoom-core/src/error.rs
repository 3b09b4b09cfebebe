use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeepZoomError {
    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Invalid fitted box: {width}x{height}")]
    InvalidFittedBox { width: f64, height: f64 },

    #[error("Invalid tile size: {0}")]
    InvalidTileSize(u32),

    #[error("Invalid viewport: {x},{y} {width}x{height}")]
    InvalidViewport { x: f64, y: f64, width: f64, height: f64 },

    #[error("Invalid zoom scale: {0} (must be finite and >= 1)")]
    InvalidZoomScale(f64),

    #[error("Pyramid level {level} out of range (total: {total})")]
    LevelOutOfRange { level: usize, total: usize },

    #[error("Invalid image descriptor: {0}")]
    InvalidDescriptor(String),

    #[error("Invalid planner config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, DeepZoomError>;
