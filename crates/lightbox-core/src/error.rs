use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LightboxError {
    #[error("Cannot open the viewer with an empty image list")]
    EmptyImageList,

    #[error("Image index {index} out of range (total: {total})")]
    IndexOutOfRange { index: usize, total: usize },

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: f32, height: f32 },

    #[error("Invalid colour: {0}")]
    InvalidColor(String),

    #[error("Image size fetch failed for index {index}: {reason}")]
    SizeFetch { index: usize, reason: String },

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, LightboxError>;
