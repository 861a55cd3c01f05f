use pixel_engine::{EngineError, ParseColorError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("Invalid color: {0}")]
    Color(#[from] ParseColorError),

    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("Unknown kernel preset: {0}")]
    UnknownPreset(String),

    #[error("No image loaded")]
    NoImage,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
