//! Error types for the aqmaps command line

use aqmaps_render::RenderError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },

    #[error("no document at {0}")]
    NotFound(String),

    #[error("invalid date {day:02}-{month:02}-{year}")]
    InvalidDate { day: u8, month: u8, year: u16 },

    #[error("`{0}` is not a three-word location")]
    InvalidLocation(String),

    #[error("output error: {0}")]
    Render(#[from] RenderError),
}

impl From<toml::de::Error> for AppError {
    fn from(e: toml::de::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
