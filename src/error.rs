// src/error.rs
use thiserror::Error;

/// Everything that can stop the pipeline.
///
/// Structural problems with the page (`NoTrackListFound`, `MissingTitleElement`)
/// are fatal for the whole run. Duration problems name the track, since one bad
/// value shifts every label after it.
#[derive(Debug, Error)]
pub enum RipError {
    #[error("no track list table found in the page")]
    NoTrackListFound,

    #[error("page has no <title> element; cannot read album and artist")]
    MissingTitleElement,

    #[error("track {position}: malformed duration {value:?} (expected minutes:seconds)")]
    MalformedDuration { position: String, value: String },

    #[error("track {position}: no duration (page lists times for some tracks only)")]
    MissingDuration { position: String },

    #[error("invalid {field}: {value:?}")]
    InvalidInput { field: &'static str, value: String },

    #[error("config: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl RipError {
    pub fn invalid(field: &'static str, value: impl Into<String>) -> Self {
        RipError::InvalidInput { field, value: value.into() }
    }
}

pub type Result<T> = std::result::Result<T, RipError>;
