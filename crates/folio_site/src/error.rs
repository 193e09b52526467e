//! Error types for the site crate

use folio_animation::AnimationError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SiteError>;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("invalid page config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid scenario: {0}")]
    Scenario(#[source] serde_json::Error),

    #[error("invalid scenario start {value:?}: {source}")]
    InvalidStart {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("failed to serialize report: {0}")]
    Report(#[source] serde_json::Error),

    #[error("report path {path:?} must be relative and stay inside the working directory")]
    ReportPath { path: PathBuf },

    #[error("marquee: {0}")]
    Animation(#[from] AnimationError),

    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SiteError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SiteError::Io {
            path: path.into(),
            source,
        }
    }
}
