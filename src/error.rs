use std::path::PathBuf;

use thiserror::Error;

/// Failure of a single translation request.
///
/// Never leaves the pipeline: the adapter turns it into a fallback.
#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("translation request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("translation quota exceeded (HTTP {0})")]
    Quota(u16),

    #[error("translation service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed translation response: {0}")]
    Malformed(String),
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("configuration error in '{field}': {message}")]
    Invalid { field: &'static str, message: String },
}

/// Fatal errors; any of these ends the run with a non-zero exit code.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("translator unavailable: {0}")]
    TranslatorUnavailable(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to write {path}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize report: {0}")]
    Report(#[from] serde_json::Error),
}
