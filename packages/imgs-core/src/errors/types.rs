use std::path::PathBuf;

use thiserror::Error;

use crate::runner::RunReport;
use crate::variant::ImageVariant;

/// Unified error type for the crate
#[derive(Debug, Error)]
pub enum ImgsError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("producer error: {0}")]
    Producer(#[from] ProducerError),

    #[error("render error: {0}")]
    Render(#[from] RenderError),

    #[error("output error: {0}")]
    Output(#[from] OutputError),

    #[error("embed error: {0}")]
    Embed(#[from] EmbedError),
}

/// Failure while obtaining the bytes of a variant
#[derive(Debug, Error)]
pub enum ProducerError {
    #[error("object not found: {key}")]
    NotFound { key: String },

    #[error("access denied")]
    Forbidden,

    #[error("object too large: {size} bytes (max {max})")]
    TooLarge { size: u64, max: u64 },

    #[error("no data for variant {variant}")]
    Missing { variant: ImageVariant },

    #[error("decode failed: {0}")]
    Decode(String),

    #[error("storage error: {0}")]
    Internal(String),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Icon rasterisation and encoding errors
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    #[error("image resolution exceeds maximum ({width}x{height})")]
    ResolutionTooLarge { width: u32, height: u32 },

    #[error("processing failed: {0}")]
    ProcessingFailed(String),
}

/// Output file errors
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Source generation errors
#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid asset name: {0}")]
    InvalidName(String),

    #[error("duplicate asset name: {0}")]
    DuplicateName(String),
}

/// Outcome of a failed run
#[derive(Debug, Error)]
pub enum RunError {
    #[error("{variant}: {source}")]
    Variant {
        variant: ImageVariant,
        #[source]
        source: ImgsError,
    },

    /// Keep-going run with at least one failure; the report lists both
    /// the written files and the failures
    #[error("{} of 6 variants failed: {}", .report.failed.len(), summarize(.report.failed.as_slice()))]
    Partial { report: RunReport },
}

fn summarize(failed: &[(ImageVariant, ImgsError)]) -> String {
    failed
        .iter()
        .map(|(variant, err)| format!("{variant}: {err}"))
        .collect::<Vec<_>>()
        .join("; ")
}
