//! Error types for the analyzer.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type. Loader failures are fatal; everything else in the
/// pipeline is downgraded to a warning at the call site.
#[derive(Debug, Error)]
pub enum DensityError {
    /// File missing, unreadable, or undecodable under all attempted encodings.
    #[error("could not read file: {}", .0.display())]
    Read(PathBuf),

    /// Non-success HTTP status, timeout, or transport failure during fetch.
    #[cfg(feature = "web")]
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// URL mode invoked in a build without the `web` feature.
    #[error("URL mode requires the `web` feature. Rebuild with: cargo build --features web")]
    DependencyMissing,

    /// Malformed --url value.
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    /// I/O error wrapper.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for analyzer operations.
pub type Result<T> = std::result::Result<T, DensityError>;
