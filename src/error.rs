use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the weather-dash library.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The input file is missing or unparsable. Fatal at startup: the
    /// binaries abort with this diagnostic instead of showing a partial UI.
    #[error("failed to load dataset from {path}: {source}")]
    DatasetLoad {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Smoothing was requested on fewer rows than the filter window.
    #[error("smoothing needs at least {need} rows, got {have}")]
    InsufficientData { have: usize, need: usize },

    /// The smoothing window must be odd and larger than the polynomial order.
    #[error("invalid smoothing window: window {window} must be odd and > order {order}")]
    InvalidWindow { window: usize, order: usize },
}
