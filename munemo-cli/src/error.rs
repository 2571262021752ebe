//! Top-level error type for the munemo command line tool
//!

/// Errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configuration could not be loaded.
    #[error("could not load configuration: {0}")]
    Config(#[from] config::ConfigError),

    /// A token could not be decoded.
    #[error("{0}")]
    Decode(#[from] munemo::DecodeError),

    /// Writing the results failed.
    #[error("could not write output: {0}")]
    Io(#[from] std::io::Error),
}
