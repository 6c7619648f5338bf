use thiserror::Error;

/// Top-level error type used across the entire application.
#[derive(Debug, Error)]
pub enum PulseError {
    /// An OS counter (CPU, memory, network) could not be read.
    #[error("counter read failed: {0}")]
    CounterRead(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = PulseError> = std::result::Result<T, E>;
