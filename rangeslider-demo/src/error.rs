//! Demo error types.

use rangeslider::RangeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid slider range: {0}")]
    Range(#[from] RangeError),

    #[error("failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("unknown log level '{0}' (expected off, error, warn, info, debug or trace)")]
    InvalidLogLevel(String),
}
