//! Error types for simulated devices

use thiserror::Error;

/// Errors that can occur while building a simulated device
#[derive(Debug, Error)]
pub enum SimError {
    /// Malformed device description
    #[error("invalid device config: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    /// Two radios share one handle
    #[error("duplicate radio handle: {0}")]
    DuplicateHandle(String),

    /// The default radio names a handle no radio uses
    #[error("default radio {0} is not a configured radio")]
    UnknownDefaultRadio(String),
}
