use thiserror::Error;

/// Errors raised while building travel tables.
#[derive(Error, Debug)]
pub enum TravelError {
    /// The histogram holds no samples, so no band can be filled.
    #[error("insufficient data: cannot resample an empty histogram")]
    InsufficientData,
    #[error("malformed histogram at outcome {outcome}: {reason}")]
    MalformedHistogram { outcome: u32, reason: String },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("table assembly cancelled")]
    Cancelled,
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config JSON: {0}")]
    Json(#[from] serde_json::Error),
}
