//! Error types for filter key parsing and payload inspection

use thiserror::Error;

/// Filter error types
#[derive(Error, Debug)]
pub enum FilterError {
    /// Text is not a `{order}OA{Profile}{Ear}` key
    #[error("Malformed binaural filter key: {0:?}")]
    MalformedKey(String),

    /// Payload header could not be read
    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
