//! Error types for the audio element model

use std::fmt;

use thiserror::Error;

use crate::channel::ChannelKind;
use crate::element_type::AudioElementType;

/// Which textual flag a token was parsed for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `--input-type` tokens (`1OA`, `7.1.4`, `OBA`, ...)
    InputType,
    /// `--filter-type` tokens (`Direct`, `Ambient`, `Reverberant`)
    FilterType,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::InputType => f.write_str("input type"),
            TokenKind::FilterType => f.write_str("filter type"),
        }
    }
}

/// Audio element error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ObrError {
    /// Configuration built from the `Invalid` sentinel type
    #[error("Invalid audio element type")]
    InvalidType,

    /// Channel accessor used for the other channel variant
    #[error("Wrong channel variant: {requested} channels requested on a {actual} element")]
    WrongChannelVariant {
        requested: ChannelKind,
        actual: AudioElementType,
    },

    /// Token does not name any element type or filter profile
    #[error("Unsupported {kind}: {token:?}")]
    UnrecognizedToken { kind: TokenKind, token: String },

    /// Empty token
    #[error("No {kind} specified")]
    MissingToken { kind: TokenKind },

    /// Invalid Ambisonic order
    #[error("Invalid Ambisonic order: {0} (supported: 1-4)")]
    InvalidAmbisonicOrder(usize),

    /// Channel list length does not match the element type
    #[error("Invalid channel count: expected {expected}, got {got}")]
    InvalidChannelCount { expected: usize, got: usize },
}

/// Result type for audio element operations
pub type ObrResult<T> = Result<T, ObrError>;
