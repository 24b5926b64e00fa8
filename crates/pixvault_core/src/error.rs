use crate::types::ImageFormat;
use thiserror::Error;

/// Exactly one variant applies per failing call; callers treat all of them
/// as "no dimensions available" and continue.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ExtractError {
    #[error("unrecognized container signature")]
    UnsupportedFormat,

    #[error("{format} header truncated: have {len} bytes, need {need}")]
    TruncatedHeader {
        format: ImageFormat,
        len: usize,
        need: usize,
    },

    #[error("malformed JPEG marker chain at offset {offset}")]
    MalformedMarkerChain { offset: usize },

    #[error("no SOF marker found in JPEG stream")]
    DimensionsNotFound,
}

pub type Result<T> = std::result::Result<T, ExtractError>;
