use thiserror::Error;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("file size {size} exceeds the {max} byte limit")]
    FileTooLarge { size: u64, max: u64 },

    #[error("unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("object storage error: {0}")]
    Storage(String),

    #[error("metadata persistence error: {0}")]
    Persistence(String),
}

pub type Result<T> = std::result::Result<T, UploadError>;
