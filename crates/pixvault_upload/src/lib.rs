mod error;
mod record;
mod service;
mod traits;

pub use error::{Result, UploadError};
pub use record::{NewImageRecord, StoredImage, Visibility};
pub use service::{sanitize_filename, UploadReceipt, UploadService, ALLOWED_MIME_TYPES, MAX_FILE_SIZE};
pub use traits::{ImageRepository, ObjectStore};
