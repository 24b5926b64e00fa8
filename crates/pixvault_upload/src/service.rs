use crate::error::{Result, UploadError};
use crate::record::{NewImageRecord, StoredImage, Visibility};
use crate::traits::{ImageRepository, ObjectStore};
use chrono::Utc;
use pixvault_core::{extract_dimensions, Dimensions};
use sha2::{Digest, Sha256};

pub const MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

pub const ALLOWED_MIME_TYPES: [&str; 7] = [
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/webp",
    "image/svg+xml",
    "image/bmp",
    "image/tiff",
];

const SVG_MIME_TYPE: &str = "image/svg+xml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReceipt {
    pub image_id: String,
    pub storage_key: String,
    pub public_url: String,
    pub dimensions: Option<Dimensions>,
}

/// Runs one upload end to end: validate, store the blob, enrich the
/// metadata, persist the record.
///
/// Dimension extraction is best effort. A failure there is logged and the
/// upload continues with null dimensions; it never aborts the request.
pub struct UploadService<S, R> {
    store: S,
    repository: R,
    max_file_size: u64,
}

impl<S: ObjectStore, R: ImageRepository> UploadService<S, R> {
    pub fn new(store: S, repository: R) -> Self {
        Self {
            store,
            repository,
            max_file_size: MAX_FILE_SIZE,
        }
    }

    #[must_use]
    pub fn with_max_file_size(mut self, max_file_size: u64) -> Self {
        self.max_file_size = max_file_size;
        self
    }

    pub fn upload(
        &self,
        owner_id: &str,
        filename: &str,
        content_type: &str,
        bytes: &[u8],
    ) -> Result<UploadReceipt> {
        let size = bytes.len() as u64;
        if size > self.max_file_size {
            return Err(UploadError::FileTooLarge {
                size,
                max: self.max_file_size,
            });
        }

        if !ALLOWED_MIME_TYPES.contains(&content_type) {
            return Err(UploadError::UnsupportedMediaType(content_type.to_owned()));
        }

        let sanitized = sanitize_filename(filename);
        let extension = extension_of(&sanitized);
        let storage_key = format!("{owner_id}/{}-{sanitized}", Utc::now().timestamp_millis());

        self.store.put(&storage_key, bytes, content_type)?;

        let checksum = hex::encode(Sha256::digest(bytes));
        let dimensions = self.sniff_dimensions(content_type, &sanitized, bytes);

        let record = NewImageRecord {
            owner_id: owner_id.to_owned(),
            storage_key: storage_key.clone(),
            filename: sanitized,
            extension,
            size_bytes: size,
            width: dimensions.map(|d| d.width),
            height: dimensions.map(|d| d.height),
            mime_type: content_type.to_owned(),
            checksum,
            visibility: Visibility::Public,
        };

        let stored = match self.repository.insert(&record) {
            Ok(stored) => stored,
            Err(err) => {
                // Don't leave an orphan blob behind a failed insert.
                if let Err(cleanup_err) = self.store.delete(&storage_key) {
                    tracing::debug!(%storage_key, error = %cleanup_err, "orphan blob cleanup failed");
                }
                return Err(err);
            }
        };

        Ok(UploadReceipt {
            image_id: stored.id,
            public_url: self.store.public_url(&storage_key),
            storage_key,
            dimensions,
        })
    }

    fn sniff_dimensions(
        &self,
        content_type: &str,
        filename: &str,
        bytes: &[u8],
    ) -> Option<Dimensions> {
        // Vector images have no pixel dimensions; skip them entirely.
        if content_type == SVG_MIME_TYPE {
            return None;
        }

        match extract_dimensions(bytes) {
            Ok(dimensions) => Some(dimensions),
            Err(err) => {
                tracing::warn!(%filename, error = %err, "could not extract image dimensions");
                None
            }
        }
    }
}

/// Maps every character outside `[A-Za-z0-9.-]` to `_`, matching what the
/// blob store accepts in keys.
#[must_use]
pub fn sanitize_filename(filename: &str) -> String {
    filename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

fn extension_of(filename: &str) -> String {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default()
}
