//! Ports for the external collaborators of the upload pipeline.
//!
//! The pipeline never talks to a concrete blob store or database; adapters
//! implement these traits and are injected into `UploadService`, keeping the
//! pipeline testable with in-memory fakes.

use crate::error::Result;
use crate::record::{NewImageRecord, StoredImage};

/// A key-value blob store, typically backed by an object-storage bucket.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; uploads from concurrent requests
/// share one adapter.
pub trait ObjectStore: Send + Sync {
    /// Stores `bytes` under `key`. Keys are never overwritten; storing to an
    /// existing key is an error.
    fn put(&self, key: &str, bytes: &[u8], content_type: &str) -> Result<()>;

    /// Deletes the blob at `key`. Used to clean up after a failed metadata
    /// insert.
    fn delete(&self, key: &str) -> Result<()>;

    /// Returns the publicly reachable URL for `key`.
    fn public_url(&self, key: &str) -> String;
}

/// Metadata persistence for uploaded images.
pub trait ImageRepository: Send + Sync {
    /// Inserts a new image record and returns the stored row's identity.
    fn insert(&self, record: &NewImageRecord) -> Result<StoredImage>;
}
