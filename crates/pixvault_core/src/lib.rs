mod error;
pub mod gif;
pub mod jpeg;
pub mod png;
mod types;

pub use error::{ExtractError, Result};
pub use types::{Dimensions, ImageFormat};

/// Sniffs the container format from the leading magic bytes and reads the
/// pixel dimensions out of it.
///
/// Pure and reentrant: no I/O, no shared state, and no reads past the end
/// of `data` for any input length. Callers treat every error as "no
/// dimensions available" and carry on.
pub fn extract_dimensions(data: &[u8]) -> Result<Dimensions> {
    match ImageFormat::sniff(data) {
        Some(ImageFormat::Jpeg) => jpeg::scan_dimensions(data),
        Some(ImageFormat::Png) => png::read_dimensions(data),
        Some(ImageFormat::Gif) => gif::read_dimensions(data),
        None => Err(ExtractError::UnsupportedFormat),
    }
}
