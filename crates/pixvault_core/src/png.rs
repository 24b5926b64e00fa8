use crate::error::{ExtractError, Result};
use crate::types::{Dimensions, ImageFormat};

pub const PNG_SIGNATURE: [u8; 4] = [0x89, 0x50, 0x4E, 0x47];

/// End of the IHDR width/height fields: 8-byte signature, 4-byte chunk
/// length, 4-byte chunk type, then two big-endian u32 fields.
pub const IHDR_DIMENSIONS_END: usize = 24;

/// Reads width and height from the IHDR chunk. IHDR is required to be the
/// first chunk in any conformant PNG, so both fields sit at fixed offsets:
/// width at 16..20, height at 20..24, big-endian.
pub fn read_dimensions(data: &[u8]) -> Result<Dimensions> {
    if data.len() < IHDR_DIMENSIONS_END {
        return Err(ExtractError::TruncatedHeader {
            format: ImageFormat::Png,
            len: data.len(),
            need: IHDR_DIMENSIONS_END,
        });
    }

    let width = u32::from_be_bytes([data[16], data[17], data[18], data[19]]);
    let height = u32::from_be_bytes([data[20], data[21], data[22], data[23]]);

    Ok(Dimensions { width, height })
}
