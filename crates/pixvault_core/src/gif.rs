use crate::error::{ExtractError, Result};
use crate::types::{Dimensions, ImageFormat};

pub const GIF_SIGNATURE: [u8; 3] = *b"GIF";

/// End of the Logical Screen Descriptor width/height fields: 6-byte
/// signature/version block, then two little-endian u16 fields.
pub const SCREEN_DESCRIPTOR_END: usize = 10;

/// Reads canvas width and height from the Logical Screen Descriptor that
/// immediately follows the signature: width at 6..8, height at 8..10,
/// little-endian.
pub fn read_dimensions(data: &[u8]) -> Result<Dimensions> {
    if data.len() < SCREEN_DESCRIPTOR_END {
        return Err(ExtractError::TruncatedHeader {
            format: ImageFormat::Gif,
            len: data.len(),
            need: SCREEN_DESCRIPTOR_END,
        });
    }

    let width = u16::from_le_bytes([data[6], data[7]]);
    let height = u16::from_le_bytes([data[8], data[9]]);

    Ok(Dimensions {
        width: width as u32,
        height: height as u32,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gif_header(width: u16, height: u16) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(b"GIF89a");
        data.extend_from_slice(&width.to_le_bytes());
        data.extend_from_slice(&height.to_le_bytes());
        data.push(0x91);
        data
    }

    #[test]
    fn test_read_dimensions() {
        let data = gif_header(320, 200);
        assert_eq!(
            read_dimensions(&data),
            Ok(Dimensions {
                width: 320,
                height: 200
            })
        );
    }

    #[test]
    fn test_one_by_one() {
        let data = gif_header(1, 1);
        assert_eq!(&data[6..10], &[0x01, 0x00, 0x01, 0x00]);
        assert_eq!(
            read_dimensions(&data),
            Ok(Dimensions {
                width: 1,
                height: 1
            })
        );
    }

    #[test]
    fn test_byte_order_is_little_endian() {
        let data = gif_header(0x0102, 0x0304);
        let dims = read_dimensions(&data).unwrap();
        assert_eq!(dims.width, 0x0102);
        assert_eq!(dims.height, 0x0304);
    }

    #[test]
    fn test_truncated_header() {
        let data = gif_header(64, 64);
        for len in 0..SCREEN_DESCRIPTOR_END {
            assert!(matches!(
                read_dimensions(&data[..len]),
                Err(ExtractError::TruncatedHeader {
                    format: ImageFormat::Gif,
                    ..
                })
            ));
        }
    }
}
