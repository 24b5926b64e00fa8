use crate::error::{ExtractError, Result};
use crate::types::{Dimensions, ImageFormat};

pub const SOI: [u8; 2] = [0xFF, 0xD8];
pub const SOF0: u8 = 0xC0;
pub const SOF2: u8 = 0xC2;

/// SOF0 (baseline) and SOF2 (progressive) are the frame headers that carry
/// pixel dimensions.
#[inline]
pub const fn is_sof_marker(marker: u8) -> bool {
    matches!(marker, SOF0 | SOF2)
}

/// Walks the marker chain looking for an SOF0/SOF2 segment.
///
/// JPEG has no fixed-offset dimension field, so the scan starts right after
/// the SOI marker and hops segment to segment using each segment's declared
/// length. Inside an SOF segment the layout is: 2-byte length, 1-byte sample
/// precision, big-endian height, big-endian width.
///
/// The cursor must strictly advance every iteration; a segment length that
/// fails to move it forward means the chain is not trustworthy and the scan
/// stops rather than looping.
pub fn scan_dimensions(data: &[u8]) -> Result<Dimensions> {
    let mut pos: usize = 2;

    while pos + 1 < data.len() {
        if data[pos] != 0xFF {
            return Err(ExtractError::MalformedMarkerChain { offset: pos });
        }

        let marker = data[pos + 1];

        if is_sof_marker(marker) {
            if pos + 9 > data.len() {
                return Err(ExtractError::TruncatedHeader {
                    format: ImageFormat::Jpeg,
                    len: data.len(),
                    need: pos + 9,
                });
            }
            let height = u16::from_be_bytes([data[pos + 5], data[pos + 6]]);
            let width = u16::from_be_bytes([data[pos + 7], data[pos + 8]]);
            return Ok(Dimensions {
                width: width as u32,
                height: height as u32,
            });
        }

        if pos + 4 > data.len() {
            break;
        }

        let length = u16::from_be_bytes([data[pos + 2], data[pos + 3]]) as usize;
        let next = pos + length + 2;
        if next <= pos {
            return Err(ExtractError::MalformedMarkerChain { offset: pos });
        }
        pos = next;
    }

    Err(ExtractError::DimensionsNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(marker: u8, payload: &[u8]) -> Vec<u8> {
        let mut seg = vec![0xFF, marker];
        seg.extend_from_slice(&((payload.len() as u16 + 2).to_be_bytes()));
        seg.extend_from_slice(payload);
        seg
    }

    fn sof_payload(width: u16, height: u16) -> Vec<u8> {
        let mut payload = vec![0x08];
        payload.extend_from_slice(&height.to_be_bytes());
        payload.extend_from_slice(&width.to_be_bytes());
        payload.extend_from_slice(&[0x03, 0x01, 0x22, 0x00, 0x02, 0x11, 0x01, 0x03, 0x11, 0x01]);
        payload
    }

    fn jpeg_with_sof(sof_marker: u8, width: u16, height: u16) -> Vec<u8> {
        let mut data = SOI.to_vec();
        data.extend_from_slice(&segment(0xE0, b"JFIF\x00\x01\x01\x00\x00\x01\x00\x01\x00\x00"));
        data.extend_from_slice(&segment(0xDB, &[0x00; 65]));
        data.extend_from_slice(&segment(sof_marker, &sof_payload(width, height)));
        data.extend_from_slice(&segment(0xDA, &[0x01, 0x01, 0x00, 0x00, 0x3F, 0x00]));
        data
    }

    #[test]
    fn test_scan_baseline_sof0() {
        let data = jpeg_with_sof(SOF0, 200, 100);
        assert_eq!(
            scan_dimensions(&data),
            Ok(Dimensions {
                width: 200,
                height: 100
            })
        );
    }

    #[test]
    fn test_scan_progressive_sof2() {
        let data = jpeg_with_sof(SOF2, 1920, 1080);
        assert_eq!(
            scan_dimensions(&data),
            Ok(Dimensions {
                width: 1920,
                height: 1080
            })
        );
    }

    #[test]
    fn test_sof_segment_byte_layout() {
        // FF C0 00 11 08 00 64 00 C8: height 0x0064 = 100, width 0x00C8 = 200
        let mut data = SOI.to_vec();
        data.extend_from_slice(&[0xFF, 0xC0, 0x00, 0x11, 0x08, 0x00, 0x64, 0x00, 0xC8]);
        data.extend_from_slice(&[0x03, 0x01, 0x22, 0x00, 0x02, 0x11, 0x01, 0x03, 0x11, 0x01]);
        assert_eq!(
            scan_dimensions(&data),
            Ok(Dimensions {
                width: 200,
                height: 100
            })
        );
    }

    #[test]
    fn test_no_sof_marker() {
        let mut data = SOI.to_vec();
        data.extend_from_slice(&segment(0xE0, &[0x00; 14]));
        data.extend_from_slice(&segment(0xFE, b"comment"));
        assert_eq!(scan_dimensions(&data), Err(ExtractError::DimensionsNotFound));
    }

    #[test]
    fn test_non_marker_byte_stops_scan() {
        let mut data = SOI.to_vec();
        data.extend_from_slice(&[0x00, 0x01, 0x02, 0x03]);
        assert_eq!(
            scan_dimensions(&data),
            Err(ExtractError::MalformedMarkerChain { offset: 2 })
        );
    }

    #[test]
    fn test_truncated_sof_payload() {
        let data = jpeg_with_sof(SOF0, 200, 100);
        // Cut mid-way through the SOF dimension bytes.
        let sof_at = data
            .windows(2)
            .position(|w| w == [0xFF, SOF0])
            .unwrap();
        let truncated = &data[..sof_at + 6];
        assert!(matches!(
            scan_dimensions(truncated),
            Err(ExtractError::TruncatedHeader {
                format: ImageFormat::Jpeg,
                ..
            })
        ));
    }

    #[test]
    fn test_bare_soi() {
        assert_eq!(scan_dimensions(&SOI), Err(ExtractError::DimensionsNotFound));
        assert_eq!(
            scan_dimensions(&[0xFF, 0xD8, 0xFF]),
            Err(ExtractError::DimensionsNotFound)
        );
    }

    #[test]
    fn test_segment_length_running_off_buffer() {
        let mut data = SOI.to_vec();
        data.extend_from_slice(&[0xFF, 0xE0, 0xFF, 0xFF, 0x00]);
        assert_eq!(scan_dimensions(&data), Err(ExtractError::DimensionsNotFound));
    }

    #[test]
    fn test_is_sof_marker() {
        assert!(is_sof_marker(0xC0));
        assert!(is_sof_marker(0xC2));
        assert!(!is_sof_marker(0xC4));
        assert!(!is_sof_marker(0xDA));
    }
}
