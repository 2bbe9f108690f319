/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Payload checksum calculation.
//!
//! The trailing field 63 carries a CRC-16/CCITT-FALSE over every preceding
//! character of the payload, including the checksum field's own id and
//! length marker, formatted as 4 uppercase hexadecimal digits.

/// CRC polynomial (CCITT).
const POLYNOMIAL: u16 = 0x1021;

/// Initial register value.
const INITIAL: u16 = 0xFFFF;

/// Calculates the payload checksum for the given data.
///
/// CRC-16/CCITT-FALSE: polynomial 0x1021, initial value 0xFFFF, no input or
/// output reflection, MSB-first bit processing. Total for any finite input;
/// the CRC of zero bytes is 0xFFFF.
///
/// # Arguments
/// * `data` - The payload bytes to checksum (excluding the 4 trailing hex chars)
///
/// # Example
/// ```
/// use vietqr_tagvalue::calculate_checksum;
///
/// assert_eq!(calculate_checksum(b""), 0xFFFF);
/// ```
#[inline]
#[must_use]
pub fn calculate_checksum(data: &[u8]) -> u16 {
    let mut crc = INITIAL;
    for &byte in data {
        crc ^= (byte as u16) << 8;
        for _ in 0..8 {
            if crc & 0x8000 != 0 {
                crc = (crc << 1) ^ POLYNOMIAL;
            } else {
                crc <<= 1;
            }
        }
    }
    crc
}

/// Formats a checksum value as 4 uppercase hexadecimal digits.
///
/// # Arguments
/// * `checksum` - The checksum value
///
/// # Returns
/// A 4-character ASCII representation (e.g. "FFFF", "0A3C").
#[inline]
#[must_use]
pub fn format_checksum(checksum: u16) -> [u8; 4] {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    [
        HEX[(checksum >> 12) as usize & 0xF],
        HEX[(checksum >> 8) as usize & 0xF],
        HEX[(checksum >> 4) as usize & 0xF],
        HEX[checksum as usize & 0xF],
    ]
}

/// Parses a 4-digit uppercase hexadecimal checksum string.
///
/// Lowercase hex is rejected: the comparison against a payload's declared
/// checksum is case-sensitive, matching the encoder's rendering.
///
/// # Arguments
/// * `s` - The 4-character checksum string
///
/// # Returns
/// `Some(checksum)` if valid, `None` otherwise.
#[inline]
#[must_use]
pub fn parse_checksum(s: &str) -> Option<u16> {
    let bytes = s.as_bytes();
    if bytes.len() != 4 {
        return None;
    }

    let mut value: u16 = 0;
    for &b in bytes {
        let digit = match b {
            b'0'..=b'9' => b - b'0',
            b'A'..=b'F' => b - b'A' + 10,
            _ => return None,
        };
        value = (value << 4) | digit as u16;
    }

    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_checksum_empty() {
        assert_eq!(calculate_checksum(b""), 0xFFFF);
        assert_eq!(&format_checksum(calculate_checksum(b"")), b"FFFF");
    }

    #[test]
    fn test_calculate_checksum_known_vector() {
        // standard CRC-16/CCITT-FALSE check value
        assert_eq!(calculate_checksum(b"123456789"), 0x29B1);
    }

    #[test]
    fn test_calculate_checksum_deterministic() {
        let data = b"00020101021138";
        assert_eq!(calculate_checksum(data), calculate_checksum(data));
    }

    #[test]
    fn test_single_bit_sensitivity() {
        assert_ne!(calculate_checksum(b"00020101"), calculate_checksum(b"00020102"));
    }

    #[test]
    fn test_format_checksum() {
        assert_eq!(&format_checksum(0x0000), b"0000");
        assert_eq!(&format_checksum(0x29B1), b"29B1");
        assert_eq!(&format_checksum(0xFFFF), b"FFFF");
        assert_eq!(&format_checksum(0x0A3C), b"0A3C");
    }

    #[test]
    fn test_parse_checksum() {
        assert_eq!(parse_checksum("0000"), Some(0x0000));
        assert_eq!(parse_checksum("29B1"), Some(0x29B1));
        assert_eq!(parse_checksum("FFFF"), Some(0xFFFF));
    }

    #[test]
    fn test_parse_checksum_invalid() {
        assert_eq!(parse_checksum(""), None);
        assert_eq!(parse_checksum("FFF"), None);
        assert_eq!(parse_checksum("FFFFF"), None);
        assert_eq!(parse_checksum("29b1"), None); // lowercase rejected
        assert_eq!(parse_checksum("GHIJ"), None);
    }

    #[test]
    fn test_roundtrip() {
        for value in [0x0000u16, 0x0001, 0x29B1, 0x8000, 0xFFFF] {
            let formatted = format_checksum(value);
            let s = std::str::from_utf8(&formatted).unwrap();
            assert_eq!(parse_checksum(s), Some(value));
        }
    }
}
