//! Hexadecimal encode/decode.

use crate::codec::DecodeError;

const LOWER: &[u8; 16] = b"0123456789abcdef";
const UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Encodes `data` as lowercase hex, two characters per byte.
pub fn encode(data: &[u8]) -> String {
    encode_with(data, LOWER)
}

/// Encodes `data` as uppercase hex.
pub fn encode_upper(data: &[u8]) -> String {
    encode_with(data, UPPER)
}

fn encode_with(data: &[u8], alphabet: &[u8; 16]) -> String {
    let mut out = String::with_capacity(data.len() * 2);
    for &byte in data {
        out.push(alphabet[usize::from(byte >> 4)] as char);
        out.push(alphabet[usize::from(byte & 0x0F)] as char);
    }
    out
}

/// Decodes hex text, accepting either letter case.
///
/// The length must be even; any non-hex byte fails with its offset.
pub fn decode(text: &str) -> Result<Vec<u8>, DecodeError> {
    let bytes = text.as_bytes();
    if bytes.len() % 2 != 0 {
        return Err(DecodeError::InvalidLength { len: bytes.len() });
    }
    let mut out = Vec::with_capacity(bytes.len() / 2);
    for (at, pair) in bytes.chunks_exact(2).enumerate() {
        let high = nibble(pair[0]).ok_or(DecodeError::InvalidSymbol {
            byte: pair[0],
            offset: at * 2,
        })?;
        let low = nibble(pair[1]).ok_or(DecodeError::InvalidSymbol {
            byte: pair[1],
            offset: at * 2 + 1,
        })?;
        out.push((high << 4) | low);
    }
    Ok(out)
}

fn nibble(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        assert_eq!(encode(b""), "");
        assert_eq!(encode(b"\x00\xFF\x10"), "00ff10");
        assert_eq!(encode_upper(b"\xDE\xAD\xBE\xEF"), "DEADBEEF");
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode("00ff10").unwrap(), b"\x00\xFF\x10");
        assert_eq!(decode("DeAdBeEf").unwrap(), b"\xDE\xAD\xBE\xEF");
        assert_eq!(decode("").unwrap(), b"");
    }

    #[test]
    fn test_decode_errors() {
        assert_eq!(decode("abc"), Err(DecodeError::InvalidLength { len: 3 }));
        assert_eq!(
            decode("0g"),
            Err(DecodeError::InvalidSymbol { byte: b'g', offset: 1 })
        );
        assert_eq!(
            decode("zz00"),
            Err(DecodeError::InvalidSymbol { byte: b'z', offset: 0 })
        );
    }

    #[test]
    fn test_round_trip() {
        let data: Vec<u8> = (0..=255).collect();
        assert_eq!(decode(&encode(&data)).unwrap(), data);
    }
}
