//! Standard base64 encode/decode (RFC 4648 §4, with `=` padding).

use crate::codec::DecodeError;

const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
const PAD: u8 = b'=';

/// Encodes `data` as padded base64.
pub fn encode(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len().div_ceil(3) * 4);
    for group in data.chunks(3) {
        let b0 = group[0];
        let b1 = group.get(1).copied().unwrap_or(0);
        let b2 = group.get(2).copied().unwrap_or(0);
        out.push(ALPHABET[usize::from(b0 >> 2)] as char);
        out.push(ALPHABET[usize::from(((b0 & 0x03) << 4) | (b1 >> 4))] as char);
        if group.len() > 1 {
            out.push(ALPHABET[usize::from(((b1 & 0x0F) << 2) | (b2 >> 6))] as char);
        } else {
            out.push(PAD as char);
        }
        if group.len() > 2 {
            out.push(ALPHABET[usize::from(b2 & 0x3F)] as char);
        } else {
            out.push(PAD as char);
        }
    }
    out
}

/// Decodes padded base64 text.
///
/// The length must be a multiple of four; padding may only appear as the
/// last one or two bytes. Errors carry the first bad offset.
pub fn decode(text: &str) -> Result<Vec<u8>, DecodeError> {
    let bytes = text.as_bytes();
    if bytes.len() % 4 != 0 {
        return Err(DecodeError::InvalidLength { len: bytes.len() });
    }
    let mut out = Vec::with_capacity(bytes.len() / 4 * 3);
    for (group_at, group) in bytes.chunks_exact(4).enumerate() {
        let base = group_at * 4;
        let last_group = base + 4 == bytes.len();
        let mut values = [0u8; 4];
        let mut data_len = 4;
        for (i, &byte) in group.iter().enumerate() {
            if byte == PAD {
                // Padding is only legal in the last group's tail, and a
                // group of "x===" or "====" cannot carry a whole byte.
                if !last_group || i < 2 || group[i..].iter().any(|&b| b != PAD) {
                    return Err(DecodeError::BadPadding { offset: base + i });
                }
                data_len = i;
                break;
            }
            values[i] = symbol_value(byte).ok_or(DecodeError::InvalidSymbol {
                byte,
                offset: base + i,
            })?;
        }
        out.push((values[0] << 2) | (values[1] >> 4));
        if data_len > 2 {
            out.push((values[1] << 4) | (values[2] >> 2));
        }
        if data_len > 3 {
            out.push((values[2] << 6) | values[3]);
        }
    }
    Ok(out)
}

fn symbol_value(byte: u8) -> Option<u8> {
    match byte {
        b'A'..=b'Z' => Some(byte - b'A'),
        b'a'..=b'z' => Some(byte - b'a' + 26),
        b'0'..=b'9' => Some(byte - b'0' + 52),
        b'+' => Some(62),
        b'/' => Some(63),
        _ => None,
    }
}
