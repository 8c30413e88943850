/// Crockford Base32 encoding and decoding for ULIDs
///
/// The 128-bit binary splits into 26 groups most-significant-bit first:
/// a leading 3-bit group followed by 25 groups of 5 bits (128 = 3 + 25*5).
/// Because the first character carries only 3 significant bits, its decoded
/// value must be 7 or less; anything higher would overflow 128 bits.
use once_cell::sync::Lazy;

use super::DecodeError;

/// Crockford alphabet: digits then letters, skipping I, L, O and U
const BASE32_CHARS: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Encoded length of a 128-bit value in this alphabet
pub const ENCODED_LEN: usize = 26;

/// Highest value the leading character may decode to (top 3 bits)
const MAX_LEADING_VALUE: i8 = 7;

/// Lookup table for decoding Base32 characters to their 5-bit values
static DECODE_MAP: Lazy<[i8; 256]> = Lazy::new(|| {
    let mut map = [-1i8; 256];
    for (i, &c) in BASE32_CHARS.iter().enumerate() {
        map[c as usize] = i as i8;
    }
    map
});

/// Encode a 16-byte binary ULID as 26 Crockford Base32 characters
pub fn encode(binary: &[u8; 16]) -> String {
    let value = u128::from_be_bytes(*binary);
    let mut buffer = [0u8; ENCODED_LEN];

    for (i, slot) in buffer.iter_mut().enumerate() {
        let shift = 125 - 5 * i;
        *slot = BASE32_CHARS[((value >> shift) & 0x1F) as usize];
    }

    // Buffer only ever holds alphabet bytes, which are ASCII
    String::from_utf8_lossy(&buffer).into_owned()
}

/// Decode 26 Crockford Base32 characters back to the 16-byte binary
///
/// # Returns
/// * `Result<[u8; 16], DecodeError>` - The decoded binary or an error
pub fn decode(encoded: &str) -> Result<[u8; 16], DecodeError> {
    let bytes = encoded.as_bytes();
    if bytes.len() != ENCODED_LEN {
        return Err(DecodeError::InvalidLength {
            len: bytes.len(),
            expected: ENCODED_LEN,
        });
    }

    let mut value: u128 = 0;
    for (index, &c) in bytes.iter().enumerate() {
        let group = DECODE_MAP[c as usize];
        if group == -1 {
            return Err(DecodeError::InvalidCharacter {
                ch: c as char,
                index,
            });
        }
        if index == 0 && group > MAX_LEADING_VALUE {
            return Err(DecodeError::LeadingOverflow { ch: c as char });
        }
        value = (value << 5) | group as u128;
    }

    Ok(value.to_be_bytes())
}

/// Check whether text is a valid 26-character Crockford Base32 ULID
///
/// Mirrors [`decode`]'s checks without accumulating the decoded bits.
pub fn is_valid(encoded: &str) -> bool {
    let bytes = encoded.as_bytes();
    if bytes.len() != ENCODED_LEN {
        return false;
    }
    if DECODE_MAP[bytes[0] as usize] > MAX_LEADING_VALUE {
        return false;
    }
    bytes.iter().all(|&c| DECODE_MAP[c as usize] != -1)
}
