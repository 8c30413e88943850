/// Lexicographic Base64 encoding and decoding for ULIDs
///
/// Two sub-formats share one 64-symbol alphabet but differ in bit layout:
///
/// - Full: 22 characters over a leading 2-bit group plus 21 groups of
///   6 bits (128 = 2 + 21*6). Lossless.
/// - PushKey: 20 characters over a 120-bit value `timestamp(48) ||
///   randomness(72)`. The 8 random bits at byte offset 6 of the binary are
///   dropped on encode and restored as zero on decode, so 120 bits divide
///   evenly into 6-bit groups. This mirrors an external push-key format;
///   the entropy loss is deliberate and must not be "fixed".
///
/// The alphabet sorts the same way as the encoded bytes, so encoded text
/// preserves the binary's lexicographic order. It is NOT base64url order.
use once_cell::sync::Lazy;

use super::DecodeError;

/// 64-symbol alphabet in ascending ASCII order: `-`, digits, upper, `_`, lower
const BASE64_CHARS: &[u8; 64] =
    b"-0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz";

/// Encoded length of a full-fidelity 128-bit value
pub const ENCODED_LEN: usize = 22;

/// Encoded length of the 120-bit push-key layout
pub const PUSHKEY_LEN: usize = 20;

/// Mask for the low 72 bits kept by the push-key layout
const RANDOM72_MASK: u128 = (1 << 72) - 1;

/// Lookup table for decoding Base64 characters to their 6-bit values
static DECODE_MAP: Lazy<[i8; 256]> = Lazy::new(|| {
    let mut map = [-1i8; 256];
    for (i, &c) in BASE64_CHARS.iter().enumerate() {
        map[c as usize] = i as i8;
    }
    map
});

/// Encode a 16-byte binary ULID as 22 Base64 characters (full fidelity)
pub fn encode(binary: &[u8; 16]) -> String {
    let value = u128::from_be_bytes(*binary);
    let mut buffer = [0u8; ENCODED_LEN];

    for (i, slot) in buffer.iter_mut().enumerate() {
        let shift = 126 - 6 * i;
        *slot = BASE64_CHARS[((value >> shift) & 0x3F) as usize];
    }

    String::from_utf8_lossy(&buffer).into_owned()
}

/// Decode 22 Base64 characters back to the 16-byte binary
pub fn decode(encoded: &str) -> Result<[u8; 16], DecodeError> {
    let value = accumulate(encoded, ENCODED_LEN)?;
    Ok(value.to_be_bytes())
}

/// Encode a 16-byte binary ULID as a 20-character push key
///
/// The first random byte (offset 6) is dropped: the encoded value is the
/// 48-bit timestamp followed by the low 72 bits of the randomness field.
pub fn encode_pushkey(binary: &[u8; 16]) -> String {
    let value = u128::from_be_bytes(*binary);
    let key = ((value >> 80) << 72) | (value & RANDOM72_MASK);
    let mut buffer = [0u8; PUSHKEY_LEN];

    for (i, slot) in buffer.iter_mut().enumerate() {
        let shift = 114 - 6 * i;
        *slot = BASE64_CHARS[((key >> shift) & 0x3F) as usize];
    }

    String::from_utf8_lossy(&buffer).into_owned()
}

/// Decode a 20-character push key back to a 16-byte binary
///
/// The binary keeps the same width as the other variants for storage
/// compatibility; the 8 dropped bits at byte offset 6 read back as zero.
pub fn decode_pushkey(encoded: &str) -> Result<[u8; 16], DecodeError> {
    let key = accumulate(encoded, PUSHKEY_LEN)?;
    let value = ((key >> 72) << 80) | (key & RANDOM72_MASK);
    Ok(value.to_be_bytes())
}

/// Check whether text is a valid 22-character Base64 ULID
pub fn is_valid(encoded: &str) -> bool {
    is_valid_len(encoded, ENCODED_LEN)
}

/// Check whether text is a valid 20-character push key
pub fn is_valid_pushkey(encoded: &str) -> bool {
    is_valid_len(encoded, PUSHKEY_LEN)
}

/// Accumulate fixed-length Base64 text into a u128, 6 bits per character
///
/// No leading-character range check: both layouts divide evenly, and for
/// the full layout any bits above 127 fall off the accumulator.
fn accumulate(encoded: &str, expected: usize) -> Result<u128, DecodeError> {
    let bytes = encoded.as_bytes();
    if bytes.len() != expected {
        return Err(DecodeError::InvalidLength {
            len: bytes.len(),
            expected,
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
        value = (value << 6) | group as u128;
    }

    Ok(value)
}

fn is_valid_len(encoded: &str, expected: usize) -> bool {
    let bytes = encoded.as_bytes();
    bytes.len() == expected && bytes.iter().all(|&c| DECODE_MAP[c as usize] != -1)
}
