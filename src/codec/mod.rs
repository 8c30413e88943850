//! Text codec for the 16-byte binary ULID
//!
//! One encode/decode/validate path per [`Variant`], sharing the big-endian
//! u128 bit-slicing approach. All paths are pure functions: fixed-length
//! input, fixed-length output, no partial results.

pub mod base32;
pub mod base64;

use crate::variant::Variant;

/// Errors that can occur while decoding or validating ULID text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The input length does not match the variant's fixed length
    #[error("Invalid length {len}, expected {expected} characters")]
    InvalidLength { len: usize, expected: usize },

    /// The input length matches no known variant (implicit-variant decode)
    #[error("No ULID format matches a {len} character string")]
    UnknownFormat { len: usize },

    /// The input contains a character outside the variant's alphabet
    #[error("Invalid character {ch:?} at position {index}")]
    InvalidCharacter { ch: char, index: usize },

    /// The leading Base32 character encodes a value above 7, which would
    /// overflow 128 bits
    #[error("Leading character {ch:?} is out of range for a 128-bit value")]
    LeadingOverflow { ch: char },
}

/// Encode a 16-byte binary ULID as text in the given variant
///
/// # Arguments
/// * `binary` - The 16-byte big-endian ULID
/// * `variant` - Which alphabet and bit layout to use
///
/// # Returns
/// * `String` - Fixed-width ASCII text (26, 22 or 20 characters)
pub fn encode(binary: &[u8; 16], variant: Variant) -> String {
    match variant {
        Variant::Base32 => base32::encode(binary),
        Variant::Base64 => base64::encode(binary),
        Variant::PushKey => base64::encode_pushkey(binary),
    }
}

/// Decode ULID text of a known variant back to the 16-byte binary
///
/// Length, alphabet membership and (for Base32) the leading-character
/// range are checked; any failure rejects the whole input.
pub fn decode(encoded: &str, variant: Variant) -> Result<[u8; 16], DecodeError> {
    match variant {
        Variant::Base32 => base32::decode(encoded),
        Variant::Base64 => base64::decode(encoded),
        Variant::PushKey => base64::decode_pushkey(encoded),
    }
}

/// Decode ULID text, picking the variant from the input length
///
/// 26 characters decode as Base32, 22 as Base64, 20 as PushKey. A string
/// of any other length is rejected as [`DecodeError::UnknownFormat`]
/// rather than as a specific variant's failure; callers that need an
/// exact-variant check should use [`decode`] with an explicit variant.
pub fn decode_any(encoded: &str) -> Result<[u8; 16], DecodeError> {
    match Variant::for_len(encoded.len()) {
        Some(variant) => decode(encoded, variant),
        None => Err(DecodeError::UnknownFormat {
            len: encoded.len(),
        }),
    }
}

/// Check whether text is a valid ULID encoding for the given variant
///
/// Mirrors [`decode`]'s checks without materializing the decoded bits.
pub fn is_valid(encoded: &str, variant: Variant) -> bool {
    match variant {
        Variant::Base32 => base32::is_valid(encoded),
        Variant::Base64 => base64::is_valid(encoded),
        Variant::PushKey => base64::is_valid_pushkey(encoded),
    }
}
