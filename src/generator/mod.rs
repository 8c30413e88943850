//! ULID generation and component extraction
//!
//! Split into modules:
//! - `time` - Wall-clock time utilities
//! - binary assembly, random fill and text convenience wrappers here
//!
//! Generation is stateless: every call reads the clock (or takes an
//! explicit timestamp) and fills the low 80 bits from the operating
//! system's secure randomness source. No sequence counter, no shared
//! state, safe to call from any number of threads.

mod time;

use chrono::{DateTime, Utc};
use rand::rngs::OsRng;
use rand::TryRngCore;

use crate::codec;
use crate::error::UlidError;
use crate::variant::Variant;

use time::unix_time_ms;

/// Binary ULID size in bytes
pub const ULID_LEN: usize = 16;

/// Largest millisecond timestamp representable in 48 bits
pub const MAX_TIMESTAMP_MS: u64 = (1 << 48) - 1;

/// Generate a binary ULID for the current wall-clock time
///
/// The first 6 bytes hold the millisecond timestamp big-endian; the
/// remaining 10 bytes come from the OS secure randomness source.
///
/// # Panics
/// Panics if the system clock is before the Unix epoch or the OS
/// randomness source is unavailable. Both are environment failures with
/// nothing to recover at this level.
pub fn bingenerate() -> [u8; ULID_LEN] {
    // Wall-clock ms stays below 2^48 until the year 10889
    assemble(unix_time_ms())
}

/// Generate a binary ULID for an explicit millisecond timestamp
///
/// # Returns
/// * `Result<[u8; 16], UlidError>` - The binary, or an error when the
///   timestamp does not fit in 48 bits
pub fn bingenerate_at(timestamp_ms: u64) -> Result<[u8; ULID_LEN], UlidError> {
    if timestamp_ms > MAX_TIMESTAMP_MS {
        return Err(UlidError::TimestampOverflow {
            timestamp_ms,
            max: MAX_TIMESTAMP_MS,
        });
    }
    Ok(assemble(timestamp_ms))
}

/// Generate a text ULID for the current wall-clock time
pub fn generate(variant: Variant) -> String {
    codec::encode(&bingenerate(), variant)
}

/// Generate a text ULID for an explicit millisecond timestamp
pub fn generate_at(variant: Variant, timestamp_ms: u64) -> Result<String, UlidError> {
    Ok(codec::encode(&bingenerate_at(timestamp_ms)?, variant))
}

/// Extract the 48-bit millisecond timestamp from a binary ULID
#[inline(always)]
pub fn timestamp_ms(binary: &[u8; ULID_LEN]) -> u64 {
    (u128::from_be_bytes(*binary) >> 80) as u64
}

/// Extract the timestamp from a binary ULID as a UTC datetime
///
/// Returns `None` only for timestamps chrono cannot represent, which a
/// 48-bit millisecond value never reaches.
pub fn datetime(binary: &[u8; ULID_LEN]) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp_millis(timestamp_ms(binary) as i64)
}

fn assemble(timestamp_ms: u64) -> [u8; ULID_LEN] {
    let mut binary = [0u8; ULID_LEN];
    binary[..6].copy_from_slice(&timestamp_ms.to_be_bytes()[2..]);
    OsRng
        .try_fill_bytes(&mut binary[6..])
        .expect("OS randomness source unavailable");
    binary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_prefix() {
        let binary = bingenerate_at(1469918176385).unwrap();
        assert_eq!(timestamp_ms(&binary), 1469918176385);
        assert_eq!(&binary[..6], &[0x01, 0x56, 0x3D, 0xF3, 0x64, 0x81]);
    }

    #[test]
    fn test_timestamp_overflow_rejected() {
        assert!(bingenerate_at(MAX_TIMESTAMP_MS).is_ok());
        assert_eq!(
            bingenerate_at(MAX_TIMESTAMP_MS + 1),
            Err(UlidError::TimestampOverflow {
                timestamp_ms: MAX_TIMESTAMP_MS + 1,
                max: MAX_TIMESTAMP_MS,
            })
        );
    }

    #[test]
    fn test_datetime_extraction() {
        let binary = bingenerate_at(0).unwrap();
        assert_eq!(datetime(&binary).unwrap().timestamp_millis(), 0);
    }
}
