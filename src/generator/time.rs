//! Time utilities for ULID generation
//!
//! Provides wall-clock time in milliseconds since the Unix epoch

use std::time::{SystemTime, UNIX_EPOCH};

/// Get current wall-clock time in milliseconds since Unix epoch
#[inline(always)]
pub fn unix_time_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("System time before Unix epoch!")
        .as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unix_time_is_reasonable() {
        let now = unix_time_ms();
        // Should be after 2024-01-01
        assert!(now > 1704067200000);
        // Should be before 2100-01-01
        assert!(now < 4102444800000);
    }

    #[test]
    fn test_fits_in_48_bits() {
        assert!(unix_time_ms() <= crate::MAX_TIMESTAMP_MS);
    }
}
