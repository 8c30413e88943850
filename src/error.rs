use thiserror::Error;

/// Represents errors that can occur during ULID generation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UlidError {
    /// Error when the supplied timestamp does not fit in 48 bits
    #[error("Timestamp {timestamp_ms} does not fit in 48 bits. Maximum allowed value is {max}")]
    TimestampOverflow { timestamp_ms: u64, max: u64 },
}
