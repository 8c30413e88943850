//! # mulid
//!
//! A Rust implementation of ULIDs (Universally Unique Lexicographically
//! Sortable Identifiers) with three text encodings.
//!
//! A ULID is 128 bits: a 48-bit millisecond timestamp followed by 80 bits
//! of cryptographically strong randomness. The binary form is 16 bytes,
//! big-endian, so byte-wise comparison sorts by time first, and it fits
//! anywhere a 128-bit UUID fits. The same value can be rendered as:
//! - 🔤 Base32 - 26 chars, Crockford alphabet (canonical ULID text form)
//! - 🔡 Base64 - 22 chars, lexicographic 64-symbol alphabet, full fidelity
//! - 🔑 PushKey - 20 chars, push-key compatible (drops 8 random bits)

#![forbid(unsafe_code)]

pub mod codec;
mod error;
mod generator;
mod variant;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use error::UlidError;
pub use variant::Variant;

// Re-export codec entry points at crate root
pub use codec::DecodeError;
pub use codec::{decode, decode_any, encode, is_valid};

// Re-export generator entry points
pub use generator::{bingenerate, bingenerate_at, generate, generate_at};
pub use generator::{datetime, timestamp_ms, MAX_TIMESTAMP_MS, ULID_LEN};
