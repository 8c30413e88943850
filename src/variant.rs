//! Text encoding variants for a ULID
//!
//! A single binary ULID can be rendered in three fixed-width alphabets.
//! The variant selects both the alphabet and the bit layout; encoded
//! length alone is enough to tell the variants apart on decode.

/// Text encoding variant for a ULID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// Crockford Base32, 26 characters. The canonical ULID text form.
    #[default]
    Base32,
    /// Lexicographic Base64, 22 characters. Full 128-bit fidelity.
    Base64,
    /// Push-key compatible Base64, 20 characters. 8 random bits are
    /// sacrificed so that 120 bits divide evenly into 6-bit groups.
    PushKey,
}

impl Variant {
    /// Encoded text length in characters for this variant
    #[inline(always)]
    pub const fn encoded_len(&self) -> usize {
        match self {
            Variant::Base32 => 26,
            Variant::Base64 => 22,
            Variant::PushKey => 20,
        }
    }

    /// Resolve a variant from an encoded text length
    ///
    /// Used by implicit-variant decoding: 26 chars can only be Base32,
    /// 22 only Base64, 20 only PushKey. Any other length matches no format.
    #[inline(always)]
    pub const fn for_len(len: usize) -> Option<Variant> {
        match len {
            26 => Some(Variant::Base32),
            22 => Some(Variant::Base64),
            20 => Some(Variant::PushKey),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoded_lengths() {
        assert_eq!(Variant::Base32.encoded_len(), 26);
        assert_eq!(Variant::Base64.encoded_len(), 22);
        assert_eq!(Variant::PushKey.encoded_len(), 20);
    }

    #[test]
    fn test_for_len() {
        assert_eq!(Variant::for_len(26), Some(Variant::Base32));
        assert_eq!(Variant::for_len(22), Some(Variant::Base64));
        assert_eq!(Variant::for_len(20), Some(Variant::PushKey));
        assert_eq!(Variant::for_len(0), None);
        assert_eq!(Variant::for_len(21), None);
        assert_eq!(Variant::for_len(36), None);
    }

    #[test]
    fn test_default_is_base32() {
        assert_eq!(Variant::default(), Variant::Base32);
    }
}
