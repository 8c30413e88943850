#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn test_all_zero_binary() {
        let zero = [0u8; 16];
        assert_eq!(encode(&zero, Variant::Base32), "00000000000000000000000000");
        assert_eq!(decode_any("00000000000000000000000000").unwrap(), zero);
        assert_eq!(timestamp_ms(&zero), 0);
    }

    #[test]
    fn test_all_ones_binary() {
        let ones = [0xFFu8; 16];
        let b32 = encode(&ones, Variant::Base32);
        assert_eq!(b32, "7ZZZZZZZZZZZZZZZZZZZZZZZZZ");
        assert_eq!(decode(&b32, Variant::Base32).unwrap(), ones);

        let b64 = encode(&ones, Variant::Base64);
        assert_eq!(decode(&b64, Variant::Base64).unwrap(), ones);
        assert_eq!(timestamp_ms(&ones), MAX_TIMESTAMP_MS);
    }

    #[test]
    fn test_max_timestamp_roundtrip() {
        let binary = bingenerate_at(MAX_TIMESTAMP_MS).unwrap();
        assert_eq!(timestamp_ms(&binary), MAX_TIMESTAMP_MS);

        let key = encode(&binary, Variant::PushKey);
        let restored = decode(&key, Variant::PushKey).unwrap();
        assert_eq!(timestamp_ms(&restored), MAX_TIMESTAMP_MS);
    }

    #[test]
    fn test_timestamp_overflow_is_an_error_not_a_wrap() {
        let err = bingenerate_at(u64::MAX).unwrap_err();
        assert_eq!(
            err,
            UlidError::TimestampOverflow {
                timestamp_ms: u64::MAX,
                max: MAX_TIMESTAMP_MS,
            }
        );
        assert!(generate_at(Variant::Base64, 1 << 48).is_err());
    }

    #[test]
    fn test_pushkey_filler_always_reads_zero() {
        let mut binary = [0xABu8; 16];
        binary[6] = 0xFF;
        let restored = decode(&encode(&binary, Variant::PushKey), Variant::PushKey).unwrap();
        assert_eq!(restored[6], 0);
        // Every other byte survives
        for (i, (&a, &b)) in binary.iter().zip(restored.iter()).enumerate() {
            if i != 6 {
                assert_eq!(a, b, "byte {} changed", i);
            }
        }
    }

    #[test]
    fn test_non_ascii_input_rejected() {
        // Multi-byte UTF-8 that happens to hit a valid byte length
        let text = "01BZ13RV29T5S8HV45EDNC74é"; // 25 chars, 26 bytes
        assert_eq!(text.len(), 26);
        assert!(decode(text, Variant::Base32).is_err());
        assert!(!is_valid(text, Variant::Base32));
    }
}
