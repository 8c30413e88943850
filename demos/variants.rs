use mulid::{bingenerate, decode, encode, is_valid, Variant};

fn main() {
    let binary = bingenerate();

    println!("One binary ULID, three text forms:");
    for variant in [Variant::Base32, Variant::Base64, Variant::PushKey] {
        let text = encode(&binary, variant);
        println!("  {:?} ({} chars): {}", variant, text.len(), text);
        assert!(is_valid(&text, variant));
    }

    // PushKey trades 8 random bits for push-key compatibility
    let key = encode(&binary, Variant::PushKey);
    let restored = decode(&key, Variant::PushKey).unwrap();
    println!("\nPushKey restores byte 6 as zero:");
    println!("  original byte 6: 0x{:02X}", binary[6]);
    println!("  restored byte 6: 0x{:02X}", restored[6]);
}
