use mulid::{bingenerate, datetime, decode_any, encode, timestamp_ms, Variant};

fn main() {
    // Generate a binary ULID for the current time
    let binary = bingenerate();

    println!("Binary ULID ({} bytes): {:02X?}", binary.len(), binary);
    println!("Timestamp: {} ms since epoch", timestamp_ms(&binary));
    println!("Human date: {}", datetime(&binary).unwrap());

    // Canonical text form
    let text = encode(&binary, Variant::Base32);
    println!("\nBase32: {text}");

    // Round-trip through the length-dispatched decoder
    let restored = decode_any(&text).unwrap();
    assert_eq!(restored, binary);
    println!("Round-trip OK");
}
