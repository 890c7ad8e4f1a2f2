#![cfg(feature = "serde-derive")]

use brine_hash::{compute_hmac_sha512, WordArray32, WordArray64};

#[test]
fn digests_serialize_as_hex_strings() {
    let mac = compute_hmac_sha512(b"key", b"The quick brown fox jumps over the lazy dog");
    let json = serde_json::to_string(&mac).unwrap();
    assert_eq!(json, format!("\"{}\"", mac.to_hex()));

    let restored: WordArray64 = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, mac);
}

#[test]
fn narrow_arrays_round_trip_too() {
    let narrow = WordArray32::from("round trip");
    let json = serde_json::to_string(&narrow).unwrap();
    let restored: WordArray32 = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, narrow);
}
