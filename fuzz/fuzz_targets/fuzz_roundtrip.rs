#![no_main]
use libfuzzer_sys::fuzz_target;
use bmpfx::*;

fuzz_target!(|data: &[u8]| {
    let limits = Limits {
        max_width: Some(1 << 16),
        max_height: Some(1 << 16),
        max_memory_bytes: Some(64 * 1024 * 1024),
        ..Default::default()
    };
    // If we can decode it, re-encoding and decoding again must produce identical pixels
    let Ok(decoded) = DecodeRequest::new(data).with_limits(&limits).decode() else {
        return;
    };
    let Ok(reencoded) = encode_bmp(&decoded) else {
        return;
    };
    let Ok(decoded2) = decode_bmp(&reencoded) else {
        panic!("re-encoded data failed to decode");
    };
    assert_eq!(decoded, decoded2, "roundtrip pixel mismatch");

    // A second encode is byte-identical to the first
    assert_eq!(encode_bmp(&decoded2).ok(), Some(reencoded));
});
