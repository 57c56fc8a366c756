#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Must never panic, and must not allocate past the limit
    let limits = bmpfx::Limits {
        max_width: Some(1 << 16),
        max_height: Some(1 << 16),
        max_memory_bytes: Some(64 * 1024 * 1024),
        ..Default::default()
    };
    let _ = bmpfx::DecodeRequest::new(data).with_limits(&limits).decode();
});
