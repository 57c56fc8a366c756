#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    let bmp = |width: u32, height: u32, bpp: u16, pixels: &[u8]| {
        let stride = (width * u32::from(bpp / 8)).div_ceil(4) * 4;
        let size = 54 + stride * height;
        let mut out = vec![0u8; 54];
        out[0] = b'B'; out[1] = b'M';
        out[2..6].copy_from_slice(&size.to_le_bytes()); // file size
        out[10..14].copy_from_slice(&54u32.to_le_bytes()); // data offset
        out[14..18].copy_from_slice(&40u32.to_le_bytes()); // DIB header size
        out[18..22].copy_from_slice(&width.to_le_bytes());
        out[22..26].copy_from_slice(&height.to_le_bytes());
        out[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
        out[28..30].copy_from_slice(&bpp.to_le_bytes());
        out.extend_from_slice(pixels);
        out
    };

    // Minimal BMP 1x1 24-bit
    fs::write(format!("{dir}/bmp_1x1.bmp"), bmp(1, 1, 24, &[0xff, 0x00, 0x00, 0x00])).unwrap();

    // 2x2 24-bit, two padding bytes per row
    fs::write(
        format!("{dir}/bmp_2x2.bmp"),
        bmp(2, 2, 24, &[90, 80, 70, 120, 110, 100, 0, 0, 30, 20, 10, 60, 50, 40, 0, 0]),
    )
    .unwrap();

    // 1x2 32-bit
    fs::write(format!("{dir}/bmp_1x2_32.bmp"), bmp(1, 2, 32, &[1, 2, 3, 255, 4, 5, 6, 255])).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
    let mut bad_size = bmp(1, 1, 24, &[0, 0, 0, 0]);
    bad_size[2] = 0x99;
    fs::write(format!("{dir}/bad_size.bmp"), bad_size).unwrap();

    println!("Generated seed corpus in {dir}/");
}
