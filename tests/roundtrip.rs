use bmpfx::*;

fn grid_2x2() -> PixelGrid {
    PixelGrid::from_rows(vec![
        vec![Pixel::new(10, 20, 30), Pixel::new(40, 50, 60)],
        vec![Pixel::new(70, 80, 90), Pixel::new(100, 110, 120)],
    ])
    .unwrap()
}

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("bmpfx_{}_{name}", std::process::id()))
}

#[test]
fn bmp_roundtrip_2x2() {
    let grid = grid_2x2();
    let encoded = encode_bmp(&grid).unwrap();

    assert_eq!(&encoded[0..2], b"BM");
    // 2 pixels * 3 bytes = 6, padded to 8, two rows
    assert_eq!(encoded.len(), 54 + 16);
    // bottom row first, BGR, two bytes of padding
    assert_eq!(&encoded[54..62], &[90, 80, 70, 120, 110, 100, 0, 0]);

    let decoded = decode_bmp(&encoded).unwrap();
    assert_eq!(decoded.width(), 2);
    assert_eq!(decoded.height(), 2);
    assert_eq!(decoded, grid);
}

#[test]
fn bmp_roundtrip_every_padding() {
    // widths 1..=4 cover padding of 1, 2, 3 and 0 bytes
    for width in 1..=8 {
        for height in 1..=3 {
            let grid = PixelGrid::from_fn(width, height, |row, col| {
                Pixel::new((row * 31 + col) as u8, (col * 17) as u8, 255 - row as u8)
            });
            let encoded = encode_bmp(&grid).unwrap();
            let stride = (width * 3).div_ceil(4) * 4;
            assert_eq!(encoded.len(), 54 + stride * height, "{width}x{height}");
            assert_eq!(decode_bmp(&encoded).unwrap(), grid, "{width}x{height}");
        }
    }
}

#[test]
fn reencode_is_byte_identical() {
    let grid = PixelGrid::from_fn(5, 3, |row, col| Pixel::new(row as u8, col as u8, 200));
    let first = encode_bmp(&grid).unwrap();
    let second = encode_bmp(&decode_bmp(&first).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn file_roundtrip() {
    let path = temp_path("file_roundtrip.bmp");
    let grid = grid_2x2();
    assert!(write_image(&path, &grid));
    assert_eq!(read_image(&path), grid);
    std::fs::remove_file(&path).ok();
}

#[test]
fn write_overwrites_existing_file() {
    let path = temp_path("overwrite.bmp");
    std::fs::write(&path, vec![0xAA; 500]).unwrap();
    let grid = PixelGrid::from_fn(1, 1, |_, _| Pixel::new(1, 2, 3));
    assert!(write_image(&path, &grid));
    assert_eq!(std::fs::metadata(&path).unwrap().len(), 58);
    assert_eq!(read_image(&path), grid);
    std::fs::remove_file(&path).ok();
}

#[test]
fn read_missing_file_is_empty() {
    let grid = read_image(temp_path("does_not_exist.bmp"));
    assert!(grid.is_empty());
}

#[test]
fn write_to_missing_directory_fails() {
    let path = temp_path("no_such_dir").join("out.bmp");
    assert!(!write_image(&path, &grid_2x2()));
    assert!(matches!(
        try_write_image(&path, &grid_2x2()),
        Err(BitmapError::Io(_))
    ));
}

#[test]
fn write_empty_grid_fails() {
    let path = temp_path("empty.bmp");
    assert!(!write_image(&path, &PixelGrid::empty()));
    assert!(!path.exists());
}

#[test]
fn read_with_limits() {
    let path = temp_path("limits.bmp");
    assert!(write_image(&path, &grid_2x2()));

    let tight = Limits {
        max_width: Some(1),
        ..Default::default()
    };
    assert!(read_image_with_limits(&path, &tight).is_empty());

    let loose = Limits {
        max_pixels: Some(4),
        max_memory_bytes: Some(12),
        ..Default::default()
    };
    assert_eq!(read_image_with_limits(&path, &loose), grid_2x2());
    std::fs::remove_file(&path).ok();
}

#[test]
fn decode_request_with_limits() {
    let encoded = encode_bmp(&grid_2x2()).unwrap();
    let limits = Limits {
        max_memory_bytes: Some(11),
        ..Default::default()
    };
    let result = DecodeRequest::new(&encoded).with_limits(&limits).decode();
    match result {
        Err(BitmapError::LimitExceeded(_)) => {}
        other => panic!("expected LimitExceeded, got {other:?}"),
    }
    assert_eq!(DecodeRequest::new(&encoded).decode().unwrap(), grid_2x2());
}
