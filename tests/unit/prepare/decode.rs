use std::io::Cursor;

use super::*;

fn png_bytes(img: image::GrayImage) -> Vec<u8> {
    let mut buf = Vec::new();
    image::DynamicImage::ImageLuma8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn prepare_binarizes_dark_columns() {
    // 9x9, columns 0..5 black, 5..9 white; merged into a single row.
    let img = image::GrayImage::from_fn(9, 9, |x, _| {
        if x < 5 { image::Luma([0u8]) } else { image::Luma([255u8]) }
    });
    let grid = prepare_frame(&png_bytes(img), &PrepareOpts::new(9)).unwrap();

    assert_eq!(grid.width(), 9);
    assert_eq!(grid.height(), 1);
    let row: Vec<bool> = grid.rows().next().unwrap().to_vec();
    assert_eq!(row, vec![true, true, true, true, true, false, false, false, false]);
}

#[test]
fn threshold_midpoint_counts_as_foreground() {
    // 127/255 <= 0.5 is foreground, 128/255 is background.
    for (value, expect) in [(127u8, true), (128u8, false)] {
        let img = image::GrayImage::from_pixel(9, 9, image::Luma([value]));
        let grid = prepare_frame(&png_bytes(img), &PrepareOpts::new(9)).unwrap();
        assert!(grid.rows().next().unwrap().iter().all(|&px| px == expect));
    }
}

#[test]
fn short_trailing_row_group_is_averaged() {
    // 12 rows merged in groups of 9 -> one full band and one 3-row band.
    let img = image::GrayImage::from_fn(9, 12, |_, y| {
        if y < 9 { image::Luma([255u8]) } else { image::Luma([0u8]) }
    });
    let grid = prepare_frame(&png_bytes(img), &PrepareOpts::new(9)).unwrap();

    assert_eq!(grid.height(), 2);
    let rows: Vec<Vec<bool>> = grid.rows().map(|r| r.to_vec()).collect();
    assert!(rows[0].iter().all(|&px| !px));
    assert!(rows[1].iter().all(|&px| px));
}

#[test]
fn resize_height_follows_aspect_ratio() {
    // 18x36 source at hori_res 9 -> 18 resized rows -> 2 merged rows.
    let img = image::GrayImage::from_pixel(18, 36, image::Luma([255u8]));
    let grid = prepare_frame(&png_bytes(img), &PrepareOpts::new(9)).unwrap();
    assert_eq!(grid.width(), 9);
    assert_eq!(grid.height(), 2);
}

#[test]
fn invalid_inputs_are_rejected() {
    let img = image::GrayImage::from_pixel(4, 4, image::Luma([0u8]));
    let bytes = png_bytes(img);

    let mut opts = PrepareOpts::new(9);
    opts.merge_rows = 0;
    assert!(prepare_frame(&bytes, &opts).is_err());
    assert!(prepare_frame(&bytes, &PrepareOpts::new(0)).is_err());
    assert!(prepare_frame(b"not an image", &PrepareOpts::new(9)).is_err());
}
