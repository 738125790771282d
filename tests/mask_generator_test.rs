//! Tests for the PNG mask set written to disk.

mod common;

use addon_devtools::services::{generate_masks, MaskOptions};
use pretty_assertions::assert_eq;

#[test]
fn test_generates_numbered_files() {
    let dir = tempfile::tempdir().unwrap();
    let options = MaskOptions {
        output_dir: dir.path().join("masks"),
        size: 16,
        count: 5,
    };

    let written = generate_masks(&options).unwrap();

    let names: Vec<_> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["6.png", "5.png", "4.png", "3.png", "2.png"]);
    for path in &written {
        assert!(path.starts_with(&options.output_dir));
    }
}

#[test]
fn test_mask_contents() {
    let dir = tempfile::tempdir().unwrap();
    let options = MaskOptions {
        output_dir: dir.path().to_path_buf(),
        size: 16,
        count: 5,
    };
    generate_masks(&options).unwrap();

    // 4.png is band 2: rows 0..=2 and 14..16 transparent
    let mask = common::assert_rgba_png(&dir.path().join("4.png"));
    assert_eq!((mask.width, mask.height), (16, 16));

    let transparent: Vec<u32> = (0..16).filter(|&y| mask.row_alpha(y) == 0).collect();
    assert_eq!(transparent, vec![0, 1, 2, 14, 15]);
    for y in 3..14 {
        assert_eq!(mask.row_alpha(y), 255, "row {y} should be opaque");
    }

    // Color channels stay white everywhere, including transparent rows
    assert!(mask
        .pixels
        .chunks_exact(4)
        .all(|px| px[0] == 255 && px[1] == 255 && px[2] == 255));
}

#[test]
fn test_highest_number_has_thinnest_band() {
    let dir = tempfile::tempdir().unwrap();
    let options = MaskOptions {
        output_dir: dir.path().to_path_buf(),
        size: 8,
        count: 3,
    };
    generate_masks(&options).unwrap();

    let thinnest = common::assert_rgba_png(&dir.path().join("4.png"));
    let thickest = common::assert_rgba_png(&dir.path().join("2.png"));

    let count_transparent =
        |m: &common::DecodedPng| (0..m.height).filter(|&y| m.row_alpha(y) == 0).count();
    assert_eq!(count_transparent(&thinnest), 1);
    assert_eq!(count_transparent(&thickest), 5);
}

#[test]
fn test_output_dir_blocked_by_file() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("masks");
    std::fs::write(&blocker, "not a directory").unwrap();

    let options = MaskOptions {
        output_dir: blocker,
        size: 4,
        count: 1,
    };

    assert!(generate_masks(&options).is_err());
}
