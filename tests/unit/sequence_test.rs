//! Unit tests for encoding, sequence building and cursor helpers

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use std::fs;
use tempfile::TempDir;

use gtimage::cursor::{self, CLEAR_SCREEN};
use gtimage::{build_sequence, display_image, encode_file, DisplayOptions, ImageError, ImagePayload};

#[test]
fn payload_decodes_back_to_original_bytes() {
    for len in [1usize, 2, 3, 4, 57, 1024] {
        let bytes: Vec<u8> = (0..len).map(|i| (i * 31 % 251) as u8).collect();
        let encoded = ImagePayload::from_bytes(bytes.clone()).encode();
        assert_eq!(BASE64.decode(&encoded).unwrap(), bytes, "length {}", len);
    }
}

#[test]
fn inline_leads_every_option_list() {
    let cases = [
        DisplayOptions::new(),
        DisplayOptions::new().with("width", "400px"),
        DisplayOptions::new()
            .with("width", "80%")
            .with("height", "80%")
            .with("align", "center")
            .with("z-index", "1")
            .with("name", "background")
            .with("persistent", "1"),
    ];
    for options in &cases {
        let seq = build_sequence("eA==", options);
        let opts = seq
            .strip_prefix("\x1b]1337;File=")
            .and_then(|rest| rest.split(':').next())
            .unwrap();
        assert_eq!(opts.split(';').next(), Some("inline=1"));
    }
}

#[test]
fn demo_option_sets_render_verbatim() {
    let options = DisplayOptions::new()
        .with("width", "100px")
        .with("height", "100px")
        .with("z-index", "2")
        .with("name", "animation_frame");
    assert_eq!(
        build_sequence("eA==", &options),
        "\x1b]1337;File=inline=1;width=100px;height=100px;z-index=2;name=animation_frame:eA==\x07"
    );
}

#[test]
fn clear_and_move_emit_literal_bytes() {
    let mut out = Vec::new();
    cursor::clear_screen(&mut out).unwrap();
    cursor::move_cursor(&mut out, 6, 5).unwrap();
    assert_eq!(CLEAR_SCREEN, "\x1b[2J\x1b[H");
    assert_eq!(out, b"\x1b[2J\x1b[H\x1b[6;5H");
}

#[test]
fn missing_file_fails_before_any_output() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent.jpg");

    assert!(matches!(
        encode_file(&path),
        Err(ImageError::FileNotFound { .. })
    ));

    let mut out = Vec::new();
    let err = display_image(&mut out, &path, &DisplayOptions::new()).unwrap_err();
    assert_eq!(err.to_string(), format!("Image file not found: {}", path.display()));
    assert!(out.is_empty());
}

#[test]
fn ten_byte_file_end_to_end() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("ten.png");
    fs::write(&path, [0u8, 1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();

    let mut out = Vec::new();
    display_image(&mut out, &path, &DisplayOptions::new()).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "\x1b]1337;File=inline=1:AAECAwQFBgcICQ==\x07"
    );
}
