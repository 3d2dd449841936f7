use std::fs;
use std::path::{Path, PathBuf};

use qrfig::{Error, QrfigConfig, generate};

fn write_config(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write config fixture");
    path
}

fn decode(path: &Path) -> String {
    let png = image::open(path).expect("open rendered figure");
    let mut prepared = rqrr::PreparedImage::prepare(png.to_luma8());
    let grids = prepared.detect_grids();
    assert_eq!(grids.len(), 1, "expected exactly one symbol in the figure");
    let (_meta, content) = grids[0].decode().expect("decode rendered symbol");
    content
}

#[test]
fn yaml_variables_file_renders_a_decodable_png() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("figures").join("qr_code.png");
    let config_path = write_config(
        dir.path(),
        "_variables.yml",
        &format!(
            "title: Example docs\nurl: https://example.com\noutput: {}\n",
            output.display()
        ),
    );

    let config = QrfigConfig::from_file(&config_path).unwrap();
    let rendered = generate(&config).unwrap();

    assert_eq!(rendered.path, output);
    assert_eq!(rendered.pixels.0, rendered.pixels.1);
    assert!(output.exists());

    assert_eq!(decode(&output), "https://example.com");
}

#[test]
fn missing_url_key_fails_before_writing_anything() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("figures").join("qr_code.png");
    let config_path = write_config(
        dir.path(),
        "_variables.yml",
        &format!("title: Example docs\noutput: {}\n", output.display()),
    );

    let config = QrfigConfig::from_file(&config_path).unwrap();
    let err = generate(&config).unwrap_err();

    assert!(matches!(err, Error::Config(_)));
    assert!(!output.exists());
}

#[test]
fn toml_config_controls_symbol_geometry() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("badge.png");
    let config_path = write_config(
        dir.path(),
        "qrfig.toml",
        &format!(
            "url = \"https://qr.fig\"\noutput = \"{}\"\n\n[qr]\nbox_size = 5\n",
            output.display()
        ),
    );

    let config = QrfigConfig::from_file(&config_path).unwrap();
    let rendered = generate(&config).unwrap();

    assert_eq!(rendered.version, 1);
    assert_eq!(rendered.modules, 21);
    // (21 modules + 2 * 4 quiet zone) * 5 px
    assert_eq!(rendered.pixels, (145, 145));

    assert_eq!(decode(&output), "https://qr.fig");
}

#[test]
fn oversized_url_surfaces_an_encoding_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("figures").join("qr_code.png");
    let config_path = write_config(
        dir.path(),
        "qrfig.toml",
        &format!(
            "url = \"{}\"\noutput = \"{}\"\n",
            "a".repeat(4000),
            output.display()
        ),
    );

    let config = QrfigConfig::from_file(&config_path).unwrap();
    let err = generate(&config).unwrap_err();

    assert!(matches!(err, Error::QrEncode(_)));
    assert!(!output.exists());
}
