//! Integration tests for PNG encoding, writing and reporting.

mod common;

use image::{ColorType, ImageReader};
use random_banner::{encode_png, report_line, write_png};
use std::path::Path;

use common::*;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

#[test]
fn test_write_produces_valid_rgb_png() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let path = dir.path().join("random-banner.png");
    let banner = render_seeded(TEST_SEED);

    let size = write_png(&banner, &path)?;

    let bytes = std::fs::read(&path)?;
    assert_eq!(size, bytes.len() as u64);
    assert!(size > 0);
    assert_eq!(bytes[..8], PNG_SIGNATURE);

    let decoded = ImageReader::open(&path)?.decode()?;
    assert_eq!((decoded.width(), decoded.height()), (1200, 630));
    assert_eq!(decoded.color(), ColorType::Rgb8);
    // Lossless
    assert_eq!(decoded.to_rgb8(), banner);

    Ok(())
}

#[test]
fn test_write_overwrites_existing_file() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let path = dir.path().join("random-banner.png");
    std::fs::write(&path, b"stale contents")?;

    let size = write_png(&render_seeded(TEST_SEED), &path)?;

    assert_eq!(std::fs::metadata(&path)?.len(), size);
    assert_eq!(std::fs::read(&path)?[..8], PNG_SIGNATURE);

    Ok(())
}

#[test]
fn test_write_into_missing_directory_fails() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let path = dir.path().join("missing").join("random-banner.png");

    let result = write_png(&render_seeded(TEST_SEED), &path);

    assert!(result.is_err());
    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("Failed to write"), "unexpected error: {}", message);
    assert!(!path.exists());

    Ok(())
}

#[test]
fn test_encoded_size_matches_written_size() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let path = dir.path().join("banner.png");
    let banner = render_seeded(TEST_SEED);

    let encoded = encode_png(&banner)?;
    let size = write_png(&banner, &path)?;

    assert_eq!(encoded.len() as u64, size);

    Ok(())
}

#[test]
fn test_unseeded_runs_have_similar_sizes() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let first_path = dir.path().join("first.png");
    let second_path = dir.path().join("second.png");

    let first = write_png(&BannerGenerator::default().generate()?, &first_path)?;
    let second = write_png(&BannerGenerator::default().generate()?, &second_path)?;

    assert!(first > 0 && second > 0);
    let ratio = first.max(second) as f64 / first.min(second) as f64;
    assert!(ratio < 2.0, "sizes too far apart: {} vs {}", first, second);

    Ok(())
}

#[test]
fn test_report_line_format() {
    assert_eq!(
        report_line(Path::new("random-banner.png"), 1_234_567),
        "generated random-banner.png 1234567"
    );

    let line = report_line(Path::new("random-banner.png"), 42);
    let mut parts = line.split_whitespace();
    assert_eq!(parts.next(), Some("generated"));
    assert_eq!(parts.next(), Some("random-banner.png"));
    let size: u64 = parts.next().and_then(|s| s.parse().ok()).unwrap_or(0);
    assert_eq!(size, 42);
    assert_eq!(parts.next(), None);
}
