use std::fs;

use abf_cli::{run, CliConfig, CliError};
use abf_core::{AbfError, InstrumentScaleMode};
use byteorder::{ByteOrder, LittleEndian};
use tempfile::tempdir;

#[test]
fn test_run_writes_file_from_json() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("samples.json");
    let output = dir.path().join("out.abf");
    fs::write(&input, "[[1.0, -2.0, 3.0], [400.0, -500.0, 600.0]]").unwrap();

    let config = CliConfig {
        input_path: input,
        output_path: output.clone(),
        sample_rate_hz: 10_000.0,
        units: vec!["mV".into(), "pA".into()],
        instrument_scale: InstrumentScaleMode::PerChannel,
    };

    let summary = run(&config).unwrap();
    assert_eq!(summary.channels, 2);
    assert_eq!(summary.samples_per_channel, 3);
    assert_eq!(summary.scales[0].step, 1);
    assert_eq!(summary.scales[1].step, 2);
    assert_eq!(summary.scales[1].unit, "pA");

    let bytes = fs::read(&output).unwrap();
    assert_eq!(bytes.len(), summary.file_bytes);
    assert_eq!(&bytes[0..4], b"ABF ");
    assert_eq!(LittleEndian::read_i16(&bytes[120..122]), 2);
    assert_eq!(LittleEndian::read_f32(&bytes[122..126]), 50.0);
    assert_eq!(&bytes[610..618], b"pA      ");

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["data_blocks"], 1);
}

#[test]
fn test_run_single_channel_default_units() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("one.json");
    fs::write(&input, "[1.0, -2.0, 3.0, -4.0]").unwrap();

    let config = CliConfig {
        input_path: input,
        output_path: dir.path().join("one.abf"),
        ..CliConfig::default()
    };

    let summary = run(&config).unwrap();
    assert_eq!(summary.channels, 1);
    assert_eq!(summary.scales[0].unit, "mV");
}

#[test]
fn test_run_reports_shape_error() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("cube.json");
    let output = dir.path().join("cube.abf");
    fs::write(&input, "[[[1.0]], [[2.0]]]").unwrap();

    let config = CliConfig {
        input_path: input,
        output_path: output.clone(),
        ..CliConfig::default()
    };

    let err = run(&config).unwrap_err();
    assert!(matches!(err, CliError::Abf(AbfError::Shape(_))));
    assert!(!output.exists());
}

#[test]
fn test_run_missing_input() {
    let dir = tempdir().unwrap();
    let config = CliConfig {
        input_path: dir.path().join("absent.json"),
        output_path: dir.path().join("x.abf"),
        ..CliConfig::default()
    };

    assert!(matches!(run(&config), Err(CliError::Io(_))));
}

#[test]
fn test_run_invalid_json() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("bad.json");
    fs::write(&input, "[1.0, ").unwrap();

    let config = CliConfig {
        input_path: input,
        output_path: dir.path().join("x.abf"),
        ..CliConfig::default()
    };

    assert!(matches!(run(&config), Err(CliError::Json(_))));
}
