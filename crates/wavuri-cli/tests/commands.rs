//! File-based tests for the CLI commands.

use std::process::ExitCode;

use pretty_assertions::assert_eq;
use tempfile::tempdir;

use wavuri::parse_header;
use wavuri_cli::commands::{encode, inspect, tone};
use wavuri_cli::input::load_samples;

#[test]
fn encode_writes_wav_from_request_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("request.json");
    let wav = dir.path().join("out").join("clip.wav");
    std::fs::write(
        &input,
        r#"{"sample_rate": 8000, "samples": [0.0, 1.0, -1.0]}"#,
    )
    .unwrap();

    let code = encode::run(
        input.to_str().unwrap(),
        None,
        None,
        Some(wav.to_str().unwrap()),
        true,
    )
    .unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    let bytes = std::fs::read(&wav).unwrap();
    assert_eq!(bytes.len(), 50);
    assert_eq!(&bytes[44..], &[0x00, 0x00, 0xFF, 0x7F, 0x01, 0x80]);
    assert_eq!(parse_header(&bytes).unwrap().sample_rate, 8000);
}

#[test]
fn encode_reports_overrun() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("samples.txt");
    std::fs::write(&input, "0.1 0.2 0.3").unwrap();

    let err = encode::run(input.to_str().unwrap(), Some(8000), Some(2), None, false).unwrap_err();
    assert!(format!("{:#}", err).contains("buffer overrun"));
}

#[test]
fn encode_rejects_oversized_declared_len() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("samples.txt");
    std::fs::write(&input, "0.1 0.2").unwrap();

    let err = encode::run(
        input.to_str().unwrap(),
        Some(8000),
        Some(usize::MAX),
        None,
        false,
    )
    .unwrap_err();
    assert!(format!("{:#}", err).contains("exceeds the WAV size limit"));
}

#[test]
fn encode_reports_non_finite_sample() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("samples.txt");
    std::fs::write(&input, "0.1\ninf\n").unwrap();

    let err = encode::run(input.to_str().unwrap(), Some(8000), None, None, false).unwrap_err();
    assert!(format!("{:#}", err).contains("non-finite sample at index 1"));
}

#[test]
fn encode_requires_sample_rate() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("samples.json");
    std::fs::write(&input, "[0.0, 0.5]").unwrap();

    assert!(encode::run(input.to_str().unwrap(), None, None, None, false).is_err());
}

#[test]
fn encode_missing_file_names_path() {
    let err = encode::run("/nonexistent/samples.txt", Some(8000), None, None, false).unwrap_err();
    assert!(format!("{:#}", err).contains("/nonexistent/samples.txt"));
}

#[test]
fn tone_then_inspect() {
    let dir = tempdir().unwrap();
    let wav = dir.path().join("tone.wav");

    tone::run(1000.0, 0.25, 16000, 0.5, Some(wav.to_str().unwrap()), false).unwrap();

    let bytes = std::fs::read(&wav).unwrap();
    let info = parse_header(&bytes).unwrap();
    assert_eq!(info.sample_rate, 16000);
    assert_eq!(info.num_samples, 4000);

    let code = inspect::run(wav.to_str().unwrap(), true).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);
}

#[test]
fn tone_rejects_non_finite_parameters() {
    assert!(tone::run(f64::NAN, 1.0, 8000, 0.5, None, false).is_err());
}

#[test]
fn inspect_accepts_data_uri_file() {
    let dir = tempdir().unwrap();
    let uri_path = dir.path().join("clip.uri");
    let uri = wavuri::encode([0.25; 10], 10, 22050).unwrap();
    std::fs::write(&uri_path, format!("{}\n", uri)).unwrap();

    let code = inspect::run(uri_path.to_str().unwrap(), false).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    let bytes = inspect::wav_bytes(std::fs::read(&uri_path).unwrap()).unwrap();
    let output = inspect::inspect_bytes(&bytes).unwrap();
    assert_eq!(output.info.sample_rate, 22050);
    assert_eq!(
        output.pcm_hash.as_deref(),
        Some(wavuri::wav::pcm_hash(&bytes[44..]).as_str())
    );
}

#[test]
fn inspect_rejects_non_wav() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "this is not a wav file at all, just some text padding").unwrap();

    let err = inspect::run(path.to_str().unwrap(), false).unwrap_err();
    assert!(format!("{:#}", err).contains("RIFF"));
}

#[test]
fn load_samples_reads_all_shapes() {
    let dir = tempdir().unwrap();
    let cases = [
        ("a.json", r#"{"samples": [0.5, -0.5]}"#),
        ("b.json", "[0.5, -0.5]"),
        ("c.txt", "0.5\n-0.5\n"),
    ];

    for (name, contents) in cases {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        let input = load_samples(path.to_str().unwrap()).unwrap();
        assert_eq!(input.samples, vec![0.5, -0.5], "{}", name);
    }
}
