//! Checks produced files against an independent WAV reader.

use std::io::Cursor;

use pretty_assertions::assert_eq;

use wavuri::wav::quantize;
use wavuri::{decode_data_uri, encode, encode_wav, AmplitudeList, Sine};

fn read_back(bytes: Vec<u8>) -> (hound::WavSpec, Vec<i16>) {
    let mut reader = hound::WavReader::new(Cursor::new(bytes)).expect("hound should open the file");
    let spec = reader.spec();
    let samples = reader
        .samples::<i16>()
        .collect::<Result<Vec<_>, _>>()
        .expect("samples should decode");
    (spec, samples)
}

#[test]
fn hound_reads_reference_scenario() {
    let uri = encode([0.0, 1.0, -1.0], 3, 8000).unwrap();
    let (spec, samples) = read_back(decode_data_uri(&uri).unwrap());

    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, 8000);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(spec.sample_format, hound::SampleFormat::Int);
    assert_eq!(samples, vec![0, 32767, -32767]);
}

#[test]
fn hound_reads_empty_file() {
    let uri = encode(std::iter::empty(), 0, 44100).unwrap();
    let (spec, samples) = read_back(decode_data_uri(&uri).unwrap());

    assert_eq!(spec.sample_rate, 44100);
    assert!(samples.is_empty());
}

#[test]
fn hound_reads_tone() {
    let rate = 22050;
    let n = Sine::samples_for(0.1, rate);
    let expected: Vec<i16> = Sine::new(440.0, 0.8, rate).take(n).map(quantize).collect();

    let result = encode_wav(Sine::new(440.0, 0.8, rate).take(n), n, rate).unwrap();
    let (spec, samples) = read_back(result.wav_data);

    assert_eq!(spec.sample_rate, rate);
    assert_eq!(samples.len(), n);
    assert_eq!(samples, expected);
}

#[test]
fn hound_reads_padded_short_sequence() {
    let list: AmplitudeList = [0.5, -0.5].into_iter().collect();
    let result = encode_wav(list, 5, 8000).unwrap();
    let (_, samples) = read_back(result.wav_data);

    assert_eq!(samples, vec![16384, -16383, 0, 0, 0]);
}
