use media_source::{AvError, CodecId, EmptyFormatContext, FormatContext, MediaPath, MediaSource};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Write a 16-bit mono PCM WAV file with `samples` samples of silence.
fn write_wav(path: &Path, samples: u32) {
    let data_len = samples * 2;
    let mut bytes = Vec::with_capacity(44 + data_len as usize);
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");
    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&16u32.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes()); // PCM
    bytes.extend_from_slice(&1u16.to_le_bytes()); // mono
    bytes.extend_from_slice(&8000u32.to_le_bytes());
    bytes.extend_from_slice(&16000u32.to_le_bytes());
    bytes.extend_from_slice(&2u16.to_le_bytes());
    bytes.extend_from_slice(&16u16.to_le_bytes());
    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_len.to_le_bytes());
    bytes.resize(44 + data_len as usize, 0);
    fs::write(path, bytes).unwrap();
}

/// Write a minimal Annex-B H.264 stream: SPS, PPS and an IDR slice.
fn write_h264(path: &Path) {
    const SPS: &[u8] = &[0x00, 0x00, 0x00, 0x01, 0x67, 0x42, 0x00, 0x0a, 0x80];
    const PPS: &[u8] = &[0x00, 0x00, 0x00, 0x01, 0x68, 0xce];
    const IDR: &[u8] = &[0x00, 0x00, 0x00, 0x01, 0x65, 0x88, 0x80];

    let mut bytes = Vec::new();
    for _ in 0..4 {
        bytes.extend_from_slice(SPS);
        bytes.extend_from_slice(PPS);
        bytes.extend_from_slice(IDR);
    }
    fs::write(path, bytes).unwrap();
}

#[test]
fn test_open_h264_stream() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("test.h264");
    write_h264(&path);

    let source = MediaSource::open(CodecId::H264, &path).unwrap();
    assert_eq!(source.parser().codec_id(), CodecId::H264);
    assert_eq!(source.format().format_name().as_deref(), Some("h264"));
    assert_eq!(source.format().nb_streams(), 1);

    let (parser, format) = source.into_parts();
    format.close();
    parser.close();
}

#[test]
fn test_open_valid_container() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tone.wav");
    write_wav(&path, 8000);

    let ctx = FormatContext::open(&MediaPath::new(&path).unwrap()).unwrap();
    assert!(!unsafe { ctx.as_ptr() }.is_null());
    assert_eq!(ctx.format_name().as_deref(), Some("wav"));
    assert_eq!(ctx.nb_streams(), 1);
    assert_eq!(ctx.path().as_str(), path.to_str().unwrap());
    ctx.close();
}

#[test]
fn test_two_step_open() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("clip.wav");
    write_wav(&path, 800);

    let empty = EmptyFormatContext::alloc().unwrap();
    let ctx = empty.open(&MediaPath::new(&path).unwrap()).unwrap();
    assert_eq!(ctx.nb_streams(), 1);
}

#[test]
fn test_media_source_releases_on_close_and_drop() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("clip.wav");
    write_wav(&path, 800);

    let source = MediaSource::open(CodecId::Aac, &path).unwrap();
    assert_eq!(source.parser().codec_id(), CodecId::Aac);
    assert_eq!(source.format().format_name().as_deref(), Some("wav"));
    source.close();

    // Dropped at end of scope instead of closed
    let source = MediaSource::open(CodecId::H264, &path).unwrap();
    let (parser, format) = source.into_parts();
    assert_eq!(parser.codec_name(), "h264");
    assert_eq!(format.nb_streams(), 1);
}

#[test]
fn test_open_nonexistent_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.h264");

    let err = MediaSource::open(CodecId::H264, &path).unwrap_err();
    assert!(
        matches!(err, AvError::FileNotFound(_)),
        "expected FileNotFound, got {:?}",
        err
    );
}

#[test]
fn test_open_empty_path() {
    let err = MediaSource::open(CodecId::H264, "").unwrap_err();
    assert!(matches!(err, AvError::FileNotFound(_)));
}

#[test]
fn test_open_zero_byte_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.unknown");
    fs::write(&path, b"").unwrap();

    let err = MediaSource::open(CodecId::H264, &path).unwrap_err();
    assert!(
        matches!(err, AvError::UnrecognizedFormat(_)),
        "expected UnrecognizedFormat, got {:?}",
        err
    );
}

#[test]
fn test_open_unrecognized_data() {
    let dir = TempDir::new().unwrap();
    // No demuxer claims this extension, so only the content is probed
    let path = dir.path().join("blob.unknown");
    fs::write(&path, vec![0u8; 4096]).unwrap();

    let err = FormatContext::open(&MediaPath::new(&path).unwrap()).unwrap_err();
    assert!(
        matches!(err, AvError::UnrecognizedFormat(_)),
        "expected UnrecognizedFormat, got {:?}",
        err
    );
}

#[test]
fn test_unsupported_codec() {
    let err = MediaSource::open(CodecId::Other(0), "test.h264").unwrap_err();
    assert!(matches!(err, AvError::UnsupportedCodec(_)));
}

#[test]
#[ignore] // Requires: MEDIA_SOURCE_FIXTURE=/path/to/test.h264
fn test_open_h264_fixture() {
    let fixture = std::env::var("MEDIA_SOURCE_FIXTURE").unwrap();
    let source = MediaSource::open(CodecId::H264, &fixture).unwrap();
    assert_eq!(source.format().format_name().as_deref(), Some("h264"));
    assert!(source.format().nb_streams() >= 1);
    println!("Opened {}: {:?}", fixture, source.format());
}
