//! Error types for the media source opener.

use crate::bindgen;
use std::ffi::c_int;
use std::io;
use thiserror::Error;

/// Failure kinds reported by the opener.
#[derive(Error, Debug)]
pub enum AvError {
    /// The linked libavcodec has no parser for this codec
    #[error("Unsupported codec: {0}")]
    UnsupportedCodec(String),

    /// Memory allocation failed inside FFmpeg
    #[error("Memory allocation failed")]
    Alloc,

    /// The input path is empty or does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// No demuxer recognized the input data
    #[error("Unrecognized format: {0}")]
    UnrecognizedFormat(String),

    /// Invalid argument provided
    #[error("Invalid argument: {0}")]
    InvalidArg(String),

    /// Any other FFmpeg error with code and message
    #[error("FFmpeg error ({code}): {message}")]
    Ffmpeg { code: c_int, message: String },
}

/// Build an `AVERROR` tag the way `FFERRTAG` does.
const fn fferrtag(a: u8, b: u8, c: u8, d: u8) -> c_int {
    -((a as c_int) | ((b as c_int) << 8) | ((c as c_int) << 16) | ((d as c_int) << 24))
}

pub(crate) const AVERROR_INVALIDDATA: c_int = fferrtag(b'I', b'N', b'D', b'A');
pub(crate) const AVERROR_DEMUXER_NOT_FOUND: c_int = fferrtag(0xF8, b'D', b'E', b'M');

impl AvError {
    /// Classify an `avformat_open_input` return code.
    ///
    /// Errno-style codes (`AVERROR(e)` is `-e`) are classified through
    /// [`io::ErrorKind`], so the mapping does not hard-code platform errno
    /// values.
    pub fn from_open_code(code: c_int, path: &str) -> Self {
        match code {
            AVERROR_INVALIDDATA | AVERROR_DEMUXER_NOT_FOUND => {
                return AvError::UnrecognizedFormat(path.to_string());
            }
            _ => {}
        }

        if let Some(errno) = code.checked_neg().filter(|e| *e > 0) {
            match io::Error::from_raw_os_error(errno).kind() {
                io::ErrorKind::NotFound => return AvError::FileNotFound(path.to_string()),
                io::ErrorKind::OutOfMemory => return AvError::Alloc,
                _ => {}
            }
        }

        AvError::from_code(code)
    }

    /// Create an AvError from an FFmpeg error code
    pub fn from_code(code: c_int) -> Self {
        let message = bindgen::get_error_string(code);
        AvError::Ffmpeg { code, message }
    }
}

/// Result type alias for operations that may fail with AvError
pub type Result<T> = std::result::Result<T, AvError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AvError::UnsupportedCodec("none".into());
        assert_eq!(err.to_string(), "Unsupported codec: none");

        let err = AvError::FileNotFound("/missing.h264".into());
        assert!(err.to_string().contains("/missing.h264"));
    }

    #[test]
    fn test_tag_values() {
        // Values from libavutil/error.h
        assert_eq!(AVERROR_INVALIDDATA, -1_094_995_529);
        assert_eq!(AVERROR_DEMUXER_NOT_FOUND, -1_296_385_272);
    }

    #[test]
    fn test_open_code_classification() {
        // AVERROR(ENOENT)
        assert!(matches!(
            AvError::from_open_code(-2, "a.mp4"),
            AvError::FileNotFound(_)
        ));
        assert!(matches!(
            AvError::from_open_code(AVERROR_INVALIDDATA, "a.bin"),
            AvError::UnrecognizedFormat(_)
        ));
        assert!(matches!(
            AvError::from_open_code(AVERROR_DEMUXER_NOT_FOUND, "a.bin"),
            AvError::UnrecognizedFormat(_)
        ));
        assert!(matches!(
            AvError::from_open_code(-12, "a.mp4"),
            AvError::Alloc
        ));
    }

    #[test]
    fn test_from_code_keeps_code() {
        let err = AvError::from_code(-1);
        if let AvError::Ffmpeg { code, message } = err {
            assert_eq!(code, -1);
            assert!(!message.is_empty());
        } else {
            panic!("expected Ffmpeg variant");
        }
    }
}
