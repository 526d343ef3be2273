//! Codec identifiers accepted by the parser.

use crate::bindgen;
use crate::safe::error::AvError;
use std::ffi::{CStr, CString};
use std::fmt;
use std::str::FromStr;

/// Codec identifier (mirrors the commonly used `AVCodecID` values)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecId {
    H264,
    Hevc,
    Mpeg2Video,
    Mpeg4,
    Vp8,
    Vp9,
    Av1,
    Aac,
    Mp3,
    Opus,
    /// Any other raw `AVCodecID` value
    Other(u32),
}

impl CodecId {
    /// The raw `AVCodecID` value.
    pub fn as_raw(self) -> bindgen::AVCodecID {
        match self {
            CodecId::H264 => bindgen::AVCodecID_AV_CODEC_ID_H264,
            CodecId::Hevc => bindgen::AVCodecID_AV_CODEC_ID_HEVC,
            CodecId::Mpeg2Video => bindgen::AVCodecID_AV_CODEC_ID_MPEG2VIDEO,
            CodecId::Mpeg4 => bindgen::AVCodecID_AV_CODEC_ID_MPEG4,
            CodecId::Vp8 => bindgen::AVCodecID_AV_CODEC_ID_VP8,
            CodecId::Vp9 => bindgen::AVCodecID_AV_CODEC_ID_VP9,
            CodecId::Av1 => bindgen::AVCodecID_AV_CODEC_ID_AV1,
            CodecId::Aac => bindgen::AVCodecID_AV_CODEC_ID_AAC,
            CodecId::Mp3 => bindgen::AVCodecID_AV_CODEC_ID_MP3,
            CodecId::Opus => bindgen::AVCodecID_AV_CODEC_ID_OPUS,
            CodecId::Other(raw) => raw as bindgen::AVCodecID,
        }
    }

    /// The codec name libavcodec reports for this id.
    ///
    /// Returns `None` for ids the library does not know.
    pub fn ffmpeg_name(self) -> Option<String> {
        let ptr = unsafe { bindgen::avcodec_get_name(self.as_raw()) };
        if ptr.is_null() {
            return None;
        }
        let name = unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned();
        // avcodec_get_name falls back to "unknown_codec" instead of NULL
        if name == "unknown_codec" {
            None
        } else {
            Some(name)
        }
    }
}

impl From<bindgen::AVCodecID> for CodecId {
    fn from(raw: bindgen::AVCodecID) -> Self {
        [
            CodecId::H264,
            CodecId::Hevc,
            CodecId::Mpeg2Video,
            CodecId::Mpeg4,
            CodecId::Vp8,
            CodecId::Vp9,
            CodecId::Av1,
            CodecId::Aac,
            CodecId::Mp3,
            CodecId::Opus,
        ]
        .into_iter()
        .find(|id| id.as_raw() == raw)
        .unwrap_or(CodecId::Other(raw as u32))
    }
}

impl FromStr for CodecId {
    type Err = AvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "h264" | "avc" => Ok(CodecId::H264),
            "hevc" | "h265" => Ok(CodecId::Hevc),
            "mpeg2video" | "mpeg2" => Ok(CodecId::Mpeg2Video),
            "mpeg4" => Ok(CodecId::Mpeg4),
            "vp8" => Ok(CodecId::Vp8),
            "vp9" => Ok(CodecId::Vp9),
            "av1" => Ok(CodecId::Av1),
            "aac" => Ok(CodecId::Aac),
            "mp3" => Ok(CodecId::Mp3),
            "opus" => Ok(CodecId::Opus),
            other => CodecId::from_descriptor_name(other),
        }
    }
}

impl CodecId {
    /// Resolve any codec name libavcodec knows, e.g. `mjpeg` or `vc1`.
    fn from_descriptor_name(name: &str) -> Result<Self, AvError> {
        let c_name =
            CString::new(name).map_err(|_| AvError::UnsupportedCodec(name.to_string()))?;
        let desc = unsafe { bindgen::avcodec_descriptor_get_by_name(c_name.as_ptr()) };
        if desc.is_null() {
            return Err(AvError::UnsupportedCodec(name.to_string()));
        }
        Ok(CodecId::from(unsafe { (*desc).id }))
    }
}

impl fmt::Display for CodecId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecId::H264 => f.write_str("h264"),
            CodecId::Hevc => f.write_str("hevc"),
            CodecId::Mpeg2Video => f.write_str("mpeg2video"),
            CodecId::Mpeg4 => f.write_str("mpeg4"),
            CodecId::Vp8 => f.write_str("vp8"),
            CodecId::Vp9 => f.write_str("vp9"),
            CodecId::Av1 => f.write_str("av1"),
            CodecId::Aac => f.write_str("aac"),
            CodecId::Mp3 => f.write_str("mp3"),
            CodecId::Opus => f.write_str("opus"),
            CodecId::Other(raw) => write!(f, "codec#{raw}"),
        }
    }
}
