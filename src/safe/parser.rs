//! Safe wrapper for AVCodecParserContext.

use crate::bindgen;
use crate::safe::codec::CodecId;
use crate::safe::error::{AvError, Result};
use std::ffi::c_int;
use tracing::{debug, warn};

/// Bitstream parser handle for a single codec.
///
/// Closed exactly once, either by [`Parser::close`] or on drop.
pub struct Parser {
    ptr: *mut bindgen::AVCodecParserContext,
    codec: CodecId,
}

impl Parser {
    /// Initialize a parser for `codec`.
    ///
    /// Fails with [`AvError::UnsupportedCodec`] when the linked libavcodec
    /// has no parser for it; nothing is allocated in that case.
    pub fn new(codec: CodecId) -> Result<Self> {
        let ptr = unsafe { bindgen::av_parser_init(codec.as_raw() as c_int) };
        if ptr.is_null() {
            warn!(%codec, "no parser available");
            let name = codec.ffmpeg_name().unwrap_or_else(|| codec.to_string());
            return Err(AvError::UnsupportedCodec(name));
        }

        debug!(%codec, "parser initialized");
        Ok(Parser { ptr, codec })
    }

    pub fn codec_id(&self) -> CodecId {
        self.codec
    }

    /// Codec name as reported by libavcodec.
    pub fn codec_name(&self) -> String {
        self.codec
            .ffmpeg_name()
            .unwrap_or_else(|| self.codec.to_string())
    }

    /// Release the parser now instead of at end of scope.
    pub fn close(self) {
        drop(self);
    }

    /// Get the raw pointer (for advanced FFI usage).
    ///
    /// # Safety
    /// The returned pointer is valid only for the lifetime of this Parser.
    pub unsafe fn as_ptr(&self) -> *mut bindgen::AVCodecParserContext {
        self.ptr
    }
}

impl Drop for Parser {
    fn drop(&mut self) {
        if !self.ptr.is_null() {
            debug!(codec = %self.codec, "closing parser");
            unsafe {
                bindgen::av_parser_close(self.ptr);
            }
            self.ptr = std::ptr::null_mut();
        }
    }
}

impl std::fmt::Debug for Parser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser")
            .field("codec", &self.codec)
            .finish_non_exhaustive()
    }
}
