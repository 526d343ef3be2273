//! Safe wrappers for AVFormatContext.
//!
//! A context goes through two states. [`EmptyFormatContext`] is freshly
//! allocated and bound to nothing; [`EmptyFormatContext::open`] consumes it
//! and yields an opened [`FormatContext`]. Only the opened type exposes
//! any container state.

use crate::bindgen;
use crate::safe::error::{AvError, Result};
use crate::safe::path::MediaPath;
use std::ffi::CStr;
use std::ptr;
use tracing::{debug, info, warn};

/// An allocated format context that has not been bound to an input.
pub struct EmptyFormatContext {
    ptr: *mut bindgen::AVFormatContext,
}

impl EmptyFormatContext {
    /// Allocate an empty context.
    pub fn alloc() -> Result<Self> {
        let ptr = unsafe { bindgen::avformat_alloc_context() };
        if ptr.is_null() {
            warn!("avformat_alloc_context returned NULL");
            return Err(AvError::Alloc);
        }
        Ok(EmptyFormatContext { ptr })
    }

    /// Bind this context to `path` and read the container header.
    pub fn open(mut self, path: &MediaPath) -> Result<FormatContext> {
        // avformat_open_input owns the context from here on: it frees it
        // and nulls our copy on failure.
        let mut ctx = std::mem::replace(&mut self.ptr, ptr::null_mut());

        let ret = unsafe {
            bindgen::avformat_open_input(
                &mut ctx,
                path.as_c_str().as_ptr(),
                ptr::null(),
                ptr::null_mut(),
            )
        };

        if ret < 0 {
            let err = AvError::from_open_code(ret, path.as_str());
            warn!(path = %path, code = ret, error = %err, "failed to open input");
            return Err(err);
        }

        if ctx.is_null() {
            return Err(AvError::Alloc);
        }

        let opened = FormatContext {
            ptr: ctx,
            path: path.clone(),
        };
        let format = opened.format_name().unwrap_or_default();
        info!(path = %path, %format, streams = opened.nb_streams(), "opened input");
        Ok(opened)
    }
}

impl Drop for EmptyFormatContext {
    fn drop(&mut self) {
        if !self.ptr.is_null() {
            unsafe {
                bindgen::avformat_free_context(self.ptr);
            }
            self.ptr = ptr::null_mut();
        }
    }
}

/// An opened media container.
///
/// Closed exactly once, either by [`FormatContext::close`] or on drop.
pub struct FormatContext {
    ptr: *mut bindgen::AVFormatContext,
    path: MediaPath,
}

impl FormatContext {
    /// Open a media file for reading.
    pub fn open(path: &MediaPath) -> Result<Self> {
        EmptyFormatContext::alloc()?.open(path)
    }

    /// The path this context was opened from.
    pub fn path(&self) -> &MediaPath {
        &self.path
    }

    /// Get the number of streams found in the container header.
    pub fn nb_streams(&self) -> usize {
        unsafe { (*self.ptr).nb_streams as usize }
    }

    /// Get the container format name.
    pub fn format_name(&self) -> Option<String> {
        unsafe {
            let iformat = (*self.ptr).iformat;
            if iformat.is_null() {
                return None;
            }
            let name = (*iformat).name;
            if name.is_null() {
                return None;
            }
            Some(CStr::from_ptr(name).to_string_lossy().into_owned())
        }
    }

    /// Get the container duration in microseconds, or None if unknown.
    pub fn duration(&self) -> Option<i64> {
        let dur = unsafe { (*self.ptr).duration };
        if dur <= 0 {
            None
        } else {
            Some(dur)
        }
    }

    /// Get the container duration in seconds, or None if unknown.
    pub fn duration_secs(&self) -> Option<f64> {
        self.duration()
            .map(|d| d as f64 / bindgen::AV_TIME_BASE as f64)
    }

    /// Release the context now instead of at end of scope.
    pub fn close(self) {
        drop(self);
    }

    /// Get the raw pointer (for advanced FFI usage).
    ///
    /// # Safety
    /// The returned pointer is valid only for the lifetime of this FormatContext.
    pub unsafe fn as_ptr(&self) -> *mut bindgen::AVFormatContext {
        self.ptr
    }
}

impl Drop for FormatContext {
    fn drop(&mut self) {
        if !self.ptr.is_null() {
            debug!(path = %self.path, "closing input");
            unsafe {
                bindgen::avformat_close_input(&mut self.ptr);
            }
        }
    }
}

impl std::fmt::Debug for FormatContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormatContext")
            .field("path", &self.path.as_str())
            .field("format", &self.format_name())
            .field("nb_streams", &self.nb_streams())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_nonexistent() {
        let path = MediaPath::new("/nonexistent/file.h264").unwrap();
        let err = FormatContext::open(&path).unwrap_err();
        assert!(matches!(err, AvError::FileNotFound(_)));
    }

    #[test]
    fn test_alloc_then_drop_unopened() {
        let empty = EmptyFormatContext::alloc().unwrap();
        drop(empty);
    }

    #[test]
    fn test_failed_open_does_not_double_free() {
        let path = MediaPath::new("/nonexistent/clip.mp4").unwrap();
        for _ in 0..8 {
            let empty = EmptyFormatContext::alloc().unwrap();
            assert!(empty.open(&path).is_err());
        }
    }
}
