//! Raw FFI bindings generated at build time by bindgen.
//!
//! Only the parser and format-context lifecycle calls plus a handful of
//! diagnostics helpers are allowlisted in `build.rs`. Everything here is
//! `unsafe`; use the [`crate::safe`] module instead.

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(dead_code)]
#![allow(clippy::all)]

use std::ffi::{c_char, c_int, CStr};
use std::fmt;

include!(concat!(env!("OUT_DIR"), "/bindings.rs"));

/// Get a Rust String from an FFmpeg error code.
pub fn get_error_string(errnum: c_int) -> String {
    let mut buf = [0 as c_char; 256];
    let ret = unsafe { av_strerror(errnum, buf.as_mut_ptr(), buf.len()) };
    if ret < 0 {
        return format!("unknown error {errnum}");
    }
    let cstr = unsafe { CStr::from_ptr(buf.as_ptr()) };
    cstr.to_string_lossy().into_owned()
}

/// A `major.minor.micro` library version, unpacked from the
/// `LIBAV*_VERSION_INT` encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LibraryVersion {
    pub major: u32,
    pub minor: u32,
    pub micro: u32,
}

impl LibraryVersion {
    pub fn from_int(version: u32) -> Self {
        LibraryVersion {
            major: (version >> 16) & 0xff,
            minor: (version >> 8) & 0xff,
            micro: version & 0xff,
        }
    }
}

impl fmt::Display for LibraryVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)
    }
}

/// Versions of the libraries this binary is linked against.
#[derive(Debug, Clone, Copy)]
pub struct LibraryVersions {
    pub avformat: LibraryVersion,
    pub avcodec: LibraryVersion,
}

pub fn library_versions() -> LibraryVersions {
    let (avformat, avcodec) = unsafe { (avformat_version(), avcodec_version()) };
    LibraryVersions {
        avformat: LibraryVersion::from_int(avformat as u32),
        avcodec: LibraryVersion::from_int(avcodec as u32),
    }
}
