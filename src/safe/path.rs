//! Validated media path.

use crate::safe::error::{AvError, Result};
use std::ffi::{CStr, CString};
use std::fmt;
use std::path::Path;

/// A non-empty, NUL-free, UTF-8 path ready to hand to libavformat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaPath {
    display: String,
    c_path: CString,
}

impl MediaPath {
    /// Validate a path.
    ///
    /// An empty path is reported as [`AvError::FileNotFound`]: there is
    /// nothing on disk it could name.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_str = path
            .as_ref()
            .to_str()
            .ok_or_else(|| AvError::InvalidArg("Path contains invalid UTF-8".into()))?;

        if path_str.is_empty() {
            return Err(AvError::FileNotFound("<empty path>".into()));
        }

        let c_path = CString::new(path_str)
            .map_err(|_| AvError::InvalidArg("Path contains null byte".into()))?;

        Ok(MediaPath {
            display: path_str.to_string(),
            c_path,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.display
    }

    pub fn as_c_str(&self) -> &CStr {
        &self.c_path
    }
}

impl fmt::Display for MediaPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

impl TryFrom<&str> for MediaPath {
    type Error = AvError;

    fn try_from(value: &str) -> Result<Self> {
        MediaPath::new(value)
    }
}
