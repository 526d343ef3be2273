//! Open media files through FFmpeg's libavcodec and libavformat.
//!
//! The crate is split in two layers:
//!
//! 1. **`bindgen`** - raw bindings generated at build time, restricted to the
//!    parser and format-context lifecycle calls
//! 2. **`safe`** - checked, RAII-managed handles on top of them
//!
//! # Prerequisites
//!
//! You need FFmpeg development libraries installed:
//!
//! ```sh
//! # Ubuntu/Debian
//! sudo apt install libavformat-dev libavcodec-dev libavutil-dev
//!
//! # Fedora
//! sudo dnf install ffmpeg-devel
//!
//! # macOS
//! brew install ffmpeg
//! ```
//!
//! # Example
//!
//! ```no_run
//! use media_source::{CodecId, MediaPath, Parser, FormatContext};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let parser = Parser::new(CodecId::H264)?;
//!     let ctx = FormatContext::open(&MediaPath::new("test.h264")?)?;
//!
//!     println!("{} -> {:?}", parser.codec_name(), ctx.format_name());
//!
//!     // Both handles are released here
//!     Ok(())
//! }
//! ```

pub mod bindgen;
pub mod safe;

// Re-export the safe API at the crate root for convenience
pub use safe::{
    AvError, CodecId, EmptyFormatContext, FormatContext, MediaPath, MediaSource, Parser, Result,
};
