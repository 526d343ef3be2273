//! Safe, idiomatic Rust API for opening media sources.
//!
//! Every FFmpeg call is checked and every handle is released through RAII,
//! including on early returns.
//!
//! # Example
//!
//! ```no_run
//! use media_source::safe::{CodecId, MediaSource};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = MediaSource::open(CodecId::H264, "test.h264")?;
//!
//!     println!("Format: {:?}", source.format().format_name());
//!     println!("Streams: {}", source.format().nb_streams());
//!
//!     Ok(())
//! }
//! ```

pub mod codec;
pub mod error;
pub mod format_context;
pub mod parser;
pub mod path;
pub mod source;

pub use codec::CodecId;
pub use error::{AvError, Result};
pub use format_context::{EmptyFormatContext, FormatContext};
pub use parser::Parser;
pub use path::MediaPath;
pub use source::MediaSource;
