//! The complete open sequence: parser first, then the container.

use crate::safe::codec::CodecId;
use crate::safe::error::Result;
use crate::safe::format_context::FormatContext;
use crate::safe::parser::Parser;
use crate::safe::path::MediaPath;
use std::path::Path;
use tracing::debug;

/// A media file opened for a known codec.
///
/// Owns one parser handle and one opened format context. Fields drop in
/// declaration order, so the container is closed before the parser.
#[derive(Debug)]
pub struct MediaSource {
    format: FormatContext,
    parser: Parser,
}

impl MediaSource {
    /// Validate `path`, initialize a parser for `codec`, then open the
    /// container.
    ///
    /// The first failing step aborts the sequence; anything acquired
    /// before it is released on the way out.
    pub fn open<P: AsRef<Path>>(codec: CodecId, path: P) -> Result<Self> {
        let path = MediaPath::new(path)?;
        debug!(%codec, path = %path, "opening media source");

        let parser = Parser::new(codec)?;
        let format = FormatContext::open(&path)?;

        Ok(MediaSource { format, parser })
    }

    pub fn parser(&self) -> &Parser {
        &self.parser
    }

    pub fn format(&self) -> &FormatContext {
        &self.format
    }

    /// Split into the owned handles.
    pub fn into_parts(self) -> (Parser, FormatContext) {
        (self.parser, self.format)
    }

    /// Release both handles now.
    pub fn close(self) {
        let (parser, format) = self.into_parts();
        format.close();
        parser.close();
    }
}
