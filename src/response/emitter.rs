//! Header and body writer for CGI responses.
//!
//! A CGI response is a header block, a blank line, then the body. No `Status`
//! line is written on success; the host treats its absence as 200.

use std::io::{self, Write};

/// Line terminator used in the header block.
pub const CRLF: &str = "\r\n";

/// Status sent when no page could be produced.
pub const FAILURE_STATUS: &str = "500 Internal Server Error";

/// Controls the header block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderOptions {
    /// Write a header block at all.
    pub emit: bool,
    /// Append `; charset=utf-8` to the content type.
    pub charset: bool,
}

impl Default for HeaderOptions {
    fn default() -> Self {
        Self {
            emit: true,
            charset: false,
        }
    }
}

/// Writes one response to an output stream.
pub struct ResponseEmitter<W: Write> {
    out: W,
    options: HeaderOptions,
    header_written: bool,
}

impl<W: Write> ResponseEmitter<W> {
    pub fn new(out: W, options: HeaderOptions) -> Self {
        Self {
            out,
            options,
            header_written: false,
        }
    }

    /// Write `Content-Type: <content_type>[; charset=utf-8]` and the blank
    /// line that closes the header block.
    ///
    /// Does nothing when headers are disabled or were already written.
    pub fn write_header(&mut self, content_type: &str) -> io::Result<()> {
        if !self.options.emit || self.header_written {
            return Ok(());
        }

        if self.options.charset {
            write!(self.out, "Content-Type: {}; charset=utf-8{}", content_type, CRLF)?;
        } else {
            write!(self.out, "Content-Type: {}{}", content_type, CRLF)?;
        }
        self.out.write_all(CRLF.as_bytes())?;
        self.header_written = true;
        Ok(())
    }

    /// Write body text verbatim.
    pub fn write_body(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())
    }

    /// Write a bare `Status: 500` header block with no body.
    ///
    /// Written even when headers are disabled so the host never mistakes the
    /// empty output for success. Does nothing once a header has been sent.
    pub fn write_failure(&mut self) -> io::Result<()> {
        if self.header_written {
            return Ok(());
        }

        write!(self.out, "Status: {}{}", FAILURE_STATUS, CRLF)?;
        self.out.write_all(CRLF.as_bytes())?;
        self.header_written = true;
        Ok(())
    }

    pub fn header_written(&self) -> bool {
        self.header_written
    }

    /// Flush and hand back the underlying stream.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
