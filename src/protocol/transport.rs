//! Transport Adapter
//!
//! The stream primitives the decoder is written against. Any
//! `BufRead` qualifies: `fill_buf` already exposes buffered bytes without
//! consuming them, which gives a real one-byte lookahead.

use std::io::{BufRead, ErrorKind, Read};

use bytes::Bytes;

use crate::error::{RespError, Result};

/// Longest line accepted before CRLF (64 KB)
pub const MAX_LINE_LEN: u64 = 64 * 1024;

/// Upper bound on up-front allocation for an exact-length read
const MAX_PREALLOC: usize = 64 * 1024;

/// Byte stream operations required by the decoder
pub trait Transport {
    /// Look at the next byte without consuming it
    fn peek_byte(&mut self) -> Result<u8>;

    /// Consume and return the next byte
    fn read_byte(&mut self) -> Result<u8>;

    /// Read one line and strip its CRLF terminator
    fn read_line_crlf(&mut self) -> Result<Bytes>;

    /// Read exactly `len` bytes
    fn read_exact_bytes(&mut self, len: usize) -> Result<Bytes>;
}

impl<R: BufRead + ?Sized> Transport for R {
    fn peek_byte(&mut self) -> Result<u8> {
        loop {
            match self.fill_buf() {
                Ok([]) => return Err(eof("stream closed before reply")),
                Ok(buf) => return Ok(buf[0]),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn read_byte(&mut self) -> Result<u8> {
        let byte = self.peek_byte()?;
        self.consume(1);
        Ok(byte)
    }

    fn read_line_crlf(&mut self) -> Result<Bytes> {
        let mut line = Vec::new();
        let read = Read::take(&mut *self, MAX_LINE_LEN).read_until(b'\n', &mut line)?;

        if line.last() != Some(&b'\n') {
            // A full window with the stream already finished is a truncated line
            if read as u64 == MAX_LINE_LEN && !at_eof(self)? {
                return Err(RespError::protocol(format!(
                    "line exceeds {} bytes without CRLF",
                    MAX_LINE_LEN
                )));
            }
            return Err(eof("stream closed mid-line"));
        }

        line.pop();
        if line.pop() != Some(b'\r') {
            return Err(RespError::protocol("line terminated by LF without CR"));
        }

        Ok(Bytes::from(line))
    }

    fn read_exact_bytes(&mut self, len: usize) -> Result<Bytes> {
        // Grow with the data actually received rather than trusting `len`.
        let mut buf = Vec::with_capacity(len.min(MAX_PREALLOC));
        Read::take(&mut *self, len as u64).read_to_end(&mut buf)?;

        if buf.len() < len {
            return Err(eof(&format!(
                "expected {} bytes, stream closed after {}",
                len,
                buf.len()
            )));
        }

        Ok(Bytes::from(buf))
    }
}

fn at_eof<R: BufRead + ?Sized>(src: &mut R) -> Result<bool> {
    match src.peek_byte() {
        Ok(_) => Ok(false),
        Err(e) if e.is_eof() => Ok(true),
        Err(e) => Err(e),
    }
}

fn eof(message: &str) -> RespError {
    RespError::Io(std::io::Error::new(ErrorKind::UnexpectedEof, message.to_string()))
}
