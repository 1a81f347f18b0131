//! Append-only big-endian byte buffer.
//!
//! Every multi-byte integer is written most-significant byte first
//! (network byte order). The buffer never shrinks.

use crate::{Error, Result};
use std::net::Ipv4Addr;

/// Growable output buffer for one encode pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Create an empty writer with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    pub fn append_u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    pub fn append_u16(&mut self, value: u16) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    pub fn append_u32(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    pub fn append_u64(&mut self, value: u64) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Parse a dotted-quad address and append its four octets.
    ///
    /// Nothing is appended if `text` is not a valid IPv4 address.
    pub fn append_ipv4(&mut self, text: &str) -> Result<()> {
        let addr: Ipv4Addr = text
            .parse()
            .map_err(|_| Error::AddressFormat(text.to_string()))?;
        self.append_ipv4_addr(addr);
        Ok(())
    }

    pub fn append_ipv4_addr(&mut self, addr: Ipv4Addr) {
        self.buf.extend_from_slice(&addr.octets());
    }

    /// Append bytes verbatim.
    pub fn append_raw(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Append `count` zero bytes.
    pub fn append_zeros(&mut self, count: usize) {
        self.buf.resize(self.buf.len() + count, 0);
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}
