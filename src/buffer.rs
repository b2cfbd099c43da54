/*!
 * Growable Byte Buffer
 * Append-only write side with a read cursor, handed out by the pool
 */

use bytes::Bytes;
use std::io;

/// Owned, growable byte buffer
///
/// Bytes are appended at the end and consumed from a read cursor. `len()` is
/// the number of unread bytes; `capacity()` is the reserved storage. The pool
/// only looks at `capacity()` and calls `reset()`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Buffer {
    data: Vec<u8>,
    read_pos: usize,
}

impl Buffer {
    /// Create an empty buffer without allocating
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty buffer with `capacity` bytes reserved
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            read_pos: 0,
        }
    }

    /// Number of unread bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len() - self.read_pos
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reserved storage in bytes
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Append bytes, growing the storage if needed
    #[inline]
    pub fn extend_from_slice(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    /// Reserve room for at least `additional` more bytes
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Unread bytes
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data[self.read_pos..]
    }

    /// Discard all but the first `n` unread bytes
    pub fn truncate(&mut self, n: usize) {
        if n == 0 {
            self.reset();
        } else {
            self.data.truncate(self.read_pos.saturating_add(n));
        }
    }

    /// Empty the buffer, keeping its storage
    #[inline]
    pub fn reset(&mut self) {
        self.data.clear();
        self.read_pos = 0;
    }

    /// Take the unread bytes as a `Vec<u8>`
    pub fn into_vec(mut self) -> Vec<u8> {
        if self.read_pos > 0 {
            self.data.drain(..self.read_pos);
        }
        self.data
    }

    /// Convert the unread bytes into an immutable `Bytes` handle
    ///
    /// The storage moves into the handle; a frozen buffer never returns to a pool.
    pub fn freeze(self) -> Bytes {
        let read_pos = self.read_pos;
        let mut bytes = Bytes::from(self.data);
        let _ = bytes.split_to(read_pos);
        bytes
    }
}

impl From<Vec<u8>> for Buffer {
    fn from(data: Vec<u8>) -> Self {
        Self { data, read_pos: 0 }
    }
}

impl AsRef<[u8]> for Buffer {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl io::Write for Buffer {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.extend_from_slice(buf);
        Ok(buf.len())
    }

    #[inline]
    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.extend_from_slice(buf);
        Ok(())
    }

    #[inline]
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl io::Read for Buffer {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        let unread = self.as_slice();
        let n = unread.len().min(out.len());
        out[..n].copy_from_slice(&unread[..n]);
        self.read_pos += n;

        // Fully drained: rewind so later writes reuse the front of the storage
        if self.read_pos == self.data.len() {
            self.reset();
        }
        Ok(n)
    }
}
