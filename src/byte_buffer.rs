use std::cmp;
use std::convert::TryFrom;
use std::io::{Read, Write};

use crate::error::{Error, Result};
use crate::whence::Whence;

/// A growable buffer of bytes with independent read and write cursors.
///
/// Bytes in `[0, tellp())` have been written and bytes in `[tellg(), tellp())` have not yet been
/// read. The backing storage may extend past the write cursor; that tail is spare capacity which
/// later writes fill before any growth happens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ByteBuffer {
    storage: Vec<u8>,
    write_pos: usize,
    read_pos: usize,
    big_endian: bool,
}

impl ByteBuffer {
    /// Create a buffer with |len| zeroed bytes of capacity and both cursors at 0.
    pub fn new(len: usize) -> Self {
        ByteBuffer {
            storage: vec![0; len],
            ..Default::default()
        }
    }

    /// Create a buffer pre-loaded with |data|, all of which is unread.
    pub fn from_bytes(data: Vec<u8>) -> Self {
        ByteBuffer {
            write_pos: data.len(),
            storage: data,
            ..Default::default()
        }
    }

    pub fn with_big_endian(mut self, big_endian: bool) -> Self {
        self.big_endian = big_endian;
        self
    }

    /// Byte order used by the fixed-width integer helpers. Defaults to little-endian.
    pub fn big_endian(&self) -> bool {
        self.big_endian
    }

    pub fn set_big_endian(&mut self, big_endian: bool) {
        self.big_endian = big_endian;
    }

    /// Number of written bytes that haven't been read yet.
    pub fn size(&self) -> usize {
        self.write_pos - self.read_pos
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Length of the backing storage, written or not.
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    pub fn tellg(&self) -> usize {
        self.read_pos
    }

    pub fn tellp(&self) -> usize {
        self.write_pos
    }

    /// Drop all storage and put both cursors back at 0. The endianness setting is kept.
    pub fn reset(&mut self) {
        self.storage = Vec::new();
        self.write_pos = 0;
        self.read_pos = 0;
    }

    /// Everything written so far, including bytes that were already read but not yet compacted
    /// away.
    pub fn as_bytes(&self) -> &[u8] {
        &self.storage[..self.write_pos]
    }

    pub fn into_vec(mut self) -> Vec<u8> {
        self.storage.truncate(self.write_pos);
        self.storage
    }

    /// Append |bytes| at the write cursor, growing the storage if needed.
    pub fn put(&mut self, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }
        let available = self.storage.len() - self.write_pos;
        if available < bytes.len() {
            self.grow(bytes.len() - available);
        }
        let end = self.write_pos + bytes.len();
        self.storage[self.write_pos..end].copy_from_slice(bytes);
        self.write_pos = end;
    }

    /// Return the next |n| unread bytes without consuming them. A |n| of 0 returns every unread
    /// byte.
    pub fn peek(&self, n: usize) -> Result<&[u8]> {
        let size = self.size();
        if n > size {
            return Err(Error::OutOfRange(format!(
                "requested {} bytes, but only {} unread bytes remain",
                n, size
            )));
        }
        let n = if n == 0 { size } else { n };
        Ok(&self.storage[self.read_pos..self.read_pos + n])
    }

    /// Return the next |n| unread bytes and advance the read cursor by |n|.
    ///
    /// Like |peek|, a |n| of 0 returns every unread byte. The cursor still only advances by the
    /// |n| given, so in that case it doesn't move at all.
    pub fn get(&mut self, n: usize) -> Result<&[u8]> {
        let len = self.peek(n)?.len();
        let start = self.read_pos;
        self.read_pos += n;
        Ok(&self.storage[start..start + len])
    }

    /// Move the read cursor. |Whence::End| is relative to the write cursor. The resulting
    /// position must be strictly before the write cursor.
    pub fn seekg(&mut self, offset: i64, whence: Whence) -> Result<()> {
        let base = match whence {
            Whence::Beg => 0,
            Whence::Cur => self.read_pos,
            Whence::End => self.write_pos,
        };
        let pos = offset_position(base, offset)?;
        if pos >= self.write_pos {
            return Err(Error::OutOfRange(format!(
                "read position {} must be before the write position {}",
                pos, self.write_pos
            )));
        }
        self.read_pos = pos;
        Ok(())
    }

    /// Move the write cursor. |Whence::End| is relative to the end of the storage. The write
    /// cursor can't be placed before the read cursor; moving it past the end of the storage
    /// zero-fills the gap, much like |lseek| on a file followed by a write.
    pub fn seekp(&mut self, offset: i64, whence: Whence) -> Result<()> {
        let base = match whence {
            Whence::Beg => 0,
            Whence::Cur => self.write_pos,
            Whence::End => self.storage.len(),
        };
        let pos = offset_position(base, offset)?;
        if pos < self.read_pos {
            return Err(Error::OutOfRange(format!(
                "write position {} would be behind the read position {}",
                pos, self.read_pos
            )));
        }
        if pos > self.storage.len() {
            self.storage
                .try_reserve(pos - self.storage.len())
                .map_err(|e| {
                    Error::OutOfRange(format!(
                        "can't extend storage to write position {}: {}",
                        pos, e
                    ))
                })?;
            tracing::trace!(
                "seekp extending storage from {} to {} bytes",
                self.storage.len(),
                pos
            );
            self.storage.resize(pos, 0);
        }
        self.write_pos = pos;
        Ok(())
    }

    /// Make room for at least |needed| more bytes past the write cursor. Bytes that were already
    /// read are discarded first; the storage then doubles, or grows by exactly |needed| if that
    /// is larger.
    fn grow(&mut self, needed: usize) {
        self.compact();
        let old_len = self.storage.len();
        let grow_by = cmp::max(old_len, needed);
        self.storage.resize(old_len + grow_by, 0);
        tracing::trace!(
            "grew storage from {} to {} bytes",
            old_len,
            self.storage.len()
        );
    }

    fn compact(&mut self) {
        if self.read_pos == 0 {
            return;
        }
        tracing::trace!("compacting away {} already-read bytes", self.read_pos);
        self.storage.drain(..self.read_pos);
        self.write_pos -= self.read_pos;
        self.read_pos = 0;
    }
}

fn offset_position(base: usize, offset: i64) -> Result<usize> {
    let pos = base as i128 + offset as i128;
    usize::try_from(pos).map_err(|_| {
        Error::OutOfRange(format!(
            "offset {} from position {} is not a valid position",
            offset, base
        ))
    })
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(data: Vec<u8>) -> Self {
        ByteBuffer::from_bytes(data)
    }
}

impl From<&[u8]> for ByteBuffer {
    fn from(data: &[u8]) -> Self {
        ByteBuffer::from_bytes(data.to_vec())
    }
}

/// Build an empty buffer with |size| zeroed bytes of capacity, rejecting negative sizes.
impl TryFrom<i64> for ByteBuffer {
    type Error = Error;

    fn try_from(size: i64) -> Result<Self> {
        let len = usize::try_from(size).map_err(|_| {
            Error::InvalidArgument(format!("buffer size must be non-negative, got {}", size))
        })?;
        let mut storage = Vec::new();
        storage.try_reserve_exact(len).map_err(|e| {
            Error::InvalidArgument(format!("can't allocate a buffer of {} bytes: {}", len, e))
        })?;
        storage.resize(len, 0);
        Ok(ByteBuffer {
            storage,
            ..Default::default()
        })
    }
}

impl Read for ByteBuffer {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n = cmp::min(buf.len(), self.size());
        buf[..n].copy_from_slice(&self.storage[self.read_pos..self.read_pos + n]);
        self.read_pos += n;
        Ok(n)
    }
}

impl Write for ByteBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.put(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
