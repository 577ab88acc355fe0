//! Little-endian field reading over a seekable byte stream.

use std::io::{self, Read, Seek, SeekFrom};

/// Binary reader that addresses every read by absolute byte offset.
///
/// BMP header fields live at fixed offsets, so naming the offset at each
/// call site keeps the arithmetic auditable instead of relying on the
/// current stream position.
pub struct ByteReader<R> {
    inner: R,
}

impl<R: Read + Seek> ByteReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Read exactly `buf.len()` bytes starting at `offset`.
    pub fn read_bytes(&mut self, offset: u64, buf: &mut [u8]) -> io::Result<()> {
        self.inner.seek(SeekFrom::Start(offset))?;
        self.inner.read_exact(buf)
    }

    /// Read an unsigned 32-bit little-endian integer at `offset`.
    pub fn read_u32_le(&mut self, offset: u64) -> io::Result<u32> {
        let mut buf = [0u8; 4];
        self.read_bytes(offset, &mut buf)?;
        Ok(u32::from_le_bytes(buf))
    }

    /// Read a signed 32-bit little-endian integer at `offset`.
    pub fn read_i32_le(&mut self, offset: u64) -> io::Result<i32> {
        let mut buf = [0u8; 4];
        self.read_bytes(offset, &mut buf)?;
        Ok(i32::from_le_bytes(buf))
    }

    /// Read up to `buf.len()` bytes at `offset`, stopping early at end of
    /// stream.
    ///
    /// Returns the number of bytes actually read, which is less than
    /// `buf.len()` when the offset points past or near the end of the
    /// stream.
    pub fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.seek(SeekFrom::Start(offset))?;
        let mut filled = 0;
        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(filled)
    }
}
