use byteorder::{ByteOrder, LittleEndian};

use crate::error::{Error, Result};

/// A cursor over a pre-sized packet buffer.
///
/// See: 4.2. ByteStream
pub struct ByteStream {
    buf: Vec<u8>,
    pos: usize,
}

impl ByteStream {
    /// Allocates a zero-filled buffer of `capacity` bytes.
    ///
    /// See: * 3. DATA MODEL (Packet sizing)
    ///      * §7 `OutOfMemory`.
    pub fn new(capacity: usize) -> Result<Self> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(capacity).map_err(|e| {
            Error::OutOfMemory(format!(
                "failed to allocate {} byte packet buffer: {}",
                capacity, e
            ))
        })?;
        buf.resize(capacity, 0);
        Ok(Self { buf, pos: 0 })
    }

    /// Current cursor position.
    pub fn tell(&self) -> usize {
        self.pos
    }

    /// Writes one byte and advances the cursor.
    pub fn put_u8(&mut self, v: u8) -> Result<()> {
        self.ensure(1)?;
        self.buf[self.pos] = v;
        self.pos += 1;
        Ok(())
    }

    /// Writes a little-endian 32-bit word and advances the cursor.
    pub fn put_le32(&mut self, v: u32) -> Result<()> {
        self.ensure(4)?;
        LittleEndian::write_u32(&mut self.buf[self.pos..self.pos + 4], v);
        self.pos += 4;
        Ok(())
    }

    /// Copies `data` in and advances the cursor by its length.
    pub fn put_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.ensure(data.len())?;
        self.buf[self.pos..self.pos + data.len()].copy_from_slice(data);
        self.pos += data.len();
        Ok(())
    }

    /// Moves the cursor by `delta` bytes, forward or backward.
    pub fn seek_relative(&mut self, delta: isize) -> Result<()> {
        let new_pos = self.pos as isize + delta;
        if new_pos < 0 || new_pos as usize > self.buf.len() {
            return Err(Error::InvalidPosition(format!(
                "seek_relative({}) from {} out of bounds [0, {}]",
                delta,
                self.pos,
                self.buf.len()
            )));
        }
        self.pos = new_pos as usize;
        Ok(())
    }

    fn ensure(&mut self, n: usize) -> Result<()> {
        if self.pos + n > self.buf.len() {
            return Err(Error::BufferOverflow(format!(
                "byte stream write of {} bytes at {} exceeds {} byte capacity",
                n,
                self.pos,
                self.buf.len()
            )));
        }
        Ok(())
    }

    /// Consumes the stream, truncating the backing buffer to the
    /// high-water mark `len` (the final packet size).
    pub fn finish(mut self, len: usize) -> Vec<u8> {
        self.buf.truncate(len);
        self.buf
    }
}
