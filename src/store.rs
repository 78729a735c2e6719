//! In-memory byte store with a cursor, standing in for a file channel.
//! All data lives in a single `Vec<u8>` instead of an actual file device.
//!
//! Reads are bounded: reading past the end copies what remains and
//! reports the shorter count. Writes at explicit positions grow the
//! store when they extend past the current end.

use std::io::{self, Read, Seek, SeekFrom};

use crate::errors::FastStartError;

/// Largest store length that remains addressable
/// through `SeekFrom`'s signed 64-bit offsets.
pub const MAX_STORE_SIZE: u64 = i64::MAX as u64;

/// Randomly addressable in-memory byte sequence
/// with a current cursor position.
#[derive(Debug, Default, Clone)]
pub struct ByteStore {
    data: Vec<u8>,
    pos: u64,
}

impl ByteStore {
    /// Empty store, cursor at 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store over existing bytes, cursor at 0.
    pub fn from_vec(data: Vec<u8>) -> Result<Self, FastStartError> {
        if data.len() as u64 > MAX_STORE_SIZE {
            return Err(FastStartError::BadFileSize(data.len() as u64));
        }
        Ok(Self { data, pos: 0 })
    }

    /// Drains a reader to its end into a new store.
    pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self, FastStartError> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_vec(data)
    }

    /// Total size of the store in bytes.
    pub fn len(&self) -> u64 {
        self.data.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Current cursor position.
    pub fn pos(&self) -> u64 {
        self.pos
    }

    /// Moves the cursor. Positions past the end are allowed;
    /// cursor reads there simply return 0 bytes.
    pub fn set_pos(&mut self, pos: u64) {
        self.pos = pos;
    }

    /// Bytes remaining between the cursor and the end of the store.
    pub fn rem(&self) -> u64 {
        self.len().saturating_sub(self.pos)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Bounded read at the cursor. Fills as much of `buf` as the
    /// store can provide and returns the byte count, advancing
    /// the cursor by the same amount.
    pub fn read_buf(&mut self, buf: &mut [u8]) -> usize {
        let count = self.rem().min(buf.len() as u64) as usize;
        if count > 0 {
            let start = self.pos as usize;
            buf[..count].copy_from_slice(&self.data[start..start + count]);
        }
        self.pos += count as u64;
        count
    }

    /// Bounded read at an explicit position. Does not move the cursor.
    pub fn read_buf_at(&self, buf: &mut [u8], pos: u64) -> Result<usize, FastStartError> {
        if pos > self.len() {
            return Err(FastStartError::BadFilePosition { pos, max: self.len() });
        }
        let count = (self.len() - pos).min(buf.len() as u64) as usize;
        if count > 0 {
            let start = pos as usize;
            buf[..count].copy_from_slice(&self.data[start..start + count]);
        }
        Ok(count)
    }

    /// Appends bytes at the end of the store.
    pub fn append(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    /// Writes bytes at an explicit position, overwriting what is
    /// there. Writing past the current end extends the store;
    /// a gap between the old end and `pos` is zero-filled.
    pub fn write_at(&mut self, bytes: &[u8], pos: u64) -> Result<(), FastStartError> {
        let end = pos
            .checked_add(bytes.len() as u64)
            .filter(|end| *end <= MAX_STORE_SIZE)
            .ok_or(FastStartError::BadFileSize(pos))?;
        if end > self.len() {
            self.data.resize(end as usize, 0);
        }
        let start = pos as usize;
        self.data[start..start + bytes.len()].copy_from_slice(bytes);
        Ok(())
    }

    /// Copies `count` bytes starting at `pos` onto the end of
    /// `target`, bounded by the source length. Returns the number
    /// of bytes transferred.
    pub fn transfer_to(
        &self,
        pos: u64,
        count: u64,
        target: &mut ByteStore,
    ) -> Result<u64, FastStartError> {
        if pos > self.len() {
            return Err(FastStartError::BadFilePosition { pos, max: self.len() });
        }
        let moved = (self.len() - pos).min(count);
        let start = pos as usize;
        target.append(&self.data[start..start + moved as usize]);
        Ok(moved)
    }
}

/// Cursor reads, so `binrw` reads apply directly to a store.
impl Read for ByteStore {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(self.read_buf(buf))
    }
}

impl Seek for ByteStore {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let new_pos = match pos {
            SeekFrom::Start(p) => i128::from(p),
            SeekFrom::End(offset) => i128::from(self.len()) + i128::from(offset),
            SeekFrom::Current(offset) => i128::from(self.pos) + i128::from(offset),
        };
        self.pos = u64::try_from(new_pos).map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "invalid seek to a negative or overflowing position",
            )
        })?;
        Ok(self.pos)
    }
}
