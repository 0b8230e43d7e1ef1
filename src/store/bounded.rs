use log::{debug, warn};

use crate::config::STORE_CAPACITY;
use crate::errors::StoreError;

use super::origin::SeekOrigin;

/// A fixed-capacity byte store addressed through a single cursor.
///
/// The cursor always stays in `[0, capacity]`: at `capacity` it sits exactly
/// at end-of-buffer, which is valid for seeks and zero-length reads but not
/// for moving any more bytes. Every operation checks the requested range
/// before touching the buffer; a failed operation leaves both the buffer and
/// the cursor untouched.
pub struct BoundedStore {
    /// Heap allocated buffer of `capacity` bytes, zeroed at creation.
    buffer: Box<[u8]>,
    /// Position of the next read or write.
    cursor: usize,
}

impl BoundedStore {
    pub fn new(capacity: usize) -> Self {
        BoundedStore {
            buffer: vec![0u8; capacity].into_boxed_slice(),
            cursor: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Bytes left between the cursor and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.cursor
    }

    /// Reads `len` bytes at the cursor into `dest`.
    ///
    /// The requested `len` is bounds-checked against the space left in the
    /// buffer before anything is copied. A `dest` shorter than `len` is a
    /// partial transfer: only `dest.len()` bytes move. The cursor advances by
    /// the bytes actually transferred, never the bytes requested, so the
    /// position cannot run ahead of the data delivered.
    pub fn read(&mut self, len: usize, dest: &mut [u8]) -> Result<usize, StoreError> {
        if len > self.remaining() {
            warn!(
                "read of {len} bytes at cursor {} would pass the end of the buffer ({})",
                self.cursor,
                self.capacity()
            );
            return Err(StoreError::OutOfRangeHigh);
        }
        if self.remaining() == 0 {
            // End-of-buffer is a boundary, not an error; only len == 0 gets here
            debug!("cursor is at the end of the buffer");
        }

        let transferred = len.min(dest.len());
        dest[..transferred].copy_from_slice(&self.buffer[self.cursor..self.cursor + transferred]);
        self.cursor += transferred;

        if transferred < len {
            warn!("short read: {transferred} of {len} requested bytes transferred");
        } else {
            debug!("read {transferred} bytes, cursor now {}", self.cursor);
        }
        Ok(transferred)
    }

    /// Overwrites `data.len()` bytes at the cursor and advances past them.
    pub fn write(&mut self, data: &[u8]) -> Result<usize, StoreError> {
        if data.len() > self.remaining() {
            warn!(
                "write of {} bytes at cursor {} would pass the end of the buffer ({})",
                data.len(),
                self.cursor,
                self.capacity()
            );
            return Err(StoreError::OutOfRangeHigh);
        }

        self.buffer[self.cursor..self.cursor + data.len()].copy_from_slice(data);
        self.cursor += data.len();

        debug!("wrote {} bytes, cursor now {}", data.len(), self.cursor);
        Ok(data.len())
    }

    /// Moves the cursor to `offset` relative to `origin` and returns the new
    /// position. Fails without touching the cursor if the target falls
    /// outside `[0, capacity]`.
    pub fn seek(&mut self, offset: i64, origin: SeekOrigin) -> Result<usize, StoreError> {
        let base = match origin {
            SeekOrigin::Start => 0,
            SeekOrigin::Current => self.cursor as i64,
            SeekOrigin::End => self.capacity() as i64,
        };
        let candidate = base
            .checked_add(offset)
            .ok_or(StoreError::SeekOutOfRange)?;

        if candidate < 0 || candidate > self.capacity() as i64 {
            warn!(
                "seek to {candidate} ({offset} from {origin:?}) is outside the buffer"
            );
            return Err(StoreError::SeekOutOfRange);
        }

        debug!("cursor moved {} -> {candidate}", self.cursor);
        self.cursor = candidate as usize;
        Ok(self.cursor)
    }
}

impl Default for BoundedStore {
    fn default() -> Self {
        BoundedStore::new(STORE_CAPACITY)
    }
}
