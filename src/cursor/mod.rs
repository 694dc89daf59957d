//! Sequential traversal of a pool.
//!
//! A [`Cursor`] is a disposable, non-owning view: a borrow of one
//! [`BytePool`] plus a mutable offset. `parse_*` operations read at the
//! current offset and advance by the value's width; `peek_*` operations read
//! without advancing. Every operation is a deterministic function of the
//! pool contents, the pool's byte order and the offset.
//!
//! The offset is deliberately unbounded: [`skip`](Cursor::skip) never
//! bounds-checks, and a cursor may be constructed or driven past the end of
//! the pool without failing. Only a later read surfaces the problem, which
//! lets a cursor sit at the end of a pool that is still growing.
//!
//! # Example
//!
//! ```
//! use bytepool::{BytePool, Cursor, PoolError};
//!
//! let pool = BytePool::new_big_endian(&[0x01, 0x02, 0x03, 0x04]);
//! let mut cursor = Cursor::new(&pool);
//!
//! assert_eq!(cursor.parse_unsigned_wyde()?, 0x0102);
//! assert_eq!(cursor.parse_unsigned_wyde()?, 0x0304);
//! assert!(cursor.eof());
//! # Ok::<(), PoolError>(())
//! ```

use bytes::Bytes;

use crate::error::PoolError;
use crate::pool::BytePool;

/// A positional view into a [`BytePool`] for linear parsing.
///
/// Several cursors may walk the same pool at once; none of them interferes
/// with the others or with direct offset-based access, because the pool
/// itself has no notion of position.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    pool: &'a BytePool,
    offset: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor over `pool` positioned at its beginning.
    pub fn new(pool: &'a BytePool) -> Self {
        Self { pool, offset: 0 }
    }

    /// Creates a cursor over `pool` positioned at `offset`. The offset may
    /// point past the end of the pool; reads there fail, not the
    /// construction.
    pub fn with_offset(pool: &'a BytePool, offset: usize) -> Self {
        Self { pool, offset }
    }

    /// Returns the cursor's current offset into the pool.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns true if the cursor has passed the last byte currently in the
    /// pool. This is a liveness hint, not a hard boundary: peeking is
    /// rejected at eof only by the usual bounds checks, and
    /// `parse_blob(0)` still succeeds.
    pub fn eof(&self) -> bool {
        self.offset >= self.pool.size()
    }

    /// Reads the unsigned byte at the current offset and advances by one.
    ///
    /// On failure the offset is unchanged; the same holds for every
    /// `parse_*` operation.
    ///
    /// # Errors
    ///
    /// [`PoolError::OutOfRange`] if the byte lies outside the pool.
    pub fn parse_unsigned_byte(&mut self) -> Result<u8, PoolError> {
        let value = self.pool.get_unsigned_byte(self.offset)?;
        self.offset += 1;
        Ok(value)
    }

    /// Reads the signed byte at the current offset and advances by one.
    pub fn parse_signed_byte(&mut self) -> Result<i8, PoolError> {
        let value = self.pool.get_signed_byte(self.offset)?;
        self.offset += 1;
        Ok(value)
    }

    /// Reads the unsigned wyde at the current offset in the pool's byte
    /// order and advances by two.
    pub fn parse_unsigned_wyde(&mut self) -> Result<u16, PoolError> {
        let value = self.pool.get_unsigned_wyde(self.offset)?;
        self.offset += 2;
        Ok(value)
    }

    /// Reads the signed wyde at the current offset in the pool's byte order
    /// and advances by two.
    pub fn parse_signed_wyde(&mut self) -> Result<i16, PoolError> {
        let value = self.pool.get_signed_wyde(self.offset)?;
        self.offset += 2;
        Ok(value)
    }

    /// Reads the unsigned tetra at the current offset in the pool's byte
    /// order and advances by four.
    pub fn parse_unsigned_tetra(&mut self) -> Result<u32, PoolError> {
        let value = self.pool.get_unsigned_tetra(self.offset)?;
        self.offset += 4;
        Ok(value)
    }

    /// Reads the signed tetra at the current offset in the pool's byte
    /// order and advances by four.
    pub fn parse_signed_tetra(&mut self) -> Result<i32, PoolError> {
        let value = self.pool.get_signed_tetra(self.offset)?;
        self.offset += 4;
        Ok(value)
    }

    /// Reads the unsigned octa at the current offset in the pool's byte
    /// order and advances by eight.
    pub fn parse_unsigned_octa(&mut self) -> Result<u64, PoolError> {
        let value = self.pool.get_unsigned_octa(self.offset)?;
        self.offset += 8;
        Ok(value)
    }

    /// Reads the signed octa at the current offset in the pool's byte order
    /// and advances by eight.
    pub fn parse_signed_octa(&mut self) -> Result<i64, PoolError> {
        let value = self.pool.get_signed_octa(self.offset)?;
        self.offset += 8;
        Ok(value)
    }

    /// Reads an unsigned integer of the given `width` (1, 2, 4 or 8 bytes)
    /// at the current offset in the pool's byte order and advances by
    /// `width`.
    ///
    /// # Errors
    ///
    /// [`PoolError::UnsupportedWidth`] for any other width;
    /// [`PoolError::OutOfRange`] if the span leaves the pool. The offset is
    /// unchanged on failure.
    pub fn parse_unsigned_integer(&mut self, width: usize) -> Result<u64, PoolError> {
        let value = self.pool.get_unsigned_integer(width, self.offset)?;
        self.offset += width;
        Ok(value)
    }

    /// Reads `len` bytes at the current offset and advances by `len`.
    ///
    /// # Errors
    ///
    /// [`PoolError::OutOfRange`] if the blob lies outside the pool, even
    /// partially. The offset is unchanged on failure.
    pub fn parse_blob(&mut self, len: usize) -> Result<Bytes, PoolError> {
        let blob = self.pool.get_blob(self.offset, len)?;
        self.offset += len;
        Ok(blob)
    }

    /// Reads the unsigned byte at the current offset without advancing.
    pub fn peek_unsigned_byte(&self) -> Result<u8, PoolError> {
        self.pool.get_unsigned_byte(self.offset)
    }

    /// Reads the signed byte at the current offset without advancing.
    pub fn peek_signed_byte(&self) -> Result<i8, PoolError> {
        self.pool.get_signed_byte(self.offset)
    }

    /// Reads the unsigned wyde at the current offset without advancing.
    pub fn peek_unsigned_wyde(&self) -> Result<u16, PoolError> {
        self.pool.get_unsigned_wyde(self.offset)
    }

    /// Reads the signed wyde at the current offset without advancing.
    pub fn peek_signed_wyde(&self) -> Result<i16, PoolError> {
        self.pool.get_signed_wyde(self.offset)
    }

    /// Reads the unsigned tetra at the current offset without advancing.
    pub fn peek_unsigned_tetra(&self) -> Result<u32, PoolError> {
        self.pool.get_unsigned_tetra(self.offset)
    }

    /// Reads the signed tetra at the current offset without advancing.
    pub fn peek_signed_tetra(&self) -> Result<i32, PoolError> {
        self.pool.get_signed_tetra(self.offset)
    }

    /// Reads the unsigned octa at the current offset without advancing.
    pub fn peek_unsigned_octa(&self) -> Result<u64, PoolError> {
        self.pool.get_unsigned_octa(self.offset)
    }

    /// Reads the signed octa at the current offset without advancing.
    pub fn peek_signed_octa(&self) -> Result<i64, PoolError> {
        self.pool.get_signed_octa(self.offset)
    }

    /// Moves the cursor forwards by `delta` bytes, passing over part of the
    /// byte sequence without parsing. Never bounds-checked: an offset past
    /// the end only surfaces on the next read. The offset saturates at
    /// `usize::MAX` rather than wrapping backwards.
    pub fn skip(&mut self, delta: usize) {
        self.offset = self.offset.saturating_add(delta);
    }

    /// Moves the cursor backwards by `delta` bytes.
    ///
    /// # Errors
    ///
    /// [`PoolError::InvalidArgument`] if the move would take the offset
    /// below zero. The offset is never clamped.
    pub fn unskip(&mut self, delta: usize) -> Result<(), PoolError> {
        self.offset = self
            .offset
            .checked_sub(delta)
            .ok_or(PoolError::InvalidArgument {
                message: "cursor moved below offset zero",
            })?;
        Ok(())
    }
}
