//! The byte pool - a growable, bounds-checked byte buffer.
//!
//! A [`BytePool`] owns a resizable sequence of bytes and exposes typed,
//! bounds-checked access to it: fixed-width integers at widths 1, 2, 4 and 8
//! bytes (byte, wyde, tetra, octa) in a selectable byte order, and arbitrary
//! untyped blobs. Pools have no concept of a current position; every accessor
//! takes an explicit offset so one pool can be shared by several independent
//! readers and writers. For linear traversal see [`Cursor`](crate::Cursor).
//!
//! # Example
//!
//! ```
//! use bytepool::{BytePool, PoolError};
//!
//! let mut pool = BytePool::new();
//! pool.use_big_endian();
//! pool.emit_byte(0x2A);
//! pool.emit_tetra(0x41424344);
//!
//! assert_eq!(pool.bytes(), b"*ABCD");
//! assert_eq!(pool.get_unsigned_tetra(1)?, 0x41424344);
//! # Ok::<(), PoolError>(())
//! ```

mod int;
mod tweak;

use bytes::{Bytes, BytesMut};

use crate::error::PoolError;
use crate::order::ByteOrder;

/// A growable byte buffer with bounds-checked, endianness-aware access.
///
/// Every read rejects spans that fall outside the current contents, even
/// partially. Writes accept any start offset up to and including the current
/// size; bytes written past the end extend the pool, which is how growth
/// happens. The pool shrinks only through explicit [`truncate`].
///
/// The byte order is a mutable per-pool setting consulted by every
/// multi-byte integer access. It matches the common case of parsing or
/// emitting a whole format in one consistent order, while still allowing a
/// caller to switch orders mid-stream for mixed-endianness formats.
/// Changing it never touches bytes already stored.
///
/// [`truncate`]: BytePool::truncate
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BytePool {
    data: BytesMut,
    order: ByteOrder,
}

impl BytePool {
    /// Creates an empty pool using the host's native byte order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a pool holding a copy of `initial`, native byte order.
    ///
    /// # Example
    ///
    /// ```
    /// use bytepool::BytePool;
    ///
    /// let pool = BytePool::from_slice(b"ABCD");
    /// assert_eq!(pool.size(), 4);
    /// ```
    pub fn from_slice(initial: &[u8]) -> Self {
        Self {
            data: BytesMut::from(initial),
            order: ByteOrder::Native,
        }
    }

    /// Creates a pool holding a copy of `initial` with network byte order
    /// (big-endian) preselected.
    pub fn new_big_endian(initial: &[u8]) -> Self {
        Self {
            data: BytesMut::from(initial),
            order: ByteOrder::Big,
        }
    }

    /// Creates a pool holding a copy of `initial` with reverse network byte
    /// order (little-endian) preselected.
    pub fn new_little_endian(initial: &[u8]) -> Self {
        Self {
            data: BytesMut::from(initial),
            order: ByteOrder::Little,
        }
    }

    /// Returns the number of bytes currently in the pool.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the pool holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns a view of the pool's full current contents.
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the pool and returns its contents.
    pub fn into_bytes(self) -> Bytes {
        self.data.freeze()
    }

    /// Returns the currently selected byte order.
    pub fn byte_order(&self) -> ByteOrder {
        self.order
    }

    /// Selects network byte order (big-endian) for following multi-byte
    /// integer reads and writes. Stored bytes are untouched.
    pub fn use_big_endian(&mut self) {
        self.order = ByteOrder::Big;
    }

    /// Selects reverse network byte order (little-endian) for following
    /// multi-byte integer reads and writes. Stored bytes are untouched.
    pub fn use_little_endian(&mut self) {
        self.order = ByteOrder::Little;
    }

    /// Selects the host's native byte order for following multi-byte
    /// integer reads and writes. Stored bytes are untouched.
    pub fn use_native_endian(&mut self) {
        self.order = ByteOrder::Native;
    }

    /// Returns whether network byte order is currently selected.
    pub fn is_big_endian(&self) -> bool {
        self.order == ByteOrder::Big
    }

    /// Returns whether reverse network byte order is currently selected.
    pub fn is_little_endian(&self) -> bool {
        self.order == ByteOrder::Little
    }

    /// Returns whether the host's native byte order is currently selected.
    pub fn is_native_endian(&self) -> bool {
        self.order == ByteOrder::Native
    }

    /// Extracts `len` bytes starting at `offset` as an owned copy.
    ///
    /// # Errors
    ///
    /// [`PoolError::OutOfRange`] if the span falls outside the pool, even
    /// partially.
    pub fn get_blob(&self, offset: usize, len: usize) -> Result<Bytes, PoolError> {
        let end = self.checked_span(offset, len)?;
        Ok(Bytes::copy_from_slice(&self.data[offset..end]))
    }

    /// Splices `blob` into the pool starting at `offset`, replacing existing
    /// bytes where they exist and extending the pool where the blob runs
    /// past the current end.
    ///
    /// # Errors
    ///
    /// [`PoolError::OutOfRange`] if `offset > size()`. Writing exactly at
    /// the end is permitted and grows the pool.
    pub fn set_blob(&mut self, offset: usize, blob: &[u8]) -> Result<(), PoolError> {
        self.splice(offset, blob)
    }

    /// Appends `blob` at the current end, growing the pool by its length.
    pub fn emit_blob(&mut self, blob: &[u8]) {
        self.data.extend_from_slice(blob);
    }

    /// Appends `count` copies of `value`, growing the pool by `count` bytes.
    ///
    /// # Example
    ///
    /// ```
    /// use bytepool::{BytePool, PoolError};
    ///
    /// let mut pool = BytePool::new();
    /// pool.emit_repeated_bytes(3, 0xFF)?;
    /// assert_eq!(pool.bytes(), &[0xFF, 0xFF, 0xFF]);
    /// # Ok::<(), PoolError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// [`PoolError::InvalidArgument`] if `size() + count` exceeds `usize`;
    /// the pool is untouched. An append can never shrink the pool.
    pub fn emit_repeated_bytes(&mut self, count: usize, value: u8) -> Result<(), PoolError> {
        let new_len =
            self.data
                .len()
                .checked_add(count)
                .ok_or(PoolError::InvalidArgument {
                    message: "repeat count overflows the pool's size",
                })?;
        self.data.resize(new_len, value);
        Ok(())
    }

    /// Returns the minimal non-negative pad length such that
    /// `(size() + pad) % alignment == 0`. The alignment need not be a
    /// power of two.
    ///
    /// # Errors
    ///
    /// [`PoolError::InvalidArgument`] if `alignment` is zero.
    pub fn bytes_until_alignment(&self, alignment: usize) -> Result<usize, PoolError> {
        if alignment == 0 {
            return Err(PoolError::InvalidArgument {
                message: "alignment must be positive",
            });
        }
        Ok((alignment - self.data.len() % alignment) % alignment)
    }

    /// Pads the pool to the given `alignment` by appending copies of the
    /// `padding` byte.
    ///
    /// # Errors
    ///
    /// [`PoolError::InvalidArgument`] if `alignment` is zero.
    pub fn align(&mut self, alignment: usize, padding: u8) -> Result<(), PoolError> {
        let pad = self.bytes_until_alignment(alignment)?;
        self.emit_repeated_bytes(pad, padding)
    }

    /// Truncates the pool to `new_size` bytes, discarding everything after
    /// that offset. Truncation never grows.
    ///
    /// # Errors
    ///
    /// [`PoolError::CannotGrow`] if `new_size` exceeds the current size.
    pub fn truncate(&mut self, new_size: usize) -> Result<(), PoolError> {
        if new_size > self.data.len() {
            return Err(PoolError::CannotGrow {
                requested: new_size,
                size: self.data.len(),
            });
        }
        self.data.truncate(new_size);
        Ok(())
    }

    /// Validates a read span and returns its exclusive end offset.
    fn checked_span(&self, offset: usize, len: usize) -> Result<usize, PoolError> {
        match offset.checked_add(len) {
            Some(end) if end <= self.data.len() => Ok(end),
            _ => Err(PoolError::OutOfRange {
                offset,
                len,
                size: self.data.len(),
            }),
        }
    }

    /// Reads `W` bytes starting at `offset` into a fixed array.
    fn get_array<const W: usize>(&self, offset: usize) -> Result<[u8; W], PoolError> {
        let end = self.checked_span(offset, W)?;
        let mut array = [0u8; W];
        array.copy_from_slice(&self.data[offset..end]);
        Ok(array)
    }

    /// Writes `bytes` starting at `offset`, extending the pool if the span
    /// runs past the current end. Bounds are checked before any mutation.
    fn splice(&mut self, offset: usize, bytes: &[u8]) -> Result<(), PoolError> {
        if offset > self.data.len() {
            return Err(PoolError::OutOfRange {
                offset,
                len: bytes.len(),
                size: self.data.len(),
            });
        }
        let end = offset + bytes.len();
        if end > self.data.len() {
            self.data.resize(end, 0);
        }
        self.data[offset..end].copy_from_slice(bytes);
        Ok(())
    }
}
