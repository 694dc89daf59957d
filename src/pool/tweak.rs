//! Read-modify-write helpers on a pool.
//!
//! Each tweak fetches the value at a fixed offset with the matching getter,
//! applies a caller-supplied transform, and stores the result back with the
//! matching setter at the same offset and width. Failures are exactly those
//! of the underlying getter. The read happens before the write; there is no
//! further atomicity.

use crate::error::PoolError;

use super::BytePool;

impl BytePool {
    /// Replaces the unsigned byte at `offset` with `transform` applied to
    /// its current value.
    ///
    /// # Example
    ///
    /// ```
    /// use bytepool::{BytePool, PoolError};
    ///
    /// let mut pool = BytePool::from_slice(b"XYZ");
    /// pool.tweak_unsigned_byte(2, |_| 0x20)?;
    /// assert_eq!(pool.bytes(), b"XY ");
    /// # Ok::<(), PoolError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// [`PoolError::OutOfRange`] if the byte lies outside the pool.
    pub fn tweak_unsigned_byte(
        &mut self,
        offset: usize,
        transform: impl FnOnce(u8) -> u8,
    ) -> Result<(), PoolError> {
        let value = self.get_unsigned_byte(offset)?;
        self.set_byte(offset, transform(value))
    }

    /// Replaces the signed byte at `offset` with `transform` applied to its
    /// current value.
    ///
    /// # Errors
    ///
    /// [`PoolError::OutOfRange`] if the byte lies outside the pool.
    pub fn tweak_signed_byte(
        &mut self,
        offset: usize,
        transform: impl FnOnce(i8) -> i8,
    ) -> Result<(), PoolError> {
        let value = self.get_signed_byte(offset)?;
        self.set_byte(offset, transform(value) as u8)
    }

    /// Replaces the unsigned wyde at `offset` with `transform` applied to
    /// its current value, in the currently selected byte order.
    ///
    /// # Errors
    ///
    /// [`PoolError::OutOfRange`] if the wyde lies outside the pool, even
    /// partially.
    pub fn tweak_unsigned_wyde(
        &mut self,
        offset: usize,
        transform: impl FnOnce(u16) -> u16,
    ) -> Result<(), PoolError> {
        let value = self.get_unsigned_wyde(offset)?;
        self.set_wyde(offset, transform(value))
    }

    /// Replaces the signed wyde at `offset` with `transform` applied to its
    /// current value, in the currently selected byte order.
    ///
    /// # Errors
    ///
    /// [`PoolError::OutOfRange`] if the wyde lies outside the pool, even
    /// partially.
    pub fn tweak_signed_wyde(
        &mut self,
        offset: usize,
        transform: impl FnOnce(i16) -> i16,
    ) -> Result<(), PoolError> {
        let value = self.get_signed_wyde(offset)?;
        self.set_wyde(offset, transform(value) as u16)
    }

    /// Replaces the unsigned tetra at `offset` with `transform` applied to
    /// its current value, in the currently selected byte order.
    ///
    /// # Errors
    ///
    /// [`PoolError::OutOfRange`] if the tetra lies outside the pool, even
    /// partially.
    pub fn tweak_unsigned_tetra(
        &mut self,
        offset: usize,
        transform: impl FnOnce(u32) -> u32,
    ) -> Result<(), PoolError> {
        let value = self.get_unsigned_tetra(offset)?;
        self.set_tetra(offset, transform(value))
    }

    /// Replaces the signed tetra at `offset` with `transform` applied to
    /// its current value, in the currently selected byte order.
    ///
    /// # Errors
    ///
    /// [`PoolError::OutOfRange`] if the tetra lies outside the pool, even
    /// partially.
    pub fn tweak_signed_tetra(
        &mut self,
        offset: usize,
        transform: impl FnOnce(i32) -> i32,
    ) -> Result<(), PoolError> {
        let value = self.get_signed_tetra(offset)?;
        self.set_tetra(offset, transform(value) as u32)
    }

    /// Replaces the unsigned octa at `offset` with `transform` applied to
    /// its current value, in the currently selected byte order.
    ///
    /// # Errors
    ///
    /// [`PoolError::OutOfRange`] if the octa lies outside the pool, even
    /// partially.
    pub fn tweak_unsigned_octa(
        &mut self,
        offset: usize,
        transform: impl FnOnce(u64) -> u64,
    ) -> Result<(), PoolError> {
        let value = self.get_unsigned_octa(offset)?;
        self.set_octa(offset, transform(value))
    }

    /// Replaces the signed octa at `offset` with `transform` applied to its
    /// current value, in the currently selected byte order.
    ///
    /// # Errors
    ///
    /// [`PoolError::OutOfRange`] if the octa lies outside the pool, even
    /// partially.
    pub fn tweak_signed_octa(
        &mut self,
        offset: usize,
        transform: impl FnOnce(i64) -> i64,
    ) -> Result<(), PoolError> {
        let value = self.get_signed_octa(offset)?;
        self.set_octa(offset, transform(value) as u64)
    }
}
