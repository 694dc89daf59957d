//! Fixed-width integer access on a pool.
//!
//! Widths follow the byte/wyde/tetra/octa naming: 1, 2, 4 and 8 bytes.
//! Reads reject any span that leaves the pool, even partially. Writes accept
//! a start offset up to and including the current size; a write whose tail
//! runs past the end extends the pool. Multi-byte values use the pool's
//! currently selected byte order; single bytes are order-independent.

use crate::error::PoolError;

use super::BytePool;

impl BytePool {
    /// Reads the unsigned byte at `offset`.
    ///
    /// # Errors
    ///
    /// [`PoolError::OutOfRange`] if `offset + 1 > size()`.
    pub fn get_unsigned_byte(&self, offset: usize) -> Result<u8, PoolError> {
        Ok(self.get_array::<1>(offset)?[0])
    }

    /// Reads the signed byte at `offset`.
    pub fn get_signed_byte(&self, offset: usize) -> Result<i8, PoolError> {
        Ok(self.get_unsigned_byte(offset)? as i8)
    }

    /// Reads the unsigned wyde (2 bytes) at `offset` using the currently
    /// selected byte order.
    ///
    /// # Errors
    ///
    /// [`PoolError::OutOfRange`] if the wyde lies outside the pool, even
    /// partially.
    pub fn get_unsigned_wyde(&self, offset: usize) -> Result<u16, PoolError> {
        Ok(self.byte_order().decode_u16(self.get_array(offset)?))
    }

    /// Reads the signed wyde (2 bytes) at `offset` using the currently
    /// selected byte order.
    pub fn get_signed_wyde(&self, offset: usize) -> Result<i16, PoolError> {
        Ok(self.get_unsigned_wyde(offset)? as i16)
    }

    /// Reads the unsigned tetra (4 bytes) at `offset` using the currently
    /// selected byte order.
    ///
    /// # Errors
    ///
    /// [`PoolError::OutOfRange`] if the tetra lies outside the pool, even
    /// partially.
    pub fn get_unsigned_tetra(&self, offset: usize) -> Result<u32, PoolError> {
        Ok(self.byte_order().decode_u32(self.get_array(offset)?))
    }

    /// Reads the signed tetra (4 bytes) at `offset` using the currently
    /// selected byte order.
    pub fn get_signed_tetra(&self, offset: usize) -> Result<i32, PoolError> {
        Ok(self.get_unsigned_tetra(offset)? as i32)
    }

    /// Reads the unsigned octa (8 bytes) at `offset` using the currently
    /// selected byte order.
    ///
    /// # Errors
    ///
    /// [`PoolError::OutOfRange`] if the octa lies outside the pool, even
    /// partially.
    pub fn get_unsigned_octa(&self, offset: usize) -> Result<u64, PoolError> {
        Ok(self.byte_order().decode_u64(self.get_array(offset)?))
    }

    /// Reads the signed octa (8 bytes) at `offset` using the currently
    /// selected byte order.
    pub fn get_signed_octa(&self, offset: usize) -> Result<i64, PoolError> {
        Ok(self.get_unsigned_octa(offset)? as i64)
    }

    /// Reads an unsigned integer of the given `width` (1, 2, 4 or 8 bytes)
    /// at `offset` using the currently selected byte order, widened to
    /// `u64`.
    ///
    /// # Errors
    ///
    /// [`PoolError::UnsupportedWidth`] for any other width;
    /// [`PoolError::OutOfRange`] if the span leaves the pool.
    pub fn get_unsigned_integer(&self, width: usize, offset: usize) -> Result<u64, PoolError> {
        match width {
            1 => Ok(u64::from(self.get_unsigned_byte(offset)?)),
            2 => Ok(u64::from(self.get_unsigned_wyde(offset)?)),
            4 => Ok(u64::from(self.get_unsigned_tetra(offset)?)),
            8 => self.get_unsigned_octa(offset),
            _ => Err(PoolError::UnsupportedWidth { width }),
        }
    }

    /// Writes `value` as a single byte at `offset`.
    ///
    /// # Errors
    ///
    /// [`PoolError::OutOfRange`] if `offset > size()`. Writing exactly at
    /// the end appends the byte.
    pub fn set_byte(&mut self, offset: usize, value: u8) -> Result<(), PoolError> {
        self.splice(offset, &[value])
    }

    /// Writes `value` as a wyde (2 bytes) at `offset` using the currently
    /// selected byte order. Signed values store their two's-complement
    /// bit pattern (`value as u16`).
    ///
    /// # Errors
    ///
    /// [`PoolError::OutOfRange`] if `offset > size()`. Bytes past the
    /// current end extend the pool.
    pub fn set_wyde(&mut self, offset: usize, value: u16) -> Result<(), PoolError> {
        let encoded = self.byte_order().encode_u16(value);
        self.splice(offset, &encoded)
    }

    /// Writes `value` as a tetra (4 bytes) at `offset` using the currently
    /// selected byte order.
    ///
    /// # Errors
    ///
    /// [`PoolError::OutOfRange`] if `offset > size()`. Bytes past the
    /// current end extend the pool.
    pub fn set_tetra(&mut self, offset: usize, value: u32) -> Result<(), PoolError> {
        let encoded = self.byte_order().encode_u32(value);
        self.splice(offset, &encoded)
    }

    /// Writes `value` as an octa (8 bytes) at `offset` using the currently
    /// selected byte order.
    ///
    /// # Errors
    ///
    /// [`PoolError::OutOfRange`] if `offset > size()`. Bytes past the
    /// current end extend the pool.
    pub fn set_octa(&mut self, offset: usize, value: u64) -> Result<(), PoolError> {
        let encoded = self.byte_order().encode_u64(value);
        self.splice(offset, &encoded)
    }

    /// Writes `value` as an unsigned integer of the given `width` (1, 2, 4
    /// or 8 bytes) at `offset` using the currently selected byte order.
    /// Values wider than `width` wrap to the low-order bytes
    /// (two's-complement truncation).
    ///
    /// # Errors
    ///
    /// [`PoolError::UnsupportedWidth`] for any other width;
    /// [`PoolError::OutOfRange`] if `offset > size()`.
    pub fn set_integer(&mut self, width: usize, offset: usize, value: u64) -> Result<(), PoolError> {
        match width {
            1 => self.set_byte(offset, value as u8),
            2 => self.set_wyde(offset, value as u16),
            4 => self.set_tetra(offset, value as u32),
            8 => self.set_octa(offset, value),
            _ => Err(PoolError::UnsupportedWidth { width }),
        }
    }

    /// Appends `value` as a single byte at the current end, growing the
    /// pool by one byte.
    pub fn emit_byte(&mut self, value: u8) {
        self.emit_blob(&[value]);
    }

    /// Appends `value` as a wyde at the current end using the currently
    /// selected byte order, growing the pool by two bytes.
    pub fn emit_wyde(&mut self, value: u16) {
        let encoded = self.byte_order().encode_u16(value);
        self.emit_blob(&encoded);
    }

    /// Appends `value` as a tetra at the current end using the currently
    /// selected byte order, growing the pool by four bytes.
    pub fn emit_tetra(&mut self, value: u32) {
        let encoded = self.byte_order().encode_u32(value);
        self.emit_blob(&encoded);
    }

    /// Appends `value` as an octa at the current end using the currently
    /// selected byte order, growing the pool by eight bytes.
    pub fn emit_octa(&mut self, value: u64) {
        let encoded = self.byte_order().encode_u64(value);
        self.emit_blob(&encoded);
    }
}
