//! bytepool
//!
//! Generating, parsing and modifying binary data in memory.
//!
//! `bytepool` provides a growable byte buffer (the [`BytePool`]) with
//! bounds-checked, endianness-aware access to fixed-width integers and raw
//! blobs, and a lightweight [`Cursor`] for walking a pool sequentially while
//! decoding a binary format. It is designed as a small, composable primitive
//! for:
//!
//! - building binary messages and file images byte by byte
//! - decoding wire formats and on-disk structures
//! - patching values in place (the `tweak_*` family)
//! - inspecting bytes as text (the [`hexdump`] module)
//!
//! The crate intentionally:
//! - does NOT read or write files or sockets
//! - does NOT describe schemas
//! - does NOT manage concurrency
//! - does NOT stream unbounded input
//!
//! It only does one thing: **own a byte sequence and give safe, typed
//! access to it**.
//!
//! # Building
//!
//! ```
//! use bytepool::BytePool;
//!
//! let mut pool = BytePool::new();
//! pool.use_big_endian();
//! pool.emit_wyde(0xCAFE);
//! pool.emit_blob(b"payload");
//! pool.align(4, 0)?;
//!
//! assert_eq!(pool.size() % 4, 0);
//! # Ok::<(), bytepool::PoolError>(())
//! ```
//!
//! # Parsing
//!
//! ```
//! use bytepool::{BytePool, Cursor};
//!
//! let pool = BytePool::new_big_endian(&[0xCA, 0xFE, 0x00, 0x03, b'a', b'b', b'c']);
//! let mut cursor = Cursor::new(&pool);
//!
//! let magic = cursor.parse_unsigned_wyde()?;
//! let len = cursor.parse_unsigned_wyde()?;
//! let body = cursor.parse_blob(len as usize)?;
//!
//! assert_eq!(magic, 0xCAFE);
//! assert_eq!(&body[..], b"abc");
//! assert!(cursor.eof());
//! # Ok::<(), bytepool::PoolError>(())
//! ```
//!
//! Widths follow the byte/wyde/tetra/octa naming for 1, 2, 4 and 8 bytes.
//! Network byte order is big-endian, reverse network byte order is
//! little-endian.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cursor;
mod error;
mod order;
mod pool;

pub mod hexdump;

//
// Public surface (intentionally tiny)
//

pub use cursor::Cursor;
pub use error::PoolError;
pub use hexdump::hexdump;
pub use order::ByteOrder;
pub use pool::BytePool;
