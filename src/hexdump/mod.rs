//! Hexdump formatting for byte sequences.
//!
//! Presentation only: the dumper consumes a plain `&[u8]` and writes rows of
//! text to any [`std::io::Write`]. It never depends on
//! [`BytePool`](crate::BytePool) internals or on byte order; dumping a pool
//! is just `hexdump(pool.bytes(), &mut out)`.
//!
//! The layout is pluggable. A [`Format`] slices the input into fixed-size
//! rows and renders each through a list of [`Field`]s: a row offset, literal
//! decoration, or the row's bytes under one of the closed [`ByteFormat`]
//! renderings with configurable group separators.
//!
//! # Example
//!
//! ```
//! use bytepool::hexdump;
//!
//! let mut out = Vec::new();
//! hexdump(b"Mary had a little lamb,\n", &mut out)?;
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.starts_with("00000: 4D 61 72 79  20 68 61 64"));
//! # Ok::<(), std::io::Error>(())
//! ```

mod format;

pub use format::{ByteFormat, Field, Format};

use std::io::{self, Write};

/// One row of a dump in progress: its starting offset, the row width the
/// format expects, and the row's bytes. On the final row the slice may be
/// shorter than `expected_size`; formatters pad the missing columns with
/// spaces.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    /// Offset of the first byte on this row.
    pub offset: usize,
    /// The row width, as per [`Format::bytes_per_row`].
    pub expected_size: usize,
    /// The bytes on this row.
    pub data: &'a [u8],
}

/// Dumps `data` to `out` using the default format: five-digit uppercase hex
/// offsets and sixteen bytes per row, shown both as hex (grouped by four)
/// and as ASCII-or-dot.
///
/// # Errors
///
/// Any error returned by the writer.
pub fn hexdump(data: &[u8], out: &mut impl Write) -> io::Result<()> {
    hexdump_with(data, out, &Format::default())
}

/// Dumps `data` to `out` using the given `format`.
///
/// When the format enables block separation, the blank line falls between
/// whole blocks of [`rows_per_block`](Format::rows_per_block) rows, never
/// inside one.
///
/// # Errors
///
/// Any error returned by the writer.
pub fn hexdump_with(data: &[u8], out: &mut impl Write, format: &Format) -> io::Result<()> {
    let mut offset = 0;
    let mut row_index = 0usize;
    while offset < data.len() {
        if format.rows_per_block() != 0 && row_index != 0 && row_index % format.rows_per_block() == 0
        {
            writeln!(out)?;
        }
        let end = (offset + format.bytes_per_row()).min(data.len());
        let row = Row {
            offset,
            expected_size: format.bytes_per_row(),
            data: &data[offset..end],
        };
        writeln!(out, "{}", format.format_row(&row))?;
        offset += format.bytes_per_row();
        row_index += 1;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dump_to_string(data: &[u8]) -> String {
        let mut out = Vec::new();
        hexdump(data, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_empty_input_produces_no_rows() {
        assert_eq!(dump_to_string(b""), "");
    }

    #[test]
    fn test_single_full_row() {
        let text = dump_to_string(b"0123456789ABCDEF");
        assert_eq!(
            text,
            "00000: 30 31 32 33  34 35 36 37  38 39 41 42  43 44 45 46  0123456789ABCDEF\n"
        );
    }

    #[test]
    fn test_short_final_row_pads_columns() {
        let text = dump_to_string(b"AB");
        assert_eq!(
            text,
            "00000: 41 42                                               AB              \n"
        );
    }

    #[test]
    fn test_nonprintable_bytes_become_dots() {
        let text = dump_to_string(&[0x00, 0x1F, 0x7F, 0x41]);
        assert!(text.contains("...A"));
    }

    #[test]
    fn test_offsets_advance_by_row_width() {
        let text = dump_to_string(&[0u8; 33]);
        let offsets: Vec<&str> = text
            .lines()
            .map(|line| line.split(':').next().unwrap())
            .collect();
        assert_eq!(offsets, ["00000", "00010", "00020"]);
    }

    #[test]
    fn test_block_separation() {
        let format = Format::default().with_rows_per_block(2);
        let mut out = Vec::new();
        hexdump_with(&[0u8; 80], &mut out, &format).unwrap();
        let text = String::from_utf8(out).unwrap();
        // 5 rows, a blank line after every 2
        assert_eq!(text.lines().count(), 7);
        assert_eq!(text.lines().nth(2).unwrap(), "");
        assert_eq!(text.lines().nth(5).unwrap(), "");
    }
}
