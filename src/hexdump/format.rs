//! The row/field/format model behind [`hexdump`](super::hexdump).

use std::fmt::Write as _;

use super::Row;

/// Per-byte renderings available to a [`Field::Data`] column.
///
/// Each rendering occupies a fixed cell width; columns past the end of the
/// input (on a short final row) render as spaces of the same width so later
/// fields stay aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteFormat {
    /// Zero-padded two-digit lowercase hexadecimal.
    LowercaseHex,
    /// Zero-padded two-digit uppercase hexadecimal.
    UppercaseHex,
    /// Zero-padded three-digit octal.
    Octal,
    /// Space-padded three-digit decimal.
    Decimal,
    /// The byte as an ASCII character; nonprintable bytes become a period.
    Ascii,
    /// The byte decoded as Latin-1; nonprintable bytes become a period.
    Latin1,
}

impl ByteFormat {
    fn render(self, byte: Option<u8>, out: &mut String) {
        match (self, byte) {
            (ByteFormat::LowercaseHex, Some(value)) => {
                let _ = write!(out, "{:02x}", value);
            }
            (ByteFormat::UppercaseHex, Some(value)) => {
                let _ = write!(out, "{:02X}", value);
            }
            (ByteFormat::LowercaseHex | ByteFormat::UppercaseHex, None) => out.push_str("  "),
            (ByteFormat::Octal, Some(value)) => {
                let _ = write!(out, "{:03o}", value);
            }
            (ByteFormat::Decimal, Some(value)) => {
                let _ = write!(out, "{:3}", value);
            }
            (ByteFormat::Octal | ByteFormat::Decimal, None) => out.push_str("   "),
            (ByteFormat::Ascii, Some(value)) => {
                out.push(if (0x20..=0x7E).contains(&value) {
                    value as char
                } else {
                    '.'
                });
            }
            (ByteFormat::Latin1, Some(value)) => {
                // Latin-1 code points map directly to Unicode scalars
                out.push(if (0x20..=0x7E).contains(&value) || value >= 0xA0 {
                    value as char
                } else {
                    '.'
                });
            }
            (ByteFormat::Ascii | ByteFormat::Latin1, None) => out.push(' '),
        }
    }
}

/// One field of a hexdump row.
#[derive(Debug, Clone)]
pub enum Field {
    /// The row's starting offset, zero-padded uppercase hex.
    Offset {
        /// Minimum number of hex digits.
        digits: usize,
    },
    /// A literal string.
    Decoration(&'static str),
    /// The row's bytes under a [`ByteFormat`]. Grouping rules are
    /// `(divisor, separator)` pairs; at each interior column whose index is
    /// divisible by a rule's divisor, that rule's separator is inserted.
    /// Where several rules match, the leftmost wins.
    Data {
        /// How each byte is rendered.
        format: ByteFormat,
        /// Grouping rules, leftmost first.
        groups: Vec<(usize, &'static str)>,
    },
}

impl Field {
    fn format(&self, row: &Row<'_>, out: &mut String) {
        match self {
            Field::Offset { digits } => {
                let _ = write!(out, "{:0width$X}", row.offset, width = digits);
            }
            Field::Decoration(content) => out.push_str(content),
            Field::Data { format, groups } => {
                for column in 0..row.expected_size {
                    if column != 0 {
                        if let Some((_, separator)) =
                            groups.iter().find(|(divisor, _)| column % divisor == 0)
                        {
                            out.push_str(separator);
                        }
                    }
                    format.render(row.data.get(column).copied(), out);
                }
            }
        }
    }
}

/// A textual hexdump layout: a row width, an ordered field list, and an
/// optional block height.
#[derive(Debug, Clone)]
pub struct Format {
    bytes_per_row: usize,
    rows_per_block: usize,
    fields: Vec<Field>,
}

impl Format {
    /// Creates a format listing `bytes_per_row` bytes on every row,
    /// rendered through `fields` in order. Block separation is off; see
    /// [`with_rows_per_block`](Format::with_rows_per_block).
    pub fn new(bytes_per_row: usize, fields: Vec<Field>) -> Self {
        Self {
            bytes_per_row,
            rows_per_block: 0,
            fields,
        }
    }

    /// Sets the block height: an empty line is emitted after every `rows`
    /// rows. Zero disables block separation.
    pub fn with_rows_per_block(mut self, rows: usize) -> Self {
        self.rows_per_block = rows;
        self
    }

    /// Returns the number of bytes listed on every row.
    pub fn bytes_per_row(&self) -> usize {
        self.bytes_per_row
    }

    /// Returns the block height; zero means no block separation.
    pub fn rows_per_block(&self) -> usize {
        self.rows_per_block
    }

    /// Renders one row through this format's fields.
    pub fn format_row(&self, row: &Row<'_>) -> String {
        let mut line = String::new();
        for field in &self.fields {
            field.format(row, &mut line);
        }
        line
    }
}

impl Default for Format {
    /// The classic layout: five-digit offsets (a full mebibyte of data,
    /// which should be enough for everybody) and sixteen bytes per row in
    /// uppercase hex grouped by four, followed by an ASCII column.
    fn default() -> Self {
        Self::new(
            16,
            vec![
                Field::Offset { digits: 5 },
                Field::Decoration(": "),
                Field::Data {
                    format: ByteFormat::UppercaseHex,
                    groups: vec![(4, "  "), (1, " ")],
                },
                Field::Decoration("  "),
                Field::Data {
                    format: ByteFormat::Ascii,
                    groups: vec![],
                },
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row<'a>(offset: usize, expected_size: usize, data: &'a [u8]) -> Row<'a> {
        Row {
            offset,
            expected_size,
            data,
        }
    }

    #[test]
    fn test_offset_field_is_zero_padded_hex() {
        let format = Format::new(4, vec![Field::Offset { digits: 5 }]);
        assert_eq!(format.format_row(&row(0xAB, 4, &[0; 4])), "000AB");
    }

    #[test]
    fn test_decoration_is_literal() {
        let format = Format::new(1, vec![Field::Decoration("|")]);
        assert_eq!(format.format_row(&row(0, 1, &[0])), "|");
    }

    #[test]
    fn test_leftmost_grouping_rule_wins() {
        let format = Format::new(
            8,
            vec![Field::Data {
                format: ByteFormat::LowercaseHex,
                groups: vec![(4, "|"), (2, "-")],
            }],
        );
        let data = [0u8; 8];
        // Column 4 matches both rules; only the leftmost applies
        assert_eq!(format.format_row(&row(0, 8, &data)), "0000-0000|0000-0000");
    }

    #[test]
    fn test_octal_and_decimal_cells() {
        let format = Format::new(
            2,
            vec![
                Field::Data {
                    format: ByteFormat::Octal,
                    groups: vec![(1, " ")],
                },
                Field::Decoration(" / "),
                Field::Data {
                    format: ByteFormat::Decimal,
                    groups: vec![(1, " ")],
                },
            ],
        );
        assert_eq!(format.format_row(&row(0, 2, &[8, 255])), "010 377 /   8 255");
    }

    #[test]
    fn test_latin1_renders_high_bytes() {
        let format = Format::new(
            3,
            vec![Field::Data {
                format: ByteFormat::Latin1,
                groups: vec![],
            }],
        );
        // 0xE9 is e-acute in Latin-1; 0x9F is nonprintable
        assert_eq!(format.format_row(&row(0, 3, &[0x41, 0xE9, 0x9F])), "A\u{E9}.");
    }

    #[test]
    fn test_missing_columns_render_as_spaces() {
        let format = Format::new(
            4,
            vec![Field::Data {
                format: ByteFormat::UppercaseHex,
                groups: vec![(1, " ")],
            }],
        );
        assert_eq!(format.format_row(&row(0, 4, &[0xFF])), "FF         ");
    }
}
