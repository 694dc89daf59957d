//! Hexdump a file, or a builtin sample when no path is given.
//!
//! Run with:
//!     cargo run --example dump [-- <path>]

use bytepool::hexdump::{ByteFormat, Field, Format, hexdump_with};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let data = match std::env::args().nth(1) {
        Some(path) => std::fs::read(path)?,
        None => (0u8..=255).collect(),
    };

    // A wider variant of the default layout: lowercase hex grouped by eight,
    // Latin-1 text column, blank line between 16-row blocks.
    let format = Format::new(
        16,
        vec![
            Field::Offset { digits: 8 },
            Field::Decoration("  "),
            Field::Data {
                format: ByteFormat::LowercaseHex,
                groups: vec![(8, "   "), (1, " ")],
            },
            Field::Decoration("  |"),
            Field::Data {
                format: ByteFormat::Latin1,
                groups: vec![],
            },
            Field::Decoration("|"),
        ],
    )
    .with_rows_per_block(16);

    hexdump_with(&data, &mut std::io::stdout(), &format)?;
    Ok(())
}
