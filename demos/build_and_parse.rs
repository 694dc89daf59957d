//! Build a small binary record image, then parse it back with a cursor.
//!
//! Run with:
//!     cargo run --example build_and_parse

use bytepool::{BytePool, Cursor, hexdump};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Build a tiny "record file": magic, version, then length-prefixed
    // entries, padded to an 8-byte boundary.
    let mut pool = BytePool::new();
    pool.use_big_endian();

    pool.emit_tetra(0x52454321); // magic "REC!"
    pool.emit_wyde(1); // format version

    let entries: &[&[u8]] = &[b"alpha", b"beta", b"gamma"];
    pool.emit_wyde(entries.len() as u16);
    for entry in entries {
        pool.emit_wyde(entry.len() as u16);
        pool.emit_blob(entry);
    }
    pool.align(8, 0xFF)?;

    println!("Built {} bytes:\n", pool.size());
    hexdump(pool.bytes(), &mut std::io::stdout())?;

    // Parse it back
    let mut cursor = Cursor::new(&pool);
    let magic = cursor.parse_unsigned_tetra()?;
    let version = cursor.parse_unsigned_wyde()?;
    let count = cursor.parse_unsigned_wyde()?;
    println!("\nmagic=0x{:08X} version={} entries={}", magic, version, count);

    for index in 0..count {
        let len = cursor.parse_unsigned_wyde()?;
        let body = cursor.parse_blob(len as usize)?;
        println!("  entry {}: {:?}", index, String::from_utf8_lossy(&body));
    }

    println!("trailing padding: {} bytes", pool.size() - cursor.offset());
    Ok(())
}
