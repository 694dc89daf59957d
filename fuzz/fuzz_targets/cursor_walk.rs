#![no_main]

use bytepool::{BytePool, Cursor};
use libfuzzer_sys::fuzz_target;

// Drive a cursor over arbitrary bytes with a width schedule derived from the
// input itself. Nothing here may panic: every failure must come back as a
// PoolError and must leave the cursor's offset unchanged.
fuzz_target!(|data: Vec<u8>| {
    let mut pool = BytePool::from_slice(&data);
    for select in [
        BytePool::use_native_endian,
        BytePool::use_big_endian,
        BytePool::use_little_endian,
    ] {
        select(&mut pool);
        let mut cursor = Cursor::new(&pool);

        for &step in &data {
            let before = cursor.offset();
            let result = match step % 8 {
                0 => cursor.parse_unsigned_byte().map(u64::from),
                1 => cursor.parse_unsigned_wyde().map(u64::from),
                2 => cursor.parse_unsigned_tetra().map(u64::from),
                3 => cursor.parse_unsigned_octa(),
                4 => cursor.parse_unsigned_integer(usize::from(step) % 9),
                5 => cursor.parse_blob(usize::from(step)).map(|b| b.len() as u64),
                6 => {
                    cursor.skip(usize::from(step) % 4);
                    Ok(0)
                }
                _ => cursor.unskip(usize::from(step) % 4).map(|_| 0),
            };
            if result.is_err() && step % 8 < 6 {
                assert_eq!(cursor.offset(), before, "failed parse must not advance");
            }
        }

        // Peeks never move the cursor
        let frozen = cursor.offset();
        let _ = cursor.peek_unsigned_byte();
        let _ = cursor.peek_unsigned_octa();
        assert_eq!(cursor.offset(), frozen);
    }
});
