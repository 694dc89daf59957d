// Integration tests for the pool/cursor API
// Tests cover: build-then-parse round trips, endianness, growth, hexdump output

use bytepool::{BytePool, Cursor, PoolError, hexdump};

// ============================================================================
// Building and parsing
// ============================================================================

#[test]
fn test_build_then_parse_round_trip() {
    let mut pool = BytePool::new();
    pool.use_big_endian();

    pool.emit_tetra(0x4D414749); // magic
    pool.emit_wyde(2); // record count
    pool.emit_blob(b"ab");
    pool.emit_blob(b"cde");
    pool.align(8, 0).unwrap();
    pool.emit_octa(0x1122334455667788);

    let mut cursor = Cursor::new(&pool);
    assert_eq!(cursor.parse_unsigned_tetra().unwrap(), 0x4D414749);
    assert_eq!(cursor.parse_unsigned_wyde().unwrap(), 2);
    assert_eq!(&cursor.parse_blob(2).unwrap()[..], b"ab");
    assert_eq!(&cursor.parse_blob(3).unwrap()[..], b"cde");
    cursor.skip(5); // alignment padding
    assert_eq!(cursor.parse_unsigned_octa().unwrap(), 0x1122334455667788);
    assert!(cursor.eof());
}

#[test]
fn test_emit_truncate_reorder_sequence() {
    let mut pool = BytePool::new();
    pool.emit_byte(42);
    assert_eq!(pool.bytes(), b"*");

    pool.use_big_endian();
    pool.emit_tetra(0x41424344);
    assert_eq!(pool.bytes(), b"*ABCD");

    pool.truncate(1).unwrap();
    assert_eq!(pool.size(), 1);

    pool.use_little_endian();
    pool.emit_wyde(0x3132);
    assert_eq!(pool.bytes(), b"*21");
}

#[test]
fn test_mixed_endianness_mid_stream() {
    let mut pool = BytePool::new();
    pool.use_big_endian();
    pool.emit_wyde(0x0102);
    pool.use_little_endian();
    pool.emit_wyde(0x0304);
    assert_eq!(pool.bytes(), &[0x01, 0x02, 0x04, 0x03]);

    // The cursor follows the pool's order at the time of each read
    let mut reread = BytePool::from_slice(pool.bytes());
    reread.use_big_endian();
    let mut cursor = Cursor::new(&reread);
    assert_eq!(cursor.parse_unsigned_wyde().unwrap(), 0x0102);
    assert_eq!(cursor.parse_unsigned_wyde().unwrap(), 0x0403);
}

#[test]
fn test_tweak_sequence() {
    let mut pool = BytePool::from_slice(b"XYZ");
    pool.tweak_unsigned_byte(2, |_| 0x20).unwrap();
    assert_eq!(pool.bytes(), b"XY ");
    pool.tweak_signed_byte(1, |c| c - 2).unwrap();
    assert_eq!(pool.bytes(), b"XW ");
    pool.use_big_endian();
    pool.tweak_unsigned_wyde(1, |c| c.wrapping_add(0xFF03)).unwrap();
    assert_eq!(pool.bytes(), b"XV#");
}

// ============================================================================
// Bounds and growth
// ============================================================================

#[test]
fn test_growth_happens_only_at_the_end() {
    let mut pool = BytePool::from_slice(&[0; 3]);
    assert!(pool.set_byte(3, 1).is_ok());
    assert_eq!(pool.size(), 4);
    assert_eq!(
        pool.set_byte(5, 1),
        Err(PoolError::OutOfRange {
            offset: 5,
            len: 1,
            size: 4
        })
    );
}

#[test]
fn test_reads_never_grow() {
    let pool = BytePool::from_slice(&[0; 4]);
    assert!(pool.get_unsigned_byte(4).is_err());
    assert!(pool.get_unsigned_wyde(3).is_err());
    assert_eq!(pool.size(), 4);
}

#[test]
fn test_cursor_sees_growth_after_eof() {
    let mut pool = BytePool::from_slice(&[1]);
    {
        let cursor = Cursor::with_offset(&pool, 1);
        assert!(cursor.eof());
        assert!(cursor.peek_unsigned_byte().is_err());
    }
    pool.emit_byte(2);
    let cursor = Cursor::with_offset(&pool, 1);
    assert!(!cursor.eof());
    assert_eq!(cursor.peek_unsigned_byte().unwrap(), 2);
}

#[test]
fn test_generic_integer_parity_with_fixed_width() {
    let mut pool = BytePool::new_little_endian(&[0; 8]);
    pool.set_integer(8, 0, 0xA1B2C3D4E5F60718).unwrap();
    assert_eq!(pool.get_unsigned_octa(0).unwrap(), 0xA1B2C3D4E5F60718);

    let mut cursor = Cursor::new(&pool);
    assert_eq!(cursor.parse_unsigned_integer(8).unwrap(), 0xA1B2C3D4E5F60718);
}

// ============================================================================
// Hexdump output
// ============================================================================

#[test]
fn test_hexdump_default_format() {
    let text = concat!(
        "Mary had a little lamb,\n",
        "His fleece was white as snow,\n",
        "And everywhere that Mary went,\n",
        "The lamb was sure to go.\n",
    );
    let mut out = Vec::new();
    hexdump(text.as_bytes(), &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        concat!(
            "00000: 4D 61 72 79  20 68 61 64  20 61 20 6C  69 74 74 6C  Mary had a littl\n",
            "00010: 65 20 6C 61  6D 62 2C 0A  48 69 73 20  66 6C 65 65  e lamb,.His flee\n",
            "00020: 63 65 20 77  61 73 20 77  68 69 74 65  20 61 73 20  ce was white as \n",
            "00030: 73 6E 6F 77  2C 0A 41 6E  64 20 65 76  65 72 79 77  snow,.And everyw\n",
            "00040: 68 65 72 65  20 74 68 61  74 20 4D 61  72 79 20 77  here that Mary w\n",
            "00050: 65 6E 74 2C  0A 54 68 65  20 6C 61 6D  62 20 77 61  ent,.The lamb wa\n",
            "00060: 73 20 73 75  72 65 20 74  6F 20 67 6F  2E 0A        s sure to go..  \n",
        )
    );
}

#[test]
fn test_hexdump_consumes_pool_through_its_slice() {
    let mut pool = BytePool::new();
    pool.emit_blob(b"dump me");
    let mut out = Vec::new();
    hexdump(pool.bytes(), &mut out).unwrap();
    assert!(String::from_utf8(out).unwrap().contains("dump me"));
}
