#![no_main]

use bytepool::BytePool;
use libfuzzer_sys::fuzz_target;

// Replay arbitrary bytes as a pool edit script and check the invariants that
// must hold after every step: size always matches the contents, a successful
// write reads back, a failed write leaves the pool byte-for-byte intact.
fuzz_target!(|data: Vec<u8>| {
    let mut pool = BytePool::new_big_endian(&data);

    let mut script = data.chunks_exact(3);
    for step in &mut script {
        let op = step[0];
        let offset = usize::from(step[1]);
        let value = step[2];

        let before = pool.bytes().to_vec();
        let result = match op % 7 {
            0 => pool.set_byte(offset, value),
            1 => pool.set_wyde(offset, u16::from(value) << 8),
            2 => pool.set_tetra(offset, u32::from(value).wrapping_mul(0x01010101)),
            3 => pool.set_octa(offset, u64::from(value)),
            4 => pool.set_blob(offset, &[value, value]),
            5 => pool.truncate(offset),
            _ => pool.tweak_unsigned_byte(offset, |v| v.wrapping_add(value)),
        };

        assert_eq!(pool.size(), pool.bytes().len());
        if result.is_err() {
            assert_eq!(pool.bytes(), &before[..], "failed op must not mutate");
        } else if op % 7 == 0 {
            assert_eq!(pool.get_unsigned_byte(offset).unwrap(), value);
        }
    }

    // Alignment padding always lands on the requested boundary
    for alignment in 1..10usize {
        let pad = pool.bytes_until_alignment(alignment).unwrap();
        assert!(pad < alignment);
        assert_eq!((pool.size() + pad) % alignment, 0);
    }
});
