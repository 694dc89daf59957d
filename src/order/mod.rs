//! Byte-order selection for multi-byte integer access.

/// The byte order a pool uses to encode and decode multi-byte integers.
///
/// Exactly three orders exist and no other value is ever valid, so the
/// selection is a closed enum rather than a runtime code. The order is a
/// per-pool mutable setting: it affects only how wydes, tetras and octas
/// are laid out, never single bytes or blobs, and switching it mid-stream
/// never re-encodes bytes already stored.
///
/// Network byte order is big-endian; reverse network byte order is
/// little-endian; native is whatever the host uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// The host system's own byte order.
    #[default]
    Native,
    /// Network byte order (most significant byte first).
    Big,
    /// Reverse network byte order (least significant byte first).
    Little,
}

impl ByteOrder {
    pub(crate) fn decode_u16(self, bytes: [u8; 2]) -> u16 {
        match self {
            ByteOrder::Native => u16::from_ne_bytes(bytes),
            ByteOrder::Big => u16::from_be_bytes(bytes),
            ByteOrder::Little => u16::from_le_bytes(bytes),
        }
    }

    pub(crate) fn decode_u32(self, bytes: [u8; 4]) -> u32 {
        match self {
            ByteOrder::Native => u32::from_ne_bytes(bytes),
            ByteOrder::Big => u32::from_be_bytes(bytes),
            ByteOrder::Little => u32::from_le_bytes(bytes),
        }
    }

    pub(crate) fn decode_u64(self, bytes: [u8; 8]) -> u64 {
        match self {
            ByteOrder::Native => u64::from_ne_bytes(bytes),
            ByteOrder::Big => u64::from_be_bytes(bytes),
            ByteOrder::Little => u64::from_le_bytes(bytes),
        }
    }

    pub(crate) fn encode_u16(self, value: u16) -> [u8; 2] {
        match self {
            ByteOrder::Native => value.to_ne_bytes(),
            ByteOrder::Big => value.to_be_bytes(),
            ByteOrder::Little => value.to_le_bytes(),
        }
    }

    pub(crate) fn encode_u32(self, value: u32) -> [u8; 4] {
        match self {
            ByteOrder::Native => value.to_ne_bytes(),
            ByteOrder::Big => value.to_be_bytes(),
            ByteOrder::Little => value.to_le_bytes(),
        }
    }

    pub(crate) fn encode_u64(self, value: u64) -> [u8; 8] {
        match self {
            ByteOrder::Native => value.to_ne_bytes(),
            ByteOrder::Big => value.to_be_bytes(),
            ByteOrder::Little => value.to_le_bytes(),
        }
    }
}
