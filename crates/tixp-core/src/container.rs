//! Container Layout
//!
//! Fixed offsets, constants and the running checksum of the .8xp container.
//! All multi-byte integers are little-endian.

use std::ops::Range;

/// Leading marker bytes and signature, offsets 0..11
pub const MAGIC: [u8; 11] = [42, 42, b'T', b'I', b'8', b'3', b'F', 42, 26, 10, 10];

pub const COMMENT: Range<usize> = 11..53;
pub const COMMENT_LEN: usize = 42;
/// instruction byte count + 19
pub const DATA_SECTION_LEN: usize = 53;
/// Unexplained constant byte; part of the checksum
pub const ENTRY_MARKER: usize = 55;
pub const ENTRY_MARKER_VALUE: u8 = 13;
/// instruction byte count + 2
pub const VARIABLE_LEN: usize = 57;
pub const PROTECTION: usize = 59;
pub const NAME: Range<usize> = 60..68;
pub const NAME_LEN: usize = 8;
/// instruction byte count + 2, repeated
pub const VARIABLE_LEN_REPEAT: usize = 70;
/// raw instruction byte count
pub const CODE_LEN: usize = 72;

/// Everything before the instruction stream
pub const HEADER_LEN: usize = 74;
/// Trailing checksum
pub const CHECKSUM_LEN: usize = 2;
/// Smallest container that still has every fixed field
pub const MIN_CONTAINER_LEN: usize = HEADER_LEN + CHECKSUM_LEN;

pub const EDITABLE: u8 = 5;
pub const LOCKED: u8 = 6;

/// Added to the instruction byte count in the data-section length field
pub const DATA_SECTION_OVERHEAD: usize = 19;
/// Added to the instruction byte count in the variable length fields
pub const VARIABLE_OVERHEAD: usize = 2;

/// Largest instruction stream whose length fields still fit in 16 bits
pub const MAX_CODE_LEN: usize = u16::MAX as usize - DATA_SECTION_OVERHEAD;

pub fn protection_byte(uneditable: bool) -> u8 {
    if uneditable {
        LOCKED
    } else {
        EDITABLE
    }
}

pub fn read_u16(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

/// Running checksum.
///
/// Length fields are added by value, not byte by byte. Accumulates wide and
/// truncates to 16 bits only when read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Checksum {
    sum: u64,
}

impl Checksum {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_byte(&mut self, b: u8) {
        self.sum += u64::from(b);
    }

    pub fn add_bytes(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.add_byte(b);
        }
    }

    pub fn add_value(&mut self, v: u16) {
        self.sum += u64::from(v);
    }

    pub fn value(&self) -> u16 {
        (self.sum & 0xFFFF) as u16
    }

    /// Recompute the checksum from the fields of a complete container.
    ///
    /// Caller guarantees `bytes.len() >= MIN_CONTAINER_LEN`.
    pub fn of_container(bytes: &[u8]) -> Self {
        let code_end = bytes.len() - CHECKSUM_LEN;
        let mut sum = Checksum::new();
        sum.add_byte(bytes[ENTRY_MARKER]);
        sum.add_value(read_u16(bytes, VARIABLE_LEN));
        sum.add_byte(bytes[PROTECTION]);
        sum.add_bytes(&bytes[NAME]);
        sum.add_value(read_u16(bytes, VARIABLE_LEN_REPEAT));
        sum.add_value(read_u16(bytes, CODE_LEN));
        sum.add_bytes(&bytes[HEADER_LEN..code_end]);
        sum
    }
}

/// The checksum stored in the last two bytes of a container
pub fn stored_checksum(bytes: &[u8]) -> u16 {
    read_u16(bytes, bytes.len() - CHECKSUM_LEN)
}
