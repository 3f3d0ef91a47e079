//! Opcode Byte Sequences
//!
//! An opcode is the one- or two-byte sequence that identifies a token in the
//! program stream. This file contains no lookup semantics.

use std::fmt;

/// Widest opcode the format uses
pub const MAX_OPCODE_LEN: usize = 2;

/// One or two opcode bytes, stored inline
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Opcode {
    bytes: [u8; MAX_OPCODE_LEN],
    len: u8,
}

impl Opcode {
    /// Single-byte opcode
    pub const fn single(byte: u8) -> Self {
        Opcode { bytes: [byte, 0], len: 1 }
    }

    /// Two-byte opcode (prefix byte first)
    pub const fn double(prefix: u8, byte: u8) -> Self {
        Opcode { bytes: [prefix, byte], len: 2 }
    }

    /// Convert a raw slice to an opcode; `None` unless it is 1 or 2 bytes long
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        match *bytes {
            [b] => Some(Opcode::single(b)),
            [prefix, b] => Some(Opcode::double(prefix, b)),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }
}

impl fmt::Debug for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Opcode(")?;
        fmt::Display::fmt(self, f)?;
        write!(f, ")")
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, b) in self.as_bytes().iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "0x{:02X}", b)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_bytes_accepts_one_or_two() {
        assert_eq!(Opcode::from_bytes(&[0xDE]), Some(Opcode::single(0xDE)));
        assert_eq!(Opcode::from_bytes(&[0xBB, 0xB0]), Some(Opcode::double(0xBB, 0xB0)));
        assert_eq!(Opcode::from_bytes(&[]), None);
        assert_eq!(Opcode::from_bytes(&[1, 2, 3]), None);
    }

    #[test]
    fn single_and_double_never_compare_equal() {
        assert_ne!(Opcode::single(0x5C), Opcode::double(0x5C, 0x00));
        assert_eq!(Opcode::double(0x5C, 0x00).as_bytes(), &[0x5C, 0x00]);
        assert_eq!(Opcode::single(0x5C).as_bytes(), &[0x5C]);
    }

    #[test]
    fn display_is_hex() {
        assert_eq!(Opcode::double(0xBB, 0x0A).to_string(), "0xBB 0x0A");
    }
}
