//! tixp Error Types
//!
//! Defines every error condition produced by the .8xp codec.
//! Errors are raised at the point of detection; there is no partial decode.

use std::io;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TixpError {
    // Builder constraints
    #[error("{field} is {len} bytes, exceeds maximum of {max}")]
    ConstraintViolation {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("{field} contains {ch:?}, which has no single-byte encoding")]
    UnencodableText { field: &'static str, ch: char },

    // Decoding errors
    #[error("instruction stream truncated: byte 0x{byte:02X} at stream offset {offset} starts a two-byte opcode")]
    TruncatedStream { offset: usize, byte: u8 },

    #[error("unknown opcode {} at stream offset {offset}", hex(.bytes))]
    UnknownOpcode { offset: usize, bytes: Vec<u8> },

    #[error("malformed container: {len} bytes, need at least {min}")]
    MalformedContainer { len: usize, min: usize },

    #[error("checksum mismatch: stored 0x{stored:04X}, computed 0x{computed:04X}")]
    ChecksumMismatch { stored: u16, computed: u16 },

    // Table errors
    #[error("duplicate opcode {} in instruction table", hex(.opcode))]
    DuplicateOpcode { opcode: Vec<u8> },

    #[error("no instruction named {name:?}")]
    UnknownInstruction { name: String },

    // IO boundary
    #[error("io error: {0}")]
    Io(String),
}

fn hex(bytes: &[u8]) -> String {
    let parts: Vec<String> = bytes.iter().map(|b| format!("0x{:02X}", b)).collect();
    format!("[{}]", parts.join(", "))
}

impl From<io::Error> for TixpError {
    fn from(err: io::Error) -> Self {
        TixpError::Io(err.to_string())
    }
}

pub type TixpResult<T> = Result<T, TixpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_opcode_reports_bytes_and_offset() {
        let err = TixpError::UnknownOpcode { offset: 3, bytes: vec![0xBB, 0xFF] };
        assert_eq!(err.to_string(), "unknown opcode [0xBB, 0xFF] at stream offset 3");
    }

    #[test]
    fn truncation_names_stream_offset() {
        let err = TixpError::TruncatedStream { offset: 0, byte: 0xBB };
        assert_eq!(
            err.to_string(),
            "instruction stream truncated: byte 0xBB at stream offset 0 starts a two-byte opcode"
        );
    }

    #[test]
    fn io_errors_convert() {
        let err: TixpError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err, TixpError::Io("gone".to_string()));
    }
}
