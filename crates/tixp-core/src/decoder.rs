//! Program Decoder
//!
//! Slices the fixed fields out of a container and tokenizes the instruction
//! stream. The fixed header is not validated beyond its length; bytes outside
//! the extracted fields are ignored.

use tracing::{debug, trace, warn};

use crate::bytecode::{Instruction, InstructionTable};
use crate::config::TixpConfig;
use crate::container::{
    self, Checksum, CHECKSUM_LEN, COMMENT, EDITABLE, HEADER_LEN, MIN_CONTAINER_LEN, NAME,
    PROTECTION,
};
use crate::error::{TixpError, TixpResult};
use crate::program::Program;

/// Decode `bytes` with the standard table and default options
pub fn decode(bytes: &[u8]) -> TixpResult<Program> {
    ProgramDecoder::new(InstructionTable::standard()).decode(bytes)
}

/// Container decoder bound to an instruction table
#[derive(Debug, Clone)]
pub struct ProgramDecoder<'t> {
    table: &'t InstructionTable,
    config: TixpConfig,
}

impl<'t> ProgramDecoder<'t> {
    pub fn new(table: &'t InstructionTable) -> Self {
        Self::with_config(table, TixpConfig::default())
    }

    pub fn with_config(table: &'t InstructionTable, config: TixpConfig) -> Self {
        ProgramDecoder { table, config }
    }

    pub fn config(&self) -> &TixpConfig {
        &self.config
    }

    pub fn decode(&self, bytes: &[u8]) -> TixpResult<Program> {
        if bytes.len() < MIN_CONTAINER_LEN {
            return Err(TixpError::MalformedContainer {
                len: bytes.len(),
                min: MIN_CONTAINER_LEN,
            });
        }

        if self.config.verify_checksum {
            let stored = container::stored_checksum(bytes);
            let computed = Checksum::of_container(bytes).value();
            if stored != computed {
                warn!(stored, computed, "container checksum mismatch");
                return Err(TixpError::ChecksumMismatch { stored, computed });
            }
        }

        let comment = self.read_text(&bytes[COMMENT]);
        let uneditable = bytes[PROTECTION] != EDITABLE;
        let name = self.read_text(&bytes[NAME]);
        let code = &bytes[HEADER_LEN..bytes.len() - CHECKSUM_LEN];
        let instructions = self.tokenize(code)?;

        debug!(
            name = %name,
            uneditable,
            instructions = instructions.len(),
            code_len = code.len(),
            "decoded program"
        );

        Ok(Program {
            comment,
            uneditable,
            name,
            instructions,
        })
    }

    /// Split an opcode stream into instructions.
    ///
    /// A one-byte match always wins; only when it misses is the next byte
    /// consulted. Any miss after that aborts the whole decode.
    pub fn tokenize(&self, code: &[u8]) -> TixpResult<Vec<Instruction>> {
        let mut instructions = Vec::new();
        let mut pos = 0;

        while pos < code.len() {
            if let Some(instruction) = self.table.lookup_opcode(&code[pos..pos + 1]) {
                trace!(offset = pos, token = %instruction.name(), "one-byte token");
                instructions.push(instruction.clone());
                pos += 1;
                continue;
            }

            if pos + 1 >= code.len() {
                return Err(TixpError::TruncatedStream {
                    offset: pos,
                    byte: code[pos],
                });
            }

            let pair = &code[pos..pos + 2];
            let instruction = self
                .table
                .lookup_opcode(pair)
                .ok_or_else(|| TixpError::UnknownOpcode {
                    offset: pos,
                    bytes: pair.to_vec(),
                })?;
            trace!(offset = pos, token = %instruction.name(), "two-byte token");
            instructions.push(instruction.clone());
            pos += 2;
        }

        Ok(instructions)
    }

    /// Latin-1 decode, one character per byte
    fn read_text(&self, field: &[u8]) -> String {
        let field = if self.config.trim_padding {
            let end = field.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
            &field[..end]
        } else {
            field
        };
        field.iter().map(|&b| char::from(b)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bytecode::tokens::{CLR_HOME, DISP, NEWLINE};
    use crate::encoder::ProgramEncoder;

    fn greedy_table() -> InstructionTable {
        InstructionTable::new(vec![
            Instruction::single("A", 0xBB),
            Instruction::double("B", 0xBB, 0x01),
            Instruction::single("one", 0x01),
            Instruction::double("pair", 0x5C, 0x00),
        ])
        .expect("table")
    }

    #[test]
    fn one_byte_match_wins() {
        let table = greedy_table();
        let decoder = ProgramDecoder::new(&table);
        let tokens = decoder.tokenize(&[0xBB, 0x01]).expect("tokenize");
        let names: Vec<&str> = tokens.iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["A", "one"]);
    }

    #[test]
    fn two_byte_lookup_on_miss() {
        let table = greedy_table();
        let tokens = ProgramDecoder::new(&table)
            .tokenize(&[0x5C, 0x00, 0x01])
            .expect("tokenize");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].name(), "pair");
    }

    #[test]
    fn dangling_prefix_is_truncation() {
        let table = greedy_table();
        let err = ProgramDecoder::new(&table).tokenize(&[0x01, 0x5C]).unwrap_err();
        assert_eq!(err, TixpError::TruncatedStream { offset: 1, byte: 0x5C });
    }

    #[test]
    fn unknown_pair_reports_bytes() {
        let table = greedy_table();
        let err = ProgramDecoder::new(&table).tokenize(&[0xFF, 0x01]).unwrap_err();
        assert_eq!(err, TixpError::UnknownOpcode { offset: 0, bytes: vec![0xFF, 0x01] });
    }

    #[test]
    fn short_buffer_is_malformed() {
        let err = decode(&[0u8; 75]).unwrap_err();
        assert_eq!(err, TixpError::MalformedContainer { len: 75, min: 76 });
    }

    #[test]
    fn header_is_not_validated() {
        // 76 zero bytes: no magic, no checksum, but every field is present
        let program = decode(&[0u8; 76]).expect("decode");
        assert_eq!(program.name(), "");
        assert_eq!(program.comment(), "");
        assert!(program.is_uneditable());
        assert!(program.instructions().is_empty());
    }

    #[test]
    fn padding_kept_when_configured() {
        let mut enc = ProgramEncoder::new();
        enc.set_name("AB").expect("name");
        let bytes = enc.compile().expect("compile");
        let config = TixpConfig {
            trim_padding: false,
            ..TixpConfig::default()
        };
        let table = InstructionTable::standard();
        let program = ProgramDecoder::with_config(table, config).decode(&bytes).expect("decode");
        assert_eq!(program.name(), "AB\0\0\0\0\0\0");
    }

    #[test]
    fn checksum_checked_only_in_strict_mode() {
        let mut enc = ProgramEncoder::new();
        enc.append_all(vec![CLR_HOME, NEWLINE, DISP]);
        let mut bytes = enc.compile().expect("compile");
        let last = bytes.len() - 1;
        bytes[last] ^= 0xFF;

        assert!(decode(&bytes).is_ok());

        let strict = ProgramDecoder::with_config(InstructionTable::standard(), TixpConfig::strict());
        assert!(matches!(
            strict.decode(&bytes),
            Err(TixpError::ChecksumMismatch { .. })
        ));
    }
}
