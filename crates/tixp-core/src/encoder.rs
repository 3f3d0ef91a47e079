//! Program Encoder
//!
//! Builder that accumulates program metadata and instructions and compiles
//! them into the exact .8xp container layout. One builder per program; the
//! setters take `&mut self`, so a builder is never shared between threads.

use std::fmt;

use tracing::debug;

use crate::bytecode::Instruction;
use crate::container::{
    self, Checksum, COMMENT_LEN, DATA_SECTION_OVERHEAD, ENTRY_MARKER_VALUE, MAGIC, MAX_CODE_LEN,
    MIN_CONTAINER_LEN, NAME_LEN, VARIABLE_OVERHEAD,
};
use crate::error::{TixpError, TixpResult};
use crate::program::Program;

pub const DEFAULT_NAME: &str = "Untitled";
pub const DEFAULT_COMMENT: &str = "Created by tixp";

/// Accumulating builder; `compile` may be called any number of times
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramEncoder {
    name: String,
    comment: String,
    uneditable: bool,
    instructions: Vec<Instruction>,
}

impl Default for ProgramEncoder {
    fn default() -> Self {
        ProgramEncoder {
            name: DEFAULT_NAME.to_string(),
            comment: DEFAULT_COMMENT.to_string(),
            uneditable: false,
            instructions: Vec::new(),
        }
    }
}

impl ProgramEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_parts(
        name: String,
        comment: String,
        uneditable: bool,
        instructions: Vec<Instruction>,
    ) -> Self {
        ProgramEncoder {
            name,
            comment,
            uneditable,
            instructions,
        }
    }

    /// Set the program name (at most 8 bytes)
    pub fn set_name(&mut self, name: impl Into<String>) -> TixpResult<&mut Self> {
        let name = name.into();
        check_field("name", &name, NAME_LEN)?;
        self.name = name;
        Ok(self)
    }

    /// Set the comment (at most 42 bytes)
    pub fn set_comment(&mut self, comment: impl Into<String>) -> TixpResult<&mut Self> {
        let comment = comment.into();
        check_field("comment", &comment, COMMENT_LEN)?;
        self.comment = comment;
        Ok(self)
    }

    /// Lock the program against editing on the calculator
    pub fn set_uneditable(&mut self, uneditable: bool) -> &mut Self {
        self.uneditable = uneditable;
        self
    }

    pub fn append(&mut self, instruction: Instruction) -> &mut Self {
        self.instructions.push(instruction);
        self
    }

    pub fn append_all<I>(&mut self, instructions: I) -> &mut Self
    where
        I: IntoIterator<Item = Instruction>,
    {
        self.instructions.extend(instructions);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn is_uneditable(&self) -> bool {
        self.uneditable
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Total opcode bytes across all instructions
    pub fn code_len(&self) -> usize {
        self.instructions.iter().map(|i| i.bytes().len()).sum()
    }

    /// Snapshot of the accumulated state as a `Program`
    pub fn to_program(&self) -> Program {
        Program {
            comment: self.comment.clone(),
            uneditable: self.uneditable,
            name: self.name.clone(),
            instructions: self.instructions.clone(),
        }
    }

    /// Serialize into container bytes.
    ///
    /// Fails only when the instruction stream is too long for the 16-bit
    /// length fields.
    pub fn compile(&self) -> TixpResult<Vec<u8>> {
        let comment = encode_field("comment", &self.comment, COMMENT_LEN)?;
        let name = encode_field("name", &self.name, NAME_LEN)?;

        let code_len = self.code_len();
        if code_len > MAX_CODE_LEN {
            return Err(TixpError::ConstraintViolation {
                field: "instructions",
                len: code_len,
                max: MAX_CODE_LEN,
            });
        }
        let code_len = code_len as u16;
        let variable_len = code_len + VARIABLE_OVERHEAD as u16;

        let mut w = ContainerWriter::with_capacity(MIN_CONTAINER_LEN + code_len as usize);

        // Header
        w.write_bytes(&MAGIC);
        w.write_padded(&comment, COMMENT_LEN);
        w.write_u16(code_len + DATA_SECTION_OVERHEAD as u16);

        // Variable entry
        w.write_summed_u8(ENTRY_MARKER_VALUE);
        w.write_u8(0);
        w.write_summed_u16(variable_len);
        w.write_summed_u8(container::protection_byte(self.uneditable));
        w.write_padded(&name, NAME_LEN);
        w.checksum.add_bytes(&name);
        w.write_bytes(&[0, 0]);
        w.write_summed_u16(variable_len);

        // Program data
        w.write_summed_u16(code_len);
        for instruction in &self.instructions {
            w.write_summed_bytes(instruction.bytes());
        }

        let checksum = w.checksum.value();
        w.write_u16(checksum);

        debug!(
            name = %self.name,
            instructions = self.instructions.len(),
            code_len,
            checksum,
            "compiled program"
        );
        Ok(w.finish())
    }
}

impl fmt::Display for ProgramEncoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Comment: {}", self.comment)?;
        writeln!(f, "Uneditable: {}", self.uneditable)?;
        writeln!(f, "Name: {}", self.name)?;
        write!(f, "Instructions: [")?;
        for (i, instruction) in self.instructions.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(
                f,
                "[{}, {}]",
                instruction.opcode(),
                instruction.name().escape_debug()
            )?;
        }
        write!(f, "]")
    }
}

/// Byte sink that tracks the running checksum alongside the output
struct ContainerWriter {
    buf: Vec<u8>,
    checksum: Checksum,
}

impl ContainerWriter {
    fn with_capacity(capacity: usize) -> Self {
        ContainerWriter {
            buf: Vec::with_capacity(capacity),
            checksum: Checksum::new(),
        }
    }

    fn finish(self) -> Vec<u8> {
        self.buf
    }

    fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    fn write_u16(&mut self, v: u16) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    /// Left-justified, zero-padded to `width`
    fn write_padded(&mut self, bytes: &[u8], width: usize) {
        self.buf.extend_from_slice(bytes);
        self.buf.resize(self.buf.len() + (width - bytes.len()), 0);
    }

    fn write_summed_u8(&mut self, v: u8) {
        self.write_u8(v);
        self.checksum.add_byte(v);
    }

    fn write_summed_u16(&mut self, v: u16) {
        self.write_u16(v);
        self.checksum.add_value(v);
    }

    fn write_summed_bytes(&mut self, bytes: &[u8]) {
        self.write_bytes(bytes);
        self.checksum.add_bytes(bytes);
    }
}

/// Setter validation: NUL is reserved for field padding
fn check_field(field: &'static str, text: &str, max: usize) -> TixpResult<()> {
    if text.contains('\0') {
        return Err(TixpError::UnencodableText { field, ch: '\0' });
    }
    encode_field(field, text, max).map(|_| ())
}

/// Latin-1 encode `text`, one byte per character, enforcing `max` bytes
fn encode_field(field: &'static str, text: &str, max: usize) -> TixpResult<Vec<u8>> {
    let bytes = text
        .chars()
        .map(|ch| u8::try_from(ch).map_err(|_| TixpError::UnencodableText { field, ch }))
        .collect::<TixpResult<Vec<u8>>>()?;
    if bytes.len() > max {
        return Err(TixpError::ConstraintViolation {
            field,
            len: bytes.len(),
            max,
        });
    }
    Ok(bytes)
}
