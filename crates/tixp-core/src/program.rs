//! Decoded Program
//!
//! Immutable result of decoding a container. Hand it back to a
//! `ProgramEncoder` via `to_encoder` to compile a new copy.

use std::fmt;

use crate::bytecode::tokens::NEWLINE;
use crate::bytecode::Instruction;
use crate::encoder::ProgramEncoder;

/// Program metadata plus its instructions in execution order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub(crate) comment: String,
    pub(crate) uneditable: bool,
    pub(crate) name: String,
    pub(crate) instructions: Vec<Instruction>,
}

impl Program {
    /// Typically "Created by TI Connect ..." when produced by vendor tools
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Locked programs cannot be edited on the calculator
    pub fn is_uneditable(&self) -> bool {
        self.uneditable
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Total opcode bytes across all instructions
    pub fn code_len(&self) -> usize {
        self.instructions.iter().map(|i| i.bytes().len()).sum()
    }

    /// Seed a fresh builder with this program's fields
    pub fn to_encoder(&self) -> ProgramEncoder {
        ProgramEncoder::from_parts(
            self.name.clone(),
            self.comment.clone(),
            self.uneditable,
            self.instructions.clone(),
        )
    }

    /// Render the instructions as source text, one line per newline token.
    ///
    /// Command words are followed by a space so `Disp` and its argument do
    /// not run together.
    pub fn listing(&self) -> String {
        let mut out = String::new();
        let mut iter = self.instructions.iter().peekable();
        while let Some(instruction) = iter.next() {
            let name = instruction.name();
            out.push_str(name);
            if *instruction == NEWLINE {
                continue;
            }
            let is_word = name.chars().count() > 1
                && name.chars().last().is_some_and(|c| c.is_ascii_alphanumeric());
            let at_line_end = iter.peek().is_none_or(|next| **next == NEWLINE);
            if is_word && !at_line_end {
                out.push(' ');
            }
        }
        out
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Comment: {}", self.comment)?;
        writeln!(f, "Uneditable: {}", self.uneditable)?;
        writeln!(f, "Name: {}", self.name)?;
        write!(f, "Instructions: ")?;
        if self.instructions.is_empty() {
            return write!(f, "None");
        }
        write!(f, "[")?;
        for (i, instruction) in self.instructions.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", instruction.name().escape_debug())?;
        }
        write!(f, "]")
    }
}
