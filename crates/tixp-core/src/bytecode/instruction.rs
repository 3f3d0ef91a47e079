//! Instruction Representation
//!
//! An instruction pairs a display name with its opcode. Instructions are
//! roughly the keys and menu entries of the calculator. The opcode is the
//! identity: two instructions with the same display name but different
//! opcodes are distinct.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::opcode::Opcode;

/// Named token
#[derive(Debug, Clone)]
pub struct Instruction {
    name: Cow<'static, str>,
    opcode: Opcode,
}

impl Instruction {
    /// Create an instruction with a single-byte opcode
    pub const fn single(name: &'static str, byte: u8) -> Self {
        Instruction {
            name: Cow::Borrowed(name),
            opcode: Opcode::single(byte),
        }
    }

    /// Create an instruction with a two-byte opcode
    pub const fn double(name: &'static str, prefix: u8, byte: u8) -> Self {
        Instruction {
            name: Cow::Borrowed(name),
            opcode: Opcode::double(prefix, byte),
        }
    }

    /// Create an instruction with a runtime name
    pub fn new(name: impl Into<Cow<'static, str>>, opcode: Opcode) -> Self {
        Instruction {
            name: name.into(),
            opcode,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn opcode(&self) -> Opcode {
        self.opcode
    }

    pub fn bytes(&self) -> &[u8] {
        self.opcode.as_bytes()
    }
}

impl PartialEq for Instruction {
    fn eq(&self, other: &Self) -> bool {
        self.opcode == other.opcode
    }
}

impl Eq for Instruction {}

impl Hash for Instruction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.opcode.hash(state);
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
