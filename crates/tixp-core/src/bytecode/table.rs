//! Instruction Table
//!
//! Immutable bidirectional map between instruction names and opcodes.
//! Read-only after construction; safe to share between threads.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::{TixpError, TixpResult};

use super::instruction::Instruction;
use super::opcode::Opcode;
use super::tokens;

static STANDARD: LazyLock<InstructionTable> =
    LazyLock::new(|| InstructionTable::build(tokens::STANDARD_TOKENS.iter().cloned()).0);

/// Lookup table used by both the decoder and the encoder helpers
#[derive(Debug, Clone, Default)]
pub struct InstructionTable {
    by_opcode: HashMap<Opcode, Instruction>,
    by_name: HashMap<String, Opcode>,
    // registration order, for iteration
    order: Vec<Opcode>,
}

impl InstructionTable {
    /// Build a table from entries, rejecting duplicate opcodes.
    ///
    /// Display names may repeat; `lookup_name` returns the first entry
    /// registered under a name.
    pub fn new<I>(entries: I) -> TixpResult<Self>
    where
        I: IntoIterator<Item = Instruction>,
    {
        let (table, duplicates) = Self::build(entries);
        match duplicates.into_iter().next() {
            Some(opcode) => Err(TixpError::DuplicateOpcode {
                opcode: opcode.as_bytes().to_vec(),
            }),
            None => Ok(table),
        }
    }

    /// The built-in TI-83 Plus token table
    pub fn standard() -> &'static InstructionTable {
        &STANDARD
    }

    fn build<I>(entries: I) -> (Self, Vec<Opcode>)
    where
        I: IntoIterator<Item = Instruction>,
    {
        let mut table = InstructionTable::default();
        let mut duplicates = Vec::new();

        for instruction in entries {
            let opcode = instruction.opcode();
            if table.by_opcode.contains_key(&opcode) {
                duplicates.push(opcode);
                continue;
            }
            table
                .by_name
                .entry(instruction.name().to_string())
                .or_insert(opcode);
            table.by_opcode.insert(opcode, instruction);
            table.order.push(opcode);
        }

        (table, duplicates)
    }

    /// Look up by exact opcode bytes (decode path)
    pub fn lookup_opcode(&self, bytes: &[u8]) -> Option<&Instruction> {
        Opcode::from_bytes(bytes).and_then(|op| self.by_opcode.get(&op))
    }

    pub fn get(&self, opcode: Opcode) -> Option<&Instruction> {
        self.by_opcode.get(&opcode)
    }

    /// Look up by display name (encode path)
    pub fn lookup_name(&self, name: &str) -> Option<&Instruction> {
        self.by_name.get(name).and_then(|op| self.by_opcode.get(op))
    }

    /// Like `lookup_name`, but a miss is an error
    pub fn require(&self, name: &str) -> TixpResult<&Instruction> {
        self.lookup_name(name).ok_or_else(|| TixpError::UnknownInstruction {
            name: name.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.by_opcode.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_opcode.is_empty()
    }

    /// Entries in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Instruction> + '_ {
        self.order.iter().filter_map(move |op| self.by_opcode.get(op))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_has_no_duplicate_opcodes() {
        let (_, duplicates) = InstructionTable::build(tokens::STANDARD_TOKENS.iter().cloned());
        assert!(duplicates.is_empty(), "duplicates: {:?}", duplicates);
        assert_eq!(InstructionTable::standard().len(), tokens::STANDARD_TOKENS.len());
    }

    #[test]
    fn lookups_agree_in_both_directions() {
        let table = InstructionTable::standard();
        let disp = table.lookup_name("Disp").expect("Disp missing");
        assert_eq!(disp.bytes(), &[0xDE]);
        assert_eq!(table.lookup_opcode(&[0xDE]), Some(disp));
        assert_eq!(table.lookup_opcode(&[0xBB, 0xB0]).map(|i| i.name()), Some("a"));
    }

    #[test]
    fn prefix_bytes_are_not_tokens() {
        let table = InstructionTable::standard();
        for prefix in [0x5C, 0x5D, 0x5E, 0x60, 0x61, 0x63, 0x7E, 0xAA, 0xBB] {
            assert!(table.lookup_opcode(&[prefix]).is_none(), "0x{:02X} is a prefix", prefix);
        }
    }

    #[test]
    fn duplicate_opcode_rejected() {
        let res = InstructionTable::new(vec![
            Instruction::single("A", 0x41),
            Instruction::single("also A", 0x41),
        ]);
        assert_eq!(res.unwrap_err(), TixpError::DuplicateOpcode { opcode: vec![0x41] });
    }

    #[test]
    fn name_collision_keeps_first_entry() {
        let table = InstructionTable::new(vec![
            Instruction::single("x", 0x01),
            Instruction::double("x", 0xBB, 0x01),
        ])
        .expect("table");
        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup_name("x").map(|i| i.opcode()), Some(Opcode::single(0x01)));
        let order: Vec<Opcode> = table.iter().map(|i| i.opcode()).collect();
        assert_eq!(order, vec![Opcode::single(0x01), Opcode::double(0xBB, 0x01)]);
    }

    #[test]
    fn require_reports_missing_name() {
        let err = InstructionTable::standard().require("NoSuchThing").unwrap_err();
        assert!(matches!(err, TixpError::UnknownInstruction { .. }));
    }
}
