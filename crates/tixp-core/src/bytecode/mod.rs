//! Token layer: opcodes, named instructions and the lookup table.

pub mod instruction;
pub mod opcode;
pub mod table;
pub mod tokens;

pub use instruction::Instruction;
pub use opcode::Opcode;
pub use table::InstructionTable;
