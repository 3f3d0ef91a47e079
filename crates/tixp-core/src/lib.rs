//! tixp - .8xp Program Codec
//!
//! Public API surface for decoding and compiling TI-83 Plus family program
//! containers.

pub mod error;
pub mod config;
pub mod bytecode;
pub mod container;
pub mod decoder;
pub mod encoder;
pub mod program;

// Re-export commonly used types
pub use error::{TixpError, TixpResult};
pub use config::TixpConfig;
pub use bytecode::{tokens, Instruction, InstructionTable, Opcode};
pub use decoder::{decode, ProgramDecoder};
pub use encoder::ProgramEncoder;
pub use program::Program;
