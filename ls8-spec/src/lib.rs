//! # LS-8 Specification
//!
//! 8-bit register machine with one-byte opcodes.
//!
//! ## Key Features
//! - 8 general-purpose byte registers (R7 is the stack pointer)
//! - 256 bytes of flat memory, shared by code and stack
//! - 1-3 byte instructions; the two high opcode bits encode the operand count
//! - Stack grows downward from `STACK_TOP`
//!
//! ## Opcode Layout
//!
//! ```text
//! 7 6 | 5 | 4 | 3 2 1 0
//! ----+---+---+--------
//! ops |alu| pc| id
//! ```

pub mod alu;
pub mod error;
pub mod instruction;
pub mod opcode;
pub mod program;
pub mod register;

pub use alu::AluOp;
pub use error::{Result, SpecError};
pub use instruction::Instruction;
pub use opcode::Opcode;
pub use program::Program;
pub use register::{Register, NUM_REGISTERS};

/// Memory size in bytes
pub const MEMORY_SIZE: usize = 256;

/// Initial stack pointer value
pub const STACK_TOP: u8 = 0xF4;

/// Byte-wide register and memory cell
pub type Word = u8;

/// Memory address (0x00-0xFF)
pub type Address = u8;
