//! Disassembler errors

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DisassemblerError {
    #[error("Unknown opcode: 0x{0:02X}")]
    UnknownOpcode(u8),

    #[error("Unsupported ALU operation: 0x{0:02X}")]
    UnsupportedAluOperation(u8),

    #[error("Invalid register {index} in {opcode:#04x} instruction")]
    InvalidRegister { opcode: u8, index: u8 },

    #[error("Truncated instruction: opcode 0x{opcode:02X} needs {expected} bytes, found {found}")]
    Truncated {
        opcode: u8,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, DisassemblerError>;
