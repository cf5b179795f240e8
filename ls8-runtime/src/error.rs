//! Runtime error types for LS-8
//!
//! Every variant is a fault: the machine that raised it cannot be resumed.

use ls8_disassembler::DisassemblerError;
use ls8_spec::SpecError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Spec error: {0}")]
    SpecError(#[from] SpecError),

    #[error("Load overflow: program is {size} bytes, memory holds {capacity}")]
    LoadOverflow { size: usize, capacity: usize },

    #[error("Unknown opcode {opcode:#04x} at PC {pc:#04x}")]
    UnknownOpcode { pc: u8, opcode: u8 },

    #[error("Unsupported ALU operation {opcode:#04x} at PC {pc:#04x}")]
    UnsupportedAluOperation { pc: u8, opcode: u8 },

    #[error("Address out of range: {address} (PC {pc:#04x}, opcode {opcode:#04x})")]
    AddressOutOfRange { pc: u8, opcode: u8, address: i32 },

    #[error("Invalid register index {index} (PC {pc:#04x}, opcode {opcode:#04x})")]
    InvalidRegister { pc: u8, opcode: u8, index: u8 },

    #[error("Machine faulted earlier and cannot be resumed")]
    MachineFaulted,

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl RuntimeError {
    /// Attach the fetch address to a decoder error
    pub fn from_decode(err: DisassemblerError, pc: u8) -> Self {
        match err {
            DisassemblerError::UnknownOpcode(opcode) => RuntimeError::UnknownOpcode { pc, opcode },
            DisassemblerError::UnsupportedAluOperation(opcode) => {
                RuntimeError::UnsupportedAluOperation { pc, opcode }
            }
            DisassemblerError::InvalidRegister { opcode, index } => {
                RuntimeError::InvalidRegister { pc, opcode, index }
            }
            DisassemblerError::Truncated {
                opcode, found, ..
            } => RuntimeError::AddressOutOfRange {
                pc,
                opcode,
                address: pc as i32 + found as i32,
            },
        }
    }

    /// PC of the faulting instruction, when the fault happened during execution
    pub fn pc(&self) -> Option<u8> {
        match self {
            RuntimeError::UnknownOpcode { pc, .. }
            | RuntimeError::UnsupportedAluOperation { pc, .. }
            | RuntimeError::AddressOutOfRange { pc, .. }
            | RuntimeError::InvalidRegister { pc, .. } => Some(*pc),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error as IoError, ErrorKind};

    #[test]
    fn test_load_overflow_display() {
        let err = RuntimeError::LoadOverflow {
            size: 300,
            capacity: 256,
        };
        assert_eq!(
            err.to_string(),
            "Load overflow: program is 300 bytes, memory holds 256"
        );
    }

    #[test]
    fn test_unknown_opcode_display() {
        let err = RuntimeError::UnknownOpcode { pc: 0x10, opcode: 0xFF };
        assert_eq!(err.to_string(), "Unknown opcode 0xff at PC 0x10");
    }

    #[test]
    fn test_address_out_of_range_display() {
        let err = RuntimeError::AddressOutOfRange {
            pc: 0x04,
            opcode: 0x45,
            address: -1,
        };
        assert_eq!(
            err.to_string(),
            "Address out of range: -1 (PC 0x04, opcode 0x45)"
        );
    }

    #[test]
    fn test_from_decode_keeps_context() {
        let err = RuntimeError::from_decode(DisassemblerError::UnknownOpcode(0x00), 7);
        assert!(matches!(err, RuntimeError::UnknownOpcode { pc: 7, opcode: 0x00 }));

        let err = RuntimeError::from_decode(
            DisassemblerError::InvalidRegister { opcode: 0x47, index: 9 },
            3,
        );
        assert!(matches!(
            err,
            RuntimeError::InvalidRegister { pc: 3, opcode: 0x47, index: 9 }
        ));
    }

    #[test]
    fn test_pc_accessor() {
        assert_eq!(RuntimeError::UnknownOpcode { pc: 5, opcode: 0 }.pc(), Some(5));
        assert_eq!(RuntimeError::MachineFaulted.pc(), None);
    }

    #[test]
    fn test_io_error_from() {
        let io_err = IoError::new(ErrorKind::BrokenPipe, "pipe closed");
        let runtime_err: RuntimeError = io_err.into();
        assert!(runtime_err.to_string().contains("pipe closed"));
    }

    #[test]
    fn test_spec_error_from() {
        let spec_err = SpecError::UnsupportedAluOperation("SUB".to_string());
        let runtime_err: RuntimeError = spec_err.into();
        assert!(runtime_err.to_string().contains("Unsupported ALU operation"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RuntimeError>();
    }
}
