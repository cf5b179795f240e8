//! # Error Types for LS-8

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpecError {
    #[error("Program too large: {size} bytes (memory holds {capacity})")]
    ProgramTooLarge { size: usize, capacity: usize },

    #[error("Unsupported ALU operation: {0}")]
    UnsupportedAluOperation(String),

    #[error("Invalid register index: {0} (valid range: 0-7)")]
    InvalidRegister(u8),
}

pub type Result<T> = std::result::Result<T, SpecError>;
