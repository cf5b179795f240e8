//! Assembler errors

use ls8_spec::SpecError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssemblerError {
    #[error("Syntax error at line {line}, column {column}: {message}")]
    SyntaxError {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Unknown instruction at line {line}: {name}")]
    UnknownInstruction { line: usize, name: String },

    #[error("Invalid register at line {line}: {name}")]
    InvalidRegister { line: usize, name: String },

    #[error("Invalid immediate value at line {line}: {value}")]
    InvalidImmediate { line: usize, value: String },

    #[error("Undefined label at line {line}: {label}")]
    UndefinedLabel { line: usize, label: String },

    #[error("Duplicate label at line {line}: {label}")]
    DuplicateLabel { line: usize, label: String },

    #[error("Invalid binary literal at line {line}: {text:?}")]
    InvalidLiteral { line: usize, text: String },

    #[error("Spec error: {0}")]
    Spec(#[from] SpecError),
}

impl AssemblerError {
    /// Source line the error points at, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            AssemblerError::SyntaxError { line, .. }
            | AssemblerError::UnknownInstruction { line, .. }
            | AssemblerError::InvalidRegister { line, .. }
            | AssemblerError::InvalidImmediate { line, .. }
            | AssemblerError::UndefinedLabel { line, .. }
            | AssemblerError::DuplicateLabel { line, .. }
            | AssemblerError::InvalidLiteral { line, .. } => Some(*line),
            AssemblerError::Spec(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AssemblerError>;
