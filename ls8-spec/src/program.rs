//! # Program Image for LS-8
//!
//! A program is the raw byte image copied into memory at address 0.

use crate::error::SpecError;
use crate::MEMORY_SIZE;
use std::fmt;

/// Complete program image
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    /// Instruction and data bytes, loaded from address 0
    pub code: Vec<u8>,
}

impl Program {
    /// Create a program from raw bytes without validating its size
    pub fn new(code: Vec<u8>) -> Self {
        Self { code }
    }

    /// Create a program, rejecting images that do not fit in memory
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SpecError> {
        let program = Self::new(bytes.to_vec());
        program.validate()?;
        Ok(program)
    }

    /// Validate the program
    pub fn validate(&self) -> Result<(), SpecError> {
        if self.code.len() > MEMORY_SIZE {
            return Err(SpecError::ProgramTooLarge {
                size: self.code.len(),
                capacity: MEMORY_SIZE,
            });
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.code
    }
}

impl From<Vec<u8>> for Program {
    fn from(code: Vec<u8>) -> Self {
        Self::new(code)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "LS-8 Program")?;
        writeln!(f, "  Size:        {} bytes", self.code.len())?;
        writeln!(f, "  Free:        {} bytes", MEMORY_SIZE.saturating_sub(self.code.len()))?;
        Ok(())
    }
}
