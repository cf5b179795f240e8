//! ALU operation set
//!
//! Results are truncated to the 8-bit cell width.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::SpecError;
use crate::opcode::Opcode;
use crate::Word;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AluOp {
    Add,
    Mul,
}

impl AluOp {
    /// Map an ALU-flagged opcode byte to its operation
    pub fn from_opcode(byte: u8) -> Result<Self, SpecError> {
        match Opcode::from_u8(byte) {
            Some(Opcode::Add) => Ok(AluOp::Add),
            Some(Opcode::Mul) => Ok(AluOp::Mul),
            _ => Err(SpecError::UnsupportedAluOperation(format!("{byte:#04x}"))),
        }
    }

    pub const fn opcode(self) -> Opcode {
        match self {
            AluOp::Add => Opcode::Add,
            AluOp::Mul => Opcode::Mul,
        }
    }

    pub const fn name(self) -> &'static str {
        self.opcode().mnemonic()
    }

    /// Compute `a op b` with 8-bit wraparound
    #[inline]
    pub fn compute(self, a: Word, b: Word) -> Word {
        match self {
            AluOp::Add => a.wrapping_add(b),
            AluOp::Mul => a.wrapping_mul(b),
        }
    }
}

impl FromStr for AluOp {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ADD" => Ok(AluOp::Add),
            "MUL" => Ok(AluOp::Mul),
            _ => Err(SpecError::UnsupportedAluOperation(s.to_string())),
        }
    }
}
