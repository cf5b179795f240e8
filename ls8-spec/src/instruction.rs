//! LS-8 Instruction Set
//!
//! Instructions are 1-3 bytes: `[opcode][operand a][operand b]`.
//! - 1 byte:  HLT, RET
//! - 2 bytes: PRN, PUSH, POP, CALL (`a` = register)
//! - 3 bytes: LDI (`a` = register, `b` = immediate), ADD, MUL (`a`, `b` = registers)

use crate::alu::AluOp;
use crate::opcode::Opcode;
use crate::register::Register;
use crate::Word;
use serde::{Deserialize, Serialize};

/// Decoded LS-8 instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    /// HLT: halt the machine
    Hlt,

    /// LDI: rd = imm
    Ldi { rd: Register, imm: Word },

    /// PRN: print rs as a decimal integer
    Prn { rs: Register },

    /// ADD / MUL: ra = ra op rb
    Alu { op: AluOp, ra: Register, rb: Register },

    /// PUSH: SP -= 1; mem[SP] = rs
    Push { rs: Register },

    /// POP: rd = mem[SP]; SP += 1
    Pop { rd: Register },

    /// CALL: SP -= 1; mem[SP] = PC + 2; PC = rs
    Call { rs: Register },

    /// RET: PC = mem[SP]; SP += 1
    Ret,
}

impl Instruction {
    pub fn opcode(&self) -> Opcode {
        match self {
            Instruction::Hlt => Opcode::Hlt,
            Instruction::Ldi { .. } => Opcode::Ldi,
            Instruction::Prn { .. } => Opcode::Prn,
            Instruction::Alu { op, .. } => op.opcode(),
            Instruction::Push { .. } => Opcode::Push,
            Instruction::Pop { .. } => Opcode::Pop,
            Instruction::Call { .. } => Opcode::Call,
            Instruction::Ret => Opcode::Ret,
        }
    }

    /// Encoded length in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.opcode().len()
    }

    #[inline]
    pub fn sets_pc(&self) -> bool {
        self.opcode().sets_pc()
    }
}
