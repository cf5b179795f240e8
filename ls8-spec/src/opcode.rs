//! # LS-8 Opcode Definitions
//!
//! Opcodes are a single byte laid out as `AABCDDDD`:
//! - `AA`: number of operand bytes that follow (0-2)
//! - `B`: 1 if the instruction is handled by the ALU
//! - `C`: 1 if the instruction sets the PC itself
//! - `DDDD`: instruction identifier

use serde::{Deserialize, Serialize};

/// Instruction opcode
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opcode {
    // ========== System ==========
    /// HLT: stop the machine
    Hlt = 0b0000_0001,
    /// LDI: R[a] = imm
    Ldi = 0b1000_0010,
    /// PRN: print R[a] as decimal
    Prn = 0b0100_0111,

    // ========== ALU ==========
    /// ADD: R[a] = R[a] + R[b]
    Add = 0b1010_0000,
    /// MUL: R[a] = R[a] * R[b]
    Mul = 0b1010_0010,

    // ========== Stack ==========
    /// PUSH: SP -= 1; M[SP] = R[a]
    Push = 0b0100_0101,
    /// POP: R[a] = M[SP]; SP += 1
    Pop = 0b0100_0110,

    // ========== Subroutines ==========
    /// CALL: push return address, PC = R[a]
    Call = 0b0101_0000,
    /// RET: pop return address into PC
    Ret = 0b0001_0001,
}

impl Opcode {
    /// Bit set on every ALU opcode
    pub const ALU_FLAG: u8 = 0b0010_0000;

    /// Bit set on every opcode that moves the PC itself
    pub const SETS_PC_FLAG: u8 = 0b0001_0000;

    pub const ALL: [Opcode; 9] = [
        Opcode::Hlt,
        Opcode::Ldi,
        Opcode::Prn,
        Opcode::Add,
        Opcode::Mul,
        Opcode::Push,
        Opcode::Pop,
        Opcode::Call,
        Opcode::Ret,
    ];

    /// Try to convert from u8
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x01 => Some(Opcode::Hlt),
            0x82 => Some(Opcode::Ldi),
            0x47 => Some(Opcode::Prn),
            0xA0 => Some(Opcode::Add),
            0xA2 => Some(Opcode::Mul),
            0x45 => Some(Opcode::Push),
            0x46 => Some(Opcode::Pop),
            0x50 => Some(Opcode::Call),
            0x11 => Some(Opcode::Ret),
            _ => None,
        }
    }

    /// Look up an opcode by its mnemonic (case-insensitive)
    pub fn from_mnemonic(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|op| op.mnemonic().eq_ignore_ascii_case(name))
    }

    /// Convert to u8
    #[inline]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Number of operand bytes encoded in any opcode byte
    #[inline]
    pub const fn operand_count_of(byte: u8) -> usize {
        (byte >> 6) as usize
    }

    /// Total encoded length of any opcode byte, including operands
    #[inline]
    pub const fn len_of(byte: u8) -> usize {
        Self::operand_count_of(byte) + 1
    }

    /// Whether an opcode byte carries the ALU flag
    #[inline]
    pub const fn is_alu_byte(byte: u8) -> bool {
        byte & Self::ALU_FLAG != 0
    }

    #[inline]
    pub const fn operand_count(self) -> usize {
        Self::operand_count_of(self as u8)
    }

    /// Instruction length in bytes
    #[inline]
    pub const fn len(self) -> usize {
        Self::len_of(self as u8)
    }

    #[inline]
    pub const fn is_alu(self) -> bool {
        Self::is_alu_byte(self as u8)
    }

    /// True if executing this opcode leaves the PC where the instruction put it
    #[inline]
    pub const fn sets_pc(self) -> bool {
        self as u8 & Self::SETS_PC_FLAG != 0
    }

    pub const fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Hlt => "HLT",
            Opcode::Ldi => "LDI",
            Opcode::Prn => "PRN",
            Opcode::Add => "ADD",
            Opcode::Mul => "MUL",
            Opcode::Push => "PUSH",
            Opcode::Pop => "POP",
            Opcode::Call => "CALL",
            Opcode::Ret => "RET",
        }
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mnemonic())
    }
}
