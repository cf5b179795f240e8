//! Register definitions for LS-8

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::SpecError;

/// Number of registers
pub const NUM_REGISTERS: usize = 8;

/// Register (R0-R7)
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Register {
    R0 = 0,
    R1 = 1,
    R2 = 2,
    R3 = 3,
    R4 = 4,
    R5 = 5,
    R6 = 6,
    R7 = 7, // SP - stack pointer
}

impl Register {
    pub const SP: Self = Self::R7;

    pub const ALL: [Self; NUM_REGISTERS] = [
        Self::R0,
        Self::R1,
        Self::R2,
        Self::R3,
        Self::R4,
        Self::R5,
        Self::R6,
        Self::R7,
    ];

    #[inline]
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn is_sp(self) -> bool {
        self == Self::SP
    }
}

impl TryFrom<u8> for Register {
    type Error = SpecError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::from_index(index).ok_or(SpecError::InvalidRegister(index))
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_index() {
        for i in 0..NUM_REGISTERS as u8 {
            assert_eq!(Register::from_index(i).map(Register::index), Some(i as usize));
        }
        assert_eq!(Register::from_index(8), None);
        assert_eq!(Register::from_index(0xFF), None);
    }

    #[test]
    fn test_sp_is_r7() {
        assert_eq!(Register::SP, Register::R7);
        assert!(Register::R7.is_sp());
        assert!(!Register::R0.is_sp());
    }

    #[test]
    fn test_try_from_rejects_out_of_range() {
        assert_eq!(Register::try_from(3u8), Ok(Register::R3));
        assert_eq!(Register::try_from(8u8), Err(SpecError::InvalidRegister(8)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Register::R0.to_string(), "R0");
        assert_eq!(Register::SP.to_string(), "R7");
    }
}
