//! Instruction decoder

use ls8_spec::{AluOp, Instruction, Opcode, Register};

use crate::error::{DisassemblerError, Result};

/// ALU class bytes: two operands, ALU flag, PC not set by the instruction
fn is_alu_class(byte: u8) -> bool {
    Opcode::operand_count_of(byte) == 2
        && Opcode::is_alu_byte(byte)
        && byte & Opcode::SETS_PC_FLAG == 0
}

/// Classify an opcode byte
///
/// ALU-class bytes that are not implemented report
/// [`DisassemblerError::UnsupportedAluOperation`]; every other unassigned
/// byte is [`DisassemblerError::UnknownOpcode`].
pub fn decode_opcode(byte: u8) -> Result<Opcode> {
    match Opcode::from_u8(byte) {
        Some(opcode) => Ok(opcode),
        None if is_alu_class(byte) => {
            Err(DisassemblerError::UnsupportedAluOperation(byte))
        }
        None => Err(DisassemblerError::UnknownOpcode(byte)),
    }
}

/// Total length of the instruction starting with `byte`
pub fn instruction_len(byte: u8) -> Result<usize> {
    decode_opcode(byte).map(Opcode::len)
}

/// Decode the instruction at the start of `bytes`
///
/// Only the bytes the opcode needs are read; trailing bytes are ignored.
pub fn decode(bytes: &[u8]) -> Result<Instruction> {
    let Some(&byte) = bytes.first() else {
        return Err(DisassemblerError::Truncated {
            opcode: 0,
            expected: 1,
            found: 0,
        });
    };

    let opcode = decode_opcode(byte)?;
    if bytes.len() < opcode.len() {
        return Err(DisassemblerError::Truncated {
            opcode: byte,
            expected: opcode.len(),
            found: bytes.len(),
        });
    }

    let reg = |index: u8| {
        Register::from_index(index).ok_or(DisassemblerError::InvalidRegister {
            opcode: byte,
            index,
        })
    };

    let instr = match opcode {
        Opcode::Hlt => Instruction::Hlt,
        Opcode::Ret => Instruction::Ret,
        Opcode::Ldi => Instruction::Ldi {
            rd: reg(bytes[1])?,
            imm: bytes[2],
        },
        Opcode::Prn => Instruction::Prn { rs: reg(bytes[1])? },
        Opcode::Push => Instruction::Push { rs: reg(bytes[1])? },
        Opcode::Pop => Instruction::Pop { rd: reg(bytes[1])? },
        Opcode::Call => Instruction::Call { rs: reg(bytes[1])? },
        Opcode::Add | Opcode::Mul => Instruction::Alu {
            op: AluOp::from_opcode(byte)
                .map_err(|_| DisassemblerError::UnsupportedAluOperation(byte))?,
            ra: reg(bytes[1])?,
            rb: reg(bytes[2])?,
        },
    };

    Ok(instr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_ldi() {
        let instr = decode(&[0x82, 0x00, 0x08]).unwrap();
        assert_eq!(instr, Instruction::Ldi { rd: Register::R0, imm: 8 });
    }

    #[test]
    fn test_decode_ignores_trailing_bytes() {
        let instr = decode(&[0x47, 0x03, 0xFF]).unwrap();
        assert_eq!(instr, Instruction::Prn { rs: Register::R3 });
    }

    #[test]
    fn test_decode_alu() {
        assert_eq!(
            decode(&[0xA0, 0x00, 0x01]).unwrap(),
            Instruction::Alu { op: AluOp::Add, ra: Register::R0, rb: Register::R1 }
        );
        assert_eq!(
            decode(&[0xA2, 0x02, 0x03]).unwrap(),
            Instruction::Alu { op: AluOp::Mul, ra: Register::R2, rb: Register::R3 }
        );
    }

    #[test]
    fn test_unknown_opcode() {
        assert_eq!(decode(&[0x00]), Err(DisassemblerError::UnknownOpcode(0x00)));
        assert_eq!(decode(&[0xFF, 0, 0]), Err(DisassemblerError::UnknownOpcode(0xFF)));
    }

    #[test]
    fn test_unsupported_alu_operation() {
        // SUB, DIV and friends share the ALU class but are not implemented
        assert_eq!(
            decode(&[0xA1, 0, 1]),
            Err(DisassemblerError::UnsupportedAluOperation(0xA1))
        );
        assert_eq!(
            decode_opcode(0xA3),
            Err(DisassemblerError::UnsupportedAluOperation(0xA3))
        );
    }

    #[test]
    fn test_invalid_register() {
        assert_eq!(
            decode(&[0x47, 0x08]),
            Err(DisassemblerError::InvalidRegister { opcode: 0x47, index: 8 })
        );
    }

    #[test]
    fn test_truncated() {
        assert_eq!(
            decode(&[0x82, 0x00]),
            Err(DisassemblerError::Truncated { opcode: 0x82, expected: 3, found: 2 })
        );
        assert!(decode(&[]).is_err());
    }

    #[test]
    fn test_instruction_len() {
        assert_eq!(instruction_len(0x01), Ok(1));
        assert_eq!(instruction_len(0x50), Ok(2));
        assert_eq!(instruction_len(0xA2), Ok(3));
        assert!(instruction_len(0xFF).is_err());
    }
}
