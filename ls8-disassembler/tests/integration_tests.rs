//! Integration tests for the LS-8 disassembler
//!
//! Tests the complete disassembly workflow including:
//! - Instruction decoding for every opcode
//! - Output formatting that the assembler reads back
//! - Error handling for invalid encodings

use ls8_assembler::{assemble, encode, parse_instruction};
use ls8_disassembler::{decode, disassemble, format, DisassemblerError};
use ls8_spec::{AluOp, Instruction, Opcode, Program, Register};

fn all_instructions() -> Vec<Instruction> {
    vec![
        Instruction::Hlt,
        Instruction::Ret,
        Instruction::Ldi { rd: Register::R3, imm: 0x7F },
        Instruction::Prn { rs: Register::R1 },
        Instruction::Push { rs: Register::R2 },
        Instruction::Pop { rd: Register::R6 },
        Instruction::Call { rs: Register::R4 },
        Instruction::Alu { op: AluOp::Add, ra: Register::R5, rb: Register::R0 },
        Instruction::Alu { op: AluOp::Mul, ra: Register::R1, rb: Register::R2 },
    ]
}

// ============================================================================
// Decode Tests
// ============================================================================

#[test]
fn test_decode_every_opcode() {
    for instr in all_instructions() {
        let bytes = encode(&instr);
        assert_eq!(decode(&bytes).unwrap(), instr);
    }
}

#[test]
fn test_format_is_reassemblable() {
    for instr in all_instructions() {
        let text = format(&instr);
        assert_eq!(parse_instruction(&text).unwrap(), instr, "{}", text);
    }
}

#[test]
fn test_every_unassigned_byte_is_rejected() {
    for byte in 0..=u8::MAX {
        let result = decode(&[byte, 0, 0]);
        match Opcode::from_u8(byte) {
            Some(_) => assert!(result.is_ok(), "byte {:#04x}", byte),
            None => assert!(
                matches!(
                    result,
                    Err(DisassemblerError::UnknownOpcode(b))
                        | Err(DisassemblerError::UnsupportedAluOperation(b)) if b == byte
                ),
                "byte {:#04x}",
                byte
            ),
        }
    }
}

// ============================================================================
// Listing Tests
// ============================================================================

#[test]
fn test_disassemble_call_program() {
    let source = r#"
        LDI R1, double
        LDI R0, 4
        CALL R1
        PRN R0
        HLT
    double:
        ADD R0, R0
        RET
    "#;

    let program = assemble(source).unwrap();
    let listing = disassemble(&program);

    for line in ["LDI R1, 11", "LDI R0, 4", "CALL R1", "PRN R0", "HLT", "ADD R0, R0", "RET"] {
        assert!(listing.contains(line), "missing {:?} in\n{}", line, listing);
    }
    assert!(listing.contains("0x0B:  A0 00 00  ADD R0, R0"));
}

#[test]
fn test_disassemble_empty_program() {
    let listing = disassemble(&Program::default());
    assert!(listing.contains("Size: 0 bytes"));
}
