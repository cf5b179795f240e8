//! Instruction encoding to LS-8 bytes

use ls8_spec::Instruction;

/// Encode instruction to its 1-3 byte form
pub fn encode(instr: &Instruction) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(instr.len());
    encode_into(instr, &mut bytes);
    bytes
}

/// Append the encoded instruction to `out`
pub fn encode_into(instr: &Instruction, out: &mut Vec<u8>) {
    out.push(instr.opcode().to_u8());
    match instr {
        Instruction::Hlt | Instruction::Ret => {}
        Instruction::Ldi { rd, imm } => {
            out.push(rd.index() as u8);
            out.push(*imm);
        }
        Instruction::Prn { rs } | Instruction::Push { rs } | Instruction::Call { rs } => {
            out.push(rs.index() as u8);
        }
        Instruction::Pop { rd } => out.push(rd.index() as u8),
        Instruction::Alu { ra, rb, .. } => {
            out.push(ra.index() as u8);
            out.push(rb.index() as u8);
        }
    }
}
