//! Instruction formatting to assembly text

use ls8_spec::Instruction;

/// Format instruction as assembly text
///
/// The output is accepted by `ls8_assembler::parse_instruction`.
pub fn format(instr: &Instruction) -> String {
    let mnemonic = instr.opcode().mnemonic();
    match instr {
        Instruction::Hlt | Instruction::Ret => mnemonic.to_string(),
        Instruction::Ldi { rd, imm } => format!("{} {}, {}", mnemonic, rd, imm),
        Instruction::Prn { rs } | Instruction::Push { rs } | Instruction::Call { rs } => {
            format!("{} {}", mnemonic, rs)
        }
        Instruction::Pop { rd } => format!("{} {}", mnemonic, rd),
        Instruction::Alu { ra, rb, .. } => format!("{} {}, {}", mnemonic, ra, rb),
    }
}
