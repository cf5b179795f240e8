//! Main disassembler logic

use ls8_spec::Program;

use crate::decoder::decode;
use crate::formatter::format;

/// Disassemble a program into an annotated listing
///
/// Bytes that do not decode are emitted one at a time as `.db` lines so the
/// rest of the image is still listed.
pub fn disassemble(program: &Program) -> String {
    let bytes = program.as_bytes();
    let mut output = String::new();

    output.push_str("; LS-8 Disassembly\n");
    output.push_str(&format!("; Size: {} bytes\n", bytes.len()));
    output.push('\n');

    let mut addr = 0usize;
    while addr < bytes.len() {
        let (len, text) = match decode(&bytes[addr..]) {
            Ok(instr) => (instr.len(), format(&instr)),
            Err(e) => (1, format!(".db 0x{:02X} ; ERROR: {}", bytes[addr], e)),
        };

        let hex: Vec<String> = bytes[addr..addr + len]
            .iter()
            .map(|b| format!("{:02X}", b))
            .collect();

        output.push_str(&format!("0x{:02X}:  {:<10}{}\n", addr, hex.join(" "), text));
        addr += len;
    }

    output
}
