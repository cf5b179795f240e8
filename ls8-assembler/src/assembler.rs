//! Main assembler logic

use std::collections::HashMap;

use ls8_spec::Program;

use crate::encoder::encode_into;
use crate::error::{AssemblerError, Result};
use crate::parser::{build_instruction, parse_line, Statement};

/// Assemble source code into a program
///
/// Labels may be used before they are defined; addresses are resolved in a
/// second pass.
pub fn assemble(source: &str) -> Result<Program> {
    let mut statements = Vec::new();
    let mut labels: HashMap<String, usize> = HashMap::new();
    let mut address = 0usize;

    // Pass 1: parse and lay out
    for (line_num, line) in source.lines().enumerate() {
        let stmt = parse_line(line, line_num + 1)?;

        if let Some(label) = &stmt.label {
            if labels.insert(label.clone(), address).is_some() {
                return Err(AssemblerError::DuplicateLabel {
                    line: stmt.line,
                    label: label.clone(),
                });
            }
        }

        if let Some(opcode) = stmt.opcode {
            address += opcode.len();
            statements.push(stmt);
        }
    }

    // Pass 2: resolve and encode
    let mut code = Vec::with_capacity(address);
    for Statement {
        line,
        opcode,
        operands,
        ..
    } in &statements
    {
        let Some(opcode) = opcode else { continue };
        let instr = build_instruction(*opcode, operands, *line, |name| labels.get(name).copied())?;
        encode_into(&instr, &mut code);
    }

    tracing::debug!(bytes = code.len(), labels = labels.len(), "assembled program");
    Ok(Program::from_bytes(&code)?)
}
