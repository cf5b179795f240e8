//! `.ls8` program text
//!
//! One byte per line, written as a binary literal. Everything after `#` is a
//! comment; blank lines are skipped.
//!
//! ```text
//! 10000010 # LDI R0,8
//! 00000000
//! 00001000
//! 01000111 # PRN R0
//! 00000000
//! 00000001 # HLT
//! ```

use ls8_spec::Program;

use crate::error::{AssemblerError, Result};

/// Parse `.ls8` text into a program image
///
/// The image is not size-checked here; loading it into a machine reports
/// images larger than memory.
pub fn parse_ls8(source: &str) -> Result<Program> {
    let mut code = Vec::new();

    for (index, raw) in source.lines().enumerate() {
        let text = raw.split('#').next().unwrap_or_default().trim();
        if text.is_empty() {
            continue;
        }

        let valid = text.len() <= 8 && text.bytes().all(|b| b == b'0' || b == b'1');
        let byte = valid
            .then(|| u8::from_str_radix(text, 2).ok())
            .flatten()
            .ok_or_else(|| AssemblerError::InvalidLiteral {
                line: index + 1,
                text: text.to_string(),
            })?;

        code.push(byte);
    }

    tracing::debug!(bytes = code.len(), "parsed ls8 program");
    Ok(Program::new(code))
}

/// Render a program image as `.ls8` text
pub fn to_ls8(program: &Program) -> String {
    program
        .as_bytes()
        .iter()
        .map(|byte| format!("{:08b}\n", byte))
        .collect()
}
