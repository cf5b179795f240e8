//! Assembly parser
//!
//! Each source line holds an optional `label:` followed by an optional
//! instruction: `MNEMONIC [operand {, operand}]`.

use logos::Logos;
use ls8_spec::{AluOp, Instruction, Opcode, Register};

use crate::error::{AssemblerError, Result};
use crate::lexer::Token;

/// Instruction operand before label resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Register(Register),
    Immediate(u8),
    Label(String),
}

/// One parsed source line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statement {
    /// 1-based source line
    pub line: usize,
    pub label: Option<String>,
    pub opcode: Option<Opcode>,
    pub operands: Vec<Operand>,
}

/// Parse a single instruction from assembly text
///
/// Label operands are rejected since there is no symbol table to resolve them.
pub fn parse_instruction(text: &str) -> Result<Instruction> {
    let stmt = parse_line(text, 1)?;
    match stmt.opcode {
        Some(opcode) => build_instruction(opcode, &stmt.operands, stmt.line, |_| None),
        None => Err(AssemblerError::SyntaxError {
            line: 1,
            column: 1,
            message: "Empty instruction".to_string(),
        }),
    }
}

/// Parse register name
pub fn parse_register(name: &str) -> Result<Register> {
    let invalid = || AssemblerError::InvalidRegister {
        line: 0,
        name: name.trim().to_string(),
    };

    match Token::lexer(name.trim()).next() {
        Some(Ok(Token::Register(index))) => u8::try_from(index)
            .ok()
            .and_then(Register::from_index)
            .ok_or_else(invalid),
        _ => Err(invalid()),
    }
}

/// Tokenize and parse one source line
pub fn parse_line(source: &str, line: usize) -> Result<Statement> {
    let mut tokens = Vec::new();
    let mut lex = Token::lexer(source);
    while let Some(token) = lex.next() {
        match token {
            Ok(Token::Newline) => break,
            Ok(token) => tokens.push((token, lex.span().start + 1, lex.slice().to_string())),
            Err(()) => {
                return Err(AssemblerError::SyntaxError {
                    line,
                    column: lex.span().start + 1,
                    message: format!("Unexpected input: {:?}", lex.slice()),
                })
            }
        }
    }

    let mut stmt = Statement {
        line,
        ..Statement::default()
    };
    let mut rest = tokens.as_slice();

    if let [(Token::Identifier(name), _, _), (Token::Colon, _, _), tail @ ..] = rest {
        stmt.label = Some(name.clone());
        rest = tail;
    }

    let Some(((head, column, head_text), tail)) = rest.split_first() else {
        return Ok(stmt);
    };

    let Token::Identifier(mnemonic) = head else {
        return Err(AssemblerError::SyntaxError {
            line,
            column: *column,
            message: format!("Expected instruction, found {:?}", head_text),
        });
    };

    stmt.opcode = Some(Opcode::from_mnemonic(mnemonic).ok_or_else(|| {
        AssemblerError::UnknownInstruction {
            line,
            name: mnemonic.clone(),
        }
    })?);

    let mut expect_operand = true;
    for (token, column, text) in tail {
        match (token, expect_operand) {
            (Token::Comma, false) => expect_operand = true,
            (Token::Register(index), true) => {
                let reg = u8::try_from(*index)
                    .ok()
                    .and_then(Register::from_index)
                    .ok_or_else(|| AssemblerError::InvalidRegister {
                        line,
                        name: text.clone(),
                    })?;
                stmt.operands.push(Operand::Register(reg));
                expect_operand = false;
            }
            (Token::Number(value) | Token::Hex(value) | Token::Binary(value), true) => {
                let imm = u8::try_from(*value).map_err(|_| AssemblerError::InvalidImmediate {
                    line,
                    value: text.clone(),
                })?;
                stmt.operands.push(Operand::Immediate(imm));
                expect_operand = false;
            }
            (Token::Identifier(name), true) => {
                stmt.operands.push(Operand::Label(name.clone()));
                expect_operand = false;
            }
            _ => {
                return Err(AssemblerError::SyntaxError {
                    line,
                    column: *column,
                    message: format!("Unexpected token {:?}", text),
                })
            }
        }
    }

    if expect_operand && !stmt.operands.is_empty() {
        return Err(AssemblerError::SyntaxError {
            line,
            column: source.trim_end().len(),
            message: "Trailing comma".to_string(),
        });
    }

    Ok(stmt)
}

/// Build an instruction from a parsed opcode and operands
///
/// `resolve` maps label names to addresses.
pub fn build_instruction<F>(
    opcode: Opcode,
    operands: &[Operand],
    line: usize,
    resolve: F,
) -> Result<Instruction>
where
    F: Fn(&str) -> Option<usize>,
{
    if operands.len() != opcode.operand_count() {
        return Err(AssemblerError::SyntaxError {
            line,
            column: 1,
            message: format!(
                "{} expects {} operand(s), found {}",
                opcode,
                opcode.operand_count(),
                operands.len()
            ),
        });
    }

    let register = |operand: &Operand| match operand {
        Operand::Register(reg) => Ok(*reg),
        other => Err(AssemblerError::InvalidRegister {
            line,
            name: describe(other),
        }),
    };

    let immediate = |operand: &Operand| match operand {
        Operand::Immediate(value) => Ok(*value),
        Operand::Label(name) => {
            let address = resolve(name).ok_or_else(|| AssemblerError::UndefinedLabel {
                line,
                label: name.clone(),
            })?;
            u8::try_from(address).map_err(|_| AssemblerError::InvalidImmediate {
                line,
                value: format!("{} = {}", name, address),
            })
        }
        Operand::Register(reg) => Err(AssemblerError::InvalidImmediate {
            line,
            value: reg.to_string(),
        }),
    };

    let instr = match opcode {
        Opcode::Hlt => Instruction::Hlt,
        Opcode::Ret => Instruction::Ret,
        Opcode::Prn => Instruction::Prn { rs: register(&operands[0])? },
        Opcode::Push => Instruction::Push { rs: register(&operands[0])? },
        Opcode::Pop => Instruction::Pop { rd: register(&operands[0])? },
        Opcode::Call => Instruction::Call { rs: register(&operands[0])? },
        Opcode::Ldi => Instruction::Ldi {
            rd: register(&operands[0])?,
            imm: immediate(&operands[1])?,
        },
        Opcode::Add | Opcode::Mul => Instruction::Alu {
            op: AluOp::from_opcode(opcode.to_u8())?,
            ra: register(&operands[0])?,
            rb: register(&operands[1])?,
        },
    };

    Ok(instr)
}

fn describe(operand: &Operand) -> String {
    match operand {
        Operand::Register(reg) => reg.to_string(),
        Operand::Immediate(value) => value.to_string(),
        Operand::Label(name) => name.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_register() {
        assert_eq!(parse_register("R0").unwrap(), Register::R0);
        assert_eq!(parse_register("r3").unwrap(), Register::R3);
        assert_eq!(parse_register("SP").unwrap(), Register::R7);
        assert!(parse_register("R8").is_err());
        assert!(parse_register("x1").is_err());
    }

    #[test]
    fn test_parse_hlt() {
        assert_eq!(parse_instruction("HLT").unwrap(), Instruction::Hlt);
        assert_eq!(parse_instruction("hlt").unwrap(), Instruction::Hlt);
    }

    #[test]
    fn test_parse_ldi() {
        let instr = parse_instruction("LDI R0, 8").unwrap();
        assert_eq!(instr, Instruction::Ldi { rd: Register::R0, imm: 8 });

        let instr = parse_instruction("LDI R1,0x10").unwrap();
        assert_eq!(instr, Instruction::Ldi { rd: Register::R1, imm: 16 });
    }

    #[test]
    fn test_parse_alu() {
        let instr = parse_instruction("MUL R0, R1").unwrap();
        assert_eq!(
            instr,
            Instruction::Alu { op: AluOp::Mul, ra: Register::R0, rb: Register::R1 }
        );
    }

    #[test]
    fn test_parse_stack_and_calls() {
        assert_eq!(parse_instruction("PUSH R2").unwrap(), Instruction::Push { rs: Register::R2 });
        assert_eq!(parse_instruction("POP R2").unwrap(), Instruction::Pop { rd: Register::R2 });
        assert_eq!(parse_instruction("CALL R1").unwrap(), Instruction::Call { rs: Register::R1 });
        assert_eq!(parse_instruction("RET").unwrap(), Instruction::Ret);
    }

    #[test]
    fn test_parse_line_with_label() {
        let stmt = parse_line("loop: PRN R0 ; print", 4).unwrap();
        assert_eq!(stmt.line, 4);
        assert_eq!(stmt.label.as_deref(), Some("loop"));
        assert_eq!(stmt.opcode, Some(Opcode::Prn));
        assert_eq!(stmt.operands, vec![Operand::Register(Register::R0)]);
    }

    #[test]
    fn test_parse_line_label_only() {
        let stmt = parse_line("done:", 2).unwrap();
        assert_eq!(stmt.label.as_deref(), Some("done"));
        assert_eq!(stmt.opcode, None);
    }

    #[test]
    fn test_parse_line_empty() {
        let stmt = parse_line("   # nothing here", 1).unwrap();
        assert_eq!(stmt, Statement { line: 1, ..Statement::default() });
    }

    // Error cases
    #[test]
    fn test_unknown_instruction() {
        assert!(matches!(
            parse_instruction("SUB R0, R1"),
            Err(AssemblerError::UnknownInstruction { .. })
        ));
    }

    #[test]
    fn test_wrong_operand_count() {
        assert!(parse_instruction("PRN").is_err());
        assert!(parse_instruction("HLT R0").is_err());
        assert!(parse_instruction("ADD R0").is_err());
    }

    #[test]
    fn test_immediate_out_of_range() {
        assert!(matches!(
            parse_instruction("LDI R0, 256"),
            Err(AssemblerError::InvalidImmediate { .. })
        ));
    }

    #[test]
    fn test_register_out_of_range() {
        assert!(matches!(
            parse_instruction("PRN R8"),
            Err(AssemblerError::InvalidRegister { .. })
        ));
    }

    #[test]
    fn test_label_without_symbol_table() {
        assert!(matches!(
            parse_instruction("LDI R1, target"),
            Err(AssemblerError::UndefinedLabel { .. })
        ));
    }

    #[test]
    fn test_trailing_comma() {
        assert!(matches!(
            parse_instruction("PRN R0,"),
            Err(AssemblerError::SyntaxError { .. })
        ));
    }

    #[test]
    fn test_missing_comma() {
        assert!(matches!(
            parse_instruction("ADD R0 R1"),
            Err(AssemblerError::SyntaxError { .. })
        ));
    }
}
