//! # Lexer for LS-8 Assembly Language

use logos::Logos;

/// Tokens for LS-8 assembly
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r]+")] // Skip whitespace (not newlines)
#[logos(skip r"[;#][^\n]*")] // Skip comments
pub enum Token {
    /// Identifier (instruction mnemonics, labels)
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    /// Register (R0-R7, SP); range is checked by the parser
    #[regex(r"[rR][0-9]+", |lex| lex.slice()[1..].parse::<u16>().ok(), priority = 10)]
    #[regex(r"[sS][pP]", |_| 7u16, priority = 10)]
    Register(u16),

    /// Decimal number
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<u16>().ok())]
    Number(u16),

    /// Hexadecimal number
    #[regex(r"0[xX][0-9a-fA-F]+", |lex| u16::from_str_radix(&lex.slice()[2..], 16).ok())]
    Hex(u16),

    /// Binary number
    #[regex(r"0[bB][01]+", |lex| u16::from_str_radix(&lex.slice()[2..], 2).ok())]
    Binary(u16),

    /// Comma
    #[token(",")]
    Comma,

    /// Colon (for labels)
    #[token(":")]
    Colon,

    /// Newline
    #[regex(r"\n")]
    Newline,
}
