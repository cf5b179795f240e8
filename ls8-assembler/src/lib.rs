//! LS-8 Assembler
//!
//! Turns LS-8 assembly language or `.ls8` binary-literal text into a
//! [`Program`](ls8_spec::Program) image.
//!
//! ## Example
//!
//! ```rust
//! use ls8_assembler::assemble;
//!
//! let source = r#"
//!     LDI R0, 8
//!     PRN R0
//!     HLT
//! "#;
//!
//! let program = assemble(source).unwrap();
//! assert_eq!(program.len(), 6);
//! ```

pub mod assembler;
pub mod encoder;
pub mod error;
pub mod lexer;
pub mod loader;
pub mod parser;

pub use assembler::assemble;
pub use encoder::encode;
pub use error::{AssemblerError, Result};
pub use loader::{parse_ls8, to_ls8};
pub use parser::{parse_instruction, parse_register};
