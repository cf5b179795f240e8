//! # LS-8 Disassembler
//!
//! Decode LS-8 bytecode into [`Instruction`](ls8_spec::Instruction)s and
//! render it as assembly text.
//!
//! The decoder is shared with the runtime, so an opcode the disassembler
//! cannot name is exactly an opcode the machine faults on.
//!
//! ## Example
//!
//! ```rust
//! use ls8_spec::Program;
//! use ls8_disassembler::disassemble;
//!
//! let program = Program::new(vec![0x82, 0x00, 0x08, 0x47, 0x00, 0x01]);
//! let asm = disassemble(&program);
//! assert!(asm.contains("LDI R0, 8"));
//! ```

pub mod decoder;
pub mod disassembler;
pub mod error;
pub mod formatter;

pub use decoder::{decode, decode_opcode, instruction_len};
pub use disassembler::disassemble;
pub use error::{DisassemblerError, Result};
pub use formatter::format;
