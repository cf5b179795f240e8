//! # LS-8 Runtime
//!
//! Execute LS-8 programs on an 8-bit machine with 256 bytes of memory.
//!
//! ## Features
//!
//! - **8 registers**: R0-R7, R7 doubling as the stack pointer
//! - **9 instructions**: HLT, LDI, PRN, ADD, MUL, PUSH, POP, CALL, RET
//! - **Shared decoder**: the machine and the disassembler classify bytes identically
//! - **Tracing**: per-cycle trace rows, logged or collected
//!
//! ## Example
//!
//! ```rust
//! use ls8_runtime::{Machine, MachineConfig};
//! use ls8_spec::Program;
//!
//! // LDI R0,8; PRN R0; HLT
//! let program = Program::new(vec![0x82, 0x00, 0x08, 0x47, 0x00, 0x01]);
//! let machine = Machine::with_program(&program, MachineConfig::default()).unwrap();
//! let result = machine.run().unwrap();
//! assert_eq!(result.outputs, vec![8]);
//! ```

pub mod alu;
pub mod error;
pub mod execute;
pub mod io;
pub mod memory;
pub mod state;
pub mod trace;
pub mod vm;

pub use error::{Result, RuntimeError};
pub use io::{IOHandler, LineWriter, Output};
pub use memory::Memory;
pub use state::{HaltReason, MachineState, MachineStatus};
pub use trace::TraceRow;
pub use vm::{ExecutionResult, Machine, MachineConfig, TRACE_TARGET};

/// Simple execution helper
///
/// Runs a program with the default configuration and returns what it printed.
pub fn run(program: &ls8_spec::Program) -> Result<Vec<ls8_spec::Word>> {
    let machine = Machine::with_program(program, MachineConfig::default())?;
    Ok(machine.run()?.outputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ls8_spec::Program;

    #[test]
    fn test_run_helper() {
        // LDI R0,8; LDI R1,9; MUL R0,R1; PRN R0; HLT
        let program = Program::new(vec![
            0x82, 0x00, 0x08, 0x82, 0x01, 0x09, 0xA2, 0x00, 0x01, 0x47, 0x00, 0x01,
        ]);
        assert_eq!(run(&program).unwrap(), vec![72]);
    }

    #[test]
    fn test_run_helper_fault() {
        assert!(run(&Program::new(vec![0x00])).is_err());
    }
}
