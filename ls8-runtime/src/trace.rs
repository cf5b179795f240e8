//! Per-cycle trace rows
//!
//! ```text
//! PC | OP A  B  | R0 R1 R2 R3 R4 R5 R6 R7
//! 00 | 82 00 08 | 00 00 00 00 00 00 00 F4
//! ```

use std::fmt;

use ls8_spec::{Address, Word, NUM_REGISTERS};
use serde::{Deserialize, Serialize};

use crate::memory::Memory;
use crate::state::MachineState;

/// Machine state captured before an instruction executes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceRow {
    pub cycle: u64,
    pub pc: Address,
    /// Opcode and the two following bytes; `00` past the end of memory
    pub bytes: [Word; 3],
    pub registers: [Word; NUM_REGISTERS],
}

impl TraceRow {
    pub fn capture(state: &MachineState, memory: &Memory) -> Self {
        let pc = state.pc as usize;
        let byte = |offset: usize| memory.get(pc + offset).unwrap_or(0);

        TraceRow {
            cycle: state.cycles,
            pc: state.pc,
            bytes: [byte(0), byte(1), byte(2)],
            registers: state.registers,
        }
    }
}

impl fmt::Display for TraceRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02X} | {:02X} {:02X} {:02X} |",
            self.pc, self.bytes[0], self.bytes[1], self.bytes[2]
        )?;
        for reg in &self.registers {
            write!(f, " {:02X}", reg)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ls8_spec::STACK_TOP;

    #[test]
    fn test_capture_and_display() {
        let mut memory = Memory::new();
        memory.load(&[0x82, 0x00, 0x08]).unwrap();
        let state = MachineState::new(STACK_TOP);

        let row = TraceRow::capture(&state, &memory);
        assert_eq!(row.bytes, [0x82, 0x00, 0x08]);
        assert_eq!(row.to_string(), "00 | 82 00 08 | 00 00 00 00 00 00 00 F4");
    }

    #[test]
    fn test_capture_at_end_of_memory() {
        let mut memory = Memory::new();
        memory.write(0xFF, 0x01);
        let mut state = MachineState::new(STACK_TOP);
        state.pc = 0xFF;

        let row = TraceRow::capture(&state, &memory);
        assert_eq!(row.bytes, [0x01, 0x00, 0x00]);
        assert!(row.to_string().starts_with("FF | 01 00 00 |"));
    }
}
