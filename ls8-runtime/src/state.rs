//! Machine state for LS-8

use ls8_spec::{Address, Register, Word, NUM_REGISTERS};
use serde::{Deserialize, Serialize};

/// Execution status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MachineStatus {
    Running,
    Halted,
    /// A fault stopped the machine; its state is no longer meaningful
    Faulted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HaltReason {
    /// HLT instruction
    Halt,
    /// Out of cycles
    CycleLimit,
}

/// Register file, program counter and bookkeeping
#[derive(Debug, Clone)]
pub struct MachineState {
    /// General-purpose registers (R7 is SP)
    pub registers: [Word; NUM_REGISTERS],

    /// Program counter
    pub pc: Address,

    /// Cycle count
    pub cycles: u64,

    pub status: MachineStatus,

    /// Halt reason
    pub halt_reason: Option<HaltReason>,
}

impl MachineState {
    pub fn new(stack_top: Word) -> Self {
        let mut state = MachineState {
            registers: [0; NUM_REGISTERS],
            pc: 0,
            cycles: 0,
            status: MachineStatus::Running,
            halt_reason: None,
        };

        state.registers[Register::SP.index()] = stack_top;

        state
    }

    #[inline]
    pub fn read_reg(&self, reg: Register) -> Word {
        self.registers[reg.index()]
    }

    #[inline]
    pub fn write_reg(&mut self, reg: Register, value: Word) {
        self.registers[reg.index()] = value;
    }

    #[inline]
    pub fn sp(&self) -> Word {
        self.read_reg(Register::SP)
    }

    #[inline]
    pub fn set_sp(&mut self, value: Word) {
        self.write_reg(Register::SP, value);
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.status == MachineStatus::Running
    }

    /// Halt execution
    pub fn halt(&mut self, reason: HaltReason) {
        self.status = MachineStatus::Halted;
        self.halt_reason = Some(reason);
    }

    pub fn fault(&mut self) {
        self.status = MachineStatus::Faulted;
    }
}
