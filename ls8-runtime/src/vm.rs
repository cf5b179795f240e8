//! Virtual Machine for LS-8

use ls8_disassembler::{decode, instruction_len};
use ls8_spec::{Address, Instruction, Program, Word, MEMORY_SIZE, NUM_REGISTERS, STACK_TOP};

use crate::error::{Result, RuntimeError};
use crate::execute::execute;
use crate::io::{IOHandler, Output};
use crate::memory::Memory;
use crate::state::{HaltReason, MachineState, MachineStatus};
use crate::trace::TraceRow;

/// Target that per-cycle trace rows are logged under
pub const TRACE_TARGET: &str = "ls8_runtime::trace";

/// Machine configuration
#[derive(Debug, Clone)]
pub struct MachineConfig {
    /// Maximum number of cycles before halting
    pub max_cycles: u64,

    /// Log a trace row for every cycle (under [`TRACE_TARGET`])
    pub trace: bool,

    /// Enable execution trace collection
    pub enable_execution_trace: bool,

    /// Initial stack pointer
    pub stack_top: Word,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            max_cycles: 1_000_000,
            trace: false,
            enable_execution_trace: false,
            stack_top: STACK_TOP,
        }
    }
}

/// Execution result
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Number of cycles executed
    pub cycles: u64,

    /// Values printed by PRN, in order
    pub outputs: Vec<Word>,

    /// Reason for halting
    pub halt_reason: HaltReason,

    /// Final register file
    pub registers: [Word; NUM_REGISTERS],

    /// Final program counter
    pub pc: Address,

    /// Execution trace (if execution tracing enabled)
    pub execution_trace: Vec<TraceRow>,
}

/// LS-8 Virtual Machine
#[derive(Debug, Clone)]
pub struct Machine {
    /// Machine state (registers, PC, etc.)
    state: MachineState,

    /// Memory subsystem
    memory: Memory,

    /// Configuration
    config: MachineConfig,

    /// Execution trace (if enabled)
    execution_trace: Vec<TraceRow>,
}

impl Machine {
    /// Create a machine with zeroed memory
    pub fn new(config: MachineConfig) -> Self {
        Self {
            state: MachineState::new(config.stack_top),
            memory: Memory::new(),
            config,
            execution_trace: Vec::new(),
        }
    }

    /// Create a machine and load `program` into it
    pub fn with_program(program: &Program, config: MachineConfig) -> Result<Self> {
        let mut machine = Self::new(config);
        machine.load(program)?;
        Ok(machine)
    }

    /// Copy the program image to address 0
    pub fn load(&mut self, program: &Program) -> Result<()> {
        self.memory.load(program.as_bytes())?;
        tracing::debug!(bytes = program.len(), "loaded program");
        Ok(())
    }

    /// Execute one instruction
    ///
    /// A halted machine stays halted. After a fault every further call
    /// returns [`RuntimeError::MachineFaulted`].
    pub fn step<O: Output + ?Sized>(&mut self, out: &mut O) -> Result<MachineStatus> {
        match self.state.status {
            MachineStatus::Running => {}
            MachineStatus::Halted => return Ok(MachineStatus::Halted),
            MachineStatus::Faulted => return Err(RuntimeError::MachineFaulted),
        }

        match self.cycle(out) {
            Ok(()) => Ok(self.state.status),
            Err(e) => {
                tracing::warn!(pc = self.state.pc, cycle = self.state.cycles, "fault: {}", e);
                self.state.fault();
                Err(e)
            }
        }
    }

    fn cycle<O: Output + ?Sized>(&mut self, out: &mut O) -> Result<()> {
        if self.config.trace || self.config.enable_execution_trace {
            let row = TraceRow::capture(&self.state, &self.memory);
            if self.config.trace {
                tracing::trace!(target: TRACE_TARGET, "{}", row);
            }
            if self.config.enable_execution_trace {
                self.execution_trace.push(row);
            }
        }

        let inst = self.fetch_and_decode()?;
        execute(&inst, &mut self.state, &mut self.memory, out)?;
        self.state.cycles += 1;
        Ok(())
    }

    /// Run until HLT, the cycle limit, or a fault
    pub fn run_with<O: Output + ?Sized>(&mut self, out: &mut O) -> Result<HaltReason> {
        while self.state.is_running() {
            if self.state.cycles >= self.config.max_cycles {
                self.state.halt(HaltReason::CycleLimit);
                break;
            }
            self.step(out)?;
        }

        if self.state.status == MachineStatus::Faulted {
            return Err(RuntimeError::MachineFaulted);
        }

        let reason = self.state.halt_reason.unwrap_or(HaltReason::Halt);
        tracing::debug!(cycles = self.state.cycles, ?reason, "machine halted");
        Ok(reason)
    }

    /// Run the machine until halt, collecting output in memory
    pub fn run(mut self) -> Result<ExecutionResult> {
        let mut io = IOHandler::new();
        let halt_reason = self.run_with(&mut io)?;

        Ok(ExecutionResult {
            cycles: self.state.cycles,
            outputs: io.take_outputs(),
            halt_reason,
            registers: self.state.registers,
            pc: self.state.pc,
            execution_trace: self.execution_trace,
        })
    }

    /// Fetch and decode instruction from memory
    fn fetch_and_decode(&self) -> Result<Instruction> {
        let pc = self.state.pc;
        let opcode = self.memory.read(pc);

        let len = instruction_len(opcode).map_err(|e| RuntimeError::from_decode(e, pc))?;
        let end = pc as usize + len;
        if end > MEMORY_SIZE {
            return Err(RuntimeError::AddressOutOfRange {
                pc,
                opcode,
                address: MEMORY_SIZE as i32,
            });
        }

        decode(&self.memory.as_slice()[pc as usize..end])
            .map_err(|e| RuntimeError::from_decode(e, pc))
    }

    /// Snapshot of the next trace row
    pub fn trace_row(&self) -> TraceRow {
        TraceRow::capture(&self.state, &self.memory)
    }

    /// Collected execution trace
    pub fn execution_trace(&self) -> &[TraceRow] {
        &self.execution_trace
    }

    /// Get current state (for debugging)
    pub fn state(&self) -> &MachineState {
        &self.state
    }

    /// Get memory (for debugging)
    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }
}
