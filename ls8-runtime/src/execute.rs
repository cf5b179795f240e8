//! Instruction execution for LS-8

use ls8_spec::{Address, Instruction, Word};

use crate::alu;
use crate::error::{Result, RuntimeError};
use crate::io::Output;
use crate::memory::Memory;
use crate::state::{HaltReason, MachineState};

/// Fault context for the instruction being executed
#[derive(Clone, Copy)]
struct Site {
    pc: Address,
    opcode: u8,
}

impl Site {
    fn out_of_range(self, address: i32) -> RuntimeError {
        RuntimeError::AddressOutOfRange {
            pc: self.pc,
            opcode: self.opcode,
            address,
        }
    }
}

/// SP -= 1; mem[SP] = value
///
/// `value` is produced after the decrement so that pushing SP itself stores
/// the new stack pointer.
fn push<F>(site: Site, state: &mut MachineState, memory: &mut Memory, value: F) -> Result<()>
where
    F: FnOnce(&MachineState) -> Word,
{
    let sp = state
        .sp()
        .checked_sub(1)
        .ok_or_else(|| site.out_of_range(-1))?;
    state.set_sp(sp);
    let value = value(state);
    memory.write(sp, value);
    Ok(())
}

/// store(mem[SP]); SP += 1
///
/// The increment applies to SP as it stands after `store`, so popping into
/// SP itself leaves `mem[SP] + 1`.
fn pop<F>(site: Site, state: &mut MachineState, memory: &Memory, store: F) -> Result<()>
where
    F: FnOnce(&mut MachineState, Word),
{
    store(state, memory.read(state.sp()));
    let sp = state.sp();
    let next = sp
        .checked_add(1)
        .ok_or_else(|| site.out_of_range(sp as i32 + 1))?;
    state.set_sp(next);
    Ok(())
}

/// Execute single instruction
///
/// Instructions that do not set the PC themselves advance it by their
/// encoded length. An advance past the last address is a fault, except for
/// HLT, which stops in place.
pub fn execute<O: Output + ?Sized>(
    instr: &Instruction,
    state: &mut MachineState,
    memory: &mut Memory,
    out: &mut O,
) -> Result<()> {
    let site = Site {
        pc: state.pc,
        opcode: instr.opcode().to_u8(),
    };

    match *instr {
        Instruction::Hlt => {
            state.halt(HaltReason::Halt);
            state.pc = state.pc.checked_add(1).unwrap_or(state.pc);
            return Ok(());
        }

        Instruction::Ldi { rd, imm } => state.write_reg(rd, imm),

        Instruction::Prn { rs } => out.write(state.read_reg(rs))?,

        Instruction::Alu { op, ra, rb } => alu::apply(op, state, ra, rb),

        Instruction::Push { rs } => push(site, state, memory, |s| s.read_reg(rs))?,

        Instruction::Pop { rd } => pop(site, state, memory, |s, value| s.write_reg(rd, value))?,

        Instruction::Call { rs } => {
            let ret = site
                .pc
                .checked_add(2)
                .ok_or_else(|| site.out_of_range(site.pc as i32 + 2))?;
            push(site, state, memory, |_| ret)?;
            state.pc = state.read_reg(rs);
        }

        Instruction::Ret => pop(site, state, memory, |s, value| s.pc = value)?,
    }

    if !instr.sets_pc() {
        let next = site.pc as usize + instr.len();
        state.pc = Address::try_from(next).map_err(|_| site.out_of_range(next as i32))?;
    }

    Ok(())
}
