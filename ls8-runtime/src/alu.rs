//! Arithmetic-logic unit
//!
//! Reads two registers and writes the result back into the first one.
//! Register B is never modified.

use ls8_spec::{AluOp, Register};

use crate::error::Result;
use crate::state::MachineState;

/// `ra = ra op rb`, wrapping to 8 bits
pub fn apply(op: AluOp, state: &mut MachineState, ra: Register, rb: Register) {
    let result = op.compute(state.read_reg(ra), state.read_reg(rb));
    state.write_reg(ra, result);
}

/// Same as [`apply`], with the operation given by name (`"ADD"`, `"MUL"`)
pub fn apply_named(name: &str, state: &mut MachineState, ra: Register, rb: Register) -> Result<()> {
    let op = name.parse::<AluOp>()?;
    apply(op, state, ra, rb);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RuntimeError;
    use ls8_spec::{SpecError, STACK_TOP};

    #[test]
    fn test_add() {
        let mut state = MachineState::new(STACK_TOP);
        state.write_reg(Register::R0, 8);
        state.write_reg(Register::R1, 9);
        apply(AluOp::Add, &mut state, Register::R0, Register::R1);
        assert_eq!(state.read_reg(Register::R0), 17);
        assert_eq!(state.read_reg(Register::R1), 9);
    }

    #[test]
    fn test_add_wraps() {
        let mut state = MachineState::new(STACK_TOP);
        state.write_reg(Register::R2, 250);
        state.write_reg(Register::R3, 10);
        apply(AluOp::Add, &mut state, Register::R2, Register::R3);
        assert_eq!(state.read_reg(Register::R2), 4);
    }

    #[test]
    fn test_mul_same_register() {
        let mut state = MachineState::new(STACK_TOP);
        state.write_reg(Register::R4, 12);
        apply(AluOp::Mul, &mut state, Register::R4, Register::R4);
        assert_eq!(state.read_reg(Register::R4), 144);
    }

    #[test]
    fn test_apply_named() {
        let mut state = MachineState::new(STACK_TOP);
        state.write_reg(Register::R0, 3);
        state.write_reg(Register::R1, 5);
        apply_named("MUL", &mut state, Register::R0, Register::R1).unwrap();
        assert_eq!(state.read_reg(Register::R0), 15);
    }

    #[test]
    fn test_apply_named_unsupported() {
        let mut state = MachineState::new(STACK_TOP);
        state.write_reg(Register::R0, 3);
        let err = apply_named("SUB", &mut state, Register::R0, Register::R1).unwrap_err();
        assert!(matches!(
            err,
            RuntimeError::SpecError(SpecError::UnsupportedAluOperation(ref name)) if name == "SUB"
        ));
        assert_eq!(state.read_reg(Register::R0), 3);
    }
}
