/*!
rhs/mod.rs - Orchestrates execution of one RHS block (spec.md §4.4).

Overview
========
Reads opcodes from the cursor (positioned immediately after a matched
LHS) until a terminator opcode is hit:

    tape_ops    - LEFT / RIGHT / LEFT_N / RIGHT_N / WRITE_ARG / WRITE_VAL / WRITE_BOUND
    symbol_ops  - SYMBOL_ARG / SYMBOL_VAL / SYMBOL_BOUND
    state_ops   - TAKE_ARG / CLONE_ARG / FREE_ARG
    finalize    - MAKE_STATE (non-terminal) / FINAL_STATE / FINAL_ARG (terminal)

Only LEFT/LEFT_N (tape underflow) and FINAL_STATE/FINAL_ARG can return
from this function; MAKE_STATE loops back for the next opcode.
*/

mod finalize;
mod state_ops;
mod symbol_ops;
mod tape_ops;

use crate::control::ControlFlow;
use crate::core::Core;
use crate::cursor::Cursor;
use crate::opcode::{decode_rhs, RhsOp};

#[cfg(feature = "trace")]
macro_rules! trace_op {
    ($op:expr) => {
        log::trace!("rhs: {:?}", $op)
    };
}
#[cfg(not(feature = "trace"))]
macro_rules! trace_op {
    ($op:expr) => {};
}

/// Run one RHS block to completion, returning the control-flow signal the
/// move interpreter should propagate.
pub(crate) fn run(core: &mut Core, cursor: &mut Cursor) -> ControlFlow {
    loop {
        let op = decode_rhs(cursor.next_u8());
        trace_op!(op);
        match op {
            RhsOp::Left => {
                if let ControlFlow::Stop(reason) = tape_ops::left(core) {
                    return ControlFlow::Stop(reason);
                }
            }
            RhsOp::Right => tape_ops::right(core),
            RhsOp::LeftN => {
                if let ControlFlow::Stop(reason) = tape_ops::left_n(core, cursor) {
                    return ControlFlow::Stop(reason);
                }
            }
            RhsOp::RightN => tape_ops::right_n(core, cursor),
            RhsOp::WriteArg => tape_ops::write_arg(core, cursor),
            RhsOp::WriteVal => tape_ops::write_val(core, cursor),
            RhsOp::WriteBound => tape_ops::write_bound(core),
            RhsOp::SymbolArg => symbol_ops::symbol_arg(core, cursor),
            RhsOp::SymbolVal => symbol_ops::symbol_val(core, cursor),
            RhsOp::SymbolBound => symbol_ops::symbol_bound(core),
            RhsOp::TakeArg => state_ops::take_arg(core, cursor),
            RhsOp::CloneArg => state_ops::clone_arg(core, cursor),
            RhsOp::FreeArg => state_ops::free_arg(core, cursor),
            RhsOp::MakeState => finalize::make_state(core, cursor),
            RhsOp::FinalState => return finalize::final_state(core, cursor),
            RhsOp::FinalArg => return finalize::final_arg(core, cursor),
        }
    }
}
