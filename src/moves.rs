/*!
moves.rs - The move interpreter (spec.md §4.5).

At each move, scans a table of compare/other/halt opcodes to select the
applicable RHS, or halts. Rule ordering is implicit in the image layout:
the compiler emits compares in priority order with OTHER/HALT last; ties
are resolved by textual order in the image (we simply try opcodes in the
order the cursor encounters them, which preserves that ordering exactly).
*/

use crate::control::{ControlFlow, StopReason};
use crate::core::Core;
use crate::cursor::Cursor;
use crate::opcode::{decode_move, MoveOp};
use crate::rhs;

#[cfg(feature = "trace")]
macro_rules! trace_op {
    ($op:expr) => {
        log::trace!("move: {:?}", $op)
    };
}
#[cfg(not(feature = "trace"))]
macro_rules! trace_op {
    ($op:expr) => {};
}

/// Run one move: read move opcodes until an RHS is dispatched (returning
/// whatever it returns) or HALT is reached (returning `Stop`).
pub(crate) fn run(core: &mut Core, cursor: &mut Cursor) -> ControlFlow {
    loop {
        let op = decode_move(cursor.next_u8());
        trace_op!(op);
        match op {
            MoveOp::CompareArg => {
                let index = cursor.next_u8();
                let target = core.current.symbols[index as usize];
                let skip = cursor.next_u16();
                if core.tape.read() == target {
                    return rhs::run(core, cursor);
                }
                cursor.skip(skip);
            }
            MoveOp::CompareVal => {
                let value = cursor.next_u16();
                let skip = cursor.next_u16();
                if core.tape.read() == value {
                    return rhs::run(core, cursor);
                }
                cursor.skip(skip);
            }
            MoveOp::Other => {
                core.bound = core.tape.read();
                return rhs::run(core, cursor);
            }
            MoveOp::Halt => return ControlFlow::Stop(StopReason::Halt),
        }
    }
}
