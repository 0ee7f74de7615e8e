/*!
tape_ops.rs - RHS opcodes that move the head or write the tape.

Covers LEFT, RIGHT, LEFT_N, RIGHT_N, WRITE_ARG, WRITE_VAL, WRITE_BOUND
(spec.md §4.4). Only the LEFT family can terminate the whole `run`
(underflow); the WRITE family never does.
*/

use crate::control::ControlFlow;
use crate::core::Core;
use crate::cursor::Cursor;

#[inline]
pub(crate) fn left(core: &mut Core) -> ControlFlow {
    core.tape.move_left(1)
}

#[inline]
pub(crate) fn right(core: &mut Core) {
    core.tape.move_right(1);
}

#[inline]
pub(crate) fn left_n(core: &mut Core, cursor: &mut Cursor) -> ControlFlow {
    let n = cursor.next_u8() as usize;
    core.tape.move_left(n)
}

#[inline]
pub(crate) fn right_n(core: &mut Core, cursor: &mut Cursor) {
    let n = cursor.next_u8() as usize;
    core.tape.move_right(n);
}

#[inline]
pub(crate) fn write_arg(core: &mut Core, cursor: &mut Cursor) {
    let index = cursor.next_u8();
    let value = core.current.symbols[index as usize];
    core.tape.write(value);
}

#[inline]
pub(crate) fn write_val(core: &mut Core, cursor: &mut Cursor) {
    let value = cursor.next_u16();
    core.tape.write(value);
}

#[inline]
pub(crate) fn write_bound(core: &mut Core) {
    core.tape.write(core.bound);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn core_with(tape: &[u16]) -> Core {
        Core::new(tape)
    }

    #[test]
    fn left_stops_on_underflow() {
        let mut core = core_with(&[1]);
        assert_eq!(
            left(&mut core),
            ControlFlow::Stop(crate::control::StopReason::LeftUnderflow)
        );
    }

    #[test]
    fn right_then_write_arg_uses_current_symbol() {
        let mut core = core_with(&[0]);
        core.current.symbols.push(42);
        right(&mut core);
        let image = [0u8];
        let mut cursor = Cursor::new(&image);
        write_arg(&mut core, &mut cursor);
        assert_eq!(core.tape.read(), 42);
    }

    #[test]
    fn write_val_reads_u16_operand() {
        let mut core = core_with(&[0]);
        let image = [0x34, 0x12];
        let mut cursor = Cursor::new(&image);
        write_val(&mut core, &mut cursor);
        assert_eq!(core.tape.read(), 0x1234);
    }

    #[test]
    fn write_bound_writes_the_latched_symbol() {
        let mut core = core_with(&[0]);
        core.bound = 99;
        write_bound(&mut core);
        assert_eq!(core.tape.read(), 99);
    }
}
