/*!
symbol_ops.rs - RHS opcodes that push onto the symbol build stack.

Covers SYMBOL_ARG, SYMBOL_VAL, SYMBOL_BOUND (spec.md §4.4). None of these
can terminate the RHS; they only accumulate symbols for the next
MAKE_STATE or FINAL_STATE.
*/

use crate::core::Core;
use crate::cursor::Cursor;

#[inline]
pub(crate) fn symbol_arg(core: &mut Core, cursor: &mut Cursor) {
    let index = cursor.next_u8();
    let value = core.current.symbols[index as usize];
    core.stacks.push_symbol(value);
}

#[inline]
pub(crate) fn symbol_val(core: &mut Core, cursor: &mut Cursor) {
    let value = cursor.next_u16();
    core.stacks.push_symbol(value);
}

#[inline]
pub(crate) fn symbol_bound(core: &mut Core) {
    core.stacks.push_symbol(core.bound);
}
