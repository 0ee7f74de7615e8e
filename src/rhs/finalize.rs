/*!
finalize.rs - MAKE_STATE, FINAL_STATE, FINAL_ARG: the only RHS opcodes
that may end a block (spec.md §4.4).

MAKE_STATE does not terminate the RHS; it assembles one new `State` on
the state build stack and the RHS keeps going. FINAL_STATE and FINAL_ARG
each install a new current state, jump the cursor to its address, and
return [`ControlFlow::Continue`] to the move interpreter's caller.
*/

use crate::control::ControlFlow;
use crate::core::Core;
use crate::cursor::Cursor;
use crate::state::State;

/// Pop the top `k` build-stack states (in push order) as the new node's
/// children, take the *entire* symbol build stack as its symbols
/// (emptying it), and push the assembled node back on the state stack.
pub(crate) fn make_state(core: &mut Core, cursor: &mut Cursor) {
    let k = cursor.next_u8() as usize;
    let address = cursor.next_u32();

    let children = core.stacks.pop_k_states(k);
    let symbols = core.stacks.take_all_symbols();
    core.stacks.push_state(State::new(address, children, symbols));
}

/// Drain both build stacks into the current-state registers, set the new
/// current address, and jump the cursor there.
pub(crate) fn final_state(core: &mut Core, cursor: &mut Cursor) -> ControlFlow {
    let address = cursor.next_u32();
    let children = core.stacks.take_all_states();
    let symbols = core.stacks.take_all_symbols();
    core.current.install(address, children, symbols);
    cursor.goto(address);
    ControlFlow::Continue
}

/// Promote current child `i` to be the new current state: adopt its
/// address, children, and symbols, and jump the cursor to its address.
pub(crate) fn final_arg(core: &mut Core, cursor: &mut Cursor) -> ControlFlow {
    let index = cursor.next_u8();
    let promoted = core.current.take_child(index);
    let State {
        address,
        children,
        symbols,
    } = promoted;
    core.current.install(address, children, symbols);
    cursor.goto(address);
    ControlFlow::Continue
}
