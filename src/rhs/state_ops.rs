/*!
state_ops.rs - RHS opcodes that move states between the current-state
registers and the state build stack.

Covers TAKE_ARG, CLONE_ARG, FREE_ARG (spec.md §4.4):
- TAKE_ARG transfers ownership without copying; the slot is left dangling
  and must not be referenced again within the same RHS unless restaged.
- CLONE_ARG deep-copies and leaves the original slot intact.
- FREE_ARG deep-frees the child; in Rust this is simply dropping the
  value taken out of the slot (Drop recursively frees the tree).
*/

use crate::core::Core;
use crate::cursor::Cursor;
use crate::state::State;

#[inline]
pub(crate) fn take_arg(core: &mut Core, cursor: &mut Cursor) {
    let index = cursor.next_u8();
    let state = core.current.take_child(index);
    core.stacks.push_state(state);
}

#[inline]
pub(crate) fn clone_arg(core: &mut Core, cursor: &mut Cursor) {
    let index = cursor.next_u8();
    let cloned = core.current.child(index).clone();
    core.stacks.push_state(cloned);
}

#[inline]
pub(crate) fn free_arg(core: &mut Core, cursor: &mut Cursor) {
    let index = cursor.next_u8();
    let freed: State = core.current.take_child(index);
    drop(freed);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn core_with_one_child() -> Core {
        let mut core = Core::new(&[0]);
        core.current
            .install(0, vec![State::new(0xAB, vec![], vec![9])], vec![]);
        core
    }

    #[test]
    fn take_arg_moves_ownership_and_leaves_a_placeholder() {
        let mut core = core_with_one_child();
        let image = [0u8];
        let mut cursor = Cursor::new(&image);
        take_arg(&mut core, &mut cursor);
        assert_eq!(core.stacks.states[0].address(), 0xAB);
        assert_eq!(core.current.children[0].address(), 0);
    }

    #[test]
    fn clone_arg_leaves_the_original_slot_untouched() {
        let mut core = core_with_one_child();
        let image = [0u8];
        let mut cursor = Cursor::new(&image);
        clone_arg(&mut core, &mut cursor);
        assert_eq!(core.stacks.states[0].address(), 0xAB);
        assert_eq!(core.current.children[0].address(), 0xAB);
    }

    #[test]
    fn clone_and_take_share_no_storage() {
        let mut core = core_with_one_child();
        let image = [0u8];
        let mut cursor = Cursor::new(&image);
        clone_arg(&mut core, &mut cursor);
        let mut cloned = core.stacks.states.pop().unwrap();
        cloned.symbols.push(100);
        assert_eq!(core.current.children[0].symbols(), &[9]);
    }

    #[test]
    fn free_arg_drops_the_child_in_place() {
        let mut core = core_with_one_child();
        let image = [0u8];
        let mut cursor = Cursor::new(&image);
        free_arg(&mut core, &mut cursor);
        assert_eq!(core.current.children[0].address(), 0);
    }
}
