/*!
core.rs - The VM aggregate shared by the move and RHS interpreters.

Per Design Notes §9 of spec.md ("re-architect as a single VM aggregate
passed explicitly"), this struct owns everything a move touches: the
tape, the flattened current-state registers, the two build stacks, and
the bound register latched by `OTHER`. It has no knowledge of the
bytecode cursor or the move budget — those belong to [`crate::vm::Vm`],
which owns one `Core` per program run.
*/

use crate::tape::{Symbol, Tape};
use crate::workspace::{BuildStacks, CurrentState};

pub(crate) struct Core {
    pub(crate) tape: Tape,
    pub(crate) current: CurrentState,
    pub(crate) stacks: BuildStacks,
    pub(crate) bound: Symbol,
}

impl Core {
    pub(crate) fn new(initial_tape: &[Symbol]) -> Self {
        Self {
            tape: Tape::init(initial_tape),
            current: CurrentState::new(),
            stacks: BuildStacks::new(),
            bound: 0,
        }
    }
}
