/*!
tmlvm - a bytecode virtual machine for a tape-rewriting,
Turing-machine-flavoured language.

A program is a flat byte image: a 6-byte header (a reserved field
followed by a little-endian 32-bit entry address) followed by a table of
move rules and RHS blocks, addressed by absolute byte offset. Running a
program repeatedly applies its current state's matching rule to a single
read/write tape of 16-bit symbols until a rule's RHS reaches `HALT`, the
tape head underflows past position zero, or the caller's move budget
runs out.

Module map
==========
- [`cursor`] - instruction pointer over the trusted byte image
- [`control`] - the `ControlFlow`/`StopReason` signal threaded up from a move
- [`tape`] - the growable, implicit-zero symbol tape
- [`state`] - the recursive `State` value (address + children + symbols)
- [`opcode`] - opcode numbering for both instruction tiers
- [`workspace`] - flattened current-state registers and the two build stacks
- [`core`] - the VM aggregate shared by the move and RHS interpreters
- [`rhs`] - the sixteen RHS opcodes (tape/symbol/state ops, finalizers)
- [`moves`] - the four move-tier opcodes (COMPARE_ARG/COMPARE_VAL/OTHER/HALT)
- [`vm`] - the public driver: header parsing and the budgeted move loop
- [`error`] - the crate's single fallible boundary

Cargo features
===============
- `trace` - emit `log::trace!`/`log::debug!` records for each dispatched
  opcode and completed move. Off by default; this crate never initializes
  a logger itself, only records through the facade.
- `alt_opcodes` - switch to the alternate move/RHS opcode numbering
  described in opcode.rs's module doc. Producer and consumer of an image
  must agree on this choice; nothing here reconciles the two.
*/

mod control;
mod core;
mod cursor;
mod error;
mod moves;
mod opcode;
mod rhs;
mod state;
mod tape;
mod vm;
mod workspace;

pub use error::VmError;
pub use state::State;
pub use tape::Symbol;
pub use vm::{RunOutcome, Vm};
