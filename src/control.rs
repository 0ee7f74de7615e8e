/*!
control.rs - The control-flow signal threaded through moves.

`ControlFlow::Stop` carries the reason a `run` invocation terminates:
either a tape-left underflow or a `HALT` opcode. `ControlFlow::Continue`
means a new current state was installed and the cursor jumped; the
driver should attempt another move (budget permitting).
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StopReason {
    LeftUnderflow,
    Halt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ControlFlow {
    Continue,
    Stop(StopReason),
}
