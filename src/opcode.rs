/*!
opcode.rs - Opcode numbering for both tiers of the instruction set.

Two numbering schemes are observed in the wild for this bytecode (see
spec.md §6 and the REDESIGN FLAGS): one places the four move-level
opcodes (`COMPARE_ARG`, `COMPARE_VAL`, `OTHER`, `HALT`) after the sixteen
RHS opcodes (values 16-19), the other places them first (values 0-3) and
shifts the RHS opcodes up by four. Both are internally consistent — move
opcodes and RHS opcodes are read by disjoint decode loops
([`crate::moves`] and [`crate::rhs`]) and are never compared against each
other — so the choice is purely a producer/consumer agreement.

This crate picks the first scheme as the default (it matches
`examples/original_source/src/vm.c`) and exposes the second behind the
`alt_opcodes` cargo feature, per the Open Question resolution in
SPEC_FULL.md §9. No runtime code reconciles images built for the opposite
scheme; that is the job of the out-of-scope offline validator.
*/

#![allow(dead_code)]

/// RHS-tier opcodes (§4.4).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RhsOp {
    Left,
    Right,
    LeftN,
    RightN,
    WriteArg,
    WriteVal,
    WriteBound,
    SymbolArg,
    SymbolVal,
    SymbolBound,
    TakeArg,
    CloneArg,
    FreeArg,
    MakeState,
    FinalState,
    FinalArg,
}

/// Move-tier opcodes (§4.5).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MoveOp {
    CompareArg,
    CompareVal,
    Other,
    Halt,
}

#[cfg(not(feature = "alt_opcodes"))]
mod numbering {
    use super::{MoveOp, RhsOp};

    pub(crate) const RHS_BASE: u8 = 0;
    pub(crate) const MOVE_BASE: u8 = 16;

    pub(crate) fn decode_rhs(byte: u8) -> RhsOp {
        match byte {
            0 => RhsOp::Left,
            1 => RhsOp::Right,
            2 => RhsOp::LeftN,
            3 => RhsOp::RightN,
            4 => RhsOp::WriteArg,
            5 => RhsOp::WriteVal,
            6 => RhsOp::WriteBound,
            7 => RhsOp::SymbolArg,
            8 => RhsOp::SymbolVal,
            9 => RhsOp::SymbolBound,
            10 => RhsOp::TakeArg,
            11 => RhsOp::CloneArg,
            12 => RhsOp::FreeArg,
            13 => RhsOp::MakeState,
            14 => RhsOp::FinalState,
            15 => RhsOp::FinalArg,
            other => panic!("invalid RHS opcode byte {other}: trusted image violated"),
        }
    }

    pub(crate) fn decode_move(byte: u8) -> MoveOp {
        match byte {
            16 => MoveOp::CompareArg,
            17 => MoveOp::CompareVal,
            18 => MoveOp::Other,
            19 => MoveOp::Halt,
            other => panic!("invalid move opcode byte {other}: trusted image violated"),
        }
    }
}

#[cfg(feature = "alt_opcodes")]
mod numbering {
    use super::{MoveOp, RhsOp};

    pub(crate) const RHS_BASE: u8 = 4;
    pub(crate) const MOVE_BASE: u8 = 0;

    pub(crate) fn decode_rhs(byte: u8) -> RhsOp {
        match byte {
            4 => RhsOp::Left,
            5 => RhsOp::Right,
            6 => RhsOp::LeftN,
            7 => RhsOp::RightN,
            8 => RhsOp::WriteArg,
            9 => RhsOp::WriteVal,
            10 => RhsOp::WriteBound,
            11 => RhsOp::SymbolArg,
            12 => RhsOp::SymbolVal,
            13 => RhsOp::SymbolBound,
            14 => RhsOp::TakeArg,
            15 => RhsOp::CloneArg,
            16 => RhsOp::FreeArg,
            17 => RhsOp::MakeState,
            18 => RhsOp::FinalState,
            19 => RhsOp::FinalArg,
            other => panic!("invalid RHS opcode byte {other}: trusted image violated"),
        }
    }

    pub(crate) fn decode_move(byte: u8) -> MoveOp {
        match byte {
            0 => MoveOp::CompareArg,
            1 => MoveOp::CompareVal,
            2 => MoveOp::Other,
            3 => MoveOp::Halt,
            other => panic!("invalid move opcode byte {other}: trusted image violated"),
        }
    }
}

pub(crate) use numbering::{decode_move, decode_rhs};

#[cfg(test)]
pub(crate) use numbering::{MOVE_BASE, RHS_BASE};
