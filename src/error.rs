/*!
error.rs - The crate's single fallible boundary.

Overview
========
Everything past the image header is a trusted compiler artifact (see
`spec.md` §7): malformed opcode streams, out-of-range arg indices, and
build-stack overflow are undefined behaviour, not `Result`s. The only
condition this crate refuses to read past is a header-sized short image,
because doing so would otherwise panic on a slice index rather than
report a clean error to the caller.

Scope
=====
`VmError` is intentionally tiny. Do not grow it into a general-purpose
image validator — that job is explicitly out of scope (an offline
validator is named as a future external collaborator in spec.md's design
notes, not part of this crate).
*/

/// Errors a [`crate::Vm`] can report. Everything else is undefined
/// behaviour by contract (the bytecode image is trusted).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum VmError {
    /// The image is smaller than the fixed 6-byte header (2-byte reserved
    /// field + 4-byte entry address) and cannot be read at all.
    #[error("image of {len} byte(s) is too short to hold the 6-byte header")]
    TruncatedImage { len: usize },
}
