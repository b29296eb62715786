//! Stable exit codes for the calculator CLI.

/// The session ran to completion, whatever outcome it reported.
pub const OK: i32 = 0;
/// The session could not complete (closed input, I/O failure, invalid config,
/// or an exhausted retry limit).
pub const INVALID: i32 = 1;
