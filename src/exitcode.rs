//! Standard exit codes (BSD sysexits.h compatible)

/// Successful termination, sequence is valid
pub const OK: i32 = 0;

/// Sequence is not a valid post-order traversal
pub const INVALID: i32 = 1;

/// Command line usage error
pub const USAGE: i32 = 64;

/// Data format error
pub const DATAERR: i32 = 65;

/// Input/output error
pub const IOERR: i32 = 74;

/// Configuration error
pub const CONFIG: i32 = 78;
