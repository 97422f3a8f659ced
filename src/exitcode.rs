//! Standard exit codes (BSD sysexits.h compatible)

/// Successful termination, every input is a proper binary tree
pub const OK: i32 = 0;

/// At least one input is not a proper binary tree
pub const INVALID: i32 = 1;

/// Command line usage error
pub const USAGE: i32 = 64;

/// Data format error
pub const DATAERR: i32 = 65;

/// Input/output error
pub const IOERR: i32 = 74;

/// Configuration error
pub const CONFIG: i32 = 78;
