pub const PROMPT: &str = "> ";
pub const REPL_MODULE: &str = "repl.lox";

/// The largest source the scanner accepts. Spans are `u32` offsets
pub const MAX_SOURCE_LEN: usize = u32::MAX as usize - 1;

/// The command was used incorrectly
pub const EX_USAGE: i32 = 64;

/// The input data was incorrect
pub const EX_DATAERR: i32 = 65;

/// An input file did not exist or was not readable
pub const EX_NOINPUT: i32 = 66;

/// An error occurred while doing I/O
pub const EX_IOERR: i32 = 74;
