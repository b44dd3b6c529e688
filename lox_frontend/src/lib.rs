#![deny(clippy::all)]

mod constants;
pub mod diagnostics;
pub mod keywords;
pub mod runner;
pub mod scanner;
pub mod source;
pub mod token;

#[cfg(any(test, feature = "debug"))]
mod debug;

pub use constants::{EX_DATAERR, EX_IOERR, EX_NOINPUT, EX_USAGE, MAX_SOURCE_LEN};
