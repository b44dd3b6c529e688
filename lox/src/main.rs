#![deny(clippy::all)]
use lox_frontend::runner::default_native_runner;
use lox_frontend::{EX_NOINPUT, EX_USAGE};
use std::env;
use std::fs::read_to_string;
use std::{path::PathBuf, process};

#[cfg(feature = "jemalloc")]
use jemallocator::Jemalloc;

#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

fn main() {
  let args: Vec<String> = env::args().collect();

  match args.as_slice() {
    [_] => process::exit(default_native_runner().repl().0),
    [_, file_path] => {
      let path = PathBuf::from(file_path);

      match read_to_string(&path) {
        Ok(source) => process::exit(default_native_runner().run(path, &source).0),
        Err(e) => {
          eprintln!("{}", e);
          process::exit(EX_NOINPUT)
        },
      }
    },
    _ => {
      eprintln!("Usage: lox [script]");
      process::exit(EX_USAGE)
    },
  }
}
