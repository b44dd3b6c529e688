use lox_env::stdio::{Stdio, StdioImpl};
use std::io::{self, stdin, stdout, Stdin, Stdout};
use termcolor::{ColorChoice, StandardStream, WriteColor};

/// Create a `Stdio` backed by the process's standard streams
pub fn stdio_native() -> Stdio {
  Stdio::new(Box::new(NativeStdio::default()))
}

pub struct NativeStdio {
  stdout: Stdout,
  stderr: StandardStream,
  stdin: Stdin,
}

impl Default for NativeStdio {
  fn default() -> Self {
    Self {
      stdout: stdout(),
      stderr: StandardStream::stderr(ColorChoice::Auto),
      stdin: stdin(),
    }
  }
}

impl StdioImpl for NativeStdio {
  fn stdout(&mut self) -> &mut dyn io::Write {
    &mut self.stdout
  }

  fn stderr(&mut self) -> &mut dyn io::Write {
    &mut self.stderr
  }

  fn stderr_color(&mut self) -> &mut dyn WriteColor {
    &mut self.stderr
  }

  fn stdin(&mut self) -> &mut dyn io::Read {
    &mut self.stdin
  }

  fn read_line(&mut self, buffer: &mut String) -> io::Result<usize> {
    self.stdin.read_line(buffer)
  }
}
