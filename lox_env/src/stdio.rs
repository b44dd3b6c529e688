use io::{Read, Write};
use std::io;
use termcolor::{ColorSpec, WriteColor};

/// A wrapper the provided facilities around standard input output and err
pub struct Stdio {
  stdio: Box<dyn StdioImpl>,
}

impl Default for Stdio {
  fn default() -> Self {
    Self {
      stdio: Box::new(StdioMock::default()),
    }
  }
}

impl Stdio {
  /// Create a new wrapper from the provided stdio facilities
  pub fn new(stdio: Box<dyn StdioImpl>) -> Self {
    Self { stdio }
  }

  /// Get a Write to stdout
  pub fn stdout(&mut self) -> &mut dyn Write {
    self.stdio.stdout()
  }

  /// Get a Write to stderr
  pub fn stderr(&mut self) -> &mut dyn Write {
    self.stdio.stderr()
  }

  /// Get a color capable Write to stderr, used for rendering diagnostics
  pub fn stderr_color(&mut self) -> &mut dyn WriteColor {
    self.stdio.stderr_color()
  }

  /// Get a Read to stdin
  pub fn stdin(&mut self) -> &mut dyn Read {
    self.stdio.stdin()
  }

  /// Read a line from standard in. A return of `Ok(0)` signals
  /// the end of input
  pub fn read_line(&mut self, buffer: &mut String) -> io::Result<usize> {
    self.stdio.read_line(buffer)
  }
}

pub trait StdioImpl {
  fn stdout(&mut self) -> &mut dyn Write;
  fn stderr(&mut self) -> &mut dyn Write;
  fn stderr_color(&mut self) -> &mut dyn WriteColor;
  fn stdin(&mut self) -> &mut dyn Read;

  fn read_line(&mut self, buffer: &mut String) -> io::Result<usize>;
}

/// Stdio that swallows all output and has no input
#[derive(Default)]
pub struct StdioMock {
  write: MockWrite,
  read: MockRead,
}

impl StdioImpl for StdioMock {
  fn stdout(&mut self) -> &mut dyn Write {
    &mut self.write
  }
  fn stderr(&mut self) -> &mut dyn Write {
    &mut self.write
  }
  fn stderr_color(&mut self) -> &mut dyn WriteColor {
    &mut self.write
  }
  fn stdin(&mut self) -> &mut dyn Read {
    &mut self.read
  }
  fn read_line(&mut self, _buffer: &mut String) -> io::Result<usize> {
    Ok(0)
  }
}

#[derive(Default)]
pub struct MockWrite();

impl Write for MockWrite {
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    Ok(buf.len())
  }
  fn flush(&mut self) -> io::Result<()> {
    Ok(())
  }
}

impl WriteColor for MockWrite {
  fn supports_color(&self) -> bool {
    false
  }
  fn set_color(&mut self, _: &ColorSpec) -> io::Result<()> {
    Ok(())
  }
  fn reset(&mut self) -> io::Result<()> {
    Ok(())
  }
}

#[derive(Default)]
pub struct MockRead();

impl Read for MockRead {
  fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
    Ok(0)
  }
}

pub mod support {
  use super::{Stdio, StdioImpl};
  use std::cell::RefCell;
  use std::io::{self, Cursor, Read, Write};
  use std::rc::Rc;
  use termcolor::{ColorSpec, WriteColor};

  /// A shared in memory writer. Clones write into the same buffer
  #[derive(Debug, Clone, Default)]
  pub struct TestWriter(Rc<RefCell<Vec<u8>>>);

  impl TestWriter {
    /// The buffer contents decoded as utf8
    pub fn contents(&self) -> String {
      String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
  }

  impl Write for TestWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
      self.0.borrow_mut().extend_from_slice(buf);
      Ok(buf.len())
    }
    fn flush(&mut self) -> io::Result<()> {
      Ok(())
    }
  }

  impl WriteColor for TestWriter {
    fn supports_color(&self) -> bool {
      false
    }
    fn set_color(&mut self, _: &ColorSpec) -> io::Result<()> {
      Ok(())
    }
    fn reset(&mut self) -> io::Result<()> {
      Ok(())
    }
  }

  /// Holds the buffers behind a `StdioTest` so a test can inspect
  /// what was written after the stdio has been handed off
  #[derive(Debug, Default)]
  pub struct StdioTestContainer {
    pub stdout: TestWriter,
    pub stderr: TestWriter,
    pub stdin: Vec<u8>,
    pub lines: Vec<String>,
  }

  impl StdioTestContainer {
    pub fn with_lines(lines: Vec<String>) -> Self {
      Self {
        lines,
        ..Self::default()
      }
    }

    pub fn with_stdin(buf: &[u8]) -> Self {
      Self {
        stdin: Vec::from(buf),
        ..Self::default()
      }
    }

    pub fn make_stdio(&self) -> Stdio {
      Stdio::new(Box::new(StdioTest {
        stdout: self.stdout.clone(),
        stderr: self.stderr.clone(),
        stdin: Cursor::new(self.stdin.clone()),
        lines: self.lines.clone(),
        line_index: 0,
      }))
    }

    pub fn log_stdio(&self) {
      eprintln!("{}", self.stdout.contents());
      eprintln!("{}", self.stderr.contents());
    }
  }

  #[derive(Debug)]
  pub struct StdioTest {
    stdout: TestWriter,
    stderr: TestWriter,
    stdin: Cursor<Vec<u8>>,
    lines: Vec<String>,
    line_index: usize,
  }

  impl StdioImpl for StdioTest {
    fn stdout(&mut self) -> &mut dyn Write {
      &mut self.stdout
    }
    fn stderr(&mut self) -> &mut dyn Write {
      &mut self.stderr
    }
    fn stderr_color(&mut self) -> &mut dyn WriteColor {
      &mut self.stderr
    }
    fn stdin(&mut self) -> &mut dyn Read {
      &mut self.stdin
    }
    fn read_line(&mut self, buffer: &mut String) -> io::Result<usize> {
      match self.lines.get(self.line_index) {
        Some(line) => {
          buffer.push_str(line);
          self.line_index += 1;
          Ok(line.len())
        },
        None => Ok(0),
      }
    }
  }
}
