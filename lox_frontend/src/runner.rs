use crate::{
  constants::{EX_DATAERR, EX_IOERR, MAX_SOURCE_LEN, PROMPT, REPL_MODULE},
  diagnostics::DiagnosticReporter,
  scanner::Scanner,
  source::{SourceFileId, SourceFiles},
};
use codespan_reporting::{
  files,
  term::{self, Config},
};
use lox_env::stdio::Stdio;
use lox_native::stdio::stdio_native;
use std::io;
use std::path::PathBuf;

/// How a run or repl session finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunExit {
  Ok,
  ScanError,
  SourceTooLarge,
  IoError,
}

pub fn default_native_runner() -> Runner {
  Runner::new(stdio_native())
}

/// Feeds whole programs to the scanner and prints the resulting tokens
pub struct Runner {
  /// Where tokens and diagnostics are written
  stdio: Stdio,

  /// The sources scanned so far, kept for rendering diagnostics
  files: SourceFiles,

  /// Did the last scan report an error
  had_error: bool,

  /// The largest source handed to the scanner
  max_source_len: usize,
}

impl Runner {
  pub fn new(stdio: Stdio) -> Self {
    Self {
      stdio,
      files: SourceFiles::default(),
      had_error: false,
      max_source_len: MAX_SOURCE_LEN,
    }
  }

  /// Lower the size limit on scanned sources. Never raised past
  /// `MAX_SOURCE_LEN`
  pub fn with_max_source_len(mut self, max_source_len: usize) -> Self {
    self.max_source_len = max_source_len.min(MAX_SOURCE_LEN);
    self
  }

  /// Did the most recent scan report an error
  pub fn had_error(&self) -> bool {
    self.had_error
  }

  /// Start the interactive repl
  pub fn repl(&mut self) -> (i32, RunExit) {
    loop {
      let mut buffer = String::new();

      if let Err(err) = self.prompt() {
        return self.io_error(err);
      }

      match self.stdio.read_line(&mut buffer) {
        Ok(0) => {
          return match writeln!(self.stdio.stdout()) {
            Ok(()) => (0, RunExit::Ok),
            Err(err) => self.io_error(err),
          };
        },
        Ok(_) => {
          let line = buffer.trim_end_matches(|c| c == '\n' || c == '\r');

          if line.len() > self.max_source_len {
            if let Err(err) = self.too_large(REPL_MODULE, line.len()) {
              return self.io_error(err);
            }
            continue;
          }

          let file_id = self.files.upsert(REPL_MODULE, line);

          if let Err(err) = self.interpret(file_id, REPL_MODULE, line) {
            return self.io_error(err);
          }

          // each line stands alone
          self.had_error = false;
        },
        Err(err) => return self.io_error(err),
      }
    }
  }

  /// Run the provided source file
  pub fn run(&mut self, module_path: PathBuf, source: &str) -> (i32, RunExit) {
    let name = module_path.to_string_lossy();

    if source.len() > self.max_source_len {
      return match self.too_large(&name, source.len()) {
        Ok(()) => (EX_DATAERR, RunExit::SourceTooLarge),
        Err(err) => self.io_error(err),
      };
    }

    let file_id = self.files.upsert(&name, source);

    match self.interpret(file_id, &name, source) {
      Ok(()) => {
        if self.had_error {
          (EX_DATAERR, RunExit::ScanError)
        } else {
          (0, RunExit::Ok)
        }
      },
      Err(err) => self.io_error(err),
    }
  }

  /// Scan the provided source, print its tokens then any diagnostics
  #[cfg_attr(not(feature = "debug"), allow(unused_variables))]
  fn interpret(&mut self, file_id: SourceFileId, name: &str, source: &str) -> io::Result<()> {
    let mut reporter = DiagnosticReporter::new(file_id);
    let (tokens, line_offsets) = Scanner::new(source, &mut reporter).scan_tokens();

    self
      .files
      .update_line_offsets(file_id, line_offsets)
      .map_err(to_io_error)?;

    #[cfg(feature = "debug")]
    crate::debug::print_tokens(self.stdio.stdout(), name, &tokens)?;

    let stdout = self.stdio.stdout();
    for token in &tokens {
      writeln!(stdout, "{}", token)?;
    }

    let stderr = self.stdio.stderr_color();
    for diagnostic in reporter.diagnostics() {
      term::emit(stderr, &Config::default(), &self.files, diagnostic).map_err(to_io_error)?;
    }

    self.had_error = reporter.had_error();
    Ok(())
  }

  /// Report a source the scanner cannot accept
  fn too_large(&mut self, name: &str, len: usize) -> io::Result<()> {
    writeln!(
      self.stdio.stderr(),
      "{}: source of {} bytes exceeds the limit of {} bytes.",
      name,
      len,
      self.max_source_len
    )
  }

  fn prompt(&mut self) -> io::Result<()> {
    let stdout = self.stdio.stdout();
    write!(stdout, "{}", PROMPT)?;
    stdout.flush()
  }

  fn io_error(&mut self, err: io::Error) -> (i32, RunExit) {
    let _ = writeln!(self.stdio.stderr(), "{}", err);
    (EX_IOERR, RunExit::IoError)
  }
}

fn to_io_error(err: files::Error) -> io::Error {
  match err {
    files::Error::Io(err) => err,
    err => io::Error::new(io::ErrorKind::Other, err.to_string()),
  }
}
