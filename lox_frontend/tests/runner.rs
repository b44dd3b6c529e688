use lox_env::stdio::support::StdioTestContainer;
use lox_frontend::runner::{RunExit, Runner};
use lox_frontend::{EX_DATAERR, EX_IOERR};
use std::io::{self, Read, Write};
use support::{assert_files_exit, run_fixture};

mod support;

#[test]
fn valid_files() -> io::Result<()> {
  assert_files_exit(
    &[
      "scan/valid.lox",
      "scan/unicode.lox",
      "scan/comments.lox",
      "criterion/fib.lox",
      "criterion/binary_trees.lox",
      "criterion/zoo.lox",
    ],
    RunExit::Ok,
  )
}

#[test]
fn invalid_files() -> io::Result<()> {
  assert_files_exit(
    &["scan/unexpected.lox", "scan/unterminated.lox"],
    RunExit::ScanError,
  )
}

#[test]
fn unexpected_characters() -> io::Result<()> {
  let output = run_fixture("scan/unexpected.lox")?;

  assert_eq!(output.code, EX_DATAERR);
  assert!(output.stderr.contains("Unexpected character '@'."));
  assert!(output.stderr.contains("Unexpected character '#'."));
  assert!(output.stderr.contains("scan/unexpected.lox:2:11"), "{}", output.stderr);
  assert!(output.stderr.contains("scan/unexpected.lox:3:9"), "{}", output.stderr);

  // scanning carried on around both bad characters
  assert!(output.stdout.contains("Number 2 2 2\n"));
  assert!(output.stdout.contains("Number 3 3 3\n"));
  assert!(output.stdout.ends_with("EOF  <nil> 4\n"));
  Ok(())
}

#[test]
fn unterminated_string() -> io::Result<()> {
  let output = run_fixture("scan/unterminated.lox")?;

  assert!(output.stderr.contains("Unterminated string."));
  assert!(!output.stdout.contains("String"));
  assert_eq!(
    output.stdout,
    "Var var <nil> 1\nIdentifier greeting <nil> 1\nEqual = <nil> 1\nEOF  <nil> 4\n"
  );
  Ok(())
}

#[test]
fn comments_only() -> io::Result<()> {
  let output = run_fixture("scan/comments.lox")?;

  assert_eq!(output.stdout, "EOF  <nil> 4\n");
  assert_eq!(output.stderr, "");
  Ok(())
}

#[test]
fn unicode_file() -> io::Result<()> {
  let output = run_fixture("scan/unicode.lox")?;

  assert!(output.stdout.starts_with("Var var <nil> 1\nIdentifier größe <nil> 1\n"));
  assert!(output.stdout.contains("String \"straße 💯\" straße 💯 1\n"));
  assert!(output.stdout.contains("Identifier π <nil> 2\n"));
  assert!(output.stdout.contains("Number 3.14159 3.14159 2\n"));
  Ok(())
}

#[test]
fn oversized_file() -> io::Result<()> {
  let source = support::load_fixture("scan/valid.lox")?;
  let container = StdioTestContainer::default();
  let mut runner = Runner::new(container.make_stdio()).with_max_source_len(16);

  assert_eq!(
    runner.run("scan/valid.lox".into(), &source),
    (EX_DATAERR, RunExit::SourceTooLarge)
  );
  assert_eq!(container.stdout.contents(), "");
  assert!(container
    .stderr
    .contents()
    .starts_with("scan/valid.lox: source of "));
  assert!(container
    .stderr
    .contents()
    .ends_with("exceeds the limit of 16 bytes.\n"));
  Ok(())
}

#[test]
fn repl_session() {
  let container = StdioTestContainer::with_lines(vec![
    "var a = \"one\";\n".to_string(),
    "a != 2 @\n".to_string(),
    "\n".to_string(),
  ]);
  let mut runner = Runner::new(container.make_stdio());

  assert_eq!(runner.repl(), (0, RunExit::Ok));
  assert_eq!(
    container.stdout.contents(),
    [
      "> Var var <nil> 1",
      "Identifier a <nil> 1",
      "Equal = <nil> 1",
      "String \"one\" one 1",
      "Semicolon ; <nil> 1",
      "EOF  <nil> 1",
      "> Identifier a <nil> 1",
      "BangEqual != <nil> 1",
      "Number 2 2 1",
      "EOF  <nil> 1",
      "> EOF  <nil> 1",
      "> ",
      "",
    ]
    .join("\n")
  );

  let stderr = container.stderr.contents();
  assert!(stderr.contains("Unexpected character '@'."), "{}", stderr);
  assert!(stderr.contains("repl.lox:1:8"), "{}", stderr);
}

struct BrokenPipe;

impl Write for BrokenPipe {
  fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
    Err(io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"))
  }
  fn flush(&mut self) -> io::Result<()> {
    Ok(())
  }
}

impl termcolor::WriteColor for BrokenPipe {
  fn supports_color(&self) -> bool {
    false
  }
  fn set_color(&mut self, _: &termcolor::ColorSpec) -> io::Result<()> {
    Ok(())
  }
  fn reset(&mut self) -> io::Result<()> {
    Ok(())
  }
}

struct BrokenStdio {
  broken: BrokenPipe,
  stdin: io::Empty,
}

impl lox_env::stdio::StdioImpl for BrokenStdio {
  fn stdout(&mut self) -> &mut dyn Write {
    &mut self.broken
  }
  fn stderr(&mut self) -> &mut dyn Write {
    &mut self.broken
  }
  fn stderr_color(&mut self) -> &mut dyn termcolor::WriteColor {
    &mut self.broken
  }
  fn stdin(&mut self) -> &mut dyn Read {
    &mut self.stdin
  }
  fn read_line(&mut self, _buffer: &mut String) -> io::Result<usize> {
    Ok(0)
  }
}

#[test]
fn output_failure() {
  let stdio = lox_env::stdio::Stdio::new(Box::new(BrokenStdio {
    broken: BrokenPipe,
    stdin: io::empty(),
  }));
  let mut runner = Runner::new(stdio);

  assert_eq!(
    runner.run("main.lox".into(), "print 1;"),
    (EX_IOERR, RunExit::IoError)
  );
  assert_eq!(runner.repl(), (EX_IOERR, RunExit::IoError));
}
