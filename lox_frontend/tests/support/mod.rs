use lox_env::stdio::support::StdioTestContainer;
use lox_frontend::runner::{RunExit, Runner};
use std::fs::read_to_string;
use std::io;
use std::path::PathBuf;

pub fn fixture_path(fixture_path: &str) -> PathBuf {
  PathBuf::from(env!("CARGO_MANIFEST_DIR"))
    .join("fixture")
    .join(fixture_path)
}

pub fn load_fixture(fixture_path: &str) -> io::Result<String> {
  read_to_string(self::fixture_path(fixture_path))
}

/// The captured output of running a fixture
#[allow(dead_code)]
pub struct RunOutput {
  pub code: i32,
  pub exit: RunExit,
  pub stdout: String,
  pub stderr: String,
  pub container: StdioTestContainer,
}

#[allow(dead_code)]
pub fn run_fixture(path: &str) -> io::Result<RunOutput> {
  let source = load_fixture(path)?;
  let container = StdioTestContainer::default();
  let mut runner = Runner::new(container.make_stdio());

  let (code, exit) = runner.run(PathBuf::from(path), &source);

  Ok(RunOutput {
    code,
    exit,
    stdout: container.stdout.contents(),
    stderr: container.stderr.contents(),
    container,
  })
}

#[allow(dead_code)]
pub fn assert_files_exit(paths: &[&str], expected: RunExit) -> io::Result<()> {
  for path in paths {
    let output = run_fixture(path)?;

    if output.exit != expected {
      output.container.log_stdio();
    }
    assert_eq!(output.exit, expected, "{}", path);
  }

  Ok(())
}
