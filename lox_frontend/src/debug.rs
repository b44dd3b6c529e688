use crate::token::{Spanned, Token};
use std::io::{self, Write};

/// Write a table of the scanned tokens, one per row
pub fn print_tokens(stdout: &mut dyn Write, name: &str, tokens: &[Token]) -> io::Result<()> {
  writeln!(stdout)?;
  writeln!(stdout, "{0}", name)?;

  let mut last_line: usize = 0;

  for token in tokens {
    write!(stdout, "  {:0>4} ", token.start())?;

    if token.line() == last_line {
      write!(stdout, "   | ")?;
    } else {
      write!(stdout, "{:>4} ", token.line())?;
    }

    writeln!(stdout, "{:<14} '{}'", token.kind().name(), token.lexeme())?;
    last_line = token.line();
  }

  Ok(())
}
