use codespan_reporting::diagnostic::{Diagnostic, Label};
use std::{fmt, ops::Range};
use thiserror::Error;

/// The kinds of invalid input the scanner can encounter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanErrorKind {
  #[error("Unexpected character '{0}'.")]
  UnexpectedCharacter(char),

  #[error("Unterminated string.")]
  UnterminatedString,

  #[error("Invalid number literal.")]
  MalformedNumber,
}

/// An error found while scanning. Errors never stop a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanError {
  kind: ScanErrorKind,

  /// The line the error was detected on
  line: usize,

  /// The byte range of the offending source
  span: Range<usize>,

  /// The offending source text
  context: String,
}

impl ScanError {
  pub fn new(kind: ScanErrorKind, line: usize, span: Range<usize>, context: &str) -> Self {
    Self {
      kind,
      line,
      span,
      context: context.to_string(),
    }
  }

  pub fn kind(&self) -> &ScanErrorKind {
    &self.kind
  }

  pub fn line(&self) -> usize {
    self.line
  }

  pub fn span(&self) -> Range<usize> {
    self.span.clone()
  }

  pub fn message(&self) -> String {
    self.kind.to_string()
  }

  pub fn context(&self) -> &str {
    &self.context
  }

  /// Convert this error into a diagnostic labeling the offending source
  pub fn to_diagnostic<F>(&self, file_id: F) -> Diagnostic<F> {
    Diagnostic::error()
      .with_message(self.message())
      .with_labels(vec![Label::primary(file_id, self.span())])
  }
}

impl fmt::Display for ScanError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "line {}: {}", self.line, self.kind)?;

    if !self.context.is_empty() {
      write!(f, " {}", self.context)?;
    }

    Ok(())
  }
}

impl std::error::Error for ScanError {}

/// Receives errors as the scanner finds them
pub trait Reporter {
  fn report(&mut self, error: ScanError);
}

/// A reporter that simply keeps every error it is given
#[derive(Debug, Default)]
pub struct ErrorLog {
  errors: Vec<ScanError>,
}

impl ErrorLog {
  pub fn had_error(&self) -> bool {
    !self.errors.is_empty()
  }

  pub fn errors(&self) -> &[ScanError] {
    &self.errors
  }
}

impl Reporter for ErrorLog {
  fn report(&mut self, error: ScanError) {
    self.errors.push(error);
  }
}

/// A reporter converting errors into diagnostics for a single file
pub struct DiagnosticReporter<F> {
  file_id: F,
  diagnostics: Vec<Diagnostic<F>>,
}

impl<F> DiagnosticReporter<F> {
  pub fn new(file_id: F) -> Self {
    Self {
      file_id,
      diagnostics: vec![],
    }
  }

  pub fn had_error(&self) -> bool {
    !self.diagnostics.is_empty()
  }

  pub fn diagnostics(&self) -> &[Diagnostic<F>] {
    &self.diagnostics
  }
}

impl<F: Copy> Reporter for DiagnosticReporter<F> {
  fn report(&mut self, error: ScanError) {
    self.diagnostics.push(error.to_diagnostic(self.file_id));
  }
}
