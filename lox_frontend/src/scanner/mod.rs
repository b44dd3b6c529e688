mod cursor;

pub use cursor::Cursor;

use crate::{
  diagnostics::{Reporter, ScanError, ScanErrorKind},
  keywords::keyword,
  source::LineOffsets,
  token::{Literal, Token, TokenKind},
};
use unicode_general_category::{get_general_category, GeneralCategory};

/// A scanner for the lox language. This struct is
/// responsible for taking a source string and tokenizing it
pub struct Scanner<'a, 'r> {
  /// The input source string
  source: &'a str,

  /// A cursor over the source characters
  cursor: Cursor<'a>,

  /// The tokens scanned so far
  tokens: Vec<Token<'a>>,

  /// Where errors are sent as they are found
  reporter: &'r mut dyn Reporter,

  /// The offset each line starts at
  line_offsets: Vec<usize>,

  /// The start of the current token
  start: usize,

  /// The line the current token started on
  start_line: usize,

  /// The current line number
  line: usize,
}

impl<'a, 'r> Scanner<'a, 'r> {
  /// Create a new scanner from the provided source string.
  /// Errors found while scanning are sent to `reporter`
  ///
  /// # Panics
  /// If `source` is not shorter than `u32::MAX` bytes. Token spans
  /// are stored as `u32` offsets.
  pub fn new(source: &'a str, reporter: &'r mut dyn Reporter) -> Scanner<'a, 'r> {
    assert!(
      source.len() < u32::MAX as usize,
      "Can only read files less than {} bytes",
      u32::MAX
    );

    let mut line_offsets = Vec::with_capacity(source_line_heuristic_guess(source.len()));
    line_offsets.push(0);

    Scanner {
      source,
      cursor: Cursor::new(source),
      tokens: Vec::new(),
      reporter,
      line_offsets,
      start: 0,
      start_line: 1,
      line: 1,
    }
  }

  /// Scan the entire source, returning its tokens terminated by
  /// a single eof token along with the offsets of each line
  pub fn scan_tokens(mut self) -> (Vec<Token<'a>>, LineOffsets) {
    while !self.cursor.is_at_end() {
      self.start = self.cursor.offset();
      self.start_line = self.line;
      self.scan_token();
    }

    let end = self.source.len() as u32;
    self
      .tokens
      .push(Token::new(TokenKind::Eof, "", Literal::Nil, self.line, end, end));

    self.line_offsets.shrink_to_fit();
    (
      self.tokens,
      LineOffsets::new(self.line_offsets, self.source.len()),
    )
  }

  /// Scan the next token from the source
  /// string provided.
  fn scan_token(&mut self) {
    let c = match self.cursor.advance() {
      Some(c) => c,
      None => return,
    };

    match c {
      '(' => self.add_token(TokenKind::LeftParen),
      ')' => self.add_token(TokenKind::RightParen),
      '{' => self.add_token(TokenKind::LeftBrace),
      '}' => self.add_token(TokenKind::RightBrace),
      ',' => self.add_token(TokenKind::Comma),
      '.' => self.add_token(TokenKind::Dot),
      '-' => self.add_token(TokenKind::Minus),
      '+' => self.add_token(TokenKind::Plus),
      ';' => self.add_token(TokenKind::Semicolon),
      '*' => self.add_token(TokenKind::Star),
      '!' => self.add_either('=', TokenKind::BangEqual, TokenKind::Bang),
      '=' => self.add_either('=', TokenKind::EqualEqual, TokenKind::Equal),
      '<' => self.add_either('=', TokenKind::LessEqual, TokenKind::Less),
      '>' => self.add_either('=', TokenKind::GreaterEqual, TokenKind::Greater),
      '/' => {
        if self.cursor.match_char('/') {
          self.cursor.advance_while(|c| c != '\n');
        } else {
          self.add_token(TokenKind::Slash)
        }
      },
      ' ' | '\r' | '\t' => {},
      '\n' => self.new_line(),
      '"' => self.string(),
      _ => {
        if is_digit(c) {
          return self.number();
        }

        if is_alpha(c) {
          return self.identifier();
        }

        self.error(ScanErrorKind::UnexpectedCharacter(c));
      },
    }
  }

  /// Generate an identifier or keyword token
  fn identifier(&mut self) {
    self.cursor.advance_while(is_alpha_numeric);

    let kind = keyword(self.current_slice()).unwrap_or(TokenKind::Identifier);
    self.add_token(kind)
  }

  /// Generate a number token
  fn number(&mut self) {
    self.cursor.advance_while(is_digit);

    // only consume the dot if a fractional part follows
    if self.cursor.peek() == Some('.') && self.cursor.peek_next().map_or(false, is_digit) {
      self.cursor.advance();
      self.cursor.advance_while(is_digit);
    }

    match self.current_slice().parse::<f64>() {
      Ok(number) => self.add_literal(TokenKind::Number, Literal::Number(number)),
      Err(_) => {
        self.error(ScanErrorKind::MalformedNumber);
        self.add_token(TokenKind::Number)
      },
    }
  }

  /// Generate a string token
  fn string(&mut self) {
    while let Some(c) = self.cursor.advance_if(|c| c != '"') {
      if c == '\n' {
        self.new_line();
      }
    }

    if self.cursor.is_at_end() {
      self.error(ScanErrorKind::UnterminatedString);
      return;
    }

    // the closing quote
    self.cursor.advance();

    let value = &self.source[self.start + 1..self.cursor.offset() - 1];
    self.add_literal(TokenKind::String, Literal::String(value))
  }

  /// Add `matched` if the next char is `expected` otherwise `single`
  fn add_either(&mut self, expected: char, matched: TokenKind, single: TokenKind) {
    if self.cursor.match_char(expected) {
      self.add_token(matched)
    } else {
      self.add_token(single)
    }
  }

  /// Add a token without a literal value
  fn add_token(&mut self, kind: TokenKind) {
    self.add_literal(kind, Literal::Nil)
  }

  /// Add a token from the current state of the scanner
  fn add_literal(&mut self, kind: TokenKind, literal: Literal<'a>) {
    self.tokens.push(Token::new(
      kind,
      self.current_slice(),
      literal,
      self.start_line,
      self.start as u32,
      self.cursor.offset() as u32,
    ));
  }

  /// Report an error for the current slice
  fn error(&mut self, kind: ScanErrorKind) {
    let error = ScanError::new(
      kind,
      self.line,
      self.start..self.cursor.offset(),
      self.current_slice(),
    );
    self.reporter.report(error);
  }

  /// Insert a new line
  fn new_line(&mut self) {
    self.line += 1;
    self.line_offsets.push(self.cursor.offset());
  }

  /// Get the current str slice
  fn current_slice(&self) -> &'a str {
    self.cursor.slice(self.start)
  }
}

/// Is the char a decimal digit
fn is_digit(c: char) -> bool {
  c.is_ascii_digit()
}

/// Is the char in one of the letter general categories
fn is_letter(c: char) -> bool {
  matches!(
    get_general_category(c),
    GeneralCategory::UppercaseLetter
      | GeneralCategory::LowercaseLetter
      | GeneralCategory::TitlecaseLetter
      | GeneralCategory::ModifierLetter
      | GeneralCategory::OtherLetter
  )
}

/// Can the char start an identifier
fn is_alpha(c: char) -> bool {
  c == '_' || is_letter(c)
}

/// Can the char continue an identifier
fn is_alpha_numeric(c: char) -> bool {
  is_alpha(c) || get_general_category(c) == GeneralCategory::DecimalNumber
}

/// A loose estimate for how many characters are in a typical line
const fn source_line_heuristic_guess(len: usize) -> usize {
  len / 20
}
