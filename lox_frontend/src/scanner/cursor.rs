use std::str::Chars;

/// A positional view over the source text. The offset only ever
/// moves by whole characters so it always lands on a char boundary
pub struct Cursor<'a> {
  /// The input source string
  source: &'a str,

  /// The characters not yet consumed
  chars: Chars<'a>,

  /// The byte offset of the next unconsumed character
  offset: usize,
}

impl<'a> Cursor<'a> {
  pub fn new(source: &'a str) -> Self {
    Self {
      source,
      chars: source.chars(),
      offset: 0,
    }
  }

  /// Consume the next character
  pub fn advance(&mut self) -> Option<char> {
    let c = self.chars.next()?;
    self.offset += c.len_utf8();
    Some(c)
  }

  /// Consume the next character if it satisfies `f`
  pub fn advance_if(&mut self, f: impl FnOnce(char) -> bool) -> Option<char> {
    match self.peek() {
      Some(c) if f(c) => self.advance(),
      _ => None,
    }
  }

  /// Consume characters for as long as they satisfy `f`
  pub fn advance_while(&mut self, mut f: impl FnMut(char) -> bool) {
    while self.advance_if(&mut f).is_some() {}
  }

  /// Consume the next character only if it is `expected`
  pub fn match_char(&mut self, expected: char) -> bool {
    self.advance_if(|c| c == expected).is_some()
  }

  /// Peek the current character
  pub fn peek(&self) -> Option<char> {
    self.chars.clone().next()
  }

  /// Peek one character past the current character
  pub fn peek_next(&self) -> Option<char> {
    let mut chars = self.chars.clone();
    chars.next();
    chars.next()
  }

  pub fn is_at_end(&self) -> bool {
    self.chars.as_str().is_empty()
  }

  /// Get the current offset
  pub fn offset(&self) -> usize {
    self.offset
  }

  /// The source between `start` and the current offset
  pub fn slice(&self, start: usize) -> &'a str {
    &self.source[start..self.offset]
  }
}
