use std::fmt;
use variant_count::VariantCount;

/// Anything that covers a byte range of the source
pub trait Spanned {
  fn start(&self) -> u32;
  fn end(&self) -> u32;
}

/// The decoded value carried by a literal token
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal<'a> {
  Nil,
  Number(f64),
  String(&'a str),
}

impl<'a> fmt::Display for Literal<'a> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Literal::Nil => f.write_str("<nil>"),
      Literal::Number(number) => write!(f, "{}", number),
      Literal::String(string) => f.write_str(string),
    }
  }
}

/// A token in the Lox language
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
  /// The token kind
  kind: TokenKind,

  /// The source text this token was scanned from
  lexeme: &'a str,

  /// The decoded value for strings and numbers
  literal: Literal<'a>,

  /// The line this token starts on
  line: usize,

  /// the start offset of this token
  start: u32,

  /// The end offset of this token
  end: u32,
}

impl<'a> Token<'a> {
  pub const fn new(
    kind: TokenKind,
    lexeme: &'a str,
    literal: Literal<'a>,
    line: usize,
    start: u32,
    end: u32,
  ) -> Self {
    Self {
      kind,
      lexeme,
      literal,
      line,
      start,
      end,
    }
  }

  #[inline]
  pub fn kind(&self) -> TokenKind {
    self.kind
  }

  #[inline]
  pub fn lexeme(&self) -> &'a str {
    self.lexeme
  }

  #[inline]
  pub fn literal(&self) -> Literal<'a> {
    self.literal
  }

  #[inline]
  pub fn line(&self) -> usize {
    self.line
  }
}

impl<'a> Spanned for Token<'a> {
  fn start(&self) -> u32 {
    self.start
  }

  fn end(&self) -> u32 {
    self.end
  }
}

impl<'a> fmt::Display for Token<'a> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{} {} {} {}",
      self.kind.name(),
      self.lexeme,
      self.literal,
      self.line
    )
  }
}

/// Token kinds in the Lox language
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, VariantCount)]
#[repr(u8)]
pub enum TokenKind {
  LeftParen,
  RightParen,
  LeftBrace,
  RightBrace,
  Comma,
  Dot,
  Minus,
  Plus,
  Semicolon,
  Slash,
  Star,

  // comparisons
  Bang,
  BangEqual,
  Equal,
  EqualEqual,
  Greater,
  GreaterEqual,
  Less,
  LessEqual,

  // literals
  Identifier,
  String,
  Number,

  // keywords
  And,
  Class,
  Else,
  False,
  Fun,
  For,
  If,
  Nil,
  Or,
  Print,
  Return,
  Super,
  This,
  True,
  Var,
  While,

  // meta
  Eof,
}

impl TokenKind {
  /// Is this kind one of the reserved words
  pub fn is_keyword(self) -> bool {
    (self as u8) >= (TokenKind::And as u8) && (self as u8) <= (TokenKind::While as u8)
  }

  /// The name used when dumping tokens
  pub fn name(self) -> &'static str {
    TOKEN_NAMES[self as usize]
  }
}

const TOKEN_NAMES: [&str; TokenKind::VARIANT_COUNT] = [
  "LeftParen",
  "RightParen",
  "LeftBrace",
  "RightBrace",
  "Comma",
  "Dot",
  "Minus",
  "Plus",
  "Semicolon",
  "Slash",
  "Star",
  "Bang",
  "BangEqual",
  "Equal",
  "EqualEqual",
  "Greater",
  "GreaterEqual",
  "Less",
  "LessEqual",
  "Identifier",
  "String",
  "Number",
  "And",
  "Class",
  "Else",
  "False",
  "Fun",
  "For",
  "If",
  "Nil",
  "Or",
  "Print",
  "Return",
  "Super",
  "This",
  "True",
  "Var",
  "While",
  "EOF",
];

impl fmt::Display for TokenKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      TokenKind::LeftParen => "(",
      TokenKind::RightParen => ")",
      TokenKind::LeftBrace => "{",
      TokenKind::RightBrace => "}",
      TokenKind::Comma => ",",
      TokenKind::Dot => ".",
      TokenKind::Minus => "-",
      TokenKind::Plus => "+",
      TokenKind::Semicolon => ";",
      TokenKind::Slash => "/",
      TokenKind::Star => "*",
      TokenKind::Bang => "!",
      TokenKind::BangEqual => "!=",
      TokenKind::Equal => "=",
      TokenKind::EqualEqual => "==",
      TokenKind::Greater => ">",
      TokenKind::GreaterEqual => ">=",
      TokenKind::Less => "<",
      TokenKind::LessEqual => "<=",
      TokenKind::Identifier => "identifier",
      TokenKind::String => "string",
      TokenKind::Number => "number",
      TokenKind::And => "and",
      TokenKind::Class => "class",
      TokenKind::Else => "else",
      TokenKind::False => "false",
      TokenKind::Fun => "fun",
      TokenKind::For => "for",
      TokenKind::If => "if",
      TokenKind::Nil => "nil",
      TokenKind::Or => "or",
      TokenKind::Print => "print",
      TokenKind::Return => "return",
      TokenKind::Super => "super",
      TokenKind::This => "this",
      TokenKind::True => "true",
      TokenKind::Var => "var",
      TokenKind::While => "while",
      TokenKind::Eof => "eof",
    })
  }
}
