use crate::token::TokenKind;

/// Every reserved word and the token kind it scans to
pub const KEYWORDS: [(&str, TokenKind); 16] = [
  ("and", TokenKind::And),
  ("class", TokenKind::Class),
  ("else", TokenKind::Else),
  ("false", TokenKind::False),
  ("for", TokenKind::For),
  ("fun", TokenKind::Fun),
  ("if", TokenKind::If),
  ("nil", TokenKind::Nil),
  ("or", TokenKind::Or),
  ("print", TokenKind::Print),
  ("return", TokenKind::Return),
  ("super", TokenKind::Super),
  ("this", TokenKind::This),
  ("true", TokenKind::True),
  ("var", TokenKind::Var),
  ("while", TokenKind::While),
];

/// Identify if a scanned identifier is a keyword.
/// This uses a sort of hard coded trie
pub fn keyword(ident: &str) -> Option<TokenKind> {
  let mut chars = ident.chars();

  match chars.next()? {
    'a' => check_keyword(ident, 1, "nd", TokenKind::And),
    'c' => check_keyword(ident, 1, "lass", TokenKind::Class),
    'e' => check_keyword(ident, 1, "lse", TokenKind::Else),
    'f' => match chars.next()? {
      'a' => check_keyword(ident, 2, "lse", TokenKind::False),
      'o' => check_keyword(ident, 2, "r", TokenKind::For),
      'u' => check_keyword(ident, 2, "n", TokenKind::Fun),
      _ => None,
    },
    'i' => check_keyword(ident, 1, "f", TokenKind::If),
    'n' => check_keyword(ident, 1, "il", TokenKind::Nil),
    'o' => check_keyword(ident, 1, "r", TokenKind::Or),
    'p' => check_keyword(ident, 1, "rint", TokenKind::Print),
    'r' => check_keyword(ident, 1, "eturn", TokenKind::Return),
    's' => check_keyword(ident, 1, "uper", TokenKind::Super),
    't' => match chars.next()? {
      'h' => check_keyword(ident, 2, "is", TokenKind::This),
      'r' => check_keyword(ident, 2, "ue", TokenKind::True),
      _ => None,
    },
    'v' => check_keyword(ident, 1, "ar", TokenKind::Var),
    'w' => check_keyword(ident, 1, "hile", TokenKind::While),
    _ => None,
  }
}

/// Check if the remainder of the identifier matches the rest
/// of the keyword
fn check_keyword(ident: &str, start: usize, rest: &str, kind: TokenKind) -> Option<TokenKind> {
  // the matched prefix is ascii so `start` is a char boundary
  if ident.get(start..) == Some(rest) {
    Some(kind)
  } else {
    None
  }
}
