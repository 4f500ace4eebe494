use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::{Position, Span};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("func", TokenKind::Keyword);
        map.insert("var", TokenKind::Keyword);
        map.insert("if", TokenKind::Keyword);
        map.insert("else", TokenKind::Keyword);
        map.insert("while", TokenKind::Keyword);
        map.insert("return", TokenKind::Keyword);
        map.insert("new", TokenKind::Keyword);
        map.insert("true", TokenKind::BoolLiteral);
        map.insert("false", TokenKind::BoolLiteral);
        map
    };
}

/// Operator spellings, longest first so that the lexer never splits `<<=`
/// into `<<` and `=`.
pub const OPERATORS: &[&str] = &[
    "<<=", ">>=", "->", "==", "!=", "<=", ">=", "&&", "||", "<<", ">>", "+=", "-=", "*=",
    "/=", "%=", "&=", "|=", "^=", "+", "-", "*", "/", "%", "=", "<", ">", "!", "&", "|",
    "^",
];

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,
    StringLiteral,
    NumericLiteral,
    CharLiteral,
    BoolLiteral,
    Keyword,
    Operator,
    Separator,
    Comment,
    Illegal,
    EndOfFile,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Source text of the token. For string and char literals this is the
    /// unescaped contents without quotes.
    pub lexeme: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} `{}`", self.kind, self.lexeme)
    }
}

impl Token {
    pub fn location(&self) -> Position {
        self.span.start
    }

    pub fn is(&self, kind: TokenKind, lexeme: &str) -> bool {
        self.kind == kind && self.lexeme == lexeme
    }

    /// Keyword, operator or separator with exactly this spelling.
    pub fn is_symbol(&self, lexeme: &str) -> bool {
        matches!(
            self.kind,
            TokenKind::Keyword | TokenKind::Operator | TokenKind::Separator
        ) && self.lexeme == lexeme
    }
}
