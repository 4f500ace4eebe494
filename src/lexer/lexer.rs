use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::{Position, Span, INTERNAL_ERROR, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, OPERATORS, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &Regex);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

impl RegexPattern {
    fn new(pattern: &str, handler: RegexHandler) -> Self {
        match Regex::new(pattern) {
            Ok(regex) => RegexPattern { regex, handler },
            Err(error) => INTERNAL_ERROR!("invalid lexer pattern `{}`: {}", pattern, error),
        }
    }
}

lazy_static! {
    /// Tried in order; the first pattern matching at the cursor wins.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern::new(r"^\s+", skip_handler),
        RegexPattern::new(r"^//[^\n]*", comment_handler),
        RegexPattern::new(r"^/\*(?s:.*?)\*/", comment_handler),
        RegexPattern::new(r"^[a-zA-Z_][a-zA-Z0-9_]*", symbol_handler),
        RegexPattern::new(r"^[0-9]+(\.[0-9]+)?", number_handler),
        RegexPattern::new(r#"^"(?:[^"\\]|\\.)*""#, string_handler),
        RegexPattern::new(r"^'(?:[^'\\]|\\x[0-9a-fA-F]{2}|\\.)'", char_handler),
        RegexPattern::new(&operator_pattern(), operator_handler),
        RegexPattern::new(r"^\(", MK_DEFAULT_HANDLER!(TokenKind::Separator, "(")),
        RegexPattern::new(r"^\)", MK_DEFAULT_HANDLER!(TokenKind::Separator, ")")),
        RegexPattern::new(r"^\{", MK_DEFAULT_HANDLER!(TokenKind::Separator, "{")),
        RegexPattern::new(r"^\}", MK_DEFAULT_HANDLER!(TokenKind::Separator, "}")),
        RegexPattern::new(r"^\[", MK_DEFAULT_HANDLER!(TokenKind::Separator, "[")),
        RegexPattern::new(r"^\]", MK_DEFAULT_HANDLER!(TokenKind::Separator, "]")),
        RegexPattern::new(r"^,", MK_DEFAULT_HANDLER!(TokenKind::Separator, ",")),
        RegexPattern::new(r"^;", MK_DEFAULT_HANDLER!(TokenKind::Separator, ";")),
        RegexPattern::new(r"^:", MK_DEFAULT_HANDLER!(TokenKind::Separator, ":")),
    ];
}

fn operator_pattern() -> String {
    let alternatives = OPERATORS
        .iter()
        .map(|operator| regex::escape(operator))
        .collect::<Vec<String>>()
        .join("|");

    format!("^(?:{})", alternatives)
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    position: Position,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            tokens: vec![],
            source: source.to_string(),
            position: Position::new(1, 1, 0),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Moves the cursor `n` bytes forward, keeping line and column in step.
    pub fn advance_n(&mut self, n: usize) {
        let start = self.position.byte_index as usize;
        let end = (start + n).min(self.source.len());

        for ch in self.source[start..end].chars() {
            if ch == '\n' {
                self.position.line += 1;
                self.position.column = 1;
            } else {
                self.position.column += 1;
            }
        }

        self.position.byte_index = end as u32;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.position.byte_index as usize..]
    }

    pub fn at_eof(&self) -> bool {
        self.position.byte_index as usize >= self.source.len()
    }

    /// Pushes a token covering the next `length` bytes and steps past them.
    fn emit(&mut self, kind: TokenKind, lexeme: String, length: usize) {
        let start = self.position();
        self.advance_n(length);
        let end = self.position();

        self.push(MK_TOKEN!(kind, lexeme, Span { start, end }));
    }
}

fn matched_text(lexer: &Lexer, regex: &Regex) -> String {
    match regex.find(lexer.remainder()) {
        Some(matched) => matched.as_str().to_string(),
        None => INTERNAL_ERROR!("lexer handler invoked without a match at {}", lexer.position()),
    }
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = matched_text(lexer, regex);
    lexer.advance_n(matched.len());
}

fn comment_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = matched_text(lexer, regex);
    let length = matched.len();
    lexer.emit(TokenKind::Comment, matched, length);
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = matched_text(lexer, regex);
    let length = matched.len();
    lexer.emit(TokenKind::NumericLiteral, matched, length);
}

fn operator_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = matched_text(lexer, regex);
    let length = matched.len();
    lexer.emit(TokenKind::Operator, matched, length);
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = matched_text(lexer, regex);
    let length = matched.len();
    let kind = RESERVED_LOOKUP
        .get(matched.as_str())
        .copied()
        .unwrap_or(TokenKind::Identifier);

    lexer.emit(kind, matched, length);
}

fn string_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = matched_text(lexer, regex);
    let contents = unescape(&matched[1..matched.len() - 1]);
    lexer.emit(TokenKind::StringLiteral, contents, matched.len());
}

fn char_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = matched_text(lexer, regex);
    let contents = unescape(&matched[1..matched.len() - 1]);
    lexer.emit(TokenKind::CharLiteral, contents, matched.len());
}

fn unescape(text: &str) -> String {
    let mut result = String::new();
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }

        match chars.peek().copied() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('r') => result.push('\r'),
            Some('\\') => result.push('\\'),
            Some('"') => result.push('"'),
            Some('\'') => result.push('\''),
            Some('0') => result.push('\0'),
            Some('x') => {
                chars.next();
                let mut hex = String::new();
                while hex.len() < 2 {
                    match chars.peek() {
                        Some(digit) if digit.is_ascii_hexdigit() => {
                            hex.push(*digit);
                            chars.next();
                        }
                        _ => break,
                    }
                }

                match u8::from_str_radix(&hex, 16) {
                    Ok(byte) => result.push(byte as char),
                    Err(_) => {
                        result.push_str("\\x");
                        result.push_str(&hex);
                    }
                }
                continue;
            }
            // Unknown escapes and a trailing backslash are kept verbatim.
            _ => {
                result.push(ch);
                continue;
            }
        }

        chars.next();
    }

    result
}

/// Splits `source` into tokens. Never fails: characters no pattern accepts
/// become `Illegal` tokens for the parser to report, and the stream always
/// ends with `EndOfFile`.
pub fn tokenize(source: &str, file: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);

    while !lexer.at_eof() {
        let pattern = PATTERNS
            .iter()
            .find(|pattern| pattern.regex.is_match(lexer.remainder()));

        match pattern {
            Some(pattern) => (pattern.handler)(&mut lexer, &pattern.regex),
            None => {
                let illegal = lexer.at().unwrap_or('\0');
                lexer.emit(TokenKind::Illegal, illegal.to_string(), illegal.len_utf8());
            }
        }
    }

    let end = lexer.position();
    lexer.push(MK_TOKEN!(
        TokenKind::EndOfFile,
        String::new(),
        Span { start: end, end }
    ));

    debug!("tokenized `{}` into {} tokens", file, lexer.tokens.len());
    lexer.tokens
}
