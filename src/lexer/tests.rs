//! Unit tests for the lexer module.
//!
//! Covers keywords and identifiers, numeric, string and char literals,
//! operators and separators, comments, positions and illegal input.

use super::{
    lexer::tokenize,
    tokens::{Token, TokenKind},
};
use crate::Position;

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|token| token.kind).collect()
}

fn lexemes(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|token| token.lexeme.as_str()).collect()
}

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("func var if else while return new", "test.lang");

    assert_eq!(tokens.len(), 8);
    assert!(tokens[..7]
        .iter()
        .all(|token| token.kind == TokenKind::Keyword));
    assert_eq!(tokens[7].kind, TokenKind::EndOfFile);
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo baz_123 _underscore functional", "test.lang");

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::EndOfFile,
        ]
    );
    assert_eq!(lexemes(&tokens)[3], "functional");
}

#[test]
fn test_tokenize_bool_literals() {
    let tokens = tokenize("true false", "test.lang");

    assert_eq!(tokens[0].kind, TokenKind::BoolLiteral);
    assert_eq!(tokens[1].kind, TokenKind::BoolLiteral);
    assert_eq!(tokens[1].lexeme, "false");
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 3.14 0", "test.lang");

    assert_eq!(
        kinds(&tokens)[..3],
        [TokenKind::NumericLiteral; 3]
    );
    assert_eq!(lexemes(&tokens)[..3], ["42", "3.14", "0"]);
}

#[test]
fn test_tokenize_strings_with_escapes() {
    let tokens = tokenize(r#""hello\n\t\"world\"" "\x41\\""#, "test.lang");

    assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[0].lexeme, "hello\n\t\"world\"");
    assert_eq!(tokens[1].lexeme, "A\\");
    assert_eq!(tokens[2].kind, TokenKind::EndOfFile);
}

#[test]
fn test_tokenize_chars() {
    let tokens = tokenize(r"'a' '\n' '\'' '\x42'", "test.lang");

    assert_eq!(
        kinds(&tokens)[..4],
        [TokenKind::CharLiteral; 4]
    );
    assert_eq!(lexemes(&tokens)[..4], ["a", "\n", "'", "B"]);
}

#[test]
fn test_tokenize_operators_longest_first() {
    let tokens = tokenize("<<= >> -> == = ! != && & += +", "test.lang");

    assert!(tokens[..11]
        .iter()
        .all(|token| token.kind == TokenKind::Operator));
    assert_eq!(
        lexemes(&tokens)[..11],
        ["<<=", ">>", "->", "==", "=", "!", "!=", "&&", "&", "+=", "+"]
    );
}

#[test]
fn test_tokenize_without_whitespace() {
    let tokens = tokenize("x+=y<<2;", "test.lang");

    assert_eq!(lexemes(&tokens), vec!["x", "+=", "y", "<<", "2", ";", ""]);
}

#[test]
fn test_tokenize_separators() {
    let tokens = tokenize("( ) { } [ ] , ; :", "test.lang");

    assert!(tokens[..9]
        .iter()
        .all(|token| token.kind == TokenKind::Separator));
    assert!(tokens[7].is_symbol(";"));
}

#[test]
fn test_tokenize_comments() {
    let tokens = tokenize("x // line\n/* block\nspans */ y", "test.lang");

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Identifier,
            TokenKind::Comment,
            TokenKind::Comment,
            TokenKind::Identifier,
            TokenKind::EndOfFile,
        ]
    );
    assert_eq!(tokens[1].lexeme, "// line");
    assert_eq!(tokens[3].location(), Position::new(3, 10, 28));
}

#[test]
fn test_token_positions() {
    let tokens = tokenize("func main() {\n    return;\n}", "test.lang");

    assert_eq!(tokens[0].location(), Position::new(1, 1, 0));
    assert_eq!(tokens[1].location(), Position::new(1, 6, 5));
    assert_eq!(tokens[1].span.end, Position::new(1, 10, 9));
    // `return` on the second line, after four spaces of indentation.
    assert_eq!(tokens[5].location(), Position::new(2, 5, 18));
    assert_eq!(tokens[7].location(), Position::new(3, 1, 26));
}

#[test]
fn test_illegal_characters_become_tokens() {
    let tokens = tokenize("x @ y", "test.lang");

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Identifier,
            TokenKind::Illegal,
            TokenKind::Identifier,
            TokenKind::EndOfFile,
        ]
    );
    assert_eq!(tokens[1].lexeme, "@");
}

#[test]
fn test_empty_source() {
    let tokens = tokenize("", "test.lang");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EndOfFile);
}
