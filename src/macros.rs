//! Utility macros for the compiler.
//!
//! This module defines helper macros used throughout the compiler:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for fixed-text tokens
//! - `INTERNAL_ERROR!` - Aborts on a broken compiler invariant
//!
//! These macros reduce boilerplate in the lexer and the semantic passes.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The token's text
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::NumericLiteral, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $span:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            span: $span,
        }
    };
}

/// Creates a default lexer handler for tokens whose text never varies.
///
/// Generates a handler function that pushes a token with the given kind
/// and advances the lexer past the token's text.
///
/// # Arguments
///
/// * `$kind` - The TokenKind to create
/// * `$lexeme` - The literal token text (used for length calculation)
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^;").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Separator, ";"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $lexeme:literal) => {
        |lexer: &mut Lexer, _regex: &Regex| {
            let start = lexer.position();
            lexer.advance_n($lexeme.len());
            lexer.push($crate::MK_TOKEN!(
                $kind,
                String::from($lexeme),
                Span {
                    start,
                    end: lexer.position(),
                }
            ));
        }
    };
}

/// Aborts compilation because a compiler invariant was violated.
///
/// Only for conditions valid input can never produce (re-checking a typed node,
/// popping the global scope). User-facing faults are diagnostics, never this.
#[macro_export]
macro_rules! INTERNAL_ERROR {
    ($($arg:tt)*) => {
        panic!("internal compiler error: {}", format!($($arg)*))
    };
}
