//! Lexical analysis.
//!
//! Converts source text into a flat token stream using anchored regex
//! patterns tried in order. Comments are kept as tokens; the parser drops
//! them. Unrecognised characters become `Illegal` tokens.

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
