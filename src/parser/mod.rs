//! Parser module for building the Abstract Syntax Tree (AST).
//!
//! Transforms a token stream into a [`Module`](crate::ast::ast::Module) of
//! function declarations. Expressions use a Pratt parser: NUD (null
//! denotation) handlers for prefix forms, LED (left denotation) handlers for
//! infix forms, and binding powers for precedence.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;

#[cfg(test)]
mod tests;
