//! Error types and error handling for the compiler.
//!
//! This module defines the diagnostics produced throughout the front-end.
//! It includes:
//!
//! - Error structures with source position information
//! - Syntax variants raised by the lexer and parser
//! - Semantic variants accumulated by the type-checking passes
//! - Error naming, messages and suggestions

pub mod errors;
