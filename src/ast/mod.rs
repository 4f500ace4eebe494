/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Module and function declarations (the root of the tree)
/// - expressions: Expression nodes and their type annotations
/// - operators: Unary, binary and assignment operator kinds
/// - statements: Statement nodes
/// - types: The type model shared by declarations and inference
pub mod ast;
pub mod expressions;
pub mod operators;
pub mod statements;
pub mod types;
