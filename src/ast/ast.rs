use crate::Span;

use super::{statements::BlockStmt, types::Type};

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub param_type: Type,
    pub span: Span,
}

impl Parameter {
    pub fn new(name: &str, param_type: Type) -> Self {
        Parameter {
            name: name.to_string(),
            param_type,
            span: Span::null(),
        }
    }
}

/// Function Declaration
///
/// Only allowed at the top level of a module.
#[derive(Debug, Clone, PartialEq)]
pub struct FuncDecl {
    pub identifier: String,
    pub parameters: Vec<Parameter>,
    pub return_type: Type,
    pub body: BlockStmt,
    pub span: Span,
}

impl FuncDecl {
    pub fn new(
        identifier: &str,
        parameters: Vec<Parameter>,
        return_type: Type,
        body: BlockStmt,
    ) -> Self {
        FuncDecl {
            identifier: identifier.to_string(),
            parameters,
            return_type,
            body,
            span: Span::null(),
        }
    }

    /// The declared signature, built from cloned parameter and return types.
    pub fn function_type(&self) -> Type {
        Type::function(
            self.parameters
                .iter()
                .map(|parameter| parameter.param_type.clone())
                .collect(),
            self.return_type.clone(),
        )
    }
}

/// Module
///
/// Root of the AST: one compilation unit's function declarations in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    pub name: String,
    pub declarations: Vec<FuncDecl>,
}

impl Module {
    pub fn new(name: &str, declarations: Vec<FuncDecl>) -> Self {
        Module {
            name: name.to_string(),
            declarations,
        }
    }
}
