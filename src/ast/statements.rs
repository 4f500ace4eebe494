use crate::Span;

use super::{expressions::Expr, types::Type};

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Expression(Expr),
    Block(BlockStmt),
    If(IfStmt),
    While(WhileStmt),
    Return(ReturnStmt),
    VarDecl(VarDeclStmt),
}

impl Stmt {
    pub fn get_span(&self) -> &Span {
        match self {
            Stmt::Expression(expr) => &expr.span,
            Stmt::Block(block) => &block.span,
            Stmt::If(if_stmt) => &if_stmt.span,
            Stmt::While(while_stmt) => &while_stmt.span,
            Stmt::Return(return_stmt) => &return_stmt.span,
            Stmt::VarDecl(var_decl) => &var_decl.span,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockStmt {
    pub body: Vec<Stmt>,
    pub span: Span,
}

impl BlockStmt {
    pub fn new(body: Vec<Stmt>) -> Self {
        BlockStmt {
            body,
            span: Span::null(),
        }
    }
}

/// Both branches are always present; the parser synthesizes an empty else block.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_body: BlockStmt,
    pub else_body: BlockStmt,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: BlockStmt,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub value: Option<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclStmt {
    pub identifier: String,
    pub declared_type: Type,
    pub value: Expr,
    pub span: Span,
}

// Span-less constructors for synthesized nodes and tests.

impl Stmt {
    pub fn expression(expr: Expr) -> Self {
        Stmt::Expression(expr)
    }

    pub fn block(body: Vec<Stmt>) -> Self {
        Stmt::Block(BlockStmt::new(body))
    }

    pub fn if_else(condition: Expr, then_body: Vec<Stmt>, else_body: Vec<Stmt>) -> Self {
        Stmt::If(IfStmt {
            condition,
            then_body: BlockStmt::new(then_body),
            else_body: BlockStmt::new(else_body),
            span: Span::null(),
        })
    }

    pub fn while_loop(condition: Expr, body: Vec<Stmt>) -> Self {
        Stmt::While(WhileStmt {
            condition,
            body: BlockStmt::new(body),
            span: Span::null(),
        })
    }

    pub fn return_value(value: Expr) -> Self {
        Stmt::Return(ReturnStmt {
            value: Some(value),
            span: Span::null(),
        })
    }

    pub fn return_unit() -> Self {
        Stmt::Return(ReturnStmt {
            value: None,
            span: Span::null(),
        })
    }

    pub fn var_decl(identifier: &str, declared_type: Type, value: Expr) -> Self {
        Stmt::VarDecl(VarDeclStmt {
            identifier: identifier.to_string(),
            declared_type,
            value,
            span: Span::null(),
        })
    }
}
