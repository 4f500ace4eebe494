//! Expression nodes.
//!
//! Every expression owns two annotation slots, its inferred type and its
//! value category. Both start empty and are filled exactly once by the
//! type checker; annotating a node twice is a compiler bug.

use crate::{Span, INTERNAL_ERROR};

use super::{
    operators::{AssignmentOperator, BinaryOperator, UnaryOperator},
    types::Type,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueCategory {
    LValue,
    RValue,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),
    Char(char),
    Bool(bool),
    String(String),
    Unit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    Literal(Literal),
    Array {
        element_type: Type,
        elements: Vec<Expr>,
    },
    VarRef(String),
    Unary {
        operator: UnaryOperator,
        operand: Box<Expr>,
    },
    Binary {
        operator: BinaryOperator,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Assignment {
        operator: AssignmentOperator,
        target: Box<Expr>,
        value: Box<Expr>,
    },
    /// `new <value>`, producing a pointer to the value's type.
    HeapAlloc(Box<Expr>),
    Call {
        callee: Box<Expr>,
        arguments: Vec<Expr>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
    inferred_type: Option<Type>,
    value_category: Option<ValueCategory>,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr {
            kind,
            span,
            inferred_type: None,
            value_category: None,
        }
    }

    pub fn inferred_type(&self) -> Option<&Type> {
        self.inferred_type.as_ref()
    }

    pub fn value_category(&self) -> Option<ValueCategory> {
        self.value_category
    }

    pub fn annotate(&mut self, inferred_type: Type, value_category: ValueCategory) {
        if self.inferred_type.is_some() {
            INTERNAL_ERROR!(
                "expression at {} was type-checked twice",
                self.span.start
            );
        }
        self.inferred_type = Some(inferred_type);
        self.value_category = Some(value_category);
    }

    /// Only variable references and pointer dereferences denote storage.
    pub fn is_assignable(&self) -> bool {
        matches!(
            self.kind,
            ExprKind::VarRef(_)
                | ExprKind::Unary {
                    operator: UnaryOperator::Dereference,
                    ..
                }
        )
    }

    // Span-less constructors for synthesized nodes and tests.

    pub fn literal(literal: Literal) -> Self {
        Expr::new(ExprKind::Literal(literal), Span::null())
    }

    pub fn int(value: i64) -> Self {
        Expr::literal(Literal::Int(value))
    }

    pub fn float(value: f64) -> Self {
        Expr::literal(Literal::Float(value))
    }

    pub fn bool(value: bool) -> Self {
        Expr::literal(Literal::Bool(value))
    }

    pub fn char(value: char) -> Self {
        Expr::literal(Literal::Char(value))
    }

    pub fn string(value: &str) -> Self {
        Expr::literal(Literal::String(value.to_string()))
    }

    pub fn unit() -> Self {
        Expr::literal(Literal::Unit)
    }

    pub fn array(element_type: Type, elements: Vec<Expr>) -> Self {
        Expr::new(
            ExprKind::Array {
                element_type,
                elements,
            },
            Span::null(),
        )
    }

    pub fn var(name: &str) -> Self {
        Expr::new(ExprKind::VarRef(name.to_string()), Span::null())
    }

    pub fn unary(operator: UnaryOperator, operand: Expr) -> Self {
        Expr::new(
            ExprKind::Unary {
                operator,
                operand: Box::new(operand),
            },
            Span::null(),
        )
    }

    pub fn binary(operator: BinaryOperator, left: Expr, right: Expr) -> Self {
        Expr::new(
            ExprKind::Binary {
                operator,
                left: Box::new(left),
                right: Box::new(right),
            },
            Span::null(),
        )
    }

    pub fn assignment(operator: AssignmentOperator, target: Expr, value: Expr) -> Self {
        Expr::new(
            ExprKind::Assignment {
                operator,
                target: Box::new(target),
                value: Box::new(value),
            },
            Span::null(),
        )
    }

    pub fn heap_alloc(value: Expr) -> Self {
        Expr::new(ExprKind::HeapAlloc(Box::new(value)), Span::null())
    }

    pub fn call(callee: Expr, arguments: Vec<Expr>) -> Self {
        Expr::new(
            ExprKind::Call {
                callee: Box::new(callee),
                arguments,
            },
            Span::null(),
        )
    }
}
