//! Operator kinds shared by the parser and the operator table.
//!
//! The `name()` of an operator is what the type checker embeds in the
//! synthetic `operator<Name><...>` function keys.

use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Plus,
    Minus,
    Not,
    Dereference,
}

impl UnaryOperator {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(UnaryOperator::Plus),
            "-" => Some(UnaryOperator::Minus),
            "!" => Some(UnaryOperator::Not),
            "*" => Some(UnaryOperator::Dereference),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            UnaryOperator::Plus => "Plus",
            UnaryOperator::Minus => "Minus",
            UnaryOperator::Not => "Not",
            UnaryOperator::Dereference => "Dereference",
        }
    }
}

impl Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Modulo,
    Equality,
    Inequality,
    Less,
    Greater,
    LessOrEqual,
    GreaterOrEqual,
    LogicalAnd,
    LogicalOr,
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    ShiftLeft,
    ShiftRight,
}

impl BinaryOperator {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(BinaryOperator::Addition),
            "-" => Some(BinaryOperator::Subtraction),
            "*" => Some(BinaryOperator::Multiplication),
            "/" => Some(BinaryOperator::Division),
            "%" => Some(BinaryOperator::Modulo),
            "==" => Some(BinaryOperator::Equality),
            "!=" => Some(BinaryOperator::Inequality),
            "<" => Some(BinaryOperator::Less),
            ">" => Some(BinaryOperator::Greater),
            "<=" => Some(BinaryOperator::LessOrEqual),
            ">=" => Some(BinaryOperator::GreaterOrEqual),
            "&&" => Some(BinaryOperator::LogicalAnd),
            "||" => Some(BinaryOperator::LogicalOr),
            "&" => Some(BinaryOperator::BitwiseAnd),
            "|" => Some(BinaryOperator::BitwiseOr),
            "^" => Some(BinaryOperator::BitwiseXor),
            "<<" => Some(BinaryOperator::ShiftLeft),
            ">>" => Some(BinaryOperator::ShiftRight),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BinaryOperator::Addition => "Addition",
            BinaryOperator::Subtraction => "Subtraction",
            BinaryOperator::Multiplication => "Multiplication",
            BinaryOperator::Division => "Division",
            BinaryOperator::Modulo => "Modulo",
            BinaryOperator::Equality => "Equality",
            BinaryOperator::Inequality => "Inequality",
            BinaryOperator::Less => "Less",
            BinaryOperator::Greater => "Greater",
            BinaryOperator::LessOrEqual => "LessOrEqual",
            BinaryOperator::GreaterOrEqual => "GreaterOrEqual",
            BinaryOperator::LogicalAnd => "LogicalAnd",
            BinaryOperator::LogicalOr => "LogicalOr",
            BinaryOperator::BitwiseAnd => "BitwiseAnd",
            BinaryOperator::BitwiseOr => "BitwiseOr",
            BinaryOperator::BitwiseXor => "BitwiseXor",
            BinaryOperator::ShiftLeft => "ShiftLeft",
            BinaryOperator::ShiftRight => "ShiftRight",
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// `=` or a compound assignment, which decomposes into its binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssignmentOperator {
    Assign,
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Modulo,
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    ShiftLeft,
    ShiftRight,
}

impl AssignmentOperator {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "=" => Some(AssignmentOperator::Assign),
            "+=" => Some(AssignmentOperator::Addition),
            "-=" => Some(AssignmentOperator::Subtraction),
            "*=" => Some(AssignmentOperator::Multiplication),
            "/=" => Some(AssignmentOperator::Division),
            "%=" => Some(AssignmentOperator::Modulo),
            "&=" => Some(AssignmentOperator::BitwiseAnd),
            "|=" => Some(AssignmentOperator::BitwiseOr),
            "^=" => Some(AssignmentOperator::BitwiseXor),
            "<<=" => Some(AssignmentOperator::ShiftLeft),
            ">>=" => Some(AssignmentOperator::ShiftRight),
            _ => None,
        }
    }

    pub fn binary_operator(&self) -> Option<BinaryOperator> {
        match self {
            AssignmentOperator::Assign => None,
            AssignmentOperator::Addition => Some(BinaryOperator::Addition),
            AssignmentOperator::Subtraction => Some(BinaryOperator::Subtraction),
            AssignmentOperator::Multiplication => Some(BinaryOperator::Multiplication),
            AssignmentOperator::Division => Some(BinaryOperator::Division),
            AssignmentOperator::Modulo => Some(BinaryOperator::Modulo),
            AssignmentOperator::BitwiseAnd => Some(BinaryOperator::BitwiseAnd),
            AssignmentOperator::BitwiseOr => Some(BinaryOperator::BitwiseOr),
            AssignmentOperator::BitwiseXor => Some(BinaryOperator::BitwiseXor),
            AssignmentOperator::ShiftLeft => Some(BinaryOperator::ShiftLeft),
            AssignmentOperator::ShiftRight => Some(BinaryOperator::ShiftRight),
        }
    }
}

impl Display for AssignmentOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.binary_operator() {
            Some(operator) => write!(f, "{}", operator.name()),
            None => write!(f, "Assign"),
        }
    }
}
