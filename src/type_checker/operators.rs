//! Built-in operator table.
//!
//! Every built-in operator is modeled as an overloaded function living in the
//! global namespace under a synthetic name, `operator<Name><T1,T2>` for binary
//! and `operator<Name><T>` for unary operators. Dereference is not listed here;
//! the type checker handles it directly.

use lazy_static::lazy_static;

use crate::ast::{
    operators::{BinaryOperator, UnaryOperator},
    types::Type,
};

/// What an operator evaluates to, relative to its operand type.
#[derive(Debug, Clone, Copy)]
enum Yields {
    Operand,
    Bool,
}

const NUMERIC: &[&str] = &["i32", "u32", "f32"];
const INTEGER: &[&str] = &["i32", "u32"];
const ADDABLE: &[&str] = &["i32", "u32", "f32", "string"];
const EQUATABLE: &[&str] = &["i32", "u32", "f32", "bool", "char", "string"];
const ORDERED: &[&str] = &["i32", "u32", "f32", "char", "string"];
const LOGICAL: &[&str] = &["bool"];
const NEGATABLE: &[&str] = &["i32", "f32"];
const INVERTIBLE: &[&str] = &["bool", "i32", "u32"];

const BINARY_OPERATORS: &[(BinaryOperator, &[&str], Yields)] = &[
    (BinaryOperator::Addition, ADDABLE, Yields::Operand),
    (BinaryOperator::Subtraction, NUMERIC, Yields::Operand),
    (BinaryOperator::Multiplication, NUMERIC, Yields::Operand),
    (BinaryOperator::Division, NUMERIC, Yields::Operand),
    (BinaryOperator::Modulo, INTEGER, Yields::Operand),
    (BinaryOperator::Equality, EQUATABLE, Yields::Bool),
    (BinaryOperator::Inequality, EQUATABLE, Yields::Bool),
    (BinaryOperator::Less, ORDERED, Yields::Bool),
    (BinaryOperator::Greater, ORDERED, Yields::Bool),
    (BinaryOperator::LessOrEqual, ORDERED, Yields::Bool),
    (BinaryOperator::GreaterOrEqual, ORDERED, Yields::Bool),
    (BinaryOperator::LogicalAnd, LOGICAL, Yields::Bool),
    (BinaryOperator::LogicalOr, LOGICAL, Yields::Bool),
    (BinaryOperator::BitwiseAnd, INTEGER, Yields::Operand),
    (BinaryOperator::BitwiseOr, INTEGER, Yields::Operand),
    (BinaryOperator::BitwiseXor, INTEGER, Yields::Operand),
    (BinaryOperator::ShiftLeft, INTEGER, Yields::Operand),
    (BinaryOperator::ShiftRight, INTEGER, Yields::Operand),
];

const UNARY_OPERATORS: &[(UnaryOperator, &[&str])] = &[
    (UnaryOperator::Plus, NUMERIC),
    (UnaryOperator::Minus, NEGATABLE),
    (UnaryOperator::Not, INVERTIBLE),
];

lazy_static! {
    /// Every `(synthetic name, function type)` pair, built once per process.
    pub static ref OPERATOR_TABLE: Vec<(String, Type)> = build_operator_table();
}

fn build_operator_table() -> Vec<(String, Type)> {
    let mut table = vec![];

    for (operator, operand_types, yields) in BINARY_OPERATORS {
        for name in operand_types.iter() {
            let operand = Type::typename(name);
            let result = match yields {
                Yields::Operand => operand.clone(),
                Yields::Bool => Type::bool(),
            };
            table.push((
                binary_operator_key(*operator, &operand, &operand),
                Type::function(vec![operand.clone(), operand], result),
            ));
        }
    }

    for (operator, operand_types) in UNARY_OPERATORS {
        for name in operand_types.iter() {
            let operand = Type::typename(name);
            table.push((
                unary_operator_key(*operator, &operand),
                Type::function(vec![operand.clone()], operand),
            ));
        }
    }

    table
}

pub fn binary_operator_key(operator: BinaryOperator, left: &Type, right: &Type) -> String {
    format!("operator<{}><{},{}>", operator.name(), left, right)
}

pub fn unary_operator_key(operator: UnaryOperator, operand: &Type) -> String {
    format!("operator<{}><{}>", operator.name(), operand)
}
