use std::collections::HashMap;

use crate::{
    ast::{expressions::Expr, statements::Stmt},
    errors::errors::Error,
    lexer::tokens::{Token, TokenKind},
};

use super::{expr::*, parser::Parser, stmt::*};

/// Operator precedence, lowest first.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Assignment,
    LogicalOr,
    LogicalAnd,
    BitwiseOr,
    BitwiseXor,
    BitwiseAnd,
    Equality,
    Relational,
    Shift,
    Additive,
    Multiplicative,
    Unary,
    Call,
    Primary,
}

/// Handlers are registered either for a whole token kind (every identifier,
/// every numeric literal) or for one exact keyword/operator/separator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LookupKey {
    Kind(TokenKind),
    Symbol(String),
}

impl LookupKey {
    pub fn of(token: &Token) -> Self {
        match token.kind {
            TokenKind::Keyword | TokenKind::Operator | TokenKind::Separator => {
                LookupKey::Symbol(token.lexeme.clone())
            }
            kind => LookupKey::Kind(kind),
        }
    }

    pub fn symbol(symbol: &str) -> Self {
        LookupKey::Symbol(symbol.to_string())
    }
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;
pub type LEDHandler = fn(&mut Parser, Expr, BindingPower) -> Result<Expr, Error>;

const ASSIGNMENT_OPERATORS: &[&str] = &[
    "=", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "<<=", ">>=",
];

const BINARY_OPERATORS: &[(&str, BindingPower)] = &[
    ("||", BindingPower::LogicalOr),
    ("&&", BindingPower::LogicalAnd),
    ("|", BindingPower::BitwiseOr),
    ("^", BindingPower::BitwiseXor),
    ("&", BindingPower::BitwiseAnd),
    ("==", BindingPower::Equality),
    ("!=", BindingPower::Equality),
    ("<", BindingPower::Relational),
    (">", BindingPower::Relational),
    ("<=", BindingPower::Relational),
    (">=", BindingPower::Relational),
    ("<<", BindingPower::Shift),
    (">>", BindingPower::Shift),
    ("+", BindingPower::Additive),
    ("-", BindingPower::Additive),
    ("*", BindingPower::Multiplicative),
    ("/", BindingPower::Multiplicative),
    ("%", BindingPower::Multiplicative),
];

pub fn create_token_lookups(parser: &mut Parser) {
    for operator in ASSIGNMENT_OPERATORS {
        parser.led(
            LookupKey::symbol(operator),
            BindingPower::Assignment,
            parse_assignment_expr,
        );
    }

    for (operator, binding_power) in BINARY_OPERATORS {
        parser.led(LookupKey::symbol(operator), *binding_power, parse_binary_expr);
    }

    parser.led(LookupKey::symbol("("), BindingPower::Call, parse_call_expr);

    // Literals and symbols
    parser.nud(LookupKey::Kind(TokenKind::NumericLiteral), parse_primary_expr);
    parser.nud(LookupKey::Kind(TokenKind::StringLiteral), parse_primary_expr);
    parser.nud(LookupKey::Kind(TokenKind::CharLiteral), parse_primary_expr);
    parser.nud(LookupKey::Kind(TokenKind::BoolLiteral), parse_primary_expr);
    parser.nud(LookupKey::Kind(TokenKind::Identifier), parse_primary_expr);

    // Prefix
    parser.nud(LookupKey::symbol("+"), parse_prefix_expr);
    parser.nud(LookupKey::symbol("-"), parse_prefix_expr);
    parser.nud(LookupKey::symbol("!"), parse_prefix_expr);
    parser.nud(LookupKey::symbol("*"), parse_prefix_expr);
    parser.nud(LookupKey::symbol("("), parse_grouping_expr);
    parser.nud(LookupKey::symbol("["), parse_array_expr);
    parser.nud(LookupKey::symbol("new"), parse_heap_alloc_expr);

    // Statements
    parser.stmt(LookupKey::symbol("var"), parse_var_decl_stmt);
    parser.stmt(LookupKey::symbol("if"), parse_if_stmt);
    parser.stmt(LookupKey::symbol("while"), parse_while_stmt);
    parser.stmt(LookupKey::symbol("return"), parse_return_stmt);
    parser.stmt(LookupKey::symbol("{"), parse_block_stmt);
}

pub type StmtLookup = HashMap<LookupKey, StmtHandler>;
pub type NUDLookup = HashMap<LookupKey, NUDHandler>;
pub type LEDLookup = HashMap<LookupKey, LEDHandler>;
pub type BPLookup = HashMap<LookupKey, BindingPower>;
