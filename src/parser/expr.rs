use crate::{
    ast::{
        expressions::{Expr, ExprKind, Literal},
        operators::{AssignmentOperator, BinaryOperator, UnaryOperator},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{
    lookups::{BindingPower, LookupKey},
    parser::Parser,
    types::parse_type,
};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let key = LookupKey::of(parser.current_token());
    let Some(nud_fn) = parser.get_nud_lookup().get(&key).copied() else {
        return Err(parser.unexpected_token());
    };

    let mut left = nud_fn(parser)?;

    // While the next operator binds tighter than `bp`, keep extending the left side
    loop {
        let key = LookupKey::of(parser.current_token());
        let Some(next_bp) = parser.get_bp_lookup().get(&key).copied() else {
            break;
        };
        if next_bp <= bp {
            break;
        }

        let Some(led_fn) = parser.get_led_lookup().get(&key).copied() else {
            return Err(parser.unexpected_token());
        };
        left = led_fn(parser, left, next_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    let literal = match token.kind {
        TokenKind::NumericLiteral if token.lexeme.contains('.') => {
            Literal::Float(token.lexeme.parse().map_err(|_| {
                Error::new(
                    ErrorImpl::NumberParseError {
                        token: token.lexeme.clone(),
                    },
                    token.location(),
                )
            })?)
        }
        TokenKind::NumericLiteral => Literal::Int(token.lexeme.parse().map_err(|_| {
            Error::new(
                ErrorImpl::NumberParseError {
                    token: token.lexeme.clone(),
                },
                token.location(),
            )
        })?),
        TokenKind::StringLiteral => Literal::String(token.lexeme.clone()),
        TokenKind::BoolLiteral => Literal::Bool(token.lexeme == "true"),
        TokenKind::CharLiteral => {
            let mut chars = token.lexeme.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => Literal::Char(ch),
                _ => {
                    return Err(parser.unexpected_token_detailed(
                        "character literals hold exactly one character",
                    ))
                }
            }
        }
        TokenKind::Identifier => {
            parser.advance();
            return Ok(Expr::new(ExprKind::VarRef(token.lexeme), token.span));
        }
        _ => return Err(parser.unexpected_token()),
    };

    parser.advance();
    Ok(Expr::new(ExprKind::Literal(literal), token.span))
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let Some(operator) = BinaryOperator::from_symbol(&parser.current_token().lexeme) else {
        return Err(parser.unexpected_token());
    };
    parser.advance();

    let right = parse_expr(parser, bp)?;
    let span = Span::between(left.span, right.span);

    Ok(Expr::new(
        ExprKind::Binary {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        },
        span,
    ))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let Some(operator) = UnaryOperator::from_symbol(&parser.current_token().lexeme) else {
        return Err(parser.unexpected_token());
    };
    let operator_token = parser.advance();

    let operand = parse_expr(parser, BindingPower::Unary)?;
    let span = Span::between(operator_token.span, operand.span);

    Ok(Expr::new(
        ExprKind::Unary {
            operator,
            operand: Box::new(operand),
        },
        span,
    ))
}

pub fn parse_assignment_expr(
    parser: &mut Parser,
    left: Expr,
    bp: BindingPower,
) -> Result<Expr, Error> {
    let Some(operator) = AssignmentOperator::from_symbol(&parser.current_token().lexeme) else {
        return Err(parser.unexpected_token());
    };
    parser.advance();

    let value = parse_expr(parser, bp)?;
    let span = Span::between(left.span, value.span);

    Ok(Expr::new(
        ExprKind::Assignment {
            operator,
            target: Box::new(left),
            value: Box::new(value),
        },
        span,
    ))
}

/// `( expr )`, or `()` for the unit value.
pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let open = parser.expect_symbol("(")?;

    if parser.at_symbol(")") {
        let close = parser.advance();
        return Ok(Expr::new(
            ExprKind::Literal(Literal::Unit),
            Span::between(open.span, close.span),
        ));
    }

    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect_symbol(")")?;

    Ok(expr)
}

pub fn parse_call_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    parser.expect_symbol("(")?;

    let mut arguments = vec![];

    while !parser.at_symbol(")") {
        arguments.push(parse_expr(parser, BindingPower::Default)?);

        if parser.at_symbol(",") {
            parser.advance();
        } else {
            break;
        }
    }

    let close = parser.expect_symbol(")")?;
    let span = Span::between(left.span, close.span);

    Ok(Expr::new(
        ExprKind::Call {
            callee: Box::new(left),
            arguments,
        },
        span,
    ))
}

/// `[i32: 1, 2, 3]`
pub fn parse_array_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let open = parser.expect_symbol("[")?;
    let element_type = parse_type(parser)?;
    parser.expect_symbol(":")?;

    let mut elements = vec![];

    while !parser.at_symbol("]") {
        elements.push(parse_expr(parser, BindingPower::Default)?);

        if parser.at_symbol(",") {
            parser.advance();
        } else {
            break;
        }
    }

    let close = parser.expect_symbol("]")?;

    Ok(Expr::new(
        ExprKind::Array {
            element_type,
            elements,
        },
        Span::between(open.span, close.span),
    ))
}

/// `new <expr>`
pub fn parse_heap_alloc_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let new_token = parser.expect_symbol("new")?;
    let value = parse_expr(parser, BindingPower::Unary)?;
    let span = Span::between(new_token.span, value.span);

    Ok(Expr::new(ExprKind::HeapAlloc(Box::new(value)), span))
}
