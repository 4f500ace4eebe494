use crate::{
    ast::{
        ast::{FuncDecl, Parameter},
        statements::{BlockStmt, IfStmt, ReturnStmt, Stmt, VarDeclStmt, WhileStmt},
        types::Type,
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
    Span,
};

use super::{lookups::LookupKey, parser::Parser, types::parse_type};

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let key = LookupKey::of(parser.current_token());
    if let Some(stmt_fn) = parser.get_stmt_lookup().get(&key).copied() {
        return stmt_fn(parser);
    }

    if parser.at_symbol("func") {
        return Err(parser.unexpected_token_detailed(
            "functions may only be declared at the top level of a module",
        ));
    }

    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect_symbol(";")?;

    Ok(Stmt::Expression(expr))
}

pub fn parse_block(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let open = parser.expect_symbol("{")?;

    let mut body = vec![];
    while !parser.at_symbol("}") && parser.has_tokens() {
        body.push(parse_stmt(parser)?);
    }

    let close = parser.expect_symbol("}")?;

    Ok(BlockStmt {
        body,
        span: Span::between(open.span, close.span),
    })
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    Ok(Stmt::Block(parse_block(parser)?))
}

/// `var name: type = value;`
pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start_token = parser.expect_symbol("var")?;

    if parser.current_token_kind() != TokenKind::Identifier {
        return Err(parser
            .unexpected_token_detailed("expected identifier during variable declaration"));
    }
    let identifier = parser.advance().lexeme;

    parser.expect_symbol(":")?;
    let declared_type = parse_type(parser)?;

    parser.expect_symbol("=")?;
    let value = parse_expr(parser, BindingPower::Default)?;

    let end_token = parser.expect_symbol(";")?;

    Ok(Stmt::VarDecl(VarDeclStmt {
        identifier,
        declared_type,
        value,
        span: Span::between(start_token.span, end_token.span),
    }))
}

/// `if (cond) { } else if (cond) { } else { }`. A missing else branch is
/// synthesized as an empty block so both branches are always present.
pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start_token = parser.expect_symbol("if")?;

    parser.expect_symbol("(")?;
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect_symbol(")")?;

    let then_body = parse_block(parser)?;

    let else_body = if parser.at_symbol("else") {
        parser.advance();

        if parser.at_symbol("if") {
            let nested = parse_if_stmt(parser)?;
            let span = *nested.get_span();
            BlockStmt {
                body: vec![nested],
                span,
            }
        } else {
            parse_block(parser)?
        }
    } else {
        BlockStmt {
            body: vec![],
            span: Span {
                start: then_body.span.end,
                end: then_body.span.end,
            },
        }
    };

    Ok(Stmt::If(IfStmt {
        span: Span::between(start_token.span, else_body.span),
        condition,
        then_body,
        else_body,
    }))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start_token = parser.expect_symbol("while")?;

    parser.expect_symbol("(")?;
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect_symbol(")")?;

    let body = parse_block(parser)?;

    Ok(Stmt::While(WhileStmt {
        span: Span::between(start_token.span, body.span),
        condition,
        body,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start_token = parser.expect_symbol("return")?;

    let value = if parser.at_symbol(";") {
        None
    } else {
        Some(parse_expr(parser, BindingPower::Default)?)
    };

    let end_token = parser.expect_symbol(";")?;

    Ok(Stmt::Return(ReturnStmt {
        value,
        span: Span::between(start_token.span, end_token.span),
    }))
}

/// `func name(a: T, b: U) -> R { ... }`, the return type defaulting to `()`.
pub fn parse_func_decl(parser: &mut Parser) -> Result<FuncDecl, Error> {
    let start_token = parser.expect_symbol("func")?;

    if parser.current_token_kind() != TokenKind::Identifier {
        return Err(parser.unexpected_token_detailed("expected function name"));
    }
    let identifier = parser.advance().lexeme;

    parser.expect_symbol("(")?;

    let mut parameters = vec![];
    while !parser.at_symbol(")") {
        let name = parser.expect(TokenKind::Identifier)?;
        parser.expect_symbol(":")?;
        let param_type = parse_type(parser)?;

        parameters.push(Parameter {
            name: name.lexeme,
            param_type,
            span: name.span,
        });

        if parser.at_symbol(",") {
            parser.advance();
        } else {
            break;
        }
    }

    parser.expect_symbol(")")?;

    let return_type = if parser.at_symbol("->") {
        parser.advance();
        parse_type(parser)?
    } else {
        Type::Unit
    };

    let body = parse_block(parser)?;

    Ok(FuncDecl {
        identifier,
        parameters,
        return_type,
        span: Span::between(start_token.span, body.span),
        body,
    })
}
