//! Type annotation parsing.
//!
//! Supports named types, pointers (`*T`), arrays (`[T]`, `[T; N]`),
//! function types (`func(T, U) -> R`) and the unit type `()`. Every form
//! is introduced by its first token, so only NUD handlers are needed.

use std::collections::HashMap;

use crate::{
    ast::types::Type,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::LookupKey, parser::Parser};

pub type TypeNUDHandler = fn(&mut Parser) -> Result<Type, Error>;

pub type TypeNUDLookup = HashMap<LookupKey, TypeNUDHandler>;

pub fn create_token_type_lookups(parser: &mut Parser) {
    parser.type_nud(LookupKey::Kind(TokenKind::Identifier), parse_symbol_type);
    parser.type_nud(LookupKey::symbol("*"), parse_pointer_type);
    parser.type_nud(LookupKey::symbol("["), parse_array_type);
    parser.type_nud(LookupKey::symbol("func"), parse_function_type);
    parser.type_nud(LookupKey::symbol("("), parse_unit_type);
}

pub fn parse_type(parser: &mut Parser) -> Result<Type, Error> {
    let key = LookupKey::of(parser.current_token());
    let Some(nud_fn) = parser.get_type_nud_lookup().get(&key).copied() else {
        return Err(parser.unexpected_token_detailed("expected a type"));
    };

    nud_fn(parser)
}

pub fn parse_symbol_type(parser: &mut Parser) -> Result<Type, Error> {
    let token = parser.expect(TokenKind::Identifier)?;
    Ok(Type::Typename(token.lexeme))
}

pub fn parse_pointer_type(parser: &mut Parser) -> Result<Type, Error> {
    parser.expect_symbol("*")?;
    Ok(Type::pointer(parse_type(parser)?))
}

pub fn parse_array_type(parser: &mut Parser) -> Result<Type, Error> {
    parser.expect_symbol("[")?;
    let element = parse_type(parser)?;

    let size = if parser.at_symbol(";") {
        parser.advance();
        let token = parser.expect(TokenKind::NumericLiteral)?;
        match token.lexeme.parse::<usize>() {
            Ok(size) => Some(size),
            Err(_) => {
                return Err(Error::new(
                    ErrorImpl::NumberParseError {
                        token: token.lexeme,
                    },
                    token.span.start,
                ))
            }
        }
    } else {
        None
    };

    parser.expect_symbol("]")?;

    Ok(Type::array(element, size))
}

pub fn parse_function_type(parser: &mut Parser) -> Result<Type, Error> {
    parser.expect_symbol("func")?;
    parser.expect_symbol("(")?;

    let mut parameters = vec![];
    while !parser.at_symbol(")") {
        parameters.push(parse_type(parser)?);

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

    Ok(Type::function(parameters, return_type))
}

pub fn parse_unit_type(parser: &mut Parser) -> Result<Type, Error> {
    parser.expect_symbol("(")?;
    parser.expect_symbol(")")?;
    Ok(Type::Unit)
}
