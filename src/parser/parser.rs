//! Parser state and entry point.
//!
//! The parser holds the filtered token stream and the lookup tables used by
//! the Pratt expression parser:
//! - statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - binding powers for operator precedence
//! - type handlers

use std::collections::HashMap;

use log::debug;

use crate::{
    ast::ast::Module,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span, MK_TOKEN,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, LookupKey,
        NUDHandler, NUDLookup, StmtHandler, StmtLookup,
    },
    stmt::parse_func_decl,
    types::{create_token_type_lookups, TypeNUDHandler, TypeNUDLookup},
};

pub struct Parser {
    /// Never empty; the last token is always `EndOfFile`.
    tokens: Vec<Token>,
    pos: usize,
    stmt_lookup: StmtLookup,
    nud_lookup: NUDLookup,
    led_lookup: LEDLookup,
    binding_power_lookup: BPLookup,
    type_nud_lookup: TypeNUDLookup,
}

impl Parser {
    /// Comments are dropped here so no later phase ever sees them.
    pub fn new(tokens: Vec<Token>) -> Self {
        let mut tokens: Vec<Token> = tokens
            .into_iter()
            .filter(|token| token.kind != TokenKind::Comment)
            .collect();

        if tokens.last().map(|token| token.kind) != Some(TokenKind::EndOfFile) {
            let end = tokens
                .last()
                .map(|token| token.span.end)
                .unwrap_or_default();
            tokens.push(MK_TOKEN!(
                TokenKind::EndOfFile,
                String::new(),
                Span { start: end, end }
            ));
        }

        Parser {
            tokens,
            pos: 0,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            type_nud_lookup: HashMap::new(),
        }
    }

    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Whether the current token is the keyword, operator or separator `symbol`.
    pub fn at_symbol(&self, symbol: &str) -> bool {
        self.current_token().is_symbol(symbol)
    }

    /// Advances to the next token and returns the previous one. Stays on
    /// `EndOfFile` once it is reached.
    pub fn advance(&mut self) -> Token {
        let token = self.current_token().clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.current_token_kind() != expected_kind {
            return Err(self.unexpected_token_detailed(&format!("expected {}", expected_kind)));
        }
        Ok(self.advance())
    }

    pub fn expect_symbol(&mut self, symbol: &str) -> Result<Token, Error> {
        if !self.at_symbol(symbol) {
            return Err(self.unexpected_token_detailed(&format!("expected `{}`", symbol)));
        }
        Ok(self.advance())
    }

    /// Error for the current token when no rule accepts it.
    pub fn unexpected_token(&self) -> Error {
        let token = self.current_token();
        match token.kind {
            TokenKind::EndOfFile => self.unexpected_token_detailed("unexpected end of file"),
            TokenKind::Illegal => Error::new(
                ErrorImpl::UnrecognisedToken {
                    token: token.lexeme.clone(),
                },
                token.location(),
            ),
            _ => Error::new(
                ErrorImpl::UnexpectedToken {
                    token: token.lexeme.clone(),
                },
                token.location(),
            ),
        }
    }

    pub fn unexpected_token_detailed(&self, message: &str) -> Error {
        let token = self.current_token();
        if token.kind == TokenKind::Illegal {
            return self.unexpected_token();
        }

        Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: token.to_string(),
                message: message.to_string(),
            },
            token.location(),
        )
    }

    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EndOfFile
    }

    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    pub fn get_type_nud_lookup(&self) -> &TypeNUDLookup {
        &self.type_nud_lookup
    }

    pub fn led(&mut self, key: LookupKey, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(key.clone(), binding_power);
        self.led_lookup.insert(key, led_fn);
    }

    pub fn nud(&mut self, key: LookupKey, nud_fn: NUDHandler) {
        self.nud_lookup.insert(key, nud_fn);
    }

    pub fn stmt(&mut self, key: LookupKey, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(key, stmt_fn);
    }

    pub fn type_nud(&mut self, key: LookupKey, nud_fn: TypeNUDHandler) {
        self.type_nud_lookup.insert(key, nud_fn);
    }

    pub fn get_position(&self) -> Position {
        self.current_token().location()
    }
}

/// Parses a token stream into a module of function declarations.
///
/// Stops at the first syntax error. Illegal characters left by the lexer are
/// reported before anything else is parsed.
pub fn parse(tokens: Vec<Token>, module_name: &str) -> Result<Module, Error> {
    if let Some(illegal) = tokens.iter().find(|token| token.kind == TokenKind::Illegal) {
        return Err(Error::new(
            ErrorImpl::UnrecognisedToken {
                token: illegal.lexeme.clone(),
            },
            illegal.location(),
        ));
    }

    let mut parser = Parser::new(tokens);
    create_token_lookups(&mut parser);
    create_token_type_lookups(&mut parser);

    let mut declarations = vec![];

    while parser.has_tokens() {
        if !parser.at_symbol("func") {
            return Err(parser.unexpected_token_detailed(
                "only function declarations are allowed at the top level",
            ));
        }
        declarations.push(parse_func_decl(&mut parser)?);
    }

    debug!(
        "parsed module `{}` with {} function(s)",
        module_name,
        declarations.len()
    );

    Ok(Module::new(module_name, declarations))
}
