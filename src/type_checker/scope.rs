use std::collections::HashMap;

use log::trace;

use crate::{ast::types::Type, INTERNAL_ERROR};

#[derive(Debug, Clone, PartialEq)]
pub struct SymbolInfo {
    pub symbol_type: Type,
}

#[derive(Debug, Default)]
pub struct Scope {
    symbols: HashMap<String, SymbolInfo>,
}

impl Scope {
    pub fn new() -> Self {
        Scope {
            symbols: HashMap::new(),
        }
    }

    /// Overwrites silently; callers check `is_symbol_defined_in_current_scope` first.
    pub fn add_symbol(&mut self, name: &str, symbol_type: Type) {
        self.symbols
            .insert(name.to_string(), SymbolInfo { symbol_type });
    }

    pub fn get_symbol(&self, name: &str) -> Option<&SymbolInfo> {
        self.symbols.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }
}

/// Nested lexical scopes. The outermost scope is the global one and is never popped.
#[derive(Debug)]
pub struct ScopeStack {
    scopes: Vec<Scope>,
}

impl Default for ScopeStack {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeStack {
    pub fn new() -> Self {
        ScopeStack {
            scopes: vec![Scope::new()],
        }
    }

    pub fn enter_scope(&mut self) -> &mut Scope {
        self.scopes.push(Scope::new());
        trace!("entered scope at depth {}", self.scopes.len());
        self.current_scope()
    }

    pub fn exit_scope(&mut self) {
        if self.scopes.len() <= 1 {
            INTERNAL_ERROR!("attempted to exit the global scope");
        }
        trace!("exiting scope at depth {}", self.scopes.len());
        self.scopes.pop();
    }

    pub fn add_symbol(&mut self, name: &str, symbol_type: Type) {
        self.current_scope().add_symbol(name, symbol_type);
    }

    /// Innermost to outermost, first match wins.
    pub fn get_symbol(&self, name: &str) -> Option<&SymbolInfo> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.get_symbol(name))
    }

    pub fn is_symbol_defined_in_current_scope(&self, name: &str) -> bool {
        self.scopes
            .last()
            .map(|scope| scope.contains(name))
            .unwrap_or(false)
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    fn current_scope(&mut self) -> &mut Scope {
        match self.scopes.last_mut() {
            Some(scope) => scope,
            None => INTERNAL_ERROR!("scope stack is empty"),
        }
    }
}
