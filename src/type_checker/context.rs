use std::collections::HashMap;

use log::trace;

use crate::{
    ast::{
        operators::{BinaryOperator, UnaryOperator},
        types::Type,
    },
    errors::errors::Error,
};

use super::operators::{binary_operator_key, unary_operator_key, OPERATOR_TABLE};

/// Global function registry: function name (or synthetic operator name) to its type.
#[derive(Debug, Default)]
pub struct Namespace {
    functions: HashMap<String, Type>,
}

impl Namespace {
    pub fn new() -> Self {
        Namespace {
            functions: HashMap::new(),
        }
    }

    /// Namespace pre-populated with every built-in operator.
    pub fn with_operators() -> Self {
        let mut namespace = Namespace::new();
        for (name, function_type) in OPERATOR_TABLE.iter() {
            namespace.register(name, function_type.clone());
        }
        namespace
    }

    /// First registration wins. Returns `false` and leaves the existing
    /// entry untouched when `name` is already taken.
    pub fn register(&mut self, name: &str, function_type: Type) -> bool {
        if self.functions.contains_key(name) {
            return false;
        }
        self.functions.insert(name.to_string(), function_type);
        true
    }

    pub fn get(&self, name: &str) -> Option<&Type> {
        self.functions.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub fn get_unary_operator(&self, operator: UnaryOperator, operand: &Type) -> Option<&Type> {
        self.get(&unary_operator_key(operator, operand))
    }

    pub fn get_binary_operator(
        &self,
        operator: BinaryOperator,
        left: &Type,
        right: &Type,
    ) -> Option<&Type> {
        self.get(&binary_operator_key(operator, left, right))
    }

    /// Registered names in sorted order, for tooling and debugging.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

/// State shared by every pass over one compilation unit.
#[derive(Debug)]
pub struct TypeCheckerContext {
    namespace: Namespace,
    errors: Vec<Error>,
}

impl Default for TypeCheckerContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeCheckerContext {
    pub fn new() -> Self {
        TypeCheckerContext {
            namespace: Namespace::with_operators(),
            errors: vec![],
        }
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    pub fn namespace_mut(&mut self) -> &mut Namespace {
        &mut self.namespace
    }

    pub fn add_error(&mut self, error: Error) {
        trace!("diagnostic: {}", error);
        self.errors.push(error);
    }

    /// Diagnostics in the order they were discovered.
    pub fn get_errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }
}
