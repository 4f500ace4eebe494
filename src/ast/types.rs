//! Type system definitions for the AST.
//!
//! Types are plain immutable values compared structurally. They appear in
//! two places: as declared types written by the parser (parameters, return
//! types, variable annotations, array element types) and as the inferred
//! type annotated on every expression by the type checker.
//!
//! `Type::Error` is the sentinel carried by nodes whose type could not be
//! determined. It only ever equals another `Error`.

use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// A named primitive such as `i32` or `string`.
    Typename(String),
    Pointer(Box<Type>),
    /// `size` of `None` is an unsized array `[T]`.
    Array {
        element: Box<Type>,
        size: Option<usize>,
    },
    Function {
        parameters: Vec<Type>,
        return_type: Box<Type>,
    },
    Unit,
    Error,
}

impl Type {
    pub fn typename(name: &str) -> Self {
        Type::Typename(name.to_string())
    }

    pub fn pointer(pointee: Type) -> Self {
        Type::Pointer(Box::new(pointee))
    }

    pub fn array(element: Type, size: Option<usize>) -> Self {
        Type::Array {
            element: Box::new(element),
            size,
        }
    }

    pub fn function(parameters: Vec<Type>, return_type: Type) -> Self {
        Type::Function {
            parameters,
            return_type: Box::new(return_type),
        }
    }

    pub fn i32() -> Self {
        Type::typename("i32")
    }

    pub fn u32() -> Self {
        Type::typename("u32")
    }

    pub fn f32() -> Self {
        Type::typename("f32")
    }

    pub fn bool() -> Self {
        Type::typename("bool")
    }

    pub fn char() -> Self {
        Type::typename("char")
    }

    pub fn string() -> Self {
        Type::typename("string")
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Type::Error)
    }

    pub fn is_unit(&self) -> bool {
        matches!(self, Type::Unit)
    }

    pub fn is_function(&self) -> bool {
        matches!(self, Type::Function { .. })
    }

    pub fn pointee(&self) -> Option<&Type> {
        match self {
            Type::Pointer(pointee) => Some(pointee),
            _ => None,
        }
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Typename(name) => write!(f, "{}", name),
            Type::Pointer(pointee) => write!(f, "*{}", pointee),
            Type::Array {
                element,
                size: Some(size),
            } => write!(f, "[{}; {}]", element, size),
            Type::Array { element, size: None } => write!(f, "[{}]", element),
            Type::Function {
                parameters,
                return_type,
            } => {
                let parameters = parameters
                    .iter()
                    .map(|parameter| parameter.to_string())
                    .collect::<Vec<String>>()
                    .join(", ");
                write!(f, "func({}) -> {}", parameters, return_type)
            }
            Type::Unit => write!(f, "()"),
            Type::Error => write!(f, "<error>"),
        }
    }
}
