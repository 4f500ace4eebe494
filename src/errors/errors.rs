use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::ArrayElementTypeMismatch { .. } => "ArrayElementTypeMismatch",
            ErrorImpl::UnaryOperatorNotFound { .. } => "UnaryOperatorNotFound",
            ErrorImpl::BinaryOperatorNotFound { .. } => "BinaryOperatorNotFound",
            ErrorImpl::DereferenceNonPointer { .. } => "DereferenceNonPointer",
            ErrorImpl::CannotAssignToRValue => "CannotAssignToRValue",
            ErrorImpl::AssignmentOperatorIncompatibleTypes { .. } => {
                "AssignmentOperatorIncompatibleTypes"
            }
            ErrorImpl::FuncCallNonFunction { .. } => "FuncCallNonFunction",
            ErrorImpl::FuncCallArgMismatch { .. } => "FuncCallArgMismatch",
            ErrorImpl::FuncCallArgTypeMismatch { .. } => "FuncCallArgTypeMismatch",
            ErrorImpl::UnknownSymbol { .. } => "UnknownSymbol",
            ErrorImpl::UnreachableStatement => "UnreachableStatement",
            ErrorImpl::IfConditionInvalidType { .. } => "IfConditionInvalidType",
            ErrorImpl::WhileConditionInvalidType { .. } => "WhileConditionInvalidType",
            ErrorImpl::ReturnTypeMismatch { .. } => "ReturnTypeMismatch",
            ErrorImpl::VariableDeclTypeMismatch { .. } => "VariableDeclTypeMismatch",
            ErrorImpl::VariableRedefinition { .. } => "VariableRedefinition",
            ErrorImpl::FunctionRedeclaration { .. } => "FunctionRedeclaration",
            ErrorImpl::MissingReturnPath { .. } => "MissingReturnPath",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::DereferenceNonPointer { received } => ErrorTip::Suggestion(format!(
                "Only pointers can be dereferenced, found `{}`",
                received
            )),
            ErrorImpl::CannotAssignToRValue => ErrorTip::Suggestion(String::from(
                "Only variables and dereferenced pointers can be assigned to",
            )),
            ErrorImpl::FuncCallArgMismatch { expected, received } => ErrorTip::Suggestion(
                format!("Expected {} arguments, received {}", expected, received),
            ),
            ErrorImpl::UnknownSymbol { symbol } => ErrorTip::Suggestion(format!(
                "`{}` is not a variable or function in scope",
                symbol
            )),
            ErrorImpl::UnreachableStatement => ErrorTip::Suggestion(String::from(
                "Statements after a return in the same block never execute",
            )),
            ErrorImpl::VariableRedefinition { variable } => ErrorTip::Suggestion(format!(
                "Variable `{}` already declared in this block",
                variable
            )),
            ErrorImpl::FunctionRedeclaration { function } => {
                ErrorTip::Suggestion(format!("Function `{}` already declared", function))
            }
            ErrorImpl::MissingReturnPath { function } => ErrorTip::Suggestion(format!(
                "Add a return statement to every branch of `{}`",
                function
            )),
            _ => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.position, self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },

    #[error("array element {index} has type '{received}', expected '{expected}'")]
    ArrayElementTypeMismatch {
        index: usize,
        expected: String,
        received: String,
    },
    #[error("no unary operator '{operator}' for operand of type '{operand}'")]
    UnaryOperatorNotFound { operator: String, operand: String },
    #[error("no binary operator '{operator}' for operands of type '{left}' and '{right}'")]
    BinaryOperatorNotFound {
        operator: String,
        left: String,
        right: String,
    },
    #[error("cannot dereference non-pointer type '{received}'")]
    DereferenceNonPointer { received: String },
    #[error("cannot assign to an r-value")]
    CannotAssignToRValue,
    #[error("assignment operator '{operator}' cannot assign '{right}' to '{left}'")]
    AssignmentOperatorIncompatibleTypes {
        operator: String,
        left: String,
        right: String,
    },
    #[error("cannot call non-function type '{received}'")]
    FuncCallNonFunction { received: String },
    #[error("function expects {expected} arguments, received {received}")]
    FuncCallArgMismatch { expected: usize, received: usize },
    #[error("argument {index} has type '{received}', expected '{expected}'")]
    FuncCallArgTypeMismatch {
        index: usize,
        expected: String,
        received: String,
    },
    #[error("unknown symbol '{symbol}'")]
    UnknownSymbol { symbol: String },
    #[error("unreachable statement in block")]
    UnreachableStatement,
    #[error("if condition must be of type 'bool', found '{received}'")]
    IfConditionInvalidType { received: String },
    #[error("while condition must be of type 'bool', found '{received}'")]
    WhileConditionInvalidType { received: String },
    #[error("returned type '{received}' does not match declared return type '{expected}'")]
    ReturnTypeMismatch { expected: String, received: String },
    #[error("variable '{variable}' declared as '{expected}' but initialized with '{received}'")]
    VariableDeclTypeMismatch {
        variable: String,
        expected: String,
        received: String,
    },
    #[error("illegal redefinition of variable '{variable}'")]
    VariableRedefinition { variable: String },
    #[error("illegal redeclaration of function '{function}'")]
    FunctionRedeclaration { function: String },
    #[error("not all control paths of function '{function}' return a value")]
    MissingReturnPath { function: String },
}
