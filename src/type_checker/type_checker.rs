use log::{debug, trace};

use crate::{
    ast::{
        ast::{FuncDecl, Module},
        expressions::{Expr, ExprKind, Literal, ValueCategory},
        operators::UnaryOperator,
        statements::{BlockStmt, Stmt},
        types::Type,
    },
    errors::errors::{Error, ErrorImpl},
    Position, INTERNAL_ERROR,
};

use super::{context::TypeCheckerContext, scope::ScopeStack};

/// Bottom-up type inference and checking over function bodies.
///
/// Statement checks return whether the statement definitely returns on every
/// path through it. Expressions whose type cannot be determined are annotated
/// with `Type::Error`; the fault is reported once where it is detected and
/// silently propagated from there.
#[derive(Debug)]
pub struct TypeChecker<'ctx> {
    context: &'ctx mut TypeCheckerContext,
    scopes: ScopeStack,
    expected_return_type: Option<Type>,
}

impl<'ctx> TypeChecker<'ctx> {
    pub fn new(context: &'ctx mut TypeCheckerContext) -> Self {
        TypeChecker {
            context,
            scopes: ScopeStack::new(),
            expected_return_type: None,
        }
    }

    fn report(&mut self, error: ErrorImpl, position: Position) {
        self.context.add_error(Error::new(error, position));
    }

    pub fn check_module(&mut self, module: &mut Module) {
        debug!("type checking module `{}`", module.name);

        for declaration in module.declarations.iter_mut() {
            self.check_function(declaration);
        }
    }

    pub fn check_function(&mut self, function: &mut FuncDecl) {
        trace!("type checking function `{}`", function.identifier);

        self.scopes.enter_scope();

        for parameter in function.parameters.iter() {
            if self.scopes.is_symbol_defined_in_current_scope(&parameter.name) {
                self.report(
                    ErrorImpl::VariableRedefinition {
                        variable: parameter.name.clone(),
                    },
                    parameter.span.start,
                );
            } else {
                self.scopes
                    .add_symbol(&parameter.name, parameter.param_type.clone());
            }
        }

        self.expected_return_type = Some(function.return_type.clone());
        let returns = self.check_block(&mut function.body);

        if !returns && !function.return_type.is_unit() {
            self.report(
                ErrorImpl::MissingReturnPath {
                    function: function.identifier.clone(),
                },
                function.span.start,
            );
        }

        self.expected_return_type = None;
        self.scopes.exit_scope();
    }

    pub fn check_block(&mut self, block: &mut BlockStmt) -> bool {
        self.scopes.enter_scope();

        let mut returns = false;
        let mut reported_unreachable = false;

        for stmt in block.body.iter_mut() {
            if returns && !reported_unreachable {
                self.report(ErrorImpl::UnreachableStatement, stmt.get_span().start);
                reported_unreachable = true;
            }

            if self.check_stmt(stmt) {
                returns = true;
            }
        }

        self.scopes.exit_scope();
        returns
    }

    pub fn check_stmt(&mut self, stmt: &mut Stmt) -> bool {
        match stmt {
            Stmt::Expression(expr) => {
                self.check_expr(expr);
                false
            }
            Stmt::Block(block) => self.check_block(block),
            Stmt::If(if_stmt) => {
                let condition = self.check_expr(&mut if_stmt.condition);
                if !condition.is_error() && condition != Type::bool() {
                    self.report(
                        ErrorImpl::IfConditionInvalidType {
                            received: condition.to_string(),
                        },
                        if_stmt.condition.span.start,
                    );
                }

                let then_returns = self.check_block(&mut if_stmt.then_body);
                let else_returns = self.check_block(&mut if_stmt.else_body);

                then_returns && else_returns
            }
            Stmt::While(while_stmt) => {
                let condition = self.check_expr(&mut while_stmt.condition);
                if !condition.is_error() && condition != Type::bool() {
                    self.report(
                        ErrorImpl::WhileConditionInvalidType {
                            received: condition.to_string(),
                        },
                        while_stmt.condition.span.start,
                    );
                }

                // The body may run zero times.
                self.check_block(&mut while_stmt.body);
                false
            }
            Stmt::Return(return_stmt) => {
                let expected = match &self.expected_return_type {
                    Some(expected) => expected.clone(),
                    None => INTERNAL_ERROR!("return statement outside of a function"),
                };

                let (actual, position) = match &mut return_stmt.value {
                    Some(value) => (self.check_expr(value), value.span.start),
                    None => (Type::Unit, return_stmt.span.start),
                };

                if !actual.is_error() && actual != expected {
                    self.report(
                        ErrorImpl::ReturnTypeMismatch {
                            expected: expected.to_string(),
                            received: actual.to_string(),
                        },
                        position,
                    );
                }

                true
            }
            Stmt::VarDecl(var_decl) => {
                let actual = self.check_expr(&mut var_decl.value);
                if !actual.is_error() && actual != var_decl.declared_type {
                    self.report(
                        ErrorImpl::VariableDeclTypeMismatch {
                            variable: var_decl.identifier.clone(),
                            expected: var_decl.declared_type.to_string(),
                            received: actual.to_string(),
                        },
                        var_decl.value.span.start,
                    );
                }

                if self
                    .scopes
                    .is_symbol_defined_in_current_scope(&var_decl.identifier)
                {
                    self.report(
                        ErrorImpl::VariableRedefinition {
                            variable: var_decl.identifier.clone(),
                        },
                        var_decl.span.start,
                    );
                } else {
                    // The declared type, so a bad initializer does not leak forward.
                    self.scopes
                        .add_symbol(&var_decl.identifier, var_decl.declared_type.clone());
                }

                false
            }
        }
    }

    /// Infers, annotates and returns the type of `expr`.
    pub fn check_expr(&mut self, expr: &mut Expr) -> Type {
        let (inferred_type, value_category) = self.infer_expr(expr);
        expr.annotate(inferred_type.clone(), value_category);
        inferred_type
    }

    fn infer_expr(&mut self, expr: &mut Expr) -> (Type, ValueCategory) {
        let position = expr.span.start;

        match &mut expr.kind {
            ExprKind::Literal(literal) => {
                let literal_type = match literal {
                    Literal::Int(_) => Type::i32(),
                    Literal::Float(_) => Type::f32(),
                    Literal::Char(_) => Type::char(),
                    Literal::Bool(_) => Type::bool(),
                    Literal::String(_) => Type::string(),
                    Literal::Unit => Type::Unit,
                };
                (literal_type, ValueCategory::RValue)
            }
            ExprKind::Array {
                element_type,
                elements,
            } => {
                for (index, element) in elements.iter_mut().enumerate() {
                    let actual = self.check_expr(element);
                    if !actual.is_error() && actual != *element_type {
                        self.report(
                            ErrorImpl::ArrayElementTypeMismatch {
                                index,
                                expected: element_type.to_string(),
                                received: actual.to_string(),
                            },
                            element.span.start,
                        );
                    }
                }

                (
                    Type::array(element_type.clone(), Some(elements.len())),
                    ValueCategory::RValue,
                )
            }
            ExprKind::VarRef(name) => {
                let scoped = self
                    .scopes
                    .get_symbol(name)
                    .map(|symbol| symbol.symbol_type.clone());
                if let Some(symbol_type) = scoped {
                    return (symbol_type, ValueCategory::LValue);
                }

                let function = self.context.namespace().get(name).cloned();
                if let Some(function_type) = function {
                    return (function_type, ValueCategory::RValue);
                }

                self.report(
                    ErrorImpl::UnknownSymbol {
                        symbol: name.clone(),
                    },
                    position,
                );
                (Type::Error, ValueCategory::RValue)
            }
            ExprKind::Unary { operator, operand } => {
                let operand_type = self.check_expr(operand);
                if operand_type.is_error() {
                    return (Type::Error, ValueCategory::RValue);
                }

                if *operator == UnaryOperator::Dereference {
                    return match operand_type.pointee() {
                        Some(pointee) => (pointee.clone(), ValueCategory::LValue),
                        None => {
                            self.report(
                                ErrorImpl::DereferenceNonPointer {
                                    received: operand_type.to_string(),
                                },
                                position,
                            );
                            (Type::Error, ValueCategory::RValue)
                        }
                    };
                }

                let function = self
                    .context
                    .namespace()
                    .get_unary_operator(*operator, &operand_type)
                    .cloned();
                match function {
                    Some(function_type) => (
                        operator_result(&function_type, &[&operand_type]),
                        ValueCategory::RValue,
                    ),
                    None => {
                        self.report(
                            ErrorImpl::UnaryOperatorNotFound {
                                operator: operator.to_string(),
                                operand: operand_type.to_string(),
                            },
                            position,
                        );
                        (Type::Error, ValueCategory::RValue)
                    }
                }
            }
            ExprKind::Binary {
                operator,
                left,
                right,
            } => {
                let left_type = self.check_expr(left);
                let right_type = self.check_expr(right);
                if left_type.is_error() || right_type.is_error() {
                    return (Type::Error, ValueCategory::RValue);
                }

                let function = self
                    .context
                    .namespace()
                    .get_binary_operator(*operator, &left_type, &right_type)
                    .cloned();
                match function {
                    Some(function_type) => (
                        operator_result(&function_type, &[&left_type, &right_type]),
                        ValueCategory::RValue,
                    ),
                    None => {
                        self.report(
                            ErrorImpl::BinaryOperatorNotFound {
                                operator: operator.to_string(),
                                left: left_type.to_string(),
                                right: right_type.to_string(),
                            },
                            position,
                        );
                        (Type::Error, ValueCategory::RValue)
                    }
                }
            }
            ExprKind::HeapAlloc(value) => {
                let value_type = self.check_expr(value);
                if value_type.is_error() {
                    return (Type::Error, ValueCategory::RValue);
                }
                (Type::pointer(value_type), ValueCategory::RValue)
            }
            ExprKind::Assignment {
                operator,
                target,
                value,
            } => {
                let target_type = self.check_expr(target);
                let value_type = self.check_expr(value);

                if !target.is_assignable() {
                    self.report(ErrorImpl::CannotAssignToRValue, target.span.start);
                    return (Type::Error, ValueCategory::RValue);
                }

                if target_type.is_error() || value_type.is_error() {
                    return (Type::Error, ValueCategory::RValue);
                }

                // Compound operators are not routed through the operator
                // table; both sides must simply have the same type.
                if target_type != value_type {
                    self.report(
                        ErrorImpl::AssignmentOperatorIncompatibleTypes {
                            operator: operator.to_string(),
                            left: target_type.to_string(),
                            right: value_type.to_string(),
                        },
                        position,
                    );
                    return (Type::Error, ValueCategory::RValue);
                }

                (Type::Unit, ValueCategory::RValue)
            }
            ExprKind::Call { callee, arguments } => {
                let callee_type = self.check_expr(callee);

                if !callee_type.is_function() && !callee_type.is_error() {
                    self.report(
                        ErrorImpl::FuncCallNonFunction {
                            received: callee_type.to_string(),
                        },
                        callee.span.start,
                    );
                }

                let argument_types: Vec<(Type, Position)> = arguments
                    .iter_mut()
                    .map(|argument| (self.check_expr(argument), argument.span.start))
                    .collect();

                let Type::Function {
                    parameters,
                    return_type,
                } = callee_type
                else {
                    return (Type::Error, ValueCategory::RValue);
                };

                if parameters.len() != argument_types.len() {
                    self.report(
                        ErrorImpl::FuncCallArgMismatch {
                            expected: parameters.len(),
                            received: argument_types.len(),
                        },
                        position,
                    );
                }

                for (index, (parameter, (argument, argument_position))) in
                    parameters.iter().zip(argument_types.iter()).enumerate()
                {
                    if !argument.is_error() && argument != parameter {
                        self.report(
                            ErrorImpl::FuncCallArgTypeMismatch {
                                index,
                                expected: parameter.to_string(),
                                received: argument.to_string(),
                            },
                            *argument_position,
                        );
                    }
                }

                // Still usable downstream even when the arguments were wrong.
                (*return_type, ValueCategory::RValue)
            }
        }
    }
}

/// Return type of an operator's function type applied to `operands`.
fn operator_result(function_type: &Type, operands: &[&Type]) -> Type {
    match function_type {
        Type::Function {
            parameters,
            return_type,
        } if parameters.len() == operands.len()
            && parameters
                .iter()
                .zip(operands.iter())
                .all(|(parameter, operand)| parameter == *operand) =>
        {
            (**return_type).clone()
        }
        _ => INTERNAL_ERROR!(
            "operator table entry `{}` does not accept its operands",
            function_type
        ),
    }
}
