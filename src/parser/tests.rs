//! Unit tests for the parser module.
//!
//! Covers function declarations, statements, operator precedence, type
//! annotations and syntax errors.

use super::parser::parse;
use crate::{
    ast::{
        ast::Module,
        expressions::{ExprKind, Literal},
        operators::{AssignmentOperator, BinaryOperator, UnaryOperator},
        statements::Stmt,
        types::Type,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::lexer::tokenize,
    Position,
};

fn parse_source(source: &str) -> Result<Module, Error> {
    parse(tokenize(source, "test.lang"), "test")
}

fn parse_body(body: &str) -> Vec<Stmt> {
    let source = format!("func main() {{ {} }}", body);
    match parse_source(&source) {
        Ok(mut module) => module.declarations.remove(0).body.body,
        Err(error) => panic!("failed to parse `{}`: {}", source, error),
    }
}

fn parse_expression(expr: &str) -> ExprKind {
    match parse_body(&format!("{};", expr)).remove(0) {
        Stmt::Expression(expr) => expr.kind,
        other => panic!("expected an expression statement, found {:?}", other),
    }
}

#[test]
fn test_parse_function_declaration() {
    let module = parse_source("func add(a: i32, b: i32) -> i32 { return a + b; }").unwrap();

    assert_eq!(module.name, "test");
    assert_eq!(module.declarations.len(), 1);

    let add = &module.declarations[0];
    assert_eq!(add.identifier, "add");
    assert_eq!(add.parameters.len(), 2);
    assert_eq!(add.parameters[1].name, "b");
    assert_eq!(
        add.function_type(),
        Type::function(vec![Type::i32(), Type::i32()], Type::i32())
    );
    assert_eq!(add.span.start, Position::new(1, 1, 0));
}

#[test]
fn test_parse_function_without_return_type() {
    let module = parse_source("func main() {}\nfunc other(x: bool) {}").unwrap();

    assert_eq!(module.declarations.len(), 2);
    assert_eq!(module.declarations[0].return_type, Type::Unit);
    assert!(module.declarations[0].body.body.is_empty());
}

#[test]
fn test_parse_variable_declaration() {
    let body = parse_body("var x: i32 = 42;");

    let Stmt::VarDecl(var_decl) = &body[0] else {
        panic!("expected a variable declaration");
    };
    assert_eq!(var_decl.identifier, "x");
    assert_eq!(var_decl.declared_type, Type::i32());
    assert_eq!(var_decl.value.kind, ExprKind::Literal(Literal::Int(42)));
}

#[test]
fn test_parse_variable_declaration_requires_type() {
    let error = parse_source("func main() { var x = 1; }").unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedTokenDetailed");
}

#[test]
fn test_parse_literals() {
    assert_eq!(parse_expression("3.5"), ExprKind::Literal(Literal::Float(3.5)));
    assert_eq!(parse_expression("'c'"), ExprKind::Literal(Literal::Char('c')));
    assert_eq!(parse_expression("true"), ExprKind::Literal(Literal::Bool(true)));
    assert_eq!(
        parse_expression("\"hi\""),
        ExprKind::Literal(Literal::String("hi".to_string()))
    );
    assert_eq!(parse_expression("()"), ExprKind::Literal(Literal::Unit));
}

#[test]
fn test_parse_precedence() {
    // 1 + 2 * 3 == 7 && !done
    let ExprKind::Binary {
        operator: BinaryOperator::LogicalAnd,
        left,
        right,
    } = parse_expression("1 + 2 * 3 == 7 && !done")
    else {
        panic!("expected `&&` at the root");
    };

    let ExprKind::Binary {
        operator: BinaryOperator::Equality,
        left: sum,
        ..
    } = left.kind
    else {
        panic!("expected `==` under `&&`");
    };
    let ExprKind::Binary {
        operator: BinaryOperator::Addition,
        right: product,
        ..
    } = sum.kind
    else {
        panic!("expected `+` under `==`");
    };
    assert!(matches!(
        product.kind,
        ExprKind::Binary {
            operator: BinaryOperator::Multiplication,
            ..
        }
    ));

    assert!(matches!(
        right.kind,
        ExprKind::Unary {
            operator: UnaryOperator::Not,
            ..
        }
    ));
}

#[test]
fn test_parse_left_associativity() {
    let ExprKind::Binary { left, right, .. } = parse_expression("10 - 4 - 3") else {
        panic!("expected a binary expression");
    };

    assert!(matches!(left.kind, ExprKind::Binary { .. }));
    assert_eq!(right.kind, ExprKind::Literal(Literal::Int(3)));
}

#[test]
fn test_parse_prefix_binds_tighter_than_binary() {
    let ExprKind::Binary { left, .. } = parse_expression("-x * 2") else {
        panic!("expected a binary expression");
    };

    assert!(matches!(
        left.kind,
        ExprKind::Unary {
            operator: UnaryOperator::Minus,
            ..
        }
    ));
}

#[test]
fn test_parse_assignments() {
    let ExprKind::Assignment {
        operator, target, ..
    } = parse_expression("*p <<= 2")
    else {
        panic!("expected an assignment");
    };

    assert_eq!(operator, AssignmentOperator::ShiftLeft);
    assert_eq!(operator.binary_operator(), Some(BinaryOperator::ShiftLeft));
    assert!(target.is_assignable());
}

#[test]
fn test_parse_call() {
    let ExprKind::Call { callee, arguments } = parse_expression("add(1, f(2))") else {
        panic!("expected a call");
    };

    assert_eq!(callee.kind, ExprKind::VarRef("add".to_string()));
    assert_eq!(arguments.len(), 2);
    assert!(matches!(arguments[1].kind, ExprKind::Call { .. }));
}

#[test]
fn test_parse_array_and_heap_allocation() {
    let ExprKind::Array {
        element_type,
        elements,
    } = parse_expression("[i32: 1, 2, 3]")
    else {
        panic!("expected an array literal");
    };
    assert_eq!(element_type, Type::i32());
    assert_eq!(elements.len(), 3);

    let ExprKind::HeapAlloc(value) = parse_expression("new 42") else {
        panic!("expected a heap allocation");
    };
    assert_eq!(value.kind, ExprKind::Literal(Literal::Int(42)));
}

#[test]
fn test_parse_if_else_chain() {
    let body = parse_body("if (a) { } else if (b) { return; } else { }");

    let Stmt::If(if_stmt) = &body[0] else {
        panic!("expected an if statement");
    };
    assert_eq!(if_stmt.else_body.body.len(), 1);

    let Stmt::If(nested) = &if_stmt.else_body.body[0] else {
        panic!("expected a nested if in the else branch");
    };
    assert_eq!(nested.then_body.body.len(), 1);
}

#[test]
fn test_parse_if_without_else_synthesizes_block() {
    let body = parse_body("if (a) { return; }");

    let Stmt::If(if_stmt) = &body[0] else {
        panic!("expected an if statement");
    };
    assert!(if_stmt.else_body.body.is_empty());
}

#[test]
fn test_parse_while_and_return() {
    let body = parse_body("while (x < 10) { x += 1; } return;");

    assert!(matches!(body[0], Stmt::While(_)));
    let Stmt::Return(return_stmt) = &body[1] else {
        panic!("expected a return statement");
    };
    assert!(return_stmt.value.is_none());
}

#[test]
fn test_parse_types() {
    let module = parse_source(
        "func f(a: *i32, b: [u32], c: [bool; 4], d: func(i32, f32) -> char, e: ()) {}",
    )
    .unwrap();

    let types: Vec<Type> = module.declarations[0]
        .parameters
        .iter()
        .map(|parameter| parameter.param_type.clone())
        .collect();

    assert_eq!(
        types,
        vec![
            Type::pointer(Type::i32()),
            Type::array(Type::u32(), None),
            Type::array(Type::bool(), Some(4)),
            Type::function(vec![Type::i32(), Type::f32()], Type::char()),
            Type::Unit,
        ]
    );
}

#[test]
fn test_comments_are_ignored() {
    let module = parse_source("// leading\nfunc main() { /* inside */ return; }").unwrap();

    assert_eq!(module.declarations[0].body.body.len(), 1);
}

#[test]
fn test_parse_missing_semicolon() {
    let error = parse_source("func main() { x = 1 }").unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedTokenDetailed");
    assert_eq!(*error.get_position(), Position::new(1, 21, 20));
}

#[test]
fn test_parse_illegal_character() {
    let error = parse_source("func main() { x = #; }").unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnrecognisedToken {
            token: "#".to_string()
        }
    );
    assert_eq!(*error.get_position(), Position::new(1, 19, 18));
}

#[test]
fn test_parse_rejects_top_level_statements() {
    let error = parse_source("var x: i32 = 1;").unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedTokenDetailed");
}

#[test]
fn test_parse_rejects_nested_functions() {
    let error = parse_source("func main() { func inner() {} }").unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedTokenDetailed");
}

#[test]
fn test_parse_unterminated_block() {
    let error = parse_source("func main() { return;").unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedTokenDetailed");
}

#[test]
fn test_parse_number_overflow() {
    let error = parse_source("func main() { 99999999999999999999; }").unwrap_err();

    assert_eq!(error.get_error_name(), "NumberParseError");
}
