//! Integration tests for the complete front-end.
//!
//! Source text is driven through tokenization, parsing and every semantic
//! pass, then the diagnostics and annotations are checked.

use compiler_frontend::{
    ast::{
        ast::Module,
        expressions::{Expr, ExprKind},
        statements::{BlockStmt, Stmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::lexer::tokenize,
    parser::parser::parse,
    render_error,
    type_checker::{context::TypeCheckerContext, type_check, CheckerConfig},
    Position,
};

fn check_source_with(source: &str, config: &CheckerConfig) -> (Module, TypeCheckerContext) {
    let tokens = tokenize(source, "test.lang");
    let mut module = match parse(tokens, "test") {
        Ok(module) => module,
        Err(error) => panic!("failed to parse: {}", error),
    };
    let context = type_check(&mut module, config);
    (module, context)
}

fn check_source(source: &str) -> (Module, TypeCheckerContext) {
    check_source_with(source, &CheckerConfig::default())
}

fn error_names(errors: &[Error]) -> Vec<&str> {
    errors.iter().map(|error| error.get_error_name()).collect()
}

fn assert_expr_typed(expr: &Expr) {
    assert!(
        expr.inferred_type().is_some() && expr.value_category().is_some(),
        "expression at {} was not annotated",
        expr.span.start
    );

    match &expr.kind {
        ExprKind::Literal(_) | ExprKind::VarRef(_) => {}
        ExprKind::Array { elements, .. } => elements.iter().for_each(assert_expr_typed),
        ExprKind::Unary { operand, .. } => assert_expr_typed(operand),
        ExprKind::Binary { left, right, .. } => {
            assert_expr_typed(left);
            assert_expr_typed(right);
        }
        ExprKind::Assignment { target, value, .. } => {
            assert_expr_typed(target);
            assert_expr_typed(value);
        }
        ExprKind::HeapAlloc(value) => assert_expr_typed(value),
        ExprKind::Call { callee, arguments } => {
            assert_expr_typed(callee);
            arguments.iter().for_each(assert_expr_typed);
        }
    }
}

fn assert_block_typed(block: &BlockStmt) {
    for stmt in block.body.iter() {
        match stmt {
            Stmt::Expression(expr) => assert_expr_typed(expr),
            Stmt::Block(block) => assert_block_typed(block),
            Stmt::If(if_stmt) => {
                assert_expr_typed(&if_stmt.condition);
                assert_block_typed(&if_stmt.then_body);
                assert_block_typed(&if_stmt.else_body);
            }
            Stmt::While(while_stmt) => {
                assert_expr_typed(&while_stmt.condition);
                assert_block_typed(&while_stmt.body);
            }
            Stmt::Return(return_stmt) => {
                if let Some(value) = &return_stmt.value {
                    assert_expr_typed(value);
                }
            }
            Stmt::VarDecl(var_decl) => assert_expr_typed(&var_decl.value),
        }
    }
}

const VALID_PROGRAM: &str = r#"
// Recursive, forward-referenced and pointer-heavy code.
func main() {
    var total: i32 = 0;
    var i: i32 = 0;
    while (i < 10) {
        total += fib(i);
        i = i + 1;
    }

    var p: *i32 = new total;
    *p = *p * 2;

    var values: [f32; 3] = [f32: 1.0, 2.5, -3.0];
    var greeting: string = "hello" + ", world";
    var ok: bool = !(total == 0) && 'a' < 'b';
    var apply: func(i32) -> i32 = fib;
    apply(3);
    var bits: i32 = (total << 2) | 1 ^ 3 & 7 % 4;
    var nothing: () = ();
}

func fib(n: i32) -> i32 {
    if (n < 2) {
        return n;
    }
    return fib(n - 1) + fib(n - 2);
}

func sign(x: f32) -> i32 {
    if (x < 0.0) {
        return -1;
    } else if (x > 0.0) {
        return 1;
    } else {
        return 0;
    }
}
"#;

#[test]
fn test_valid_program_has_no_diagnostics() {
    let (module, context) = check_source(VALID_PROGRAM);

    assert!(!context.has_errors(), "{:?}", context.get_errors());
    assert_eq!(module.declarations.len(), 3);
    assert!(context.namespace().contains("fib"));
    assert!(context.namespace().contains("sign"));
}

#[test]
fn test_every_expression_is_annotated() {
    let (module, _) = check_source(VALID_PROGRAM);

    for declaration in module.declarations.iter() {
        assert_block_typed(&declaration.body);
    }
}

#[test]
fn test_invalid_program_is_fully_annotated() {
    let (module, context) = check_source(
        "func main() {\n    var x: i32 = y + 1;\n    x(1, z);\n    if (x) { }\n}\n",
    );

    assert_eq!(
        error_names(context.get_errors()),
        vec![
            "UnknownSymbol",
            "FuncCallNonFunction",
            "UnknownSymbol",
            "IfConditionInvalidType"
        ]
    );
    assert_block_typed(&module.declarations[0].body);
}

#[test]
fn test_diagnostic_positions() {
    let (_, context) = check_source("func main() {\n    var x: i32 = true;\n}\n");

    let errors = context.get_errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(*errors[0].get_position(), Position::new(2, 18, 31));
    assert_eq!(
        errors[0].to_string(),
        "2:18: variable 'x' declared as 'i32' but initialized with 'bool'"
    );
}

#[test]
fn test_rendered_diagnostic() {
    let source = "func main() {\n    var x: i32 = true;\n}\n";
    let (_, context) = check_source(source);

    let rendered = render_error(&context.get_errors()[0], source, "test.lang");
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines[0], "Error: VariableDeclTypeMismatch");
    assert_eq!(lines[1], "-> test.lang");
    assert_eq!(lines[3], "2 | var x: i32 = true;");
    assert_eq!(lines[4], "  | -------------^");
}

#[test]
fn test_nested_error_reported_once() {
    let (_, context) = check_source(
        "func main() {\n    var x: i32 = -(1 + \"a\") * 2 == 3;\n}\n",
    );

    assert_eq!(
        error_names(context.get_errors()),
        vec!["BinaryOperatorNotFound"]
    );
}

#[test]
fn test_function_redeclaration() {
    let (_, context) = check_source(
        "func f() -> i32 { return 1; }\nfunc f(x: bool) -> bool { return x; }\nfunc main() { var y: i32 = f(); }\n",
    );

    let errors = context.get_errors();
    assert_eq!(error_names(errors), vec!["FunctionRedeclaration"]);
    assert_eq!(*errors[0].get_position(), Position::new(2, 1, 30));
    assert_eq!(
        errors[0].to_string(),
        "2:1: illegal redeclaration of function 'f'"
    );
}

#[test]
fn test_mutual_recursion() {
    let (_, context) = check_source(
        "func even(n: u32) -> bool { return odd(n); }\nfunc odd(n: u32) -> bool { return even(n); }\n",
    );

    assert!(!context.has_errors(), "{:?}", context.get_errors());
}

#[test]
fn test_shadowing_across_blocks() {
    let (_, context) = check_source(
        "func main() {\n    var x: i32 = 1;\n    {\n        var x: string = \"inner\";\n        var s: string = x + \"!\";\n    }\n    var y: i32 = x * 2;\n}\n",
    );

    assert!(!context.has_errors(), "{:?}", context.get_errors());
}

#[test]
fn test_unreachable_statement() {
    let (_, context) = check_source(
        "func f() -> i32 {\n    return 1;\n    return 2;\n    return 3;\n}\n",
    );

    let errors = context.get_errors();
    assert_eq!(error_names(errors), vec!["UnreachableStatement"]);
    assert_eq!(*errors[0].get_position(), Position::new(3, 5, 36));
}

#[test]
fn test_missing_return_path() {
    let (_, context) = check_source(
        "func f(flag: bool) -> i32 {\n    if (flag) {\n        return 1;\n    }\n}\n",
    );

    let errors = context.get_errors();
    assert_eq!(error_names(errors), vec!["MissingReturnPath"]);
    assert_eq!(*errors[0].get_position(), Position::new(1, 1, 0));
}

#[test]
fn test_control_flow_pass_reports_again() {
    let source = "func f(flag: bool) -> i32 {\n    if (flag) {\n        return 1;\n    }\n}\n";
    let config = CheckerConfig {
        validate_control_flow: true,
    };
    let (_, context) = check_source_with(source, &config);

    assert_eq!(
        error_names(context.get_errors()),
        vec!["MissingReturnPath", "MissingReturnPath"]
    );
}

#[test]
fn test_assignment_rules() {
    let (_, context) = check_source(
        "func main() {\n    var x: i32 = 1;\n    x += 2;\n    3 += 4;\n    x = \"s\";\n    var p: *bool = new true;\n    *p = false;\n}\n",
    );

    let errors = context.get_errors();
    assert_eq!(
        error_names(errors),
        vec!["CannotAssignToRValue", "AssignmentOperatorIncompatibleTypes"]
    );
    assert_eq!(errors[0].get_kind(), &ErrorImpl::CannotAssignToRValue);
}

#[test]
fn test_call_diagnostics() {
    let (_, context) = check_source(
        "func add(a: i32, b: i32) -> i32 { return a + b; }\nfunc main() {\n    var x: i32 = add(1);\n    var y: i32 = add(1, 2.0);\n}\n",
    );

    let errors = context.get_errors();
    assert_eq!(
        error_names(errors),
        vec!["FuncCallArgMismatch", "FuncCallArgTypeMismatch"]
    );
    assert_eq!(
        errors[1].get_kind(),
        &ErrorImpl::FuncCallArgTypeMismatch {
            index: 1,
            expected: "i32".to_string(),
            received: "f32".to_string(),
        }
    );
}

#[test]
fn test_syntax_error_stops_pipeline() {
    let tokens = tokenize("func main() { var x: i32 = ; }", "test.lang");
    let error = parse(tokens, "test").unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(*error.get_position(), Position::new(1, 28, 27));
}
