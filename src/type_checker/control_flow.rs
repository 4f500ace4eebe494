//! Standalone return-path and reachability validation.
//!
//! Runs over an already type-checked module and needs no scopes or types; it
//! only looks at statement shapes.

use log::debug;

use crate::{
    ast::{
        ast::Module,
        statements::{BlockStmt, Stmt},
    },
    errors::errors::{Error, ErrorImpl},
};

use super::context::TypeCheckerContext;

pub fn validate_control_flow(module: &Module, context: &mut TypeCheckerContext) {
    debug!("validating control flow of module `{}`", module.name);

    for declaration in module.declarations.iter() {
        let returns = block_returns(&declaration.body, context);

        if !returns && !declaration.return_type.is_unit() {
            context.add_error(Error::new(
                ErrorImpl::MissingReturnPath {
                    function: declaration.identifier.clone(),
                },
                declaration.span.start,
            ));
        }
    }
}

fn block_returns(block: &BlockStmt, context: &mut TypeCheckerContext) -> bool {
    let mut returns = false;
    let mut reported_unreachable = false;

    for stmt in block.body.iter() {
        if returns && !reported_unreachable {
            context.add_error(Error::new(
                ErrorImpl::UnreachableStatement,
                stmt.get_span().start,
            ));
            reported_unreachable = true;
        }

        if stmt_returns(stmt, context) {
            returns = true;
        }
    }

    returns
}

fn stmt_returns(stmt: &Stmt, context: &mut TypeCheckerContext) -> bool {
    match stmt {
        Stmt::Return(_) => true,
        Stmt::Block(block) => block_returns(block, context),
        Stmt::If(if_stmt) => {
            let then_returns = block_returns(&if_stmt.then_body, context);
            let else_returns = block_returns(&if_stmt.else_body, context);
            then_returns && else_returns
        }
        Stmt::While(while_stmt) => {
            block_returns(&while_stmt.body, context);
            false
        }
        Stmt::Expression(_) | Stmt::VarDecl(_) => false,
    }
}
