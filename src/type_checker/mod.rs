//! Semantic analysis.
//!
//! Three passes share one [`TypeCheckerContext`] per compilation unit:
//!
//! - exploration registers every function signature in the global namespace
//! - type checking annotates every expression with a type and value category
//! - control-flow validation (optional) re-checks return paths and reachability
//!
//! Semantic faults are accumulated as diagnostics in discovery order. Broken
//! pipeline invariants panic through `INTERNAL_ERROR!` instead.

pub mod context;
pub mod control_flow;
pub mod exploration;
pub mod operators;
pub mod scope;
pub mod type_checker;


use std::time::Instant;

use log::{debug, info};

use crate::ast::ast::Module;

use self::{
    context::TypeCheckerContext, control_flow::validate_control_flow,
    exploration::explore_module, type_checker::TypeChecker,
};

/// Pass composition for one run of [`type_check`].
#[derive(Debug, Clone, Default)]
pub struct CheckerConfig {
    /// Also run the standalone control-flow pass after type checking. The
    /// type checker already performs the same checks inline, so enabling this
    /// reports return-path and reachability faults twice.
    pub validate_control_flow: bool,
}

pub fn type_check(module: &mut Module, config: &CheckerConfig) -> TypeCheckerContext {
    let mut context = TypeCheckerContext::new();

    let start = Instant::now();
    explore_module(module, &mut context);
    TypeChecker::new(&mut context).check_module(module);

    if config.validate_control_flow {
        validate_control_flow(module, &mut context);
    }

    info!(
        "type checked module `{}` in {:?}",
        module.name,
        start.elapsed()
    );
    debug!("{} diagnostic(s) reported", context.get_errors().len());

    context
}
