//! Signature collection pass.
//!
//! Registers every top-level function's type before any body is checked, so
//! calls may refer to functions declared later in the module.

use log::debug;

use crate::{
    ast::ast::Module,
    errors::errors::{Error, ErrorImpl},
};

use super::context::TypeCheckerContext;

pub fn explore_module(module: &Module, context: &mut TypeCheckerContext) {
    debug!("exploring module `{}`", module.name);

    for declaration in module.declarations.iter() {
        let function_type = declaration.function_type();

        if context
            .namespace_mut()
            .register(&declaration.identifier, function_type)
        {
            debug!(
                "registered function `{}`",
                declaration.identifier
            );
        } else {
            context.add_error(Error::new(
                ErrorImpl::FunctionRedeclaration {
                    function: declaration.identifier.clone(),
                },
                declaration.span.start,
            ));
        }
    }
}
