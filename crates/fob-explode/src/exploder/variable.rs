use oxc_ast::ast::VariableDeclaration;

use super::ExplodeContext;
use crate::model::ExplodedModule;

/// Splits `var a, b;` into `var a; var b;`.
///
/// Each piece takes its position from its declarator and its comments from the
/// whole declaration.
pub(super) fn explode_variable<'a>(
    cx: &ExplodeContext<'_, 'a, '_>,
    node: &VariableDeclaration<'_>,
    exploded: &mut ExplodedModule<'a>,
) {
    for declarator in &node.declarations {
        exploded.push_statement(
            cx.decls.single_binding(node, declarator),
            cx.meta.merged(declarator.span, node.span),
        );
    }
}
