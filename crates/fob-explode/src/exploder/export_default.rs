use oxc_allocator::CloneIn;
use oxc_ast::ast::{
    ExportDefaultDeclaration, ExportDefaultDeclarationKind, Expression, Statement,
};
use oxc_span::GetSpan;

use super::ExplodeContext;
use crate::error::{ExplodeError, Result};
use crate::model::{ExplodedModule, ModuleSpecifier};

/// Binding introduced for default exports that have no name of their own.
pub const SYNTHESIZED_DEFAULT: &str = "_default";

/// `export default <value>`.
pub(super) fn explode_export_default<'a>(
    cx: &ExplodeContext<'_, 'a, '_>,
    node: &ExportDefaultDeclaration<'_>,
    exploded: &mut ExplodedModule<'a>,
) -> Result<()> {
    let declaration = &node.declaration;

    let local = match declaration {
        ExportDefaultDeclarationKind::FunctionDeclaration(function) => match &function.id {
            Some(id) => {
                exploded.push_statement(
                    Statement::FunctionDeclaration(function.clone_in(cx.allocator())),
                    cx.meta.merged(function.span, node.span),
                );
                id.name.to_string()
            }
            None => synthesize_default(cx, node, exploded)?,
        },
        ExportDefaultDeclarationKind::ClassDeclaration(class) => match &class.id {
            Some(id) => {
                exploded.push_statement(
                    Statement::ClassDeclaration(class.clone_in(cx.allocator())),
                    cx.meta.merged(class.span, node.span),
                );
                id.name.to_string()
            }
            None => synthesize_default(cx, node, exploded)?,
        },
        ExportDefaultDeclarationKind::TSInterfaceDeclaration(interface) => {
            return Err(ExplodeError::unrecognized_declaration(
                "TSInterfaceDeclaration",
                interface.span.start,
            ));
        }
        // `export default (a)` still names an existing binding
        other => match other.as_expression().map(Expression::without_parentheses) {
            Some(Expression::Identifier(ident)) => ident.name.to_string(),
            _ => synthesize_default(cx, node, exploded)?,
        },
    };

    exploded.exports.push(ModuleSpecifier::new(
        None,
        Some(&local),
        Some("default"),
        None,
        cx.meta.location(node.span),
    ));
    Ok(())
}

/// Binds an anonymous default export to `const _default = <value>`.
fn synthesize_default<'a>(
    cx: &ExplodeContext<'_, 'a, '_>,
    node: &ExportDefaultDeclaration<'_>,
    exploded: &mut ExplodedModule<'a>,
) -> Result<String> {
    let span = node.declaration.span();
    let value = cx.decls.into_expression(&node.declaration)?;
    tracing::trace!(start = span.start, "binding anonymous default export");

    exploded.push_statement(
        cx.decls.const_binding(span, SYNTHESIZED_DEFAULT, value),
        cx.meta.merged(span, node.span),
    );
    Ok(SYNTHESIZED_DEFAULT.to_string())
}
