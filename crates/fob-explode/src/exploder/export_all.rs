use oxc_ast::ast::ExportAllDeclaration;

use super::{ExplodeContext, export_name};
use crate::model::{ExplodedModule, ModuleSpecifier};

/// `export * from "m"` and `export * as ns from "m"`.
///
/// Neither form has a local binding; the namespace form keeps its exported name.
pub(super) fn explode_export_all(
    cx: &ExplodeContext<'_, '_, '_>,
    node: &ExportAllDeclaration<'_>,
    exploded: &mut ExplodedModule<'_>,
) {
    let external = node.exported.as_ref().map(export_name);
    exploded.exports.push(ModuleSpecifier::new(
        None,
        None,
        external,
        Some(node.source.value.as_str()),
        cx.meta.location(node.span),
    ));
}
