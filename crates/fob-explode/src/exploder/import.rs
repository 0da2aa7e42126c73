use oxc_ast::ast::{ImportDeclaration, ImportDeclarationSpecifier, ImportOrExportKind};
use oxc_span::GetSpan;

use super::{ExplodeContext, export_name};
use crate::error::{ExplodeError, Result};
use crate::model::{ExplodedModule, ModuleSpecifier, SpecifierKind};

/// `import ... from "m"` and `import "m"`.
pub(super) fn explode_import(
    cx: &ExplodeContext<'_, '_, '_>,
    node: &ImportDeclaration<'_>,
    exploded: &mut ExplodedModule<'_>,
) -> Result<()> {
    let source = Some(node.source.value.as_str());
    let declaration_kind = specifier_kind(node.import_kind);

    let specifiers = match &node.specifiers {
        Some(specifiers) if !specifiers.is_empty() => specifiers,
        _ => {
            // evaluated for side effects only
            exploded
                .imports
                .push(ModuleSpecifier::source_only(source, cx.meta.location(node.span)));
            return Ok(());
        }
    };

    for specifier in specifiers {
        if let Some(phase) = &node.phase {
            return Err(ExplodeError::UnrecognizedSpecifier {
                kind: format!("{} ({:?} phase)", specifier_tag(specifier), phase),
                start: specifier.span().start,
            });
        }

        let (kind, local, external) = match specifier {
            ImportDeclarationSpecifier::ImportSpecifier(named) => {
                let kind = if named.import_kind.is_type() {
                    SpecifierKind::Type
                } else {
                    declaration_kind
                };
                (
                    Some(kind),
                    named.local.name.as_str(),
                    Some(export_name(&named.imported)),
                )
            }
            ImportDeclarationSpecifier::ImportDefaultSpecifier(default) => {
                let local = default.local.name.as_str();
                // "default" means nothing to type-only imports; those keep the local name
                let external = if declaration_kind.is_value() {
                    "default"
                } else {
                    local
                };
                (Some(declaration_kind), local, Some(external))
            }
            ImportDeclarationSpecifier::ImportNamespaceSpecifier(namespace) => {
                (None, namespace.local.name.as_str(), None)
            }
        };

        exploded.imports.push(ModuleSpecifier::new(
            kind,
            Some(local),
            external,
            source,
            cx.meta.location(specifier.span()),
        ));
    }

    Ok(())
}

fn specifier_kind(kind: ImportOrExportKind) -> SpecifierKind {
    if kind.is_type() {
        SpecifierKind::Type
    } else {
        SpecifierKind::Value
    }
}

fn specifier_tag(specifier: &ImportDeclarationSpecifier<'_>) -> &'static str {
    match specifier {
        ImportDeclarationSpecifier::ImportSpecifier(_) => "ImportSpecifier",
        ImportDeclarationSpecifier::ImportDefaultSpecifier(_) => "ImportDefaultSpecifier",
        ImportDeclarationSpecifier::ImportNamespaceSpecifier(_) => "ImportNamespaceSpecifier",
    }
}
