use oxc_allocator::CloneIn;
use oxc_ast::ast::{BindingIdentifier, Declaration, ExportNamedDeclaration, Statement};
use oxc_span::{GetSpan, Span};

use super::{ExplodeContext, export_name};
use crate::error::{ExplodeError, Result};
use crate::model::{ExplodedModule, ModuleSpecifier};
use crate::root::statement_kind;

/// `export <declaration>`, `export { a, b as c }` and `export { a } from "m"`.
pub(super) fn explode_export_named<'a>(
    cx: &ExplodeContext<'_, 'a, '_>,
    node: &ExportNamedDeclaration<'_>,
    exploded: &mut ExplodedModule<'a>,
) -> Result<()> {
    let source = node.source.as_ref().map(|source| source.value.as_str());

    let Some(declaration) = &node.declaration else {
        for specifier in &node.specifiers {
            let external = export_name(&specifier.exported);
            // without an alias the local clause is the exported name itself
            let local = export_name(&specifier.local);
            exploded.exports.push(ModuleSpecifier::new(
                None,
                Some(local),
                Some(external),
                source,
                cx.meta.location(specifier.span),
            ));
        }
        return Ok(());
    };

    let alloc = cx.allocator();
    match declaration {
        Declaration::VariableDeclaration(variable) => {
            let location = cx.meta.location(variable.span);
            for declarator in &variable.declarations {
                for ident in declarator.id.get_binding_identifiers() {
                    let name = ident.name.as_str();
                    exploded.exports.push(ModuleSpecifier::new(
                        None,
                        Some(name),
                        Some(name),
                        source,
                        location,
                    ));
                }
                exploded.push_statement(
                    cx.decls.single_binding(variable, declarator),
                    cx.meta.merged(declarator.span, node.span),
                );
            }
            Ok(())
        }
        Declaration::FunctionDeclaration(function) => export_declared(
            cx,
            exploded,
            node.span,
            function.id.as_ref(),
            function.span,
            source,
            Statement::FunctionDeclaration(function.clone_in(alloc)),
        ),
        Declaration::ClassDeclaration(class) => export_declared(
            cx,
            exploded,
            node.span,
            class.id.as_ref(),
            class.span,
            source,
            Statement::ClassDeclaration(class.clone_in(alloc)),
        ),
        Declaration::TSTypeAliasDeclaration(alias) => export_declared(
            cx,
            exploded,
            node.span,
            Some(&alias.id),
            alias.span,
            source,
            Statement::TSTypeAliasDeclaration(alias.clone_in(alloc)),
        ),
        Declaration::TSInterfaceDeclaration(interface) => export_declared(
            cx,
            exploded,
            node.span,
            Some(&interface.id),
            interface.span,
            source,
            Statement::TSInterfaceDeclaration(interface.clone_in(alloc)),
        ),
        other => Err(ExplodeError::unrecognized_declaration(
            declaration_kind(other),
            other.span().start,
        )),
    }
}

/// Exports a named declaration under its own name and keeps it as a statement.
///
/// Comments come from the whole `export` statement, since the parser attaches
/// leading comments to the `export` keyword.
fn export_declared<'a>(
    cx: &ExplodeContext<'_, 'a, '_>,
    exploded: &mut ExplodedModule<'a>,
    export_span: Span,
    id: Option<&BindingIdentifier<'_>>,
    span: Span,
    source: Option<&str>,
    statement: Statement<'a>,
) -> Result<()> {
    let Some(id) = id else {
        return Err(ExplodeError::unrecognized_declaration(
            statement_kind(&statement),
            span.start,
        ));
    };

    let name = id.name.as_str();
    exploded.exports.push(ModuleSpecifier::new(
        None,
        Some(name),
        Some(name),
        source,
        cx.meta.location(span),
    ));
    exploded.push_statement(statement, cx.meta.merged(span, export_span));
    Ok(())
}

fn declaration_kind(declaration: &Declaration<'_>) -> &'static str {
    match declaration {
        Declaration::VariableDeclaration(_) => "VariableDeclaration",
        Declaration::FunctionDeclaration(_) => "FunctionDeclaration",
        Declaration::ClassDeclaration(_) => "ClassDeclaration",
        Declaration::TSTypeAliasDeclaration(_) => "TSTypeAliasDeclaration",
        Declaration::TSInterfaceDeclaration(_) => "TSInterfaceDeclaration",
        Declaration::TSEnumDeclaration(_) => "TSEnumDeclaration",
        Declaration::TSModuleDeclaration(_) => "TSModuleDeclaration",
        Declaration::TSImportEqualsDeclaration(_) => "TSImportEqualsDeclaration",
        #[allow(unreachable_patterns)]
        _ => "Declaration",
    }
}
