//! Splits a module body into imports, exports and plain statements.
//!
//! Each recognized top-level item kind has a handler that writes into the
//! shared [`ExplodedModule`]; every other item is copied through untouched.

mod export_all;
mod export_default;
mod export_named;
mod import;
mod variable;

pub use export_default::SYNTHESIZED_DEFAULT;

use fob_gen::{DeclarationBuilder, ParseOptions, parse};
use oxc_allocator::{Allocator, CloneIn};
use oxc_ast::ast::{
    ExportAllDeclaration, ExportDefaultDeclaration, ExportNamedDeclaration, ImportDeclaration,
    ModuleExportName, Statement, VariableDeclaration,
};
use oxc_span::GetSpan;

use crate::error::Result;
use crate::metadata::MetadataCopier;
use crate::model::ExplodedModule;
use crate::options::ExplodeOptions;
use crate::root::{ModuleRoot, statement_kind};

/// Explodes module bodies into canonical import/export records.
///
/// The exploder holds no per-call state, so one instance can serve any number
/// of `explode` calls. Output nodes are allocated in the exploder's arena; the
/// input tree is only read.
pub struct ModuleExploder<'a> {
    decls: DeclarationBuilder<'a>,
    options: ExplodeOptions,
}

impl<'a> ModuleExploder<'a> {
    /// Create an exploder with default options.
    pub fn new(allocator: &'a Allocator) -> Self {
        Self::with_options(allocator, ExplodeOptions::default())
    }

    /// Create an exploder with the provided options.
    pub fn with_options(allocator: &'a Allocator, options: ExplodeOptions) -> Self {
        Self {
            decls: DeclarationBuilder::new(allocator),
            options,
        }
    }

    pub fn options(&self) -> &ExplodeOptions {
        &self.options
    }

    /// Explode a compilation unit or program.
    ///
    /// # Errors
    ///
    /// - [`InvalidRoot`](crate::ExplodeError::InvalidRoot) when `root` is
    ///   neither a compilation unit nor a program.
    /// - [`UnrecognizedSpecifier`](crate::ExplodeError::UnrecognizedSpecifier)
    ///   for import specifiers outside the default/named/namespace forms.
    /// - [`UnrecognizedDeclaration`](crate::ExplodeError::UnrecognizedDeclaration)
    ///   for exported declarations the exploder cannot split.
    pub fn explode<'s, 'src: 's>(
        &self,
        root: impl Into<ModuleRoot<'s, 'src>>,
    ) -> Result<ExplodedModule<'a>> {
        let program = root.into().program()?;
        let cx = ExplodeContext {
            decls: &self.decls,
            meta: MetadataCopier::new(program, self.options.attach_comments),
        };

        let mut exploded = ExplodedModule::default();
        for item in &program.body {
            match ModuleItem::classify(item) {
                ModuleItem::Import(node) => import::explode_import(&cx, node, &mut exploded)?,
                ModuleItem::ExportDefault(node) => {
                    export_default::explode_export_default(&cx, node, &mut exploded)?
                }
                ModuleItem::ExportNamed(node) => {
                    export_named::explode_export_named(&cx, node, &mut exploded)?
                }
                ModuleItem::ExportAll(node) => {
                    export_all::explode_export_all(&cx, node, &mut exploded)
                }
                ModuleItem::Variable(node) => variable::explode_variable(&cx, node, &mut exploded),
                // dropped
                ModuleItem::Empty => {}
                ModuleItem::Other(statement) => {
                    tracing::trace!(kind = statement_kind(statement), "passing statement through");
                    exploded.push_statement(
                        statement.clone_in(cx.allocator()),
                        cx.meta.metadata(statement.span()),
                    );
                }
            }
        }

        tracing::debug!(
            imports = exploded.imports.len(),
            exports = exploded.exports.len(),
            statements = exploded.statements.len(),
            "exploded module"
        );
        Ok(exploded)
    }

    /// Parse `source` with the exploder's allocator and explode the result.
    pub fn explode_source(
        &self,
        source: &'a str,
        options: ParseOptions,
    ) -> Result<ExplodedModule<'a>> {
        let parsed = parse(self.decls.ast().allocator, source, options)?;
        self.explode(&parsed)
    }
}

/// Explode `root` with a one-off [`ModuleExploder`].
pub fn explode_module<'a, 's, 'src: 's>(
    allocator: &'a Allocator,
    root: impl Into<ModuleRoot<'s, 'src>>,
) -> Result<ExplodedModule<'a>> {
    ModuleExploder::new(allocator).explode(root)
}

/// State shared by the handlers during one `explode` call.
pub(crate) struct ExplodeContext<'e, 'a, 's> {
    decls: &'e DeclarationBuilder<'a>,
    meta: MetadataCopier<'s>,
}

impl<'a> ExplodeContext<'_, 'a, '_> {
    fn allocator(&self) -> &'a Allocator {
        self.decls.ast().allocator
    }
}

/// Top-level item kinds the exploder distinguishes.
enum ModuleItem<'s, 'src> {
    Import(&'s ImportDeclaration<'src>),
    ExportDefault(&'s ExportDefaultDeclaration<'src>),
    ExportNamed(&'s ExportNamedDeclaration<'src>),
    ExportAll(&'s ExportAllDeclaration<'src>),
    Variable(&'s VariableDeclaration<'src>),
    Empty,
    Other(&'s Statement<'src>),
}

impl<'s, 'src> ModuleItem<'s, 'src> {
    fn classify(statement: &'s Statement<'src>) -> Self {
        match statement {
            Statement::ImportDeclaration(node) => Self::Import(node),
            Statement::ExportDefaultDeclaration(node) => Self::ExportDefault(node),
            Statement::ExportNamedDeclaration(node) => Self::ExportNamed(node),
            Statement::ExportAllDeclaration(node) => Self::ExportAll(node),
            Statement::VariableDeclaration(node) => Self::Variable(node),
            Statement::EmptyStatement(_) => Self::Empty,
            other => Self::Other(other),
        }
    }
}

/// The name carried by an import/export clause; string names use their value.
fn export_name<'n>(name: &'n ModuleExportName<'_>) -> &'n str {
    match name {
        ModuleExportName::IdentifierName(ident) => ident.name.as_str(),
        ModuleExportName::IdentifierReference(ident) => ident.name.as_str(),
        ModuleExportName::StringLiteral(literal) => literal.value.as_str(),
    }
}
