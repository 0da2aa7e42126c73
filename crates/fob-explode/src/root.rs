use fob_gen::ParsedProgram;
use oxc_ast::ast::{Program, Statement};

use crate::error::{ExplodeError, Result};

/// The node handed to [`ModuleExploder::explode`](crate::ModuleExploder::explode).
///
/// Only a compilation unit or a program can be exploded; anything else is
/// rejected with [`ExplodeError::InvalidRoot`].
#[derive(Clone, Copy)]
pub enum ModuleRoot<'s, 'src> {
    /// A whole compilation unit; unwrapped to its program.
    Unit(&'s ParsedProgram<'src>),
    /// A top-level body.
    Program(&'s Program<'src>),
    /// Any single statement.
    Statement(&'s Statement<'src>),
}

impl<'s, 'src> ModuleRoot<'s, 'src> {
    pub(crate) fn program(self) -> Result<&'s Program<'src>> {
        match self {
            Self::Unit(unit) => Ok(&unit.program),
            Self::Program(program) => Ok(program),
            Self::Statement(statement) => Err(ExplodeError::InvalidRoot {
                kind: statement_kind(statement),
            }),
        }
    }
}

impl<'s, 'src> From<&'s ParsedProgram<'src>> for ModuleRoot<'s, 'src> {
    fn from(unit: &'s ParsedProgram<'src>) -> Self {
        Self::Unit(unit)
    }
}

impl<'s, 'src> From<&'s Program<'src>> for ModuleRoot<'s, 'src> {
    fn from(program: &'s Program<'src>) -> Self {
        Self::Program(program)
    }
}

impl<'s, 'src> From<&'s Statement<'src>> for ModuleRoot<'s, 'src> {
    fn from(statement: &'s Statement<'src>) -> Self {
        Self::Statement(statement)
    }
}

/// ESTree-style kind tag of a statement.
pub(crate) fn statement_kind(statement: &Statement<'_>) -> &'static str {
    match statement {
        Statement::BlockStatement(_) => "BlockStatement",
        Statement::BreakStatement(_) => "BreakStatement",
        Statement::ContinueStatement(_) => "ContinueStatement",
        Statement::DebuggerStatement(_) => "DebuggerStatement",
        Statement::DoWhileStatement(_) => "DoWhileStatement",
        Statement::EmptyStatement(_) => "EmptyStatement",
        Statement::ExpressionStatement(_) => "ExpressionStatement",
        Statement::ForInStatement(_) => "ForInStatement",
        Statement::ForOfStatement(_) => "ForOfStatement",
        Statement::ForStatement(_) => "ForStatement",
        Statement::IfStatement(_) => "IfStatement",
        Statement::LabeledStatement(_) => "LabeledStatement",
        Statement::ReturnStatement(_) => "ReturnStatement",
        Statement::SwitchStatement(_) => "SwitchStatement",
        Statement::ThrowStatement(_) => "ThrowStatement",
        Statement::TryStatement(_) => "TryStatement",
        Statement::WhileStatement(_) => "WhileStatement",
        Statement::WithStatement(_) => "WithStatement",
        Statement::VariableDeclaration(_) => "VariableDeclaration",
        Statement::FunctionDeclaration(_) => "FunctionDeclaration",
        Statement::ClassDeclaration(_) => "ClassDeclaration",
        Statement::TSTypeAliasDeclaration(_) => "TSTypeAliasDeclaration",
        Statement::TSInterfaceDeclaration(_) => "TSInterfaceDeclaration",
        Statement::TSEnumDeclaration(_) => "TSEnumDeclaration",
        Statement::TSModuleDeclaration(_) => "TSModuleDeclaration",
        Statement::TSImportEqualsDeclaration(_) => "TSImportEqualsDeclaration",
        Statement::ImportDeclaration(_) => "ImportDeclaration",
        Statement::ExportAllDeclaration(_) => "ExportAllDeclaration",
        Statement::ExportDefaultDeclaration(_) => "ExportDefaultDeclaration",
        Statement::ExportNamedDeclaration(_) => "ExportNamedDeclaration",
        Statement::TSExportAssignment(_) => "TSExportAssignment",
        Statement::TSNamespaceExportDeclaration(_) => "TSNamespaceExportDeclaration",
        #[allow(unreachable_patterns)]
        _ => "Statement",
    }
}
