//! Assembles loose statements into a program and prints it

use crate::error::{GenError, Result};
use oxc_allocator::Allocator;
use oxc_ast::AstBuilder;
use oxc_ast::ast::*;
use oxc_codegen::Codegen;
use oxc_span::{SPAN, SourceType};
use std::io::Write;

/// Incremental program builder
///
/// Collects statements that no longer belong to any program (for example the
/// output of a module rewrite) and turns them back into one.
pub struct ProgramBuilder<'a> {
    ast: AstBuilder<'a>,
    body: Vec<Statement<'a>>,
    source_type: SourceType,
}

impl<'a> ProgramBuilder<'a> {
    /// Create a new program builder for an ES module
    pub fn new(allocator: &'a Allocator) -> Self {
        Self::with_source_type(allocator, SourceType::mjs())
    }

    /// Create a new program builder with specific source type
    pub fn with_source_type(allocator: &'a Allocator, source_type: SourceType) -> Self {
        Self {
            ast: AstBuilder::new(allocator),
            body: Vec::new(),
            source_type,
        }
    }

    /// Add a statement to the program
    pub fn push(&mut self, stmt: Statement<'a>) {
        self.body.push(stmt);
    }

    /// Add multiple statements to the program
    pub fn extend(&mut self, stmts: impl IntoIterator<Item = Statement<'a>>) {
        self.body.extend(stmts);
    }

    /// Get the current number of statements
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the builder is empty
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Write the generated program to `writer`
    pub fn write_to<W: Write>(self, writer: &mut W) -> Result<()> {
        let code = self.generate()?;
        writer
            .write_all(code.as_bytes())
            .map_err(|e| GenError::codegen_failed_with_reason("Write error", e.to_string()))
    }

    /// Generate the complete program as a string
    pub fn generate(self) -> Result<String> {
        let program = self.build_program();
        Ok(Codegen::new().build(&program).code)
    }

    /// Build the program AST
    pub fn build_program(self) -> Program<'a> {
        let body = self.ast.vec_from_iter(self.body);
        self.ast.program(
            SPAN,
            self.source_type,
            "",
            self.ast.vec(), // comments
            None,           // hashbang
            self.ast.vec(), // directives
            body,
        )
    }
}
