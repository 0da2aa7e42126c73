//! Declaration builders used when rewriting module items
//!
//! Every builder copies what it needs out of the borrowed input nodes into the
//! builder's arena, so the input tree is never touched.

use crate::error::{GenError, Result};
use oxc_allocator::{Allocator, CloneIn};
use oxc_ast::ast::*;
use oxc_ast::{AstBuilder, NONE};
use oxc_span::Span;

/// Builder for single-binding variable declarations
pub struct DeclarationBuilder<'a> {
    ast: AstBuilder<'a>,
}

impl<'a> DeclarationBuilder<'a> {
    /// Create a new declaration builder
    pub fn new(allocator: &'a Allocator) -> Self {
        Self {
            ast: AstBuilder::new(allocator),
        }
    }

    /// Get the underlying AST builder
    pub fn ast(&self) -> &AstBuilder<'a> {
        &self.ast
    }

    /// Build `const <name> = <init>;`
    ///
    /// Both the declaration and its declarator take `span`.
    pub fn const_binding(&self, span: Span, name: &str, init: Expression<'a>) -> Statement<'a> {
        let kind = VariableDeclarationKind::Const;
        let id = self.ast.binding_pattern(
            self.ast
                .binding_pattern_kind_binding_identifier(span, self.ast.atom(name)),
            NONE,
            false,
        );
        let declarator = self
            .ast
            .variable_declarator(span, kind, id, Some(init), false);

        Statement::VariableDeclaration(self.ast.alloc_variable_declaration(
            span,
            kind,
            self.ast.vec1(declarator),
            false,
        ))
    }

    /// Build a declaration holding only `declarator`
    ///
    /// Keeps the declaration keyword and `declare` modifier of `declaration`
    /// and takes the declarator's span.
    pub fn single_binding(
        &self,
        declaration: &VariableDeclaration<'_>,
        declarator: &VariableDeclarator<'_>,
    ) -> Statement<'a> {
        let declarator = declarator.clone_in(self.ast.allocator);

        Statement::VariableDeclaration(self.ast.alloc_variable_declaration(
            declarator.span,
            declaration.kind,
            self.ast.vec1(declarator),
            declaration.declare,
        ))
    }

    /// Convert the value of `export default` into an expression
    ///
    /// Function and class declarations become function and class expressions;
    /// expressions are copied as they are.
    pub fn into_expression(
        &self,
        declaration: &ExportDefaultDeclarationKind<'_>,
    ) -> Result<Expression<'a>> {
        match declaration {
            ExportDefaultDeclarationKind::FunctionDeclaration(function) => {
                let mut function = function.clone_in(self.ast.allocator);
                function.r#type = FunctionType::FunctionExpression;
                Ok(Expression::FunctionExpression(function))
            }
            ExportDefaultDeclarationKind::ClassDeclaration(class) => {
                let mut class = class.clone_in(self.ast.allocator);
                class.r#type = ClassType::ClassExpression;
                Ok(Expression::ClassExpression(class))
            }
            ExportDefaultDeclarationKind::TSInterfaceDeclaration(_) => Err(
                GenError::invalid_ast("TSInterfaceDeclaration", "not convertible to an expression"),
            ),
            other => other
                .as_expression()
                .map(|expression| expression.clone_in(self.ast.allocator))
                .ok_or_else(|| {
                    GenError::invalid_ast("ExportDefaultDeclarationKind", "unknown variant")
                }),
        }
    }
}
