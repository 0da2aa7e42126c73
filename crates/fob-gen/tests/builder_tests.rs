//! Tests for the declaration and program builders

use fob_gen::{Allocator, DeclarationBuilder, GenError, ParseOptions, ProgramBuilder, parse};
use oxc_ast::ast::{ExportDefaultDeclarationKind, Statement, VariableDeclarationKind};
use oxc_span::{GetSpan, SPAN};

fn default_export_value<'p, 'a>(
    program: &'p oxc_ast::ast::Program<'a>,
) -> &'p ExportDefaultDeclarationKind<'a> {
    match &program.body[0] {
        Statement::ExportDefaultDeclaration(export) => &export.declaration,
        other => panic!("expected export default, got {:?}", other.span()),
    }
}

#[test]
fn test_const_binding() {
    let allocator = Allocator::default();
    let decls = DeclarationBuilder::new(&allocator);

    let value = decls.ast().expression_identifier(SPAN, "a");
    let stmt = decls.const_binding(SPAN, "_default", value);

    let Statement::VariableDeclaration(declaration) = &stmt else {
        panic!("expected a variable declaration");
    };
    assert_eq!(declaration.kind, VariableDeclarationKind::Const);
    assert_eq!(declaration.declarations.len(), 1);

    let mut program = ProgramBuilder::new(&allocator);
    program.push(stmt);
    let code = program.generate().unwrap();
    assert!(code.contains("const _default = a"));
}

#[test]
fn test_single_binding_keeps_keyword() {
    let allocator = Allocator::default();
    let parsed = parse(&allocator, "let a = 1, b = 2;", ParseOptions::default()).unwrap();
    let Statement::VariableDeclaration(declaration) = &parsed.program.body[0] else {
        panic!("expected a variable declaration");
    };

    let decls = DeclarationBuilder::new(&allocator);
    let mut program = ProgramBuilder::new(&allocator);
    for declarator in &declaration.declarations {
        let stmt = decls.single_binding(declaration, declarator);
        assert_eq!(stmt.span(), declarator.span);
        program.push(stmt);
    }

    assert_eq!(program.len(), 2);
    let code = program.generate().unwrap();
    assert!(code.contains("let a = 1;"));
    assert!(code.contains("let b = 2;"));
}

#[test]
fn test_anonymous_function_becomes_expression() {
    let allocator = Allocator::default();
    let parsed = parse(
        &allocator,
        "export default async function() {}",
        ParseOptions::default(),
    )
    .unwrap();

    let decls = DeclarationBuilder::new(&allocator);
    let value = decls
        .into_expression(default_export_value(&parsed.program))
        .unwrap();
    assert!(matches!(value, oxc_ast::ast::Expression::FunctionExpression(_)));

    let mut program = ProgramBuilder::new(&allocator);
    program.push(decls.const_binding(SPAN, "_default", value));
    let code = program.generate().unwrap();
    assert!(code.contains("const _default = async function()"));
}

#[test]
fn test_anonymous_class_becomes_expression() {
    let allocator = Allocator::default();
    let parsed = parse(&allocator, "export default class {}", ParseOptions::default()).unwrap();

    let decls = DeclarationBuilder::new(&allocator);
    let value = decls
        .into_expression(default_export_value(&parsed.program))
        .unwrap();
    assert!(matches!(value, oxc_ast::ast::Expression::ClassExpression(_)));
}

#[test]
fn test_interface_is_not_an_expression() {
    let allocator = Allocator::default();
    let parsed = parse(
        &allocator,
        "export default interface A {}",
        ParseOptions::typescript(),
    )
    .unwrap();

    let decls = DeclarationBuilder::new(&allocator);
    let err = decls
        .into_expression(default_export_value(&parsed.program))
        .unwrap_err();
    assert!(matches!(err, GenError::InvalidAst { .. }));
}

#[test]
fn test_empty_program() {
    let allocator = Allocator::default();
    let program = ProgramBuilder::new(&allocator);
    assert!(program.is_empty());

    let mut out = Vec::new();
    program.write_to(&mut out).unwrap();
    assert!(out.is_empty());
}
