use fob_gen::{Allocator, GenError, ParseOptions, parse};

#[test]
fn parses_module_source() {
    let allocator = Allocator::default();
    let parsed = parse(&allocator, "import a from 'b';\nexport { a };", ParseOptions::default())
        .expect("module should parse");

    assert!(!parsed.has_errors());
    assert_eq!(parsed.ast().body.len(), 2);
    assert_eq!(parsed.source_text, "import a from 'b';\nexport { a };");
}

#[test]
fn rejects_invalid_source_by_default() {
    let allocator = Allocator::default();
    let err = parse(&allocator, "export default from;;;(", ParseOptions::default())
        .err()
        .expect("parse should fail");

    match err {
        GenError::ParseFailed { diagnostics } => assert!(!diagnostics.is_empty()),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn keeps_partial_program_when_allowed() {
    let allocator = Allocator::default();
    let parsed = parse(
        &allocator,
        "var a;\nvar = ;",
        ParseOptions::default().allowing_errors(),
    )
    .expect("errors are allowed");

    assert!(parsed.has_errors());
}

#[test]
fn detects_typescript_from_path() {
    let allocator = Allocator::default();
    let parsed = parse(
        &allocator,
        "export type A = { a: string };",
        ParseOptions::from_path("types.ts"),
    )
    .expect("typescript should parse");

    assert_eq!(parsed.ast().body.len(), 1);
}
