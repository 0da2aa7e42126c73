#![allow(dead_code)]

use fob_explode::{ExplodedModule, ModuleExploder, ModuleSpecifier, SpecifierKind};
use fob_gen::{Allocator, ParseOptions, ProgramBuilder};
use oxc_allocator::CloneIn;

pub fn explode<'a>(allocator: &'a Allocator, source: &'a str) -> ExplodedModule<'a> {
    ModuleExploder::new(allocator)
        .explode_source(source, ParseOptions::default())
        .expect("module should explode")
}

pub fn explode_ts<'a>(allocator: &'a Allocator, source: &'a str) -> ExplodedModule<'a> {
    ModuleExploder::new(allocator)
        .explode_source(source, ParseOptions::typescript())
        .expect("module should explode")
}

/// Prints every output statement on its own, trimmed.
pub fn printed(allocator: &Allocator, module: &ExplodedModule<'_>) -> Vec<String> {
    module
        .statements
        .iter()
        .map(|exploded| {
            let mut program = ProgramBuilder::new(allocator);
            program.push(exploded.statement.clone_in(allocator));
            program
                .generate()
                .expect("codegen should succeed")
                .trim()
                .to_string()
        })
        .collect()
}

/// `(kind, local, external, source)` of a specifier, for compact assertions.
pub fn fields(
    specifier: &ModuleSpecifier,
) -> (Option<SpecifierKind>, Option<&str>, Option<&str>, Option<&str>) {
    (
        specifier.kind,
        specifier.local.as_deref(),
        specifier.external.as_deref(),
        specifier.source.as_deref(),
    )
}
