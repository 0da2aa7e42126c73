//! OXC parser façade and AST construction helpers
//!
//! This crate keeps fob's direct contact with the OXC toolchain in one place:
//!
//! - **Parsing** - [`parse`] turns source text into a [`ParsedProgram`]
//!   (requires the `parser` feature)
//! - **Declaration building** - [`DeclarationBuilder`] creates the
//!   single-binding declarations used when rewriting module items
//! - **Code generation** - [`ProgramBuilder`] reassembles loose statements
//!   into a program and prints it
//!
//! # Examples
//!
//! ```rust
//! use fob_gen::{DeclarationBuilder, ProgramBuilder};
//! use oxc_allocator::Allocator;
//! use oxc_span::SPAN;
//!
//! let allocator = Allocator::default();
//! let decls = DeclarationBuilder::new(&allocator);
//!
//! // Build: const answer = 42;
//! let value = decls.ast().expression_numeric_literal(
//!     SPAN,
//!     42.0,
//!     None,
//!     oxc_ast::ast::NumberBase::Decimal,
//! );
//! let mut program = ProgramBuilder::new(&allocator);
//! program.push(decls.const_binding(SPAN, "answer", value));
//!
//! let code = program.generate()?;
//! assert!(code.contains("const answer = 42"));
//! # Ok::<(), fob_gen::GenError>(())
//! ```

mod decl;
mod error;
mod program_builder;

#[cfg(feature = "parser")]
mod parser;

pub use decl::DeclarationBuilder;
pub use error::{GenError, Result};
pub use program_builder::ProgramBuilder;

#[cfg(feature = "parser")]
pub use parser::{ParseDiagnostic, ParseOptions, ParsedProgram, parse};

// Re-export commonly used OXC types for convenience
pub use oxc_allocator::Allocator;
pub use oxc_span::{Atom, SourceType};
