//! Parser façade for reading existing JavaScript/TypeScript code
//!
//! Wraps `oxc_parser` so callers get a single [`ParsedProgram`] value holding
//! the program, its source text and whatever the parser complained about.

#[cfg(feature = "parser")]
mod parser_impl {
    use crate::error::{GenError, Result};
    use oxc_allocator::Allocator;
    use oxc_ast::ast::Program;
    use oxc_parser::Parser;
    use oxc_span::SourceType;

    /// Parse options for reading source code
    #[derive(Debug, Clone)]
    pub struct ParseOptions {
        /// Source type (JavaScript, TypeScript, JSX, TSX)
        pub source_type: SourceType,
        /// Keep the (partial) program when the parser reports errors
        pub allow_errors: bool,
    }

    impl Default for ParseOptions {
        fn default() -> Self {
            Self {
                source_type: SourceType::mjs(),
                allow_errors: false,
            }
        }
    }

    impl ParseOptions {
        /// Create parse options from file path (auto-detects source type)
        pub fn from_path(path: &str) -> Self {
            Self {
                source_type: SourceType::from_path(path).unwrap_or(SourceType::mjs()),
                allow_errors: false,
            }
        }

        /// Create parse options for TypeScript
        pub fn typescript() -> Self {
            Self {
                source_type: SourceType::ts(),
                allow_errors: false,
            }
        }

        /// Create parse options for JSX
        pub fn jsx() -> Self {
            Self {
                source_type: SourceType::jsx(),
                allow_errors: false,
            }
        }

        /// Create parse options for TSX
        pub fn tsx() -> Self {
            Self {
                source_type: SourceType::tsx(),
                allow_errors: false,
            }
        }

        /// Keep partial programs instead of failing on parser errors
        pub fn allowing_errors(mut self) -> Self {
            self.allow_errors = true;
            self
        }
    }

    /// A message reported by the parser
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ParseDiagnostic {
        /// Error message
        pub message: String,
    }

    /// A whole compilation unit: program, source text and diagnostics
    pub struct ParsedProgram<'a> {
        /// The parsed AST program
        pub program: Program<'a>,
        /// Parse diagnostics (errors/warnings)
        pub diagnostics: Vec<ParseDiagnostic>,
        /// Source text the program was parsed from
        pub source_text: &'a str,
        /// Allocator used for AST nodes
        pub allocator: &'a Allocator,
    }

    impl<'a> ParsedProgram<'a> {
        /// Get the program AST
        pub fn ast(&self) -> &Program<'a> {
            &self.program
        }

        /// Get the allocator for creating new AST nodes
        pub fn allocator(&self) -> &'a Allocator {
            self.allocator
        }

        /// Check if parsing had errors
        pub fn has_errors(&self) -> bool {
            !self.diagnostics.is_empty()
        }
    }

    /// Parse source code into an AST
    ///
    /// Fails with [`GenError::ParseFailed`] when the parser reports errors,
    /// unless `options.allow_errors` is set.
    pub fn parse<'a>(
        allocator: &'a Allocator,
        source: &'a str,
        options: ParseOptions,
    ) -> Result<ParsedProgram<'a>> {
        let result = Parser::new(allocator, source, options.source_type).parse();

        let diagnostics: Vec<ParseDiagnostic> = result
            .errors
            .iter()
            .map(|err| ParseDiagnostic {
                message: err.to_string(),
            })
            .collect();

        if !options.allow_errors && !diagnostics.is_empty() {
            return Err(GenError::parse_failed(
                diagnostics.into_iter().map(|d| d.message),
            ));
        }

        Ok(ParsedProgram {
            program: result.program,
            diagnostics,
            source_text: source,
            allocator,
        })
    }
}

#[cfg(feature = "parser")]
pub use parser_impl::*;
