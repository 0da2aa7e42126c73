//! Error types for parsing and code generation

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while reading or generating JavaScript
#[derive(Error, Debug, Diagnostic)]
pub enum GenError {
    /// The parser rejected the source text
    #[error("Parse failed: {}", diagnostics.join(", "))]
    #[diagnostic(code(fob::gen::parse_failed))]
    ParseFailed { diagnostics: Vec<String> },

    /// Code generation failed
    #[error("Code generation failed: {context}{}", reason.as_ref().map(|r| format!(" - {}", r)).unwrap_or_default())]
    #[diagnostic(code(fob::gen::codegen_failed))]
    CodegenFailed {
        context: String,
        reason: Option<String>,
    },

    /// Invalid AST structure
    #[error("Invalid AST structure: {node_type}{}", details.as_ref().map(|d| format!(" - {}", d)).unwrap_or_default())]
    #[diagnostic(code(fob::gen::invalid_ast))]
    InvalidAst {
        node_type: String,
        details: Option<String>,
    },
}

impl GenError {
    /// Create a ParseFailed error from rendered parser diagnostics
    pub fn parse_failed<I, S>(diagnostics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::ParseFailed {
            diagnostics: diagnostics.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a CodegenFailed error with reason
    pub fn codegen_failed_with_reason(
        context: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::CodegenFailed {
            context: context.into(),
            reason: Some(reason.into()),
        }
    }

    /// Create an InvalidAst error with details
    pub fn invalid_ast(node_type: impl Into<String>, details: impl Into<String>) -> Self {
        Self::InvalidAst {
            node_type: node_type.into(),
            details: Some(details.into()),
        }
    }
}

/// Result type for parsing and code generation
pub type Result<T> = std::result::Result<T, GenError>;
