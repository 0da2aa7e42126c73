use fob_gen::GenError;
use miette::Diagnostic;
use thiserror::Error;

/// Result type alias for module explosion.
pub type Result<T> = std::result::Result<T, ExplodeError>;

/// Reasons a module cannot be exploded.
///
/// Every variant is fatal for the whole call; no partial output is produced.
#[derive(Debug, Error, Diagnostic)]
pub enum ExplodeError {
    /// The root is neither a compilation unit nor a program.
    #[error("must pass a compilation unit or program to explode module, received {kind}")]
    #[diagnostic(code(fob::explode::invalid_root))]
    InvalidRoot {
        /// Kind tag of the rejected node.
        kind: &'static str,
    },

    /// An import specifier of a shape the exploder does not understand.
    #[error("unexpected import specifier {kind} at offset {start}")]
    #[diagnostic(code(fob::explode::unrecognized_specifier))]
    UnrecognizedSpecifier {
        /// Kind tag of the specifier.
        kind: String,
        /// Byte offset of the specifier.
        start: u32,
    },

    /// An exported declaration of a shape the exploder does not understand.
    #[error("unexpected declaration {kind} at offset {start}")]
    #[diagnostic(code(fob::explode::unrecognized_declaration))]
    UnrecognizedDeclaration {
        /// Kind tag of the declaration.
        kind: &'static str,
        /// Byte offset of the declaration.
        start: u32,
    },

    /// Parsing or AST construction failed before explosion could run.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Gen(#[from] GenError),
}

impl ExplodeError {
    pub(crate) fn unrecognized_declaration(kind: &'static str, start: u32) -> Self {
        Self::UnrecognizedDeclaration { kind, start }
    }
}
