#![deny(clippy::all)]

//! Module body explosion for the Fob bundler.
//!
//! Splits the top level of an ES module into three independent lists:
//! - canonical [`ModuleSpecifier`] records for every import binding,
//! - canonical [`ModuleSpecifier`] records for every export binding,
//! - the statements that remain once import/export syntax is stripped.
//!
//! Exported declarations keep their statement, anonymous default exports are
//! bound to `_default`, and multi-binding variable declarations are split so
//! that every statement declares exactly one binding.
//!
//! ```rust
//! use fob_explode::{ModuleExploder, SpecifierKind};
//! use fob_gen::{Allocator, ParseOptions};
//!
//! let allocator = Allocator::default();
//! let exploder = ModuleExploder::new(&allocator);
//! let module = exploder.explode_source(
//!     "import a from 'b'; export const c = a, d = 1;",
//!     ParseOptions::default(),
//! )?;
//!
//! assert_eq!(module.imports[0].kind, Some(SpecifierKind::Value));
//! assert_eq!(module.imports[0].external.as_deref(), Some("default"));
//! assert_eq!(module.exports.len(), 2);
//! assert_eq!(module.statements.len(), 2);
//! # Ok::<(), fob_explode::ExplodeError>(())
//! ```

pub mod error;
mod exploder;
mod metadata;
pub mod model;
mod options;
mod root;

pub use error::{ExplodeError, Result};
pub use exploder::{ModuleExploder, SYNTHESIZED_DEFAULT, explode_module};
pub use model::{
    CommentText, CommentType, ExplodedModule, ExplodedStatement, Location, ModuleSpecifier,
    NodeComments, NodeMetadata, NodePosition, Position, SpecifierKind,
};
pub use options::ExplodeOptions;
pub use root::ModuleRoot;
