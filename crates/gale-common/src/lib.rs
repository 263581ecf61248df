//! Shared types for the Gale transpiler.
//!
//! This crate holds the pieces every other Gale crate needs: source ranges
//! expressed as line/column pairs into the original Swift source, and the
//! diagnostic sink that collects structural errors raised during emission.

pub mod diagnostics;
pub mod range;

pub use diagnostics::{Diagnostics, TranspilerError, TranspilerErrorKind};
pub use range::{LineOffsets, SourcePosition, SourceRange};
