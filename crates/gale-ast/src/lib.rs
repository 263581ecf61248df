//! The lowered AST consumed by the Gale Kotlin emitter.
//!
//! Earlier transpilation passes parse Swift, strip sugar (extensions are
//! folded into their methods, defers are hoisted to function bodies,
//! argument lists are resolved into tuples or tuple shuffles), and hand
//! the emitter this tree. The shapes here are deliberately dumb: plain
//! tagged unions with owned children, one optional source range per node.
//!
//! ## Architecture
//!
//! - [`stmt`]: statement variants and the declaration records
//! - [`expr`]: expression variants
//! - [`preview`]: compact node previews for diagnostics
//!
//! Node equality is structural and ignores source ranges, so a pass can
//! compare a rebuilt subtree against one from a different location (the
//! switch emitter relies on this for subject back-references).

pub mod expr;
pub mod preview;
pub mod stmt;

use serde::{Deserialize, Serialize};

pub use expr::{Expression, ExpressionKind, LabeledType, TuplePair, TupleShuffleIndex};
pub use preview::node_preview;
pub use stmt::{
    EnumElement, FunctionDeclaration, FunctionParameter, IfCondition, IfStatement,
    InitializerDeclaration, Statement, StatementKind, SwitchCase, SwitchStatement,
    VariableDeclaration,
};

/// One fully-lowered compilation unit, ready for emission.
///
/// The frontend has already separated top-level declarations from
/// top-level executable statements; the emitter wraps the latter in a
/// synthetic `main`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranspilationUnit {
    pub declarations: Vec<Statement>,
    pub statements: Vec<Statement>,
}

impl TranspilationUnit {
    /// A unit with no content at all.
    pub fn empty() -> Self {
        Self {
            declarations: Vec::new(),
            statements: Vec::new(),
        }
    }
}
