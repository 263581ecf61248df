//! Kotlin source emission from the Gale lowered AST.
//!
//! This crate is the last stage of the transpiler: earlier passes have
//! already parsed the Swift source, removed its sugar, and recorded what
//! the emitter needs to know in a [`TranslationContext`]. What remains is
//! a recursive walk of the tree, producing Kotlin text.
//!
//! ## Architecture
//!
//! - [`context`]: per-run registries (sealed classes, enum classes,
//!   protocols, function renames, pure functions)
//! - [`types`]: Swift-to-Kotlin type name rewriting
//! - [`indent`]: indentation helpers and the line-width limit
//! - [`util`]: bracket-aware splitting, case conversion, escapes
//! - `stmt` / `expr`: the statement and expression emitters
//!
//! ## Error handling
//!
//! A malformed subtree never aborts emission: the emitter reports it to
//! the [`Diagnostics`] sink and substitutes [`ERROR_SENTINEL`] in the
//! output, so one bad node costs one marker, not the whole file.

pub mod context;
pub mod indent;
pub mod types;
pub mod util;

mod expr;
mod stmt;

use std::fmt;

use gale_ast::{node_preview, TranspilationUnit};
use gale_common::{Diagnostics, SourceRange, TranspilerError, TranspilerErrorKind};

pub use context::{FunctionTranslation, TranslationContext};

/// In-band marker emitted in place of any subtree whose structure violates
/// the emitter's preconditions. Reserved output: callers may search the
/// emitted text for it to detect partial failure.
pub const ERROR_SENTINEL: &str = "<<Error>>";

/// The Kotlin emitter for one translation run.
///
/// Reads the registries, writes structural errors to the diagnostics
/// sink, and otherwise just renders. The walk is strictly top-down; the
/// only data flowing back up is the emitted text.
pub struct KotlinEmitter<'a> {
    pub(crate) ctx: &'a TranslationContext,
    pub(crate) diagnostics: &'a mut Diagnostics,
}

impl<'a> KotlinEmitter<'a> {
    /// Create an emitter over a populated context.
    pub fn new(ctx: &'a TranslationContext, diagnostics: &'a mut Diagnostics) -> Self {
        Self { ctx, diagnostics }
    }

    /// Translate a whole unit into Kotlin source text.
    ///
    /// Declarations are emitted at zero indentation. Top-level executable
    /// statements, if any survive emission, are wrapped in a synthetic
    /// `main` entry point, separated from the declarations by one blank
    /// line.
    pub fn translate_unit(&mut self, unit: &TranspilationUnit) -> String {
        let declarations = self.translate_block(&unit.declarations, "", 0);
        let statements = self.translate_block(&unit.statements, indent::INDENT_UNIT, 0);

        let mut result = declarations;
        if !statements.is_empty() {
            if !result.is_empty() {
                result.push('\n');
            }
            result.push_str("fun main(args: Array<String>) {\n");
            result.push_str(&statements);
            result.push_str("}\n");
        }
        result
    }

    /// Record a structural error and return the sentinel to splice into
    /// the output.
    pub(crate) fn unexpected_structure(
        &mut self,
        kind: TranspilerErrorKind,
        message: &str,
        node: &dyn fmt::Debug,
        range: Option<SourceRange>,
    ) -> String {
        self.report(kind, message, node, range);
        ERROR_SENTINEL.to_string()
    }

    /// Record a structural error without producing a sentinel.
    pub(crate) fn report(
        &mut self,
        kind: TranspilerErrorKind,
        message: &str,
        node: &dyn fmt::Debug,
        range: Option<SourceRange>,
    ) {
        self.diagnostics
            .handle_error(TranspilerError::new(kind, message, node_preview(node), range));
    }
}

/// Translate a whole unit with a one-shot emitter.
pub fn translate(
    unit: &TranspilationUnit,
    ctx: &TranslationContext,
    diagnostics: &mut Diagnostics,
) -> String {
    KotlinEmitter::new(ctx, diagnostics).translate_unit(unit)
}
