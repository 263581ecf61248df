//! Structural diagnostics for the Gale emitter.
//!
//! The emitter never aborts on a malformed subtree: it reports the problem
//! here, substitutes the error sentinel in the output, and keeps going.
//! Errors accumulate in a [`Diagnostics`] sink owned by the caller, which
//! renders them after the run -- with labelled source spans when the
//! original Swift source is available, plain text otherwise.

use std::fmt;
use std::ops::Range;

use ariadne::{Config, Label, Report, ReportKind, Source};

use crate::range::{LineOffsets, SourceRange};

/// The category of a structural error, used for stable error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranspilerErrorKind {
    /// A construct that earlier passes should have removed reached the
    /// emitter (an extension declaration, a defer outside a function body).
    UnexpectedConstruct,
    /// A call's argument list was neither a tuple nor a tuple shuffle.
    MalformedCallArguments,
    /// A tuple shuffle's label and index lists had different lengths.
    MalformedTupleShuffle,
    /// An if-statement condition variant the emitter cannot express.
    UnsupportedCondition,
}

impl TranspilerErrorKind {
    /// Stable error code for this kind.
    pub fn code(self) -> &'static str {
        match self {
            TranspilerErrorKind::UnexpectedConstruct => "E0001",
            TranspilerErrorKind::MalformedCallArguments => "E0002",
            TranspilerErrorKind::MalformedTupleShuffle => "E0003",
            TranspilerErrorKind::UnsupportedCondition => "E0004",
        }
    }
}

/// A structural error raised while emitting Kotlin from the lowered AST.
///
/// Carries a human-readable message, a single-line preview of the
/// offending node, and the node's source range when the frontend recorded
/// one.
#[derive(Debug, Clone, PartialEq)]
pub struct TranspilerError {
    pub kind: TranspilerErrorKind,
    /// What went wrong, phrased for the transpiler user.
    pub message: String,
    /// Compact preview of the offending AST node.
    pub ast_context: String,
    /// Where in the original Swift source the node came from, if known.
    pub range: Option<SourceRange>,
}

impl TranspilerError {
    /// Create a new structural error.
    pub fn new(
        kind: TranspilerErrorKind,
        message: impl Into<String>,
        ast_context: impl Into<String>,
        range: Option<SourceRange>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            ast_context: ast_context.into(),
            range,
        }
    }
}

impl fmt::Display for TranspilerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for TranspilerError {}

/// Accumulating sink for structural errors.
///
/// One sink lives for one translation run, alongside the translation
/// context. The emitter only appends; the caller inspects and renders
/// after translation finishes.
#[derive(Debug, Default)]
pub struct Diagnostics {
    errors: Vec<TranspilerError>,
}

impl Diagnostics {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error. Emission continues after this.
    pub fn handle_error(&mut self, error: TranspilerError) {
        self.errors.push(error);
    }

    /// Whether any error has been recorded.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The recorded errors, in emission order.
    pub fn errors(&self) -> &[TranspilerError] {
        &self.errors
    }

    /// Drop all recorded errors.
    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// Mark the current error count for a later [`rewind_to`].
    ///
    /// The emitter renders some subtrees speculatively (a call is measured
    /// in single-line form before deciding to wrap); rewinding keeps the
    /// second rendering from reporting the same structural problems twice.
    ///
    /// [`rewind_to`]: Diagnostics::rewind_to
    pub fn checkpoint(&self) -> usize {
        self.errors.len()
    }

    /// Discard every error recorded after `checkpoint`.
    pub fn rewind_to(&mut self, checkpoint: usize) {
        self.errors.truncate(checkpoint);
    }

    /// Render every recorded error as text.
    ///
    /// When `source` is provided, errors with a range are rendered as
    /// labelled reports against it; everything else falls back to a plain
    /// `error[CODE]: message` form with the node preview attached.
    pub fn render(&self, source: Option<&str>) -> String {
        let offsets = source.map(LineOffsets::new);
        let mut out = String::new();
        for error in &self.errors {
            match (source, &offsets, error.range) {
                (Some(src), Some(offsets), Some(range)) => {
                    out.push_str(&render_labelled(error, src, offsets.byte_range(range)));
                }
                _ => {
                    out.push_str(&render_plain(error));
                }
            }
        }
        out
    }
}

/// Render one error as an ariadne report against the original source.
///
/// Output is colorless so test assertions and logs stay stable.
fn render_labelled(error: &TranspilerError, source: &str, span: Range<usize>) -> String {
    // Ariadne needs a non-empty span to attach a label.
    let span = if span.start == span.end {
        span.start..(span.end + 1).min(source.len().max(1))
    } else {
        span
    };

    let mut buffer = Vec::new();
    let result = Report::<Range<usize>>::build(ReportKind::Error, span.clone())
        .with_config(Config::default().with_color(false))
        .with_code(error.kind.code())
        .with_message(&error.message)
        .with_label(Label::new(span).with_message(&error.ast_context))
        .finish()
        .write(Source::from(source), &mut buffer);

    match result {
        Ok(()) => String::from_utf8_lossy(&buffer).into_owned(),
        Err(_) => render_plain(error),
    }
}

/// Render one error without source context.
fn render_plain(error: &TranspilerError) -> String {
    format!(
        "error[{}]: {}\n  node: {}\n",
        error.kind.code(),
        error.message,
        error.ast_context
    )
}
