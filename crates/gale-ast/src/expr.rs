//! Expression variants of the lowered AST.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use gale_common::SourceRange;

use crate::stmt::Statement;

/// An expression node with an optional source range.
///
/// Equality compares only the kind; two expressions from different source
/// locations are equal when their shapes match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expression {
    pub kind: ExpressionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<SourceRange>,
}

impl Expression {
    /// Create an expression with no recorded source range.
    pub fn new(kind: ExpressionKind) -> Self {
        Self { kind, range: None }
    }

    /// Create an expression carrying a source range.
    pub fn with_range(kind: ExpressionKind, range: SourceRange) -> Self {
        Self {
            kind,
            range: Some(range),
        }
    }
}

impl PartialEq for Expression {
    fn eq(&self, other: &Self) -> bool {
        // Ranges are where a node came from, not what it is.
        self.kind == other.kind
    }
}

/// A `label: Type` pair, used for closure parameters and enum associated
/// values. An empty label means the position is unlabelled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledType {
    pub label: String,
    pub type_name: String,
}

/// One element of a tuple expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TuplePair {
    pub label: Option<String>,
    pub expression: Expression,
}

/// One slot of a tuple shuffle, as resolved by the argument-matching pass.
///
/// `Absent` marks a defaulted argument the call site did not supply;
/// `Present` consumes one expression; `Variadic` consumes `count`
/// expressions that were collected into one variadic parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TupleShuffleIndex {
    Absent,
    Present,
    Variadic { count: usize },
}

/// Expression variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExpressionKind {
    /// A parameterised skeleton string: each key of `matches` is replaced
    /// in `pattern` by its translated expression.
    Template {
        pattern: String,
        matches: FxHashMap<String, Expression>,
    },

    /// Raw target-language code spliced in by a pass; escapes are
    /// interpreted at emission time.
    LiteralCode { string: String },

    /// Raw target-language declaration text, same treatment as
    /// `LiteralCode`.
    LiteralDeclaration { string: String },

    /// Array literal: `[a, b, c]`.
    ArrayLiteral {
        elements: Vec<Expression>,
        type_name: String,
    },

    /// Dictionary literal: `[k1: v1, k2: v2]`. Keys and values are
    /// parallel lists of equal length.
    DictionaryLiteral {
        keys: Vec<Expression>,
        values: Vec<Expression>,
        type_name: String,
    },

    /// Binary operation: `left op right`.
    BinaryOperator {
        left: Box<Expression>,
        right: Box<Expression>,
        operator: String,
        type_name: String,
    },

    /// Function call. `arguments` is always a `Tuple` or `TupleShuffle`;
    /// anything else is a structural error at emission time.
    Call {
        function: Box<Expression>,
        arguments: Box<Expression>,
    },

    /// Closure literal with labelled parameters and a statement body.
    Closure {
        parameters: Vec<LabeledType>,
        statements: Vec<Statement>,
        type_name: String,
    },

    /// Reference to a declared name. The identifier may carry a mangled
    /// suffix starting at the first `(`; the part before it is the
    /// display name.
    DeclarationReference {
        identifier: String,
        type_name: String,
    },

    /// `return` in expression position (inside a converted switch case).
    Return { expression: Option<Box<Expression>> },

    /// Member access: `left.right`.
    Dot {
        left: Box<Expression>,
        right: Box<Expression>,
    },

    /// String literal (contents unescaped exactly as written).
    LiteralString { value: String },

    /// Character literal.
    LiteralCharacter { value: String },

    /// Interpolated string: literal-string parts alternate with spliced
    /// expressions.
    InterpolatedString { expressions: Vec<Expression> },

    /// Prefix unary operation: `op expr`.
    PrefixUnary {
        expression: Box<Expression>,
        operator: String,
        type_name: String,
    },

    /// Postfix unary operation: `expr op`.
    PostfixUnary {
        expression: Box<Expression>,
        operator: String,
        type_name: String,
    },

    /// Conditional expression.
    IfExpression {
        condition: Box<Expression>,
        true_expression: Box<Expression>,
        false_expression: Box<Expression>,
    },

    /// A type used in expression position (right side of `is` checks,
    /// constructor references).
    TypeExpression { type_name: String },

    /// Subscript access: `object[index]`.
    Subscript {
        object: Box<Expression>,
        index: Box<Expression>,
        type_name: String,
    },

    /// Explicit parentheses preserved by the frontend.
    Parentheses { expression: Box<Expression> },

    /// Force-unwrap: `expr!`.
    ForceValue { expression: Box<Expression> },

    /// Optional-chaining marker: `expr?`.
    Optional { expression: Box<Expression> },

    /// Integer literal.
    LiteralInt { value: i64 },

    /// Unsigned integer literal.
    LiteralUInt { value: u64 },

    /// Double-precision float literal.
    LiteralDouble { value: f64 },

    /// Single-precision float literal.
    LiteralFloat { value: f64 },

    /// Boolean literal.
    LiteralBool { value: bool },

    /// `nil`.
    NilLiteral,

    /// Tuple expression, also the shape of a plain call argument list.
    Tuple { pairs: Vec<TuplePair> },

    /// Re-ordered/defaulted/variadic argument list. `labels` and
    /// `indices` are parallel; `expressions` is consumed left to right as
    /// the indices dictate.
    TupleShuffle {
        labels: Vec<String>,
        indices: Vec<TupleShuffleIndex>,
        expressions: Vec<Expression>,
    },

    /// Placeholder for a subtree an earlier pass already reported on.
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;
    use gale_common::{SourcePosition, SourceRange};

    fn int(value: i64) -> Expression {
        Expression::new(ExpressionKind::LiteralInt { value })
    }

    #[test]
    fn equality_ignores_range() {
        let range = SourceRange::new(SourcePosition::new(1, 1), SourcePosition::new(1, 3));
        let with_range = Expression::with_range(ExpressionKind::LiteralInt { value: 42 }, range);
        let without_range = int(42);
        assert_eq!(with_range, without_range);
    }

    #[test]
    fn equality_is_structural_through_children() {
        let lhs = Expression::new(ExpressionKind::BinaryOperator {
            left: Box::new(int(1)),
            right: Box::new(int(2)),
            operator: "+".to_string(),
            type_name: "Int".to_string(),
        });
        let range = SourceRange::new(SourcePosition::new(9, 9), SourcePosition::new(9, 12));
        let rhs = Expression::new(ExpressionKind::BinaryOperator {
            left: Box::new(Expression::with_range(
                ExpressionKind::LiteralInt { value: 1 },
                range,
            )),
            right: Box::new(int(2)),
            operator: "+".to_string(),
            type_name: "Int".to_string(),
        });
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn different_kinds_are_not_equal() {
        assert_ne!(int(1), int(2));
        assert_ne!(
            int(1),
            Expression::new(ExpressionKind::LiteralBool { value: true })
        );
    }

    #[test]
    fn expression_round_trips_through_json() {
        let expr = Expression::new(ExpressionKind::Call {
            function: Box::new(Expression::new(ExpressionKind::DeclarationReference {
                identifier: "print(_:)".to_string(),
                type_name: "(Any) -> ()".to_string(),
            })),
            arguments: Box::new(Expression::new(ExpressionKind::Tuple {
                pairs: vec![TuplePair {
                    label: None,
                    expression: Expression::new(ExpressionKind::LiteralString {
                        value: "hello".to_string(),
                    }),
                }],
            })),
        });
        let json = serde_json::to_string(&expr).expect("serialize");
        let back: Expression = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(expr, back);
    }

    #[test]
    fn range_is_omitted_from_json_when_absent() {
        let json = serde_json::to_string(&int(1)).expect("serialize");
        assert!(!json.contains("range"));
    }
}
