//! Statement variants and declaration records of the lowered AST.

use serde::{Deserialize, Serialize};

use gale_common::SourceRange;

use crate::expr::{Expression, LabeledType};

/// A statement node with an optional source range.
///
/// Like expressions, equality compares only the kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Statement {
    pub kind: StatementKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<SourceRange>,
}

impl Statement {
    /// Create a statement with no recorded source range.
    pub fn new(kind: StatementKind) -> Self {
        Self { kind, range: None }
    }

    /// Create a statement carrying a source range.
    pub fn with_range(kind: StatementKind, range: SourceRange) -> Self {
        Self {
            kind,
            range: Some(range),
        }
    }
}

impl PartialEq for Statement {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

/// Statement variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StatementKind {
    /// Line comment carried through from the source. The text does not
    /// include the `//` marker.
    Comment { text: String },

    /// Import declaration; Kotlin output never needs these.
    Import { module: String },

    /// An extension the earlier passes failed to fold away. Must not
    /// reach the emitter.
    Extension {
        type_name: String,
        members: Vec<Statement>,
    },

    /// Deferred cleanup block. Only legal as a direct child of a function
    /// body, where it lowers into `try`/`finally`.
    Defer { statements: Vec<Statement> },

    /// Type alias.
    Typealias {
        identifier: String,
        type_name: String,
        is_implicit: bool,
    },

    /// Class declaration.
    Class {
        name: String,
        inherits: Vec<String>,
        members: Vec<Statement>,
    },

    /// Struct declaration, lowered to a Kotlin data class.
    Struct {
        annotations: Option<String>,
        name: String,
        inherits: Vec<String>,
        members: Vec<Statement>,
    },

    /// Companion object holding the static members of the enclosing type.
    CompanionObject { members: Vec<Statement> },

    /// Enum declaration, lowered to a sealed class or an enum class
    /// depending on the registry.
    Enum {
        access: Option<String>,
        name: String,
        inherits: Vec<String>,
        elements: Vec<EnumElement>,
        members: Vec<Statement>,
        is_implicit: bool,
    },

    /// `do` block, lowered to `try`.
    Do { statements: Vec<Statement> },

    /// `catch` clause following a `do` block.
    Catch {
        variable: Option<VariableDeclaration>,
        statements: Vec<Statement>,
    },

    /// `for x in collection` loop.
    ForEach {
        collection: Expression,
        variable: Expression,
        statements: Vec<Statement>,
    },

    /// `while` loop.
    While {
        condition: Expression,
        statements: Vec<Statement>,
    },

    /// Function declaration.
    Function(Box<FunctionDeclaration>),

    /// Initializer declaration, lowered to a Kotlin constructor.
    Initializer(Box<InitializerDeclaration>),

    /// Protocol declaration, lowered to an interface.
    Protocol {
        name: String,
        members: Vec<Statement>,
    },

    /// `throw` statement.
    Throw { expression: Expression },

    /// Variable declaration.
    Variable(Box<VariableDeclaration>),

    /// Assignment statement.
    Assignment {
        left: Expression,
        right: Expression,
    },

    /// `if`/`guard` statement with an optional else chain.
    If(Box<IfStatement>),

    /// `switch` statement, lowered to `when`.
    Switch(Box<SwitchStatement>),

    /// `return` statement.
    Return { expression: Option<Expression> },

    /// `break`.
    Break,

    /// `continue`.
    Continue,

    /// An expression evaluated for effect.
    Expression { expression: Expression },

    /// Placeholder for a subtree an earlier pass already reported on.
    Error,
}

/// One case of an enum declaration.
///
/// `associated_values` is empty for plain cases; a non-empty list means
/// the case carries a payload and forces the sealed-class lowering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumElement {
    pub name: String,
    pub associated_values: Vec<LabeledType>,
    pub annotations: Option<String>,
}

/// A function declaration record, shared by methods, free functions, and
/// accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDeclaration {
    /// Bare name: the identifier up to the argument labels.
    pub prefix: String,
    pub parameters: Vec<FunctionParameter>,
    /// Swift return type; `"()"` for functions that return nothing.
    pub return_type: String,
    /// Full mangled signature, used for registry lookups.
    pub function_type: String,
    pub generic_types: Vec<String>,
    pub is_implicit: bool,
    pub is_static: bool,
    /// The extended type when this function came from an extension.
    pub extends_type: Option<String>,
    /// `None` for protocol requirements without bodies.
    pub statements: Option<Vec<Statement>>,
    pub access: Option<String>,
    pub annotations: Option<String>,
}

/// A single function parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionParameter {
    pub label: String,
    pub type_name: String,
    pub value: Option<Expression>,
}

/// An initializer: a function plus the super-constructor call Kotlin
/// places after the parameter list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitializerDeclaration {
    pub function: FunctionDeclaration,
    pub super_call: Option<Expression>,
}

/// A variable declaration record, used for locals, stored and computed
/// properties, and extension properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDeclaration {
    pub identifier: String,
    pub type_name: String,
    pub expression: Option<Expression>,
    pub getter: Option<FunctionDeclaration>,
    pub setter: Option<FunctionDeclaration>,
    pub is_let: bool,
    pub is_implicit: bool,
    pub is_static: bool,
    /// The extended type when this property came from an extension.
    pub extends_type: Option<String>,
    pub annotations: Option<String>,
}

/// An `if`/`guard` statement. Else-if chains nest through
/// `else_statement`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfStatement {
    pub conditions: Vec<IfCondition>,
    pub declarations: Vec<VariableDeclaration>,
    pub statements: Vec<Statement>,
    pub else_statement: Option<Box<IfStatement>>,
    pub is_guard: bool,
}

/// One condition of an `if` statement.
///
/// Only plain boolean conditions can be emitted; a `Declaration`
/// (pattern-binding) condition surviving to the emitter is a structural
/// error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum IfCondition {
    Condition { expression: Expression },
    Declaration { variable: VariableDeclaration },
}

/// A `switch` statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchStatement {
    /// When the switch was recognised as an expression, the statement it
    /// feeds: a return, an assignment, or a variable declaration.
    pub converts_to_expression: Option<Box<Statement>>,
    /// The switch subject.
    pub expression: Expression,
    pub cases: Vec<SwitchCase>,
}

/// One case of a `switch`. Empty `expressions` means the default case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchCase {
    pub expressions: Vec<Expression>,
    pub statements: Vec<Statement>,
}
