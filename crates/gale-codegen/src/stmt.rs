//! Statement emission.
//!
//! One entry point, [`KotlinEmitter::translate_statement`], dispatches
//! exhaustively over the statement variants. Sibling statements are
//! rendered through [`KotlinEmitter::translate_block`], which owns the
//! blank-line policy between consecutive statements.

use gale_ast::{
    EnumElement, Expression, ExpressionKind, FunctionDeclaration, IfCondition, IfStatement,
    Statement, StatementKind, SwitchStatement, VariableDeclaration,
};
use gale_common::TranspilerErrorKind;

use crate::indent::{increase, LINE_LIMIT};
use crate::types::rewrite_type;
use crate::util::{camel_capitalized, split_type_list};
use crate::{KotlinEmitter, ERROR_SENTINEL};

/// Function, accessor, and closure bodies at or under this many non-empty
/// statements stay compact: no blank lines are inserted between them.
pub(crate) const SHORT_BODY_LIMIT: usize = 3;

impl KotlinEmitter<'_> {
    /// Render a sibling block, inserting blank lines between statements
    /// according to the grouping policy.
    ///
    /// With `limit_for_adding_newlines` at 0 every block qualifies for
    /// blank lines; function bodies pass [`SHORT_BODY_LIMIT`] so short
    /// bodies stay dense.
    pub(crate) fn translate_block(
        &mut self,
        statements: &[Statement],
        indentation: &str,
        limit_for_adding_newlines: usize,
    ) -> String {
        let refs: Vec<&Statement> = statements.iter().collect();
        self.translate_block_refs(&refs, indentation, limit_for_adding_newlines)
    }

    pub(crate) fn translate_block_refs(
        &mut self,
        statements: &[&Statement],
        indentation: &str,
        limit_for_adding_newlines: usize,
    ) -> String {
        let translations: Vec<String> = statements
            .iter()
            .map(|&statement| self.translate_statement(statement, indentation))
            .collect();
        let non_empty = translations
            .iter()
            .filter(|translation| !translation.is_empty())
            .count();
        let add_newlines = non_empty > limit_for_adding_newlines;

        let mut result = String::new();
        let mut previous: Option<&Statement> = None;
        for (&statement, translation) in statements.iter().zip(&translations) {
            if translation.is_empty() {
                continue;
            }
            if let Some(previous) = previous {
                if add_newlines && !suppresses_blank_line(previous, statement) {
                    result.push('\n');
                }
            }
            result.push_str(translation);
            previous = Some(statement);
        }
        result
    }

    /// Translate one statement at the given indentation.
    ///
    /// Every non-empty translation starts with exactly `indentation` and
    /// every line of it ends with `\n`.
    pub(crate) fn translate_statement(&mut self, statement: &Statement, indentation: &str) -> String {
        match &statement.kind {
            StatementKind::Comment { text } => format!("{indentation}//{text}\n"),

            // Kotlin needs no imports for the generated code.
            StatementKind::Import { .. } => String::new(),

            StatementKind::Extension { .. } => self.unexpected_structure(
                TranspilerErrorKind::UnexpectedConstruct,
                "failed to translate extension declaration: it should have been folded into its members by a pass",
                statement,
                statement.range,
            ),

            StatementKind::Defer { .. } => self.unexpected_structure(
                TranspilerErrorKind::UnexpectedConstruct,
                "defer statements are only supported as direct children of function bodies",
                statement,
                statement.range,
            ),

            StatementKind::Typealias {
                identifier,
                type_name,
                is_implicit,
            } => {
                if *is_implicit {
                    String::new()
                } else {
                    format!(
                        "{indentation}typealias {identifier} = {}\n",
                        rewrite_type(type_name)
                    )
                }
            }

            StatementKind::Class {
                name,
                inherits,
                members,
            } => {
                let inheritance = if inherits.is_empty() {
                    String::new()
                } else {
                    let rewritten: Vec<String> =
                        inherits.iter().map(|inherit| rewrite_type(inherit)).collect();
                    format!(": {}", rewritten.join(", "))
                };
                let contents = self.translate_block(members, &increase(indentation), 0);
                format!("{indentation}open class {name}{inheritance} {{\n{contents}{indentation}}}\n")
            }

            StatementKind::Struct {
                annotations,
                name,
                inherits,
                members,
            } => self.translate_struct(annotations.as_deref(), name, inherits, members, indentation),

            StatementKind::CompanionObject { members } => {
                let contents = self.translate_block(members, &increase(indentation), 0);
                format!("{indentation}companion object {{\n{contents}{indentation}}}\n")
            }

            StatementKind::Enum {
                access,
                name,
                inherits,
                elements,
                members,
                is_implicit,
            } => self.translate_enum(
                access.as_deref(),
                name,
                inherits,
                elements,
                members,
                *is_implicit,
                indentation,
            ),

            StatementKind::Do { statements } => {
                let contents = self.translate_block(statements, &increase(indentation), 0);
                format!("{indentation}try {{\n{contents}{indentation}}}\n")
            }

            StatementKind::Catch {
                variable,
                statements,
            } => {
                let header = match variable {
                    Some(variable) => format!(
                        "{indentation}catch ({}: {}) {{\n",
                        variable.identifier,
                        rewrite_type(&variable.type_name)
                    ),
                    None => format!("{indentation}catch {{\n"),
                };
                let contents = self.translate_block(statements, &increase(indentation), 0);
                format!("{header}{contents}{indentation}}}\n")
            }

            StatementKind::ForEach {
                collection,
                variable,
                statements,
            } => {
                let variable_text = self.translate_expression(variable, indentation);
                let collection_text = self.translate_expression(collection, indentation);
                let contents = self.translate_block(statements, &increase(indentation), 0);
                format!(
                    "{indentation}for ({variable_text} in {collection_text}) {{\n{contents}{indentation}}}\n"
                )
            }

            StatementKind::While {
                condition,
                statements,
            } => {
                let condition_text = self.translate_expression(condition, indentation);
                let contents = self.translate_block(statements, &increase(indentation), 0);
                format!("{indentation}while ({condition_text}) {{\n{contents}{indentation}}}\n")
            }

            StatementKind::Function(function) => {
                self.translate_function_declaration(function, None, false, indentation)
            }

            StatementKind::Initializer(initializer) => self.translate_function_declaration(
                &initializer.function,
                initializer.super_call.as_ref(),
                true,
                indentation,
            ),

            StatementKind::Protocol { name, members } => {
                let contents = self.translate_block(members, &increase(indentation), 0);
                format!("{indentation}interface {name} {{\n{contents}{indentation}}}\n")
            }

            StatementKind::Throw { expression } => {
                format!(
                    "{indentation}throw {}\n",
                    self.translate_expression(expression, indentation)
                )
            }

            StatementKind::Variable(variable) => {
                self.translate_variable_declaration(variable, indentation)
            }

            StatementKind::Assignment { left, right } => format!(
                "{indentation}{} = {}\n",
                self.translate_expression(left, indentation),
                self.translate_expression(right, indentation)
            ),

            StatementKind::If(if_statement) => self.translate_if(if_statement, indentation, false),

            StatementKind::Switch(switch) => self.translate_switch(switch, indentation),

            StatementKind::Return { expression } => match expression {
                Some(expression) => format!(
                    "{indentation}return {}\n",
                    self.translate_expression(expression, indentation)
                ),
                None => format!("{indentation}return\n"),
            },

            StatementKind::Break => format!("{indentation}break\n"),

            StatementKind::Continue => format!("{indentation}continue\n"),

            StatementKind::Expression { expression } => {
                let translation = self.translate_expression(expression, indentation);
                if translation.is_empty() {
                    "\n".to_string()
                } else {
                    format!("{indentation}{translation}\n")
                }
            }

            StatementKind::Error => ERROR_SENTINEL.to_string(),
        }
    }

    /// Structs become data classes: stored properties move into the
    /// primary constructor, everything else stays in the body block.
    fn translate_struct(
        &mut self,
        annotations: Option<&str>,
        name: &str,
        inherits: &[String],
        members: &[Statement],
        indentation: &str,
    ) -> String {
        let mut result = String::new();
        if let Some(annotations) = annotations {
            result.push_str(&format!("{indentation}{annotations}\n"));
        }

        let increased = increase(indentation);
        let mut properties: Vec<&Statement> = Vec::new();
        let mut other_members: Vec<&Statement> = Vec::new();
        for member in members {
            match &member.kind {
                StatementKind::Variable(variable)
                    if variable.getter.is_none()
                        && variable.setter.is_none()
                        && !variable.is_static =>
                {
                    properties.push(member);
                }
                _ => other_members.push(member),
            }
        }

        let property_lines: Vec<String> = properties
            .iter()
            .map(|&property| {
                self.translate_statement(property, &increased)
                    .trim_end_matches('\n')
                    .to_string()
            })
            .filter(|line| !line.is_empty())
            .collect();

        if property_lines.is_empty() {
            result.push_str(&format!("{indentation}data class {name}()"));
        } else {
            result.push_str(&format!(
                "{indentation}data class {name}(\n{}\n{indentation})",
                property_lines.join(",\n")
            ));
        }

        if !inherits.is_empty() {
            result.push_str(&format!(": {}", self.inheritance_list(inherits)));
        }

        let contents = if other_members.is_empty() {
            String::new()
        } else {
            self.translate_block_refs(&other_members, &increased, 0)
        };
        if contents.is_empty() {
            result.push('\n');
        } else {
            result.push_str(&format!(" {{\n{contents}{indentation}}}\n"));
        }
        result
    }

    /// Superclasses get a constructor invocation, protocols do not.
    fn inheritance_list(&self, inherits: &[String]) -> String {
        let rendered: Vec<String> = inherits
            .iter()
            .map(|inherit| {
                let rewritten = rewrite_type(inherit);
                if self.ctx.is_protocol(inherit) {
                    rewritten
                } else {
                    format!("{rewritten}()")
                }
            })
            .collect();
        rendered.join(", ")
    }

    /// Enums lower to an enum class when the registry says their cases
    /// carry no payloads, and to a sealed class hierarchy otherwise.
    #[allow(clippy::too_many_arguments)]
    fn translate_enum(
        &mut self,
        access: Option<&str>,
        name: &str,
        inherits: &[String],
        elements: &[EnumElement],
        members: &[Statement],
        is_implicit: bool,
        indentation: &str,
    ) -> String {
        if is_implicit {
            return String::new();
        }
        let is_enum_class = self.ctx.is_enum_class(name);
        let access_prefix = access.map(|access| format!("{access} ")).unwrap_or_default();
        let keyword = if is_enum_class { "enum" } else { "sealed" };
        let inheritance = if inherits.is_empty() {
            String::new()
        } else {
            format!(": {}", self.inheritance_list(inherits))
        };

        let mut result =
            format!("{indentation}{access_prefix}{keyword} class {name}{inheritance} {{\n");
        let increased = increase(indentation);

        let elements_text = if elements.is_empty() {
            String::new()
        } else if is_enum_class {
            let rendered: Vec<String> = elements
                .iter()
                .map(|element| {
                    let annotations = element
                        .annotations
                        .as_deref()
                        .map(|annotations| format!("{annotations} "))
                        .unwrap_or_default();
                    format!("{increased}{annotations}{}", element.name)
                })
                .collect();
            format!("{};\n", rendered.join(",\n"))
        } else {
            elements
                .iter()
                .map(|element| self.translate_sealed_element(element, name, &increased))
                .collect()
        };

        let members_text = self.translate_block(members, &increased, 0);
        result.push_str(&elements_text);
        if !elements_text.is_empty() && !members_text.is_empty() {
            result.push('\n');
        }
        result.push_str(&members_text);
        result.push_str(&format!("{indentation}}}\n"));
        result
    }

    /// One case of a sealed class: a subclass, with associated values as
    /// constructor properties.
    fn translate_sealed_element(
        &mut self,
        element: &EnumElement,
        enum_name: &str,
        indentation: &str,
    ) -> String {
        let annotations = element
            .annotations
            .as_deref()
            .map(|annotations| format!("{annotations} "))
            .unwrap_or_default();
        let name = camel_capitalized(&element.name);
        let associated = if element.associated_values.is_empty() {
            String::new()
        } else {
            let values: Vec<String> = element
                .associated_values
                .iter()
                .map(|value| format!("val {}: {}", value.label, rewrite_type(&value.type_name)))
                .collect();
            format!("({})", values.join(", "))
        };
        format!("{indentation}{annotations}class {name}{associated}: {enum_name}()\n")
    }

    /// Variables pick `val` or `var` from their accessors and mutability,
    /// then render extension prefixes, accessors, and the initializer.
    pub(crate) fn translate_variable_declaration(
        &mut self,
        variable: &VariableDeclaration,
        indentation: &str,
    ) -> String {
        if variable.is_implicit {
            return String::new();
        }
        let mut result = String::new();
        if let Some(annotations) = &variable.annotations {
            result.push_str(&format!("{indentation}{annotations}\n"));
        }

        let keyword = if variable.getter.is_some() && variable.setter.is_some() {
            "var"
        } else if variable.getter.is_some() {
            "val"
        } else if variable.is_let {
            "val"
        } else {
            "var"
        };
        result.push_str(&format!("{indentation}{keyword} "));

        if let Some(extends_type) = &variable.extends_type {
            let rewritten = rewrite_type(extends_type);
            // A generic extended type contributes its generics up front:
            // `val <T> Box<T>.foo`.
            if let Some(generics_start) = rewritten.find('<') {
                if rewritten.ends_with('>') {
                    result.push_str(&format!("{} ", &rewritten[generics_start..]));
                }
            }
            result.push_str(&format!("{rewritten}."));
        }

        result.push_str(&format!(
            "{}: {}",
            variable.identifier,
            rewrite_type(&variable.type_name)
        ));
        if let Some(expression) = &variable.expression {
            result.push_str(&format!(
                " = {}",
                self.translate_expression(expression, indentation)
            ));
        }
        result.push('\n');

        let increased = increase(indentation);
        if let Some(getter) = &variable.getter {
            if let Some(statements) = &getter.statements {
                let contents =
                    self.translate_block(statements, &increase(&increased), SHORT_BODY_LIMIT);
                result.push_str(&format!("{increased}get() {{\n{contents}{increased}}}\n"));
            }
        }
        if let Some(setter) = &variable.setter {
            if let Some(statements) = &setter.statements {
                let contents =
                    self.translate_block(statements, &increase(&increased), SHORT_BODY_LIMIT);
                result.push_str(&format!(
                    "{increased}set(newValue) {{\n{contents}{increased}}}\n"
                ));
            }
        }
        result
    }

    /// Functions, initializers, and `invoke` operators share one
    /// rendering path. The signature is measured in single-line form
    /// first; crossing the line limit re-lays it out with one parameter
    /// per line.
    pub(crate) fn translate_function_declaration(
        &mut self,
        function: &FunctionDeclaration,
        super_call: Option<&Expression>,
        is_initializer: bool,
        indentation: &str,
    ) -> String {
        if function.is_implicit {
            return String::new();
        }

        let header = self.function_header(function, is_initializer, indentation);
        let parameter_strings: Vec<String> = function
            .parameters
            .iter()
            .map(|parameter| {
                let mut rendered =
                    format!("{}: {}", parameter.label, rewrite_type(&parameter.type_name));
                if let Some(default) = &parameter.value {
                    rendered.push_str(&format!(
                        " = {}",
                        self.translate_expression(default, indentation)
                    ));
                }
                rendered
            })
            .collect();

        let clause = if is_initializer {
            super_call.map(|call| format!(": {}", self.translate_expression(call, indentation)))
        } else if function.return_type != "()" {
            Some(format!(": {}", rewrite_type(&function.return_type)))
        } else {
            None
        };

        let single_line = {
            let mut signature = header.clone();
            signature.push_str(&parameter_strings.join(", "));
            signature.push(')');
            if let Some(clause) = &clause {
                signature.push_str(clause);
            }
            signature
        };

        let has_body = function.statements.is_some();
        let mut result = if single_line.chars().count() < LINE_LIMIT {
            if has_body {
                format!("{single_line} {{\n")
            } else {
                format!("{single_line}\n")
            }
        } else {
            let increased = increase(indentation);
            let mut wrapped = header;
            wrapped.push('\n');
            for (position, parameter) in parameter_strings.iter().enumerate() {
                wrapped.push_str(&format!("{increased}{parameter}"));
                if position + 1 < parameter_strings.len() {
                    wrapped.push(',');
                }
                wrapped.push('\n');
            }
            wrapped.push_str(&format!("{indentation})"));
            if let Some(clause) = &clause {
                wrapped.push_str(&format!("\n{increased}{clause}"));
            }
            if has_body {
                wrapped.push_str(&format!("\n{indentation}{{\n"));
            } else {
                wrapped.push('\n');
            }
            wrapped
        };

        let Some(statements) = &function.statements else {
            return result;
        };

        let increased = increase(indentation);
        let (defers, others): (Vec<&Statement>, Vec<&Statement>) = statements
            .iter()
            .partition(|statement| matches!(statement.kind, StatementKind::Defer { .. }));

        if defers.is_empty() {
            result.push_str(&self.translate_block(statements, &increased, SHORT_BODY_LIMIT));
        } else {
            // Deferred cleanup becomes try/finally, defers last.
            let double = increase(&increased);
            result.push_str(&format!("{increased}try {{\n"));
            result.push_str(&self.translate_block_refs(&others, &double, SHORT_BODY_LIMIT));
            result.push_str(&format!("{increased}}} finally {{\n"));
            for defer in &defers {
                if let StatementKind::Defer { statements } = &defer.kind {
                    result.push_str(&self.translate_block(statements, &double, SHORT_BODY_LIMIT));
                }
            }
            result.push_str(&format!("{increased}}}\n"));
        }
        result.push_str(&format!("{indentation}}}\n"));
        result
    }

    /// Everything before the opening parenthesis of the parameter list.
    fn function_header(
        &mut self,
        function: &FunctionDeclaration,
        is_initializer: bool,
        indentation: &str,
    ) -> String {
        let mut header = String::from(indentation);
        if is_initializer {
            header.push_str("constructor(");
            return header;
        }
        if function.prefix == "invoke" {
            header.push_str("operator fun invoke(");
            return header;
        }

        if let Some(annotations) = &function.annotations {
            header.push_str(&format!("{annotations} "));
        }
        if let Some(access) = &function.access {
            header.push_str(&format!("{access} "));
        }
        header.push_str("fun ");

        // Merge the extended type's generics with the declaration's own,
        // extension generics first.
        let mut generics: Vec<String> = Vec::new();
        let mut extension_type = None;
        if let Some(extends_type) = &function.extends_type {
            let rewritten = rewrite_type(extends_type);
            if let Some(generics_start) = rewritten.find('<') {
                if rewritten.ends_with('>') {
                    let clause = &rewritten[generics_start + 1..rewritten.len() - 1];
                    generics.extend(
                        split_type_list(clause, &[","])
                            .iter()
                            .map(|generic| generic.trim().to_string()),
                    );
                }
            }
            extension_type = Some(rewritten);
        }
        for generic in &function.generic_types {
            if !generics.contains(generic) {
                generics.push(generic.clone());
            }
        }
        if !generics.is_empty() {
            header.push_str(&format!("<{}> ", generics.join(", ")));
        }

        if let Some(extension_type) = extension_type {
            header.push_str(&extension_type);
            if function.is_static {
                header.push_str(".Companion");
            }
            header.push('.');
        }
        header.push_str(&function.prefix);
        header.push('(');
        header
    }

    /// `if`/`guard` chains. Guards negate their whole condition; the else
    /// branch recurses with the else-if marker set.
    fn translate_if(
        &mut self,
        if_statement: &IfStatement,
        indentation: &str,
        is_else_if: bool,
    ) -> String {
        let keyword = if if_statement.conditions.is_empty() && if_statement.declarations.is_empty()
        {
            "else"
        } else if is_else_if {
            "else if"
        } else {
            "if"
        };

        let mut result = format!("{indentation}{keyword} ");
        if keyword != "else" {
            let mut condition_strings: Vec<String> = Vec::new();
            for condition in &if_statement.conditions {
                match condition {
                    IfCondition::Condition { expression } => {
                        condition_strings.push(self.translate_expression(expression, indentation));
                    }
                    IfCondition::Declaration { variable } => {
                        self.report(
                            TranspilerErrorKind::UnsupportedCondition,
                            "conditional bindings should have been removed by a pass",
                            variable,
                            None,
                        );
                    }
                }
            }
            let joined = condition_strings.join(" && ");
            if if_statement.is_guard {
                result.push_str(&format!("(!({joined})) "));
            } else {
                result.push_str(&format!("({joined}) "));
            }
        }
        result.push_str("{\n");
        result.push_str(&self.translate_block(
            &if_statement.statements,
            &increase(indentation),
            SHORT_BODY_LIMIT,
        ));
        result.push_str(&format!("{indentation}}}\n"));

        if let Some(else_statement) = &if_statement.else_statement {
            result.push_str(&self.translate_if(else_statement, indentation, true));
        }
        result
    }

    /// Switches become `when`. A switch the passes marked as an
    /// expression feeds its surrounding return, assignment, or variable
    /// declaration.
    fn translate_switch(&mut self, switch: &SwitchStatement, indentation: &str) -> String {
        let mut result = String::new();

        match switch.converts_to_expression.as_deref() {
            Some(statement) => match &statement.kind {
                StatementKind::Return { .. } => {
                    result.push_str(&format!("{indentation}return when ("));
                }
                StatementKind::Assignment { left, .. } => {
                    let left_text = self.translate_expression(left, indentation);
                    result.push_str(&format!("{indentation}{left_text} = when ("));
                }
                StatementKind::Variable(variable) => {
                    let mut declaration = (**variable).clone();
                    declaration.expression = Some(Expression::new(ExpressionKind::NilLiteral));
                    let translated = self.translate_variable_declaration(&declaration, indentation);
                    match translated.strip_suffix("null\n") {
                        Some(stripped) => {
                            result.push_str(stripped);
                            result.push_str("when (");
                        }
                        None => result.push_str(&format!("{indentation}when (")),
                    }
                }
                _ => result.push_str(&format!("{indentation}when (")),
            },
            None => result.push_str(&format!("{indentation}when (")),
        }

        let subject = self.translate_expression(&switch.expression, indentation);
        result.push_str(&format!("{subject}) {{\n"));

        let increased = increase(indentation);
        for case in &switch.cases {
            if case.expressions.is_empty() {
                result.push_str(&format!("{increased}else -> "));
            } else {
                let rendered: Vec<String> = case
                    .expressions
                    .iter()
                    .map(|case_expression| {
                        self.translate_case_expression(
                            case_expression,
                            &switch.expression,
                            indentation,
                        )
                    })
                    .collect();
                result.push_str(&format!("{increased}{} -> ", rendered.join(", ")));
            }

            if case.statements.len() == 1 {
                result.push_str(&self.translate_statement(&case.statements[0], ""));
            } else {
                result.push_str("{\n");
                result.push_str(&self.translate_block(
                    &case.statements,
                    &increase(&increased),
                    SHORT_BODY_LIMIT,
                ));
                result.push_str(&format!("{increased}}}\n"));
            }
        }

        result.push_str(&format!("{indentation}}}\n"));
        result
    }

    /// The earlier passes compare each case against the subject with a
    /// synthesized binary operator; unwrap it back into `when` syntax.
    fn translate_case_expression(
        &mut self,
        case_expression: &Expression,
        subject: &Expression,
        indentation: &str,
    ) -> String {
        if let ExpressionKind::BinaryOperator {
            left,
            right,
            operator,
            type_name,
        } = &case_expression.kind
        {
            if **left == *subject && operator == "is" && type_name == "Bool" {
                return format!("is {}", self.translate_expression(right, indentation));
            }
            if let ExpressionKind::Template { pattern, .. } = &left.kind {
                if pattern.contains("..")
                    || pattern.contains("until")
                    || pattern.contains("rangeTo")
                {
                    return format!("in {}", self.translate_expression(left, indentation));
                }
            }
            return self.translate_expression(left, indentation);
        }
        self.translate_expression(case_expression, indentation)
    }
}

/// Whether a blank line between `current` and `next` is suppressed.
///
/// Runs of alike statements read as one paragraph: consecutive variable
/// declarations, assignments, typealiases, calls, and spliced code stay
/// dense, comments attach to whatever follows them, and catch clauses
/// stay glued to their try block.
fn suppresses_blank_line(current: &Statement, next: &Statement) -> bool {
    match (&current.kind, &next.kind) {
        (StatementKind::Comment { .. }, _) => true,
        (StatementKind::Variable(_), StatementKind::Variable(_)) => true,
        (StatementKind::Assignment { .. }, StatementKind::Assignment { .. }) => true,
        (StatementKind::Typealias { .. }, StatementKind::Typealias { .. }) => true,
        (
            StatementKind::Expression { expression: current },
            StatementKind::Expression { expression: next },
        ) => matches!(
            (&current.kind, &next.kind),
            (ExpressionKind::Call { .. }, ExpressionKind::Call { .. })
                | (ExpressionKind::Template { .. }, ExpressionKind::Template { .. })
                | (ExpressionKind::LiteralCode { .. }, ExpressionKind::LiteralCode { .. })
        ),
        (StatementKind::Do { .. }, StatementKind::Catch { .. }) => true,
        (StatementKind::Catch { .. }, StatementKind::Catch { .. }) => true,
        _ => false,
    }
}
