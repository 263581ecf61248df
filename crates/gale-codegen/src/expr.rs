//! Expression emission.
//!
//! Every case returns a string with no trailing newline; statements add
//! those. Calls are the one place with layout feedback: the inline form
//! is measured against the line limit and re-emitted once with newlined
//! arguments when it crosses it.

use gale_ast::{
    Expression, ExpressionKind, LabeledType, Statement, StatementKind, TuplePair,
    TupleShuffleIndex,
};
use gale_common::{SourceRange, TranspilerErrorKind};

use crate::context::FunctionTranslation;
use crate::indent::{increase, LINE_LIMIT};
use crate::stmt::SHORT_BODY_LIMIT;
use crate::types::rewrite_type;
use crate::util::{camel_capitalized, interpret_escapes, upper_snake_case};
use crate::{KotlinEmitter, ERROR_SENTINEL};

impl KotlinEmitter<'_> {
    /// Translate one expression at the given indentation.
    pub(crate) fn translate_expression(
        &mut self,
        expression: &Expression,
        indentation: &str,
    ) -> String {
        match &expression.kind {
            ExpressionKind::Template { pattern, matches } => {
                // Longest key first, ties broken lexicographically, so a
                // key that prefixes another can never clobber it and the
                // output does not depend on map iteration order.
                let mut keys: Vec<&String> = matches.keys().collect();
                keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
                let mut result = pattern.clone();
                for key in keys {
                    let value = self.translate_expression(&matches[key], indentation);
                    result = result.replace(key.as_str(), &value);
                }
                result
            }

            ExpressionKind::LiteralCode { string }
            | ExpressionKind::LiteralDeclaration { string } => interpret_escapes(string),

            ExpressionKind::ArrayLiteral { elements, .. } => {
                let rendered: Vec<String> = elements
                    .iter()
                    .map(|element| self.translate_expression(element, indentation))
                    .collect();
                format!("mutableListOf({})", rendered.join(", "))
            }

            ExpressionKind::DictionaryLiteral { keys, values, .. } => {
                let entries: Vec<String> = keys
                    .iter()
                    .zip(values)
                    .map(|(key, value)| {
                        format!(
                            "{} to {}",
                            self.translate_expression(key, indentation),
                            self.translate_expression(value, indentation)
                        )
                    })
                    .collect();
                format!("mutableMapOf({})", entries.join(", "))
            }

            ExpressionKind::BinaryOperator {
                left,
                right,
                operator,
                ..
            } => format!(
                "{} {} {}",
                self.translate_expression(left, indentation),
                operator,
                self.translate_expression(right, indentation)
            ),

            ExpressionKind::Call {
                function,
                arguments,
            } => self.translate_call(function, arguments, expression.range, indentation, false),

            ExpressionKind::Closure {
                parameters,
                statements,
                ..
            } => self.translate_closure(parameters, statements, indentation),

            ExpressionKind::DeclarationReference { identifier, .. } => display_name(identifier),

            ExpressionKind::Return { expression } => match expression {
                Some(expression) => {
                    format!("return {}", self.translate_expression(expression, indentation))
                }
                None => "return".to_string(),
            },

            ExpressionKind::Dot { left, right } => self.translate_dot(left, right, indentation),

            ExpressionKind::LiteralString { value } => format!("\"{value}\""),

            ExpressionKind::LiteralCharacter { value } => format!("'{value}'"),

            ExpressionKind::InterpolatedString { expressions } => {
                self.translate_interpolated_string(expressions, indentation)
            }

            ExpressionKind::PrefixUnary {
                expression,
                operator,
                ..
            } => format!("{operator}{}", self.translate_expression(expression, indentation)),

            ExpressionKind::PostfixUnary {
                expression,
                operator,
                ..
            } => format!("{}{operator}", self.translate_expression(expression, indentation)),

            ExpressionKind::IfExpression {
                condition,
                true_expression,
                false_expression,
            } => format!(
                "if ({}) {{ {} }} else {{ {} }}",
                self.translate_expression(condition, indentation),
                self.translate_expression(true_expression, indentation),
                self.translate_expression(false_expression, indentation)
            ),

            ExpressionKind::TypeExpression { type_name } => rewrite_type(type_name),

            ExpressionKind::Subscript { object, index, .. } => format!(
                "{}[{}]",
                self.translate_expression(object, indentation),
                self.translate_expression(index, indentation)
            ),

            ExpressionKind::Parentheses { expression } => {
                format!("({})", self.translate_expression(expression, indentation))
            }

            ExpressionKind::ForceValue { expression } => {
                format!("{}!!", self.translate_expression(expression, indentation))
            }

            ExpressionKind::Optional { expression } => {
                format!("{}?", self.translate_expression(expression, indentation))
            }

            ExpressionKind::LiteralInt { value } => value.to_string(),

            ExpressionKind::LiteralUInt { value } => format!("{value}u"),

            ExpressionKind::LiteralDouble { value } => format_floating(*value),

            ExpressionKind::LiteralFloat { value } => format!("{}f", format_floating(*value)),

            ExpressionKind::LiteralBool { value } => value.to_string(),

            ExpressionKind::NilLiteral => "null".to_string(),

            ExpressionKind::Tuple { pairs } => {
                self.translate_tuple(pairs, None, indentation, false)
            }

            ExpressionKind::TupleShuffle {
                labels,
                indices,
                expressions,
            } => self.translate_tuple_shuffle(
                labels,
                indices,
                expressions,
                expression.range,
                indentation,
                false,
            ),

            ExpressionKind::Error => ERROR_SENTINEL.to_string(),
        }
    }

    /// Calls: peel the dot chain, apply any recorded rename, render the
    /// argument list, and wrap once if the whole thing runs long.
    fn translate_call(
        &mut self,
        function: &Expression,
        arguments: &Expression,
        range: Option<SourceRange>,
        indentation: &str,
        should_add_newlines: bool,
    ) -> String {
        let checkpoint = self.diagnostics.checkpoint();

        let mut result = String::new();
        let mut function_expression = function;
        while let ExpressionKind::Dot { left, right } = &function_expression.kind {
            result.push_str(&self.translate_expression(left, indentation));
            result.push('.');
            function_expression = right;
        }

        let translation: Option<FunctionTranslation> = match &function_expression.kind {
            ExpressionKind::DeclarationReference {
                identifier,
                type_name,
            } => self
                .ctx
                .get_function_translation(&display_name(identifier), type_name)
                .cloned(),
            _ => None,
        };

        match &translation {
            Some(translation) => result.push_str(&translation.prefix),
            None => result.push_str(&self.translate_expression(function_expression, indentation)),
        }

        let arguments_text = self.translate_call_arguments(
            arguments,
            translation.as_ref(),
            range,
            indentation,
            should_add_newlines,
        );
        result.push_str(&arguments_text);

        if !should_add_newlines && result.chars().count() >= LINE_LIMIT {
            self.diagnostics.rewind_to(checkpoint);
            return self.translate_call(function, arguments, range, indentation, true);
        }
        result
    }

    /// A call's arguments must be a tuple or a tuple shuffle.
    fn translate_call_arguments(
        &mut self,
        arguments: &Expression,
        translation: Option<&FunctionTranslation>,
        call_range: Option<SourceRange>,
        indentation: &str,
        should_add_newlines: bool,
    ) -> String {
        match &arguments.kind {
            ExpressionKind::Tuple { pairs } => {
                self.translate_call_tuple(pairs, translation, indentation, should_add_newlines)
            }
            ExpressionKind::TupleShuffle {
                labels,
                indices,
                expressions,
            } => self.translate_tuple_shuffle(
                labels,
                indices,
                expressions,
                arguments.range.or(call_range),
                indentation,
                should_add_newlines,
            ),
            _ => self.unexpected_structure(
                TranspilerErrorKind::MalformedCallArguments,
                "expected a call's arguments to be a tuple or a tuple shuffle",
                arguments,
                arguments.range.or(call_range),
            ),
        }
    }

    /// Argument tuples peel a trailing closure out of the parentheses; a
    /// sole closure argument drops the parentheses entirely.
    fn translate_call_tuple(
        &mut self,
        pairs: &[TuplePair],
        translation: Option<&FunctionTranslation>,
        indentation: &str,
        should_add_newlines: bool,
    ) -> String {
        if let Some((last, rest)) = pairs.split_last() {
            if let ExpressionKind::Closure {
                parameters,
                statements,
                ..
            } = &last.expression.kind
            {
                let closure_text =
                    self.translate_closure(parameters, statements, &increase(indentation));
                if rest.is_empty() {
                    return format!(" {closure_text}");
                }
                let rest_text =
                    self.translate_tuple(rest, translation, indentation, should_add_newlines);
                return format!("{rest_text} {closure_text}");
            }
        }
        self.translate_tuple(pairs, translation, indentation, should_add_newlines)
    }

    /// Render a tuple. A recorded translation substitutes its Kotlin
    /// parameter names for the source argument labels; unlabelled
    /// arguments stay unlabelled either way.
    pub(crate) fn translate_tuple(
        &mut self,
        pairs: &[TuplePair],
        translation: Option<&FunctionTranslation>,
        indentation: &str,
        should_add_newlines: bool,
    ) -> String {
        if pairs.is_empty() {
            return "()".to_string();
        }
        let expression_indentation = if should_add_newlines {
            increase(indentation)
        } else {
            indentation.to_string()
        };
        let contents: Vec<String> = pairs
            .iter()
            .enumerate()
            .map(|(position, pair)| {
                let expression_text =
                    self.translate_expression(&pair.expression, &expression_indentation);
                let label = match translation {
                    Some(translation) => pair
                        .label
                        .as_ref()
                        .and_then(|_| translation.parameters.get(position).cloned()),
                    None => pair.label.clone(),
                };
                match label {
                    Some(label) => format!("{label} = {expression_text}"),
                    None => expression_text,
                }
            })
            .collect();
        join_arguments(&contents, indentation, should_add_newlines)
    }

    /// Render a tuple shuffle: skip absent slots, pull one expression per
    /// present slot, and expand variadic slots unlabelled.
    pub(crate) fn translate_tuple_shuffle(
        &mut self,
        labels: &[String],
        indices: &[TupleShuffleIndex],
        expressions: &[Expression],
        range: Option<SourceRange>,
        indentation: &str,
        should_add_newlines: bool,
    ) -> String {
        if labels.len() != indices.len() {
            return self.unexpected_structure(
                TranspilerErrorKind::MalformedTupleShuffle,
                "malformed tuple shuffle: mismatched label and index counts",
                &indices,
                range,
            );
        }
        let required: usize = indices
            .iter()
            .map(|index| match index {
                TupleShuffleIndex::Absent => 0,
                TupleShuffleIndex::Present => 1,
                TupleShuffleIndex::Variadic { count } => *count,
            })
            .sum();
        if expressions.len() != required {
            return self.unexpected_structure(
                TranspilerErrorKind::MalformedTupleShuffle,
                "malformed tuple shuffle: expression count does not match its indices",
                &indices,
                range,
            );
        }

        // Variadic arguments cannot be mixed with labels before them, so
        // everything up to and including the first variadic slot goes out
        // unlabelled.
        let first_variadic = indices
            .iter()
            .position(|index| matches!(index, TupleShuffleIndex::Variadic { .. }));
        let expression_indentation = if should_add_newlines {
            increase(indentation)
        } else {
            indentation.to_string()
        };

        let mut expression_iter = expressions.iter();
        let mut contents: Vec<String> = Vec::new();
        for (position, (label, index)) in labels.iter().zip(indices).enumerate() {
            match index {
                TupleShuffleIndex::Absent => {}
                TupleShuffleIndex::Present => {
                    let expression = expression_iter.next().expect("counts verified above");
                    let expression_text =
                        self.translate_expression(expression, &expression_indentation);
                    let labelled = !label.is_empty()
                        && label != "_"
                        && first_variadic.map_or(true, |variadic| position > variadic);
                    contents.push(if labelled {
                        format!("{label} = {expression_text}")
                    } else {
                        expression_text
                    });
                }
                TupleShuffleIndex::Variadic { count } => {
                    for _ in 0..*count {
                        let expression = expression_iter.next().expect("counts verified above");
                        contents.push(self.translate_expression(expression, &expression_indentation));
                    }
                }
            }
        }
        join_arguments(&contents, indentation, should_add_newlines)
    }

    /// Closures: parameter labels, then either an inline single
    /// expression or an indented statement block.
    pub(crate) fn translate_closure(
        &mut self,
        parameters: &[LabeledType],
        statements: &[Statement],
        indentation: &str,
    ) -> String {
        if statements.is_empty() {
            return "{ }".to_string();
        }
        let mut result = String::from("{");
        if !parameters.is_empty() {
            let names: Vec<&str> = parameters
                .iter()
                .map(|parameter| parameter.label.as_str())
                .collect();
            result.push_str(&format!(" {} ->", names.join(", ")));
        }

        if let [only] = statements {
            if let StatementKind::Expression { expression } = &only.kind {
                let expression_text = self.translate_expression(expression, indentation);
                return format!("{result} {expression_text} }}");
            }
        }

        result.push('\n');
        result.push_str(&self.translate_block(statements, &increase(indentation), SHORT_BODY_LIMIT));
        result.push_str(&format!("{indentation}}}"));
        result
    }

    /// Member access, with the enum lowerings applied: sealed-class cases
    /// become constructor calls, enum-class cases become constants.
    fn translate_dot(
        &mut self,
        left: &Expression,
        right: &Expression,
        indentation: &str,
    ) -> String {
        let left_text = self.translate_expression(left, indentation);
        let right_text = self.translate_expression(right, indentation);

        if self.ctx.is_sealed_class(&left_text) {
            return format!("{left_text}.{}()", camel_capitalized(&right_text));
        }
        let last_segment = left_text.rsplit('.').next().unwrap_or(&left_text);
        if self.ctx.is_enum_class(last_segment) {
            return format!("{left_text}.{}", upper_snake_case(&right_text));
        }
        format!("{left_text}.{right_text}")
    }

    /// Interpolated strings: literal parts go in verbatim, everything
    /// else is spliced as `${...}`. The frontend encodes an empty segment
    /// as a literal `""`, which is dropped here.
    fn translate_interpolated_string(
        &mut self,
        expressions: &[Expression],
        indentation: &str,
    ) -> String {
        let mut result = String::from("\"");
        for expression in expressions {
            if let ExpressionKind::LiteralString { value } = &expression.kind {
                if value == "\"\"" {
                    continue;
                }
                result.push_str(value);
            } else {
                result.push_str(&format!(
                    "${{{}}}",
                    self.translate_expression(expression, indentation)
                ));
            }
        }
        result.push('"');
        result
    }
}

/// The part of a declaration reference before its mangled suffix.
fn display_name(identifier: &str) -> String {
    match identifier.split_once('(') {
        Some((name, _)) => name.to_string(),
        None => identifier.to_string(),
    }
}

/// Join rendered arguments inline or one per line inside the parentheses.
fn join_arguments(contents: &[String], indentation: &str, should_add_newlines: bool) -> String {
    if should_add_newlines {
        let increased = increase(indentation);
        format!(
            "(\n{increased}{})",
            contents.join(&format!(",\n{increased}"))
        )
    } else {
        format!("({})", contents.join(", "))
    }
}

/// Kotlin float literals always carry a decimal point.
fn format_floating(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TranslationContext;
    use gale_common::Diagnostics;
    use rustc_hash::FxHashMap;

    fn emit(expression: &Expression) -> String {
        emit_with(&TranslationContext::new(), expression)
    }

    fn emit_with(ctx: &TranslationContext, expression: &Expression) -> String {
        let mut diagnostics = Diagnostics::new();
        let mut emitter = KotlinEmitter::new(ctx, &mut diagnostics);
        emitter.translate_expression(expression, "")
    }

    fn int(value: i64) -> Expression {
        Expression::new(ExpressionKind::LiteralInt { value })
    }

    fn reference(identifier: &str, type_name: &str) -> Expression {
        Expression::new(ExpressionKind::DeclarationReference {
            identifier: identifier.to_string(),
            type_name: type_name.to_string(),
        })
    }

    fn call(function: Expression, pairs: Vec<TuplePair>) -> Expression {
        Expression::new(ExpressionKind::Call {
            function: Box::new(function),
            arguments: Box::new(Expression::new(ExpressionKind::Tuple { pairs })),
        })
    }

    fn unlabelled(expression: Expression) -> TuplePair {
        TuplePair {
            label: None,
            expression,
        }
    }

    #[test]
    fn literals_render_in_kotlin_form() {
        assert_eq!(emit(&int(42)), "42");
        assert_eq!(
            emit(&Expression::new(ExpressionKind::LiteralUInt { value: 7 })),
            "7u"
        );
        assert_eq!(
            emit(&Expression::new(ExpressionKind::LiteralDouble { value: 3.0 })),
            "3.0"
        );
        assert_eq!(
            emit(&Expression::new(ExpressionKind::LiteralDouble { value: 2.5 })),
            "2.5"
        );
        assert_eq!(
            emit(&Expression::new(ExpressionKind::LiteralFloat { value: 1.5 })),
            "1.5f"
        );
        assert_eq!(
            emit(&Expression::new(ExpressionKind::LiteralBool { value: true })),
            "true"
        );
        assert_eq!(emit(&Expression::new(ExpressionKind::NilLiteral)), "null");
        assert_eq!(
            emit(&Expression::new(ExpressionKind::LiteralString {
                value: "hi".to_string()
            })),
            "\"hi\""
        );
        assert_eq!(
            emit(&Expression::new(ExpressionKind::LiteralCharacter {
                value: "x".to_string()
            })),
            "'x'"
        );
    }

    #[test]
    fn array_and_dictionary_literals() {
        let array = Expression::new(ExpressionKind::ArrayLiteral {
            elements: vec![int(1), int(2)],
            type_name: "[Int]".to_string(),
        });
        assert_eq!(emit(&array), "mutableListOf(1, 2)");

        let dictionary = Expression::new(ExpressionKind::DictionaryLiteral {
            keys: vec![
                Expression::new(ExpressionKind::LiteralString {
                    value: "a".to_string(),
                }),
            ],
            values: vec![int(1)],
            type_name: "[String: Int]".to_string(),
        });
        assert_eq!(emit(&dictionary), "mutableMapOf(\"a\" to 1)");
    }

    #[test]
    fn declaration_reference_strips_mangled_suffix() {
        assert_eq!(emit(&reference("print(_:)", "(Any) -> ()")), "print");
        assert_eq!(emit(&reference("count", "Int")), "count");
    }

    #[test]
    fn operators_and_wrappers() {
        let sum = Expression::new(ExpressionKind::BinaryOperator {
            left: Box::new(int(1)),
            right: Box::new(int(2)),
            operator: "+".to_string(),
            type_name: "Int".to_string(),
        });
        assert_eq!(emit(&sum), "1 + 2");

        let negated = Expression::new(ExpressionKind::PrefixUnary {
            expression: Box::new(reference("flag", "Bool")),
            operator: "!".to_string(),
            type_name: "Bool".to_string(),
        });
        assert_eq!(emit(&negated), "!flag");

        let forced = Expression::new(ExpressionKind::ForceValue {
            expression: Box::new(reference("value", "Int?")),
        });
        assert_eq!(emit(&forced), "value!!");

        let chained = Expression::new(ExpressionKind::Optional {
            expression: Box::new(reference("value", "Int?")),
        });
        assert_eq!(emit(&chained), "value?");

        let parenthesized = Expression::new(ExpressionKind::Parentheses {
            expression: Box::new(int(1)),
        });
        assert_eq!(emit(&parenthesized), "(1)");

        let subscript = Expression::new(ExpressionKind::Subscript {
            object: Box::new(reference("list", "[Int]")),
            index: Box::new(int(0)),
            type_name: "Int".to_string(),
        });
        assert_eq!(emit(&subscript), "list[0]");
    }

    #[test]
    fn if_expression_renders_inline() {
        let conditional = Expression::new(ExpressionKind::IfExpression {
            condition: Box::new(reference("flag", "Bool")),
            true_expression: Box::new(int(1)),
            false_expression: Box::new(int(2)),
        });
        assert_eq!(emit(&conditional), "if (flag) { 1 } else { 2 }");
    }

    #[test]
    fn plain_call_with_labels() {
        let expression = call(
            reference("move(x:y:)", "(Int, Int) -> ()"),
            vec![
                TuplePair {
                    label: Some("x".to_string()),
                    expression: int(1),
                },
                TuplePair {
                    label: Some("y".to_string()),
                    expression: int(2),
                },
            ],
        );
        assert_eq!(emit(&expression), "move(x = 1, y = 2)");
    }

    #[test]
    fn function_translation_replaces_name_and_labels() {
        let mut ctx = TranslationContext::new();
        ctx.add_function_translation(FunctionTranslation {
            source_api_name: "index(of:)".to_string(),
            type_name: "(Int) -> Int?".to_string(),
            prefix: "indexOf".to_string(),
            parameters: vec!["element".to_string()],
        });
        let expression = call(
            reference("index(of:)", "(Int) -> Int?"),
            vec![TuplePair {
                label: Some("of".to_string()),
                expression: int(5),
            }],
        );
        assert_eq!(emit_with(&ctx, &expression), "indexOf(element = 5)");
    }

    #[test]
    fn dot_chains_are_peeled_onto_the_call() {
        let function = Expression::new(ExpressionKind::Dot {
            left: Box::new(reference("list", "[Int]")),
            right: Box::new(reference("count(_:)", "(Int) -> Int")),
        });
        let expression = call(function, vec![unlabelled(int(1))]);
        assert_eq!(emit(&expression), "list.count(1)");
    }

    #[test]
    fn sole_closure_argument_becomes_trailing() {
        let closure = Expression::new(ExpressionKind::Closure {
            parameters: vec![LabeledType {
                label: "x".to_string(),
                type_name: "Int".to_string(),
            }],
            statements: vec![Statement::new(StatementKind::Expression {
                expression: Expression::new(ExpressionKind::BinaryOperator {
                    left: Box::new(reference("x", "Int")),
                    right: Box::new(int(1)),
                    operator: "+".to_string(),
                    type_name: "Int".to_string(),
                }),
            })],
            type_name: "(Int) -> Int".to_string(),
        });
        let function = Expression::new(ExpressionKind::Dot {
            left: Box::new(reference("list", "[Int]")),
            right: Box::new(reference("map(_:)", "((Int) -> Int) -> [Int]")),
        });
        let expression = call(function, vec![unlabelled(closure)]);
        assert_eq!(emit(&expression), "list.map { x -> x + 1 }");
    }

    #[test]
    fn trailing_closure_follows_other_arguments() {
        let closure = Expression::new(ExpressionKind::Closure {
            parameters: Vec::new(),
            statements: vec![Statement::new(StatementKind::Expression {
                expression: reference("done", "Bool"),
            })],
            type_name: "() -> Bool".to_string(),
        });
        let expression = call(
            reference("retry(times:onDone:)", "(Int, () -> Bool) -> ()"),
            vec![
                TuplePair {
                    label: Some("times".to_string()),
                    expression: int(3),
                },
                unlabelled(closure),
            ],
        );
        assert_eq!(emit(&expression), "retry(times = 3) { done }");
    }

    #[test]
    fn empty_closure_renders_as_empty_braces() {
        let closure = Expression::new(ExpressionKind::Closure {
            parameters: Vec::new(),
            statements: Vec::new(),
            type_name: "() -> ()".to_string(),
        });
        assert_eq!(emit(&closure), "{ }");
    }

    #[test]
    fn multi_statement_closure_gets_a_block() {
        let closure = Expression::new(ExpressionKind::Closure {
            parameters: vec![LabeledType {
                label: "x".to_string(),
                type_name: "Int".to_string(),
            }],
            statements: vec![
                Statement::new(StatementKind::Assignment {
                    left: reference("y", "Int"),
                    right: reference("x", "Int"),
                }),
                Statement::new(StatementKind::Return {
                    expression: Some(reference("y", "Int")),
                }),
            ],
            type_name: "(Int) -> Int".to_string(),
        });
        assert_eq!(emit(&closure), "{ x ->\n\ty = x\n\treturn y\n}");
    }

    #[test]
    fn long_calls_wrap_their_arguments() {
        let expression = call(
            reference("configure", "(String, String) -> ()"),
            vec![
                TuplePair {
                    label: Some("firstConfigurationValue".to_string()),
                    expression: Expression::new(ExpressionKind::LiteralString {
                        value: "aaaaaaaaaaaaaaaaaaaaaaaaaaaa".to_string(),
                    }),
                },
                TuplePair {
                    label: Some("secondConfigurationValue".to_string()),
                    expression: Expression::new(ExpressionKind::LiteralString {
                        value: "bbbbbbbbbbbbbbbbbbbbbbbbbbbb".to_string(),
                    }),
                },
            ],
        );
        let output = emit(&expression);
        assert!(output.contains("(\n"));
        assert!(output.contains("\tfirstConfigurationValue = "));
        assert!(output.contains(",\n\tsecondConfigurationValue = "));
    }

    #[test]
    fn malformed_call_arguments_are_a_structural_error() {
        let ctx = TranslationContext::new();
        let mut diagnostics = Diagnostics::new();
        let mut emitter = KotlinEmitter::new(&ctx, &mut diagnostics);
        let expression = Expression::new(ExpressionKind::Call {
            function: Box::new(reference("f", "(Int) -> ()")),
            arguments: Box::new(int(1)),
        });
        let output = emitter.translate_expression(&expression, "");
        assert_eq!(output, format!("f{ERROR_SENTINEL}"));
        assert!(diagnostics.has_errors());
    }

    #[test]
    fn tuple_shuffle_reorders_and_defaults() {
        let shuffle = Expression::new(ExpressionKind::TupleShuffle {
            labels: vec!["x".to_string(), "y".to_string(), "z".to_string()],
            indices: vec![
                TupleShuffleIndex::Present,
                TupleShuffleIndex::Absent,
                TupleShuffleIndex::Present,
            ],
            expressions: vec![int(1), int(3)],
        });
        assert_eq!(emit(&shuffle), "(x = 1, z = 3)");
    }

    #[test]
    fn variadic_shuffle_suppresses_labels_up_to_the_variadic() {
        let shuffle = Expression::new(ExpressionKind::TupleShuffle {
            labels: vec![
                "values".to_string(),
                "separator".to_string(),
            ],
            indices: vec![
                TupleShuffleIndex::Variadic { count: 2 },
                TupleShuffleIndex::Present,
            ],
            expressions: vec![
                int(1),
                int(2),
                Expression::new(ExpressionKind::LiteralString {
                    value: ", ".to_string(),
                }),
            ],
        });
        assert_eq!(emit(&shuffle), "(1, 2, separator = \", \")");
    }

    #[test]
    fn mismatched_shuffle_is_a_structural_error() {
        let ctx = TranslationContext::new();
        let mut diagnostics = Diagnostics::new();
        let mut emitter = KotlinEmitter::new(&ctx, &mut diagnostics);
        let shuffle = Expression::new(ExpressionKind::TupleShuffle {
            labels: vec!["x".to_string()],
            indices: vec![TupleShuffleIndex::Present, TupleShuffleIndex::Present],
            expressions: vec![int(1), int(2)],
        });
        assert_eq!(emitter.translate_expression(&shuffle, ""), ERROR_SENTINEL);
        assert!(diagnostics.has_errors());
    }

    #[test]
    fn sealed_class_access_becomes_a_constructor_call() {
        let mut ctx = TranslationContext::new();
        ctx.add_sealed_class("Shape");
        let access = Expression::new(ExpressionKind::Dot {
            left: Box::new(reference("Shape", "Shape.Type")),
            right: Box::new(reference("circle", "Shape")),
        });
        assert_eq!(emit_with(&ctx, &access), "Shape.Circle()");
    }

    #[test]
    fn enum_class_access_becomes_a_constant() {
        let mut ctx = TranslationContext::new();
        ctx.add_enum_class("Direction");
        let access = Expression::new(ExpressionKind::Dot {
            left: Box::new(reference("Direction", "Direction.Type")),
            right: Box::new(reference("northEast", "Direction")),
        });
        assert_eq!(emit_with(&ctx, &access), "Direction.NORTH_EAST");
    }

    #[test]
    fn qualified_enum_class_access_checks_the_last_segment() {
        let mut ctx = TranslationContext::new();
        ctx.add_enum_class("Direction");
        let qualified = Expression::new(ExpressionKind::Dot {
            left: Box::new(Expression::new(ExpressionKind::Dot {
                left: Box::new(reference("Compass", "Compass.Type")),
                right: Box::new(reference("Direction", "Direction.Type")),
            })),
            right: Box::new(reference("north", "Direction")),
        });
        assert_eq!(emit_with(&ctx, &qualified), "Compass.Direction.NORTH");
    }

    #[test]
    fn plain_dot_access_passes_through() {
        let access = Expression::new(ExpressionKind::Dot {
            left: Box::new(reference("point", "Point")),
            right: Box::new(reference("x", "Int")),
        });
        assert_eq!(emit(&access), "point.x");
    }

    #[test]
    fn interpolated_string_splices_expressions() {
        let interpolated = Expression::new(ExpressionKind::InterpolatedString {
            expressions: vec![
                Expression::new(ExpressionKind::LiteralString {
                    value: "count: ".to_string(),
                }),
                reference("count", "Int"),
            ],
        });
        assert_eq!(emit(&interpolated), "\"count: ${count}\"");
    }

    #[test]
    fn interpolated_string_drops_empty_segment_markers() {
        let interpolated = Expression::new(ExpressionKind::InterpolatedString {
            expressions: vec![
                Expression::new(ExpressionKind::LiteralString {
                    value: "\"\"".to_string(),
                }),
                reference("value", "Int"),
            ],
        });
        assert_eq!(emit(&interpolated), "\"${value}\"");
    }

    #[test]
    fn template_substitutes_longest_key_first() {
        let mut matches = FxHashMap::default();
        matches.insert("_array".to_string(), reference("list", "[Int]"));
        matches.insert("_arrayIndex".to_string(), int(0));
        let template = Expression::new(ExpressionKind::Template {
            pattern: "_array.removeAt(_arrayIndex)".to_string(),
            matches,
        });
        assert_eq!(emit(&template), "list.removeAt(0)");
    }

    #[test]
    fn literal_code_interprets_escapes() {
        let code = Expression::new(ExpressionKind::LiteralCode {
            string: "println(\\\"done\\\")".to_string(),
        });
        assert_eq!(emit(&code), "println(\"done\")");
    }

    #[test]
    fn expression_return_has_no_newline() {
        let bare = Expression::new(ExpressionKind::Return { expression: None });
        assert_eq!(emit(&bare), "return");
        let valued = Expression::new(ExpressionKind::Return {
            expression: Some(Box::new(int(1))),
        });
        assert_eq!(emit(&valued), "return 1");
    }
}
