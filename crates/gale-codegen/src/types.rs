//! Swift-to-Kotlin type name rewriting.
//!
//! Types arrive from the frontend as Swift type strings and leave as
//! Kotlin type strings. The rewriter peels one layer of sugar per step and
//! recurses on the parts: optionals keep their `?`, collection sugar
//! becomes `MutableList`/`MutableMap`, two-element tuples become `Pair`,
//! and function types are rebuilt component by component. Anything left
//! over goes through a fixed rename table and otherwise passes unchanged,
//! so unknown user types survive the trip verbatim.

use crate::util::{is_in_enveloping_parentheses, split_type_list};

/// Rewrite a Swift type string into its Kotlin form.
///
/// The rule order matters: sugar is matched before the tuple and function
/// rules, and the rename table is the final fallback.
pub fn rewrite_type(source_type: &str) -> String {
    let type_name = source_type.replace("()", "Unit");

    // Optional sugar: T? -> T?
    if let Some(inner) = type_name.strip_suffix('?') {
        return format!("{}?", rewrite_type(inner));
    }

    // Collection sugar: [K: V] -> MutableMap, [T] -> MutableList
    if type_name.starts_with('[') && type_name.ends_with(']') {
        let inner = &type_name[1..type_name.len() - 1];
        let halves = split_type_list(inner, &[":"]);
        if halves.len() == 2 {
            return format!(
                "MutableMap<{}, {}>",
                rewrite_type(halves[0].trim()),
                rewrite_type(halves[1].trim())
            );
        }
        return format!("MutableList<{}>", rewrite_type(inner.trim()));
    }

    // The frontend's reference-semantics container classes.
    if let Some(inner) = strip_generic("ArrayClass", &type_name) {
        return format!("MutableList<{}>", rewrite_type(inner));
    }
    if let Some(inner) = strip_generic("DictionaryClass", &type_name) {
        let halves = split_type_list(inner, &[", "]);
        if halves.len() == 2 {
            return format!(
                "MutableMap<{}, {}>",
                rewrite_type(halves[0].trim()),
                rewrite_type(halves[1].trim())
            );
        }
    }

    // Tuples: exactly two components become a Pair.
    if is_in_enveloping_parentheses(&type_name) {
        let inner = &type_name[1..type_name.len() - 1];
        let components = split_type_list(inner, &[", "]);
        if components.len() == 2 {
            return format!(
                "Pair<{}, {}>",
                rewrite_type(&components[0]),
                rewrite_type(&components[1])
            );
        }
        return rewrite_type(inner);
    }

    // Function types: rebuild each component around the arrows.
    let components = split_type_list(&type_name, &[" -> "]);
    if components.len() > 1 {
        let mut parts = Vec::with_capacity(components.len());
        for (position, component) in components.iter().enumerate() {
            if position + 1 < components.len() && is_in_enveloping_parentheses(component) {
                let inner = &component[1..component.len() - 1];
                let arguments: Vec<String> = split_type_list(inner, &[", "])
                    .iter()
                    .map(|argument| rewrite_type(argument))
                    .collect();
                parts.push(format!("({})", arguments.join(", ")));
            } else {
                parts.push(rewrite_type(component));
            }
        }
        return parts.join(" -> ");
    }

    match type_mapping(&type_name) {
        Some(mapped) => mapped.to_string(),
        None => type_name,
    }
}

/// Strip `Name<` and the trailing `>`, returning the type arguments.
fn strip_generic<'a>(name: &str, type_name: &'a str) -> Option<&'a str> {
    type_name
        .strip_prefix(name)?
        .strip_prefix('<')?
        .strip_suffix('>')
}

/// Fixed renames for standard-library types whose Kotlin counterparts have
/// different names. Types absent from this table pass through unchanged.
pub fn type_mapping(type_name: &str) -> Option<&'static str> {
    let mapped = match type_name {
        "Int8" => "Byte",
        "Int16" => "Short",
        "Int32" => "Int",
        "Int64" => "Long",
        "UInt8" => "UByte",
        "UInt16" => "UShort",
        "UInt32" => "UInt",
        "UInt64" => "ULong",
        "Float32" => "Float",
        "Float64" => "Double",
        "Character" => "Char",
        "AnyObject" => "Any?",
        "Error" => "Exception",
        "Substring" => "String",
        "String.SubSequence" => "String",
        "Substring.SubSequence" => "String",
        "String.Index" => "Int",
        "Substring.Index" => "Int",
        "Array<Element>.Index" => "Int",
        "Range<String.Index>" => "IntRange",
        _ => return None,
    };
    Some(mapped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_type() {
        assert_eq!(rewrite_type("()"), "Unit");
    }

    #[test]
    fn array_sugar() {
        assert_eq!(rewrite_type("[Int]"), "MutableList<Int>");
        assert_eq!(rewrite_type("[[Int]]"), "MutableList<MutableList<Int>>");
    }

    #[test]
    fn dictionary_sugar() {
        assert_eq!(rewrite_type("[String: Int]"), "MutableMap<String, Int>");
        assert_eq!(
            rewrite_type("[String: [Int: Bool]]"),
            "MutableMap<String, MutableMap<Int, Bool>>"
        );
    }

    #[test]
    fn optionals_keep_their_question_mark() {
        assert_eq!(rewrite_type("Int?"), "Int?");
        assert_eq!(rewrite_type("[Int]?"), "MutableList<Int>?");
        assert_eq!(rewrite_type("Int??"), "Int??");
    }

    #[test]
    fn container_classes() {
        assert_eq!(rewrite_type("ArrayClass<Int>"), "MutableList<Int>");
        assert_eq!(
            rewrite_type("DictionaryClass<String, Int>"),
            "MutableMap<String, Int>"
        );
        assert_eq!(
            rewrite_type("ArrayClass<[Int]>"),
            "MutableList<MutableList<Int>>"
        );
    }

    #[test]
    fn two_element_tuples_become_pairs() {
        assert_eq!(rewrite_type("(Int, String)"), "Pair<Int, String>");
        assert_eq!(
            rewrite_type("([Int], Float64)"),
            "Pair<MutableList<Int>, Double>"
        );
    }

    #[test]
    fn single_component_parentheses_are_stripped() {
        assert_eq!(rewrite_type("(Int)"), "Int");
    }

    #[test]
    fn function_types_are_preserved() {
        assert_eq!(rewrite_type("(Int) -> String"), "(Int) -> String");
        assert_eq!(rewrite_type("(Int, Int) -> Bool"), "(Int, Int) -> Bool");
        assert_eq!(
            rewrite_type("(Int) -> (Int) -> String"),
            "(Int) -> (Int) -> String"
        );
    }

    #[test]
    fn function_type_arguments_are_rewritten() {
        assert_eq!(
            rewrite_type("([Int], Character) -> Float64"),
            "(MutableList<Int>, Char) -> Double"
        );
    }

    #[test]
    fn scalar_renames() {
        assert_eq!(rewrite_type("Int32"), "Int");
        assert_eq!(rewrite_type("Float64"), "Double");
        assert_eq!(rewrite_type("Character"), "Char");
        assert_eq!(rewrite_type("Error"), "Exception");
        assert_eq!(rewrite_type("String.Index"), "Int");
    }

    #[test]
    fn unknown_types_pass_through() {
        assert_eq!(rewrite_type("MyStruct"), "MyStruct");
        assert_eq!(rewrite_type("Box<MyStruct>"), "Box<MyStruct>");
    }

    #[test]
    fn rewriting_is_idempotent_on_target_forms() {
        for target in [
            "Unit",
            "MutableList<Int>",
            "MutableMap<String, Int>",
            "Int?",
            "Pair<Int, String>",
            "(Int) -> String",
            "(Int, Int) -> Bool",
        ] {
            assert_eq!(rewrite_type(target), target, "not idempotent: {target}");
        }
    }
}
