//! String utilities shared by the type rewriter and the emitters.

/// Split a type list at top-level occurrences of any of the separators.
///
/// Top-level means outside every pair of angle brackets, parentheses, and
/// square brackets. The arrow of a function type is consumed atomically so
/// its `>` never closes a bracket it did not open.
pub fn split_type_list(type_list: &str, separators: &[&str]) -> Vec<String> {
    let mut result = Vec::new();
    let mut current = String::new();
    let mut depth = 0i32;
    let mut rest = type_list;

    'outer: while !rest.is_empty() {
        if depth == 0 {
            for separator in separators {
                if let Some(after) = rest.strip_prefix(separator) {
                    result.push(std::mem::take(&mut current));
                    rest = after;
                    continue 'outer;
                }
            }
        }
        if let Some(after) = rest.strip_prefix("->") {
            current.push_str("->");
            rest = after;
            continue;
        }
        let ch = rest.chars().next().expect("rest is non-empty");
        match ch {
            '<' | '(' | '[' => depth += 1,
            '>' | ')' | ']' => depth -= 1,
            _ => {}
        }
        current.push(ch);
        rest = &rest[ch.len_utf8()..];
    }

    result.push(current);
    result
}

/// Whether the whole string is wrapped in one matching pair of
/// parentheses, i.e. the opening paren at position 0 closes at the last
/// character.
pub fn is_in_enveloping_parentheses(type_name: &str) -> bool {
    if !type_name.starts_with('(') || !type_name.ends_with(')') {
        return false;
    }
    let mut depth = 0i32;
    let last = type_name.len() - 1;
    for (position, ch) in type_name.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return position == last;
                }
            }
            _ => {}
        }
    }
    false
}

/// Capitalize the first character: `rgb` becomes `Rgb`.
pub fn camel_capitalized(identifier: &str) -> String {
    let mut chars = identifier.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert a camel-case identifier to upper snake case: `northEast`
/// becomes `NORTH_EAST`.
pub fn upper_snake_case(identifier: &str) -> String {
    let mut result = String::with_capacity(identifier.len() + 4);
    for (position, ch) in identifier.chars().enumerate() {
        if ch.is_uppercase() && position > 0 && !result.ends_with('_') {
            result.push('_');
        }
        result.extend(ch.to_uppercase());
    }
    result
}

/// Interpret backslash escape sequences in raw spliced code.
///
/// Recognises the common single-character escapes; an unknown escape is
/// kept verbatim, backslash included.
pub fn interpret_escapes(raw: &str) -> String {
    let mut result = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('r') => result.push('\r'),
            Some('0') => result.push('\0'),
            Some('\\') => result.push('\\'),
            Some('\'') => result.push('\''),
            Some('"') => result.push('"'),
            Some(other) => {
                result.push('\\');
                result.push(other);
            }
            None => result.push('\\'),
        }
    }
    result
}
