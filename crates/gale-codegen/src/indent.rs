//! Indentation and line-width constants for the emitter.
//!
//! Indentation is carried through the emitter as a string of tabs, one tab
//! per nesting level. Keeping it a string (rather than a level counter)
//! means every emission site can splice it directly into its output.

/// One level of indentation.
pub const INDENT_UNIT: &str = "\t";

/// Hard line-length threshold. Function headers and call expressions that
/// render at or past this width are re-emitted in multi-line form.
pub const LINE_LIMIT: usize = 100;

/// Add one indentation level.
pub fn increase(indentation: &str) -> String {
    let mut result = String::with_capacity(indentation.len() + INDENT_UNIT.len());
    result.push_str(indentation);
    result.push_str(INDENT_UNIT);
    result
}

/// Remove one indentation level. Decreasing an empty indentation is a
/// no-op rather than an underflow.
pub fn decrease(indentation: &str) -> String {
    match indentation.strip_suffix(INDENT_UNIT) {
        Some(rest) => rest.to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increase_appends_one_tab() {
        assert_eq!(increase(""), "\t");
        assert_eq!(increase("\t"), "\t\t");
    }

    #[test]
    fn decrease_removes_one_tab() {
        assert_eq!(decrease("\t\t"), "\t");
        assert_eq!(decrease("\t"), "");
    }

    #[test]
    fn decrease_on_empty_is_empty() {
        assert_eq!(decrease(""), "");
    }

    #[test]
    fn increase_then_decrease_round_trips() {
        let indentation = "\t\t\t";
        assert_eq!(decrease(&increase(indentation)), indentation);
    }
}
