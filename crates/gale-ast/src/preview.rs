//! Compact node previews for diagnostics.

use std::fmt;

/// Horizontal limit for node previews attached to diagnostics.
const PREVIEW_LIMIT: usize = 100;

/// Render a node as a single line capped at the preview limit.
///
/// Uses the node's `Debug` form with whitespace collapsed, so a deeply
/// nested subtree still produces one readable line in an error report.
pub fn node_preview(node: &dyn fmt::Debug) -> String {
    let full = format!("{:?}", node);
    let mut collapsed = String::with_capacity(full.len().min(PREVIEW_LIMIT));
    let mut last_was_space = false;
    for ch in full.chars() {
        if ch.is_whitespace() {
            if !last_was_space {
                collapsed.push(' ');
            }
            last_was_space = true;
        } else {
            collapsed.push(ch);
            last_was_space = false;
        }
    }

    if collapsed.chars().count() <= PREVIEW_LIMIT {
        return collapsed;
    }
    let truncated: String = collapsed.chars().take(PREVIEW_LIMIT - 3).collect();
    format!("{}...", truncated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{Expression, ExpressionKind};

    #[test]
    fn short_previews_pass_through() {
        let expr = Expression::new(ExpressionKind::LiteralInt { value: 7 });
        let preview = node_preview(&expr);
        assert!(preview.contains("LiteralInt"));
        assert!(preview.chars().count() <= 100);
    }

    #[test]
    fn long_previews_are_truncated() {
        let expr = Expression::new(ExpressionKind::LiteralString {
            value: "x".repeat(300),
        });
        let preview = node_preview(&expr);
        assert_eq!(preview.chars().count(), 100);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn whitespace_is_collapsed() {
        let preview = node_preview(&"a\n\t  b");
        assert!(!preview.contains('\n'));
    }
}
