//! Return-expression extraction from one function block's text.

use regex::Regex;
use std::sync::LazyLock;

/// Matches `return <expr>;`. The expression may span lines and runs to
/// the first `;`; a `return` with no terminating semicolon before the
/// block ends is simply not matched.
static RE_RETURN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"return\s+([^;]+);").unwrap());

/// Extract every return expression in source order, with each run of
/// whitespace (including newlines) collapsed to a single space.
pub fn return_values(block: &str) -> Vec<String> {
    RE_RETURN
        .captures_iter(block)
        .map(|caps| caps[1].split_whitespace().collect::<Vec<_>>().join(" "))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_return() {
        assert_eq!(return_values("{\n  return 1;\n}"), vec!["1"]);
    }

    #[test]
    fn multiple_returns_in_order() {
        let block = "{\n  if (condition) return true;\n  return false;\n}";
        assert_eq!(return_values(block), vec!["true", "false"]);
    }

    #[test]
    fn print_style_argument_list() {
        let block = "{\n  return \"path, first: \", P.first, \", last: \", P.last;\n}";
        assert_eq!(
            return_values(block),
            vec!["\"path, first: \", P.first, \", last: \", P.last"]
        );
    }

    #[test]
    fn no_returns() {
        assert!(return_values("{\n  dest = RTD_BLACKHOLE;\n}").is_empty());
    }

    #[test]
    fn multi_line_expression_collapsed() {
        let block = "{\n  return (1,\n          2);\n}";
        assert_eq!(return_values(block), vec!["(1, 2)"]);
    }

    #[test]
    fn unterminated_return_not_extracted() {
        assert!(return_values("{\n  return 1\n}").is_empty());
    }
}
