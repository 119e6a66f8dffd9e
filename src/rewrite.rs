//! Header rewriting: splice an inferred type annotation into a
//! function header, immediately before the opening brace.

use crate::classify::ReturnType;

/// Rewrite the block's first line to carry `-> <type>`.
///
/// If the header holds the opening brace, the annotation lands before
/// it and everything after the brace is preserved verbatim. If the
/// brace sits on a later line, the annotation is appended to the
/// right-trimmed header and the brace line is left alone. Lines after
/// the first pass through unmodified either way.
pub fn add_return_type(lines: &[String], inferred: ReturnType) -> Vec<String> {
    let Some((header, rest)) = lines.split_first() else {
        return Vec::new();
    };

    let rewritten = match header.split_once('{') {
        Some((head, after)) => format!("{} -> {} {{{}", head.trim_end(), inferred, after),
        None => format!("{} -> {}", header.trim_end(), inferred),
    };

    let mut result = Vec::with_capacity(lines.len());
    result.push(rewritten);
    result.extend(rest.iter().cloned());
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(text: &str) -> Vec<String> {
        text.split('\n').map(str::to_string).collect()
    }

    #[test]
    fn header_with_brace_on_same_line() {
        let result = add_return_type(&block("function f() {\n    return 1;\n}"), ReturnType::Int);
        assert_eq!(result[0], "function f() -> int {");
        assert_eq!(result[1], "    return 1;");
        assert_eq!(result[2], "}");
    }

    #[test]
    fn header_with_brace_on_own_line() {
        let result = add_return_type(&block("function f()\n{\n    return 1;\n}"), ReturnType::Int);
        assert_eq!(result[0], "function f() -> int");
        assert_eq!(result[1], "{");
    }

    #[test]
    fn single_line_function_body_preserved() {
        let result = add_return_type(
            &block("function g() { return true; }"),
            ReturnType::Bool,
        );
        assert_eq!(result, vec!["function g() -> bool { return true; }"]);
    }

    #[test]
    fn pair_annotation_carries_element_types() {
        let result = add_return_type(&block("function p()\n{\n    return (1, 2);\n}"), ReturnType::Pair);
        assert_eq!(result[0], "function p() -> pair (int, int)");
    }

    #[test]
    fn trailing_header_whitespace_trimmed() {
        let result = add_return_type(&block("function f()   \n{\n}"), ReturnType::Bool);
        assert_eq!(result[0], "function f() -> bool");
    }
}
