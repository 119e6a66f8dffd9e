//! Function-boundary scanning via brace-depth tracking.
//!
//! Partitions a document into pass-through lines and function blocks.
//! A block opens on a `function <name>` declaration line and closes the
//! instant the running `{`/`}` depth returns to zero. Nested braces
//! (an `if` body, a set literal) are absorbed by the same counter; there
//! is no nested-function handling beyond depth counting.

use regex::Regex;
use std::sync::LazyLock;

static RE_FUNCTION_DECL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*function\s+\w+").unwrap());

/// One scanned span of the document, in source order.
#[derive(Debug, PartialEq, Eq)]
pub enum Segment {
    /// A line outside any function, passed through verbatim.
    Line(String),
    /// A complete function block, header through balanced closing brace.
    Function(Vec<String>),
    /// A block whose braces never balanced before end of input.
    Unterminated(Vec<String>),
}

enum State {
    Outside,
    Inside { depth: i64, block: Vec<String> },
}

fn brace_delta(line: &str) -> i64 {
    line.matches('{').count() as i64 - line.matches('}').count() as i64
}

/// Scan document lines into segments.
///
/// End-of-input while still inside a block is a terminal state of its
/// own: the partial block comes back as [`Segment::Unterminated`] so the
/// caller decides what to do with it instead of the lines being dropped.
pub fn scan(lines: &[String]) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut state = State::Outside;

    for line in lines {
        state = match state {
            State::Outside => {
                if RE_FUNCTION_DECL.is_match(line) {
                    let depth = brace_delta(line);
                    let block = vec![line.clone()];
                    if depth == 0 && line.contains('{') && line.contains('}') {
                        // single-line function, e.g. `function f() { return 1; }`
                        segments.push(Segment::Function(block));
                        State::Outside
                    } else {
                        State::Inside { depth, block }
                    }
                } else {
                    segments.push(Segment::Line(line.clone()));
                    State::Outside
                }
            }
            State::Inside { depth, mut block } => {
                block.push(line.clone());
                let depth = depth + brace_delta(line);
                if depth == 0 {
                    segments.push(Segment::Function(block));
                    State::Outside
                } else {
                    State::Inside { depth, block }
                }
            }
        };
    }

    if let State::Inside { block, .. } = state {
        segments.push(Segment::Unterminated(block));
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<String> {
        text.split('\n').map(str::to_string).collect()
    }

    #[test]
    fn non_function_lines_pass_through() {
        let segments = scan(&lines("# comment\nprotocol static {\n}"));
        assert_eq!(segments.len(), 3);
        assert!(matches!(segments[0], Segment::Line(_)));
    }

    #[test]
    fn multi_line_function_block() {
        let segments = scan(&lines("function f()\n{\n    return 1;\n}\ndone"));
        assert_eq!(segments.len(), 2);
        match &segments[0] {
            Segment::Function(block) => assert_eq!(block.len(), 4),
            other => panic!("expected function block, got {other:?}"),
        }
        assert_eq!(segments[1], Segment::Line("done".to_string()));
    }

    #[test]
    fn single_line_function_closes_immediately() {
        let segments = scan(&lines("function g() { return true; }"));
        assert_eq!(
            segments,
            vec![Segment::Function(vec![
                "function g() { return true; }".to_string()
            ])]
        );
    }

    #[test]
    fn nested_braces_absorbed() {
        let text = "function f() {\n    if x then {\n        return 1;\n    }\n    return 2;\n}";
        let segments = scan(&lines(text));
        assert_eq!(segments.len(), 1);
        match &segments[0] {
            Segment::Function(block) => assert_eq!(block.len(), 6),
            other => panic!("expected function block, got {other:?}"),
        }
    }

    #[test]
    fn unbalanced_block_is_unterminated() {
        let segments = scan(&lines("function f() {\n    return 1;"));
        assert_eq!(segments.len(), 1);
        assert!(matches!(segments[0], Segment::Unterminated(_)));
    }

    #[test]
    fn sequential_functions_scanned_separately() {
        let text = "function f() {\n    return 1;\n}\nfunction g() {\n    return 2;\n}";
        let segments = scan(&lines(text));
        assert_eq!(segments.len(), 2);
        assert!(segments.iter().all(|s| matches!(s, Segment::Function(_))));
    }
}
