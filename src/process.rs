//! Document-level processing: scan, classify, rewrite, reassemble.
//!
//! Pass-through lines and function blocks are reassembled in original
//! order; only headers of untyped, non-void functions change, so output
//! is byte-identical to input outside rewritten header spans. Running
//! the processor on its own output is a no-op: annotated functions are
//! detected via the marker substring and skipped.

use crate::scan::{self, Segment};
use crate::{extract, infer, rewrite};

/// A function whose text contains this marker already declares a return
/// type and is never touched again.
const ANNOTATION_MARKER: &str = " -> ";

/// Process one document, rewriting untyped function headers.
pub fn process_content(content: &str) -> String {
    let lines: Vec<String> = content.split('\n').map(str::to_string).collect();
    let mut output: Vec<String> = Vec::with_capacity(lines.len());

    for segment in scan::scan(&lines) {
        match segment {
            Segment::Line(line) => output.push(line),
            Segment::Function(block) => output.extend(process_function(block)),
            Segment::Unterminated(block) => {
                eprintln!(
                    "warning: unbalanced braces in `{}`, block left unchanged",
                    block[0].trim()
                );
                output.extend(block);
            }
        }
    }

    output.join("\n")
}

fn process_function(lines: Vec<String>) -> Vec<String> {
    let text = lines.join("\n");
    if text.contains(ANNOTATION_MARKER) {
        return lines;
    }
    match infer::return_type(&extract::return_values(&text)) {
        Some(inferred) => rewrite::add_return_type(&lines, inferred),
        None => lines,
    }
}
