//! Return-type inference over one function's collected return expressions.

use crate::classify::{self, ReturnType};

/// Priority-ordered dispatch table. Structural shapes come first so that
/// `(1, 2)` is a pair before `bool`'s loose operator check ever runs.
static TYPE_CHECKS: &[(ReturnType, fn(&str) -> bool)] = &[
    (ReturnType::Int, classify::is_int),
    (ReturnType::Pair, classify::is_pair),
    (ReturnType::Ip, classify::is_ip),
    (ReturnType::Prefix, classify::is_prefix),
    (ReturnType::Str, classify::is_string),
    (ReturnType::Set, classify::is_set),
    (ReturnType::Bool, classify::is_bool),
];

/// Infer the declared type for a function from its return expressions.
///
/// `None` means the function is void (no return statements) and must be
/// left unannotated. Otherwise the first table entry whose predicate
/// holds for every expression wins; a single non-matching expression
/// disqualifies the type for the whole function. When nothing matches
/// unanimously the result is still `bool`, the universal fallback, so
/// inference never fails and mixed return sets (`1` next to `true`)
/// resolve to `bool`.
pub fn return_type(values: &[String]) -> Option<ReturnType> {
    if values.is_empty() {
        return None;
    }
    for (ty, check) in TYPE_CHECKS {
        if values.iter().all(|v| check(v)) {
            return Some(*ty);
        }
    }
    Some(ReturnType::Bool)
}
