//! Literal-shape predicates for BIRD filter return expressions.
//!
//! One predicate per declared type, each testing whether a single
//! normalized return expression looks like that type's literal form.
//! Predicates are independent and may overlap (`"a", "b"` is both a
//! string and contains no operator); the priority order in
//! [`crate::infer`] resolves ties, not the predicates themselves.
//!
//! The tricky part is `ip` vs `prefix`: both can carry a `.mask(n)`
//! suffix. `1.2.3.4.mask(8)` masks an address (ip), `net.mask(16)`
//! masks the route's prefix (prefix). The tie-break is whether the
//! text before `.mask(` parses as a bare address.

use ipnet::IpNet;
use regex::Regex;
use std::fmt;
use std::net::IpAddr;
use std::sync::LazyLock;

static RE_INT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-?\d+$").unwrap());

/// Exactly two comma-separated components inside one parenthesis pair.
/// Components may not contain `,` or `)`, so `(1, 2, 3)` does not match.
static RE_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\([^,)]+,\s*[^,)]+\)$").unwrap());

static RE_SET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\{[^}]*\}$").unwrap());

static RE_QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"["'][^"'\n]*["']"#).unwrap());

/// Bare `net`, `net.mask(8)`, or any expression ending in `.mask(<digits>)`.
static RE_NET_OR_MASK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(net(\.mask\(\d+\))?|.*\.mask\(\d+\))$").unwrap());

const BOOL_OPERATORS: &[&str] = &["=", "!=", "<", ">", "<=", ">=", "&&", "||", "!", "~", "!~"];

/// The closed set of return types the tool can annotate with.
///
/// `Display` renders the exact annotation text, so `Pair` carries its
/// element types: BIRD pairs are always `(int, int)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnType {
    Int,
    Pair,
    Ip,
    Prefix,
    Str,
    Set,
    Bool,
}

impl fmt::Display for ReturnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReturnType::Int => "int",
            ReturnType::Pair => "pair (int, int)",
            ReturnType::Ip => "ip",
            ReturnType::Prefix => "prefix",
            ReturnType::Str => "string",
            ReturnType::Set => "set",
            ReturnType::Bool => "bool",
        })
    }
}

/// Optional `-` followed by decimal digits, nothing else.
pub fn is_int(value: &str) -> bool {
    RE_INT.is_match(value.trim())
}

pub fn is_pair(value: &str) -> bool {
    RE_PAIR.is_match(value.trim())
}

/// Bare IPv4/IPv6 address, optionally with a `.mask(n)` suffix whose
/// base still parses as an address. Anything with `/` is a prefix.
pub fn is_ip(value: &str) -> bool {
    let value = value.trim();
    if value.contains('/') {
        return false;
    }
    match value.split_once(".mask(") {
        Some((base, _)) => base.parse::<IpAddr>().is_ok(),
        None => value.parse::<IpAddr>().is_ok(),
    }
}

/// CIDR network (host bits permitted), or a `net`-rooted expression,
/// or a `.mask(n)` call whose base is not a bare address.
pub fn is_prefix(value: &str) -> bool {
    let value = value.trim();
    if value.contains('/') && value.parse::<IpNet>().is_ok() {
        return true;
    }
    if let Some((base, _)) = value.split_once(".mask(") {
        // `<addr>.mask(n)` masks an address, so it classifies as ip
        if base.parse::<IpAddr>().is_ok() {
            return false;
        }
        return base == "net" || base.starts_with("net.");
    }
    RE_NET_OR_MASK.is_match(value)
}

/// Contains a quoted substring, or is an unparenthesized comma-joined
/// argument list (print-style `"label: ", P.len` without leading quote).
pub fn is_string(value: &str) -> bool {
    let value = value.trim();
    if RE_QUOTED.is_match(value) {
        return true;
    }
    value.contains(',') && !value.starts_with('(') && !value.starts_with('{')
}

pub fn is_set(value: &str) -> bool {
    RE_SET.is_match(value.trim())
}

/// `true`/`false` literal, or any relational/logical operator token.
pub fn is_bool(value: &str) -> bool {
    let value = value.trim();
    if value == "true" || value == "false" {
        return true;
    }
    BOOL_OPERATORS.iter().any(|op| value.contains(op))
}
