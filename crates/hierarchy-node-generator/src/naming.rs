//! Identifier derivation for generated classes and properties
//!
//! Hierarchy names are free-form editor labels ("Left Arm (1)", "3d Model!",
//! "hand_R"). [`fix_name`] folds them into one canonical shape: PascalCase
//! segments joined by single underscores, never starting with a digit.

use regex::Regex;
use std::sync::OnceLock;

/// Anything outside the word class: letters, non-spacing marks, decimal
/// digits and connector punctuation. Other numerics such as `²` or `①` are
/// not valid in C# identifiers and count as separators.
const NON_WORD_PATTERN: &str = r"[^\p{L}\p{Mn}\p{Nd}\p{Pc}]";

fn non_word_regex() -> &'static Regex {
    static NON_WORD: OnceLock<Regex> = OnceLock::new();
    NON_WORD.get_or_init(|| Regex::new(NON_WORD_PATTERN).expect("word class pattern is valid"))
}

/// Sanitize a display name into a C# identifier.
///
/// Two passes: non-word characters become token breaks and the tokens are
/// joined in PascalCase, then underscores are treated as token breaks and the
/// tokens are re-joined with single underscores. A leading digit gets an
/// underscore prefix. Empty input yields `_`; input with no word characters
/// at all (pure punctuation, pure underscores) yields the empty string.
pub fn fix_name(name: &str) -> String {
    if name.is_empty() {
        return "_".to_string();
    }

    let spaced = non_word_regex().replace_all(name, " ");
    let joined = camel_tokens(&spaced, ' ').concat();
    let mut fixed = camel_tokens(&joined, '_').join("_");

    if fixed.chars().next().is_some_and(|c| c.is_numeric()) {
        fixed.insert(0, '_');
    }

    fixed
}

/// Split on `separator`, drop empty tokens and upper-case each token's head
fn camel_tokens(text: &str, separator: char) -> Vec<String> {
    text.split(separator)
        .filter(|token| !token.is_empty())
        .map(head_upper)
        .collect()
}

/// Characters without a single-character upper case (`ß`, `ŉ`) are kept as is
fn head_upper(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => {
            let mut head = String::with_capacity(token.len());
            head.push(single_upper(first));
            head.extend(chars);
            head
        }
        None => String::new(),
    }
}

fn single_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Shorten single-level engine types (`UnityEngine.Rigidbody` -> `Rigidbody`);
/// nested or foreign types are returned unchanged.
pub fn normalize_component_type(type_name: &str, engine_namespace: &str) -> String {
    type_name
        .strip_prefix(engine_namespace)
        .and_then(|rest| rest.strip_prefix('.'))
        .filter(|short| !short.contains('.'))
        .unwrap_or(type_name)
        .to_string()
}

/// Property name exposed for a component: the last segment of its type name
pub fn component_property_name(type_name: &str) -> &str {
    type_name.rsplit('.').next().unwrap_or(type_name)
}

/// Escape a display name for use inside a C# regular string literal
pub fn escape_string_literal(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(c),
        }
    }
    escaped
}
