//! Argument-identifier validation.
//!
//! Declared argument names must be usable as field or parameter names, so
//! each one is checked against the identifier pattern
//! (`[A-Za-z_][A-Za-z0-9_]*`) and the Rust keyword table at declaration
//! time. The check runs once per `declare`, never on the fire path.

use crate::error::DispatchError;
use phf::phf_set;

/// Names that can never be bound as a field or parameter.
///
/// Strict and reserved keywords for edition 2024, plus the `_` wildcard,
/// which matches the identifier pattern but is not a binding.
static KEYWORDS: phf::Set<&'static str> = phf_set! {
    // Strict
    "as", "async", "await", "break", "const", "continue", "crate", "dyn",
    "else", "enum", "extern", "false", "fn", "for", "if", "impl", "in",
    "let", "loop", "match", "mod", "move", "mut", "pub", "ref", "return",
    "self", "Self", "static", "struct", "super", "trait", "true", "type",
    "unsafe", "use", "where", "while",
    // Reserved
    "abstract", "become", "box", "do", "final", "gen", "macro", "override",
    "priv", "try", "typeof", "unsized", "virtual", "yield",
    "_",
};

/// Checks that `name` can serve as a declared argument name.
///
/// Returns [`DispatchError::InvalidArgumentName`] when `name` fails the
/// identifier pattern or is a keyword.
pub fn validate(name: &str) -> Result<(), DispatchError> {
    if !is_identifier(name) || KEYWORDS.contains(name) {
        return Err(DispatchError::InvalidArgumentName(name.to_owned()));
    }
    Ok(())
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
