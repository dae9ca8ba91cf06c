//! Identifier quoting
//!
//! Names reach SQL text only after they have been checked against the live
//! catalog; quoting keeps names with spaces, keywords or quotes intact.

/// Quote `name` as an SQL identifier, doubling embedded double quotes
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Quote each name and join with `", "`
pub(crate) fn quoted_list(names: &[String]) -> String {
    names
        .iter()
        .map(|n| quote_identifier(n))
        .collect::<Vec<_>>()
        .join(", ")
}
