//! BigQuery store type names.
//!
//! Store types are plain strings such as `INT64`, `NUMERIC(10, 2)` or
//! `ARRAY<STRUCT<a INT64, b STRING>>`. This module holds the canonical names
//! and the helpers the registry uses to take them apart.

mod name;
pub use name::{base_name, facets, strip_facets, with_facets};

mod parse;
pub use parse::{parse, Composite, FieldToken};
pub(crate) use parse::is_composite;

pub const BOOL: &str = "BOOL";
pub const INT64: &str = "INT64";
pub const FLOAT64: &str = "FLOAT64";
pub const NUMERIC: &str = "NUMERIC";
pub const BIGNUMERIC: &str = "BIGNUMERIC";
pub const STRING: &str = "STRING";
pub const BYTES: &str = "BYTES";
pub const DATE: &str = "DATE";
pub const TIME: &str = "TIME";
pub const DATETIME: &str = "DATETIME";
pub const TIMESTAMP: &str = "TIMESTAMP";
pub const JSON: &str = "JSON";
pub const GEOGRAPHY: &str = "GEOGRAPHY";

/// Prefix of array store types, including the opening bracket.
pub const ARRAY_PREFIX: &str = "ARRAY<";

/// Prefix of struct store types, including the opening bracket.
pub const STRUCT_PREFIX: &str = "STRUCT<";

/// Builds the store type of an array of `element`.
pub fn array_of(element: &str) -> String {
    format!("{ARRAY_PREFIX}{element}>")
}

/// Builds the store type of a struct from `(name, store type)` pairs.
///
/// Names that are not plain identifiers, or that are reserved keywords, are
/// backtick-quoted.
///
/// ```
/// use toasty_bigquery_core::store::struct_of;
///
/// assert_eq!(
///     struct_of([("id", "INT64"), ("order", "STRING")]),
///     "STRUCT<id INT64, `order` STRING>"
/// );
/// ```
pub fn struct_of<'a>(fields: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    let mut ret = String::from(STRUCT_PREFIX);

    for (i, (name, ty)) in fields.into_iter().enumerate() {
        if i > 0 {
            ret.push_str(", ");
        }
        if !name.is_empty() {
            push_field_name(&mut ret, name);
            ret.push(' ');
        }
        ret.push_str(ty);
    }

    ret.push('>');
    ret
}

fn push_field_name(dst: &mut String, name: &str) {
    if is_plain_identifier(name) && !is_reserved(name) {
        dst.push_str(name);
        return;
    }

    dst.push('`');
    for ch in name.chars() {
        if matches!(ch, '`' | '\\') {
            dst.push('\\');
        }
        dst.push(ch);
    }
    dst.push('`');
}

fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();

    chars
        .next()
        .is_some_and(|ch| ch.is_ascii_alphabetic() || ch == '_')
        && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}

fn is_reserved(name: &str) -> bool {
    RESERVED_KEYWORDS
        .iter()
        .any(|keyword| keyword.eq_ignore_ascii_case(name))
}

const RESERVED_KEYWORDS: &[&str] = &[
    "ALL", "AND", "ANY", "ARRAY", "AS", "ASC", "ASSERT_ROWS_MODIFIED", "AT", "BETWEEN", "BY",
    "CASE", "CAST", "COLLATE", "CONTAINS", "CREATE", "CROSS", "CUBE", "CURRENT", "DEFAULT",
    "DEFINE", "DESC", "DISTINCT", "ELSE", "END", "ENUM", "ESCAPE", "EXCEPT", "EXCLUDE", "EXISTS",
    "EXTRACT", "FALSE", "FETCH", "FOLLOWING", "FOR", "FROM", "FULL", "GROUP", "GROUPING",
    "GROUPS", "HASH", "HAVING", "IF", "IGNORE", "IN", "INNER", "INTERSECT", "INTERVAL", "INTO",
    "IS", "JOIN", "LATERAL", "LEFT", "LIKE", "LIMIT", "LOOKUP", "MERGE", "NATURAL", "NEW", "NO",
    "NOT", "NULL", "NULLS", "OF", "ON", "OR", "ORDER", "OUTER", "OVER", "PARTITION", "PRECEDING",
    "PROTO", "QUALIFY", "RANGE", "RECURSIVE", "RESPECT", "RIGHT", "ROLLUP", "ROWS", "SELECT",
    "SET", "SOME", "STRUCT", "TABLESAMPLE", "THEN", "TO", "TREAT", "TRUE", "UNBOUNDED", "UNION",
    "UNNEST", "USING", "WHEN", "WHERE", "WINDOW", "WITH", "WITHIN",
];
