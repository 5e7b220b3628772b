use super::{ARRAY_PREFIX, STRUCT_PREFIX};

/// A composite store type taken apart one level deep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Composite<'a> {
    /// `ARRAY<element>`; holds the element store type.
    Array(&'a str),

    /// `STRUCT<name type, ...>`; holds the top-level fields in order.
    Struct(Vec<FieldToken<'a>>),
}

/// One top-level field of a `STRUCT<...>` store type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldToken<'a> {
    /// Field name. Empty for anonymous fields (`STRUCT<INT64, STRING>`).
    /// Backtick-quoted names lose their quotes but keep any escapes.
    pub name: &'a str,

    /// The field's store type, verbatim (nested composites are not expanded).
    pub ty: &'a str,
}

/// Parses a composite store type.
///
/// Returns `None` when `store_type` is not an `ARRAY<...>` or `STRUCT<...>`
/// type, or when its brackets are unbalanced. Callers treat `None` as "not
/// composite" and fall back to scalar resolution.
///
/// ```
/// use toasty_bigquery_core::store::{parse, Composite, FieldToken};
///
/// let parsed = parse("STRUCT<a ARRAY<INT64>, b STRING>").unwrap();
/// assert_eq!(
///     parsed,
///     Composite::Struct(vec![
///         FieldToken { name: "a", ty: "ARRAY<INT64>" },
///         FieldToken { name: "b", ty: "STRING" },
///     ])
/// );
/// ```
pub fn parse(store_type: &str) -> Option<Composite<'_>> {
    let store_type = store_type.trim();

    // STRUCT is checked first
    if let Some(inner) = strip_composite(store_type, STRUCT_PREFIX) {
        return split_fields(inner).map(Composite::Struct);
    }

    if let Some(inner) = strip_composite(store_type, ARRAY_PREFIX) {
        let inner = inner.trim();
        return if inner.is_empty() {
            None
        } else {
            Some(Composite::Array(inner))
        };
    }

    None
}

/// Returns `true` if the store type starts with a composite prefix.
pub(crate) fn is_composite(store_type: &str) -> bool {
    has_prefix(store_type.trim_start(), STRUCT_PREFIX)
        || has_prefix(store_type.trim_start(), ARRAY_PREFIX)
}

fn has_prefix(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// Strips `prefix` and the matching closing bracket, returning the content
/// between them. The closing bracket must be the last character.
fn strip_composite<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    if !has_prefix(s, prefix) {
        return None;
    }

    let open = prefix.len() - 1;
    let close = matching_bracket(s, open)?;

    if close != s.len() - 1 {
        return None;
    }

    Some(&s[prefix.len()..close])
}

/// Finds the `>` closing the `<` at `open` by depth counting.
fn matching_bracket(s: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;

    for (i, b) in unquoted_bytes(s).skip_while(|(i, _)| *i < open) {
        match b {
            b'<' => depth += 1,
            b'>' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }

    None
}

/// Bytes of `s` with their offsets, skipping backtick-quoted spans
/// (quotes included). A backslash escapes the next byte inside quotes.
fn unquoted_bytes(s: &str) -> impl Iterator<Item = (usize, u8)> + '_ {
    let mut quoted = false;
    let mut escaped = false;

    s.bytes().enumerate().filter(move |&(_, b)| {
        if escaped {
            escaped = false;
            return false;
        }

        match b {
            b'\\' if quoted => {
                escaped = true;
                false
            }
            b'`' => {
                quoted = !quoted;
                false
            }
            _ => !quoted,
        }
    })
}

/// Splits struct content on commas that are not nested in `<>` or `()`.
fn split_fields(inner: &str) -> Option<Vec<FieldToken<'_>>> {
    let mut fields = vec![];

    if inner.trim().is_empty() {
        return Some(fields);
    }

    let mut depth = 0usize;
    let mut start = 0;

    for (i, b) in unquoted_bytes(inner) {
        match b {
            b'<' | b'(' => depth += 1,
            b'>' | b')' => depth = depth.checked_sub(1)?,
            b',' if depth == 0 => {
                fields.push(field_token(&inner[start..i])?);
                start = i + 1;
            }
            _ => {}
        }
    }

    if depth != 0 {
        return None;
    }

    fields.push(field_token(&inner[start..])?);
    Some(fields)
}

fn field_token(token: &str) -> Option<FieldToken<'_>> {
    let token = token.trim();

    if token.is_empty() {
        return None;
    }

    if let Some(quoted) = token.strip_prefix('`') {
        let end = closing_quote(quoted)?;
        let ty = quoted[end + 1..].trim();
        if ty.is_empty() {
            return None;
        }
        return Some(FieldToken {
            name: &quoted[..end],
            ty,
        });
    }

    if is_composite(token) {
        return Some(FieldToken {
            name: "",
            ty: token,
        });
    }

    match token.split_once(char::is_whitespace) {
        Some((name, ty)) => Some(FieldToken {
            name,
            ty: ty.trim(),
        }),
        None => Some(FieldToken {
            name: "",
            ty: token,
        }),
    }
}

/// Offset of the backtick closing a quoted name, skipping escaped bytes.
fn closing_quote(quoted: &str) -> Option<usize> {
    let mut escaped = false;

    for (i, b) in quoted.bytes().enumerate() {
        match b {
            _ if escaped => escaped = false,
            b'\\' => escaped = true,
            b'`' => return Some(i),
            _ => {}
        }
    }

    None
}
