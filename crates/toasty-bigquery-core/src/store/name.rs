use super::parse::is_composite;

/// Strips a trailing `(...)` facet suffix from a scalar store type.
///
/// Composite store types are returned unchanged.
///
/// ```
/// use toasty_bigquery_core::store::base_name;
///
/// assert_eq!(base_name("NUMERIC(10, 2)"), "NUMERIC");
/// assert_eq!(base_name("STRING"), "STRING");
/// ```
pub fn base_name(store_type: &str) -> &str {
    let store_type = store_type.trim();

    if is_composite(store_type) {
        return store_type;
    }

    match store_type.find('(') {
        Some(open) => store_type[..open].trim_end(),
        None => store_type,
    }
}

/// Parses the `(precision)` or `(precision, scale)` suffix of a scalar store
/// type.
pub fn facets(store_type: &str) -> Option<(u32, Option<u32>)> {
    let store_type = store_type.trim();

    if is_composite(store_type) {
        return None;
    }

    let open = store_type.find('(')?;
    let inner = store_type[open + 1..].strip_suffix(')')?;

    match inner.split_once(',') {
        Some((precision, scale)) => Some((
            precision.trim().parse().ok()?,
            Some(scale.trim().parse().ok()?),
        )),
        None => Some((inner.trim().parse().ok()?, None)),
    }
}

/// Removes facet suffixes at every nesting level.
///
/// BigQuery rejects parameterized types inside literal constructors, so
/// `STRUCT<price NUMERIC(10, 2)>(...)` must be written as
/// `STRUCT<price NUMERIC>(...)`.
pub fn strip_facets(store_type: &str) -> String {
    let mut ret = String::with_capacity(store_type.len());
    let mut depth = 0usize;
    let mut quoted = false;
    let mut escaped = false;

    for c in store_type.chars() {
        if quoted {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '`' => quoted = false,
                _ => {}
            }
            ret.push(c);
            continue;
        }

        match c {
            '`' if depth == 0 => {
                quoted = true;
                ret.push(c);
            }
            '(' => {
                if depth == 0 {
                    let trimmed = ret.trim_end().len();
                    ret.truncate(trimmed);
                }
                depth += 1;
            }
            ')' if depth > 0 => depth -= 1,
            _ if depth > 0 => {}
            c => ret.push(c),
        }
    }

    ret
}

/// Appends facets to a base store type name.
pub fn with_facets(base: &str, precision: Option<u32>, scale: Option<u32>) -> String {
    match (precision, scale) {
        (Some(precision), Some(scale)) => format!("{base}({precision}, {scale})"),
        (Some(precision), None) => format!("{base}({precision})"),
        _ => base.to_string(),
    }
}
