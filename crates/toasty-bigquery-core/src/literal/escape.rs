/// Writes `s` as a single-quoted string literal.
///
/// Backslash, single quote, newline, carriage return and tab are escaped with
/// a backslash. Everything else is written as is.
///
/// ```
/// let mut dst = String::new();
/// toasty_bigquery_core::literal::escape_string(&mut dst, "it's\n");
/// assert_eq!(dst, r"'it\'s\n'");
/// ```
pub fn escape_string(dst: &mut String, s: &str) {
    dst.reserve(s.len() + 2);
    dst.push('\'');

    for c in s.chars() {
        match c {
            '\\' => dst.push_str(r"\\"),
            '\'' => dst.push_str(r"\'"),
            '\n' => dst.push_str(r"\n"),
            '\r' => dst.push_str(r"\r"),
            '\t' => dst.push_str(r"\t"),
            c => dst.push(c),
        }
    }

    dst.push('\'');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escaped(s: &str) -> String {
        let mut dst = String::new();
        escape_string(&mut dst, s);
        dst
    }

    #[test]
    fn escapes_specials() {
        assert_eq!(escaped(r"a\b"), r"'a\\b'");
        assert_eq!(escaped("tab\there"), r"'tab\there'");
        assert_eq!(escaped("\r"), r"'\r'");
    }

    #[test]
    fn leaves_unicode_alone() {
        assert_eq!(escaped("héllo"), "'héllo'");
    }
}
