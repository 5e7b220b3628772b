use super::{Formatter, Params, ToSql};

/// A backtick-quoted identifier.
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        f.dst.push('`');
        for ch in self.0.as_ref().chars() {
            if matches!(ch, '`' | '\\') {
                f.dst.push('\\');
            }
            f.dst.push(ch);
        }
        f.dst.push('`');
    }
}
