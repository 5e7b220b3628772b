use super::{Formatter, ToSql};

use toasty_bigquery_core::param::BoundParameter;

/// Collects the parameters bound while serializing.
pub trait Params {
    /// Stores `param` and returns the placeholder that refers to it.
    fn push(&mut self, param: BoundParameter) -> Placeholder;

    /// Whether a parameter named `name` has already been pushed.
    fn contains(&self, name: &str) -> bool;
}

/// A parameter name, written with the configured prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder(pub String);

/// Unnamed parameters are named `p0`, `p1`, ... A parameter pushed under an
/// existing name replaces the earlier binding.
///
/// When reusing one list across several expressions, explicit parameter
/// names must not match the `p{n}` names generated by earlier ones.
impl Params for Vec<BoundParameter> {
    fn push(&mut self, mut param: BoundParameter) -> Placeholder {
        if param.name.is_empty() {
            let mut n = self.len();
            param.name = loop {
                let name = format!("p{n}");
                if self.iter().all(|existing| existing.name != name) {
                    break name;
                }
                n += 1;
            };
        }

        let placeholder = Placeholder(param.name.clone());

        match self.iter_mut().find(|existing| existing.name == param.name) {
            Some(existing) => *existing = param,
            None => Vec::push(self, param),
        }

        placeholder
    }

    fn contains(&self, name: &str) -> bool {
        self.iter().any(|existing| existing.name == name)
    }
}

impl ToSql for Placeholder {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let prefix = f.serializer.options().parameter_prefix();
        f.dst.push_str(prefix);
        f.dst.push_str(&self.0);
    }
}
