use super::Expr;

use std::sync::Arc;
use toasty_bigquery_core::TypeMapping;

/// A function call.
///
/// ```text
/// ARRAY_LENGTH(tags)
/// ST_DISTANCE(a, b)
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExprFunc {
    /// Function name as written in SQL
    pub name: String,

    pub args: Vec<Expr>,

    /// Mapping of the returned value
    pub mapping: Arc<TypeMapping>,
}

impl Expr {
    pub fn is_func(&self) -> bool {
        matches!(self, Self::Func(_))
    }

    /// Returns the call if this is a call to `name`.
    pub fn as_func(&self, name: &str) -> Option<&ExprFunc> {
        match self {
            Self::Func(func) if func.name.eq_ignore_ascii_case(name) => Some(func),
            _ => None,
        }
    }
}

impl From<ExprFunc> for Expr {
    fn from(value: ExprFunc) -> Self {
        Self::Func(value)
    }
}
