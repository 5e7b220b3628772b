use super::Expr;

use std::sync::Arc;
use toasty_bigquery_core::TypeMapping;

/// `CAST(expr AS T)`, where `T` is the store type of `mapping`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprCast {
    /// Expression to cast
    pub expr: Box<Expr>,

    /// Mapping to cast to
    pub mapping: Arc<TypeMapping>,
}

impl Expr {
    pub fn is_cast(&self) -> bool {
        matches!(self, Self::Cast(_))
    }
}

impl From<ExprCast> for Expr {
    fn from(value: ExprCast) -> Self {
        Self::Cast(value)
    }
}
