use super::Expr;

use std::sync::Arc;
use toasty_bigquery_core::{stmt::Value, TypeMapping};

/// A named query parameter and the value bound to it.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprParameter {
    /// Name without the `@` prefix
    pub name: String,

    pub value: Value,

    pub mapping: Arc<TypeMapping>,
}

impl Expr {
    pub fn is_parameter(&self) -> bool {
        matches!(self, Self::Parameter(_))
    }
}

impl From<ExprParameter> for Expr {
    fn from(value: ExprParameter) -> Self {
        Self::Parameter(value)
    }
}
