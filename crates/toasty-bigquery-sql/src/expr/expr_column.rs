use super::Expr;

use std::sync::Arc;
use toasty_bigquery_core::TypeMapping;

/// A reference to a column, optionally qualified by a table alias.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprColumn {
    /// Table or alias the column belongs to
    pub table: Option<String>,

    /// Column name
    pub name: String,

    pub mapping: Arc<TypeMapping>,
}

impl Expr {
    pub fn is_column(&self) -> bool {
        matches!(self, Self::Column(_))
    }
}

impl From<ExprColumn> for Expr {
    fn from(value: ExprColumn) -> Self {
        Self::Column(value)
    }
}
