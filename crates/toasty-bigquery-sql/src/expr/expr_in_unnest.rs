use super::Expr;

use std::sync::Arc;
use toasty_bigquery_core::TypeMapping;

/// `item IN UNNEST(array)`
#[derive(Debug, Clone, PartialEq)]
pub struct ExprInUnnest {
    pub item: Box<Expr>,
    pub array: Box<Expr>,
    pub mapping: Option<Arc<TypeMapping>>,
}

impl From<ExprInUnnest> for Expr {
    fn from(value: ExprInUnnest) -> Self {
        Self::InUnnest(value)
    }
}
