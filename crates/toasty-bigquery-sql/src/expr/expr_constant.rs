use super::Expr;

use std::sync::Arc;
use toasty_bigquery_core::{stmt::Value, TypeMapping};

/// A constant value.
///
/// Untyped constants (`mapping: None`) pick up the mapping of the expression
/// they are compared with, or the default mapping of their value.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprConstant {
    pub value: Value,
    pub mapping: Option<Arc<TypeMapping>>,
}

impl Expr {
    /// Builds an untyped constant.
    pub fn constant(value: impl Into<Value>) -> Self {
        ExprConstant {
            value: value.into(),
            mapping: None,
        }
        .into()
    }
}

impl From<ExprConstant> for Expr {
    fn from(value: ExprConstant) -> Self {
        Self::Constant(value)
    }
}
