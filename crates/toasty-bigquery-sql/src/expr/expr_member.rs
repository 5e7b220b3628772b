use super::Expr;

use std::sync::Arc;
use toasty_bigquery_core::TypeMapping;

/// Access to a field of a `STRUCT` value.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprMember {
    pub expr: Box<Expr>,

    /// Field name as declared by the struct mapping
    pub field: String,

    /// Mapping of the field
    pub mapping: Arc<TypeMapping>,
}

impl From<ExprMember> for Expr {
    fn from(value: ExprMember) -> Self {
        Self::Member(value)
    }
}
