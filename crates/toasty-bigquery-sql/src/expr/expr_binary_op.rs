use super::{BinaryOp, Expr};

use std::sync::Arc;
use toasty_bigquery_core::TypeMapping;

/// A binary operation between two expressions.
///
/// ```text
/// a = b
/// a AND b
/// price * qty
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExprBinaryOp {
    /// The left-hand side expression.
    pub lhs: Box<Expr>,

    /// The operator to apply.
    pub op: BinaryOp,

    /// The right-hand side expression.
    pub rhs: Box<Expr>,

    pub mapping: Option<Arc<TypeMapping>>,
}

impl Expr {
    /// Builds an untyped binary expression.
    pub fn binary_op(lhs: impl Into<Self>, op: BinaryOp, rhs: impl Into<Self>) -> Self {
        ExprBinaryOp {
            lhs: Box::new(lhs.into()),
            op,
            rhs: Box::new(rhs.into()),
            mapping: None,
        }
        .into()
    }

    pub fn is_binary_op(&self) -> bool {
        matches!(self, Self::BinaryOp(_))
    }
}

impl From<ExprBinaryOp> for Expr {
    fn from(value: ExprBinaryOp) -> Self {
        Self::BinaryOp(value)
    }
}
