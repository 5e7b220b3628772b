use super::{Expr, UnaryOp};

use std::sync::Arc;
use toasty_bigquery_core::TypeMapping;

#[derive(Debug, Clone, PartialEq)]
pub struct ExprUnaryOp {
    pub op: UnaryOp,
    pub expr: Box<Expr>,
    pub mapping: Option<Arc<TypeMapping>>,
}

impl From<ExprUnaryOp> for Expr {
    fn from(value: ExprUnaryOp) -> Self {
        Self::UnaryOp(value)
    }
}
