use super::Expr;

use std::sync::Arc;
use toasty_bigquery_core::{stmt::Type, TypeMapping};

/// An array built from element expressions.
///
/// Produced when at least one element is not a constant; arrays of constants
/// collapse into a single constant list.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprArrayLiteral {
    pub elements: Vec<Expr>,

    /// Declared host type of each element
    pub element_ty: Type,

    pub element_mapping: Option<Arc<TypeMapping>>,

    /// Mapping of the whole array
    pub mapping: Option<Arc<TypeMapping>>,
}

impl From<ExprArrayLiteral> for Expr {
    fn from(value: ExprArrayLiteral) -> Self {
        Self::ArrayLiteral(value)
    }
}
