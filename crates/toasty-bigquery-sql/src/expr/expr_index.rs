use super::Expr;

use std::sync::Arc;
use toasty_bigquery_core::TypeMapping;

/// Zero-based array element access.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprIndex {
    pub array: Box<Expr>,

    /// Zero-based index; never adjusted
    pub index: Box<Expr>,

    pub mode: IndexMode,

    /// Mapping of the element
    pub mapping: Option<Arc<TypeMapping>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexMode {
    /// `OFFSET(i)`; out of range is an error
    Offset,

    /// `SAFE_OFFSET(i)`; out of range yields `NULL`
    SafeOffset,
}

impl IndexMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Offset => "OFFSET",
            Self::SafeOffset => "SAFE_OFFSET",
        }
    }
}

impl Expr {
    pub fn is_index(&self) -> bool {
        matches!(self, Self::Index(_))
    }
}

impl From<ExprIndex> for Expr {
    fn from(value: ExprIndex) -> Self {
        Self::Index(value)
    }
}
