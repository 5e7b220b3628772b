//! BigQuery expression trees.
//!
//! Every node carries the [`TypeMapping`] of the value it produces. Nodes
//! built through [`SqlExprFactory`](crate::SqlExprFactory) always carry one;
//! a node built by hand may be untyped until
//! [`apply_mapping`](crate::SqlExprFactory::apply_mapping) or
//! [`apply_default_mapping`](crate::SqlExprFactory::apply_default_mapping)
//! runs.

mod expr_array_literal;
pub use expr_array_literal::ExprArrayLiteral;

mod expr_binary_op;
pub use expr_binary_op::ExprBinaryOp;

mod expr_cast;
pub use expr_cast::ExprCast;

mod expr_column;
pub use expr_column::ExprColumn;

mod expr_constant;
pub use expr_constant::ExprConstant;

mod expr_func;
pub use expr_func::ExprFunc;

mod expr_in_unnest;
pub use expr_in_unnest::ExprInUnnest;

mod expr_index;
pub use expr_index::{ExprIndex, IndexMode};

mod expr_member;
pub use expr_member::ExprMember;

mod expr_parameter;
pub use expr_parameter::ExprParameter;

mod expr_unary_op;
pub use expr_unary_op::ExprUnaryOp;

mod op_binary;
pub use op_binary::BinaryOp;

mod op_unary;
pub use op_unary::UnaryOp;

mod transform;

use std::sync::Arc;
use toasty_bigquery_core::{stmt::Value, TypeMapping};

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// `ARRAY<T>[...]` with at least one non-constant element
    ArrayLiteral(ExprArrayLiteral),

    /// Binary expression
    BinaryOp(ExprBinaryOp),

    /// `CAST(x AS T)`
    Cast(ExprCast),

    /// References a column
    Column(ExprColumn),

    /// A constant value, rendered inline or bound as a parameter
    Constant(ExprConstant),

    /// Function call
    Func(ExprFunc),

    /// `x IN UNNEST(array)`
    InUnnest(ExprInUnnest),

    /// `array[OFFSET(i)]` or `array[SAFE_OFFSET(i)]`
    Index(ExprIndex),

    /// Struct field access
    Member(ExprMember),

    /// A named query parameter
    Parameter(ExprParameter),

    /// Unary expression
    UnaryOp(ExprUnaryOp),
}

impl Expr {
    /// The mapping of the value this expression produces, if resolved.
    pub fn mapping(&self) -> Option<&Arc<TypeMapping>> {
        match self {
            Self::ArrayLiteral(e) => e.mapping.as_ref(),
            Self::BinaryOp(e) => e.mapping.as_ref(),
            Self::Cast(e) => Some(&e.mapping),
            Self::Column(e) => Some(&e.mapping),
            Self::Constant(e) => e.mapping.as_ref(),
            Self::Func(e) => Some(&e.mapping),
            Self::InUnnest(e) => e.mapping.as_ref(),
            Self::Index(e) => e.mapping.as_ref(),
            Self::Member(e) => Some(&e.mapping),
            Self::Parameter(e) => Some(&e.mapping),
            Self::UnaryOp(e) => e.mapping.as_ref(),
        }
    }

    /// Returns `true` if the expression has a resolved mapping.
    pub fn is_typed(&self) -> bool {
        self.mapping().is_some()
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, Self::Constant(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Constant(ExprConstant { value: Value::Null, .. }))
    }

    pub fn as_constant(&self) -> Option<&Value> {
        match self {
            Self::Constant(e) => Some(&e.value),
            _ => None,
        }
    }

    /// Binding strength when the expression appears as an operand.
    pub(crate) fn precedence(&self) -> u8 {
        match self {
            Self::BinaryOp(e) => e.op.precedence(),
            Self::UnaryOp(e) => e.op.precedence(),
            Self::InUnnest(_) => BinaryOp::Eq.precedence(),
            _ => u8::MAX,
        }
    }
}
