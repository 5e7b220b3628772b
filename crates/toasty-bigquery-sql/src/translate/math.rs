use super::{Operation, Translate};
use crate::{Expr, SqlExprFactory};

use std::sync::Arc;
use toasty_bigquery_core::{mapping::MappingKind, TypeMapping};

/// Numeric functions.
///
/// A receiver, when present, is the first argument: `x.abs()` and
/// `abs(x)` translate the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathOp {
    Abs,
    Ceiling,
    Floor,

    /// `round(x)` or `round(x, digits)`
    Round,

    Truncate,
    Pow,
    Sqrt,
    Exp,

    /// Natural logarithm
    Ln,

    /// `log(x)` (natural) or `log(x, base)`
    Log,

    Log10,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Atan2,
    Sign,

    /// Largest of two or more values
    Max,

    /// Smallest of two or more values
    Min,

    /// Division; integer operands divide with truncation
    Divide,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MathTranslator;

impl Translate for MathTranslator {
    fn translate(
        &self,
        op: &Operation,
        receiver: Option<&Expr>,
        args: &[Expr],
        factory: &SqlExprFactory<'_>,
    ) -> Option<Expr> {
        let Operation::Math(op) = op else {
            return None;
        };

        let args: Vec<_> = receiver
            .into_iter()
            .chain(args)
            .map(|arg| factory.apply_default_mapping(arg.clone()))
            .collect();

        let first = args.first()?.mapping()?.clone();
        let float64 = factory.source().float64_mapping();

        let (name, mapping) = match (op, args.len()) {
            (MathOp::Abs, 1) => ("ABS", first),
            (MathOp::Sign, 1) => ("SIGN", first),
            (MathOp::Max, 2..) => ("GREATEST", widest(&args, float64)),
            (MathOp::Min, 2..) => ("LEAST", widest(&args, float64)),
            (MathOp::Ceiling, 1) => ("CEIL", decimal_or(first, float64)),
            (MathOp::Floor, 1) => ("FLOOR", decimal_or(first, float64)),
            (MathOp::Round, 1 | 2) => ("ROUND", decimal_or(first, float64)),
            (MathOp::Truncate, 1) => ("TRUNC", decimal_or(first, float64)),
            (MathOp::Pow, 2) => ("POW", decimal_or(first, float64)),
            (MathOp::Sqrt, 1) => ("SQRT", decimal_or(first, float64)),
            (MathOp::Exp, 1) => ("EXP", decimal_or(first, float64)),
            (MathOp::Ln, 1) | (MathOp::Log, 1) => ("LN", decimal_or(first, float64)),
            (MathOp::Log, 2) => ("LOG", decimal_or(first, float64)),
            (MathOp::Log10, 1) => ("LOG10", decimal_or(first, float64)),
            (MathOp::Sin, 1) => ("SIN", float64),
            (MathOp::Cos, 1) => ("COS", float64),
            (MathOp::Tan, 1) => ("TAN", float64),
            (MathOp::Asin, 1) => ("ASIN", float64),
            (MathOp::Acos, 1) => ("ACOS", float64),
            (MathOp::Atan, 1) => ("ATAN", float64),
            (MathOp::Atan2, 2) => ("ATAN2", float64),
            (MathOp::Divide, 2) if args.iter().all(is_int64) => {
                ("DIV", factory.source().int64_mapping())
            }
            (MathOp::Divide, 2) => ("IEEE_DIVIDE", float64),
            _ => return None,
        };

        Some(factory.function(name, args, mapping))
    }
}

fn is_int64(expr: &Expr) -> bool {
    expr.mapping()
        .is_some_and(|mapping| matches!(mapping.kind(), MappingKind::Int64))
}

fn decimal_or(mapping: Arc<TypeMapping>, fallback: Arc<TypeMapping>) -> Arc<TypeMapping> {
    match mapping.kind() {
        MappingKind::Decimal => mapping,
        _ => fallback,
    }
}

/// `GREATEST` and `LEAST` coerce mixed arguments to `FLOAT64`.
fn widest(args: &[Expr], float64: Arc<TypeMapping>) -> Arc<TypeMapping> {
    let mut mappings = args.iter().filter_map(Expr::mapping);

    let Some(first) = mappings.next() else {
        return float64;
    };

    if mappings.all(|mapping| mapping.store_type() == first.store_type()) {
        first.clone()
    } else {
        float64
    }
}
