use super::{Operation, Translate};
use crate::{Expr, IndexMode, SqlExprFactory};

use toasty_bigquery_core::stmt::{Type, Value};

/// Operations on sequence-typed values.
#[derive(Debug, Clone, PartialEq)]
pub enum SequenceOp {
    /// `x.len()`
    Length,

    /// `x.count()`
    Count,

    /// `x[i]`
    ElementAt,

    /// `x.get(i)`
    ElementAtOrDefault,

    First,

    FirstOrDefault,

    /// `x.contains(v)`
    Contains,

    /// A sequence built from the argument expressions
    FromElements { element_ty: Type },
}

/// Translates sequence operations to `ARRAY_LENGTH`, `OFFSET` indexing and
/// `UNNEST` containment.
#[derive(Debug, Default, Clone, Copy)]
pub struct SequenceTranslator;

impl Translate for SequenceTranslator {
    fn translate(
        &self,
        op: &Operation,
        receiver: Option<&Expr>,
        args: &[Expr],
        factory: &SqlExprFactory<'_>,
    ) -> Option<Expr> {
        let Operation::Sequence(op) = op else {
            return None;
        };

        if let SequenceOp::FromElements { element_ty } = op {
            return from_elements(args, element_ty, factory);
        }

        let receiver = receiver?.clone();

        if !receiver.mapping()?.is_array() {
            return None;
        }

        Some(match (op, args) {
            (SequenceOp::Length | SequenceOp::Count, []) => factory.function(
                "ARRAY_LENGTH",
                vec![receiver],
                factory.source().int64_mapping(),
            ),
            (SequenceOp::ElementAt, [index]) => {
                factory.index(receiver, index.clone(), IndexMode::Offset)
            }
            (SequenceOp::ElementAtOrDefault, [index]) => {
                factory.index(receiver, index.clone(), IndexMode::SafeOffset)
            }
            (SequenceOp::First, []) => {
                factory.index(receiver, factory.constant(0i64), IndexMode::Offset)
            }
            (SequenceOp::FirstOrDefault, []) => {
                factory.index(receiver, factory.constant(0i64), IndexMode::SafeOffset)
            }
            (SequenceOp::Contains, [item]) => factory.in_unnest(item.clone(), receiver),
            _ => return None,
        })
    }
}

/// Collapses all-constant elements into one constant list; anything else
/// becomes an array literal.
fn from_elements(args: &[Expr], element_ty: &Type, factory: &SqlExprFactory<'_>) -> Option<Expr> {
    let list_ty = Type::list(element_ty.clone());

    if args.iter().all(Expr::is_constant) {
        let values = args
            .iter()
            .filter_map(|arg| arg.as_constant().cloned())
            .collect::<Vec<_>>();
        let mapping = factory.source().resolve_ty(&list_ty)?;
        return Some(factory.typed_constant(Value::List(values), mapping));
    }

    match factory.array_literal(args.to_vec(), element_ty.clone()) {
        Ok(expr) => Some(expr),
        Err(err) => {
            tracing::debug!(%err, "cannot build array literal");
            None
        }
    }
}
