use super::{Operation, Translate};
use crate::{BinaryOp, Expr, SqlExprFactory};

use toasty_bigquery_core::mapping::MappingKind;

/// Methods of string values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringOp {
    /// Length in characters
    Length,
    Contains,
    StartsWith,
    EndsWith,
    ToUpper,
    ToLower,
    Trim,
    TrimStart,
    TrimEnd,

    /// `substring(start)` or `substring(start, len)` with a zero-based start
    Substring,

    Replace,

    /// Zero-based position of the first match, `-1` when absent
    IndexOf,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StringTranslator;

impl Translate for StringTranslator {
    fn translate(
        &self,
        op: &Operation,
        receiver: Option<&Expr>,
        args: &[Expr],
        factory: &SqlExprFactory<'_>,
    ) -> Option<Expr> {
        let Operation::String(op) = op else {
            return None;
        };

        let receiver = receiver?;
        if !matches!(receiver.mapping()?.kind(), MappingKind::String) {
            return None;
        }

        let source = factory.source();
        let string = source.string_mapping();
        let int64 = source.int64_mapping();
        let boolean = source.bool_mapping();

        let arg_mapping = string.clone();
        let with_receiver = move |extra: &[Expr]| -> Vec<Expr> {
            std::iter::once(receiver)
                .chain(extra)
                .cloned()
                .map(|arg| factory.apply_mapping(arg, arg_mapping.clone()))
                .collect()
        };

        Some(match (op, args) {
            (StringOp::Length, []) => factory.function("LENGTH", with_receiver(args), int64),
            (StringOp::ToUpper, []) => factory.function("UPPER", with_receiver(args), string),
            (StringOp::ToLower, []) => factory.function("LOWER", with_receiver(args), string),
            (StringOp::Trim, []) => factory.function("TRIM", with_receiver(args), string),
            (StringOp::TrimStart, []) => factory.function("LTRIM", with_receiver(args), string),
            (StringOp::TrimEnd, []) => factory.function("RTRIM", with_receiver(args), string),
            (StringOp::StartsWith, [_]) => {
                factory.function("STARTS_WITH", with_receiver(args), boolean)
            }
            (StringOp::EndsWith, [_]) => factory.function("ENDS_WITH", with_receiver(args), boolean),
            (StringOp::Replace, [_, _]) => factory.function("REPLACE", with_receiver(args), string),
            (StringOp::Contains, [_]) => factory.binary(
                factory.function("STRPOS", with_receiver(args), int64),
                BinaryOp::Gt,
                factory.constant(0i64),
            ),
            (StringOp::IndexOf, [_]) => factory.binary(
                factory.function("STRPOS", with_receiver(args), int64),
                BinaryOp::Subtract,
                factory.constant(1i64),
            ),
            (StringOp::Substring, [start, rest @ ..]) if rest.len() <= 1 => {
                // SUBSTR is one-based
                let start = factory.binary(
                    factory.apply_mapping(start.clone(), int64.clone()),
                    BinaryOp::Add,
                    factory.constant(1i64),
                );
                let mut args = vec![factory.apply_mapping(receiver.clone(), string.clone()), start];
                args.extend(
                    rest.iter()
                        .map(|len| factory.apply_mapping(len.clone(), int64.clone())),
                );
                factory.function("SUBSTR", args, string)
            }
            _ => return None,
        })
    }
}
