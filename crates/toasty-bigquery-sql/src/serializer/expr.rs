use super::{Comma, Formatter, Ident, Params, Period, ToSql};
use crate::expr::*;

use toasty_bigquery_core::{literal, param, param::BoundParameter, Error, TypeMapping};

impl ToSql for &Expr {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            Expr::ArrayLiteral(e) => {
                let Some(mapping) = &e.mapping else {
                    return f.fail(Error::unsupported_feature(
                        "array literal without a resolved element type",
                    ));
                };

                let ty = mapping.literal_store_type();
                fmt!(f, &ty "[" Comma(&e.elements) "]");
            }
            Expr::BinaryOp(e) => {
                let precedence = e.op.precedence();
                let lhs = Operand {
                    expr: &e.lhs,
                    paren: e.lhs.precedence() < precedence
                        || (e.lhs.precedence() == precedence && e.op.is_comparison()),
                };
                let rhs = Operand {
                    expr: &e.rhs,
                    paren: e.rhs.precedence() < precedence
                        || (e.rhs.precedence() == precedence && !same_associative_op(e.op, &e.rhs)),
                };
                let op = e.op.to_string();
                fmt!(f, lhs " " op.as_str() " " rhs);
            }
            Expr::Cast(e) => {
                let expr: &Expr = &e.expr;
                fmt!(f, "CAST(" expr " AS " e.mapping.store_type() ")");
            }
            Expr::Column(e) => {
                let path = e.table.as_deref().into_iter().chain([e.name.as_str()]);
                fmt!(f, Period(path.map(Ident)));
            }
            Expr::Constant(e) => constant(&e.value, e.mapping.as_deref(), f),
            Expr::Func(e) => {
                fmt!(f, &e.name "(" Comma(&e.args) ")");
            }
            Expr::InUnnest(e) => {
                let item = Operand {
                    expr: &e.item,
                    paren: e.item.precedence() <= self.precedence(),
                };
                let array: &Expr = &e.array;
                fmt!(f, item " IN UNNEST(" array ")");
            }
            Expr::Index(e) => {
                let array = Operand::atomic(&e.array);
                let index: &Expr = &e.index;
                fmt!(f, array "[" e.mode.as_str() "(" index ")]");
            }
            Expr::Member(e) => {
                fmt!(f, Operand::atomic(&e.expr) "." Ident(&e.field));
            }
            Expr::Parameter(e) => {
                bind(BoundParameter::new(&e.name, e.value.clone()), &e.mapping, f);
            }
            Expr::UnaryOp(e) => {
                let operand = Operand {
                    expr: &e.expr,
                    // `--` starts a comment
                    paren: e.expr.precedence() <= e.op.precedence()
                        || (e.op == UnaryOp::Negate && e.expr.is_constant()),
                };
                let op = e.op.to_string();
                fmt!(f, op.as_str() operand);
            }
        }
    }
}

/// An operand, parenthesized when it binds looser than its context.
struct Operand<'a> {
    expr: &'a Expr,
    paren: bool,
}

impl<'a> Operand<'a> {
    fn atomic(expr: &'a Expr) -> Operand<'a> {
        Operand {
            expr,
            paren: expr.precedence() < u8::MAX,
        }
    }
}

impl ToSql for Operand<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        if self.paren {
            fmt!(f, "(" self.expr ")");
        } else {
            self.expr.to_sql(f);
        }
    }
}

fn same_associative_op(op: BinaryOp, rhs: &Expr) -> bool {
    op.is_associative() && matches!(rhs, Expr::BinaryOp(rhs) if rhs.op == op)
}

fn constant<P: Params>(
    value: &toasty_bigquery_core::stmt::Value,
    mapping: Option<&TypeMapping>,
    f: &mut Formatter<'_, P>,
) {
    let resolved;
    let mapping = match mapping {
        Some(mapping) => mapping,
        None if value.is_null() => return "NULL".to_sql(f),
        None => match f.serializer.source.resolve_value(value) {
            Some(mapping) => {
                resolved = mapping;
                &*resolved
            }
            None => {
                return f.fail(Error::unsupported_feature(format!(
                    "constant {value:?} has no BigQuery type"
                )))
            }
        },
    };

    if f.serializer.options().inline_constants {
        if let Err(err) = literal::render_into(f.dst, mapping, value) {
            f.fail(err);
        }
    } else {
        let name = f.unused_param_name();
        bind(BoundParameter::new(name, value.clone()), mapping, f);
    }
}

fn bind<P: Params>(mut param: BoundParameter, mapping: &TypeMapping, f: &mut Formatter<'_, P>) {
    if let Err(err) = param::configure_with(mapping, &mut param, f.serializer.options()) {
        return f.fail(err.context(toasty_bigquery_core::err!("binding parameter `{}`", param.name)));
    }

    f.params.push(param).to_sql(f);
}
