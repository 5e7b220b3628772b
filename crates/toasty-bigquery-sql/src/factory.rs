use crate::expr::*;

use std::sync::Arc;
use toasty_bigquery_core::{
    mapping::MappingKind,
    stmt::{Type, Value},
    Error, Result, TypeMapping, TypeMappingSource,
};

/// Builds expression nodes with resolved type mappings.
///
/// Operands without a mapping pick one up from their context: an untyped
/// constant compared with a column takes the column's mapping, and anything
/// still untyped falls back to the default mapping of its value.
#[derive(Debug, Clone, Copy)]
pub struct SqlExprFactory<'a> {
    source: &'a TypeMappingSource,
}

impl<'a> SqlExprFactory<'a> {
    pub fn new(source: &'a TypeMappingSource) -> SqlExprFactory<'a> {
        SqlExprFactory { source }
    }

    pub fn source(&self) -> &'a TypeMappingSource {
        self.source
    }

    /// A constant typed with the default mapping of its value.
    ///
    /// Values with no default mapping (`NULL`, records, empty lists) stay
    /// untyped until an operator gives them one.
    pub fn constant(&self, value: impl Into<Value>) -> Expr {
        let value = value.into();
        let mapping = self.source.resolve_value(&value);
        ExprConstant { value, mapping }.into()
    }

    pub fn typed_constant(&self, value: impl Into<Value>, mapping: Arc<TypeMapping>) -> Expr {
        ExprConstant {
            value: value.into(),
            mapping: Some(mapping),
        }
        .into()
    }

    /// A named parameter of host type `ty`.
    pub fn parameter(&self, name: impl Into<String>, ty: &Type, value: impl Into<Value>) -> Result<Expr> {
        let Some(mapping) = self.source.resolve_ty(ty) else {
            return Err(Error::unsupported_feature(format!(
                "no BigQuery mapping for parameter type {ty:?}"
            )));
        };

        Ok(ExprParameter {
            name: name.into(),
            value: value.into(),
            mapping,
        }
        .into())
    }

    pub fn column(&self, table: Option<&str>, name: impl Into<String>, mapping: Arc<TypeMapping>) -> Expr {
        ExprColumn {
            table: table.map(str::to_string),
            name: name.into(),
            mapping,
        }
        .into()
    }

    /// A function call returning `mapping`.
    pub fn function(&self, name: impl Into<String>, args: Vec<Expr>, mapping: Arc<TypeMapping>) -> Expr {
        ExprFunc {
            name: name.into(),
            args: args
                .into_iter()
                .map(|arg| self.apply_default_mapping(arg))
                .collect(),
            mapping,
        }
        .into()
    }

    pub fn binary(&self, lhs: Expr, op: BinaryOp, rhs: Expr) -> Expr {
        let (lhs, rhs) = self.infer_operands(lhs, rhs);

        let mapping = if op.is_comparison() || op.is_logical() {
            Some(self.source.bool_mapping())
        } else {
            self.arithmetic_mapping(op, lhs.mapping(), rhs.mapping())
        };

        ExprBinaryOp {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
            mapping,
        }
        .into()
    }

    pub fn and(&self, lhs: Expr, rhs: Expr) -> Expr {
        self.binary(lhs, BinaryOp::And, rhs)
    }

    pub fn or(&self, lhs: Expr, rhs: Expr) -> Expr {
        self.binary(lhs, BinaryOp::Or, rhs)
    }

    pub fn not(&self, expr: Expr) -> Expr {
        let boolean = self.source.bool_mapping();

        ExprUnaryOp {
            op: UnaryOp::Not,
            expr: Box::new(self.apply_mapping(expr, boolean.clone())),
            mapping: Some(boolean),
        }
        .into()
    }

    pub fn negate(&self, expr: Expr) -> Expr {
        let expr = self.apply_default_mapping(expr);

        ExprUnaryOp {
            op: UnaryOp::Negate,
            mapping: expr.mapping().cloned(),
            expr: Box::new(expr),
        }
        .into()
    }

    /// Zero-based element access. The index is used as given.
    pub fn index(&self, array: Expr, index: Expr, mode: IndexMode) -> Expr {
        let array = self.apply_default_mapping(array);
        let mapping = element_mapping(&array);

        ExprIndex {
            array: Box::new(array),
            index: Box::new(self.apply_mapping(index, self.source.int64_mapping())),
            mode,
            mapping,
        }
        .into()
    }

    /// Access to `field` of a struct-typed expression.
    pub fn member(&self, expr: Expr, field: &str) -> Result<Expr> {
        let Some(structure) = expr.mapping().and_then(|mapping| mapping.as_struct()) else {
            return Err(Error::unsupported_feature(format!(
                "field access `{field}` on a non-STRUCT expression"
            )));
        };

        let Some(descriptor) = structure.field(field) else {
            toasty_bigquery_core::bail!("STRUCT has no field `{field}`");
        };

        Ok(ExprMember {
            field: descriptor.name().to_string(),
            mapping: Arc::new(descriptor.mapping().clone()),
            expr: Box::new(expr),
        }
        .into())
    }

    /// `item IN UNNEST(array)`
    pub fn in_unnest(&self, item: Expr, array: Expr) -> Expr {
        let array = self.apply_default_mapping(array);
        let item = match element_mapping(&array) {
            Some(element) => self.apply_mapping(item, element),
            None => self.apply_default_mapping(item),
        };

        ExprInUnnest {
            item: Box::new(item),
            array: Box::new(array),
            mapping: Some(self.source.bool_mapping()),
        }
        .into()
    }

    /// An array built from `elements`, each of host type `element_ty`.
    pub fn array_literal(&self, elements: Vec<Expr>, element_ty: Type) -> Result<Expr> {
        let Some(mapping) = self.source.resolve_ty(&Type::list(element_ty.clone())) else {
            return Err(Error::unsupported_feature(format!(
                "no BigQuery array mapping for elements of type {element_ty:?}"
            )));
        };

        let element_mapping = mapping
            .as_array()
            .map(|array| Arc::new(array.element().clone()));

        let elements = elements
            .into_iter()
            .map(|element| match &element_mapping {
                Some(mapping) => self.apply_mapping(element, mapping.clone()),
                None => self.apply_default_mapping(element),
            })
            .collect();

        Ok(ExprArrayLiteral {
            elements,
            element_ty,
            element_mapping,
            mapping: Some(mapping),
        }
        .into())
    }

    /// `CAST(expr AS T)`
    pub fn cast(&self, expr: Expr, mapping: Arc<TypeMapping>) -> Expr {
        ExprCast {
            expr: Box::new(self.apply_default_mapping(expr)),
            mapping,
        }
        .into()
    }

    /// Converts `expr` to `target`, using BigQuery's conversion functions
    /// where one exists.
    ///
    /// ```text
    /// TIMESTAMP -> DATETIME   DATETIME(x)
    /// TIMESTAMP -> DATE       DATE(x)
    /// DATETIME  -> TIME       TIME(x)
    /// INT64     -> STRING     CAST(x AS STRING)
    /// ```
    pub fn convert(&self, expr: Expr, target: Arc<TypeMapping>) -> Expr {
        let Some(source) = expr.mapping().cloned() else {
            return self.apply_mapping(expr, target);
        };

        if source.store_type().eq_ignore_ascii_case(target.store_type()) {
            return expr;
        }

        let from_instant = matches!(
            source.kind(),
            MappingKind::Timestamp | MappingKind::DateTime
        );

        let function = match target.kind() {
            MappingKind::DateTime if from_instant => "DATETIME",
            MappingKind::Date if from_instant => "DATE",
            MappingKind::Time if from_instant => "TIME",
            _ => return self.cast(expr, target),
        };

        tracing::trace!(from = source.store_type(), to = target.store_type(), function, "converting");
        self.function(function, vec![expr], target)
    }

    /// Gives `expr` the mapping `mapping` if it has none.
    ///
    /// Typed expressions are returned unchanged. Untyped composite nodes are
    /// rebuilt with their untyped children typed from context.
    pub fn apply_mapping(&self, expr: Expr, mapping: Arc<TypeMapping>) -> Expr {
        if expr.is_typed() {
            return expr;
        }

        self.infer(expr, Some(mapping))
    }

    /// Gives `expr` the default mapping of its value if it has none.
    pub fn apply_default_mapping(&self, expr: Expr) -> Expr {
        if expr.is_typed() {
            return expr;
        }

        self.infer(expr, None)
    }

    fn infer(&self, expr: Expr, mapping: Option<Arc<TypeMapping>>) -> Expr {
        match expr {
            Expr::Constant(e) => {
                let mapping = mapping.or_else(|| self.source.resolve_value(&e.value));
                ExprConstant {
                    value: e.value,
                    mapping,
                }
                .into()
            }
            Expr::BinaryOp(e) => match mapping {
                Some(mapping) if !(e.op.is_comparison() || e.op.is_logical()) => ExprBinaryOp {
                    lhs: Box::new(self.apply_mapping(*e.lhs, mapping.clone())),
                    op: e.op,
                    rhs: Box::new(self.apply_mapping(*e.rhs, mapping.clone())),
                    mapping: Some(mapping),
                }
                .into(),
                _ => self.binary(*e.lhs, e.op, *e.rhs),
            },
            Expr::UnaryOp(e) => match (e.op, mapping) {
                (UnaryOp::Not, _) => self.not(*e.expr),
                (UnaryOp::Negate, Some(mapping)) => ExprUnaryOp {
                    op: UnaryOp::Negate,
                    expr: Box::new(self.apply_mapping(*e.expr, mapping.clone())),
                    mapping: Some(mapping),
                }
                .into(),
                (UnaryOp::Negate, None) => self.negate(*e.expr),
            },
            Expr::ArrayLiteral(e) => {
                let mapping = mapping.or_else(|| self.source.resolve_ty(&Type::list(e.element_ty.clone())));
                let element_mapping = e.element_mapping.or_else(|| {
                    mapping
                        .as_ref()
                        .and_then(|mapping| mapping.as_array())
                        .map(|array| Arc::new(array.element().clone()))
                });
                let elements = e
                    .elements
                    .into_iter()
                    .map(|element| match &element_mapping {
                        Some(mapping) => self.apply_mapping(element, mapping.clone()),
                        None => self.apply_default_mapping(element),
                    })
                    .collect();

                ExprArrayLiteral {
                    elements,
                    element_ty: e.element_ty,
                    element_mapping,
                    mapping,
                }
                .into()
            }
            Expr::Index(e) => match self.index(*e.array, *e.index, e.mode) {
                Expr::Index(mut rebuilt) => {
                    rebuilt.mapping = rebuilt.mapping.or(mapping);
                    rebuilt.into()
                }
                rebuilt => rebuilt,
            },
            Expr::InUnnest(e) => self.in_unnest(*e.item, *e.array),
            expr => expr,
        }
    }

    /// Types untyped operands from the other side.
    fn infer_operands(&self, lhs: Expr, rhs: Expr) -> (Expr, Expr) {
        match (lhs.mapping().cloned(), rhs.mapping().cloned()) {
            (Some(_), Some(_)) => (lhs, rhs),
            (Some(mapping), None) => (lhs, self.apply_mapping(rhs, mapping)),
            (None, Some(mapping)) => (self.apply_mapping(lhs, mapping), rhs),
            (None, None) => {
                let lhs = self.apply_default_mapping(lhs);
                let rhs = self.apply_default_mapping(rhs);

                match (lhs.mapping().cloned(), rhs.mapping().cloned()) {
                    (Some(mapping), None) => (lhs, self.apply_mapping(rhs, mapping)),
                    (None, Some(mapping)) => (self.apply_mapping(lhs, mapping), rhs),
                    _ => (lhs, rhs),
                }
            }
        }
    }

    /// Result mapping of arithmetic and concatenation.
    fn arithmetic_mapping(
        &self,
        op: BinaryOp,
        lhs: Option<&Arc<TypeMapping>>,
        rhs: Option<&Arc<TypeMapping>>,
    ) -> Option<Arc<TypeMapping>> {
        let kinds = (lhs.map(|m| m.kind()), rhs.map(|m| m.kind()));

        match kinds {
            _ if op == BinaryOp::Concat => lhs.or(rhs).cloned(),
            (Some(MappingKind::Int64), Some(MappingKind::Int64)) if op == BinaryOp::Divide => {
                Some(self.source.float64_mapping())
            }
            (Some(MappingKind::Float64), _) | (_, Some(MappingKind::Float64)) => {
                Some(self.source.float64_mapping())
            }
            (_, Some(MappingKind::Decimal))
                if rhs.is_some_and(|m| m.is_big_numeric())
                    || !matches!(kinds.0, Some(MappingKind::Decimal)) =>
            {
                rhs.cloned()
            }
            _ => lhs.or(rhs).cloned(),
        }
    }
}

/// Mapping of the elements of an array-typed expression.
fn element_mapping(array: &Expr) -> Option<Arc<TypeMapping>> {
    array
        .mapping()
        .and_then(|mapping| mapping.as_array())
        .map(|array| Arc::new(array.element().clone()))
}
