use super::*;

impl Expr {
    /// Rebuilds the tree bottom-up, passing every node to `f` after its
    /// children have been rebuilt.
    ///
    /// The original tree is consumed; nothing is mutated in place.
    pub fn transform(self, f: &mut impl FnMut(Expr) -> Expr) -> Expr {
        let rebuilt = match self {
            Expr::ArrayLiteral(e) => ExprArrayLiteral {
                elements: e.elements.into_iter().map(|e| e.transform(f)).collect(),
                ..e
            }
            .into(),
            Expr::BinaryOp(e) => ExprBinaryOp {
                lhs: Box::new(e.lhs.transform(f)),
                op: e.op,
                rhs: Box::new(e.rhs.transform(f)),
                mapping: e.mapping,
            }
            .into(),
            Expr::Cast(e) => ExprCast {
                expr: Box::new(e.expr.transform(f)),
                mapping: e.mapping,
            }
            .into(),
            Expr::Func(e) => ExprFunc {
                args: e.args.into_iter().map(|e| e.transform(f)).collect(),
                ..e
            }
            .into(),
            Expr::InUnnest(e) => ExprInUnnest {
                item: Box::new(e.item.transform(f)),
                array: Box::new(e.array.transform(f)),
                mapping: e.mapping,
            }
            .into(),
            Expr::Index(e) => ExprIndex {
                array: Box::new(e.array.transform(f)),
                index: Box::new(e.index.transform(f)),
                mode: e.mode,
                mapping: e.mapping,
            }
            .into(),
            Expr::Member(e) => ExprMember {
                expr: Box::new(e.expr.transform(f)),
                ..e
            }
            .into(),
            Expr::UnaryOp(e) => ExprUnaryOp {
                op: e.op,
                expr: Box::new(e.expr.transform(f)),
                mapping: e.mapping,
            }
            .into(),
            leaf @ (Expr::Column(_) | Expr::Constant(_) | Expr::Parameter(_)) => leaf,
        };

        f(rebuilt)
    }

    /// Visits every node, children before parents.
    pub fn visit(&self, f: &mut impl FnMut(&Expr)) {
        match self {
            Expr::ArrayLiteral(e) => e.elements.iter().for_each(|e| e.visit(f)),
            Expr::BinaryOp(e) => {
                e.lhs.visit(f);
                e.rhs.visit(f);
            }
            Expr::Cast(e) => e.expr.visit(f),
            Expr::Func(e) => e.args.iter().for_each(|e| e.visit(f)),
            Expr::InUnnest(e) => {
                e.item.visit(f);
                e.array.visit(f);
            }
            Expr::Index(e) => {
                e.array.visit(f);
                e.index.visit(f);
            }
            Expr::Member(e) => e.expr.visit(f),
            Expr::UnaryOp(e) => e.expr.visit(f),
            Expr::Column(_) | Expr::Constant(_) | Expr::Parameter(_) => {}
        }

        f(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_rebuilds_bottom_up() {
        let expr = Expr::binary_op(Expr::constant(1i64), BinaryOp::Add, Expr::constant(2i64));

        let mut seen = vec![];
        let expr = expr.transform(&mut |e| {
            seen.push(e.is_constant());
            match e {
                Expr::Constant(ExprConstant {
                    value: Value::I64(v),
                    mapping,
                }) => ExprConstant {
                    value: Value::I64(v * 10),
                    mapping,
                }
                .into(),
                e => e,
            }
        });

        assert_eq!(seen, [true, true, false]);
        assert_eq!(
            expr,
            Expr::binary_op(Expr::constant(10i64), BinaryOp::Add, Expr::constant(20i64))
        );
    }

    #[test]
    fn visit_counts_nodes() {
        let expr = Expr::binary_op(
            Expr::constant(true),
            BinaryOp::And,
            Expr::binary_op(Expr::constant(1i64), BinaryOp::Lt, Expr::constant(2i64)),
        );

        let mut count = 0;
        expr.visit(&mut |_| count += 1);
        assert_eq!(count, 5);
    }
}
