use pretty_assertions::assert_eq;
use toasty_bigquery_core::{
    param::BoundParameter,
    stmt::{Type, Value},
    TypeMappingSource,
};
use toasty_bigquery_sql::{
    translate::SequenceOp, Expr, IndexMode, Operation, Serializer, SqlExprFactory, Translators,
};

fn sql(source: &TypeMappingSource, expr: &Expr) -> String {
    let mut params: Vec<BoundParameter> = vec![];
    Serializer::new(source).serialize(expr, &mut params).unwrap()
}

fn tags(factory: &SqlExprFactory<'_>) -> Expr {
    let mapping = factory.source().resolve_ty(&Type::list(Type::String)).unwrap();
    factory.column(None, "tags", mapping)
}

fn translate(
    factory: &SqlExprFactory<'_>,
    op: SequenceOp,
    receiver: Option<&Expr>,
    args: &[Expr],
) -> Option<Expr> {
    Translators::bigquery().translate(&Operation::Sequence(op), receiver, args, factory)
}

// ---------------------------------------------------------------------------
// Length and element access
// ---------------------------------------------------------------------------

#[test]
fn length_and_count() {
    let source = TypeMappingSource::default();
    let factory = SqlExprFactory::new(&source);
    let tags = tags(&factory);

    for op in [SequenceOp::Length, SequenceOp::Count] {
        let expr = translate(&factory, op, Some(&tags), &[]).unwrap();
        assert_eq!(sql(&source, &expr), "ARRAY_LENGTH(`tags`)");
        assert_eq!(expr.mapping().unwrap().store_type(), "INT64");
    }
}

#[test]
fn element_at_keeps_zero_based_index() {
    let source = TypeMappingSource::default();
    let factory = SqlExprFactory::new(&source);
    let tags = tags(&factory);

    let expr = translate(
        &factory,
        SequenceOp::ElementAt,
        Some(&tags),
        &[factory.constant(1i64)],
    )
    .unwrap();

    let Expr::Index(index) = &expr else {
        panic!("expected an index node; actual={expr:#?}");
    };
    assert_eq!(index.mode, IndexMode::Offset);
    assert_eq!(index.index.as_constant(), Some(&Value::I64(1)));
    assert_eq!(expr.mapping().unwrap().store_type(), "STRING");
    assert_eq!(sql(&source, &expr), "`tags`[OFFSET(1)]");
}

#[test]
fn element_at_or_default_is_safe() {
    let source = TypeMappingSource::default();
    let factory = SqlExprFactory::new(&source);
    let tags = tags(&factory);

    let expr = translate(
        &factory,
        SequenceOp::ElementAtOrDefault,
        Some(&tags),
        &[Expr::constant(2i32)],
    )
    .unwrap();
    assert_eq!(sql(&source, &expr), "`tags`[SAFE_OFFSET(2)]");
}

#[test]
fn first() {
    let source = TypeMappingSource::default();
    let factory = SqlExprFactory::new(&source);
    let tags = tags(&factory);

    let first = translate(&factory, SequenceOp::First, Some(&tags), &[]).unwrap();
    assert_eq!(sql(&source, &first), "`tags`[OFFSET(0)]");

    let first = translate(&factory, SequenceOp::FirstOrDefault, Some(&tags), &[]).unwrap();
    assert_eq!(sql(&source, &first), "`tags`[SAFE_OFFSET(0)]");
}

#[test]
fn contains_uses_unnest() {
    let source = TypeMappingSource::default();
    let factory = SqlExprFactory::new(&source);
    let tags = tags(&factory);

    let expr = translate(
        &factory,
        SequenceOp::Contains,
        Some(&tags),
        &[Expr::constant("rust")],
    )
    .unwrap();
    assert_eq!(sql(&source, &expr), "'rust' IN UNNEST(`tags`)");
    assert_eq!(expr.mapping().unwrap().store_type(), "BOOL");
}

#[test]
fn unsupported_receivers_and_arity() {
    let source = TypeMappingSource::default();
    let factory = SqlExprFactory::new(&source);
    let tags = tags(&factory);
    let name = factory.column(None, "name", source.string_mapping());

    assert!(translate(&factory, SequenceOp::Length, Some(&name), &[]).is_none());
    assert!(translate(&factory, SequenceOp::Length, None, &[]).is_none());
    assert!(translate(&factory, SequenceOp::ElementAt, Some(&tags), &[]).is_none());
    assert!(translate(&factory, SequenceOp::First, Some(&tags), &[tags.clone()]).is_none());
}

// ---------------------------------------------------------------------------
// Building sequences
// ---------------------------------------------------------------------------

#[test]
fn constant_elements_collapse_to_one_constant() {
    let source = TypeMappingSource::default();
    let factory = SqlExprFactory::new(&source);

    let args = [
        factory.constant(1i64),
        factory.constant(2i64),
        factory.constant(3i64),
    ];
    let expr = translate(
        &factory,
        SequenceOp::FromElements {
            element_ty: Type::I64,
        },
        None,
        &args,
    )
    .unwrap();

    assert_eq!(
        expr.as_constant(),
        Some(&Value::from(vec![
            Value::I64(1),
            Value::I64(2),
            Value::I64(3)
        ]))
    );
    assert_eq!(expr.mapping().unwrap().store_type(), "ARRAY<INT64>");
    assert_eq!(sql(&source, &expr), "ARRAY<INT64>[1, 2, 3]");
}

#[test]
fn empty_elements_collapse_to_empty_array() {
    let source = TypeMappingSource::default();
    let factory = SqlExprFactory::new(&source);

    let expr = translate(
        &factory,
        SequenceOp::FromElements {
            element_ty: Type::I64,
        },
        None,
        &[],
    )
    .unwrap();
    assert_eq!(sql(&source, &expr), "ARRAY<INT64>[]");
}

#[test]
fn non_constant_element_builds_array_literal() {
    let source = TypeMappingSource::default();
    let factory = SqlExprFactory::new(&source);

    let args = [
        Expr::constant(1i64),
        factory.column(None, "x", source.int64_mapping()),
    ];
    let expr = translate(
        &factory,
        SequenceOp::FromElements {
            element_ty: Type::I32,
        },
        None,
        &args,
    )
    .unwrap();

    let Expr::ArrayLiteral(array) = &expr else {
        panic!("expected an array literal; actual={expr:#?}");
    };
    assert_eq!(array.elements.len(), 2);
    assert_eq!(array.element_ty, Type::I32);
    assert_eq!(array.element_mapping.as_ref().unwrap().store_type(), "INT64");
    assert!(array.elements.iter().all(Expr::is_typed));

    assert_eq!(sql(&source, &expr), "ARRAY<INT64>[1, `x`]");
}
