use pretty_assertions::assert_eq;
use std::sync::Arc;
use toasty_bigquery_core::{
    param::BoundParameter,
    stmt::{Type, TypeRecord, Value},
    TypeMappingSource,
};
use toasty_bigquery_sql::{BinaryOp, Expr, Serializer, SqlExprFactory};

fn sql(source: &TypeMappingSource, expr: &Expr) -> String {
    let mut params: Vec<BoundParameter> = vec![];
    Serializer::new(source).serialize(expr, &mut params).unwrap()
}

fn address() -> Type {
    Type::record(
        TypeRecord::new("Address")
            .composite()
            .member("City", Type::String)
            .member("Zip", Type::String),
    )
}

// ---------------------------------------------------------------------------
// Mapping inference
// ---------------------------------------------------------------------------

#[test]
fn constant_takes_default_mapping() {
    let source = TypeMappingSource::default();
    let factory = SqlExprFactory::new(&source);

    assert_eq!(factory.constant(5i32).mapping().unwrap().store_type(), "INT64");
    assert_eq!(factory.constant("x").mapping().unwrap().store_type(), "STRING");
    assert!(!factory.constant(Value::Null).is_typed());
}

#[test]
fn untyped_operand_takes_other_side() {
    let source = TypeMappingSource::default();
    let factory = SqlExprFactory::new(&source);
    let price = factory.column(None, "price", source.resolve_ty(&Type::Decimal).unwrap());

    let expr = factory.binary(price.clone(), BinaryOp::Eq, Expr::constant(5i64));
    let Expr::BinaryOp(binary) = &expr else {
        panic!("expected a binary op; actual={expr:#?}");
    };
    assert_eq!(binary.rhs.mapping().unwrap().store_type(), "NUMERIC");
    assert_eq!(expr.mapping().unwrap().store_type(), "BOOL");
    assert_eq!(sql(&source, &expr), "`price` = NUMERIC '5'");

    // Either side
    let expr = factory.binary(Expr::constant(5i64), BinaryOp::Lt, price);
    assert_eq!(sql(&source, &expr), "NUMERIC '5' < `price`");
}

#[test]
fn null_compared_with_column() {
    let source = TypeMappingSource::default();
    let factory = SqlExprFactory::new(&source);
    let name = factory.column(None, "name", source.string_mapping());

    let expr = factory.binary(name, BinaryOp::Ne, Expr::constant(Value::Null));
    let Expr::BinaryOp(binary) = &expr else {
        panic!("expected a binary op; actual={expr:#?}");
    };
    assert_eq!(binary.rhs.mapping().unwrap().store_type(), "STRING");
    assert_eq!(sql(&source, &expr), "`name` <> NULL");
}

#[test]
fn arithmetic_result_types() {
    let source = TypeMappingSource::default();
    let factory = SqlExprFactory::new(&source);
    let a = factory.column(None, "a", source.int64_mapping());
    let b = factory.column(None, "b", source.int64_mapping());
    let f = factory.column(None, "f", source.float64_mapping());
    let s = factory.column(None, "s", source.string_mapping());

    let sum = factory.binary(a.clone(), BinaryOp::Add, b.clone());
    assert_eq!(sum.mapping().unwrap().store_type(), "INT64");

    let mixed = factory.binary(a.clone(), BinaryOp::Multiply, f);
    assert_eq!(mixed.mapping().unwrap().store_type(), "FLOAT64");

    let quotient = factory.binary(a, BinaryOp::Divide, b);
    assert_eq!(quotient.mapping().unwrap().store_type(), "FLOAT64");

    let concat = factory.binary(s, BinaryOp::Concat, Expr::constant("!"));
    assert_eq!(concat.mapping().unwrap().store_type(), "STRING");
    assert_eq!(sql(&source, &concat), "`s` || '!'");
}

#[test]
fn apply_mapping_recurses_into_untyped_children() {
    let source = TypeMappingSource::default();
    let factory = SqlExprFactory::new(&source);
    let numeric = source.resolve_ty(&Type::Decimal).unwrap();

    let expr = Expr::binary_op(Expr::constant(1i64), BinaryOp::Add, Expr::constant(2i64));
    let expr = factory.apply_mapping(expr, numeric);

    assert_eq!(expr.mapping().unwrap().store_type(), "NUMERIC");
    assert_eq!(sql(&source, &expr), "NUMERIC '1' + NUMERIC '2'");
}

#[test]
fn apply_mapping_keeps_typed_expression() {
    let source = TypeMappingSource::default();
    let factory = SqlExprFactory::new(&source);

    let expr = factory.constant(1i64);
    let applied = factory.apply_mapping(expr.clone(), source.float64_mapping());
    assert_eq!(applied, expr);
}

#[test]
fn apply_default_mapping() {
    let source = TypeMappingSource::default();
    let factory = SqlExprFactory::new(&source);

    let expr = factory.apply_default_mapping(Expr::binary_op(
        Expr::constant(1i64),
        BinaryOp::Lt,
        Expr::constant(2.5f64),
    ));
    let Expr::BinaryOp(binary) = &expr else {
        panic!("expected a binary op; actual={expr:#?}");
    };
    assert_eq!(binary.lhs.mapping().unwrap().store_type(), "INT64");
    assert_eq!(binary.rhs.mapping().unwrap().store_type(), "FLOAT64");
    assert_eq!(expr.mapping().unwrap().store_type(), "BOOL");

    let null = factory.apply_default_mapping(Expr::constant(Value::Null));
    assert!(!null.is_typed());
}

// ---------------------------------------------------------------------------
// Node construction
// ---------------------------------------------------------------------------

#[test]
fn parameter_requires_a_mapping() {
    let source = TypeMappingSource::default();
    let factory = SqlExprFactory::new(&source);

    let expr = factory.parameter("age", &Type::I32, 36i32).unwrap();
    assert_eq!(expr.mapping().unwrap().store_type(), "INT64");

    let err = factory.parameter("x", &Type::Unknown, Value::Null).unwrap_err();
    assert!(err.is_unsupported_feature());
}

#[test]
fn member_access() {
    let source = TypeMappingSource::default();
    let factory = SqlExprFactory::new(&source);
    let addr = factory.column(None, "addr", source.resolve_ty(&address()).unwrap());

    let city = factory.member(addr.clone(), "city").unwrap();
    assert_eq!(city.mapping().unwrap().store_type(), "STRING");
    assert_eq!(sql(&source, &city), "`addr`.`City`");

    assert!(factory.member(addr, "Street").is_err());

    let name = factory.column(None, "name", source.string_mapping());
    let err = factory.member(name, "x").unwrap_err();
    assert!(err.is_unsupported_feature());
}

#[test]
fn in_unnest_types_item_from_elements() {
    let source = TypeMappingSource::default();
    let factory = SqlExprFactory::new(&source);
    let ids = factory.column(None, "ids", source.resolve_ty(&Type::list(Type::Decimal)).unwrap());

    let expr = factory.in_unnest(Expr::constant(3i64), ids);
    let Expr::InUnnest(in_unnest) = &expr else {
        panic!("expected IN UNNEST; actual={expr:#?}");
    };
    assert_eq!(in_unnest.item.mapping().unwrap().store_type(), "NUMERIC");
    assert_eq!(sql(&source, &expr), "NUMERIC '3' IN UNNEST(`ids`)");
}

#[test]
fn array_literal_of_unmapped_elements() {
    let source = TypeMappingSource::default();
    let factory = SqlExprFactory::new(&source);

    let err = factory
        .array_literal(vec![Expr::constant(1i64)], Type::list(Type::I64))
        .unwrap_err();
    assert!(err.is_unsupported_feature());
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

#[test]
fn convert_timestamp_parts() {
    let source = TypeMappingSource::default();
    let factory = SqlExprFactory::new(&source);
    let ts = factory.column(None, "ts", source.resolve_ty(&Type::Timestamp).unwrap());

    let datetime = factory.convert(ts.clone(), source.datetime_mapping());
    assert_eq!(sql(&source, &datetime), "DATETIME(`ts`)");
    assert_eq!(datetime.mapping().unwrap().store_type(), "DATETIME");

    let date = factory.convert(ts.clone(), source.date_mapping());
    assert_eq!(sql(&source, &date), "DATE(`ts`)");

    let time = factory.convert(ts, source.time_mapping());
    assert_eq!(sql(&source, &time), "TIME(`ts`)");
}

#[test]
fn convert_same_store_type_is_noop() {
    let source = TypeMappingSource::default();
    let factory = SqlExprFactory::new(&source);
    let a = factory.column(None, "a", source.int64_mapping());
    let narrow = source.resolve_ty(&Type::I16).unwrap();

    assert_eq!(factory.convert(a.clone(), narrow), a);
}

#[test]
fn convert_falls_back_to_cast() {
    let source = TypeMappingSource::default();
    let factory = SqlExprFactory::new(&source);
    let a = factory.column(None, "a", source.int64_mapping());

    let expr = factory.convert(a, source.string_mapping());
    assert!(expr.is_cast());
    assert_eq!(sql(&source, &expr), "CAST(`a` AS STRING)");
}

#[test]
fn convert_untyped_applies_target() {
    let source = TypeMappingSource::default();
    let factory = SqlExprFactory::new(&source);
    let target = source.float64_mapping();

    let expr = factory.convert(Expr::constant(Value::Null), target.clone());
    assert!(Arc::ptr_eq(expr.mapping().unwrap(), &target));
}
