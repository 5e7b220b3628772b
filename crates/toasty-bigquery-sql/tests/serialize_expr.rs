use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use toasty_bigquery_core::{
    param::{BoundParameter, WireType},
    stmt::{Type, Value},
    Options, TypeMappingSource,
};
use toasty_bigquery_sql::{BinaryOp, Expr, Serializer, SqlExprFactory};

fn serialize(source: &TypeMappingSource, expr: &Expr) -> (String, Vec<BoundParameter>) {
    let mut params = vec![];
    let sql = Serializer::new(source).serialize(expr, &mut params).unwrap();
    (sql, params)
}

fn sql(source: &TypeMappingSource, expr: &Expr) -> String {
    serialize(source, expr).0
}

// ---------------------------------------------------------------------------
// Identifiers
// ---------------------------------------------------------------------------

#[test]
fn columns_are_backtick_quoted() {
    let source = TypeMappingSource::default();
    let factory = SqlExprFactory::new(&source);

    let plain = factory.column(None, "name", source.string_mapping());
    assert_eq!(sql(&source, &plain), "`name`");

    let qualified = factory.column(Some("t"), "name", source.string_mapping());
    assert_eq!(sql(&source, &qualified), "`t`.`name`");

    let odd = factory.column(None, "we`ird", source.string_mapping());
    assert_eq!(sql(&source, &odd), r"`we\`ird`");
}

// ---------------------------------------------------------------------------
// Precedence
// ---------------------------------------------------------------------------

#[test]
fn arithmetic_parenthesization() {
    let source = TypeMappingSource::default();
    let factory = SqlExprFactory::new(&source);
    let col = |name: &str| factory.column(None, name, source.int64_mapping());

    let expr = factory.binary(
        factory.binary(col("a"), BinaryOp::Add, col("b")),
        BinaryOp::Multiply,
        col("c"),
    );
    assert_eq!(sql(&source, &expr), "(`a` + `b`) * `c`");

    let expr = factory.binary(
        factory.binary(col("a"), BinaryOp::Multiply, col("b")),
        BinaryOp::Add,
        col("c"),
    );
    assert_eq!(sql(&source, &expr), "`a` * `b` + `c`");

    let expr = factory.binary(
        col("a"),
        BinaryOp::Subtract,
        factory.binary(col("b"), BinaryOp::Subtract, col("c")),
    );
    assert_eq!(sql(&source, &expr), "`a` - (`b` - `c`)");

    let expr = factory.binary(
        col("a"),
        BinaryOp::Add,
        factory.binary(col("b"), BinaryOp::Add, col("c")),
    );
    assert_eq!(sql(&source, &expr), "`a` + `b` + `c`");
}

#[test]
fn logical_parenthesization() {
    let source = TypeMappingSource::default();
    let factory = SqlExprFactory::new(&source);
    let col = |name: &str| factory.column(None, name, source.bool_mapping());

    let expr = factory.or(factory.and(col("x"), col("y")), col("z"));
    assert_eq!(sql(&source, &expr), "`x` AND `y` OR `z`");

    let expr = factory.and(factory.or(col("x"), col("y")), col("z"));
    assert_eq!(sql(&source, &expr), "(`x` OR `y`) AND `z`");

    let expr = factory.not(factory.or(col("x"), col("y")));
    assert_eq!(sql(&source, &expr), "NOT (`x` OR `y`)");
}

#[test]
fn not_binds_looser_than_comparison() {
    let source = TypeMappingSource::default();
    let factory = SqlExprFactory::new(&source);
    let a = factory.column(None, "a", source.int64_mapping());

    let expr = factory.not(factory.binary(a, BinaryOp::Eq, Expr::constant(1i64)));
    assert_eq!(sql(&source, &expr), "NOT `a` = 1");
}

#[test]
fn negation() {
    let source = TypeMappingSource::default();
    let factory = SqlExprFactory::new(&source);
    let a = factory.column(None, "a", source.int64_mapping());

    assert_eq!(sql(&source, &factory.negate(a.clone())), "-`a`");
    assert_eq!(sql(&source, &factory.negate(factory.constant(-5i64))), "-(-5)");

    let sum = factory.binary(a, BinaryOp::Add, Expr::constant(1i64));
    assert_eq!(sql(&source, &factory.negate(sum)), "-(`a` + 1)");
}

#[test]
fn comparisons_do_not_chain() {
    let source = TypeMappingSource::default();
    let factory = SqlExprFactory::new(&source);
    let col = |name: &str| factory.column(None, name, source.bool_mapping());

    let expr = factory.binary(
        factory.binary(col("a"), BinaryOp::Eq, col("b")),
        BinaryOp::Eq,
        col("c"),
    );
    assert_eq!(sql(&source, &expr), "(`a` = `b`) = `c`");
}

// ---------------------------------------------------------------------------
// Constants and parameters
// ---------------------------------------------------------------------------

#[test]
fn constants_are_inlined_by_default() {
    let source = TypeMappingSource::default();
    let factory = SqlExprFactory::new(&source);
    let name = factory.column(None, "name", source.string_mapping());

    let expr = factory.binary(name, BinaryOp::Eq, Expr::constant("it's"));
    let (sql, params) = serialize(&source, &expr);
    assert_eq!(sql, r"`name` = 'it\'s'");
    assert!(params.is_empty());
}

#[test]
fn constants_are_bound_when_not_inlined() {
    let source = TypeMappingSource::new(Options {
        inline_constants: false,
        ..Options::default()
    });
    let factory = SqlExprFactory::new(&source);
    let price = factory.column(None, "price", source.resolve_ty(&Type::Decimal).unwrap());

    let expr = factory.and(
        factory.binary(price.clone(), BinaryOp::Gt, Expr::constant(5i32)),
        factory.binary(price, BinaryOp::Lt, Expr::constant(10i32)),
    );
    let (sql, params) = serialize(&source, &expr);

    assert_eq!(sql, "`price` > @p0 AND `price` < @p1");
    assert_eq!(params.len(), 2);
    assert_eq!(params[0].name, "p0");
    assert_eq!(params[0].wire_type, Some(WireType::Numeric));
    assert_eq!(params[0].precision, Some(38));
    assert_eq!(params[0].scale, Some(9));
    assert_eq!(params[0].value, Value::Decimal(Decimal::from(5)));
    assert_eq!(params[1].value, Value::Decimal(Decimal::from(10)));
}

#[test]
fn named_parameters_are_configured() {
    let source = TypeMappingSource::default();
    let factory = SqlExprFactory::new(&source);
    let age = factory.column(None, "age", source.int64_mapping());

    let param = factory.parameter("min_age", &Type::I16, 18i16).unwrap();
    let expr = factory.binary(age, BinaryOp::Ge, param);
    let (sql, params) = serialize(&source, &expr);

    assert_eq!(sql, "`age` >= @min_age");
    assert_eq!(
        params,
        [BoundParameter {
            name: "min_age".to_string(),
            wire_type: Some(WireType::Int64),
            precision: None,
            scale: None,
            value: Value::I64(18),
        }]
    );
}

#[test]
fn repeated_parameter_is_bound_once() {
    let source = TypeMappingSource::default();
    let factory = SqlExprFactory::new(&source);
    let a = factory.column(None, "a", source.int64_mapping());
    let b = factory.column(None, "b", source.int64_mapping());

    let param = factory.parameter("x", &Type::I64, 1i64).unwrap();
    let expr = factory.or(
        factory.binary(a, BinaryOp::Eq, param.clone()),
        factory.binary(b, BinaryOp::Eq, param),
    );
    let (sql, params) = serialize(&source, &expr);

    assert_eq!(sql, "`a` = @x OR `b` = @x");
    assert_eq!(params.len(), 1);
}

#[test]
fn bound_constant_skips_explicit_parameter_names() {
    let source = TypeMappingSource::new(Options {
        inline_constants: false,
        ..Options::default()
    });
    let factory = SqlExprFactory::new(&source);

    let param = factory.parameter("p0", &Type::I64, 7i64).unwrap();
    let expr = factory.binary(factory.constant(5i64), BinaryOp::Eq, param);
    let (sql, params) = serialize(&source, &expr);

    assert_eq!(sql, "@p1 = @p0");
    assert_eq!(params.len(), 2);
    assert_eq!(params[0].name, "p1");
    assert_eq!(params[0].value, Value::I64(5));
    assert_eq!(params[1].name, "p0");
    assert_eq!(params[1].value, Value::I64(7));
}

#[test]
fn array_parameter() {
    let source = TypeMappingSource::default();
    let factory = SqlExprFactory::new(&source);

    let ids = factory
        .parameter(
            "ids",
            &Type::list(Type::I32),
            vec![Value::I32(1), Value::I32(2)],
        )
        .unwrap();
    let expr = factory.in_unnest(
        factory.column(None, "id", source.int64_mapping()),
        ids,
    );
    let (sql, params) = serialize(&source, &expr);

    assert_eq!(sql, "`id` IN UNNEST(@ids)");
    assert_eq!(
        params[0].wire_type,
        Some(WireType::Array(Box::new(WireType::Int64)))
    );
    assert_eq!(
        params[0].value,
        Value::from(vec![Value::I64(1), Value::I64(2)])
    );
}

#[test]
fn custom_parameter_prefix() {
    let source = TypeMappingSource::new(Options {
        parameter_prefix: "@@".to_string(),
        ..Options::default()
    });
    let factory = SqlExprFactory::new(&source);

    let expr = factory.parameter("p", &Type::Bool, true).unwrap();
    assert_eq!(sql(&source, &expr), "@@p");
}

// ---------------------------------------------------------------------------
// Other nodes
// ---------------------------------------------------------------------------

#[test]
fn cast_and_function() {
    let source = TypeMappingSource::default();
    let factory = SqlExprFactory::new(&source);
    let a = factory.column(None, "a", source.int64_mapping());

    let expr = factory.cast(a.clone(), source.string_mapping());
    assert_eq!(sql(&source, &expr), "CAST(`a` AS STRING)");

    let expr = factory.function("ABS", vec![a], source.int64_mapping());
    assert_eq!(sql(&source, &expr), "ABS(`a`)");
}

#[test]
fn untyped_null_renders_null() {
    let source = TypeMappingSource::default();
    assert_eq!(sql(&source, &Expr::constant(Value::Null)), "NULL");
}

#[test]
fn index_in_arithmetic() {
    let source = TypeMappingSource::default();
    let factory = SqlExprFactory::new(&source);
    let scores = factory.column(None, "scores", source.resolve_ty(&Type::list(Type::I64)).unwrap());

    let sum = factory.binary(
        factory.index(scores.clone(), Expr::constant(0i64), toasty_bigquery_sql::IndexMode::Offset),
        BinaryOp::Add,
        Expr::constant(1i64),
    );
    assert_eq!(sql(&source, &sum), "`scores`[OFFSET(0)] + 1");
}

#[test]
fn mismatched_constant_fails() {
    let source = TypeMappingSource::default();
    let factory = SqlExprFactory::new(&source);

    let expr = factory.typed_constant("x", source.int64_mapping());
    let mut params: Vec<BoundParameter> = vec![];
    let err = Serializer::new(&source)
        .serialize(&expr, &mut params)
        .unwrap_err();
    assert!(err.is_type_conversion());
}

#[test]
fn mismatched_parameter_reports_name() {
    let source = TypeMappingSource::default();
    let factory = SqlExprFactory::new(&source);

    let expr = factory.parameter("flag", &Type::Bool, "yes").unwrap();
    let mut params: Vec<BoundParameter> = vec![];
    let err = Serializer::new(&source)
        .serialize(&expr, &mut params)
        .unwrap_err();
    assert!(err.to_string().starts_with("binding parameter `flag`"), "{err}");
    assert!(params.is_empty());
}
