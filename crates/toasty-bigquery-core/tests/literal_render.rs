use pretty_assertions::assert_eq;
use std::str::FromStr;
use toasty_bigquery_core::{
    literal::render,
    stmt::{Geography, Type, TypeEnum, TypeRecord, Value, ValueMultiArray, ValueRecord},
    TypeMappingSource,
};

fn render_ty(ty: &Type, value: impl Into<Value>) -> String {
    let source = TypeMappingSource::default();
    let mapping = source.resolve_ty(ty).unwrap();
    render(&mapping, &value.into()).unwrap()
}

fn render_store(store_type: &str, value: impl Into<Value>) -> String {
    let source = TypeMappingSource::default();
    let mapping = source.resolve_store_type(store_type).unwrap();
    render(&mapping, &value.into()).unwrap()
}

// ---------------------------------------------------------------------------
// Scalars
// ---------------------------------------------------------------------------

#[test]
fn null_is_null() {
    assert_eq!(render_store("STRING", Value::Null), "NULL");
    assert_eq!(render_store("ARRAY<INT64>", Value::Null), "NULL");
}

#[test]
fn bools() {
    assert_eq!(render_store("BOOL", true), "TRUE");
    assert_eq!(render_store("BOOL", false), "FALSE");
}

#[test]
fn integers_widen() {
    assert_eq!(render_ty(&Type::I8, -5i8), "-5");
    assert_eq!(render_ty(&Type::U32, u32::MAX), "4294967295");
    assert_eq!(render_ty(&Type::I64, i64::MIN), "-9223372036854775808");
}

#[test]
fn u64_is_numeric() {
    assert_eq!(
        render_ty(&Type::U64, u64::MAX),
        "NUMERIC '18446744073709551615'"
    );
}

#[test]
fn strings_are_escaped() {
    assert_eq!(
        render_store("STRING", "it's a \\ path\n"),
        r"'it\'s a \\ path\n'"
    );
}

#[test]
fn char_and_uuid_are_strings() {
    assert_eq!(render_ty(&Type::Char, 'x'), "'x'");

    let id = uuid::Uuid::from_str("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
    assert_eq!(
        render_ty(&Type::Uuid, id),
        "'67e55044-10b1-426f-9247-bb680e5fe0c8'"
    );
}

#[test]
fn bytes() {
    assert_eq!(
        render_store("BYTES", Value::bytes(vec![0xde, 0xad, 0x01])),
        r"B'\xde\xad\x01'"
    );
    assert_eq!(
        render_ty(
            &Type::array(Type::U8),
            Value::List(vec![Value::U8(1), Value::U8(255)])
        ),
        r"B'\x01\xff'"
    );
}

#[test]
fn floats() {
    assert_eq!(render_store("FLOAT64", 1.5f64), "1.5");
    assert_eq!(render_store("FLOAT64", 2.0f64), "2.0");
    assert_eq!(render_store("FLOAT64", f64::NAN), "CAST('NaN' AS FLOAT64)");
    assert_eq!(
        render_store("FLOAT64", f64::INFINITY),
        "CAST('inf' AS FLOAT64)"
    );
    assert_eq!(render_ty(&Type::F32, f32::NEG_INFINITY), "CAST('-inf' AS FLOAT64)");
}

#[test]
fn decimals() {
    let value = rust_decimal::Decimal::new(1250, 2);
    assert_eq!(render_store("NUMERIC(10, 2)", value), "NUMERIC '12.50'");

    let value = bigdecimal::BigDecimal::from_str("123456789.0123456789").unwrap();
    assert_eq!(
        render_store("BIGNUMERIC", value.clone()),
        "BIGNUMERIC '123456789.0123456789'"
    );
    assert_eq!(
        render_store("BIGDECIMAL(40, 10)", value),
        "BIGNUMERIC '123456789.0123456789'"
    );
}

#[test]
fn temporal() {
    use jiff::civil::{date, time};

    assert_eq!(render_store("DATE", date(2024, 1, 15)), "DATE '2024-01-15'");
    assert_eq!(
        render_store("TIME", time(10, 30, 5, 250_000_000)),
        "TIME '10:30:05.250000'"
    );
    assert_eq!(
        render_store("DATETIME", date(2024, 1, 15).at(10, 30, 0, 0)),
        "DATETIME '2024-01-15 10:30:00.000000'"
    );

    let ts: jiff::Timestamp = "2024-01-15T10:30:00.000001Z".parse().unwrap();
    assert_eq!(
        render_store("TIMESTAMP", ts),
        "TIMESTAMP '2024-01-15 10:30:00.000001+00:00'"
    );

    let zoned: jiff::Zoned = "2024-01-15T10:30:00+05:30[+05:30]".parse().unwrap();
    assert_eq!(
        render_ty(&Type::Zoned, zoned),
        "TIMESTAMP '2024-01-15 10:30:00.000000+05:30'"
    );
}

#[test]
fn json_and_geography() {
    assert_eq!(
        render_store("JSON", serde_json::json!({ "a": "it's" })),
        r#"JSON '{"a":"it\'s"}'"#
    );
    assert_eq!(
        render_store("GEOGRAPHY", Geography::point(1.0, 2.5)),
        "ST_GEOGFROMTEXT('POINT(1.0 2.5)')"
    );
}

#[test]
fn enums_render_discriminants() {
    let status = Type::Enum(TypeEnum::new("Status", Type::I32).variant("Active", 3));
    assert_eq!(render_ty(&status, Value::enum_variant(3)), "3");
}

#[test]
fn scalar_rerender_is_stable() {
    let source = TypeMappingSource::default();

    let cases: Vec<(Type, Value)> = vec![
        (Type::I32, Value::I32(7)),
        (Type::F32, Value::F32(0.1)),
        (Type::U64, Value::U64(42)),
        (Type::Char, Value::Char('q')),
        (Type::String, Value::from("a'b")),
        (Type::Decimal, Value::Decimal(rust_decimal::Decimal::new(-314, 2))),
        (Type::Date, Value::Date(jiff::civil::date(1999, 12, 31))),
    ];

    for (ty, value) in cases {
        let mapping = source.resolve_ty(&ty).unwrap();
        let first = render(&mapping, &value).unwrap();

        let again = source.resolve_store_type(mapping.store_type()).unwrap();
        assert_eq!(render(&again, &value).unwrap(), first, "{ty:?}");
    }
}

#[test]
fn mismatched_value_fails() {
    let source = TypeMappingSource::default();
    let mapping = source.resolve_store_type("DATE").unwrap();

    let err = render(&mapping, &Value::from("2024-01-15")).unwrap_err();
    assert!(err.is_type_conversion());
}

// ---------------------------------------------------------------------------
// Arrays
// ---------------------------------------------------------------------------

#[test]
fn array_of_integers() {
    assert_eq!(
        render_store("ARRAY<INT64>", vec![Value::I64(1), Value::I64(2), Value::I64(3)]),
        "ARRAY<INT64>[1, 2, 3]"
    );
}

#[test]
fn empty_array() {
    assert_eq!(render_store("ARRAY<INT64>", Value::List(vec![])), "ARRAY<INT64>[]");
}

#[test]
fn array_with_null_element() {
    assert_eq!(
        render_store("ARRAY<STRING>", vec![Value::from("a"), Value::Null]),
        "ARRAY<STRING>['a', NULL]"
    );
}

#[test]
fn array_literal_strips_facets() {
    assert_eq!(
        render_store(
            "ARRAY<NUMERIC(10, 2)>",
            vec![Value::Decimal(rust_decimal::Decimal::new(100, 2))]
        ),
        "ARRAY<NUMERIC>[NUMERIC '1.00']"
    );
}

#[test]
fn multi_dimensional_value_is_rejected() {
    let source = TypeMappingSource::default();
    let mapping = source.resolve_store_type("ARRAY<INT64>").unwrap();
    let value = ValueMultiArray::new(
        vec![2, 2],
        vec![Value::I64(1), Value::I64(2), Value::I64(3), Value::I64(4)],
    );

    let err = render(&mapping, &value.into()).unwrap_err();
    assert!(err.is_unsupported_shape());
}

// ---------------------------------------------------------------------------
// Structs
// ---------------------------------------------------------------------------

#[test]
fn struct_in_declared_order() {
    let record = ValueRecord::new().with("Age", 5).with("Name", "Jo");
    assert_eq!(
        render_store("STRUCT<Name STRING, Age INT64>", record),
        "STRUCT<Name STRING, Age INT64>('Jo', 5)"
    );
}

#[test]
fn struct_missing_field_is_null() {
    let record = ValueRecord::new().with("Name", "Jo");
    assert_eq!(
        render_store("STRUCT<Name STRING, Age INT64>", record),
        "STRUCT<Name STRING, Age INT64>('Jo', NULL)"
    );
}

#[test]
fn struct_fields_ignore_case() {
    let source = TypeMappingSource::default();
    let address = Type::record(
        TypeRecord::new("Address")
            .composite()
            .member("City", Type::String),
    );
    let mapping = source
        .resolve(Some(&address), Some("STRUCT<city STRING>"))
        .unwrap();

    let record = ValueRecord::new().with("City", "Oslo");
    assert_eq!(
        render(&mapping, &record.into()).unwrap(),
        "STRUCT<city STRING>('Oslo')"
    );
}

#[test]
fn nested_composites() {
    let record = ValueRecord::new()
        .with("a", vec![Value::I64(1), Value::I64(2)])
        .with("b", ValueRecord::new().with("c", "x"));

    assert_eq!(
        render_store("ARRAY<STRUCT<a ARRAY<INT64>, b STRUCT<c STRING>>>", vec![Value::from(record)]),
        "ARRAY<STRUCT<a ARRAY<INT64>, b STRUCT<c STRING>>>[STRUCT<a ARRAY<INT64>, b STRUCT<c STRING>>(ARRAY<INT64>[1, 2], STRUCT<c STRING>('x'))]"
    );
}

#[test]
fn composite_record_as_json() {
    let source = TypeMappingSource::default();
    let address = Type::record(
        TypeRecord::new("Address")
            .composite()
            .member("City", Type::String),
    );
    let mapping = source.resolve(Some(&address), Some("JSON")).unwrap();

    let record = ValueRecord::new().with("City", "Oslo");
    assert_eq!(
        render(&mapping, &record.into()).unwrap(),
        r#"JSON '{"City":"Oslo"}'"#
    );
}

#[test]
fn error_names_the_failing_field() {
    let source = TypeMappingSource::default();
    let mapping = source.resolve_store_type("STRUCT<d DATE>").unwrap();

    let err = render(&mapping, &ValueRecord::new().with("d", 1).into()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "rendering field `d`: cannot convert I32 to DATE"
    );
}
