use toasty_bigquery_core::{
    stmt::{Type, TypeRecord},
    store::{self, parse, Composite, FieldToken},
    TypeMappingSource,
};

fn field<'a>(name: &'a str, ty: &'a str) -> FieldToken<'a> {
    FieldToken { name, ty }
}

/// Re-synthesizes a composite store type from its parsed pieces.
fn rebuild(store_type: &str) -> String {
    match parse(store_type) {
        Some(Composite::Array(element)) => store::array_of(&rebuild(element)),
        Some(Composite::Struct(fields)) => {
            let fields: Vec<_> = fields
                .iter()
                .map(|field| (field.name.to_string(), rebuild(field.ty)))
                .collect();
            store::struct_of(fields.iter().map(|(name, ty)| (&name[..], &ty[..])))
        }
        None => store_type.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Arrays
// ---------------------------------------------------------------------------

#[test]
fn array_of_scalar() {
    assert_eq!(parse("ARRAY<INT64>"), Some(Composite::Array("INT64")));
}

#[test]
fn array_prefix_is_case_insensitive() {
    assert_eq!(parse("  array<string>  "), Some(Composite::Array("string")));
}

#[test]
fn array_of_struct_keeps_element_verbatim() {
    assert_eq!(
        parse("ARRAY<STRUCT<a ARRAY<INT64>>>"),
        Some(Composite::Array("STRUCT<a ARRAY<INT64>>"))
    );
}

#[test]
fn empty_array_is_malformed() {
    assert_eq!(parse("ARRAY<>"), None);
}

// ---------------------------------------------------------------------------
// Structs
// ---------------------------------------------------------------------------

#[test]
fn struct_fields_in_order() {
    assert_eq!(
        parse("STRUCT<Name STRING, Age INT64>"),
        Some(Composite::Struct(vec![
            field("Name", "STRING"),
            field("Age", "INT64")
        ]))
    );
}

#[test]
fn struct_splits_only_at_depth_zero() {
    assert_eq!(
        parse("STRUCT<a STRUCT<x INT64, y INT64>, b ARRAY<STRUCT<c STRING, d BOOL>>, e NUMERIC(10, 2)>"),
        Some(Composite::Struct(vec![
            field("a", "STRUCT<x INT64, y INT64>"),
            field("b", "ARRAY<STRUCT<c STRING, d BOOL>>"),
            field("e", "NUMERIC(10, 2)"),
        ]))
    );
}

#[test]
fn struct_is_checked_before_array() {
    assert!(matches!(
        parse("STRUCT<a ARRAY<INT64>>"),
        Some(Composite::Struct(_))
    ));
}

#[test]
fn empty_struct_has_no_fields() {
    assert_eq!(parse("STRUCT<>"), Some(Composite::Struct(vec![])));
}

// ---------------------------------------------------------------------------
// Malformed input
// ---------------------------------------------------------------------------

#[test]
fn unterminated_brackets() {
    assert_eq!(parse("STRUCT<a INT64"), None);
    assert_eq!(parse("ARRAY<ARRAY<INT64>"), None);
}

#[test]
fn trailing_text_after_close() {
    assert_eq!(parse("ARRAY<INT64> x"), None);
    assert_eq!(parse("STRUCT<a INT64>>"), None);
}

#[test]
fn empty_field_token() {
    assert_eq!(parse("STRUCT<a INT64, , b STRING>"), None);
    assert_eq!(parse("STRUCT<a INT64,>"), None);
}

#[test]
fn scalars_are_not_composite() {
    assert_eq!(parse("INT64"), None);
    assert_eq!(parse("NUMERIC(10, 2)"), None);
    assert_eq!(parse(""), None);
}

// ---------------------------------------------------------------------------
// Round trip
// ---------------------------------------------------------------------------

#[test]
fn structural_round_trip() {
    for store_type in [
        "ARRAY<INT64>",
        "STRUCT<a INT64, b STRING>",
        "ARRAY<STRUCT<a ARRAY<INT64>>>",
        "STRUCT<a STRUCT<b STRUCT<c ARRAY<STRING>>>, d NUMERIC(10, 2)>",
    ] {
        assert_eq!(rebuild(store_type), store_type);
    }
}

#[test]
fn quoted_names_round_trip() {
    for store_type in [
        "STRUCT<`first name` INT64, id STRING>",
        "STRUCT<`order` INT64, `from` STRING>",
        "ARRAY<STRUCT<`a, <b>` INT64>>",
    ] {
        assert_eq!(rebuild(store_type), store_type);
    }

    assert_eq!(
        parse("STRUCT<`a, <b>` INT64, c STRING>"),
        Some(Composite::Struct(vec![field("a, <b>", "INT64"), field("c", "STRING")]))
    );
}

#[test]
fn struct_of_quotes_names_that_need_it() {
    assert_eq!(
        store::struct_of([("first name", "INT64"), ("Order", "INT64"), ("_id", "STRING")]),
        "STRUCT<`first name` INT64, `Order` INT64, _id STRING>"
    );
    assert_eq!(store::struct_of([("", "INT64"), ("", "STRING")]), "STRUCT<INT64, STRING>");
}

#[test]
fn synthesized_struct_resolves_again() {
    let source = TypeMappingSource::default();
    let row = TypeRecord::new("Row")
        .composite()
        .member("first name", Type::I64)
        .member("order", Type::I64);

    let mapping = source.resolve_ty(&Type::record(row)).unwrap();
    assert_eq!(mapping.store_type(), "STRUCT<`first name` INT64, `order` INT64>");

    let resolved = source.resolve_store_type(mapping.store_type()).unwrap();
    let fields: Vec<_> = resolved
        .as_struct()
        .unwrap()
        .fields()
        .iter()
        .map(|field| field.name().to_string())
        .collect();
    assert_eq!(fields, ["first name", "order"]);
}

// ---------------------------------------------------------------------------
// Facets
// ---------------------------------------------------------------------------

#[test]
fn base_name_strips_facets() {
    assert_eq!(store::base_name("NUMERIC(10, 2)"), "NUMERIC");
    assert_eq!(store::base_name("STRING(20)"), "STRING");
    assert_eq!(store::base_name("ARRAY<NUMERIC(10, 2)>"), "ARRAY<NUMERIC(10, 2)>");
}

#[test]
fn strip_facets_at_every_level() {
    assert_eq!(
        store::strip_facets("ARRAY<STRUCT<price NUMERIC(10, 2), code STRING(3)>>"),
        "ARRAY<STRUCT<price NUMERIC, code STRING>>"
    );
}
