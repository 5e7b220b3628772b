use std::sync::Arc;
use std::thread;
use toasty_bigquery_core::{
    stmt::{Type, TypeRecord},
    TypeMappingSource,
};

const SHAPE: &str = "ARRAY<STRUCT<id INT64, tags ARRAY<STRING>, price NUMERIC(10, 2)>>";

#[test]
fn concurrent_store_type_resolution_shares_one_mapping() {
    let source = TypeMappingSource::default();

    let mappings: Vec<_> = thread::scope(|s| {
        let handles: Vec<_> = (0..16)
            .map(|_| s.spawn(|| source.resolve_store_type(SHAPE).unwrap()))
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    for mapping in &mappings[1..] {
        assert!(Arc::ptr_eq(&mappings[0], mapping));
    }
}

#[test]
fn concurrent_host_type_resolution_shares_one_mapping() {
    let source = Arc::new(TypeMappingSource::default());
    let order = Type::record(
        TypeRecord::new("Order")
            .composite()
            .member("Id", Type::I64)
            .member("Lines", Type::list(Type::record(
                TypeRecord::new("Line")
                    .composite()
                    .member("Sku", Type::String)
                    .member("Qty", Type::I32),
            ))),
    );

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let source = source.clone();
            let order = order.clone();
            thread::spawn(move || source.resolve_ty(&order).unwrap())
        })
        .collect();

    let mappings: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    assert_eq!(
        mappings[0].store_type(),
        "STRUCT<Id INT64, Lines ARRAY<STRUCT<Sku STRING, Qty INT64>>>"
    );
    for mapping in &mappings[1..] {
        assert!(Arc::ptr_eq(&mappings[0], mapping));
    }
}

#[test]
fn source_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TypeMappingSource>();
}
