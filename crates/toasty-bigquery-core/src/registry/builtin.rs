use super::TypeMappingSource;
use crate::{
    mapping::{MappingKind, TypeMapping, ValueConverter},
    stmt::Type,
    store,
};

use std::sync::Arc;

/// The canonical scalar mappings, one per BigQuery store type.
#[derive(Debug, Clone)]
pub(super) struct Builtins {
    pub(super) bool: Arc<TypeMapping>,
    pub(super) int64: Arc<TypeMapping>,
    pub(super) float64: Arc<TypeMapping>,
    pub(super) numeric: Arc<TypeMapping>,
    pub(super) bignumeric: Arc<TypeMapping>,
    pub(super) string: Arc<TypeMapping>,
    pub(super) bytes: Arc<TypeMapping>,
    pub(super) date: Arc<TypeMapping>,
    pub(super) time: Arc<TypeMapping>,
    pub(super) datetime: Arc<TypeMapping>,
    pub(super) timestamp: Arc<TypeMapping>,
    pub(super) json: Arc<TypeMapping>,
    pub(super) geography: Arc<TypeMapping>,
}

impl Builtins {
    pub(super) fn new() -> Builtins {
        let scalar = |store_type, ty, kind| Arc::new(TypeMapping::scalar(store_type, ty, kind));

        Builtins {
            bool: scalar(store::BOOL, Type::Bool, MappingKind::Bool),
            int64: scalar(store::INT64, Type::I64, MappingKind::Int64),
            float64: scalar(store::FLOAT64, Type::F64, MappingKind::Float64),
            numeric: scalar(store::NUMERIC, Type::Decimal, MappingKind::Decimal),
            bignumeric: scalar(store::BIGNUMERIC, Type::BigDecimal, MappingKind::Decimal),
            string: scalar(store::STRING, Type::String, MappingKind::String),
            bytes: scalar(store::BYTES, Type::Bytes, MappingKind::Bytes),
            date: scalar(store::DATE, Type::Date, MappingKind::Date),
            time: scalar(store::TIME, Type::Time, MappingKind::Time),
            datetime: scalar(store::DATETIME, Type::DateTime, MappingKind::DateTime),
            timestamp: scalar(store::TIMESTAMP, Type::Timestamp, MappingKind::Timestamp),
            json: scalar(store::JSON, Type::Json, MappingKind::Json),
            geography: scalar(store::GEOGRAPHY, Type::Geography, MappingKind::Geography),
        }
    }

    fn all(&self) -> [&Arc<TypeMapping>; 13] {
        [
            &self.bool,
            &self.int64,
            &self.float64,
            &self.numeric,
            &self.bignumeric,
            &self.string,
            &self.bytes,
            &self.date,
            &self.time,
            &self.datetime,
            &self.timestamp,
            &self.json,
            &self.geography,
        ]
    }
}

/// Populates the scalar tables from `source.builtins`.
pub(super) fn register(source: &mut TypeMappingSource) {
    let builtins = source.builtins.clone();

    // Store types and their aliases
    source.add_store_type(&["BOOL", "BOOLEAN"], &builtins.bool);
    source.add_store_type(
        &["INT64", "INT", "INTEGER", "BIGINT", "SMALLINT", "TINYINT", "BYTEINT"],
        &builtins.int64,
    );
    source.add_store_type(&["FLOAT64", "FLOAT"], &builtins.float64);
    source.add_store_type(&["NUMERIC", "DECIMAL"], &builtins.numeric);
    source.add_store_type(&["BIGNUMERIC", "BIGDECIMAL"], &builtins.bignumeric);
    source.add_store_type(&["STRING"], &builtins.string);
    source.add_store_type(&["BYTES"], &builtins.bytes);
    source.add_store_type(&["DATE"], &builtins.date);
    source.add_store_type(&["TIME"], &builtins.time);
    source.add_store_type(&["DATETIME"], &builtins.datetime);
    source.add_store_type(&["TIMESTAMP"], &builtins.timestamp);
    source.add_store_type(&["JSON"], &builtins.json);
    source.add_store_type(&["GEOGRAPHY"], &builtins.geography);

    for mapping in builtins.all() {
        source.add_host_type(TypeMapping::clone(mapping));
    }

    // Narrow integers and `f32` share the 64-bit store types and are widened
    // when bound.
    for ty in [Type::I8, Type::I16, Type::I32, Type::U8, Type::U16, Type::U32] {
        source.add_host_type(builtins.int64.with_ty(ty));
    }
    source.add_host_type(builtins.float64.with_ty(Type::F32));
    source.add_host_type(
        builtins
            .numeric
            .with_ty(Type::U64)
            .with_converter(ValueConverter::U64ToDecimal),
    );
    source.add_host_type(
        builtins
            .string
            .with_ty(Type::Char)
            .with_converter(ValueConverter::CharToString),
    );
    source.add_host_type(
        builtins
            .string
            .with_ty(Type::Uuid)
            .with_converter(ValueConverter::UuidToString),
    );
    source.add_host_type(builtins.bytes.with_ty(Type::array(Type::U8)));
    source.add_host_type(builtins.timestamp.with_ty(Type::Zoned));
}
