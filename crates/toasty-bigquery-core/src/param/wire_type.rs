use crate::mapping::{MappingKind, TypeMapping};

/// The BigQuery query-parameter type a value is sent as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WireType {
    Bool,
    Int64,
    Float64,
    Numeric,
    BigNumeric,
    String,
    Bytes,
    Date,
    Time,
    DateTime,
    Timestamp,
    Json,
    Geography,

    /// Named fields in declared order
    Struct(Vec<(String, WireType)>),

    /// Element wire type
    Array(Box<WireType>),
}

impl WireType {
    pub fn from_mapping(mapping: &TypeMapping) -> WireType {
        match mapping.kind() {
            MappingKind::Bool => WireType::Bool,
            MappingKind::Int64 => WireType::Int64,
            MappingKind::Float64 => WireType::Float64,
            MappingKind::Decimal if mapping.is_big_numeric() => WireType::BigNumeric,
            MappingKind::Decimal => WireType::Numeric,
            MappingKind::String => WireType::String,
            MappingKind::Bytes => WireType::Bytes,
            MappingKind::Date => WireType::Date,
            MappingKind::Time => WireType::Time,
            MappingKind::DateTime => WireType::DateTime,
            MappingKind::Timestamp => WireType::Timestamp,
            MappingKind::Json => WireType::Json,
            MappingKind::Geography => WireType::Geography,
            MappingKind::Array(array) => {
                WireType::Array(Box::new(WireType::from_mapping(array.element())))
            }
            MappingKind::Struct(structure) => WireType::Struct(
                structure
                    .fields()
                    .iter()
                    .map(|field| (field.name().to_string(), WireType::from_mapping(field.mapping())))
                    .collect(),
            ),
        }
    }

    /// The type name as it appears in BigQuery's query parameter API.
    pub fn name(&self) -> &'static str {
        match self {
            WireType::Bool => "BOOL",
            WireType::Int64 => "INT64",
            WireType::Float64 => "FLOAT64",
            WireType::Numeric => "NUMERIC",
            WireType::BigNumeric => "BIGNUMERIC",
            WireType::String => "STRING",
            WireType::Bytes => "BYTES",
            WireType::Date => "DATE",
            WireType::Time => "TIME",
            WireType::DateTime => "DATETIME",
            WireType::Timestamp => "TIMESTAMP",
            WireType::Json => "JSON",
            WireType::Geography => "GEOGRAPHY",
            WireType::Struct(_) => "STRUCT",
            WireType::Array(_) => "ARRAY",
        }
    }
}
