//! Configures query parameters from type mappings.
//!
//! [`configure`] tags a parameter with the BigQuery wire type of its
//! mapping, copies numeric facets, and rewrites its value into the form the
//! wire type expects: converters applied, narrow integers widened to `I64`,
//! `F32` widened to `F64`, and struct fields put in declared order.

mod wire_type;
pub use wire_type::WireType;

use crate::{
    mapping::{MappingKind, TypeMapping},
    stmt::{Value, ValueRecord},
    Error, Options, Result,
};

use rust_decimal::Decimal;

/// A query parameter the binder can configure.
pub trait Parameter {
    fn set_wire_type(&mut self, wire_type: WireType);

    fn set_precision(&mut self, precision: u32);

    fn set_scale(&mut self, scale: u32);

    fn value(&self) -> &Value;

    fn set_value(&mut self, value: Value);
}

/// A named parameter ready to be sent with a query.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoundParameter {
    pub name: String,
    pub wire_type: Option<WireType>,
    pub precision: Option<u32>,
    pub scale: Option<u32>,
    pub value: Value,
}

impl BoundParameter {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> BoundParameter {
        BoundParameter {
            name: name.into(),
            value: value.into(),
            ..BoundParameter::default()
        }
    }
}

impl Parameter for BoundParameter {
    fn set_wire_type(&mut self, wire_type: WireType) {
        self.wire_type = Some(wire_type);
    }

    fn set_precision(&mut self, precision: u32) {
        self.precision = Some(precision);
    }

    fn set_scale(&mut self, scale: u32) {
        self.scale = Some(scale);
    }

    fn value(&self) -> &Value {
        &self.value
    }

    fn set_value(&mut self, value: Value) {
        self.value = value;
    }
}

/// Configures `param` for `mapping` using the default [`Options`].
pub fn configure(mapping: &TypeMapping, param: &mut impl Parameter) -> Result<()> {
    configure_with(mapping, param, &Options::BIGQUERY)
}

/// Configures `param` for `mapping`.
///
/// `NUMERIC` and `BIGNUMERIC` parameters whose mapping carries no precision
/// take the defaults from `options`.
pub fn configure_with(
    mapping: &TypeMapping,
    param: &mut impl Parameter,
    options: &Options,
) -> Result<()> {
    param.set_wire_type(WireType::from_mapping(mapping));

    if let MappingKind::Decimal = mapping.kind() {
        let (precision, scale) = match mapping.facets().precision {
            Some(precision) => (precision, mapping.facets().scale.unwrap_or(0)),
            None if mapping.is_big_numeric() => options.default_bignumeric_facets,
            None => options.default_numeric_facets,
        };
        param.set_precision(precision);
        param.set_scale(scale);
    }

    let value = to_wire(mapping, param.value().clone())?;
    param.set_value(value);
    Ok(())
}

/// Rewrites a host value into the form bound for `mapping`'s wire type.
pub fn to_wire(mapping: &TypeMapping, value: Value) -> Result<Value> {
    if value.is_null() {
        return Ok(Value::Null);
    }

    if let Value::MultiArray(value) = &value {
        return Err(Error::unsupported_shape(format!(
            "rank {} container",
            value.rank()
        )));
    }

    let value = mapping.to_provider(value)?;

    Ok(match (mapping.kind(), value) {
        (MappingKind::Bool, value @ Value::Bool(_)) => value,
        (MappingKind::Int64, Value::Enum(value)) => Value::I64(value.discriminant),
        (MappingKind::Int64, value) => match value.as_i64() {
            Some(v) => Value::I64(v),
            None => return Err(Error::type_conversion(value, mapping.store_type())),
        },
        (MappingKind::Float64, Value::F32(v)) => Value::F64(v.into()),
        (MappingKind::Float64, value @ Value::F64(_)) => value,
        (MappingKind::Decimal, value @ (Value::Decimal(_) | Value::BigDecimal(_))) => value,
        (MappingKind::Decimal, Value::U64(v)) => Value::Decimal(Decimal::from(v)),
        (MappingKind::Decimal, value) => match value.as_i64() {
            Some(v) => Value::Decimal(Decimal::from(v)),
            None => return Err(Error::type_conversion(value, mapping.store_type())),
        },
        (MappingKind::String, value @ Value::String(_)) => value,
        (MappingKind::String, Value::Char(v)) => Value::String(v.to_string()),
        (MappingKind::String, Value::Uuid(v)) => Value::String(v.hyphenated().to_string()),
        (MappingKind::Bytes, value @ Value::Bytes(_)) => value,
        (MappingKind::Bytes, Value::List(items)) => Value::Bytes(
            items
                .into_iter()
                .map(|item| match item {
                    Value::U8(b) => Ok(b),
                    item => Err(Error::type_conversion(item, "BYTES")),
                })
                .collect::<Result<_>>()?,
        ),
        (MappingKind::Date, value @ Value::Date(_))
        | (MappingKind::Time, value @ Value::Time(_))
        | (MappingKind::DateTime, value @ Value::DateTime(_))
        | (MappingKind::Timestamp, value @ Value::Timestamp(_))
        | (MappingKind::Json, value @ Value::Json(_))
        | (MappingKind::Geography, value @ Value::Geography(_)) => value,
        (MappingKind::Timestamp, Value::Zoned(v)) => Value::Timestamp(v.timestamp()),
        (MappingKind::Array(array), Value::List(items)) => Value::List(
            items
                .into_iter()
                .map(|item| to_wire(array.element(), item))
                .collect::<Result<_>>()?,
        ),
        (MappingKind::Struct(structure), Value::Record(record)) => {
            let mut ret = ValueRecord::new();

            for (field, value) in structure.fields().iter().zip(structure.extract(&record)) {
                let value = match value {
                    Some(value) => to_wire(field.mapping(), value.clone())?,
                    None => Value::Null,
                };
                ret.insert(field.name(), value);
            }

            Value::Record(ret)
        }
        (_, value) => return Err(Error::type_conversion(value, mapping.store_type())),
    })
}
