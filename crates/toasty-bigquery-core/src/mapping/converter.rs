use super::json;
use crate::{
    stmt::{ContainerShape, Type, Value, ValueEnum},
    Error, Result,
};

use rust_decimal::{prelude::ToPrimitive, Decimal};

/// Bidirectional transform between a host value and its stored form.
///
/// Converters run before literal rendering and parameter binding
/// (`to_provider`) and when reading stored values back (`from_provider`).
/// Null values never reach a converter.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueConverter {
    /// Enum values are stored as their `INT64` discriminant
    EnumToNumber,

    /// UUIDs are stored as their hyphenated `STRING` form
    UuidToString,

    /// Characters are stored as one-character `STRING`s
    CharToString,

    /// `u64` does not fit `INT64`; it is stored as `NUMERIC`
    U64ToDecimal,

    /// Records and lists stored in a `JSON` column
    ToJson,

    /// Abstract sequences are materialized as a concrete container. Values
    /// are already in list form, so the conversion keeps them as they are.
    Materialize {
        from: ContainerShape,
        to: ContainerShape,
    },
}

impl ValueConverter {
    pub fn to_provider(&self, value: Value) -> Result<Value> {
        match (self, value) {
            (Self::EnumToNumber, Value::Enum(value)) => Ok(Value::I64(value.discriminant)),
            (Self::EnumToNumber, value) => match value.as_i64() {
                Some(discriminant) => Ok(Value::I64(discriminant)),
                None => Err(Error::type_conversion(value, "INT64")),
            },
            (Self::UuidToString, Value::Uuid(value)) => {
                Ok(Value::String(value.hyphenated().to_string()))
            }
            (Self::CharToString, Value::Char(value)) => Ok(Value::String(value.to_string())),
            (Self::U64ToDecimal, Value::U64(value)) => Ok(Value::Decimal(Decimal::from(value))),
            (Self::ToJson, value @ Value::Json(_)) => Ok(value),
            (Self::ToJson, value) => Ok(Value::Json(json::to_json(&value)?)),
            (Self::Materialize { .. }, value @ Value::List(_)) => Ok(value),
            (_, value @ Value::String(_)) if matches!(self, Self::UuidToString | Self::CharToString) => {
                Ok(value)
            }
            (_, value) => Err(Error::type_conversion(value, self.provider_type())),
        }
    }

    pub fn from_provider(&self, value: Value, ty: &Type) -> Result<Value> {
        match (self, value) {
            (Self::EnumToNumber, value) => match value.as_i64() {
                Some(discriminant) => Ok(Value::Enum(ValueEnum::new(discriminant))),
                None => Err(Error::type_conversion(value, "enum")),
            },
            (Self::UuidToString, Value::String(value)) => Ok(Value::Uuid(value.parse()?)),
            (Self::CharToString, Value::String(value)) => {
                let mut chars = value.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(Value::Char(c)),
                    _ => Err(Error::type_conversion(Value::String(value), "char")),
                }
            }
            (Self::U64ToDecimal, Value::Decimal(value)) => match value.to_u64() {
                Some(value) => Ok(Value::U64(value)),
                None => Err(Error::type_conversion(Value::Decimal(value), "u64")),
            },
            (Self::ToJson, Value::Json(value)) => json::from_json(value, ty),
            (Self::Materialize { .. }, value @ Value::List(_)) => Ok(value),
            (_, value) => Err(Error::type_conversion(value, "host value")),
        }
    }

    /// The store type a converted value has.
    fn provider_type(&self) -> &'static str {
        match self {
            Self::EnumToNumber => "INT64",
            Self::UuidToString | Self::CharToString => "STRING",
            Self::U64ToDecimal => "NUMERIC",
            Self::ToJson => "JSON",
            Self::Materialize { .. } => "ARRAY",
        }
    }
}
