//! Renders values as BigQuery Standard SQL literals.
//!
//! ```text
//! STRING         'it\'s'
//! BYTES          B'\x00\xff'
//! FLOAT64        1.5, CAST('NaN' AS FLOAT64)
//! NUMERIC(10, 2) NUMERIC '12.50'
//! TIMESTAMP      TIMESTAMP '2024-01-15 10:30:00.000000+00:00'
//! ARRAY<INT64>   ARRAY<INT64>[1, 2, 3]
//! STRUCT<...>    STRUCT<Name STRING, Age INT64>('Jo', 5)
//! ```
//!
//! Values pass through the mapping's converter before rendering. Literal
//! constructors (`ARRAY<T>[...]`, `STRUCT<...>(...)`) use the store type with
//! facets removed, since BigQuery rejects parameterized types there.

mod escape;
pub use escape::escape_string;

mod temporal;

use crate::{
    mapping::{MappingKind, TypeMapping},
    stmt::Value,
    Error, Result,
};

use std::fmt::Write;

/// Renders `value` as a literal of `mapping`'s store type.
pub fn render(mapping: &TypeMapping, value: &Value) -> Result<String> {
    let mut dst = String::new();
    render_into(&mut dst, mapping, value)?;
    Ok(dst)
}

/// Renders `value` into `dst`.
pub fn render_into(dst: &mut String, mapping: &TypeMapping, value: &Value) -> Result<()> {
    if value.is_null() {
        dst.push_str("NULL");
        return Ok(());
    }

    if let Value::MultiArray(value) = value {
        return Err(Error::unsupported_shape(format!(
            "rank {} container",
            value.rank()
        )));
    }

    let converted;
    let value = if mapping.converter().is_some() {
        converted = mapping.to_provider(value.clone())?;
        &converted
    } else {
        value
    };

    match (mapping.kind(), value) {
        (MappingKind::Bool, Value::Bool(v)) => dst.push_str(if *v { "TRUE" } else { "FALSE" }),
        (MappingKind::Int64, Value::Enum(v)) => write_display(dst, v.discriminant),
        (MappingKind::Int64, value) => match value.as_i64() {
            Some(v) => write_display(dst, v),
            None => return Err(mismatch(mapping, value)),
        },
        (MappingKind::Float64, Value::F64(v)) => render_float(dst, *v),
        (MappingKind::Float64, Value::F32(v)) if v.is_finite() => write_display(dst, format!("{v:?}")),
        (MappingKind::Float64, Value::F32(v)) => render_float(dst, f64::from(*v)),
        (MappingKind::Float64, value) => match value.as_i64() {
            Some(v) => write_display(dst, format!("{:?}", v as f64)),
            None => return Err(mismatch(mapping, value)),
        },
        (MappingKind::Decimal, value) => render_decimal(dst, mapping, value)?,
        (MappingKind::String, Value::String(v)) => escape_string(dst, v),
        (MappingKind::String, Value::Char(v)) => escape_string(dst, v.encode_utf8(&mut [0; 4])),
        (MappingKind::String, Value::Uuid(v)) => escape_string(dst, &v.hyphenated().to_string()),
        (MappingKind::Bytes, Value::Bytes(v)) => render_bytes(dst, v),
        (MappingKind::Bytes, Value::List(items)) => {
            let bytes = items
                .iter()
                .map(|item| match item {
                    Value::U8(b) => Ok(*b),
                    item => Err(mismatch(mapping, item)),
                })
                .collect::<Result<Vec<_>>>()?;
            render_bytes(dst, &bytes);
        }
        (MappingKind::Date, Value::Date(v)) => {
            dst.push_str("DATE '");
            temporal::write_date(dst, *v);
            dst.push('\'');
        }
        (MappingKind::Time, Value::Time(v)) => {
            dst.push_str("TIME '");
            temporal::write_time(dst, *v);
            dst.push('\'');
        }
        (MappingKind::DateTime, Value::DateTime(v)) => {
            dst.push_str("DATETIME '");
            temporal::write_datetime(dst, *v);
            dst.push('\'');
        }
        (MappingKind::Timestamp, Value::Timestamp(v)) => {
            dst.push_str("TIMESTAMP '");
            temporal::write_timestamp(dst, v);
            dst.push('\'');
        }
        (MappingKind::Timestamp, Value::Zoned(v)) => {
            dst.push_str("TIMESTAMP '");
            temporal::write_zoned(dst, v);
            dst.push('\'');
        }
        (MappingKind::Json, Value::Json(v)) => {
            dst.push_str("JSON ");
            escape_string(dst, &v.to_string());
        }
        (MappingKind::Geography, Value::Geography(v)) => {
            dst.push_str("ST_GEOGFROMTEXT(");
            escape_string(dst, v.as_wkt());
            dst.push(')');
        }
        (MappingKind::Array(array), Value::List(items)) => {
            dst.push_str(&mapping.literal_store_type());
            dst.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    dst.push_str(", ");
                }
                render_into(dst, array.element(), item)
                    .map_err(|err| err.context(crate::err!("rendering element {i}")))?;
            }
            dst.push(']');
        }
        (MappingKind::Struct(structure), Value::Record(record)) => {
            dst.push_str(&mapping.literal_store_type());
            dst.push('(');
            for (i, (field, value)) in structure
                .fields()
                .iter()
                .zip(structure.extract(record))
                .enumerate()
            {
                if i > 0 {
                    dst.push_str(", ");
                }
                match value {
                    Some(value) => render_into(dst, field.mapping(), value)
                        .map_err(|err| err.context(crate::err!("rendering field `{}`", field.name())))?,
                    None => dst.push_str("NULL"),
                }
            }
            dst.push(')');
        }
        (_, value) => return Err(mismatch(mapping, value)),
    }

    Ok(())
}

fn render_float(dst: &mut String, v: f64) {
    if v.is_nan() {
        dst.push_str("CAST('NaN' AS FLOAT64)");
    } else if v == f64::INFINITY {
        dst.push_str("CAST('inf' AS FLOAT64)");
    } else if v == f64::NEG_INFINITY {
        dst.push_str("CAST('-inf' AS FLOAT64)");
    } else {
        // `Debug` is the shortest round-trip form and always carries a
        // fractional part or an exponent.
        write_display(dst, format!("{v:?}"));
    }
}

fn render_decimal(dst: &mut String, mapping: &TypeMapping, value: &Value) -> Result<()> {
    let digits = match value {
        Value::Decimal(v) => v.to_string(),
        Value::BigDecimal(v) => v.to_plain_string(),
        value => match value.as_i64() {
            Some(v) => v.to_string(),
            None => match value {
                Value::U64(v) => v.to_string(),
                _ => return Err(mismatch(mapping, value)),
            },
        },
    };

    dst.push_str(if mapping.is_big_numeric() {
        "BIGNUMERIC '"
    } else {
        "NUMERIC '"
    });
    dst.push_str(&digits);
    dst.push('\'');
    Ok(())
}

fn render_bytes(dst: &mut String, bytes: &[u8]) {
    dst.push_str("B'");
    for b in bytes {
        let _ = write!(dst, "\\x{b:02x}");
    }
    dst.push('\'');
}

fn write_display(dst: &mut String, v: impl std::fmt::Display) {
    let _ = write!(dst, "{v}");
}

fn mismatch(mapping: &TypeMapping, value: &Value) -> Error {
    Error::type_conversion(value.clone(), mapping.store_type())
}
