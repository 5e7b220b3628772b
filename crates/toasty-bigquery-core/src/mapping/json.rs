use crate::{
    stmt::{Type, Value, ValueRecord},
    Error, Result,
};

use serde_json::{Map, Number, Value as Json};

/// Serializes a host value into a JSON document.
pub(super) fn to_json(value: &Value) -> Result<Json> {
    Ok(match value {
        Value::Null => Json::Null,
        Value::Bool(v) => Json::Bool(*v),
        Value::I8(v) => Json::from(*v),
        Value::I16(v) => Json::from(*v),
        Value::I32(v) => Json::from(*v),
        Value::I64(v) => Json::from(*v),
        Value::U8(v) => Json::from(*v),
        Value::U16(v) => Json::from(*v),
        Value::U32(v) => Json::from(*v),
        Value::U64(v) => Json::from(*v),
        Value::F32(v) => float(f64::from(*v), value)?,
        Value::F64(v) => float(*v, value)?,
        // Decimals keep their exact digits as strings
        Value::Decimal(v) => Json::String(v.to_string()),
        Value::BigDecimal(v) => Json::String(v.to_plain_string()),
        Value::String(v) => Json::String(v.clone()),
        Value::Char(v) => Json::String(v.to_string()),
        Value::Bytes(v) => Json::Array(v.iter().map(|b| Json::from(*b)).collect()),
        Value::Uuid(v) => Json::String(v.hyphenated().to_string()),
        Value::Date(v) => Json::String(v.to_string()),
        Value::Time(v) => Json::String(v.to_string()),
        Value::DateTime(v) => Json::String(v.to_string()),
        Value::Timestamp(v) => Json::String(v.to_string()),
        Value::Zoned(v) => Json::String(v.timestamp().to_string()),
        Value::Json(v) => v.clone(),
        Value::Geography(v) => Json::String(v.as_wkt().to_string()),
        Value::Enum(v) => Json::from(v.discriminant),
        Value::List(items) => Json::Array(items.iter().map(to_json).collect::<Result<_>>()?),
        Value::Record(record) => {
            let mut map = Map::new();
            for (name, value) in record.iter() {
                map.insert(name.to_string(), to_json(value)?);
            }
            Json::Object(map)
        }
        Value::MultiArray(value) => {
            return Err(Error::unsupported_shape(format!(
                "rank {} array cannot be stored as JSON",
                value.rank()
            )))
        }
    })
}

fn float(v: f64, value: &Value) -> Result<Json> {
    match Number::from_f64(v) {
        Some(number) => Ok(Json::Number(number)),
        None => Err(Error::type_conversion(value.clone(), "JSON number")),
    }
}

/// Reads a JSON document back into the shape described by `ty`.
///
/// Members absent from a JSON object are left out of the resulting record;
/// types without a JSON-native form stay as `Value::Json`.
pub(super) fn from_json(json: Json, ty: &Type) -> Result<Value> {
    Ok(match (ty.unwrap_option(), json) {
        (_, Json::Null) => Value::Null,
        (Type::Bool, Json::Bool(v)) => Value::Bool(v),
        (Type::String, Json::String(v)) => Value::String(v),
        (Type::F32 | Type::F64, Json::Number(v)) => match v.as_f64() {
            Some(v) => Value::F64(v),
            None => return Err(Error::type_conversion(Value::Json(Json::Number(v)), "f64")),
        },
        (ty, Json::Number(v)) if ty.is_integer() => match integer(&v, ty) {
            Some(value) => value,
            None => return Err(Error::type_conversion(Value::Json(Json::Number(v)), format!("{ty:?}"))),
        },
        (Type::List(list), Json::Array(items)) => Value::List(
            items
                .into_iter()
                .map(|item| from_json(item, &list.element))
                .collect::<Result<_>>()?,
        ),
        (Type::Record(record), Json::Object(mut map)) => {
            let mut ret = ValueRecord::new();
            for member in &record.members {
                let key = map
                    .keys()
                    .find(|key| key.eq_ignore_ascii_case(&member.name))
                    .cloned();
                if let Some(value) = key.and_then(|key| map.remove(&key)) {
                    ret.insert(member.name.clone(), from_json(value, &member.ty)?);
                }
            }
            Value::Record(ret)
        }
        (_, json) => Value::Json(json),
    })
}

/// Reads an integer at the declared width.
fn integer(number: &Number, ty: &Type) -> Option<Value> {
    Some(match ty {
        Type::I8 => Value::I8(number.as_i64()?.try_into().ok()?),
        Type::I16 => Value::I16(number.as_i64()?.try_into().ok()?),
        Type::I32 => Value::I32(number.as_i64()?.try_into().ok()?),
        Type::I64 => Value::I64(number.as_i64()?),
        Type::U8 => Value::U8(number.as_u64()?.try_into().ok()?),
        Type::U16 => Value::U16(number.as_u64()?.try_into().ok()?),
        Type::U32 => Value::U32(number.as_u64()?.try_into().ok()?),
        Type::U64 => Value::U64(number.as_u64()?),
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stmt::TypeRecord;

    #[test]
    fn record_round_trip() {
        let ty = Type::record(
            TypeRecord::new("Tag")
                .member("Name", Type::String)
                .member("Weight", Type::I32),
        );
        let value = Value::Record(ValueRecord::new().with("Name", "x").with("Weight", 3));

        let json = to_json(&value).unwrap();
        assert_eq!(json, serde_json::json!({ "Name": "x", "Weight": 3 }));
        assert_eq!(from_json(json, &ty).unwrap(), value);
    }

    #[test]
    fn nan_is_not_json() {
        assert!(to_json(&Value::F64(f64::NAN)).is_err());
    }
}
