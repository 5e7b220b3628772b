use crate::stmt::{Type, Value};

use std::hash::{Hash, Hasher};

/// Structural equality, hashing and snapshotting for mapped values.
///
/// Change tracking compares a stored snapshot against the current value.
/// Snapshots must be deep copies, and composite values must compare element
/// by element with their nested mapping's comparer.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueComparer {
    /// `PartialEq` semantics
    Default,

    /// Floats: `NaN` equals `NaN`, hashing uses the bit pattern
    Float,

    /// Element-wise comparison of lists
    Sequence(Box<ValueComparer>),

    /// Member-wise comparison of records, keyed by backing member name
    Record(Vec<(String, ValueComparer)>),

    /// JSON documents compare structurally
    Json,
}

impl ValueComparer {
    /// Picks the comparer for a host type.
    pub fn for_ty(ty: &Type) -> ValueComparer {
        match ty.unwrap_option() {
            Type::F32 | Type::F64 => ValueComparer::Float,
            Type::Json => ValueComparer::Json,
            Type::List(list) => ValueComparer::Sequence(Box::new(Self::for_ty(&list.element))),
            Type::Record(record) => ValueComparer::Record(
                record
                    .mapped_members()
                    .map(|member| (member.name.clone(), Self::for_ty(&member.ty)))
                    .collect(),
            ),
            _ => ValueComparer::Default,
        }
    }

    pub fn equals(&self, a: &Value, b: &Value) -> bool {
        match (self, a, b) {
            (_, Value::Null, Value::Null) => true,
            (_, Value::Null, _) | (_, _, Value::Null) => false,
            (Self::Float, a, b) => match (float_bits(a), float_bits(b)) {
                (Some(a), Some(b)) => a == b,
                _ => a == b,
            },
            (Self::Sequence(element), Value::List(a), Value::List(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(a, b)| element.equals(a, b))
            }
            (Self::Record(members), Value::Record(a), Value::Record(b)) => {
                members.iter().all(|(name, comparer)| {
                    match (a.get_ignore_case(name), b.get_ignore_case(name)) {
                        (Some(a), Some(b)) => comparer.equals(a, b),
                        (None, None) => true,
                        _ => false,
                    }
                })
            }
            _ => a == b,
        }
    }

    pub fn hash<H: Hasher>(&self, value: &Value, state: &mut H) {
        match (self, value) {
            (Self::Sequence(element), Value::List(items)) => {
                items.len().hash(state);
                for item in items {
                    element.hash(item, state);
                }
            }
            (Self::Record(members), Value::Record(record)) => {
                for (name, comparer) in members {
                    match record.get_ignore_case(name) {
                        Some(value) => comparer.hash(value, state),
                        None => Value::Null.hash_default(state),
                    }
                }
            }
            _ => value.hash_default(state),
        }
    }

    /// Produces a deep copy of `value` that shares nothing with it.
    pub fn snapshot(&self, value: &Value) -> Value {
        match (self, value) {
            (Self::Sequence(element), Value::List(items)) => {
                Value::List(items.iter().map(|item| element.snapshot(item)).collect())
            }
            _ => value.clone(),
        }
    }
}

/// Canonical bits for floats so that `NaN == NaN` and `-0.0 == 0.0`.
fn float_bits(value: &Value) -> Option<u64> {
    let v = match *value {
        Value::F32(v) => f64::from(v),
        Value::F64(v) => v,
        _ => return None,
    };

    Some(if v.is_nan() {
        f64::NAN.to_bits()
    } else if v == 0.0 {
        0
    } else {
        v.to_bits()
    })
}

impl Value {
    fn hash_default<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);

        match self {
            Value::Null => {}
            Value::Bool(v) => v.hash(state),
            Value::I8(v) => v.hash(state),
            Value::I16(v) => v.hash(state),
            Value::I32(v) => v.hash(state),
            Value::I64(v) => v.hash(state),
            Value::U8(v) => v.hash(state),
            Value::U16(v) => v.hash(state),
            Value::U32(v) => v.hash(state),
            Value::U64(v) => v.hash(state),
            Value::F32(_) | Value::F64(_) => float_bits(self).hash(state),
            Value::Decimal(v) => v.normalize().hash(state),
            Value::BigDecimal(v) => v.normalized().hash(state),
            Value::String(v) => v.hash(state),
            Value::Char(v) => v.hash(state),
            Value::Bytes(v) => v.hash(state),
            Value::Uuid(v) => v.hash(state),
            Value::Date(v) => v.hash(state),
            Value::Time(v) => v.hash(state),
            Value::DateTime(v) => v.hash(state),
            Value::Timestamp(v) => v.hash(state),
            Value::Zoned(v) => v.timestamp().hash(state),
            Value::Json(v) => v.to_string().hash(state),
            Value::Geography(v) => v.hash(state),
            Value::Enum(v) => v.hash(state),
            Value::List(items) => {
                items.len().hash(state);
                for item in items {
                    item.hash_default(state);
                }
            }
            Value::MultiArray(value) => {
                value.lengths.hash(state);
                for item in &value.items {
                    item.hash_default(state);
                }
            }
            Value::Record(record) => {
                for (name, value) in record.iter() {
                    name.hash(state);
                    value.hash_default(state);
                }
            }
        }
    }
}
